//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjround::{
    BetError, Card, Decision, DisplaySink, GameSession, HighScoreBoard, JsonFileRepository,
    RoundResult, RoundState, SessionOptions, Suit, TableView, parse_bet, parse_decision,
};

const SCORES_FILE: &str = "blackjack_scores.json";

fn main() {
    let board = match JsonFileRepository::open(SCORES_FILE).and_then(HighScoreBoard::open) {
        Ok(board) => board,
        Err(err) => {
            println!("Could not open the high-score table: {err}");
            return;
        }
    };

    loop {
        println!("\nBlack Jack Main Menu");
        println!("1. New Game");
        println!("2. View High Scores");
        println!("3. Exit");

        let Some(choice) = prompt_line("Enter your choice: ") else {
            break;
        };
        match choice.as_str() {
            "1" => play_session(&board),
            "2" => print_high_scores(&board),
            "3" | "q" => {
                println!("Thank you for playing!");
                break;
            }
            _ => println!("Invalid choice. Please enter 1, 2, or 3."),
        }
    }
}

fn play_session(board: &HighScoreBoard<JsonFileRepository>) {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut session = GameSession::new(SessionOptions::default(), seed, board);

    println!("You have {} chips to start.", session.balance());
    println!("When you reach zero chips your game is over.");

    while !session.is_over() {
        println!("\nYour current chip balance is: {}", session.balance());
        let Some(bet) = prompt_bet(session.balance()) else {
            break;
        };

        let mut decide = |_: &TableView| loop {
            // stand once input is closed
            let Some(input) = prompt_line("Would you like to Hit or Stand? Enter 'h' or 's': ")
            else {
                return Decision::Stand;
            };
            if let Some(decision) = parse_decision(&input) {
                return decision;
            }
            println!("Invalid input, please enter either 'h' or 's'.");
        };

        if let Err(err) = session.play_round(bet, &mut decide, &mut Terminal) {
            println!("Round error: {err}");
            continue;
        }

        if session.is_over() {
            println!("You have no more chips. Game Over");
            break;
        }

        if !prompt_yes_no("Do you want to play another round? Enter 'y' or 'n': ") {
            break;
        }
    }

    println!("Your score is: {}", session.balance());
    if session.qualifies_for_high_score() {
        loop {
            let Some(name) = prompt_line("Enter your initials for the high score table: ") else {
                break;
            };
            match session.submit_high_score(&name) {
                Ok(_) => break,
                Err(err) => println!("Invalid input: {err}"),
            }
        }
        print_high_scores(board);
    } else {
        println!("Thanks for playing");
    }
}

fn prompt_bet(balance: usize) -> Option<usize> {
    loop {
        let input = prompt_line(&format!(
            "How many chips would you like to bet? (1-{balance}, q to quit) "
        ))?;
        if input == "q" || input == "quit" {
            return None;
        }
        match parse_bet(&input, balance) {
            Ok(bet) => return Some(bet),
            Err(BetError::InsufficientFunds) => {
                println!("You do not have enough chips, you have {balance} chips");
            }
            Err(err) => println!("{err}"),
        }
    }
}

fn prompt_yes_no(prompt: &str) -> bool {
    loop {
        match prompt_line(prompt).as_deref() {
            Some("y") => return true,
            Some("n") | None => return false,
            _ => println!("Invalid input. Please enter 'y' or 'n'."),
        }
    }
}

/// Reads one trimmed, lowercased line. `None` once stdin is closed.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn print_high_scores(board: &HighScoreBoard<JsonFileRepository>) {
    let top = board.top();
    if top.is_empty() {
        println!("There are no high scores yet.");
        return;
    }
    println!("\nHigh Scores:");
    for (rank, entry) in top.iter().enumerate() {
        println!("{}. {} - {}", rank + 1, entry.name, entry.score);
    }
}

struct Terminal;

impl DisplaySink for Terminal {
    fn show(&mut self, view: &TableView) {
        // nothing new to show between the natural check and settlement
        if matches!(view.state, RoundState::NaturalCheck | RoundState::Settlement) {
            return;
        }

        println!("\nDealer's Hand:");
        if view.hole_hidden {
            println!(" <card hidden>");
        }
        for card in &view.dealer_cards {
            println!(" {}", format_card(card));
        }
        if !view.hole_hidden {
            println!("Dealer's Hand = {}", view.dealer_total);
        }

        println!("\nPlayer's Hand (value: {}):", view.player_total);
        for card in &view.player_cards {
            println!(" {}", format_card(card));
        }
    }

    fn finished(&mut self, result: &RoundResult) {
        println!("\nRound Over - {}", colorize(result.outcome.message(), "1"));
        println!("Net: {:+}", result.net);
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
