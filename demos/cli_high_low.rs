//! CLI high-low example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use hilo::{Card, Color, Game, GameOptions, Guess, Snapshot};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("High-low CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut game = new_game(&mut rng);

    loop {
        let snapshot = game.snapshot();
        print_table(&snapshot);
        println!("{}", format_actions(&snapshot));

        match prompt_line("Action: ").as_str() {
            "p" | "play" if snapshot.can_play() => {
                game.play_next_card();
            }
            "n" | "new" => {
                game = new_game(&mut rng);
                println!("New game.");
            }
            "q" | "quit" | "" => {
                println!("Goodbye.");
                break;
            }
            input if snapshot.can_play() => match input.parse::<Guess>() {
                Ok(guess) => {
                    game.submit_guess(guess);
                }
                Err(err) => println!("{err}"),
            },
            _ => println!("Unknown action."),
        }
    }
}

fn new_game(rng: &mut ChaCha8Rng) -> Game {
    Game::from_rng(GameOptions::new_game(), rng)
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(snapshot: &Snapshot) {
    println!("\n{} right guess(es)", snapshot.correct_guesses);
    match snapshot.current_card {
        Some(card) => println!("Card: {}", format_card(card)),
        None => println!("Card: (none)"),
    }
    if let Some(guess) = snapshot.pending_guess {
        println!("Current guess: {guess}");
    }
    println!("Deck: {} cards remaining", snapshot.cards_remaining);
    if snapshot.is_done() {
        println!("Game over.");
    }
    println!();
}

fn format_actions(snapshot: &Snapshot) -> String {
    let mut parts = Vec::new();
    if snapshot.can_play() {
        for guess in Guess::ALL {
            parts.push(colorize(&format_guess_action(guess), "32"));
        }
        parts.push(colorize("[p]lay card", "32"));
    }
    parts.push(colorize("[n]ew game", "36"));
    parts.push(colorize("[q]uit", "90"));
    format!("Actions: {}", parts.join(" "))
}

fn format_guess_action(guess: Guess) -> String {
    let label = guess.label();
    let (key, rest) = label.split_at(1);
    format!("[{}]{rest}", key.to_lowercase())
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: Card) -> String {
    let code = match card.color() {
        Color::Red => "31",
        Color::Black => "37",
    };
    colorize(&card.to_string(), code)
}
