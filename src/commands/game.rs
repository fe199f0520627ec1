//! Classic game mode
//!
//! The program draws a random secret with four distinct digits; the user
//! guesses it and gets bulls/cows back after every try.

use crate::core::{Code, CodeError, Feedback};
use crate::output::formatters::feedback_glyphs;
use colored::Colorize;
use rand::seq::SliceRandom;
use std::io::{self, Write};

/// Draw a secret code with four distinct digits
#[must_use]
pub fn random_secret() -> Code {
    let mut digits: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    digits.shuffle(&mut rand::rng());

    Code::from_digits([digits[0], digits[1], digits[2], digits[3]])
        .expect("shuffled digits are distinct")
}

/// Explain why a guess was rejected, mirroring code validation
fn rejection_message(error: &CodeError) -> String {
    match error {
        CodeError::InvalidLength(_) => "Invalid guess: the number must be 4 digits long.".into(),
        CodeError::NonDigit => "Invalid guess: enter digits only.".into(),
        CodeError::RepeatedDigit => "Invalid guess: all digits must be distinct.".into(),
    }
}

/// Run the classic game loop
///
/// # Errors
///
/// Returns an error on I/O failure reading user input.
pub fn run_game() -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Bulls and Cows - Classic Game                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I picked a 4-digit number with all digits distinct.");
    println!("Guess it! Bulls = right digit, right place; cows = right digit, wrong place.");
    println!("Commands: 'quit' to give up and reveal the number\n");

    let secret = random_secret();
    let mut history: Vec<(Code, Feedback)> = Vec::new();

    loop {
        let input = get_user_input("Your guess")?;

        if matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit") {
            println!("\nThe number was {}. Better luck next time!\n", secret.to_string().bold());
            return Ok(());
        }

        let guess = match Code::new(&input) {
            Ok(guess) => guess,
            Err(e) => {
                println!("{}\n", rejection_message(&e).red());
                continue;
            }
        };

        let feedback = Feedback::score(&guess, &secret);
        history.push((guess, feedback));

        if feedback.is_perfect() {
            println!("\n{}", "═".repeat(64).bright_cyan());
            println!(
                "{}",
                format!("    🎉 Correct! The number was {secret} 🎉")
                    .bright_green()
                    .bold()
            );
            println!("{}", "═".repeat(64).bright_cyan());

            println!(
                "\n  You won in {} {}",
                history.len().to_string().bright_cyan().bold(),
                if history.len() == 1 { "guess" } else { "guesses" }
            );
            print_history(&history);
            return Ok(());
        }

        println!(
            "  {} {}  ({} bulls, {} cows)\n",
            feedback_glyphs(feedback),
            feedback.to_string().bold(),
            feedback.bulls(),
            feedback.cows()
        );
        print_history(&history);
    }
}

fn print_history(history: &[(Code, Feedback)]) {
    println!("  Guess history:");
    for (i, (guess, feedback)) in history.iter().enumerate() {
        println!(
            "    {}. {}  {}",
            (i + 1).to_string().bright_black(),
            guess,
            feedback
        );
    }
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_secret_is_valid() {
        for _ in 0..50 {
            let secret = random_secret();
            let digits = secret.digits();

            // from_digits already enforces distinctness; confirm the draw varies structure
            for i in 0..4 {
                for j in (i + 1)..4 {
                    assert_ne!(digits[i], digits[j]);
                }
            }
        }
    }

    #[test]
    fn rejection_messages_match_error_kinds() {
        assert!(rejection_message(&CodeError::InvalidLength(3)).contains("4 digits"));
        assert!(rejection_message(&CodeError::NonDigit).contains("digits only"));
        assert!(rejection_message(&CodeError::RepeatedDigit).contains("distinct"));
    }
}
