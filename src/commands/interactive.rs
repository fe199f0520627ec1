//! Interactive solver mode
//!
//! The program guesses; the user thinks of a number and answers each guess
//! with bulls and cows counts.

use crate::core::{Code, Feedback};
use crate::output::formatters::feedback_glyphs;
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Session, SessionState, StrategyType};
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive solver loop
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// solver cannot provide a valid guess.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_interactive(strategy_name: &str) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Bulls and Cows - Interactive Solver               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Think of a 4-digit number with all digits distinct.");
    println!("I'll guess it; after each guess tell me the score:\n");
    println!("  - bulls: digits correct in value and position");
    println!("  - cows:  digits correct in value but wrong position");
    println!("  - enter the two counts, e.g. '1 2' (or '12')\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last answer\n");

    // Rounds drive undo: the session is rebuilt by replay
    let mut rounds: Vec<(Code, Feedback)> = Vec::new();
    let mut session = rebuild_session(strategy_name, &rounds);
    let mut turn = 1;

    loop {
        if session.state() == SessionState::Contradiction {
            println!("\n❌ No candidates remain! One of the answers must be wrong.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");

            match get_user_input("Command")?.as_str() {
                "undo" => {
                    if rounds.pop().is_some() {
                        turn -= 1;
                        session = rebuild_session(strategy_name, &rounds);
                        println!("✓ Undone! Back to turn {turn}\n");
                    } else {
                        println!("Nothing to undo!\n");
                    }
                }
                "new" => {
                    rounds.clear();
                    session = rebuild_session(strategy_name, &rounds);
                    turn = 1;
                    println!("\n🔄 New game started!\n");
                }
                _ => {}
            }
            continue;
        }

        let remaining = session.remaining();
        let guess = session.next_guess().map_err(|e| e.to_string())?;

        println!("────────────────────────────────────────────────────────────");
        println!("Turn {turn}: {remaining} candidates remaining");
        println!("────────────────────────────────────────────────────────────");

        let metrics = calculate_metrics(&guess, session.candidates());

        println!("\n📊 My guess: {}", guess.to_string().bold());
        println!("   Entropy:          {:.3} bits", metrics.entropy);
        println!(
            "   Expected remain:  {:.1} candidates",
            metrics.expected_remaining
        );
        println!(
            "   Worst case:       {} candidates\n",
            metrics.max_partition
        );

        if remaining <= 10 {
            println!("Remaining candidates:");
            for candidate in session.candidates() {
                println!("  • {candidate}");
            }
            println!();
        }

        // Get the score for this guess
        let feedback = loop {
            let input = get_user_input("Bulls and cows (e.g. '1 2', or command)")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    rounds.clear();
                    session = rebuild_session(strategy_name, &rounds);
                    turn = 0; // Will be incremented to 1
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                "undo" | "u" => {
                    if rounds.pop().is_some() {
                        turn -= 2; // Incremented back below
                        session = rebuild_session(strategy_name, &rounds);
                        println!("✓ Undone!\n");
                        break None;
                    }
                    println!("Nothing to undo!\n");
                }
                "win" | "correct" | "yes" => {
                    break Some(Feedback::PERFECT);
                }
                _ => {
                    if let Some(feedback) = Feedback::from_str(&input) {
                        break Some(feedback);
                    }
                    println!("❌ Invalid score! Bulls 0-4, cows up to 4 minus bulls.\n");
                }
            }
        };

        if let Some(feedback) = feedback {
            rounds.push((guess, feedback));
            let state = session.apply_feedback(guess, feedback);

            if state == SessionState::Solved {
                println!("\n{}", "═".repeat(64).bright_cyan());
                println!(
                    "{}",
                    format!("    🎉 Got it! Your number is {guess} 🎉")
                        .bright_green()
                        .bold()
                );
                println!("{}", "═".repeat(64).bright_cyan());

                println!(
                    "\n  Solved in {} {}",
                    turn.to_string().bright_cyan().bold(),
                    if turn == 1 { "guess" } else { "guesses" }
                );

                println!("\n  Guess history:");
                for (i, (guess, feedback)) in rounds.iter().enumerate() {
                    println!(
                        "    {}. {} {} ({})",
                        (i + 1).to_string().bright_black(),
                        guess.to_string().bright_white().bold(),
                        feedback_glyphs(*feedback),
                        feedback
                    );
                }
                println!();

                match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                    "yes" | "y" => {
                        rounds.clear();
                        session = rebuild_session(strategy_name, &rounds);
                        turn = 0;
                        println!("\n🔄 New game started!\n");
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
        }

        turn += 1;
    }
}

/// Replay recorded rounds into a fresh session
fn rebuild_session(strategy_name: &str, rounds: &[(Code, Feedback)]) -> Session<StrategyType> {
    let mut session = Session::with_strategy(StrategyType::from_name(strategy_name));
    for &(guess, feedback) in rounds {
        session.apply_feedback(guess, feedback);
    }
    session
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
