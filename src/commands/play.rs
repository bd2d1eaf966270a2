//! Interactive CLI mode
//!
//! Suggests a guess each turn, reads the game's feedback and narrows the
//! dictionary until the word is found.

use crate::core::Feedback;
use crate::output::formatters::format_word_list;
use crate::solver::{Recommendation, Session};
use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// How an interactive game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// All-correct feedback on this turn
    Solved { turns: usize },
    /// The user quit, or input ran out
    Quit,
}

/// What the user typed at the feedback prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Feedback(Feedback),
    List,
    NewGame,
    Quit,
}

fn parse_command(input: &str) -> Result<Command, String> {
    match input.trim().to_ascii_lowercase().as_str() {
        "list" | "l" => Ok(Command::List),
        "new" | "n" => Ok(Command::NewGame),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        other => other
            .parse()
            .map(Command::Feedback)
            .map_err(|e| e.to_string()),
    }
}

/// Run the interactive solver, reading commands from `reader`
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_play<R: BufRead>(session: &mut Session, mut reader: R) -> Result<PlayOutcome> {
    print_instructions();

    loop {
        println!(
            "There are {} words left in the dictionary",
            session.remaining_count()
        );

        let Some(rec) = compute_guess(session) else {
            println!(
                "\n{}",
                "No candidates remain! Your feedback may be incorrect.".red()
            );
            println!("Type 'new' to start over or 'quit' to exit.\n");
            match read_command(&mut reader)? {
                Some(Ok(Command::NewGame)) => {
                    session.reset();
                    println!("\nNew game started!\n");
                    continue;
                }
                Some(Ok(Command::Quit)) | None => return Ok(PlayOutcome::Quit),
                Some(Err(message)) => {
                    println!("{}", input_error(&message));
                    continue;
                }
                Some(Ok(_)) => continue,
            }
        };

        println!(
            "This word is guaranteed to reduce dictionary size by at least {}",
            rec.gain.to_string().bright_yellow()
        );
        println!("Submit this word: {}", rec.entry.to_string().bright_white().bold());
        let guess = rec.entry.clone();

        loop {
            match read_command(&mut reader)? {
                None | Some(Ok(Command::Quit)) => return Ok(PlayOutcome::Quit),
                Some(Ok(Command::List)) => {
                    println!(
                        "The remaining words in the dictionary are: {}",
                        format_word_list(session.remaining())
                    );
                }
                Some(Ok(Command::NewGame)) => {
                    session.reset();
                    println!("\nNew game started!\n");
                    break;
                }
                Some(Ok(Command::Feedback(feedback))) => {
                    let turns = session.turn();
                    session.apply_feedback(&guess, &feedback);
                    if feedback.is_solved() {
                        println!(
                            "\n{} Solved in {} {}\n",
                            "✓".green().bold(),
                            turns.to_string().bright_cyan().bold(),
                            if turns == 1 { "guess" } else { "guesses" }
                        );
                        return Ok(PlayOutcome::Solved { turns });
                    }
                    break;
                }
                Some(Err(message)) => {
                    println!("{}", input_error(&message));
                }
            }
        }
    }
}

/// Line shown when a typed command cannot be understood
fn input_error(message: &str) -> String {
    format!("{} {message}", "ERROR:".red())
}

fn print_instructions() {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!("{}", "  Wordle Solver - Worst-Case Minimax".bright_green().bold());
    println!("{}", "═".repeat(70).bright_cyan());
    println!(
        "\nEach round you will be presented with a word to submit. Then enter the\nresult for each letter:\n"
    );
    println!("    O       The letter is in the word and in the correct location");
    println!("    -       The letter is in the word, but not in the correct location");
    println!("    X       The letter is not in the word");
    println!("\nCommands: 'list' shows the remaining words, 'new' starts over, 'quit' exits\n");
}

/// Run selection behind a spinner
fn compute_guess(session: &Session) -> Option<Recommendation<'_>> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!(
        "Evaluating {} candidates on {} workers",
        session.remaining_count(),
        session.config().workers
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let rec = session.next_guess();
    spinner.finish_and_clear();
    rec
}

/// Prompt and read one line; `None` at end of input
fn read_command<R: BufRead>(reader: &mut R) -> Result<Option<Result<Command, String>>> {
    print!("Result:           ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = reader
        .read_line(&mut input)
        .context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(parse_command(&input)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Entry;
    use crate::dictionary::Dictionary;
    use crate::solver::SolverConfig;
    use std::io::Cursor;

    fn session(words: &[&str]) -> Session {
        let entries = words.iter().map(|w| Entry::new(w).unwrap()).collect();
        Session::new(Dictionary::new(entries), SolverConfig::new(Some(2)))
    }

    #[test]
    fn parse_command_variants() {
        assert_eq!(parse_command("LIST\n"), Ok(Command::List));
        assert_eq!(parse_command("  new "), Ok(Command::NewGame));
        assert_eq!(parse_command("Quit"), Ok(Command::Quit));
        assert_eq!(
            parse_command("xo-xo"),
            Ok(Command::Feedback("XO-XO".parse().unwrap()))
        );
        assert!(parse_command("xo-x").is_err());
        assert!(parse_command("hello").is_err());
    }

    #[test]
    fn immediate_quit() {
        let mut session = session(&["crane", "slate", "pilot"]);
        let outcome = run_play(&mut session, Cursor::new("quit\n")).unwrap();
        assert_eq!(outcome, PlayOutcome::Quit);
    }

    #[test]
    fn end_of_input_quits() {
        let mut session = session(&["crane", "slate", "pilot"]);
        let outcome = run_play(&mut session, Cursor::new("")).unwrap();
        assert_eq!(outcome, PlayOutcome::Quit);
    }

    #[test]
    fn solved_on_first_guess() {
        let mut session = session(&["crane", "slate", "pilot"]);
        let outcome = run_play(&mut session, Cursor::new("ooooo\n")).unwrap();
        assert_eq!(outcome, PlayOutcome::Solved { turns: 1 });
        assert_eq!(session.remaining_count(), 1);
    }

    #[test]
    fn invalid_feedback_and_list_are_retried() {
        // First suggestion is CRANE (all tie, first wins); target PILOT
        let mut session = session(&["crane", "slate", "pilot"]);
        let input = "bad\nlist\nXXXXX\nOOOOO\n";
        let outcome = run_play(&mut session, Cursor::new(input)).unwrap();
        assert_eq!(outcome, PlayOutcome::Solved { turns: 2 });
        assert_eq!(session.remaining()[0].to_string(), "PILOT");
    }

    #[test]
    fn exhausted_dictionary_allows_new_game() {
        let mut session = session(&["crane", "slate", "pilot"]);
        // CRANE all-misplaced rules out everything, then start over and quit
        let input = "-----\nnew\nquit\n";
        let outcome = run_play(&mut session, Cursor::new(input)).unwrap();
        assert_eq!(outcome, PlayOutcome::Quit);
        assert_eq!(session.remaining_count(), 3);
    }

    #[test]
    fn bad_input_after_exhaustion_is_reported_and_retried() {
        let mut session = session(&["crane", "slate", "pilot"]);
        let input = "-----
xo
list
new
ooooo
";
        let outcome = run_play(&mut session, Cursor::new(input)).unwrap();
        assert_eq!(outcome, PlayOutcome::Solved { turns: 1 });

        let message = parse_command("xo").unwrap_err();
        let line = input_error(&message);
        assert!(line.contains("ERROR:"));
        assert!(line.ends_with(&message));
    }
}
