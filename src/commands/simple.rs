//! Simple line-based game
//!
//! Plays the current puzzle on stdin/stdout without the TUI. Guesses are
//! typed as words; lines starting with `/` are commands.

use super::session::Session;
use crate::game::Outcome;
use crate::output::{print_board, print_game_stats, print_keyboard};
use crate::share::identifier;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

const HELP: &str = "Parancsok: /új (véletlen feladvány), /előző, /következő, /feladom, /megoszt, /kilép";

enum Command {
    Quit,
    NewRandom,
    ShiftDay(i64),
    GiveUp,
    Share,
    Help,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        let name = input.strip_prefix('/')?.trim().to_lowercase();
        Some(match name.as_str() {
            "kilép" | "q" | "quit" => Self::Quit,
            "új" | "n" | "new" => Self::NewRandom,
            "előző" | "prev" => Self::ShiftDay(-1),
            "következő" | "next" => Self::ShiftDay(1),
            "feladom" | "giveup" => Self::GiveUp,
            "megoszt" | "share" => Self::Share,
            _ => Self::Help,
        })
    }
}

/// Run the line-based game until the player quits or stdin closes
///
/// # Errors
///
/// Returns an error on I/O failure or when progress cannot be saved.
pub fn run_simple(session: &mut Session) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Szózat - Szókirakó                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("{}\n", HELP.bright_black());

    print_game(session);

    loop {
        let Some(input) = get_user_input("Tipp")? else {
            println!();
            return Ok(());
        };
        if input.is_empty() {
            continue;
        }

        match Command::parse(&input) {
            Some(Command::Quit) => {
                println!("\nViszlát!\n");
                return Ok(());
            }
            Some(Command::NewRandom) => {
                session.new_random_game();
                print_game(session);
            }
            Some(Command::ShiftDay(offset)) => {
                session.shift_day(offset);
                print_game(session);
            }
            Some(Command::GiveUp) => {
                if session.give_up() {
                    finish(session)?;
                } else {
                    println!("{}", "Nincs mit feladni.".yellow());
                }
            }
            Some(Command::Share) => {
                if session.game().is_over() {
                    println!("\n{}\n", session.share_text());
                } else {
                    println!("{}", "Megosztani a játék végén lehet.".yellow());
                }
            }
            Some(Command::Help) => println!("{}", HELP.bright_black()),
            None => match session.submit(&input) {
                Ok(_) => {
                    print_game(session);
                    if session.game().is_over() {
                        finish(session)?;
                    } else {
                        session.persist().context("Failed to save the game")?;
                    }
                }
                Err(e) => println!("{}", format!("❌ {e}").red()),
            },
        }
    }
}

fn print_game(session: &Session) {
    let game = session.game();
    let puzzle = identifier(game.puzzle(), session.config().epoch);
    println!(
        "{} {} {}",
        "Szózat".bright_cyan().bold(),
        puzzle,
        format!("({} betű, {} tipp maradt)", game.difficulty(), game.remaining_guesses())
            .bright_black()
    );
    if !game.puzzle().is_ready() {
        println!("{}", "A feladvány nem érhető el.".yellow());
        return;
    }
    println!();
    print_board(game);
    println!();
    print_keyboard(game);
    println!();
}

fn finish(session: &mut Session) -> Result<()> {
    let recorded = session.persist().context("Failed to save the statistics")?;
    let game = session.game();

    if let Some(message) = game.end_message() {
        let message = if game.outcome() == Outcome::Won {
            format!("🎉 {message}").bright_green().bold()
        } else {
            message.red().bold()
        };
        println!("\n{message}");
    }

    let stats = match recorded {
        Some(stats) => stats,
        None => session.stats().context("Failed to read the statistics")?,
    };
    print_game_stats(session.difficulty(), &stats);
    println!("\n{}\n", session.share_text());
    println!("{}", HELP.bright_black());
    Ok(())
}

/// Read one trimmed line, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;

    Ok((read > 0).then(|| input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_need_slash() {
        assert!(Command::parse("kilép").is_none());
        assert!(Command::parse("kalap").is_none());
        assert!(matches!(Command::parse("/kilép"), Some(Command::Quit)));
        assert!(matches!(Command::parse("/KÖVETKEZŐ"), Some(Command::ShiftDay(1))));
        assert!(matches!(Command::parse("/előző"), Some(Command::ShiftDay(-1))));
        assert!(matches!(Command::parse("/valami"), Some(Command::Help)));
    }
}
