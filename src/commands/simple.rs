//! Simple interactive CLI mode
//!
//! Line-based game on stdin/stdout, without TUI

use crate::config::Deal;
use crate::core::notation::{parse_choice, parse_command};
use crate::core::{Command, Number};
use crate::game::{
    Collaborator, FinalChoiceError, GameState, MoveError, Outcome, Step, play,
};
use crate::output::display::{
    print_banner, print_choice_prompt, print_choice_rejection, print_move_rejection, print_outcome,
    print_state, print_step,
};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A player typing at a terminal
pub struct TerminalPlayer<R> {
    input: R,
}

impl<R: BufRead> TerminalPlayer<R> {
    pub const fn new(input: R) -> Self {
        Self { input }
    }

    /// Read one trimmed line, or `None` at end of input
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, String> {
        print!("{prompt}: ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| e.to_string())?;
        if read == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead> Collaborator for TerminalPlayer<R> {
    type Error = String;

    fn request_move(
        &mut self,
        available: &[Number],
        rejection: Option<&MoveError>,
    ) -> Result<Command, String> {
        if let Some(err) = rejection {
            print_move_rejection(err, available);
        }

        loop {
            println!("\n- Operation (e.g. 25 + 3) or 'stop' to finish");
            let Some(line) = self.read_line("Your move")? else {
                return Ok(Command::Stop);
            };
            match parse_command(&line) {
                Ok(command) => return Ok(command),
                Err(err) => println!("\n{}", format!("❌ {err}").red()),
            }
        }
    }

    fn request_final_choice(
        &mut self,
        available: &[Number],
        rejection: Option<&FinalChoiceError>,
    ) -> Result<Vec<Number>, String> {
        match rejection {
            Some(err) => print_choice_rejection(err, available),
            None => print_choice_prompt(available),
        }

        loop {
            let line = self
                .read_line("Your final number")?
                .ok_or("Input closed before a final number was chosen")?;
            match parse_choice(&line) {
                Ok(values) => return Ok(values),
                Err(err) => println!("{}", format!("❌ {err}").red()),
            }
        }
    }

    fn report_state(&mut self, state: &GameState) {
        print_state(state);
    }

    fn report_step(&mut self, step: &Step) {
        print_step(step);
    }

    fn report_outcome(&mut self, outcome: &Outcome) {
        print_outcome(outcome);
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input, or if input
/// ends while a final number is being chosen.
pub fn run_simple<R: BufRead>(deal: Deal, input: R) -> Result<Outcome, String> {
    print_banner(&deal);

    let mut game = deal.into_game();
    let mut player = TerminalPlayer::new(input);
    play(&mut game, &mut player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::Ending;
    use std::io::Cursor;

    fn deal() -> Deal {
        GameConfig {
            seed: Some(0),
            tiles: Some(vec![25, 8, 7, 3, 3, 1]),
            target: Some(414),
        }
        .deal()
        .unwrap()
    }

    #[test]
    fn scripted_terminal_session_wins() {
        let input = Cursor::new("8 x 3\n24 - 1\nnonsense\n25-7\n18 × 23\n");
        let outcome = run_simple(deal(), input).unwrap();

        assert!(outcome.is_exact());
        assert_eq!(outcome.ending(), Ending::Won);
    }

    #[test]
    fn empty_line_stops_the_game() {
        let input = Cursor::new("7 x 3\n\n21\n");
        let outcome = run_simple(deal(), input).unwrap();

        assert_eq!(outcome.final_number(), Ok(21));
        assert_eq!(outcome.ending(), Ending::Stopped);
    }

    #[test]
    fn closed_input_during_final_choice_is_an_error() {
        let input = Cursor::new("stop\n");
        assert!(run_simple(deal(), input).is_err());
    }

    #[test]
    fn rejected_choices_are_asked_again() {
        let input = Cursor::new("stop\n9\n3 3\nabc\n25\n");
        let outcome = run_simple(deal(), input).unwrap();
        assert_eq!(outcome.final_number(), Ok(25));
    }
}
