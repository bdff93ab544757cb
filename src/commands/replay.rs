//! Replay command
//!
//! Plays a scripted list of moves against a deal and returns every step.

use crate::config::Deal;
use crate::core::notation::parse_command;
use crate::core::{Command, Number};
use crate::game::{
    Collaborator, FinalChoiceError, GameState, MoveError, Outcome, Step, play,
};
use std::collections::VecDeque;

/// Configuration for a replay
pub struct ReplayConfig {
    pub moves: Vec<String>,
    /// Answer to give if the script ends with several numbers left
    pub final_choice: Option<Number>,
}

/// What happened to one scripted line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayEvent {
    Applied(Step),
    Rejected { input: String, reason: String },
}

/// Result of replaying a script
pub struct ReplayResult {
    pub deal: Deal,
    pub events: Vec<ReplayEvent>,
    /// Numbers left when the game ended
    pub remaining: Vec<Number>,
    pub outcome: Outcome,
}

/// Feeds the engine from a list of lines
struct Script {
    lines: VecDeque<String>,
    last_input: Option<String>,
    final_choice: Option<Number>,
    events: Vec<ReplayEvent>,
}

impl Script {
    fn reject(&mut self, input: String, reason: String) {
        self.events.push(ReplayEvent::Rejected { input, reason });
    }
}

impl Collaborator for Script {
    type Error = String;

    fn request_move(
        &mut self,
        _available: &[Number],
        rejection: Option<&MoveError>,
    ) -> Result<Command, String> {
        if let (Some(err), Some(input)) = (rejection, self.last_input.take()) {
            self.reject(input, err.to_string());
        }

        while let Some(line) = self.lines.pop_front() {
            match parse_command(&line) {
                Ok(command) => {
                    self.last_input = Some(line);
                    return Ok(command);
                }
                Err(err) => self.reject(line, err.to_string()),
            }
        }
        Ok(Command::Stop)
    }

    fn request_final_choice(
        &mut self,
        available: &[Number],
        rejection: Option<&FinalChoiceError>,
    ) -> Result<Vec<Number>, String> {
        if let Some(err) = rejection {
            return Err(format!("Final choice rejected: {err}"));
        }
        self.final_choice.map(|choice| vec![choice]).ok_or_else(|| {
            format!(
                "Script ended with {} numbers left; pass a final choice",
                available.len()
            )
        })
    }

    fn report_state(&mut self, _state: &GameState) {}

    fn report_step(&mut self, step: &Step) {
        self.last_input = None;
        self.events.push(ReplayEvent::Applied(*step));
    }

    fn report_outcome(&mut self, _outcome: &Outcome) {}
}

/// Replay `config.moves` against `deal`
///
/// Unreadable or illegal lines are recorded and skipped. When the script runs
/// out the game is stopped. Lines left over once the game has ended, after a
/// `stop` or a win, are recorded as rejected.
///
/// # Errors
///
/// Returns an error if the game stops with several numbers left and no valid
/// final choice was configured.
pub fn replay_moves(deal: Deal, config: ReplayConfig) -> Result<ReplayResult, String> {
    let mut game = deal.clone().into_game();
    let mut script = Script {
        lines: config.moves.into(),
        last_input: None,
        final_choice: config.final_choice,
        events: Vec::new(),
    };

    let outcome = play(&mut game, &mut script)?;

    let unplayed = std::mem::take(&mut script.lines);
    for line in unplayed {
        script.reject(line, "Not played: the game was already over".to_string());
    }

    Ok(ReplayResult {
        deal,
        events: script.events,
        remaining: game.state().available_sorted(),
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::Ending;

    fn deal(tiles: Vec<Number>, target: Number) -> Deal {
        GameConfig {
            seed: Some(0),
            tiles: Some(tiles),
            target: Some(target),
        }
        .deal()
        .unwrap()
    }

    fn config(moves: &[&str], final_choice: Option<Number>) -> ReplayConfig {
        ReplayConfig {
            moves: moves.iter().map(ToString::to_string).collect(),
            final_choice,
        }
    }

    #[test]
    fn replay_reaches_target() {
        let result = replay_moves(
            deal(vec![25, 8, 7, 3, 3, 1], 414),
            config(&["8 x 3", "24 - 1", "25 - 7", "18 x 23"], None),
        )
        .unwrap();

        assert!(result.outcome.is_exact());
        assert_eq!(result.events.len(), 4);
        assert_eq!(result.remaining, vec![3, 414]);
    }

    #[test]
    fn rejected_lines_are_recorded_and_skipped() {
        let result = replay_moves(
            deal(vec![25, 8, 7, 3, 3, 1], 414),
            config(&["7 / 2", "hello", "9 + 1", "7 x 3"], Some(21)),
        )
        .unwrap();

        let rejected: Vec<&str> = result
            .events
            .iter()
            .filter_map(|event| match event {
                ReplayEvent::Rejected { input, .. } => Some(input.as_str()),
                ReplayEvent::Applied(_) => None,
            })
            .collect();
        assert_eq!(rejected, vec!["7 / 2", "hello", "9 + 1"]);
        assert_eq!(result.outcome.final_number(), Ok(21));
        assert_eq!(result.outcome.ending(), Ending::Stopped);
    }

    #[test]
    fn replay_is_deterministic() {
        let moves = ["10 x 9", "90 + 75", "165 - 4", "161 x 2"];
        let run = || {
            replay_moves(
                deal(vec![10, 9, 75, 4, 2, 1], 500),
                config(&moves, Some(322)),
            )
            .unwrap()
            .remaining
        };
        assert_eq!(run(), run());
        assert_eq!(run(), vec![1, 322]);
    }

    #[test]
    fn lines_after_stop_are_recorded() {
        let result = replay_moves(
            deal(vec![25, 8, 7, 3, 3, 1], 414),
            config(&["7 x 3", "stop", "25 - 21", "8 + 1"], Some(25)),
        )
        .unwrap();

        assert_eq!(result.outcome.final_number(), Ok(25));
        assert_eq!(result.remaining, vec![1, 3, 8, 21, 25]);
        let ReplayEvent::Rejected { input, reason } = &result.events[1] else {
            panic!("expected a rejected line, got {:?}", result.events[1]);
        };
        assert_eq!(input, "25 - 21");
        assert!(reason.contains("already over"));
        assert_eq!(result.events.len(), 3);
    }

    #[test]
    fn lines_after_a_win_are_recorded() {
        let result = replay_moves(
            deal(vec![100, 4, 7, 3, 3, 1], 400),
            config(&["100 x 4", "7 + 3"], None),
        )
        .unwrap();

        assert!(result.outcome.is_exact());
        assert!(matches!(
            &result.events[..],
            [ReplayEvent::Applied(_), ReplayEvent::Rejected { input, .. }] if input == "7 + 3"
        ));
    }

    #[test]
    fn missing_final_choice_is_an_error() {
        let result = replay_moves(deal(vec![25, 8, 7, 3, 3, 1], 414), config(&[], None));
        assert!(result.is_err());
    }

    #[test]
    fn invalid_final_choice_is_an_error() {
        let result = replay_moves(
            deal(vec![25, 8, 7, 3, 3, 1], 414),
            config(&[], Some(99)),
        );
        assert!(result.is_err());
    }
}
