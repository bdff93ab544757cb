//! Turn engine: validates moves, applies them and decides when the game ends
//!
//! The engine is a small state machine driven one request at a time:
//!
//! ```text
//! AwaitingMove --valid move--> AwaitingMove
//!              --move hits target--> Finished(Won)
//!              --stop, >1 number--> AwaitingFinalChoice --valid choice--> Finished(Stopped)
//!              --stop, <=1 number--> Finished(Stopped)
//!              --no tiles, <=1 result--> Finished(Forced)
//! ```
//!
//! Rejected requests never change the state.

use super::error::{FinalChoiceError, MoveError};
use super::outcome::{Ending, Outcome};
use super::state::{GameState, Step};
use crate::core::{Hand, Move, Number, Operator, Proposal, Target};
use tracing::{debug, info};

/// Where the game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove,
    /// The player stopped with several numbers left and must pick one
    AwaitingFinalChoice,
    Finished(Outcome),
}

/// Result of an accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    Applied(Step),
    /// The move produced the target; the game is over
    Won(Step, Outcome),
}

impl TurnResult {
    #[must_use]
    pub const fn step(&self) -> Step {
        match self {
            Self::Applied(step) | Self::Won(step, _) => *step,
        }
    }
}

/// One game: the owned state plus the phase it is in
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    phase: Phase,
}

impl Game {
    /// Start a game from a dealt hand
    #[must_use]
    pub fn new(hand: Hand, target: Target) -> Self {
        Self::from_numbers(hand.into_tiles(), target)
    }

    /// Start a game from any pool of numbers
    #[must_use]
    pub fn from_numbers(numbers: Vec<Number>, target: Target) -> Self {
        info!(tiles = ?numbers, %target, "game started");
        Self {
            state: GameState::new(numbers, target),
            phase: Phase::AwaitingMove,
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// End the game if no tiles are left and at most one result remains
    ///
    /// Checked at the start of every turn, before asking for a move.
    pub fn check_forced_end(&mut self) -> Option<Outcome> {
        if self.phase != Phase::AwaitingMove || !self.state.is_exhausted() {
            return None;
        }
        let final_number = self.state.results().first().copied();
        Some(self.finish(final_number, Ending::Forced))
    }

    /// Check a proposal against the current pool without applying it
    ///
    /// # Errors
    /// Returns `MoveError` if an operand is missing, a value is paired with
    /// itself without a second copy, or the operator is unknown.
    pub fn validate(&self, proposal: &Proposal) -> Result<Move, MoveError> {
        let Proposal { lhs, rhs, symbol } = proposal;

        if lhs == rhs {
            let available = self.state.multiplicity(*lhs);
            if available < 2 {
                return Err(MoveError::InsufficientMultiplicity {
                    operand: *lhs,
                    available,
                });
            }
        } else if let Some(&missing) = [lhs, rhs].into_iter().find(|&&n| !self.state.contains(n)) {
            return Err(MoveError::UnavailableOperand(missing));
        }

        let operator = Operator::from_symbol(symbol)
            .ok_or_else(|| MoveError::UnsupportedOperator(symbol.clone()))?;

        Ok(Move::new(*lhs, *rhs, operator))
    }

    /// Play one move
    ///
    /// # Errors
    /// Returns `MoveError` if the game is not waiting for a move, if the
    /// proposal fails [`Game::validate`], or if the arithmetic is illegal.
    /// The state is unchanged in every error case.
    pub fn submit(&mut self, proposal: &Proposal) -> Result<TurnResult, MoveError> {
        if self.phase != Phase::AwaitingMove {
            return Err(MoveError::OutOfTurn);
        }

        let mv = self.validate(proposal).inspect_err(|err| {
            debug!(%proposal, %err, "move rejected");
        })?;

        let Some(result) = mv.evaluate() else {
            debug!(%mv, "illegal arithmetic");
            return Err(MoveError::IllegalArithmetic {
                lhs: mv.lhs,
                operator: mv.operator,
                rhs: mv.rhs,
            });
        };

        self.state.apply(mv, result);
        let step = Step { mv, result };
        debug!(%mv, result, remaining = self.state.available_count(), "move applied");

        if result == self.state.target().value() {
            let outcome = self.finish(Some(result), Ending::Won);
            return Ok(TurnResult::Won(step, outcome));
        }
        Ok(TurnResult::Applied(step))
    }

    /// Play a move whose operator is already known
    ///
    /// # Errors
    /// Same as [`Game::submit`].
    pub fn play(&mut self, mv: Move) -> Result<TurnResult, MoveError> {
        self.submit(&Proposal::from(mv))
    }

    /// Stop playing
    ///
    /// With zero or one number left the game finishes at once; otherwise the
    /// player has to pick a final number with [`Game::choose_final`].
    /// Stopping a game that already stopped or finished changes nothing.
    pub fn stop(&mut self) -> Phase {
        if self.phase == Phase::AwaitingMove {
            match self.state.available().as_slice() {
                [] => {
                    self.finish(None, Ending::Stopped);
                }
                [only] => {
                    self.finish(Some(*only), Ending::Stopped);
                }
                _ => {
                    debug!("stop requested, waiting for a final choice");
                    self.phase = Phase::AwaitingFinalChoice;
                }
            }
        }
        self.phase
    }

    /// Pick the final number after stopping
    ///
    /// # Errors
    /// Returns `FinalChoiceError` if the game is not waiting for a choice,
    /// if `values` does not hold exactly one number, or if that number is
    /// not available.
    pub fn choose_final(&mut self, values: &[Number]) -> Result<Outcome, FinalChoiceError> {
        if self.phase != Phase::AwaitingFinalChoice {
            return Err(FinalChoiceError::OutOfTurn);
        }
        let &[choice] = values else {
            return Err(FinalChoiceError::NotSingle(values.len()));
        };
        if !self.state.contains(choice) {
            return Err(FinalChoiceError::NotAvailable(choice));
        }
        Ok(self.finish(Some(choice), Ending::Stopped))
    }

    fn finish(&mut self, final_number: Option<Number>, ending: Ending) -> Outcome {
        let outcome = Outcome::new(final_number, self.state.target(), ending);
        info!(
            ?ending,
            final_number,
            target = %self.state.target(),
            gap = outcome.gap(),
            "game finished"
        );
        self.phase = Phase::Finished(outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(numbers: &[Number], target: Number) -> Game {
        Game::from_numbers(numbers.to_vec(), Target::new(target).unwrap())
    }

    fn propose(lhs: Number, symbol: &str, rhs: Number) -> Proposal {
        Proposal::new(lhs, rhs, symbol)
    }

    #[test]
    fn valid_move_reduces_pool_by_one() {
        let mut game = game(&[25, 8, 7, 3, 3, 1], 414);
        let result = game.submit(&propose(7, "x", 3)).unwrap();

        assert_eq!(result.step().result, 21);
        assert!(matches!(result, TurnResult::Applied(_)));
        assert_eq!(game.state().available_count(), 5);
        assert_eq!(game.state().results(), &[21]);
    }

    #[test]
    fn unavailable_operand_is_rejected() {
        let mut game = game(&[25, 8, 7, 3, 3, 1], 414);
        let before = game.state().clone();

        assert_eq!(
            game.submit(&propose(9, "+", 3)),
            Err(MoveError::UnavailableOperand(9))
        );
        assert_eq!(
            game.submit(&propose(3, "+", 50)),
            Err(MoveError::UnavailableOperand(50))
        );
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn pairing_a_single_copy_with_itself_is_rejected() {
        let mut game = game(&[25, 8, 7, 3, 3, 1], 414);
        assert_eq!(
            game.submit(&propose(8, "+", 8)),
            Err(MoveError::InsufficientMultiplicity {
                operand: 8,
                available: 1
            })
        );
        assert!(game.submit(&propose(3, "+", 3)).is_ok());
    }

    #[test]
    fn unsupported_operator_is_rejected_after_operands() {
        let mut game = game(&[25, 8, 7, 3, 3, 1], 414);
        assert_eq!(
            game.submit(&propose(8, "%", 3)),
            Err(MoveError::UnsupportedOperator("%".to_string()))
        );
        // Operand checks come first
        assert_eq!(
            game.submit(&propose(9, "%", 3)),
            Err(MoveError::UnavailableOperand(9))
        );
        assert_eq!(game.state().available_count(), 6);
    }

    #[test]
    fn illegal_arithmetic_leaves_state_unchanged() {
        let mut game = game(&[25, 8, 7, 3, 3, 1], 414);
        let before = game.state().clone();

        assert_eq!(
            game.submit(&propose(3, "-", 7)),
            Err(MoveError::IllegalArithmetic {
                lhs: 3,
                operator: Operator::Sub,
                rhs: 7
            })
        );
        assert!(matches!(
            game.submit(&propose(25, "/", 3)),
            Err(MoveError::IllegalArithmetic { .. })
        ));
        assert_eq!(game.state(), &before);
        assert_eq!(game.phase(), Phase::AwaitingMove);
    }

    #[test]
    fn hitting_the_target_wins_immediately() {
        let mut game = game(&[100, 4, 1, 2, 3, 5], 400);
        let result = game.submit(&propose(100, "×", 4)).unwrap();

        let TurnResult::Won(step, outcome) = result else {
            panic!("expected a win, got {result:?}");
        };
        assert_eq!(step.result, 400);
        assert!(outcome.is_exact());
        assert_eq!(outcome.ending(), Ending::Won);
        assert!(game.is_finished());
        assert_eq!(game.submit(&propose(1, "+", 2)), Err(MoveError::OutOfTurn));
    }

    #[test]
    fn forced_end_with_single_result() {
        let mut game = game(&[50, 2], 999);
        assert_eq!(game.check_forced_end(), None);

        game.play(Move::new(50, 2, Operator::Mul)).unwrap();
        let outcome = game.check_forced_end().unwrap();
        assert_eq!(outcome.final_number(), Ok(100));
        assert_eq!(outcome.ending(), Ending::Forced);
        assert_eq!(outcome.gap(), Some(899));
    }

    #[test]
    fn forced_end_with_empty_pool_has_no_final_number() {
        let mut game = game(&[], 500);
        let outcome = game.check_forced_end().unwrap();
        assert!(outcome.final_number().is_err());
        assert_eq!(outcome.gap(), None);
    }

    #[test]
    fn stop_with_one_number_finishes_at_once() {
        let mut game = game(&[50, 2], 150);
        game.play(Move::new(50, 2, Operator::Add)).unwrap();

        let Phase::Finished(outcome) = game.stop() else {
            panic!("stop should finish the game");
        };
        assert_eq!(outcome.final_number(), Ok(52));
        assert_eq!(outcome.ending(), Ending::Stopped);
    }

    #[test]
    fn stop_with_several_numbers_needs_a_choice() {
        let mut game = game(&[12, 47, 3], 500);
        assert_eq!(game.stop(), Phase::AwaitingFinalChoice);
        assert_eq!(game.stop(), Phase::AwaitingFinalChoice);
        assert_eq!(game.submit(&propose(12, "+", 3)), Err(MoveError::OutOfTurn));

        assert_eq!(
            game.choose_final(&[9]),
            Err(FinalChoiceError::NotAvailable(9))
        );
        assert_eq!(
            game.choose_final(&[12, 47]),
            Err(FinalChoiceError::NotSingle(2))
        );
        assert_eq!(game.choose_final(&[]), Err(FinalChoiceError::NotSingle(0)));

        let outcome = game.choose_final(&[47]).unwrap();
        assert_eq!(outcome.final_number(), Ok(47));
        assert_eq!(outcome.gap(), Some(453));
        assert_eq!(game.outcome(), Some(outcome));
    }

    #[test]
    fn choose_final_before_stop_is_out_of_turn() {
        let mut game = game(&[12, 47, 3], 500);
        assert_eq!(game.choose_final(&[47]), Err(FinalChoiceError::OutOfTurn));
    }

    #[test]
    fn stop_with_empty_pool_has_no_final_number() {
        let mut game = game(&[], 500);
        assert_eq!(
            game.stop(),
            Phase::Finished(Outcome::new(None, Target::new(500).unwrap(), Ending::Stopped))
        );
    }
}
