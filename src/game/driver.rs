//! Request/response loop between the engine and whoever supplies the moves
//!
//! The driver asks a [`Collaborator`] for moves until the game ends. Rejected
//! requests are asked again in a loop, never by recursion.

use super::engine::{Game, Phase, TurnResult};
use super::error::{FinalChoiceError, MoveError};
use super::outcome::Outcome;
use super::state::{GameState, Step};
use crate::core::{Command, Number};
use tracing::trace;

/// The outside world as seen by the engine
///
/// Requests block until the collaborator answers. Errors are the
/// collaborator's own (closed input, broken terminal) and end the loop.
pub trait Collaborator {
    type Error;

    /// Ask for the next move or a stop
    ///
    /// `rejection` explains why the previous answer was refused.
    ///
    /// # Errors
    /// Implementation-defined I/O failure.
    fn request_move(
        &mut self,
        available: &[Number],
        rejection: Option<&MoveError>,
    ) -> Result<Command, Self::Error>;

    /// Ask which number to finish on after a stop
    ///
    /// # Errors
    /// Implementation-defined I/O failure.
    fn request_final_choice(
        &mut self,
        available: &[Number],
        rejection: Option<&FinalChoiceError>,
    ) -> Result<Vec<Number>, Self::Error>;

    /// Sent after setup and after every applied move
    fn report_state(&mut self, state: &GameState);

    /// Sent for every applied move, before the new state
    fn report_step(&mut self, _step: &Step) {}

    /// Sent exactly once, when the game ends
    fn report_outcome(&mut self, outcome: &Outcome);
}

/// Play `game` to the end
///
/// # Errors
/// Returns the collaborator's error if one of its requests fails; the game
/// keeps the state it had reached.
pub fn play<C: Collaborator + ?Sized>(
    game: &mut Game,
    collaborator: &mut C,
) -> Result<Outcome, C::Error> {
    collaborator.report_state(game.state());

    let mut rejection: Option<MoveError> = None;
    let outcome = loop {
        match game.phase() {
            Phase::Finished(outcome) => break outcome,
            Phase::AwaitingFinalChoice => break resolve_final_choice(game, collaborator)?,
            Phase::AwaitingMove => {}
        }

        if let Some(outcome) = game.check_forced_end() {
            break outcome;
        }

        let available = game.state().available_sorted();
        match collaborator.request_move(&available, rejection.as_ref())? {
            Command::Combine(proposal) => match game.submit(&proposal) {
                Ok(turn) => {
                    rejection = None;
                    collaborator.report_step(&turn.step());
                    collaborator.report_state(game.state());
                    if let TurnResult::Won(_, outcome) = turn {
                        break outcome;
                    }
                }
                Err(err) => {
                    trace!(%err, "asking for another move");
                    rejection = Some(err);
                }
            },
            Command::Stop => {
                game.stop();
            }
        }
    };

    collaborator.report_outcome(&outcome);
    Ok(outcome)
}

fn resolve_final_choice<C: Collaborator + ?Sized>(
    game: &mut Game,
    collaborator: &mut C,
) -> Result<Outcome, C::Error> {
    let mut rejection: Option<FinalChoiceError> = None;
    loop {
        let available = game.state().available_sorted();
        let values = collaborator.request_final_choice(&available, rejection.as_ref())?;
        match game.choose_final(&values) {
            Ok(outcome) => return Ok(outcome),
            Err(err) => {
                trace!(%err, "asking for another final choice");
                rejection = Some(err);
            }
        }
    }
}
