//! TUI application state and logic

use crate::config::{Deal, GameConfig, SetupError};
use crate::core::notation::{parse_choice, parse_command};
use crate::core::{Command, Number};
use crate::game::{Ending, Game, Outcome, Phase, TurnResult};
use crate::output::formatters::{format_numbers, format_step};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub config: GameConfig,
    pub deal: Deal,
    pub game: Game,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Move,
    FinalChoice,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub exact_games: usize,
    pub best_gap: Option<Number>,
}

impl Statistics {
    fn record(&mut self, outcome: &Outcome) {
        self.total_games += 1;
        if outcome.is_exact() {
            self.exact_games += 1;
        }
        if let Some(gap) = outcome.gap() {
            self.best_gap = Some(self.best_gap.map_or(gap, |best| best.min(gap)));
        }
    }
}

impl App {
    /// Deal the first game of a session
    ///
    /// # Errors
    /// Returns `SetupError` if the configured tiles or target are invalid.
    pub fn new(config: GameConfig) -> Result<Self, SetupError> {
        let deal = config.deal()?;
        let mut app = Self {
            config,
            game: deal.clone().into_game(),
            deal,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Move,
        };
        app.announce_deal();
        Ok(app)
    }

    /// Start the next game of the session
    ///
    /// # Errors
    /// Returns `SetupError` if the configured tiles or target are invalid.
    pub fn new_game(&mut self) -> Result<(), SetupError> {
        self.config = self.config.next_round();
        self.deal = self.config.deal()?;
        self.game = self.deal.clone().into_game();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Move;
        self.announce_deal();
        Ok(())
    }

    fn announce_deal(&mut self) {
        self.add_message(
            &format!(
                "Reach {} with {} (seed {})",
                self.deal.target,
                format_numbers(self.deal.hand.tiles()),
                self.deal.seed
            ),
            MessageStyle::Info,
        );
        self.add_message(
            "Type a move like '25 + 3', 'stop' or ESC to finish",
            MessageStyle::Info,
        );
    }

    /// Handle the Enter key for the current mode
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        match self.input_mode {
            InputMode::Move => self.handle_move(&input),
            InputMode::FinalChoice => self.handle_final_choice(&input),
            InputMode::GameOver => {}
        }
    }

    pub fn handle_move(&mut self, input: &str) {
        let command = match parse_command(input) {
            Ok(command) => command,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        let proposal = match command {
            Command::Stop => {
                self.stop();
                return;
            }
            Command::Combine(proposal) => proposal,
        };

        match self.game.submit(&proposal) {
            Ok(turn) => {
                self.add_message(&format_step(&turn.step()), MessageStyle::Success);
                if let TurnResult::Won(_, outcome) = turn {
                    self.finish(outcome);
                } else if let Some(outcome) = self.game.check_forced_end() {
                    self.finish(outcome);
                }
            }
            Err(err) => {
                let mut text = err.to_string();
                if err.names_missing_operand() {
                    text.push_str(&format!(
                        " (available: {})",
                        format_numbers(&self.game.state().available())
                    ));
                }
                self.add_message(&text, MessageStyle::Error);
            }
        }
    }

    /// Stop the current game, asking for a final number if needed
    pub fn stop(&mut self) {
        if self.input_mode != InputMode::Move {
            return;
        }
        match self.game.stop() {
            Phase::Finished(outcome) => self.finish(outcome),
            Phase::AwaitingFinalChoice => {
                self.input_mode = InputMode::FinalChoice;
                self.add_message(
                    &format!(
                        "Choose ONE final number from {}",
                        format_numbers(&self.game.state().available())
                    ),
                    MessageStyle::Info,
                );
            }
            Phase::AwaitingMove => {}
        }
    }

    pub fn handle_final_choice(&mut self, input: &str) {
        let values = match parse_choice(input) {
            Ok(values) => values,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };
        match self.game.choose_final(&values) {
            Ok(outcome) => self.finish(outcome),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.stats.record(&outcome);
        self.input_mode = InputMode::GameOver;

        if outcome.ending() == Ending::Forced {
            self.add_message("No tiles left and a single number", MessageStyle::Info);
        }

        match (outcome.final_number(), outcome.gap()) {
            (Ok(_), Some(0)) => self.add_message(
                &format!("🎯 LE COMPTE EST BON! You reached {}! 🎯", outcome.target()),
                MessageStyle::Success,
            ),
            (Ok(final_number), Some(gap)) => {
                let style = if outcome.is_close() {
                    MessageStyle::Success
                } else {
                    MessageStyle::Info
                };
                let remark = if outcome.is_close() { " Very close!" } else { "" };
                self.add_message(
                    &format!(
                        "Finished on {final_number}, {gap} away from {}.{remark}",
                        outcome.target()
                    ),
                    style,
                );
            }
            _ => self.add_message("No number available!", MessageStyle::Error),
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }

    /// The available number nearest the target
    #[must_use]
    pub fn closest_available(&self) -> Option<Number> {
        let target = self.game.state().target().value();
        self.game
            .state()
            .available()
            .into_iter()
            .min_by_key(|n| n.abs_diff(target))
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    // A fixed deal may already be over
    if let Some(outcome) = app.game.check_forced_end() {
        app.finish(outcome);
    }

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                match app.input_mode {
                    InputMode::GameOver => match key.code {
                        KeyCode::Char('q') => app.should_quit = true,
                        KeyCode::Char('n') => app.new_game()?,
                        _ => {}
                    },
                    InputMode::Move | InputMode::FinalChoice => match key.code {
                        KeyCode::Esc => app.stop(),
                        KeyCode::Char(c) => app.input_buffer.push(c),
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Enter => app.submit_input(),
                        _ => {}
                    },
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
