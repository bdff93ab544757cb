//! TUI rendering with ratatui
//!
//! Layout for the full-screen game.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{closeness_percent, format_numbers, format_step};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 LE COMPTE EST BON")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(4)])
        .split(area);

    render_numbers(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn render_numbers(f: &mut Frame, app: &App, area: Rect) {
    let state = app.game.state();
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let content = vec![
        Line::from(vec![
            Span::raw("Target:  "),
            Span::styled(
                state.target().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Tiles:   "),
            Span::styled(format_numbers(state.tiles()), bold),
        ]),
        Line::from(vec![
            Span::raw("Results: "),
            Span::styled(format_numbers(state.results()), bold.fg(Color::Green)),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Numbers ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.game.state().history();
    let items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, step)| ListItem::new(format!("{}: {}", i + 1, format_step(step))))
        .collect();

    let list = List::new(items).block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(area);

    render_closeness(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_closeness(f: &mut Frame, app: &App, area: Rect) {
    let target = app.game.state().target();
    let (percent, label) = match app.closest_available() {
        Some(closest) => (
            closeness_percent(closest, target),
            format!("best {closest} | gap {}", closest.abs_diff(target.value())),
        ),
        None => (0, "no numbers left".to_string()),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Closest Number ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Move => (
            " Enter Move (e.g. 25 + 3, 7 x 3, 75 / 25) | 'stop' or ESC to finish ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::FinalChoice => (
            " Enter ONE Final Number ",
            app.input_buffer.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Move => "Mode: Playing",
        InputMode::FinalChoice => "Mode: Final choice",
        InputMode::GameOver => "Mode: Game over",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Exact: {}",
        app.stats.total_games, app.stats.exact_games
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let best_text = app
        .stats
        .best_gap
        .map_or_else(|| "Best gap: -".to_string(), |gap| format!("Best gap: {gap}"));
    let best = Paragraph::new(best_text).alignment(Alignment::Center);
    f.render_widget(best, chunks[2]);

    let help_text = if app.input_mode == InputMode::GameOver {
        "q: Quit | n: New Game"
    } else {
        "Enter: Submit | ESC: Stop | Ctrl-C: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
