//! Rendering logic for the TUI.

use board_core::controller::{ClickOutcome, Interaction};
use board_core::view::BoardView;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::{App, UiMode};
use super::widgets::BoardWidget;

/// Main render function. Rebuilds the whole screen from the current state.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main layout: title, content, help bar
    let main_layout = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Min(21),   // Content
        Constraint::Length(3), // Help bar
    ])
    .split(area);

    render_title(frame, main_layout[0]);
    render_content(frame, main_layout[1], app);
    render_help_bar(frame, main_layout[2]);

    if app.ui_mode == UiMode::ConfirmQuit {
        render_quit_dialog(frame);
    }
}

/// Renders the title bar.
fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " Chessboard ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            concat!("v", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(title, area);
}

/// Renders the main content area (board + info panel).
fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    let content_layout = Layout::horizontal([
        Constraint::Length(42), // Board area
        Constraint::Min(20),    // Info panel
    ])
    .split(area);

    render_board(frame, content_layout[0], app);
    render_info_panel(frame, content_layout[1], app);
}

/// Renders the board.
fn render_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Board ");

    let inner_area = board_block.inner(area);
    frame.render_widget(board_block, area);

    let view = BoardView::from_board(app.controller.board());
    let board_widget = BoardWidget::new(&view)
        .cursor(app.cursor)
        .ascii(app.ascii);

    frame.render_widget(board_widget, inner_area);
}

/// Renders the information panel.
fn render_info_panel(frame: &mut Frame, area: Rect, app: &App) {
    let info_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Info ");

    let inner_area = info_block.inner(area);
    frame.render_widget(info_block, area);

    let board = app.controller.board();
    let mut lines = vec![Line::from("")];

    let selection = match app.controller.interaction() {
        Interaction::Armed { source } => {
            let glyph = match board.get(source) {
                Some(piece) if app.ascii => format!(" ({})", piece.to_char()),
                Some(piece) => format!(" ({})", piece.glyph()),
                None => String::new(),
            };
            Span::styled(format!("{source}{glyph}"), Style::default().fg(Color::Yellow))
        }
        Interaction::Idle => Span::styled("--", Style::default().fg(Color::DarkGray)),
    };
    lines.push(Line::from(vec![Span::raw("Selected: "), selection]));

    lines.push(Line::from(vec![
        Span::raw("Pieces:   "),
        Span::styled(
            format!("{:2}", board.piece_count()),
            Style::default().fg(Color::Cyan),
        ),
    ]));
    lines.push(Line::from(""));

    let last = match app.last_outcome {
        Some(ClickOutcome::Moved { from, to, .. }) => {
            Span::styled(format!("{from} -> {to}"), Style::default().fg(Color::Magenta))
        }
        Some(ClickOutcome::Selected(sq)) => Span::raw(format!("picked up {sq}")),
        Some(ClickOutcome::Cancelled(sq)) => Span::raw(format!("put back {sq}")),
        Some(ClickOutcome::Ignored(sq)) => {
            Span::styled(format!("{sq} is empty"), Style::default().fg(Color::DarkGray))
        }
        None => Span::styled("--", Style::default().fg(Color::DarkGray)),
    };
    lines.push(Line::from(vec![Span::raw("Last:     "), last]));

    frame.render_widget(Paragraph::new(lines), inner_area);
}

/// Renders the help bar.
fn render_help_bar(frame: &mut Frame, area: Rect) {
    let help_items = [
        ("Click", "Pick/Drop"),
        ("Enter", "Pick/Drop at cursor"),
        ("R", "Reset"),
        ("Q", "Quit"),
    ];

    let spans: Vec<Span> = help_items
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(
                    format!(" [{key}] "),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                ),
                Span::raw(format!("{desc} ")),
            ]
        })
        .collect();

    let help = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(help, area);
}

/// Renders the quit confirmation dialog.
fn render_quit_dialog(frame: &mut Frame) {
    let area = centered_rect(40, 15, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Quit Chessboard?",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Press Y to quit, N to cancel"),
    ];

    let dialog = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Confirm "),
        );
    frame.render_widget(dialog, area);
}

/// Creates a centered rectangle with the given percentage of the parent area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
