use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::theme::{ACCENT, BODY_TEXT, DIM_TEXT, LOADING, POPUP_BORDER, STATUS_ERROR};

const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    frame.render_widget(Header::new().widget(app.is_loading()), regions[0]);
    draw_body(frame, app, regions[1]);
    frame.render_widget(Footer::new().widget(regions[2]), regions[2]);

    if app.focus() == Focus::SetCountInput {
        draw_set_count_popup(frame, app);
    }
}

fn draw_body(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            app.count_value().to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            app.message_text(),
            Style::default().fg(BODY_TEXT),
        )),
    ];
    if app.is_loading() {
        let frame_index = app.spinner_tick() as usize % SPINNER_FRAMES.len();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{} working", SPINNER_FRAMES[frame_index]),
            Style::default().fg(LOADING),
        )));
    }

    let body = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(body, area);
}

fn draw_set_count_popup(frame: &mut Frame<'_>, app: &App) {
    let area = centered_rect(40, 30, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Enter a new count:",
            Style::default().fg(BODY_TEXT),
        )),
        Line::from(Span::styled(
            format!("> {}", app.input_buffer()),
            Style::default().fg(ACCENT),
        )),
    ];
    if let Some(error) = app.input_error() {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    lines.push(Line::from(Span::styled(
        "Enter: apply │ Esc: cancel",
        Style::default().fg(DIM_TEXT),
    )));

    let popup = Paragraph::new(lines).block(
        Block::default()
            .title("Set count")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER)),
    );
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
