//! Rendering.
//!
//! Pure mapping from application state to widgets: spinner while Pending,
//! inline error banner while Failed, full result card while Succeeded.
//! Nothing here mutates state.

pub mod components;
mod fact_check;
mod sentiment;
pub mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Screen};
use crate::traits::HttpClient;

/// Draw the whole application.
pub fn draw<C: HttpClient>(frame: &mut Frame, app: &App<C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // navigation bar
            Constraint::Min(5),    // screen body
            Constraint::Length(1), // key hints
        ])
        .split(frame.area());

    render_nav(frame, chunks[0], app.screen);

    match app.screen {
        Screen::FactCheck => fact_check::render(frame, chunks[1], app),
        Screen::Sentiment => sentiment::render(frame, chunks[1], app),
    }

    render_hints(frame, chunks[2], app.screen);
}

fn render_nav(frame: &mut Frame, area: ratatui::layout::Rect, active: Screen) {
    let mut spans = Vec::new();
    for screen in [Screen::FactCheck, Screen::Sentiment] {
        let style = if screen == active {
            Style::default()
                .fg(theme::COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::COLOR_DIM)
        };
        spans.push(Span::styled(format!(" {} ", screen.title()), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_hints(frame: &mut Frame, area: ratatui::layout::Rect, screen: Screen) {
    let hints = match screen {
        Screen::FactCheck => "Enter: predict  Tab: switch screen  Esc: quit",
        Screen::Sentiment => {
            "Enter: analyze  ↑/↓: select post  Space: expand  Ctrl+T: mode  Tab: switch  Esc: quit"
        }
    };
    frame.render_widget(
        Paragraph::new(Line::styled(hints, Style::default().fg(theme::COLOR_DIM))),
        area,
    );
}
