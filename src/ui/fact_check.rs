//! Fact-checker screen rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::projector::{badge_for, format_confidence};
use crate::state::RequestState;
use crate::traits::HttpClient;
use crate::ui::{components, theme};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render<C: HttpClient>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // input
            Constraint::Length(5), // result card
            Constraint::Min(3),    // history
        ])
        .split(area);

    components::render_input(frame, chunks[0], &app.fact_check.input, "Statement");
    render_result(frame, chunks[1], app);
    render_history(frame, chunks[2], app);
}

fn render_result<C: HttpClient>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::COLOR_BORDER))
        .title("Prediction");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &app.fact_check.request {
        RequestState::Idle => {
            frame.render_widget(
                Paragraph::new(Line::styled(
                    "Enter a statement and press Enter.",
                    Style::default().fg(theme::COLOR_DIM),
                )),
                inner,
            );
        }
        RequestState::Pending { .. } => {
            components::render_spinner(frame, inner, app.spinner_frame, "checking...");
        }
        RequestState::Failed(message) => {
            components::render_error_banner(frame, inner, message);
        }
        RequestState::Succeeded(payload) => {
            let badge = badge_for(payload.prediction);
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Length(1)])
                .split(inner);

            let headline = Line::from(vec![
                Span::styled(
                    format!("{} {}", badge.glyph, payload.prediction.display_name()),
                    Style::default()
                        .fg(badge.color)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", format_confidence(payload.confidence)),
                    Style::default().fg(theme::COLOR_ACCENT),
                ),
            ]);
            frame.render_widget(Paragraph::new(headline), rows[0]);

            // The gauge fills in only after the short reveal delay.
            if app.fact_check.confidence_revealed {
                let gauge = Gauge::default()
                    .gauge_style(Style::default().fg(badge.color))
                    .ratio(payload.confidence.clamp(0.0, 1.0))
                    .label(format_confidence(payload.confidence));
                frame.render_widget(gauge, rows[1]);
            }
        }
    }
}

fn render_history<C: HttpClient>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::COLOR_BORDER))
        .title("Recent checks");

    let items: Vec<ListItem> = app
        .fact_check
        .history
        .entries()
        .iter()
        .map(|entry| {
            let badge = badge_for(entry.category);
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", badge.glyph),
                    Style::default().fg(badge.color),
                ),
                Span::raw(truncated(&entry.input_text, 48)),
                Span::styled(
                    format!(
                        "  {} · {}",
                        format_confidence(entry.confidence),
                        entry.recorded_at.format("%H:%M:%S")
                    ),
                    Style::default().fg(theme::COLOR_DIM),
                ),
            ]))
        })
        .collect();

    if items.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled(
                "No checks yet.",
                Style::default().fg(theme::COLOR_DIM),
            ))
            .block(block),
            area,
        );
    } else {
        frame.render_widget(List::new(items).block(block), area);
    }
}

/// Truncate to a display width, accounting for wide characters.
fn truncated(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockHttpClient;
    use crate::api::ApiClient;
    use crate::app::AppMessage;
    use crate::config::ApiConfig;
    use crate::models::{Category, PredictionResponse};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn app() -> App<MockHttpClient> {
        let api = ApiClient::new(Arc::new(MockHttpClient::new()), ApiConfig::default());
        let (tx, _rx) = mpsc::unbounded_channel();
        App::new(api, tx)
    }

    fn rendered(app: &App<MockHttpClient>) -> String {
        let backend = TestBackend::new(80, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[tokio::test]
    async fn test_idle_shows_prompt() {
        let app = app();
        let text = rendered(&app);
        assert!(text.contains("Enter a statement"));
        assert!(text.contains("No checks yet."));
    }

    #[tokio::test]
    async fn test_failure_shows_banner() {
        let mut app = app();
        app.handle_key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Enter,
            crossterm::event::KeyModifiers::NONE,
        ));
        assert!(rendered(&app).contains("Please enter some text."));
    }

    #[tokio::test]
    async fn test_success_shows_category_and_history() {
        let mut app = app();
        app.fact_check.input.set_value("water is wet");
        let (seq, _) = app.fact_check.submit().unwrap();
        app.handle_message(AppMessage::PredictionResolved {
            seq,
            result: Ok(PredictionResponse {
                prediction: Category::Entailment,
                confidence: 0.91,
            }),
        });
        let text = rendered(&app);
        assert!(text.contains("Entailment"));
        assert!(text.contains("91.0%"));
        assert!(text.contains("water is wet"));
    }

    #[test]
    fn test_truncated_respects_display_width() {
        assert_eq!(truncated("short", 10), "short");
        let long = "x".repeat(60);
        assert!(UnicodeWidthStr::width(truncated(&long, 10).as_str()) <= 10);
        // Wide characters count double.
        let wide = "日本語のタイトルがとても長い場合".to_string();
        assert!(UnicodeWidthStr::width(truncated(&wide, 10).as_str()) <= 10);
    }
}
