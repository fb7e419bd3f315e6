//! Small shared widgets: input field, spinner line, error banner.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::InputField;
use crate::ui::theme;

/// Spinner animation frames.
const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

/// Render a bordered single-line input with a visible cursor.
pub fn render_input(frame: &mut Frame, area: Rect, input: &InputField, label: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::COLOR_BORDER))
        .title(label.to_string());

    let chars: Vec<char> = input.value().chars().collect();
    let cursor = input.cursor().min(chars.len());
    let before: String = chars[..cursor].iter().collect();
    let at: String = chars
        .get(cursor)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let after: String = chars.get(cursor + 1..).unwrap_or(&[]).iter().collect();

    let line = Line::from(vec![
        Span::raw(before),
        Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(after),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the loading spinner line.
pub fn render_spinner(frame: &mut Frame, area: Rect, spinner_frame: usize, message: &str) {
    let glyph = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let line = Line::styled(
        format!("{} {}", glyph, message),
        Style::default().fg(theme::COLOR_PENDING),
    );
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the inline error banner.
pub fn render_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    let line = Line::styled(
        format!("✖ {}", message),
        Style::default()
            .fg(theme::COLOR_ERROR)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
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

    #[test]
    fn test_error_banner_shows_message() {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                render_error_banner(frame, frame.area(), "Please enter some text.");
            })
            .unwrap();
        assert!(buffer_text(&terminal).contains("Please enter some text."));
    }

    #[test]
    fn test_spinner_cycles_frames() {
        for frame_no in 0..SPINNER_FRAMES.len() * 2 {
            let backend = TestBackend::new(30, 1);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| {
                    render_spinner(frame, frame.area(), frame_no, "analyzing");
                })
                .unwrap();
            let text = buffer_text(&terminal);
            assert!(text.contains(SPINNER_FRAMES[frame_no % SPINNER_FRAMES.len()]));
            assert!(text.contains("analyzing"));
        }
    }

    #[test]
    fn test_input_renders_value_and_label() {
        let mut input = InputField::new();
        input.set_value("rust");

        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                render_input(frame, frame.area(), &input, "Subreddit");
            })
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("rust"));
        assert!(text.contains("Subreddit"));
    }
}
