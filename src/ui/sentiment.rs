//! Sentiment screen rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::{Post, SentimentLabel};
use crate::projector::SentimentSummary;
use crate::state::{FetchMode, RequestState, SentimentData};
use crate::traits::HttpClient;
use crate::ui::{components, theme};

pub fn render<C: HttpClient>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // input
            Constraint::Min(5),    // results
        ])
        .split(area);

    let label = format!("Subreddit ({})", app.sentiment.mode.display_name());
    components::render_input(frame, chunks[0], &app.sentiment.input, &label);
    render_results(frame, chunks[1], app);
}

fn render_results<C: HttpClient>(frame: &mut Frame, area: Rect, app: &App<C>) {
    match &app.sentiment.request {
        RequestState::Idle => {
            frame.render_widget(
                Paragraph::new(Line::styled(
                    "Enter a subreddit name and press Enter.",
                    Style::default().fg(theme::COLOR_DIM),
                )),
                area,
            );
        }
        RequestState::Pending { .. } => {
            let message = match app.sentiment.mode {
                FetchMode::Posts => "fetching posts...",
                FetchMode::Totals => "fetching totals...",
            };
            components::render_spinner(frame, area, app.spinner_frame, message);
        }
        RequestState::Failed(message) => {
            components::render_error_banner(frame, area, message);
        }
        RequestState::Succeeded(data) => {
            let summary = match data {
                SentimentData::Posts(posts) => SentimentSummary::from_posts(posts),
                SentimentData::Totals(totals) => SentimentSummary::from_totals(totals),
            };
            if summary.is_empty() {
                frame.render_widget(
                    Paragraph::new(Line::styled(
                        "No posts found for this subreddit.",
                        Style::default().fg(theme::COLOR_DIM),
                    )),
                    area,
                );
                return;
            }

            match data {
                SentimentData::Posts(posts) => {
                    let chunks = Layout::default()
                        .direction(Direction::Vertical)
                        .constraints([Constraint::Length(8), Constraint::Min(3)])
                        .split(area);
                    render_chart(frame, chunks[0], &summary);
                    render_posts(frame, chunks[1], app, posts);
                }
                SentimentData::Totals(_) => {
                    render_chart(frame, area, &summary);
                }
            }
        }
    }
}

fn label_color(label: SentimentLabel) -> Color {
    match label {
        SentimentLabel::Positive => theme::COLOR_POSITIVE,
        SentimentLabel::Neutral => theme::COLOR_NEUTRAL,
        SentimentLabel::Negative => theme::COLOR_NEGATIVE,
        SentimentLabel::Unclassified => theme::COLOR_DIM,
    }
}

fn render_chart(frame: &mut Frame, area: Rect, summary: &SentimentSummary) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    // Headline: dominant label with its share, plus the even-split baseline.
    let headline = match summary.dominant() {
        Some(label) => Line::from(vec![
            Span::raw("Overall: "),
            Span::styled(
                format!("{} ({}%)", label.display_name(), summary.dominant_percent()),
                Style::default()
                    .fg(label_color(label))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   baseline {:.1}/label", summary.baseline()),
                Style::default().fg(theme::COLOR_DIM),
            ),
        ]),
        None => Line::styled("Overall: n/a", Style::default().fg(theme::COLOR_DIM)),
    };
    frame.render_widget(Paragraph::new(headline), chunks[0]);

    let bars: Vec<Bar> = summary
        .series()
        .iter()
        .map(|point| {
            Bar::default()
                .label(Line::from(point.label.display_name()))
                .value(point.count as u64)
                .style(Style::default().fg(label_color(point.label)))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::COLOR_BORDER))
                .title("Sentiment"),
        )
        .bar_width(10)
        .bar_gap(2)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, chunks[1]);
}

fn render_posts<C: HttpClient>(frame: &mut Frame, area: Rect, app: &App<C>, posts: &[Post]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::COLOR_BORDER))
        .title(format!("Posts ({})", posts.len()));

    let mut items: Vec<ListItem> = Vec::with_capacity(posts.len());
    for (index, post) in posts.iter().enumerate() {
        let expanded = app.sentiment.is_expanded(index);
        let marker = if expanded { "▾" } else { "▸" };
        let selected = index == app.sentiment.selected;

        let title_style = if selected {
            Style::default()
                .fg(theme::COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{} ", marker), title_style),
            Span::styled(&post.title, title_style),
            Span::styled(
                format!("  [{}]", post.sentiment.display_name()),
                Style::default().fg(label_color(post.sentiment)),
            ),
        ])];
        if expanded {
            let body = post.content.as_deref().unwrap_or("(no body)");
            lines.push(Line::styled(
                format!("  {}", body),
                Style::default().fg(theme::COLOR_DIM),
            ));
        }
        items.push(ListItem::new(lines));
    }

    frame.render_widget(List::new(items).block(block), area);
}
