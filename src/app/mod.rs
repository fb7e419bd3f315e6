//! Application state and event handling.
//!
//! `App` owns both screens and the channel that async work resolves
//! through. Key events mutate screen state synchronously; submits spawn a
//! tokio task that performs the HTTP call and reports back with an
//! [`AppMessage`], tagged with the submit's sequence number so superseded
//! work can never touch visible state.

mod messages;

pub use messages::AppMessage;

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::state::{FactCheckScreen, FetchMode, SentimentData, SentimentScreen};
use crate::traits::HttpClient;

/// Delay before the confidence bar is revealed after a successful
/// fact-check resolution. Purely presentational.
pub const CONFIDENCE_REVEAL_MS: u64 = 800;

/// Which screen is currently mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Free-text fact-checker.
    #[default]
    FactCheck,
    /// Subreddit sentiment analyzer.
    Sentiment,
}

impl Screen {
    /// The other screen.
    pub fn next(&self) -> Self {
        match self {
            Screen::FactCheck => Screen::Sentiment,
            Screen::Sentiment => Screen::FactCheck,
        }
    }

    /// Title shown in the navigation bar.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::FactCheck => "Fact Checker",
            Screen::Sentiment => "Sentiment Analyzer",
        }
    }
}

/// Top-level application state.
pub struct App<C: HttpClient + 'static> {
    /// Currently mounted screen.
    pub screen: Screen,
    /// Fact-checker screen state.
    pub fact_check: FactCheckScreen,
    /// Sentiment screen state.
    pub sentiment: SentimentScreen,
    /// Spinner animation frame, advanced by the render tick.
    pub spinner_frame: usize,
    /// Set when the user asks to exit.
    pub should_quit: bool,
    api: Arc<ApiClient<C>>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl<C: HttpClient + 'static> App<C> {
    /// Create the app around an API client and the message channel the
    /// event loop drains.
    pub fn new(api: ApiClient<C>, message_tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self {
            screen: Screen::default(),
            fact_check: FactCheckScreen::new(),
            sentiment: SentimentScreen::new(),
            spinner_frame: 0,
            should_quit: false,
            api: Arc::new(api),
            message_tx,
        }
    }

    /// Handle a key event for the mounted screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global bindings first.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.switch_screen();
                return;
            }
            _ => {}
        }

        match self.screen {
            Screen::FactCheck => self.handle_fact_check_key(key),
            Screen::Sentiment => self.handle_sentiment_key(key),
        }
    }

    fn handle_fact_check_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_fact_check(),
            KeyCode::Char(c) => self.fact_check.input.insert_char(c),
            KeyCode::Backspace => self.fact_check.input.backspace(),
            KeyCode::Left => self.fact_check.input.move_left(),
            KeyCode::Right => self.fact_check.input.move_right(),
            _ => {}
        }
    }

    fn handle_sentiment_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('t') {
            self.sentiment.toggle_mode();
            return;
        }
        match key.code {
            KeyCode::Enter => self.submit_sentiment(),
            KeyCode::Up => self.sentiment.select_prev(),
            KeyCode::Down => {
                let post_count = match self.sentiment.request.success() {
                    Some(SentimentData::Posts(posts)) => posts.len(),
                    _ => 0,
                };
                self.sentiment.select_next(post_count);
            }
            KeyCode::Char(' ') => {
                let selected = self.sentiment.selected;
                if matches!(
                    self.sentiment.request.success(),
                    Some(SentimentData::Posts(posts)) if !posts.is_empty()
                ) {
                    self.sentiment.toggle_expanded(selected);
                } else {
                    self.sentiment.input.insert_char(' ');
                }
            }
            KeyCode::Char(c) => self.sentiment.input.insert_char(c),
            KeyCode::Backspace => self.sentiment.input.backspace(),
            KeyCode::Left => self.sentiment.input.move_left(),
            KeyCode::Right => self.sentiment.input.move_right(),
            _ => {}
        }
    }

    /// Switch to the other screen, discarding the departing screen's
    /// in-flight work and session state.
    pub fn switch_screen(&mut self) {
        match self.screen {
            Screen::FactCheck => self.fact_check.reset_on_leave(),
            Screen::Sentiment => self.sentiment.reset_on_leave(),
        }
        self.screen = self.screen.next();
    }

    /// Submit the fact-checker input, spawning the `/predict` call.
    pub fn submit_fact_check(&mut self) {
        let Some((seq, text)) = self.fact_check.submit() else {
            return; // validation failure already surfaced
        };
        let api = Arc::clone(&self.api);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = api
                .predict(&text)
                .await
                .map_err(|e| e.user_message());
            let _ = tx.send(AppMessage::PredictionResolved { seq, result });
        });
    }

    /// Submit the sentiment input, spawning the call for the active
    /// fetch mode.
    pub fn submit_sentiment(&mut self) {
        let mode = self.sentiment.mode;
        let Some((seq, subreddit)) = self.sentiment.submit() else {
            return;
        };
        let api = Arc::clone(&self.api);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = match mode {
                FetchMode::Posts => api
                    .fetch_posts(&subreddit)
                    .await
                    .map(SentimentData::Posts),
                FetchMode::Totals => api
                    .fetch_totals(&subreddit)
                    .await
                    .map(SentimentData::Totals),
            }
            .map_err(|e| e.user_message());
            let _ = tx.send(AppMessage::SentimentResolved { seq, result });
        });
    }

    /// Apply a message from async work to the owning screen.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::PredictionResolved { seq, result } => {
                let succeeded = result.is_ok();
                let applied = self.fact_check.apply_result(seq, result);
                if applied && succeeded {
                    self.schedule_confidence_reveal(seq);
                }
            }
            AppMessage::SentimentResolved { seq, result } => {
                self.sentiment.apply_result(seq, result);
            }
            AppMessage::ConfidenceRevealElapsed { seq } => {
                self.fact_check.reveal_confidence(seq);
            }
        }
    }

    /// Advance the spinner animation. Called on each render tick.
    pub fn on_tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    fn schedule_confidence_reveal(&self, seq: u64) {
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(CONFIDENCE_REVEAL_MS)).await;
            let _ = tx.send(AppMessage::ConfidenceRevealElapsed { seq });
        });
    }
}
