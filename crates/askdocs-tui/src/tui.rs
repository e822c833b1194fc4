//! Terminal setup and event plumbing.
//!
//! All state mutation happens on the single UI task in response to
//! [`Action`]s delivered over one unbounded channel: terminal input is
//! read on a blocking thread, ticks come from a timer task, and
//! completed exchanges are posted back by the spawned send task.

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

use askdocs_models::AssistantReply;

pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

pub fn init() -> io::Result<Tui> {
    execute!(io::stdout(), EnterAlternateScreen)?;
    enable_raw_mode()?;
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

pub fn restore() -> io::Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Discrete events the UI task reacts to.
#[derive(Debug, Clone)]
pub enum Action {
    Tick,
    Key(event::KeyEvent),
    Resize(u16, u16),
    /// An in-flight exchange finished with a normalized reply.
    ReplyReceived(AssistantReply),
    /// An in-flight exchange failed (transport error, bad status,
    /// malformed response — the kind is only kept for logging).
    SendFailed(String),
}

pub struct EventHandler {
    sender: mpsc::UnboundedSender<Action>,
    receiver: mpsc::UnboundedReceiver<Action>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        // Tick loop, drives the "Thinking..." animation.
        let tick_sender = sender.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(tick_rate_ms));
            loop {
                interval.tick().await;
                if tick_sender.send(Action::Tick).is_err() {
                    break;
                }
            }
        });

        // Input loop on a blocking thread; `event::read` has no async form.
        let event_sender = sender.clone();
        std::thread::spawn(move || loop {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if key.kind == KeyEventKind::Press
                        && event_sender.send(Action::Key(key)).is_err()
                    {
                        break;
                    }
                }
                Ok(Event::Resize(w, h)) => {
                    if event_sender.send(Action::Resize(w, h)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
                _ => {}
            }
        });

        Self { sender, receiver }
    }

    pub async fn next(&mut self) -> Option<Action> {
        self.receiver.recv().await
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<Action> {
        self.sender.clone()
    }
}
