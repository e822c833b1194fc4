//! Widget event loop.
//!
//! Owns the [`ChatPanel`] and drives it from [`Action`]s.  Sends run as
//! a spawned task that posts the outcome back over the event channel;
//! the task handle is retained so a still-pending exchange can be
//! aborted when the widget closes instead of completing into a
//! torn-down terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::debug;

use askdocs_sdk::ChatProxyClient;

use crate::panel::ChatPanel;
use crate::tui::{Action, EventHandler, Tui};
use crate::ui;

pub struct App {
    pub panel: ChatPanel,
    /// Lines scrolled up from the latest transcript entry; clamped and
    /// reset to 0 (bottom) whenever a new entry arrives.
    pub scroll_from_bottom: usize,
    pub tick_count: usize,

    client: ChatProxyClient,
    tx: UnboundedSender<Action>,
    in_flight: Option<JoinHandle<()>>,
    should_quit: bool,
}

impl App {
    pub fn new(client: ChatProxyClient, tx: UnboundedSender<Action>) -> Self {
        Self {
            panel: ChatPanel::new(),
            scroll_from_bottom: 0,
            tick_count: 0,
            client,
            tx,
            in_flight: None,
            should_quit: false,
        }
    }

    /// Draw-and-react loop; returns when the user quits.
    pub async fn run(mut self, terminal: &mut Tui, events: &mut EventHandler) -> anyhow::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(&mut self, frame))?;
            let Some(action) = events.next().await else {
                break;
            };
            self.update(action);
        }

        // Abort a still-pending exchange on close.
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        Ok(())
    }

    fn update(&mut self, action: Action) {
        match action {
            Action::Tick => self.tick_count = self.tick_count.wrapping_add(1),
            Action::Key(key) => self.handle_key(key),
            Action::Resize(..) => {}
            Action::ReplyReceived(reply) => {
                self.panel.complete(reply);
                self.in_flight = None;
                self.scroll_from_bottom = 0;
            }
            Action::SendFailed(reason) => {
                debug!(%reason, "exchange failed");
                self.panel.fail();
                self.in_flight = None;
                self.scroll_from_bottom = 0;
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match key.code {
            // Enter without modifier sends; Enter on an empty input while
            // the starter list is up adopts the highlighted question.
            KeyCode::Enter if key.modifiers.is_empty() => {
                if self.panel.input().trim().is_empty() && self.panel.suggestions_visible() {
                    self.panel.adopt_suggestion();
                } else {
                    self.send();
                }
            }
            KeyCode::Up => {
                if self.panel.suggestions_visible() {
                    self.panel.prev_suggestion();
                } else {
                    self.scroll_from_bottom = self.scroll_from_bottom.saturating_add(1);
                }
            }
            KeyCode::Down => {
                if self.panel.suggestions_visible() {
                    self.panel.next_suggestion();
                } else {
                    self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(1);
                }
            }
            KeyCode::Backspace => self.panel.backspace(),
            KeyCode::Char(c) => self.panel.push_char(c),
            _ => {}
        }
    }

    /// Kick off one exchange.  The panel rejects the send while another
    /// is in flight or the input is empty, so this is safe to call from
    /// any trigger path.
    fn send(&mut self) {
        let Some(message) = self.panel.take_input_for_send() else {
            return;
        };
        self.scroll_from_bottom = 0;

        let client = self.client.clone();
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let action = match client.ask(&message).await {
                Ok(reply) => Action::ReplyReceived(reply),
                Err(e) => Action::SendFailed(e.to_string()),
            };
            let _ = tx.send(action);
        });
        self.in_flight = Some(handle);
    }
}
