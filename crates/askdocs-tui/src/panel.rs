//! Chat panel state container.
//!
//! All widget state (transcript, input buffer, loading flag) lives in
//! [`ChatPanel`] and is mutated only through its transition methods, so
//! every property of the exchange flow can be tested without a terminal:
//!
//! - a successful send appends exactly one user entry, then one
//!   assistant entry;
//! - empty/whitespace input is a no-op;
//! - the loading flag is true strictly between send and completion;
//! - sends are rejected while one is in flight, on every input path.

use askdocs_models::{AssistantReply, ChatMessage};

/// Fixed transcript entry appended when an exchange fails for any reason.
pub const FALLBACK_ERROR_MESSAGE: &str =
    "Sorry, I encountered an error while processing your request.";

/// A canned question offered while the transcript is still empty.
pub struct SuggestedQuestion {
    /// Question text, copied into the input on selection.
    pub text: &'static str,
    /// Topic label shown next to the question.
    pub category: &'static str,
}

/// Starter questions shown in place of an empty transcript.
pub const SUGGESTED_QUESTIONS: &[SuggestedQuestion] = &[
    SuggestedQuestion {
        text: "How do I deploy a Move module?",
        category: "Smart Contracts",
    },
    SuggestedQuestion {
        text: "How to create a new Aptos project?",
        category: "Getting Started",
    },
    SuggestedQuestion {
        text: "What are the best practices for Move development?",
        category: "Smart Contracts",
    },
    SuggestedQuestion {
        text: "How to interact with the Aptos blockchain using TypeScript SDK?",
        category: "SDKs",
    },
    SuggestedQuestion {
        text: "How to set up a local testnet?",
        category: "Network",
    },
    SuggestedQuestion {
        text: "How to mint NFTs on Aptos?",
        category: "NFTs",
    },
];

/// State of one chat widget session.
///
/// The transcript is transient: it lives for the widget session and is
/// never persisted.
pub struct ChatPanel {
    transcript: Vec<ChatMessage>,
    input: String,
    loading: bool,
    suggestion_idx: usize,
}

impl ChatPanel {
    /// Create an empty panel.
    pub fn new() -> Self {
        Self {
            transcript: Vec::new(),
            input: String::new(),
            loading: false,
            suggestion_idx: 0,
        }
    }

    /// Ordered transcript, insertion order = display order.
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Current input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether an exchange is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Append a character to the input buffer.
    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Remove the last character from the input buffer.
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Begin a send: validate the input, append the user entry, clear
    /// the input, and set the loading flag.
    ///
    /// Returns the literal input text to transmit, or `None` when the
    /// input is empty/whitespace-only or an exchange is already in
    /// flight (overlapping sends are rejected, not queued — the same
    /// guard applies to the key path and any button-equivalent trigger).
    pub fn take_input_for_send(&mut self) -> Option<String> {
        if self.loading || self.input.trim().is_empty() {
            return None;
        }
        let message = std::mem::take(&mut self.input);
        self.transcript.push(ChatMessage::user(message.clone()));
        self.loading = true;
        Some(message)
    }

    /// Finish a send successfully: append the assistant entry and clear
    /// the loading flag.
    pub fn complete(&mut self, reply: AssistantReply) {
        self.transcript
            .push(ChatMessage::assistant(reply.content, reply.urls));
        self.loading = false;
    }

    /// Finish a send after any failure: append the fixed fallback entry
    /// and clear the loading flag.  Error kinds are not surfaced to the
    /// user.
    pub fn fail(&mut self) {
        self.transcript
            .push(ChatMessage::assistant(FALLBACK_ERROR_MESSAGE, None));
        self.loading = false;
    }

    /// Suggested questions are shown only while no exchange happened yet.
    pub fn suggestions_visible(&self) -> bool {
        self.transcript.is_empty()
    }

    /// Index of the highlighted suggestion.
    pub fn selected_suggestion(&self) -> usize {
        self.suggestion_idx
    }

    /// Move the suggestion highlight down, wrapping at the end.
    pub fn next_suggestion(&mut self) {
        self.suggestion_idx = (self.suggestion_idx + 1) % SUGGESTED_QUESTIONS.len();
    }

    /// Move the suggestion highlight up, wrapping at the start.
    pub fn prev_suggestion(&mut self) {
        self.suggestion_idx = self
            .suggestion_idx
            .checked_sub(1)
            .unwrap_or(SUGGESTED_QUESTIONS.len() - 1);
    }

    /// Copy the highlighted suggestion into the input buffer.
    pub fn adopt_suggestion(&mut self) {
        self.input = SUGGESTED_QUESTIONS[self.suggestion_idx].text.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use askdocs_models::{Role, NO_CONTENT_FALLBACK};

    fn reply(content: &str, urls: Option<Vec<String>>) -> AssistantReply {
        AssistantReply {
            content: content.to_string(),
            urls,
        }
    }

    #[test]
    fn send_appends_one_user_then_one_assistant_entry() {
        let mut panel = ChatPanel::new();
        panel.input = "How do I deploy?".to_string();

        let sent = panel.take_input_for_send().unwrap();
        assert_eq!(sent, "How do I deploy?");
        assert_eq!(panel.transcript().len(), 1);
        assert_eq!(panel.transcript()[0].role, Role::User);
        assert_eq!(panel.transcript()[0].content, "How do I deploy?");

        panel.complete(reply("Like this.", None));
        assert_eq!(panel.transcript().len(), 2);
        assert_eq!(panel.transcript()[1].role, Role::Assistant);
        assert_eq!(panel.transcript()[1].content, "Like this.");
    }

    #[test]
    fn send_clears_the_input() {
        let mut panel = ChatPanel::new();
        panel.input = "question".to_string();
        panel.take_input_for_send().unwrap();
        assert_eq!(panel.input(), "");
    }

    #[test]
    fn empty_input_is_a_noop() {
        let mut panel = ChatPanel::new();
        assert!(panel.take_input_for_send().is_none());
        assert!(panel.transcript().is_empty());
        assert!(!panel.is_loading());
    }

    #[test]
    fn whitespace_input_is_a_noop() {
        let mut panel = ChatPanel::new();
        panel.input = " \t  ".to_string();
        assert!(panel.take_input_for_send().is_none());
        assert!(panel.transcript().is_empty());
        // The buffer is left alone so the user can edit it.
        assert_eq!(panel.input(), " \t  ");
    }

    #[test]
    fn untrimmed_input_is_sent_verbatim() {
        let mut panel = ChatPanel::new();
        panel.input = "  spaced  ".to_string();
        let sent = panel.take_input_for_send().unwrap();
        assert_eq!(sent, "  spaced  ");
        assert_eq!(panel.transcript()[0].content, "  spaced  ");
    }

    #[test]
    fn loading_is_true_strictly_between_send_and_completion() {
        let mut panel = ChatPanel::new();
        assert!(!panel.is_loading());

        panel.input = "q".to_string();
        panel.take_input_for_send().unwrap();
        assert!(panel.is_loading());

        panel.complete(reply("a", None));
        assert!(!panel.is_loading());
    }

    #[test]
    fn loading_clears_after_failure_too() {
        let mut panel = ChatPanel::new();
        panel.input = "q".to_string();
        panel.take_input_for_send().unwrap();
        panel.fail();
        assert!(!panel.is_loading());
        assert_eq!(panel.transcript()[1].content, FALLBACK_ERROR_MESSAGE);
        assert_eq!(panel.transcript()[1].role, Role::Assistant);
    }

    #[test]
    fn overlapping_send_is_rejected_while_in_flight() {
        let mut panel = ChatPanel::new();
        panel.input = "first".to_string();
        panel.take_input_for_send().unwrap();

        panel.input = "second".to_string();
        assert!(panel.take_input_for_send().is_none());
        // Transcript untouched by the rejected send.
        assert_eq!(panel.transcript().len(), 1);

        // Once the exchange completes, sending works again.
        panel.complete(reply("a", None));
        assert!(panel.take_input_for_send().is_some());
    }

    #[test]
    fn reply_links_are_kept_in_order() {
        let mut panel = ChatPanel::new();
        panel.input = "q".to_string();
        panel.take_input_for_send().unwrap();
        panel.complete(reply(
            "Hello",
            Some(vec!["https://a.example".to_string()]),
        ));
        assert_eq!(
            panel.transcript()[1].urls,
            Some(vec!["https://a.example".to_string()])
        );
    }

    #[test]
    fn reply_without_content_shows_the_fallback_literal() {
        // Normalization happens at the SDK boundary; the panel renders
        // whatever content the reply carries, fallback included.
        let mut panel = ChatPanel::new();
        panel.input = "q".to_string();
        panel.take_input_for_send().unwrap();
        panel.complete(AssistantReply {
            content: NO_CONTENT_FALLBACK.to_string(),
            urls: None,
        });
        assert_eq!(panel.transcript()[1].content, NO_CONTENT_FALLBACK);
    }

    #[test]
    fn suggestions_disappear_after_first_entry() {
        let mut panel = ChatPanel::new();
        assert!(panel.suggestions_visible());
        panel.input = "q".to_string();
        panel.take_input_for_send().unwrap();
        assert!(!panel.suggestions_visible());
    }

    #[test]
    fn suggestion_selection_wraps_both_ways() {
        let mut panel = ChatPanel::new();
        panel.prev_suggestion();
        assert_eq!(panel.selected_suggestion(), SUGGESTED_QUESTIONS.len() - 1);
        panel.next_suggestion();
        assert_eq!(panel.selected_suggestion(), 0);
    }

    #[test]
    fn adopting_a_suggestion_fills_the_input() {
        let mut panel = ChatPanel::new();
        panel.next_suggestion();
        panel.adopt_suggestion();
        assert_eq!(panel.input(), SUGGESTED_QUESTIONS[1].text);
    }
}
