//! # Chat Session
//!
//! File: cli/src/assistant/session.rs
//!
//! ## Overview
//!
//! A `ChatSession` ties the pieces of a conversation together:
//! - the injected `Responder` (rule tables, fixed for the session's lifetime),
//! - the append-only `Transcript`,
//! - a `Delay` port that produces the cosmetic "thinking" pause.
//!
//! Rendering is delegated to a `ChatView`, so the session knows nothing about
//! terminals. The terminal implementation lives in `commands::chat`; tests use
//! recording views and delays so they never wait on a wall clock.
//!
//! ## Submission flow
//!
//! 1. Blank or whitespace-only text is ignored: nothing is appended and the
//!    responder is not consulted.
//! 2. The trimmed user text is appended and rendered.
//! 3. The view shows a typing indicator while the delay elapses.
//! 4. The responder picks a reply, which is appended and rendered.
//!
//! Every accepted submission therefore adds exactly two turns, even when the
//! view fails part way; the error is returned after both turns are recorded.
//!
use crate::assistant::responder::Responder;
use crate::assistant::transcript::{Speaker, Transcript, Turn};
use crate::core::error::Result;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};

/// Scheduling port for the "thinking" pause.
pub trait Delay {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Presentation capability used by the session.
pub trait ChatView {
    /// Displays a newly appended turn.
    fn render_turn(&mut self, turn: &Turn) -> Result<()>;
    /// Signals that a reply is on its way.
    fn show_typing(&mut self) -> Result<()>;
    /// Removes the indicator shown by `show_typing`.
    fn hide_typing(&mut self) -> Result<()>;
}

/// One conversation: the responder, its transcript and the thinking pause.
pub struct ChatSession<D: Delay> {
    responder: Responder,
    transcript: Transcript,
    delay: D,
    thinking_time: Duration,
}

impl<D: Delay> ChatSession<D> {
    /// Starts a session with an empty transcript. `thinking_time` is passed to
    /// `delay` once per accepted submission.
    pub fn new(responder: Responder, delay: D, thinking_time: Duration) -> Self {
        Self {
            responder,
            transcript: Transcript::new(),
            delay,
            thinking_time,
        }
    }

    /// # Submit (`submit`)
    ///
    /// Handles one user submission.
    ///
    /// The transcript is updated before any view error is reported: once the
    /// user turn is accepted, the assistant turn is appended as well, so the
    /// history always holds complete exchanges.
    ///
    /// ## Arguments
    ///
    /// * `text`: Raw user input. Surrounding whitespace is trimmed.
    /// * `view`: Where turns and the typing indicator are drawn.
    ///
    /// ## Returns
    ///
    /// * `Result<Option<&Turn>>`: The assistant's turn, or `None` when the
    ///   input was blank (nothing is appended or rendered then).
    /// * `Err`: The view failed to render. Both turns are in the transcript.
    pub async fn submit<V: ChatView>(&mut self, text: &str, view: &mut V) -> Result<Option<&Turn>> {
        let message = text.trim();
        if message.is_empty() {
            debug!("Ignoring blank chat submission");
            return Ok(None);
        }

        let user_turn = self.transcript.push(Speaker::User, message);
        let shown = view
            .render_turn(user_turn)
            .and_then(|()| view.show_typing());
        if shown.is_ok() {
            self.delay.wait(self.thinking_time).await;
        }

        let selection = self.responder.explain(message);
        info!("Selected chat reply via {:?}", selection.tier);
        let reply = selection.response.to_string();
        let assistant_turn = self.transcript.push(Speaker::Assistant, reply);

        shown?;
        view.hide_typing()?;
        view.render_turn(assistant_turn)?;
        Ok(Some(assistant_turn))
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn responder(&self) -> &Responder {
        &self.responder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::responder::Rule;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingDelay {
        waits: Arc<Mutex<Vec<Duration>>>,
    }

    impl Delay for RecordingDelay {
        async fn wait(&self, duration: Duration) {
            self.waits.lock().unwrap().push(duration);
        }
    }

    #[derive(Default)]
    struct RecordingView {
        events: Vec<String>,
    }

    impl ChatView for RecordingView {
        fn render_turn(&mut self, turn: &Turn) -> Result<()> {
            self.events.push(format!("{}: {}", turn.speaker(), turn.text()));
            Ok(())
        }

        fn show_typing(&mut self) -> Result<()> {
            self.events.push("typing".into());
            Ok(())
        }

        fn hide_typing(&mut self) -> Result<()> {
            self.events.push("done".into());
            Ok(())
        }
    }

    struct BrokenView;

    impl ChatView for BrokenView {
        fn render_turn(&mut self, _turn: &Turn) -> Result<()> {
            anyhow::bail!("terminal went away")
        }
        fn show_typing(&mut self) -> Result<()> {
            Ok(())
        }
        fn hide_typing(&mut self) -> Result<()> {
            Ok(())
        }
    }

    fn session(delay: RecordingDelay) -> ChatSession<RecordingDelay> {
        let responder = Responder::new(
            vec![Rule::new("ping", "pong").unwrap()],
            vec![Rule::new("thank", "any time").unwrap()],
            "hmm",
        );
        ChatSession::new(responder, delay, Duration::from_millis(1000))
    }

    #[tokio::test]
    async fn submission_appends_user_then_assistant() {
        let delay = RecordingDelay::default();
        let mut chat = session(delay.clone());
        let mut view = RecordingView::default();

        let reply = chat.submit("  PING please ", &mut view).await.unwrap();
        assert_eq!(reply.map(Turn::text), Some("pong"));

        assert_eq!(
            view.events,
            vec!["user: PING please", "typing", "done", "assistant: pong"]
        );
        assert_eq!(chat.transcript().len(), 2);
        assert_eq!(*delay.waits.lock().unwrap(), vec![Duration::from_millis(1000)]);
    }

    #[tokio::test]
    async fn blank_submission_is_ignored() {
        let delay = RecordingDelay::default();
        let mut chat = session(delay.clone());
        let mut view = RecordingView::default();

        assert!(chat.submit("", &mut view).await.unwrap().is_none());
        assert!(chat.submit(" \t\n", &mut view).await.unwrap().is_none());

        assert!(chat.transcript().is_empty());
        assert!(view.events.is_empty());
        assert!(delay.waits.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn earlier_turns_do_not_influence_later_replies() {
        let mut chat = session(RecordingDelay::default());
        let mut view = RecordingView::default();

        chat.submit("ping", &mut view).await.unwrap();
        chat.submit("thanks", &mut view).await.unwrap();
        chat.submit("what now", &mut view).await.unwrap();

        let replies: Vec<&str> = chat
            .transcript()
            .iter()
            .filter(|t| t.speaker() == Speaker::Assistant)
            .map(Turn::text)
            .collect();
        assert_eq!(replies, vec!["pong", "any time", "hmm"]);
        assert_eq!(chat.transcript().len(), 6);
    }

    #[tokio::test]
    async fn view_errors_propagate() {
        let mut chat = session(RecordingDelay::default());
        let result = chat.submit("ping", &mut BrokenView).await;
        assert!(result.unwrap_err().to_string().contains("terminal went away"));

        // The exchange is still complete in the history.
        let turns: Vec<(Speaker, &str)> = chat
            .transcript()
            .iter()
            .map(|t| (t.speaker(), t.text()))
            .collect();
        assert_eq!(
            turns,
            vec![(Speaker::User, "ping"), (Speaker::Assistant, "pong")]
        );
    }
}
