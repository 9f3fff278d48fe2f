use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::api::RemoteApi;
use crate::tutor_responder::TutorResponder;

/// Chat tutor with a simulated thinking delay.
///
/// Each ask supersedes any pending one: the older reply is dropped instead
/// of arriving late and interleaving with the newer exchange.
#[derive(Clone)]
pub struct ChatService {
    responder: TutorResponder,
    api: RemoteApi,
    delay: Duration,
    latest: Arc<AtomicU64>,
}

impl ChatService {
    /// Default thinking delay shown to the user.
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

    #[must_use]
    pub fn new(responder: TutorResponder, api: RemoteApi) -> Self {
        Self {
            responder,
            api,
            delay: Self::DEFAULT_DELAY,
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Override the thinking delay.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn responder(&self) -> &TutorResponder {
        &self.responder
    }

    /// Answer a question immediately, without the thinking delay.
    #[must_use]
    pub fn respond_now(&self, question: &str) -> String {
        // The remote tutor is consulted first but never reachable; every
        // question is answered locally.
        if let Err(err) = self.api.request("tutor/ask") {
            tracing::debug!(%err, "answering locally");
        }
        self.responder.respond(question)
    }

    /// Answer a question after the thinking delay.
    ///
    /// Returns `None` if another ask arrived while this one was pending;
    /// the superseded reply must not be shown.
    pub async fn ask(&self, question: &str) -> Option<String> {
        let ticket = self.latest.fetch_add(1, Ordering::AcqRel) + 1;
        tokio::time::sleep(self.delay).await;
        if self.latest.load(Ordering::Acquire) != ticket {
            tracing::debug!(ticket, "chat reply superseded, dropping");
            return None;
        }
        Some(self.respond_now(question))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat(delay: Duration) -> ChatService {
        ChatService::new(TutorResponder::new(), RemoteApi::new()).with_delay(delay)
    }

    #[tokio::test]
    async fn ask_answers_after_the_delay() {
        let chat = chat(Duration::ZERO);
        let reply = chat.ask("volume of a cube").await;
        assert!(reply.unwrap().contains("Volume of a cube"));
    }

    #[tokio::test]
    async fn newer_ask_supersedes_the_pending_reply() {
        let chat = chat(Duration::from_millis(50));

        let pending = tokio::spawn({
            let chat = chat.clone();
            async move { chat.ask("volume of a cube").await }
        });
        // Let the first ask register and start waiting.
        tokio::time::sleep(Duration::from_millis(10)).await;

        let newer = chat.ask("hello").await;
        assert!(newer.is_some());
        assert_eq!(pending.await.unwrap(), None);
    }

    #[tokio::test]
    async fn sequential_asks_all_answer() {
        let chat = chat(Duration::ZERO);
        assert!(chat.ask("hello").await.is_some());
        assert!(chat.ask("area of a triangle").await.is_some());
    }
}
