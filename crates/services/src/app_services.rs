use std::sync::Arc;

use storage::Storage;
use tutor_core::Clock;

use crate::api::RemoteApi;
use crate::chat_service::ChatService;
use crate::practice_service::PracticeService;
use crate::quiz_service::QuizService;
use crate::session_service::SessionManager;
use crate::tutor_responder::TutorResponder;

/// Assembles the app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    sessions: Arc<SessionManager>,
    quiz: Arc<QuizService>,
    practice: Arc<PracticeService>,
    chat: Arc<ChatService>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, clock: Clock) -> Self {
        let sessions = Arc::new(SessionManager::new(clock, storage));
        let quiz = Arc::new(QuizService::new(clock, Arc::clone(&storage.progress)));
        let practice = Arc::new(PracticeService::new(clock, Arc::clone(&storage.progress)));
        let chat = Arc::new(ChatService::new(TutorResponder::new(), RemoteApi::new()));

        Self {
            sessions,
            quiz,
            practice,
            chat,
        }
    }

    #[must_use]
    pub fn sessions(&self) -> Arc<SessionManager> {
        Arc::clone(&self.sessions)
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn practice(&self) -> Arc<PracticeService> {
        Arc::clone(&self.practice)
    }

    #[must_use]
    pub fn chat(&self) -> Arc<ChatService> {
        Arc::clone(&self.chat)
    }
}
