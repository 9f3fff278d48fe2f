use std::sync::Arc;

use services::{ChatService, PracticeService, QuizService, SessionManager};

/// What the composition root must provide to the UI.
pub trait UiApp: Send + Sync {
    fn sessions(&self) -> Arc<SessionManager>;
    fn quiz(&self) -> Arc<QuizService>;
    fn practice(&self) -> Arc<PracticeService>;
    fn chat(&self) -> Arc<ChatService>;
}

#[derive(Clone)]
pub struct AppContext {
    sessions: Arc<SessionManager>,
    quiz: Arc<QuizService>,
    practice: Arc<PracticeService>,
    chat: Arc<ChatService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            sessions: app.sessions(),
            quiz: app.quiz(),
            practice: app.practice(),
            chat: app.chat(),
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

// This context is provided by the application composition root
// (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
