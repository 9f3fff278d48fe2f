#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod chat_service;
pub mod error;
pub mod practice_service;
pub mod quiz_service;
pub mod session_service;
pub mod tutor_responder;

pub use tutor_core::Clock;

pub use api::RemoteApi;
pub use app_services::AppServices;
pub use chat_service::ChatService;
pub use error::{ApiError, LoginError, PracticeError, ProgressSyncError};
pub use practice_service::{PracticeFeedback, PracticeService};
pub use quiz_service::{OptionFeedback, QuizAdvance, QuizRound, QuizService};
pub use session_service::{SessionManager, StudySession};
pub use tutor_responder::{ShapeEntry, TutorResponder};
