mod chat;
mod home;
mod practice;
mod progress;
mod quiz;
mod shapes;
mod state;

pub use chat::ChatView;
pub use home::HomeView;
pub use practice::PracticeView;
pub use progress::ProgressView;
pub use quiz::QuizView;
pub use shapes::ShapesView;
pub use state::{Notice, NoticeLevel, notify};
