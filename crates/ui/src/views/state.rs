use dioxus::prelude::*;

/// Transient notification banner data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Replace the current notice banner.
pub fn notify(mut slot: Signal<Option<Notice>>, level: NoticeLevel, message: impl Into<String>) {
    slot.set(Some(Notice {
        message: message.into(),
        level,
    }));
}
