use crate::error::ApiError;

/// Stub client for the remote tutoring backend.
///
/// Every request reports the backend unavailable, which keeps quiz,
/// practice, and chat logic on the local path.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoteApi;

impl RemoteApi {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Issue a request against the remote backend.
    ///
    /// # Errors
    ///
    /// Always returns `ApiError::Unavailable`; no I/O is performed.
    pub fn request(&self, endpoint: &str) -> Result<String, ApiError> {
        tracing::debug!(endpoint, "remote API request skipped, using local mode");
        Err(ApiError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_request_reports_unavailable() {
        let api = RemoteApi::new();
        assert!(matches!(api.request("login"), Err(ApiError::Unavailable)));
        assert!(matches!(
            api.request("tutor/ask"),
            Err(ApiError::Unavailable)
        ));
    }
}
