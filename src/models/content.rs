//! Tri-state load result shared by every content section.

use crate::core::error::ContentError;

/// State of one remote content load.
///
/// Exactly one variant holds at any time. Transitions are monotonic:
/// `Pending -> Ready` or `Pending -> Failed`, never backward. A fresh
/// load (section re-mount) starts over at `Pending` with a new instance.
///
/// An empty collection inside `Ready` is a distinct success case, not a
/// failure: the consuming section renders nothing for it.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentState<T> {
    /// Load in flight. A hung request stays here indefinitely.
    Pending,
    /// Payload fetched and deserialized to the section's schema.
    Ready(T),
    /// Fetch or validation failed; holds a human-readable message.
    Failed(String),
}

impl<T> ContentState<T> {
    /// Settle a load into its terminal state.
    ///
    /// Network and HTTP failures become `Failed("Failed to fetch <resource>")`,
    /// schema violations become `Failed("Invalid <resource> data format")`.
    pub fn from_result(result: Result<T, ContentError>, resource: &str) -> Self {
        match result {
            Ok(data) => Self::Ready(data),
            Err(err) => Self::Failed(err.message(resource)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_settles_ready() {
        let state = ContentState::from_result(Ok(vec![1, 2, 3]), "skills");
        assert_eq!(state, ContentState::Ready(vec![1, 2, 3]));
    }

    #[test]
    fn test_empty_payload_is_ready_not_failed() {
        let state = ContentState::from_result(Ok(Vec::<i32>::new()), "skills");
        assert_eq!(state, ContentState::Ready(vec![]));
    }

    #[test]
    fn test_network_failure_message() {
        let state: ContentState<()> = ContentState::from_result(
            Err(ContentError::Network("connection refused".to_string())),
            "projects",
        );
        assert_eq!(
            state,
            ContentState::Failed("Failed to fetch projects".to_string())
        );
    }

    #[test]
    fn test_http_failure_message() {
        let state: ContentState<()> =
            ContentState::from_result(Err(ContentError::Http(404)), "projects");
        assert_eq!(
            state,
            ContentState::Failed("Failed to fetch projects".to_string())
        );
    }

    #[test]
    fn test_schema_violation_message() {
        let state: ContentState<()> = ContentState::from_result(
            Err(ContentError::Decode("expected array".to_string())),
            "social",
        );
        assert_eq!(
            state,
            ContentState::Failed("Invalid social data format".to_string())
        );
    }
}
