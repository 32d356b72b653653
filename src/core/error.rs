//! Error taxonomy for remote content loads.

use thiserror::Error;

/// What went wrong while loading one content resource.
///
/// Every section handles its own failures locally by rendering the
/// resource-specific message from [`ContentError::message`]; nothing here
/// propagates upward past the owning section.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContentError {
    /// Endpoint unreachable (network error, CORS, aborted request).
    #[error("network error: {0}")]
    Network(String),

    /// Endpoint responded with a non-success status.
    #[error("HTTP error: {0}")]
    Http(u16),

    /// Payload failed to deserialize to the resource's schema.
    #[error("JSON decode error: {0}")]
    Decode(String),
}

impl ContentError {
    /// Human-readable message rendered inline by the owning section.
    pub fn message(&self, resource: &str) -> String {
        match self {
            Self::Network(_) | Self::Http(_) => format!("Failed to fetch {resource}"),
            Self::Decode(_) => format!("Invalid {resource} data format"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failures_share_message() {
        let network = ContentError::Network("timeout".to_string());
        let http = ContentError::Http(500);
        assert_eq!(network.message("education"), "Failed to fetch education");
        assert_eq!(http.message("education"), "Failed to fetch education");
    }

    #[test]
    fn test_schema_violation_message() {
        let decode = ContentError::Decode("missing field `skills`".to_string());
        assert_eq!(decode.message("skills"), "Invalid skills data format");
    }
}
