use thiserror::Error;

pub const NETWORK_FALLBACK_MESSAGE: &str = "Could not load venue details.";

/// Failures that replace the whole detail view with a single message.
///
/// `Display` is the text shown to the user (without the `Error: ` prefix the
/// error block adds).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VenueError {
    #[error("No Venue ID provided in the URL.")]
    MissingIdentifier,

    #[error("Venue with ID {id} not found.")]
    NotFound { id: String },

    #[error("HTTP error while loading venue! Status: {}", status_line(.status, .status_text))]
    HttpError { status: u16, status_text: String },

    #[error("{0}")]
    NetworkError(String),
}

impl VenueError {
    /// Wraps a lower level failure, falling back to a generic message when it
    /// has no description of its own.
    pub fn network(description: impl ToString) -> Self {
        let description = description.to_string();
        if description.trim().is_empty() {
            VenueError::NetworkError(NETWORK_FALLBACK_MESSAGE.to_string())
        } else {
            VenueError::NetworkError(description)
        }
    }
}

fn status_line(status: &u16, status_text: &str) -> String {
    if status_text.is_empty() {
        status.to_string()
    } else {
        format!("{} {}", status, status_text)
    }
}

/// Map initialization failure, contained to the map region of the page.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MapRenderError {
    #[error("invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("{0}")]
    Library(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_id() {
        let err = VenueError::NotFound { id: "42".to_string() };
        assert_eq!(err.to_string(), "Venue with ID 42 not found.");
    }

    #[test]
    fn http_error_message_includes_status_and_text() {
        let err = VenueError::HttpError {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP error while loading venue! Status: 503 Service Unavailable"
        );
    }

    #[test]
    fn http_error_without_reason_has_no_trailing_space() {
        let err = VenueError::HttpError {
            status: 599,
            status_text: String::new(),
        };
        assert_eq!(err.to_string(), "HTTP error while loading venue! Status: 599");
    }

    #[test]
    fn network_error_falls_back_when_description_is_blank() {
        assert_eq!(
            VenueError::network("  ").to_string(),
            NETWORK_FALLBACK_MESSAGE
        );
        assert_eq!(
            VenueError::network("connection refused").to_string(),
            "connection refused"
        );
    }
}
