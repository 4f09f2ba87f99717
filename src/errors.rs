use core::fmt;
use std::error::Error;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Json(serde_json::Error),
    FailedRequest(reqwest::Error),
    Remote {
        status: u16,
        message: Option<String>,
    },
    NotFound(String),
    Parse(String),
    Regex(regex::Error),
    Validation(String),
}

impl AppError {
    /// Human readable reason for a failed operation.
    ///
    /// Prefers the message carried inside a remote error response, then the
    /// message of the wrapped error, then this error's own display form.
    pub fn reason(&self) -> String {
        if let AppError::Remote {
            message: Some(message),
            ..
        } = self
            && !message.is_empty()
        {
            return message.clone();
        }

        if let Some(source) = self.source() {
            let message = source.to_string();
            if !message.is_empty() {
                return message;
            }
        }

        self.to_string()
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::FailedRequest(err)
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Regex(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "Malformed contact data: {}", e)
            }
            AppError::FailedRequest(e) => {
                write!(f, "Request to contact source failed: {}", e)
            }
            AppError::Remote { status, message } => match message {
                Some(message) => write!(f, "Contact source responded {}: {}", status, message),
                None => write!(f, "Contact source responded {}", status),
            },
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::Parse(input) => {
                write!(f, "Could not parse '{}'", input)
            }
            AppError::Regex(e) => {
                write!(f, "Invalid pattern: {}", e)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::FailedRequest(e) => Some(e),
            AppError::Regex(e) => Some(e),
            _ => None,
        }
    }
}
