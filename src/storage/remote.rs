use super::*;
use reqwest::blocking;
use serde::Deserialize;
use std::path::PathBuf;
use url::Url;

/// Fetches the default contact set over HTTP.
pub struct RemoteSource {
    pub medium: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl RemoteSource {
    pub fn new(url: &str) -> Self {
        Self {
            medium: "remote".to_string(),
            url: url.to_string(),
        }
    }

    /// Pulls the `message` out of a JSON error body, if the body is one.
    fn extract_error_message(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.is_empty())
    }
}

impl DefaultSource for RemoteSource {
    fn fetch_default(&self) -> Result<Vec<ContactFields>, AppError> {
        log::debug!("fetching default contacts from {}", self.url);

        let response = blocking::get(&self.url)?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(AppError::Remote {
                status: status.as_u16(),
                message: Self::extract_error_message(&body),
            });
        }

        payload::decode_contact_fields(&body)
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}

/// Reads the default contact set from a local JSON file.
pub struct FileSource {
    pub medium: String,
    pub path: PathBuf,
}

impl FileSource {
    pub fn new(path: &str) -> Self {
        Self {
            medium: "file".to_string(),
            path: PathBuf::from(path),
        }
    }
}

impl DefaultSource for FileSource {
    fn fetch_default(&self) -> Result<Vec<ContactFields>, AppError> {
        if !self.path.exists() {
            return Err(AppError::NotFound(format!(
                "Default contacts file {:?}",
                self.path
            )));
        }

        let data = fs::read_to_string(&self.path)?;
        payload::decode_contact_fields(&data)
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}

pub fn is_valid_url(url: &str) -> bool {
    Url::parse(url).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}
