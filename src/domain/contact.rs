use super::*;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const ID_FIELD: &str = "id";
pub const FIRST_NAME_FIELD: &str = "firstName";
pub const LIKED_FIELD: &str = "isLiked";

/// Keys owned by named fields; they must never also live in `extra`.
pub const RESERVED_FIELDS: [&str; 3] = [ID_FIELD, FIRST_NAME_FIELD, LIKED_FIELD];

/// A contact as it is kept in memory and persisted.
///
/// Fields this crate does not model (avatar, email, age...) are kept in
/// `extra` and written back unchanged.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: u64,
    pub first_name: String,

    #[serde(default = "bool::default")] // Seeded payloads may omit the flag
    pub is_liked: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Contact-shaped record without the liked flag.
///
/// This is both what the default source hands out and what an update carries.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContactFields {
    pub id: u64,
    pub first_name: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn first_name_req() -> String {
        "First name must begin with a letter, may contain spaces, hyphens and apostrophes \
        and must not exceed 50 characters"
            .to_string()
    }
}

impl Contact {
    pub fn new(id: u64, first_name: &str) -> Self {
        Contact {
            id,
            first_name: first_name.to_string(),
            is_liked: false,
            extra: Map::new(),
        }
    }

    pub fn liked(mut self, is_liked: bool) -> Self {
        self.is_liked = is_liked;
        self
    }

    /// Builds a contact from plain fields and an explicit liked flag.
    pub fn from_fields(fields: ContactFields, is_liked: bool) -> Self {
        let ContactFields {
            id,
            first_name,
            extra,
        } = fields;

        Contact {
            id,
            first_name,
            is_liked,
            extra,
        }
        .normalized()
    }

    /// Drops reserved keys from `extra`, which would otherwise be written
    /// twice and shadow the named fields on the next read.
    pub fn normalized(mut self) -> Self {
        for key in RESERVED_FIELDS {
            if self.extra.remove(key).is_some() {
                log::warn!("ignoring extra `{}` on contact {}", key, self.id);
            }
        }
        self
    }
}

impl ContactFields {
    pub fn new(id: u64, first_name: &str) -> Self {
        ContactFields {
            id,
            first_name: first_name.to_string(),
            extra: Map::new(),
        }
    }

    pub fn with_field(mut self, key: &str, value: Value) -> Self {
        self.extra.insert(key.to_string(), value);
        self
    }

    pub fn validate_first_name(&self) -> Result<bool, AppError> {
        // Must begin with a letter
        // May contain spaces, hyphens, dots and apostrophes after that
        // Not more than 50 characters
        let re = Regex::new(r"^\p{L}[\p{L}\s'.-]*$")?;
        Ok(self.first_name.chars().count() <= 50 && re.is_match(&self.first_name))
    }
}
