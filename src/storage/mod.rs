pub mod payload;
pub mod remote;
pub mod stores;

use crate::prelude::{AppError, Contact, ContactFields};
use dotenv::dotenv;
use std::fs;
use std::path::Path;

pub const CONTACTS_KEY: &str = "contacts";

/// Durable string key-value store the contact list is mirrored to.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

/// Provider of the initial contact set when nothing is persisted yet.
pub trait DefaultSource {
    fn fetch_default(&self) -> Result<Vec<ContactFields>, AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    File,
    Mem,
}

impl StorageMediums {
    pub fn is_file(&self) -> bool {
        matches!(self, StorageMediums::File)
    }

    pub fn is_which(&self) -> &str {
        if self.is_file() { "file" } else { "mem" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.to_lowercase().as_str() {
            "file" | "json" => Ok(StorageMediums::File),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::Validation(
                "Not a recognized storage medium".to_string(),
            )),
        }
    }
}

pub fn parse_storage_type(
    storage_medium: Option<StorageMediums>,
    storage_dir: &str,
) -> Result<Box<dyn KeyValueStore>, AppError> {
    let medium: StorageMediums;
    if let Some(storage_medium) = storage_medium {
        medium = storage_medium;
    } else {
        dotenv().ok();

        let choice = std::env::var("STORAGE_CHOICE").unwrap_or("file".to_string());
        medium = StorageMediums::from(&choice)?;
    }

    match medium {
        StorageMediums::File => Ok(Box::new(stores::JsonFileStore::new(storage_dir))),
        StorageMediums::Mem => Ok(Box::new(stores::MemStore::new())),
    }
}

/// Picks the default source from a URL or a file path.
pub fn parse_source_type(source: Option<&str>) -> Result<Box<dyn DefaultSource>, AppError> {
    let source = source
        .map(str::to_string)
        .or_else(|| crate::helper::get_env_value_by_key("CONTACTS_SOURCE").ok())
        .ok_or(AppError::NotFound("Default contacts source".to_string()))?;

    if remote::is_valid_url(&source) {
        Ok(Box::new(remote::RemoteSource::new(&source)))
    } else {
        Ok(Box::new(remote::FileSource::new(&source)))
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
