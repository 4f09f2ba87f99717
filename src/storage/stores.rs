use super::*;

use std::{
    cell::RefCell,
    collections::HashMap,
    fs::OpenOptions,
    io::{Read, Write},
    path::PathBuf,
};

/// Keeps every key in its own `<dir>/<key>.json` file.
pub struct JsonFileStore {
    pub medium: String,
    pub dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: &str) -> Self {
        Self {
            medium: "file".to_string(),
            dir: PathBuf::from(dir),
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key);
        if !fs::exists(&path)? {
            return Ok(None);
        }

        let mut file = OpenOptions::new().read(true).open(&path)?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // An empty file is treated like a missing key
        if data.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(data))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.path_for(key);
        if !path.exists() {
            create_file_parent(&path)?;
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;

        file.write_all(value.as_bytes())?;
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}

/// Process-local store, gone when the process exits.
pub struct MemStore {
    pub medium: String,
    data: RefCell<HashMap<String, String>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            medium: "mem".to_string(),
            data: RefCell::new(HashMap::new()),
        }
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.data.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
