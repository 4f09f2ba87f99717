use super::*;

use crate::storage::{CONTACTS_KEY, DefaultSource, KeyValueStore, payload};
use crate::domain::search::{self, Controls, FilterMode};
use serde::Serialize;
use std::{collections::HashMap, fmt};

/// Lifecycle of the most recent `load()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Received,
    Rejected,
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            LoadStatus::Idle => "idle",
            LoadStatus::Loading => "loading",
            LoadStatus::Received => "received",
            LoadStatus::Rejected => "rejected",
        };
        write!(f, "{status}")
    }
}

/// Borrowed view of the manager's state.
#[derive(Debug, Serialize)]
pub struct ContactsSnapshot<'a> {
    pub status: LoadStatus,
    pub error: Option<&'a str>,
    pub list: &'a [Contact],
}

/// Owns the contact list and mirrors it to a key-value store on every change.
pub struct ContactManager {
    pub status: LoadStatus,
    pub error: Option<String>,
    pub list: Vec<Contact>,
    positions: HashMap<u64, usize>,
    storage: Box<dyn KeyValueStore>,
    source: Box<dyn DefaultSource>,
}

impl ContactManager {
    pub fn new(storage: Box<dyn KeyValueStore>, source: Box<dyn DefaultSource>) -> Self {
        Self {
            status: LoadStatus::Idle,
            error: None,
            list: Vec::new(),
            positions: HashMap::new(),
            storage,
            source,
        }
    }

    /// Populates the list from the persisted copy, or from the default source
    /// when nothing usable is persisted.
    ///
    /// On failure the status becomes `Rejected`, `error` holds the reason and
    /// the previous list is kept.
    pub fn load(&mut self) -> Result<(), AppError> {
        self.status = LoadStatus::Loading;
        self.error = None;

        match self.fetch_contacts() {
            Ok(contacts) => {
                self.replace_list(contacts);
                self.status = LoadStatus::Received;
                log::info!(
                    "received {} contacts ({} storage)",
                    self.list.len(),
                    self.storage.get_medium()
                );
                Ok(())
            }
            Err(err) => {
                let reason = err.reason();
                log::error!("loading contacts failed: {reason}");
                self.status = LoadStatus::Rejected;
                self.error = Some(reason);
                Err(err)
            }
        }
    }

    /// Replaces the stored contact that has the same id as `contact`.
    pub fn like_contact(&mut self, contact: Contact) -> Result<(), AppError> {
        let position = self.position_of(contact.id)?;
        self.list[position] = contact.normalized();
        self.save()
    }

    /// Replaces a contact's fields while keeping its liked flag.
    pub fn update_contact(&mut self, fields: ContactFields) -> Result<(), AppError> {
        let position = self.position_of(fields.id)?;
        let is_liked = self.list[position].is_liked;

        self.list[position] = Contact::from_fields(fields, is_liked);
        self.save()
    }

    pub fn set_liked(&mut self, id: u64, is_liked: bool) -> Result<(), AppError> {
        let position = self.position_of(id)?;
        let contact = self.list[position].clone().liked(is_liked);
        self.like_contact(contact)
    }

    pub fn get_by_id(&self, id: u64) -> Option<&Contact> {
        self.positions.get(&id).map(|&position| &self.list[position])
    }

    pub fn select_all(&self) -> ContactsSnapshot<'_> {
        ContactsSnapshot {
            status: self.status,
            error: self.error.as_deref(),
            list: &self.list,
        }
    }

    pub fn select_by_search(&self, query: &str) -> Vec<&Contact> {
        search::select_by_search(&self.list, query)
    }

    pub fn select_by_filter(&self, mode: FilterMode) -> Vec<&Contact> {
        let all: Vec<&Contact> = self.list.iter().collect();
        search::select_by_filter(&all, mode)
    }

    pub fn select_visible(&self, controls: &Controls) -> Vec<&Contact> {
        search::select_visible(&self.list, controls)
    }

    pub fn save(&self) -> Result<(), AppError> {
        let data = payload::encode_contacts(&self.list)?;
        self.storage.set(CONTACTS_KEY, &data)
    }

    fn fetch_contacts(&self) -> Result<Vec<Contact>, AppError> {
        match self.read_persisted() {
            Ok(Some(contacts)) => return Ok(contacts),
            Ok(None) => {}
            // A payload we cannot use is replaced by a fresh default set
            Err(err @ (AppError::Json(_) | AppError::Validation(_))) => {
                log::warn!("discarding persisted contacts: {err}");
            }
            Err(err) => return Err(err),
        }

        log::info!(
            "no persisted contacts, fetching defaults ({} source)",
            self.source.get_medium()
        );

        let defaults: Vec<Contact> = self
            .source
            .fetch_default()?
            .into_iter()
            .map(|fields| Contact::from_fields(fields, false))
            .collect();

        self.storage
            .set(CONTACTS_KEY, &payload::encode_contacts(&defaults)?)?;

        self.read_persisted()?
            .ok_or(AppError::NotFound("Persisted contacts".to_string()))
    }

    fn read_persisted(&self) -> Result<Option<Vec<Contact>>, AppError> {
        match self.storage.get(CONTACTS_KEY)? {
            Some(data) => Ok(Some(payload::decode_contacts(&data)?)),
            None => Ok(None),
        }
    }

    fn replace_list(&mut self, contacts: Vec<Contact>) {
        let mut positions = HashMap::with_capacity(contacts.len());

        for (position, contact) in contacts.iter().enumerate() {
            if positions.contains_key(&contact.id) {
                log::warn!(
                    "duplicate contact id {}, updates go to the first entry",
                    contact.id
                );
                continue;
            }
            positions.insert(contact.id, position);
        }

        self.positions = positions;
        self.list = contacts;
    }

    fn position_of(&self, id: u64) -> Result<usize, AppError> {
        self.positions
            .get(&id)
            .copied()
            .ok_or(AppError::NotFound(format!("Contact {}", id)))
    }
}
