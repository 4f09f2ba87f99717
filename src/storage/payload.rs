use super::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const PAYLOAD_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct PersistedContacts {
    version: u32,
    contacts: Vec<Contact>,
}

#[derive(Serialize)]
struct PersistedContactsRef<'a> {
    version: u32,
    contacts: &'a [Contact],
}

pub fn encode_contacts(contacts: &[Contact]) -> Result<String, AppError> {
    let payload = PersistedContactsRef {
        version: PAYLOAD_VERSION,
        contacts,
    };
    Ok(serde_json::to_string(&payload)?)
}

pub fn decode_contacts(data: &str) -> Result<Vec<Contact>, AppError> {
    let value: Value = serde_json::from_str(data)?;

    // Current format: versioned envelope
    if value.is_object() {
        let payload: PersistedContacts = serde_json::from_value(value)?;

        if payload.version != PAYLOAD_VERSION {
            return Err(AppError::Validation(format!(
                "Unsupported contacts payload version {}",
                payload.version
            )));
        }
        Ok(payload.contacts)
    } else if value.is_array() {
        // Bare array, as written by older versions or seeded by hand
        let contacts: Vec<Contact> = serde_json::from_value(value)?;
        Ok(contacts)
    } else {
        Err(AppError::Validation(
            "Invalid JSON structure: expected object or array".to_string(),
        ))
    }
}

/// Default-source payloads: either a bare array or an object holding `users`.
pub fn decode_contact_fields(data: &str) -> Result<Vec<ContactFields>, AppError> {
    let mut value: Value = serde_json::from_str(data)?;

    if let Some(users) = value.get_mut("users") {
        return Ok(serde_json::from_value(users.take())?);
    }

    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        Err(AppError::Validation(
            "Invalid JSON structure: expected array of contacts or object with `users`"
                .to_string(),
        ))
    }
}
