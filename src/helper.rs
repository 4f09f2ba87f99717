use dotenv::dotenv;
use std::env;

use crate::domain::contact::RESERVED_FIELDS;
use crate::errors::AppError;

/// Reads `key` from the environment, loading `.env` first.
pub fn get_env_value_by_key(key: &str) -> Result<String, AppError> {
    dotenv().ok();

    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or(AppError::NotFound(format!("{} in env", key)))
}

/// Parses repeated `key=value` flags into JSON fields.
///
/// Values that parse as JSON (numbers, booleans, quoted strings) keep their
/// type; anything else is stored as a plain string.
pub fn parse_field_pairs(
    pairs: &[String],
) -> Result<serde_json::Map<String, serde_json::Value>, AppError> {
    let mut fields = serde_json::Map::new();

    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(AppError::Parse(pair.to_string()));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(AppError::Parse(pair.to_string()));
        }
        if RESERVED_FIELDS.contains(&key) {
            return Err(AppError::Validation(format!(
                "`{}` cannot be set with --field",
                key
            )));
        }

        let value = serde_json::from_str(value.trim())
            .unwrap_or_else(|_| serde_json::Value::String(value.trim().to_string()));
        fields.insert(key.to_string(), value);
    }

    Ok(fields)
}
