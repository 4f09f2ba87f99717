pub mod contact;
pub mod manager;
pub mod search;

use crate::errors::AppError;
pub use contact::{Contact, ContactFields};
