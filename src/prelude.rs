pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact, ContactFields},
    manager::{ContactManager, ContactsSnapshot, LoadStatus},
    search::{self, Controls, FilterMode, select_by_filter, select_by_search, select_visible},
};
pub use crate::errors::AppError;
pub use crate::storage::{
    self, CONTACTS_KEY, DefaultSource, KeyValueStore, StorageMediums, parse_source_type,
    parse_storage_type,
    remote::{FileSource, RemoteSource},
    stores::{JsonFileStore, MemStore},
};
