use std::{cmp::Ordering, fmt, str::FromStr};

use clap::ValueEnum;

use crate::prelude::{AppError, Contact};

/// How the visible list is ordered or narrowed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FilterMode {
    /// First name, A to Z
    #[value(name = "sortA-Z")]
    SortAsc,
    /// First name, Z to A
    #[value(name = "sortZ-A")]
    SortDesc,
    /// Only liked contacts
    #[value(name = "liked")]
    Liked,
    /// Keep the list as it is
    #[default]
    #[value(name = "all")]
    All,
}

impl FilterMode {
    pub fn as_str(&self) -> &str {
        match self {
            FilterMode::SortAsc => "sortA-Z",
            FilterMode::SortDesc => "sortZ-A",
            FilterMode::Liked => "liked",
            FilterMode::All => "all",
        }
    }
}

impl FromStr for FilterMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sortA-Z" => Ok(FilterMode::SortAsc),
            "sortZ-A" => Ok(FilterMode::SortDesc),
            "liked" => Ok(FilterMode::Liked),
            "all" | "" => Ok(FilterMode::All),
            _ => Err(AppError::Parse(s.to_string())),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Search query and filter mode picked by the user.
#[derive(Debug, Default, Clone)]
pub struct Controls {
    pub search: String,
    pub filter: FilterMode,
}

impl Controls {
    pub fn new(search: &str, filter: FilterMode) -> Self {
        Self {
            search: search.to_string(),
            filter,
        }
    }
}

/// Contacts whose first name contains `query`, ignoring case.
pub fn select_by_search<'a>(list: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    let query = query.to_lowercase();

    list.iter()
        .filter(|contact| contact.first_name.to_lowercase().contains(&query))
        .collect()
}

/// Applies `mode` to `list` and returns a new sequence; `list` is never reordered.
pub fn select_by_filter<'a>(list: &[&'a Contact], mode: FilterMode) -> Vec<&'a Contact> {
    let mut selected = list.to_vec();

    match mode {
        // sort_by is stable, so equal names keep their relative order
        FilterMode::SortAsc => selected.sort_by(|a, b| compare_first_names(a, b)),
        FilterMode::SortDesc => selected.sort_by(|a, b| compare_first_names(b, a)),
        FilterMode::Liked => selected.retain(|contact| contact.is_liked),
        FilterMode::All => {}
    }

    selected
}

pub fn select_visible<'a>(list: &'a [Contact], controls: &Controls) -> Vec<&'a Contact> {
    let found = select_by_search(list, &controls.search);
    select_by_filter(&found, controls.filter)
}

fn compare_first_names(a: &Contact, b: &Contact) -> Ordering {
    a.first_name
        .to_lowercase()
        .cmp(&b.first_name.to_lowercase())
}
