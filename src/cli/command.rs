use clap::{Parser, Subcommand};

use crate::domain::search::FilterMode;

#[derive(Parser, Debug)]
#[command(name = "contact-deck", version, about = "Contact list with likes")]
pub struct Cli {
    /// Storage choice (file, mem) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("file"))]
    pub storage_choice: String,

    /// Directory the file storage keeps its data in
    #[arg(long, env = "CONTACTS_STORAGE_DIR", default_value_t = String::from("./.instance"))]
    pub storage_dir: String,

    /// URL or file path of the default contact set, used when nothing is stored yet
    #[arg(long, env = "CONTACTS_SOURCE")]
    pub source: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load contacts and report how many were received
    Load {
        /// Print the load status and the full list as JSON
        #[arg(long)]
        json: bool,
    },

    /// List contacts
    List {
        /// Only contacts whose first name contains this text
        #[arg(short, long, default_value_t = String::new())]
        search: String,

        /// Sort or narrow the list
        #[arg(short, long, value_enum, default_value_t = FilterMode::All)]
        filter: FilterMode,
    },

    /// Like a contact, or unlike it with --unlike
    Like {
        /// Contact id
        #[arg(long)]
        id: u64,

        /// Remove the like instead
        #[arg(long)]
        unlike: bool,
    },

    /// Replace the fields of a contact, keeping its like
    Update {
        /// Contact id
        #[arg(long)]
        id: u64,

        /// New first name
        #[arg(long)]
        first_name: String,

        /// Extra field as key=value, may be repeated
        #[arg(long = "field")]
        fields: Vec<String>,
    },
}

impl Commands {
    /// Whether the command changes the stored list.
    pub fn mutates(&self) -> bool {
        matches!(self, Commands::Like { .. } | Commands::Update { .. })
    }
}
