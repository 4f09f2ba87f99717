use crate::{
    helper,
    prelude::{
        AppError, Contact, ContactFields, ContactManager, Controls, DefaultSource,
        StorageMediums,
        command::{Cli, Commands},
        contact::ValidationReq,
        parse_source_type, parse_storage_type,
    },
};
use clap::Parser;
use dotenv::dotenv;

pub fn run_app() -> Result<(), AppError> {
    // Let clap see values kept in .env
    dotenv().ok();

    let cli = Cli::parse();

    let medium = StorageMediums::from(&cli.storage_choice)?;
    let storage = parse_storage_type(Some(medium), &cli.storage_dir)?;

    log::debug!("storage choice is: {}", medium.is_which());

    if !medium.is_file() && cli.command.mutates() {
        log::warn!("mem storage is dropped when the command exits, this change will not be kept");
    }

    // The source is only needed when nothing is stored yet, so a missing
    // source is reported by load() rather than here.
    let source: Box<dyn DefaultSource> = match parse_source_type(cli.source.as_deref()) {
        Ok(source) => source,
        Err(AppError::NotFound(_)) => Box::new(MissingSource),
        Err(err) => return Err(err),
    };

    let mut manager = ContactManager::new(storage, source);

    manager.load()?;

    match cli.command {
        Commands::Load { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&manager.select_all())?);
            } else {
                println!("Contacts received: {}", manager.list.len());
            }
            Ok(())
        }

        Commands::List { search, filter } => {
            let controls = Controls::new(&search, filter);
            let visible = manager.select_visible(&controls);

            if visible.is_empty() {
                println!("No contacts to show");
                return Ok(());
            }

            for contact in visible {
                println!("{}", display_contact(contact));
            }
            Ok(())
        }

        Commands::Like { id, unlike } => {
            manager.set_liked(id, !unlike)?;

            if unlike {
                println!("Contact {} unliked", id);
            } else {
                println!("Contact {} liked", id);
            }
            Ok(())
        }

        Commands::Update {
            id,
            first_name,
            fields,
        } => {
            let mut update = ContactFields::new(id, first_name.trim());
            update.extra = helper::parse_field_pairs(&fields)?;

            if !update.validate_first_name()? {
                return Err(AppError::Validation(ValidationReq::first_name_req()));
            }

            manager.update_contact(update)?;
            println!("Contact updated successfully");
            Ok(())
        }
    }
}

pub fn display_contact(contact: &Contact) -> String {
    let liked = if contact.is_liked { "liked" } else { "" };
    format!("{:>4}. {:<20} {}", contact.id, contact.first_name, liked)
        .trim_end()
        .to_string()
}

/// Stand-in used when no default source is configured.
struct MissingSource;

impl DefaultSource for MissingSource {
    fn fetch_default(&self) -> Result<Vec<ContactFields>, AppError> {
        Err(AppError::NotFound(
            "Default contacts source (set --source or CONTACTS_SOURCE)".to_string(),
        ))
    }

    fn get_medium(&self) -> &str {
        "none"
    }
}
