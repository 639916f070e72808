use crate::{
    cli::display_directory,
    prelude::{
        AppError, MissingField,
        command::{Cli, Commands},
        store::{ContactStore, JsonStore},
    },
};
use clap::Parser;
use dotenv::dotenv;
use tracing::debug;

pub fn run_app() -> Result<(), AppError> {
    // .env may provide ANNUAIRE_FILE
    dotenv().ok();

    let cli = Cli::parse();
    let store = JsonStore::new(cli.file);

    let report = run_command(&store, cli.command)?;
    println!("{report}");

    Ok(())
}

/// Loads the directory, applies one command and saves it back when the
/// command mutated it. Returns the text to report to the user.
pub fn run_command(store: &dyn ContactStore, command: Commands) -> Result<String, AppError> {
    let mut directory = store.load()?;
    debug!(?command, contacts = directory.len(), "running command");

    match command {
        Commands::Add {
            name,
            given_name,
            phone,
        } => {
            let added = directory.add(&name, &given_name, &phone)?;
            let report = format!("Contact added successfully: {added}");

            store.save(&directory)?;
            Ok(report)
        }

        // Listing contacts
        Commands::List => Ok(display_directory(&directory)),

        // Search for a contact
        Commands::Search { name } => match directory.find(&name) {
            Some(contact) => Ok(format!("Contact found: {contact}")),
            None => Err(AppError::NotFound(name.trim().to_string())),
        },

        // Delete Contact
        Commands::Delete { name } => {
            let removed = directory.delete(&name)?;

            store.save(&directory)?;
            Ok(format!("Contact '{}' deleted successfully", removed.name))
        }

        // Edit Contact
        Commands::Update {
            name,
            given_name,
            phone,
        } => {
            let given_name = given_name.as_deref().unwrap_or_default();
            let phone = phone.as_deref().unwrap_or_default();

            if given_name.trim().is_empty() && phone.trim().is_empty() {
                return Err(AppError::Validation(MissingField::Changes));
            }

            let updated = directory.update(&name, given_name, phone)?;
            let report = format!("Contact '{}' updated successfully", updated.name);

            store.save(&directory)?;
            Ok(report)
        }
    }
}
