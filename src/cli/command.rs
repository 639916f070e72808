use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

use crate::store::SNAPSHOT_PATH;

#[derive(Parser, Debug)]
#[command(name = "annuaire", version, about = "Simple contact directory")]
pub struct Cli {
    /// Path of the JSON snapshot holding the directory
    #[arg(long, env = "ANNUAIRE_FILE", default_value = SNAPSHOT_PATH)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    #[command(visible_alias = "ajouter")]
    Add {
        /// Contact name
        #[arg(long, visible_alias = "nom")]
        name: String,

        /// Contact given name
        #[arg(long, visible_alias = "prenom", default_value = "")]
        given_name: String,

        /// Contact phone number
        #[arg(long, visible_alias = "tel")]
        phone: String,
    },

    /// List every contact in insertion order
    #[command(visible_alias = "lister")]
    List,

    /// Find a contact by name (case-insensitive)
    #[command(visible_alias = "rechercher")]
    Search {
        /// Contact name
        #[arg(long, visible_alias = "nom")]
        name: String,
    },

    /// Delete a contact by name
    #[command(visible_alias = "supprimer")]
    Delete {
        /// Name of contact to delete
        #[arg(long, visible_alias = "nom")]
        name: String,
    },

    /// Change the given name and/or phone number of an existing contact
    #[command(visible_alias = "modifier")]
    #[command(group(
        ArgGroup::new("changes")
            .required(true)
            .multiple(true)
            .args(["given_name", "phone"])
    ))]
    Update {
        /// Name of contact to update
        #[arg(long, visible_alias = "nom")]
        name: String,

        /// New given name
        #[arg(long, visible_alias = "prenom")]
        given_name: Option<String>,

        /// New phone number
        #[arg(long, visible_alias = "tel")]
        phone: Option<String>,
    },
}
