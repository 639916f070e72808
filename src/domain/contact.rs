use core::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A single directory entry. Serialized keys match the `annuaire.json`
/// format: `nom`, `prenom`, `tel`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Contact {
    #[serde(rename = "nom", default)]
    pub name: String,

    #[serde(
        rename = "prenom",
        default,
        deserialize_with = "deserialize_optional_string"
    )]
    pub given_name: String,

    #[serde(rename = "tel", default)]
    pub phone: String,
}

impl Contact {
    pub fn new(name: &str, given_name: &str, phone: &str) -> Self {
        Contact {
            name: name.trim().to_string(),
            given_name: given_name.trim().to_string(),
            phone: phone.trim().to_string(),
        }
    }

    /// Case-insensitive comparison against the contact's name.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.given_name.is_empty() {
            write!(f, "{} - {}", self.name, self.phone)
        } else {
            write!(f, "{} {} - {}", self.name, self.given_name, self.phone)
        }
    }
}

fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default()) // "prenom": null in hand-edited files
}
