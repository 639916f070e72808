use super::*;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;

/// The full, ordered collection of contacts. Insertion order is the only
/// ordering and names are unique ignoring case.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directory {
    #[serde(default, deserialize_with = "deserialize_contacts")]
    contacts: Vec<Contact>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// All contacts in insertion order.
    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.name_matches(name))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.name_matches(name))
    }

    /// Appends a new contact. The duplicate check runs before the emptiness
    /// checks; either way nothing is added on failure.
    pub fn add(&mut self, name: &str, given_name: &str, phone: &str) -> Result<&Contact, AppError> {
        let contact = Contact::new(name, given_name, phone);

        if self.find(&contact.name).is_some() {
            return Err(AppError::Duplicate(contact.name));
        }

        if contact.name.is_empty() {
            return Err(AppError::Validation(MissingField::Name));
        }

        if contact.phone.is_empty() {
            return Err(AppError::Validation(MissingField::Phone));
        }

        info!(name = %contact.name, "contact added");
        self.contacts.push(contact);

        let last = self.contacts.len() - 1;
        Ok(&self.contacts[last])
    }

    /// Removes the matching contact and returns it.
    pub fn delete(&mut self, name: &str) -> Result<Contact, AppError> {
        let index = self
            .position(name)
            .ok_or_else(|| AppError::NotFound(name.trim().to_string()))?;

        let removed = self.contacts.remove(index);
        info!(name = %removed.name, "contact deleted");
        Ok(removed)
    }

    /// Replaces the given name and/or phone of an existing contact. Blank
    /// arguments leave the field unchanged; the name itself never changes.
    pub fn update(
        &mut self,
        name: &str,
        new_given_name: &str,
        new_phone: &str,
    ) -> Result<&Contact, AppError> {
        let index = self
            .position(name)
            .ok_or_else(|| AppError::NotFound(name.trim().to_string()))?;

        let contact = &mut self.contacts[index];

        let new_given_name = new_given_name.trim();
        if !new_given_name.is_empty() {
            contact.given_name = new_given_name.to_string();
        }

        let new_phone = new_phone.trim();
        if !new_phone.is_empty() {
            contact.phone = new_phone.to_string();
        }

        info!(name = %contact.name, "contact updated");
        Ok(&*contact)
    }
}

fn deserialize_contacts<'de, D>(deserializer: D) -> Result<Vec<Contact>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<Contact>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default()) // "contacts": null
}
