pub mod command;
pub mod run;

use crate::domain::Directory;

pub use run::{run_app, run_command};

pub fn display_directory(directory: &Directory) -> String {
    if directory.is_empty() {
        return "No contact yet".to_string();
    }

    let mut output = format!("=== Directory ({} contact(s)) ===", directory.len());

    for (mut i, c) in directory.list().iter().enumerate() {
        i += 1;
        output.push_str(&format!(
            "\n{i:>3}. {:<20} {:<20} {}",
            c.name, c.given_name, c.phone
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn empty_directory_listing() {
        assert_eq!(display_directory(&Directory::new()), "No contact yet");
    }

    #[test]
    fn listing_is_numbered_in_insertion_order() -> Result<(), AppError> {
        let mut directory = Directory::new();
        directory.add("Petit", "", "0633333333")?;
        directory.add("Dupont", "Jean", "0123456789")?;

        let lines: Vec<String> = display_directory(&directory)
            .lines()
            .map(str::to_string)
            .collect();

        assert_eq!(
            lines,
            vec![
                "=== Directory (2 contact(s)) ===".to_string(),
                format!("  1. {:<20} {:<20} 0633333333", "Petit", ""),
                format!("  2. {:<20} {:<20} 0123456789", "Dupont", "Jean"),
            ]
        );
        Ok(())
    }
}
