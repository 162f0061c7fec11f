//! Field rules applied before anything is written to the database.

use heroes_entity::strength::Strength;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use strum::VariantArray;

/// The minimum number of characters of a power's description.
pub const MIN_DESCRIPTION_LENGTH: usize = 20;

pub const MSG_MISSING_FIELDS: &str = "Invalid or missing fields";
pub const MSG_ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// A non-empty list of human-readable reasons why a value was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violations(Vec<String>);

impl Violations {
    pub fn new(message: impl Into<String>) -> Self {
        Self(vec![message.into()])
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn into_messages(self) -> Vec<String> {
        self.0
    }
}

impl Display for Violations {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("; "))
    }
}

impl std::error::Error for Violations {}

/// Check a power's description, counting characters rather than bytes.
pub fn power_description(value: Option<&str>) -> Result<String, Violations> {
    match value {
        None | Some("") => Err(Violations::new(MSG_MISSING_FIELDS)),
        Some(value) if value.chars().count() < MIN_DESCRIPTION_LENGTH => Err(Violations::new(
            format!("description must be at least {MIN_DESCRIPTION_LENGTH} characters long"),
        )),
        Some(value) => Ok(value.to_string()),
    }
}

/// Parse a strength, which must match one of the variant names exactly.
pub fn strength(value: &str) -> Result<Strength, Violations> {
    Strength::from_str(value).map_err(|_| {
        let names = Strength::VARIANTS
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Violations::new(format!("strength must be one of: {names}"))
    })
}

/// Require a non-empty value for the named field.
pub fn required(field: &str, value: Option<&str>) -> Result<String, Violations> {
    match value {
        None | Some("") => Err(Violations::new(format!("{field} is required"))),
        Some(value) => Ok(value.to_string()),
    }
}
