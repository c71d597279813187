use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::preferences::PreferenceTable;
use crate::utils::validation::{check_player_limit, is_valid_player_name, MAX_PLAYERS};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid instance JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid player name: {0:?}")]
    InvalidPlayerName(String),

    #[error("Too many players: {0} exceeds maximum allowed ({max})", max = MAX_PLAYERS)]
    TooManyPlayers(usize),
}

/// A stable marriage instance as read from JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarriageInstance {
    pub suitors: PreferenceTable<String>,
    pub reviewers: PreferenceTable<String>,
}

/// A hospital/resident instance as read from JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HospitalResidentInstance {
    pub hospitals: PreferenceTable<String>,
    pub residents: PreferenceTable<String>,
    pub capacities: HashMap<String, usize>,
}

/// Parse a stable marriage instance from a file, or from stdin when `path` is `-`
///
/// # Errors
///
/// Returns `ParseError::Io` if the input cannot be read, or any error of
/// [`parse_marriage_text`].
pub fn parse_marriage_file(path: &Path) -> Result<MarriageInstance, ParseError> {
    parse_marriage_text(&read_input(path)?)
}

/// Parse a stable marriage instance from JSON text
///
/// # Errors
///
/// Returns `ParseError::Json` for malformed JSON, unknown fields, duplicate
/// players or repeated preferences, `ParseError::InvalidPlayerName` for
/// unusable names, and `ParseError::TooManyPlayers` if the limit is exceeded.
pub fn parse_marriage_text(text: &str) -> Result<MarriageInstance, ParseError> {
    let instance: MarriageInstance = serde_json::from_str(text)?;
    validate_tables(&[&instance.suitors, &instance.reviewers])?;
    Ok(instance)
}

/// Parse a hospital/resident instance from a file, or from stdin when `path` is `-`
///
/// # Errors
///
/// Returns `ParseError::Io` if the input cannot be read, or any error of
/// [`parse_hospital_resident_text`].
pub fn parse_hospital_resident_file(path: &Path) -> Result<HospitalResidentInstance, ParseError> {
    parse_hospital_resident_text(&read_input(path)?)
}

/// Parse a hospital/resident instance from JSON text
///
/// # Errors
///
/// Returns `ParseError::Json` for malformed JSON, unknown fields, duplicate
/// players, repeated preferences or non-integer capacities,
/// `ParseError::InvalidPlayerName` for unusable names, and
/// `ParseError::TooManyPlayers` if the limit is exceeded.
pub fn parse_hospital_resident_text(text: &str) -> Result<HospitalResidentInstance, ParseError> {
    let instance: HospitalResidentInstance = serde_json::from_str(text)?;
    validate_tables(&[&instance.hospitals, &instance.residents])?;
    Ok(instance)
}

fn read_input(path: &Path) -> Result<String, ParseError> {
    if path.to_string_lossy() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn validate_tables(tables: &[&PreferenceTable<String>]) -> Result<(), ParseError> {
    let total: usize = tables.iter().map(|t| t.len()).sum();
    if check_player_limit(total).is_some() {
        return Err(ParseError::TooManyPlayers(total));
    }

    for table in tables {
        if let Some(bad) = table.players().find(|name| !is_valid_player_name(name)) {
            return Err(ParseError::InvalidPlayerName(bad.clone()));
        }
    }
    Ok(())
}
