//! Catalog listing format.
//!
//! The pokedex endpoint returns the full roster as plain text, one record
//! per line in `Name:shortname` form.

use crate::ParseError;
use anyhow::Result;

/// One catalog record: display name plus the shortname used as lookup key
/// and sprite filename stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRecord {
    pub name: String,
    pub shortname: String,
}

/// Parse a full catalog response into roster records.
///
/// Blank lines are skipped. A non-blank line that is not `Name:shortname`
/// is an error, as is a catalog with no records at all.
pub fn parse_catalog(text: &str) -> Result<Vec<RosterRecord>> {
    let records: Vec<RosterRecord> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_catalog_line)
        .collect::<Result<Vec<_>>>()?;

    if records.is_empty() {
        return Err(ParseError::EmptyCatalog.into());
    }

    Ok(records)
}

/// Parse a single `Name:shortname` line
pub fn parse_catalog_line(line: &str) -> Result<RosterRecord> {
    let line = line.trim();

    let Some((name, shortname)) = line.split_once(':') else {
        return Err(ParseError::InvalidFormat(line.to_string()).into());
    };

    if shortname.is_empty() {
        return Err(ParseError::MissingField("shortname".to_string()).into());
    }

    Ok(RosterRecord {
        name: name.to_string(),
        shortname: shortname.to_string(),
    })
}
