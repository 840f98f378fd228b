//! CSV roster loader.
//!
//! # CSV format
//!
//! One row per stop, roster order preserved (it feeds the deterministic
//! trait draws and the priority sampling):
//!
//! ```csv
//! stop_id,is_hotspot
//! NW-0001,false
//! NW-0002,true
//! NW-0003,false
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::StopError;

/// One roster row: the platform's opaque stop key plus its hotspot flag.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RosterEntry {
    pub stop_id: String,
    pub is_hotspot: bool,
}

impl RosterEntry {
    pub fn new(stop_id: impl Into<String>, is_hotspot: bool) -> Self {
        Self { stop_id: stop_id.into(), is_hotspot }
    }
}

/// Load a roster from a CSV file, preserving row order.
pub fn load_roster_csv(path: &Path) -> Result<Vec<RosterEntry>, StopError> {
    let file = std::fs::File::open(path).map_err(StopError::Io)?;
    load_roster_reader(file)
}

/// Like [`load_roster_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded rosters.
pub fn load_roster_reader<R: Read>(reader: R) -> Result<Vec<RosterEntry>, StopError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut roster = Vec::new();
    for result in csv_reader.deserialize::<RosterEntry>() {
        let row = result.map_err(|e| StopError::Parse(e.to_string()))?;
        roster.push(row);
    }
    Ok(roster)
}
