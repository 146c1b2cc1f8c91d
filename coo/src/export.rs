//! JSON export of coordinate maps
//!
//! A map is written as an array of `{"row", "col", "value"}` objects in
//! insertion order. Reading tolerates any order; a repeated position keeps
//! the last value.

use std::io::Write;

use coo_core::CoordinateMap;
use serde::{de::DeserializeOwned, Serialize};

/// Serialize a map to a JSON string
pub fn to_json_string<T: Serialize>(map: &CoordinateMap<T>) -> serde_json::Result<String> {
    serde_json::to_string(map)
}

/// Serialize a map as JSON into `writer`
pub fn to_json_writer<W: Write, T: Serialize>(
    writer: W,
    map: &CoordinateMap<T>,
) -> serde_json::Result<()> {
    serde_json::to_writer(writer, map)
}

/// Parse a map from a JSON string
pub fn from_json_str<T: DeserializeOwned>(json: &str) -> serde_json::Result<CoordinateMap<T>> {
    serde_json::from_str(json)
}
