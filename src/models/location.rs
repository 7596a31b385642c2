use serde::{Deserialize, Serialize};

use super::hangout::Coordinates;

/// A saved place from the user's location list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
    /// Whether this is the user's currently selected location.
    pub is_selected: bool,
}

impl Location {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        coordinates: Coordinates,
        is_selected: bool,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            coordinates,
            is_selected,
        }
    }
}
