//! Genre model definition.

use serde::{Deserialize, Serialize};

/// A genre from the static reference list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    /// Unique identifier for the genre
    pub id: u64,

    /// Unique display name (e.g. "Rock")
    pub name: String,
}
