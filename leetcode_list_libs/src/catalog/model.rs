use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Mapping from problem frontend id to an ordered list of labels (companies or tags).
pub type MetadataTable = HashMap<String, Vec<String>>;

/// Placeholder label used when no metadata exists for a problem.
pub const UNKNOWN_LABEL: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProblemState {
    AC,
    NotAC,
    Unknown,
}

impl ProblemState {
    /// Classify the completion marker printed in the state column of the listing.
    ///
    /// The mapping is exhaustive: every input that is not one of the six known symbols,
    /// including the empty string, is `Unknown`.
    pub fn from_marker(marker: &str) -> Self {
        match marker.trim() {
            "v" | "✔" | "√" => ProblemState::AC,
            "X" | "✘" | "×" => ProblemState::NotAC,
            _ => ProblemState::Unknown,
        }
    }
}

impl fmt::Display for ProblemState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProblemState::AC => write!(f, "AC"),
            ProblemState::NotAC => write!(f, "NotAC"),
            ProblemState::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Easy" => Some(Difficulty::Easy),
            "Medium" => Some(Difficulty::Medium),
            "Hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemRecord {
    pub id: String,
    pub is_favorite: bool,
    pub locked: bool,
    pub state: ProblemState,
    pub name: String,
    pub difficulty: Difficulty,
    pub pass_rate: String,
    pub companies: Vec<String>,
    pub tags: Vec<String>,
}

/// Companies and tags tables supplied alongside a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemMetadata {
    #[serde(default)]
    pub companies: MetadataTable,
    #[serde(default)]
    pub tags: MetadataTable,
}

/// Options forwarded to the listing source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub show_locked: bool,
    pub use_endpoint_translation: bool,
}
