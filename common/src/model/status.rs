use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workflow stage of a lemma.
///
/// The set is closed: the corpus only ever moves a lemma from `staged` to
/// `committed` to `pushed`. Anything else arriving through a route or a query
/// parameter is rejected by `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusVal {
    Staged,
    Committed,
    Pushed,
}

impl StatusVal {
    pub const ALL: [StatusVal; 3] = [StatusVal::Staged, StatusVal::Committed, StatusVal::Pushed];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusVal::Staged => "staged",
            StatusVal::Committed => "committed",
            StatusVal::Pushed => "pushed",
        }
    }

    /// CSS colour used when a status is displayed.
    pub fn colour(&self) -> &'static str {
        match self {
            StatusVal::Staged => "red",
            StatusVal::Committed => "yellow",
            StatusVal::Pushed => "green",
        }
    }
}

impl fmt::Display for StatusVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the known status values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid status value: {0}")]
pub struct InvalidStatus(pub String);

impl FromStr for StatusVal {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusVal::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| InvalidStatus(s.to_string()))
    }
}

/// Row of the `lemma_status` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub id: i64,
    pub status: StatusVal,
}
