//! Data models for risk records.
//!
//! This module defines the core data structures:
//! - `Risk` - the tracked record, doubling as the response body for the
//!   list and fetch endpoints
//! - `RiskState` - the four-value lifecycle enum
//! - `CreateRiskRequest` - the request body for the creation endpoint

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskState {
    Open,
    Closed,
    Accepted,
    Investigating,
}

impl RiskState {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Accepted => "accepted",
            Self::Investigating => "investigating",
        }
    }
}

impl fmt::Display for RiskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A tracked risk record.
///
/// The uppercase `ID` key is part of the wire contract; the other keys are
/// lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Risk {
    /// Server-generated unique identifier, assigned on save and never reused.
    #[serde(rename = "ID")]
    pub id: String,

    /// Current lifecycle state.
    pub state: RiskState,

    /// Short human-readable title.
    pub title: String,

    /// Free-form description.
    pub description: String,
}

/// Request body for the risk creation endpoint.
///
/// `state` is required and must be one of the four valid states; `title`
/// and `description` may be omitted and default to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRiskRequest {
    pub state: RiskState,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}
