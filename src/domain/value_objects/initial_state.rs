//! Initial State Value Object
//!
//! Whether non-root rows start visible when the page loads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Initial expand/collapse state of the tree
///
/// The value is also forwarded to the client-side plugin as
/// `initialState`, so both sides agree on what is shown first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InitialState {
    /// Every row is visible (default)
    #[default]
    Expanded,
    /// Only root rows are visible
    Collapsed,
}

impl InitialState {
    pub fn as_str(self) -> &'static str {
        match self {
            InitialState::Expanded => "expanded",
            InitialState::Collapsed => "collapsed",
        }
    }

    pub fn is_collapsed(self) -> bool {
        self == InitialState::Collapsed
    }
}

impl fmt::Display for InitialState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InitialState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expanded" => Ok(InitialState::Expanded),
            "collapsed" => Ok(InitialState::Collapsed),
            other => Err(format!(
                "unknown initial state '{}' (expected 'expanded' or 'collapsed')",
                other
            )),
        }
    }
}
