use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::envelope::QueryRequest;

/// Evaluation mode selected by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EvalMode {
    /// Read-only evaluation against the peer's current state.
    #[default]
    Query,
    /// Evaluation intended to be submitted as a transaction.
    Transact,
}

/// A fully built outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub endpoint: String,
    pub body: QueryRequest,
}

impl EvalMode {
    pub const ALL: [Self; 2] = [Self::Query, Self::Transact];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Transact => "transact",
        }
    }

    /// Builds the request for `source` in this mode.
    pub fn prepare(self, endpoint: &str, source: &str) -> PreparedRequest {
        match self {
            Self::Query => prepare_query(endpoint, source),
            Self::Transact => prepare_transact(endpoint, source),
        }
    }
}

fn prepare_query(endpoint: &str, source: &str) -> PreparedRequest {
    PreparedRequest {
        endpoint: endpoint.to_string(),
        body: QueryRequest {
            source: source.to_string(),
        },
    }
}

// Peers expose no unsigned transaction path yet, so transact mode posts
// to the same query endpoint.
fn prepare_transact(endpoint: &str, source: &str) -> PreparedRequest {
    prepare_query(endpoint, source)
}

impl fmt::Display for EvalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvalMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "query" | "q" => Ok(Self::Query),
            "transact" | "t" => Ok(Self::Transact),
            _ => anyhow::bail!("Unknown mode: '{s}' (expected 'query' or 'transact')"),
        }
    }
}
