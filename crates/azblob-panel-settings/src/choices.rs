//! Client type choices
//!
//! The client type select is fed from a choice source that the host loads
//! asynchronously when the field is attached to the form.

use async_trait::async_trait;
use azblob_panel_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One entry of a select field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    pub name: String,
}

impl Choice {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// How the blob store talks to the storage account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClientType {
    /// Blocking client
    #[default]
    Sync,
    /// Reactive, non-blocking client
    Async,
}

impl ClientType {
    pub const ALL: [ClientType; 2] = [ClientType::Sync, ClientType::Async];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Sync => "Sync",
            Self::Async => "Async",
        }
    }

    /// Interpret a stored client type the way the backend does: `sync` in
    /// any case selects the blocking client, anything else the reactive one.
    pub fn from_backend_value(value: &str) -> Self {
        if value.eq_ignore_ascii_case("sync") {
            Self::Sync
        } else {
            Self::Async
        }
    }

    pub fn as_choice(&self) -> Choice {
        Choice::new(self.id(), self.id())
    }
}

impl std::fmt::Display for ClientType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for ClientType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ClientType::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::config(format!("Unknown client type: {}", s)))
    }
}

/// Supplier of select choices
#[async_trait]
pub trait ChoiceSource: Send + Sync {
    /// Load the choices for the named source
    async fn load(&self, source_id: &str) -> Result<Vec<Choice>>;
}

/// Choice source backed by the client types the backend knows
#[derive(Debug, Clone, Default)]
pub struct StaticChoiceSource;

#[async_trait]
impl ChoiceSource for StaticChoiceSource {
    async fn load(&self, source_id: &str) -> Result<Vec<Choice>> {
        match source_id {
            crate::view_model::CLIENT_TYPE_SOURCE => {
                Ok(ClientType::ALL.iter().map(ClientType::as_choice).collect())
            }
            other => Err(Error::ChoiceLoad {
                source_id: other.to_string(),
                reason: "no such choice source".to_string(),
            }),
        }
    }
}
