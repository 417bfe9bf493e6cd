//! Singles released by a band.
use serde::{Deserialize, Serialize};

use crate::domain::types::SingleId;

/// A single attached to a band. The id is assigned by the directory
/// service, so records submitted from a form carry `None`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Single {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SingleId>,
    pub name: String,
}

impl Single {
    /// Creates an unsaved single with the given name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}
