//! Wire shapes shared by every Azure Resource Manager API

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Common accessors used when printing any top-level ARM resource
pub trait ArmResource: Serialize {
    fn name(&self) -> &str;
    fn id(&self) -> &str;
    fn location(&self) -> Option<&str>;
    fn tags(&self) -> &HashMap<String, String>;
}

/// Reference from one resource to another by ARM id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubResource {
    pub id: String,
}

impl SubResource {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self { id: id.into() }
    }
}

/// Generic ARM list wrapper (`value` array with optional `nextLink`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmList<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
    #[serde(default)]
    pub next_link: Option<String>,
}

/// Body of a failed ARM request
#[derive(Debug, Clone, Deserialize)]
pub struct ArmErrorResponse {
    pub error: ArmErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArmErrorDetail {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body returned by an `Azure-AsyncOperation` status URL
#[derive(Debug, Clone, Deserialize)]
pub struct AsyncOperationStatus {
    pub status: String,
    #[serde(default)]
    pub error: Option<ArmErrorDetail>,
}

impl AsyncOperationStatus {
    pub fn is_succeeded(&self) -> bool {
        self.status.eq_ignore_ascii_case("Succeeded")
    }

    pub fn is_terminal_failure(&self) -> bool {
        self.status.eq_ignore_ascii_case("Failed") || self.status.eq_ignore_ascii_case("Canceled")
    }
}
