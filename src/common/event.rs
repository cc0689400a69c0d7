//! Payloads exchanged with the CDK custom resource provider framework.
//!
//! https://docs.aws.amazon.com/cdk/api/v2/docs/aws-cdk-lib.custom_resources-readme.html#asynchronous-providers-iscomplete

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::errors::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum RequestType {
    Create,
    Update,
    Delete,
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequestType::Create => "Create",
            RequestType::Update => "Update",
            RequestType::Delete => "Delete",
        };
        f.write_str(name)
    }
}

/// The isComplete event. The framework also sends the stack, the resource
/// properties and whatever onEvent returned; none of it is needed to poll.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IsCompleteRequest {
    pub request_type: RequestType,
    #[serde(default)]
    pub physical_resource_id: Option<String>,
}

impl IsCompleteRequest {
    /// The `CreateAccount` request id assigned by the onEvent handler.
    pub fn create_account_request_id(&self) -> Result<&str, Error> {
        match self.physical_resource_id.as_deref() {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(Error::MissingPhysicalResourceId),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IsCompleteResponse {
    pub is_complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<AccountData>,
}

impl IsCompleteResponse {
    pub fn in_progress() -> Self {
        Self {
            is_complete: false,
            data: None,
        }
    }

    pub fn complete(data: AccountData) -> Self {
        Self {
            is_complete: true,
            data: Some(data),
        }
    }
}
