use aws_sdk_organizations::config::http::HttpResponse;
use aws_sdk_organizations::error::{DisplayErrorContext, SdkError};
use aws_sdk_organizations::operation::describe_create_account_status::DescribeCreateAccountStatusError;
use thiserror::Error;

use crate::common::event::RequestType;

pub const MISSING_VALUE: &str = "unknown";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing PhysicalResourceId parameter.")]
    MissingPhysicalResourceId,
    #[error("Failed {request_type} Account {account_name} with Id {account_id}, reason: {reason}")]
    AccountCreationFailed {
        request_type: RequestType,
        account_name: String,
        account_id: String,
        reason: String,
    },
    #[error("DescribeCreateAccountStatus failed: {}", DisplayErrorContext(.0.as_ref()))]
    DescribeCreateAccountStatus(
        #[from] Box<SdkError<DescribeCreateAccountStatusError, HttpResponse>>,
    ),
}

impl Error {
    pub fn account_creation_failed(
        request_type: RequestType,
        account_name: Option<String>,
        account_id: Option<String>,
        reason: Option<String>,
    ) -> Self {
        let or_missing = |value: Option<String>| value.unwrap_or(MISSING_VALUE.into());

        Error::AccountCreationFailed {
            request_type,
            account_name: or_missing(account_name),
            account_id: or_missing(account_id),
            reason: or_missing(reason),
        }
    }
}
