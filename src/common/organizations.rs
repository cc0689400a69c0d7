use async_trait::async_trait;

use crate::common::errors::Error;
use crate::common::AccountStatus;

/// The slice of the Organizations API the isComplete handler needs.
#[async_trait]
pub trait AwsOrganizationsClient {
    async fn describe_create_account_status(&self, request_id: &str)
        -> Result<AccountStatus, Error>;
}

#[async_trait]
impl AwsOrganizationsClient for aws_sdk_organizations::Client {
    async fn describe_create_account_status(
        &self,
        request_id: &str,
    ) -> Result<AccountStatus, Error> {
        let output = self
            .describe_create_account_status()
            .create_account_request_id(request_id)
            .send()
            .await
            .map_err(Box::new)?;

        Ok(output
            .create_account_status()
            .map(AccountStatus::from)
            .unwrap_or_default())
    }
}
