use aws_config::{BehaviorVersion, Region};
use lambda_runtime::{run, service_fn, Error as LambdaError, LambdaEvent};
use tracing::{error, info};

mod common;
use crate::common::event::{AccountData, IsCompleteRequest, IsCompleteResponse};
use crate::common::organizations::AwsOrganizationsClient;
use crate::common::{errors::Error, AccountState, ORGANIZATIONS_REGION_DEFAULT};

/// Invoked repeatedly by the provider framework until the `CreateAccount`
/// request reaches SUCCEEDED or FAILED. Polling cadence and timeout belong to
/// the framework, each call issues exactly one status query.
#[tracing::instrument(skip(organizations_client))]
async fn check_completion<C>(
    request: IsCompleteRequest,
    organizations_client: &C,
) -> Result<IsCompleteResponse, Error>
where
    C: AwsOrganizationsClient + Sync,
{
    info!("Request of type {} received", request.request_type);

    let request_id = request.create_account_request_id()?;
    let status = organizations_client
        .describe_create_account_status(request_id)
        .await?;

    match status.state {
        Some(AccountState::Failed) => {
            error!("Account creation {} failed", request_id);
            Err(Error::account_creation_failed(
                request.request_type,
                status.account_name,
                status.account_id,
                status.failure_reason,
            ))
        }
        Some(AccountState::Succeeded) => Ok(IsCompleteResponse::complete(AccountData {
            account_id: status.account_id,
            account_name: status.account_name,
        })),
        _ => Ok(IsCompleteResponse::in_progress()),
    }
}

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .without_time() // CloudWatch will add the ingestion time
        .with_target(false)
        .init();

    let region =
        std::env::var("ORGANIZATIONS_REGION").unwrap_or(ORGANIZATIONS_REGION_DEFAULT.into());
    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region))
        .load()
        .await;
    let organizations_client = aws_sdk_organizations::Client::new(&config);

    let organizations_client = &organizations_client;
    run(service_fn(
        move |event: LambdaEvent<IsCompleteRequest>| async move {
            check_completion(event.payload, organizations_client)
                .await
                .map_err(LambdaError::from)
        },
    ))
    .await
}
