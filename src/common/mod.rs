use aws_sdk_organizations::types::CreateAccountStatus;

pub mod errors;
pub mod event;
pub mod organizations;

// Organizations is a global service homed in us-east-1
pub const ORGANIZATIONS_REGION_DEFAULT: &str = "us-east-1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountState {
    InProgress,
    Succeeded,
    Failed,
    /// A state this build doesn't know about yet. Treated as still in progress.
    Unrecognized(String),
}

impl From<&str> for AccountState {
    fn from(value: &str) -> Self {
        match value {
            "IN_PROGRESS" => AccountState::InProgress,
            "SUCCEEDED" => AccountState::Succeeded,
            "FAILED" => AccountState::Failed,
            other => AccountState::Unrecognized(other.into()),
        }
    }
}

/// Snapshot of a `CreateAccount` request as reported by Organizations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountStatus {
    pub state: Option<AccountState>,
    pub account_id: Option<String>,
    pub account_name: Option<String>,
    pub failure_reason: Option<String>,
}

impl From<&CreateAccountStatus> for AccountStatus {
    fn from(value: &CreateAccountStatus) -> Self {
        Self {
            state: value.state().map(|state| AccountState::from(state.as_str())),
            account_id: value.account_id().map(Into::into),
            account_name: value.account_name().map(Into::into),
            failure_reason: value.failure_reason().map(|reason| reason.as_str().into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_organizations::types::{CreateAccountFailureReason, CreateAccountState};

    #[test]
    fn parses_known_states() {
        assert_eq!(AccountState::from("IN_PROGRESS"), AccountState::InProgress);
        assert_eq!(AccountState::from("SUCCEEDED"), AccountState::Succeeded);
        assert_eq!(AccountState::from("FAILED"), AccountState::Failed);
    }

    #[test]
    fn keeps_unknown_state_verbatim() {
        assert_eq!(
            AccountState::from("PENDING_REVIEW"),
            AccountState::Unrecognized("PENDING_REVIEW".into())
        );
    }

    #[test]
    fn converts_sdk_status() {
        let sdk_status = CreateAccountStatus::builder()
            .id("car-123")
            .state(CreateAccountState::Failed)
            .account_id("111")
            .account_name("test")
            .failure_reason(CreateAccountFailureReason::AccountLimitExceeded)
            .build();

        let status = AccountStatus::from(&sdk_status);

        assert_eq!(status.state, Some(AccountState::Failed));
        assert_eq!(status.account_id.as_deref(), Some("111"));
        assert_eq!(status.account_name.as_deref(), Some("test"));
        assert_eq!(
            status.failure_reason.as_deref(),
            Some("ACCOUNT_LIMIT_EXCEEDED")
        );
    }

    #[test]
    fn converts_sdk_status_with_unknown_values() {
        let sdk_status = CreateAccountStatus::builder()
            .state(CreateAccountState::from("PENDING_REVIEW"))
            .failure_reason(CreateAccountFailureReason::from("LimitExceeded"))
            .build();

        let status = AccountStatus::from(&sdk_status);

        assert_eq!(
            status.state,
            Some(AccountState::Unrecognized("PENDING_REVIEW".into()))
        );
        assert_eq!(status.failure_reason.as_deref(), Some("LimitExceeded"));
        assert_eq!(status.account_id, None);
    }

    #[test]
    fn converts_empty_sdk_status() {
        let status = AccountStatus::from(&CreateAccountStatus::builder().build());
        assert_eq!(status, AccountStatus::default());
    }
}
