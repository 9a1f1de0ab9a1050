use derive_getters::Getters;
use serde::Serialize;

/// `ACCOUNTDISABLE` flag of `userAccountControl`.
pub const ACCOUNT_DISABLED_FLAG: u32 = 2;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub enum AccountStatus {
    #[serde(rename = "Habilitado")]
    Enabled,
    #[serde(rename = "Desabilitado")]
    Disabled,
}

impl AccountStatus {
    pub fn from_user_account_control(user_account_control: u32) -> Self {
        if user_account_control & ACCOUNT_DISABLED_FLAG != 0 {
            AccountStatus::Disabled
        } else {
            AccountStatus::Enabled
        }
    }
}

/// A user as listed by a directory search.
#[derive(Debug, Getters, Serialize, Clone, Eq, PartialEq)]
pub struct UserSummary {
    account_name: String,
    common_name: String,
    distinguished_name: String,
    status: AccountStatus,
}

impl UserSummary {
    pub fn new(
        account_name: String,
        common_name: String,
        distinguished_name: String,
        status: AccountStatus,
    ) -> Self {
        Self {
            account_name,
            common_name,
            distinguished_name,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        user_account_control = {512, 514, 2, 66048, 66050},
        expected_status = {AccountStatus::Enabled, AccountStatus::Disabled, AccountStatus::Disabled, AccountStatus::Enabled, AccountStatus::Disabled}
    )]
    fn should_compute_status_from_user_account_control(
        user_account_control: u32,
        expected_status: AccountStatus,
    ) {
        assert_eq!(
            expected_status,
            AccountStatus::from_user_account_control(user_account_control)
        );
    }
}
