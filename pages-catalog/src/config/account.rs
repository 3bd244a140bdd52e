//! Accounts and credential resolution.

use super::AccountConfig;
use serde::Deserialize;
use std::fmt;
use tracing::debug;

/// Whether an account is a user or an organization.
///
/// The two kinds list repositories through different endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Individual,
    Organization,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Individual => f.write_str("individual"),
            Self::Organization => f.write_str("organization"),
        }
    }
}

/// An account with its credential resolved.
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    /// User or organization login.
    pub name: String,

    pub kind: AccountKind,

    /// Bearer token; `None` disables the account.
    pub token: Option<String>,
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Account {
    /// Creates an account with an explicit credential.
    pub fn new(name: impl Into<String>, kind: AccountKind, token: Option<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            token,
        }
    }

    /// Resolves the account's token from its configured environment variable.
    ///
    /// Unset or blank variables yield an account without a credential.
    #[must_use]
    pub fn from_env(config: &AccountConfig) -> Self {
        let token = std::env::var(&config.token_env)
            .ok()
            .filter(|token| !token.trim().is_empty());
        debug!(
            account = %config.name,
            token_env = %config.token_env,
            has_token = token.is_some(),
            "Resolved account credential"
        );
        Self::new(config.name.clone(), config.kind, token)
    }

    /// Returns true if the account has a credential and will be scanned.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.token.is_some()
    }
}

/// Resolves credentials for every configured account, preserving order.
#[must_use]
pub fn resolve_accounts(configs: &[AccountConfig]) -> Vec<Account> {
    configs.iter().map(Account::from_env).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(name: &str, token_env: &str) -> AccountConfig {
        AccountConfig {
            name: name.to_string(),
            kind: AccountKind::Individual,
            token_env: token_env.to_string(),
        }
    }

    #[test]
    fn resolves_token_from_environment() {
        temp_env::with_var("PAGES_CATALOG_TEST_TOKEN_A", Some("secret"), || {
            let account = Account::from_env(&config("someone", "PAGES_CATALOG_TEST_TOKEN_A"));
            assert_eq!(account.token.as_deref(), Some("secret"));
            assert!(account.is_enabled());
        });
    }

    #[test]
    fn missing_variable_disables_account() {
        temp_env::with_var_unset("PAGES_CATALOG_TEST_TOKEN_B", || {
            let account = Account::from_env(&config("someone", "PAGES_CATALOG_TEST_TOKEN_B"));
            assert_eq!(account.token, None);
            assert!(!account.is_enabled());
        });
    }

    #[test]
    fn blank_variable_disables_account() {
        temp_env::with_var("PAGES_CATALOG_TEST_TOKEN_C", Some("  "), || {
            let account = Account::from_env(&config("someone", "PAGES_CATALOG_TEST_TOKEN_C"));
            assert!(!account.is_enabled());
        });
    }

    #[test]
    fn resolve_accounts_keeps_order() {
        temp_env::with_vars(
            [
                ("PAGES_CATALOG_TEST_TOKEN_D", Some("one")),
                ("PAGES_CATALOG_TEST_TOKEN_E", None),
            ],
            || {
                let accounts = resolve_accounts(&[
                    config("first", "PAGES_CATALOG_TEST_TOKEN_D"),
                    config("second", "PAGES_CATALOG_TEST_TOKEN_E"),
                ]);
                assert_eq!(accounts.len(), 2);
                assert_eq!(accounts[0].name, "first");
                assert!(accounts[0].is_enabled());
                assert_eq!(accounts[1].name, "second");
                assert!(!accounts[1].is_enabled());
            },
        );
    }

    #[test]
    fn debug_output_redacts_token() {
        let account = Account::new("someone", AccountKind::Organization, Some("secret".into()));
        let debug = format!("{account:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }
}
