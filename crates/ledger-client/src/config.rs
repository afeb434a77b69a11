//! Connection configuration: the mutually-exclusive authentication modes and
//! their structural validation.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::redacted::Redacted;

pub const DEFAULT_ADDRESS: &str = "http://localhost:6865";
pub const DEFAULT_APPLICATION_ID: &str = "ledgerdump";
pub const DEFAULT_TOKEN_SECRET: &str = "secret";

/// Raw connection configuration, as loaded from the connection TOML file.
///
/// Exactly one of `access_token`, `party`, `v1`, `v2` selects the
/// authentication mode; [`ConnectionConfig::validate`] enforces this and
/// reports every violated rule at once.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionConfig {
    #[serde(default = "default_address")]
    pub address: Url,

    /// A pre-minted bearer token, used as-is.
    #[serde(default)]
    pub access_token: Option<Redacted<String>>,

    /// Mint a V1 sandbox token with this party as the sole act-as entry.
    #[serde(default)]
    pub party: Option<String>,

    /// Mint a V1 sandbox token with explicit scope.
    #[serde(default)]
    pub v1: Option<V1Args>,

    /// Mint a V2 sandbox token for a user id.
    #[serde(default)]
    pub v2: Option<V2Args>,

    #[serde(default = "default_application_id")]
    pub application_id: String,

    /// HMAC-SHA-256 secret used to sign locally minted sandbox tokens.
    #[serde(default = "default_token_secret")]
    pub token_secret: Redacted<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct V1Args {
    #[serde(default)]
    pub admin: bool,
    /// `;`-delimited party names; empty segments are discarded.
    #[serde(default)]
    pub act_as: String,
    #[serde(default)]
    pub read_as: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct V2Args {
    pub user: String,
}

fn default_address() -> Url {
    Url::parse(DEFAULT_ADDRESS).expect("default address is a valid URL")
}

fn default_application_id() -> String {
    DEFAULT_APPLICATION_ID.to_owned()
}

fn default_token_secret() -> Redacted<String> {
    DEFAULT_TOKEN_SECRET.to_owned().into()
}

/// One violated configuration rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("address must be an http or https URL")]
    UnsupportedScheme,
    #[error("one of access_token, party, v1 or v2 must be specified")]
    NoModeSelected,
    #[error("{0} and {1} cannot be specified simultaneously")]
    MutuallyExclusive(&'static str, &'static str),
    #[error("v1.act_as must name at least one party")]
    EmptyActAs,
}

/// The full set of rules a configuration violated.
#[derive(Debug)]
pub struct InvalidConfig {
    pub violations: Vec<Violation>,
}

impl fmt::Display for InvalidConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid connection configuration:")?;
        for violation in &self.violations {
            write!(f, "\n  - {violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for InvalidConfig {}

/// A configuration that passed structural validation: the address is usable
/// and exactly one authentication mode is selected.
#[derive(Debug, Clone)]
pub struct ValidatedConnection {
    pub address: Url,
    pub application_id: String,
    pub token_secret: Redacted<String>,
    pub mode: AuthMode,
}

#[derive(Debug, Clone)]
pub enum AuthMode {
    /// Use a pre-minted token as-is.
    AccessToken(Redacted<String>),
    /// Mint a V1 sandbox token for a single party.
    Party(String),
    /// Mint a V1 sandbox token with explicit party lists.
    V1 {
        admin: bool,
        act_as: Vec<String>,
        read_as: Vec<String>,
    },
    /// Mint a V2 sandbox token for a user id.
    V2 { user: String },
}

impl ConnectionConfig {
    /// Structural validation. Pure; collects every violated rule rather than
    /// stopping at the first.
    pub fn validate(&self) -> Result<ValidatedConnection, InvalidConfig> {
        let mut violations = Vec::new();

        if !matches!(self.address.scheme(), "http" | "https") {
            violations.push(Violation::UnsupportedScheme);
        }

        let modes = [
            ("access_token", self.access_token.is_some()),
            ("party", self.party.is_some()),
            ("v1", self.v1.is_some()),
            ("v2", self.v2.is_some()),
        ];
        if modes.iter().all(|&(_, set)| !set) {
            violations.push(Violation::NoModeSelected);
        }
        for (index, &(first, first_set)) in modes.iter().enumerate() {
            for &(second, second_set) in &modes[index + 1..] {
                if first_set && second_set {
                    violations.push(Violation::MutuallyExclusive(first, second));
                }
            }
        }

        let v1_parties = self
            .v1
            .as_ref()
            .map(|v1| (split_parties(&v1.act_as), split_parties(&v1.read_as)));
        if let Some((act_as, _)) = &v1_parties {
            if act_as.is_empty() {
                violations.push(Violation::EmptyActAs);
            }
        }

        if !violations.is_empty() {
            return Err(InvalidConfig { violations });
        }

        // Exactly one mode is set past this point.
        let mode = if let Some(token) = &self.access_token {
            AuthMode::AccessToken(token.clone())
        } else if let Some(party) = &self.party {
            AuthMode::Party(party.clone())
        } else if let Some(v1) = &self.v1 {
            let (act_as, read_as) = v1_parties.expect("split together with self.v1");
            AuthMode::V1 {
                admin: v1.admin,
                act_as,
                read_as,
            }
        } else if let Some(v2) = &self.v2 {
            AuthMode::V2 {
                user: v2.user.clone(),
            }
        } else {
            unreachable!("validation rejects configurations with no mode");
        };

        Ok(ValidatedConnection {
            address: self.address.clone(),
            application_id: self.application_id.clone(),
            token_secret: self.token_secret.clone(),
            mode,
        })
    }
}

/// Split a `;`-delimited party list, discarding empty segments.
fn split_parties(list: &str) -> Vec<String> {
    list.split(';')
        .filter(|party| !party.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_fill_in_address_application_id_and_secret() {
        let config: ConnectionConfig = toml::from_str(r#"party = "Alice""#).unwrap();
        assert_eq!(config.address.as_str(), "http://localhost:6865/");
        assert_eq!(config.application_id, "ledgerdump");
        assert_eq!(*config.token_secret, "secret");
        assert!(matches!(config.validate().unwrap().mode, AuthMode::Party(_)));
    }

    #[test]
    fn example_v1_config_deserializes_and_splits_party_lists() {
        let config: ConnectionConfig = toml::from_str(
            r#"
            address = "https://ledger.example.com:6865"
            application_id = "extractor"

            [v1]
            admin = true
            act_as = "Alice;Bob"
            read_as = "Carol"
            "#,
        )
        .unwrap();
        let connection = config.validate().unwrap();
        let AuthMode::V1 {
            admin,
            act_as,
            read_as,
        } = connection.mode
        else {
            panic!("expected V1 mode, got {:?}", connection.mode)
        };
        assert!(admin);
        assert_eq!(act_as, vec!["Alice", "Bob"]);
        assert_eq!(read_as, vec!["Carol"]);
    }

    #[test]
    fn every_forbidden_mode_pair_is_reported() {
        let config: ConnectionConfig = toml::from_str(
            r#"
            access_token = "tok"
            party = "Alice"

            [v2]
            user = "alice"
            "#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        let expected = [
            Violation::MutuallyExclusive("access_token", "party"),
            Violation::MutuallyExclusive("access_token", "v2"),
            Violation::MutuallyExclusive("party", "v2"),
        ];
        for violation in &expected {
            assert!(err.violations.contains(violation), "missing: {violation}");
        }
        assert_eq!(err.violations.len(), expected.len());
    }

    #[test]
    fn empty_act_as_is_a_violation_even_when_otherwise_valid() {
        let config: ConnectionConfig = toml::from_str("[v1]\nact_as = \"\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert_eq!(err.violations, vec![Violation::EmptyActAs]);
    }

    #[test]
    fn act_as_of_only_delimiters_counts_as_empty() {
        let config: ConnectionConfig = toml::from_str("[v1]\nact_as = \";;\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert_eq!(err.violations, vec![Violation::EmptyActAs]);
    }

    #[test]
    fn no_mode_selected_is_reported() {
        let config: ConnectionConfig = toml::from_str("").unwrap();
        let err = config.validate().unwrap_err();
        assert_eq!(err.violations, vec![Violation::NoModeSelected]);
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let config: ConnectionConfig = toml::from_str(
            r#"
            address = "ftp://ledger.example.com"
            party = "Alice"
            "#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert_eq!(err.violations, vec![Violation::UnsupportedScheme]);
    }
}
