//! Credential resolution: turning a [`ValidatedConnection`] into a bearer
//! token plus its typed claims.

use ledger_auth::{ClaimsV1, Payload, PayloadV1, PayloadV2};
use thiserror::Error;

use crate::client::{self, LedgerClient};
use crate::config::{AuthMode, ValidatedConnection};

/// A resolved runtime credential: the bearer token attached to every call
/// and the claims it was minted from (or parsed into). Derived exactly once
/// from the configuration and immutable afterward.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    access_token: String,
    payload: Payload,
}

impl Credential {
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// The subject this credential acts for: the first act-as party of a V1
    /// claim set, or the V2 user id. `None` only for a pre-minted V1 token
    /// whose act-as list is empty.
    pub fn subject(&self) -> Option<&str> {
        match &self.payload {
            Payload::V1(v1) => v1.ledger_api.act_as.first().map(String::as_str),
            Payload::V2(v2) => Some(&v2.sub),
        }
    }

    /// The ledger identifier the credential is bound to; empty for V2
    /// tokens, which are ledger-agnostic.
    pub fn ledger_id(&self) -> &str {
        match &self.payload {
            Payload::V1(v1) => &v1.ledger_api.ledger_id,
            Payload::V2(_) => "",
        }
    }
}

// The bearer token never appears in logs.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_token", &"<redacted>")
            .field("payload", &self.payload)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("ledger identity lookup at the configured address failed")]
    IdentityLookup(#[source] client::Error),
    #[error(transparent)]
    Parse(#[from] ledger_auth::ParseError),
    #[error(transparent)]
    Mint(#[from] ledger_auth::MintError),
    /// Unreachable via [`resolve`], which performs the lookup for every mode
    /// that needs one; only [`resolve_with_ledger_id`] can report this.
    #[error("no ledger identifier available for a mode that requires one")]
    MissingLedgerId,
}

/// Resolve `connection` into a [`Credential`].
///
/// The `party` and `v1` modes first derive the ledger identifier through a
/// single anonymous unary call over a throwaway connection to the configured
/// address; the other modes are pure. Runs once per configuration; the
/// result is shared, read-only, for the process lifetime.
pub async fn resolve(connection: &ValidatedConnection) -> Result<Credential, ResolveError> {
    let ledger_id = match &connection.mode {
        AuthMode::Party(_) | AuthMode::V1 { .. } => {
            let mut client = LedgerClient::connect(&connection.address, None)
                .await
                .map_err(ResolveError::IdentityLookup)?;
            let ledger_id = client
                .ledger_identity()
                .await
                .map_err(ResolveError::IdentityLookup)?;
            tracing::debug!(ledger_id = %ledger_id, "derived ledger identifier");
            Some(ledger_id)
        }
        AuthMode::AccessToken(_) | AuthMode::V2 { .. } => None,
    };
    resolve_with_ledger_id(connection, ledger_id.as_deref())
}

/// The I/O-free tail of [`resolve`]: mode dispatch, token parsing and
/// minting, with the ledger identifier (where one is needed) already in
/// hand.
pub fn resolve_with_ledger_id(
    connection: &ValidatedConnection,
    ledger_id: Option<&str>,
) -> Result<Credential, ResolveError> {
    match &connection.mode {
        AuthMode::AccessToken(token) => {
            let payload = ledger_auth::parse(token)?;
            Ok(Credential {
                access_token: (**token).clone(),
                payload,
            })
        }
        AuthMode::Party(party) => {
            let ledger_id = ledger_id.ok_or(ResolveError::MissingLedgerId)?;
            mint_v1(connection, ledger_id, false, vec![party.clone()], Vec::new())
        }
        AuthMode::V1 {
            admin,
            act_as,
            read_as,
        } => {
            let ledger_id = ledger_id.ok_or(ResolveError::MissingLedgerId)?;
            mint_v1(connection, ledger_id, *admin, act_as.clone(), read_as.clone())
        }
        AuthMode::V2 { user } => {
            let payload = Payload::V2(PayloadV2 { sub: user.clone() });
            let access_token = ledger_auth::mint(&payload, connection.token_secret.as_bytes())?;
            Ok(Credential {
                access_token,
                payload,
            })
        }
    }
}

fn mint_v1(
    connection: &ValidatedConnection,
    ledger_id: &str,
    admin: bool,
    act_as: Vec<String>,
    read_as: Vec<String>,
) -> Result<Credential, ResolveError> {
    let payload = Payload::V1(PayloadV1 {
        ledger_api: ClaimsV1 {
            ledger_id: ledger_id.to_owned(),
            application_id: connection.application_id.clone(),
            admin,
            act_as,
            read_as,
        },
    });
    let access_token = ledger_auth::mint(&payload, connection.token_secret.as_bytes())?;
    Ok(Credential {
        access_token,
        payload,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use url::Url;

    fn connection(mode: AuthMode) -> ValidatedConnection {
        ValidatedConnection {
            address: Url::parse("http://localhost:6865").unwrap(),
            application_id: "ledgerdump".to_owned(),
            token_secret: "secret".to_owned().into(),
            mode,
        }
    }

    #[test]
    fn party_mode_mints_a_single_act_as_v1_token() {
        let connection = connection(AuthMode::Party("Alice".to_owned()));
        let credential = resolve_with_ledger_id(&connection, Some("sandbox")).unwrap();

        let Payload::V1(payload) = credential.payload() else {
            panic!("expected a V1 payload")
        };
        assert_eq!(payload.ledger_api.act_as, vec!["Alice"]);
        assert!(payload.ledger_api.read_as.is_empty());
        assert!(!payload.ledger_api.admin);
        assert_eq!(payload.ledger_api.ledger_id, "sandbox");
        assert_eq!(payload.ledger_api.application_id, "ledgerdump");
        assert_eq!(credential.subject(), Some("Alice"));
        assert_eq!(credential.ledger_id(), "sandbox");

        // The minted token parses back to the same payload.
        let reparsed = ledger_auth::parse(credential.access_token()).unwrap();
        assert_eq!(&reparsed, credential.payload());
    }

    #[test]
    fn v1_mode_mints_the_given_scope() {
        let connection = connection(AuthMode::V1 {
            admin: true,
            act_as: vec!["Alice".to_owned(), "Bob".to_owned()],
            read_as: vec!["Carol".to_owned()],
        });
        let credential = resolve_with_ledger_id(&connection, Some("sandbox")).unwrap();

        let Payload::V1(payload) = credential.payload() else {
            panic!("expected a V1 payload")
        };
        assert!(payload.ledger_api.admin);
        assert_eq!(payload.ledger_api.act_as, vec!["Alice", "Bob"]);
        assert_eq!(payload.ledger_api.read_as, vec!["Carol"]);
        assert_eq!(credential.subject(), Some("Alice"));
    }

    #[test]
    fn v2_mode_needs_no_ledger_identifier() {
        let connection = connection(AuthMode::V2 {
            user: "alice".to_owned(),
        });
        let credential = resolve_with_ledger_id(&connection, None).unwrap();
        assert!(matches!(credential.payload(), Payload::V2(_)));
        assert_eq!(credential.subject(), Some("alice"));
        assert_eq!(credential.ledger_id(), "");
    }

    #[test]
    fn access_token_mode_adopts_the_given_token() {
        let minted = resolve_with_ledger_id(
            &connection(AuthMode::V2 {
                user: "alice".to_owned(),
            }),
            None,
        )
        .unwrap();

        let adopted = resolve_with_ledger_id(
            &connection(AuthMode::AccessToken(
                minted.access_token().to_owned().into(),
            )),
            None,
        )
        .unwrap();
        assert_eq!(adopted.access_token(), minted.access_token());
        assert_eq!(adopted.payload(), minted.payload());
    }

    #[test]
    fn party_mode_without_ledger_id_is_a_programming_error() {
        let err =
            resolve_with_ledger_id(&connection(AuthMode::Party("Alice".to_owned())), None)
                .unwrap_err();
        assert!(matches!(err, ResolveError::MissingLedgerId));
    }

    #[test]
    fn debug_output_redacts_the_token() {
        let credential = resolve_with_ledger_id(
            &connection(AuthMode::V2 {
                user: "alice".to_owned(),
            }),
            None,
        )
        .unwrap();
        let debug = format!("{credential:?}");
        assert!(debug.contains("<redacted>"), "{debug}");
        assert!(!debug.contains(credential.access_token()), "{debug}");
    }
}
