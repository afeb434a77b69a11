//! Codec for ledger access-token claim sets.
//!
//! The ledger accepts bearer tokens whose claim set follows one of two
//! incompatible schemas. The V1 schema binds the token to an explicit ledger
//! and explicit party lists; the V2 schema carries only an opaque user id and
//! leaves party resolution to a separate rights lookup. There is no version
//! tag on the wire: a claim set belongs to whichever schema it structurally
//! decodes as, attempted V1 first.
//!
//! [`parse`] extracts the claim set from a compact JWS token *without*
//! verifying the signature; verification is the ledger's job, this tool only
//! needs to know what scope a token claims. [`mint`] produces
//! HMAC-SHA-256-signed sandbox tokens with no expiry claims, matching the
//! sandbox-test-token use case.

use base64::{Engine as _, engine::general_purpose};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The claim key the V1 schema nests its payload under.
pub const LEDGER_API_CLAIM: &str = "https://daml.com/ledger-api";

/// A decoded claim set, tagged with the schema it parsed as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    V1(PayloadV1),
    V2(PayloadV2),
}

/// V1 claim set: an explicit ledger binding with explicit party lists,
/// nested under the [`LEDGER_API_CLAIM`] key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadV1 {
    #[serde(rename = "https://daml.com/ledger-api")]
    pub ledger_api: ClaimsV1,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimsV1 {
    pub ledger_id: String,
    pub application_id: String,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub act_as: Vec<String>,
    #[serde(default)]
    pub read_as: Vec<String>,
}

/// V2 claim set: a single opaque user id. The user's effective parties are
/// resolved via the user-rights lookup, not embedded in the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadV2 {
    pub sub: String,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("'{token}' is not a three-segment JWS token")]
    Malformed { token: String },
    #[error("claim-set segment of '{token}' is not valid base64url")]
    ClaimSetEncoding {
        token: String,
        #[source]
        source: base64::DecodeError,
    },
    /// The claim set decoded as neither schema. Both decode errors are kept
    /// so the caller can see why each attempt was rejected.
    #[error(
        "claim set of '{token}' matches no supported schema (as v1: {v1}; as v2: {v2})"
    )]
    UnrecognizedClaimsSchema {
        token: String,
        v1: serde_json::Error,
        v2: serde_json::Error,
    },
}

#[derive(Debug, Error)]
#[error("failed to sign claims payload")]
pub struct MintError(#[from] jsonwebtoken::errors::Error);

/// Decode the claim set embedded in `token` without verifying its signature.
///
/// Decoding is attempted as V1 first, then V2; the first structural success
/// wins. A claim set that decodes as neither fails with
/// [`ParseError::UnrecognizedClaimsSchema`], carrying the original token for
/// diagnostics.
pub fn parse(token: &str) -> Result<Payload, ParseError> {
    let mut segments = token.split('.');
    let claims = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_header), Some(claims), Some(_signature), None) => claims,
        _ => {
            return Err(ParseError::Malformed {
                token: token.to_owned(),
            });
        }
    };

    let claim_set = general_purpose::URL_SAFE_NO_PAD.decode(claims).map_err(|source| {
        ParseError::ClaimSetEncoding {
            token: token.to_owned(),
            source,
        }
    })?;

    let v1 = match serde_json::from_slice::<PayloadV1>(&claim_set) {
        Ok(payload) => return Ok(Payload::V1(payload)),
        Err(err) => err,
    };
    let v2 = match serde_json::from_slice::<PayloadV2>(&claim_set) {
        Ok(payload) => return Ok(Payload::V2(payload)),
        Err(err) => err,
    };

    Err(ParseError::UnrecognizedClaimsSchema {
        token: token.to_owned(),
        v1,
        v2,
    })
}

/// Serialize `payload` to its canonical claim-set encoding and sign it with
/// HMAC-SHA-256 over `secret`.
///
/// No `exp` or `iat` claims are set: minted tokens are unbounded-lifetime
/// sandbox tokens.
pub fn mint(payload: &Payload, secret: &[u8]) -> Result<String, MintError> {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret);
    let token = match payload {
        Payload::V1(payload) => jsonwebtoken::encode(&header, payload, &key),
        Payload::V2(payload) => jsonwebtoken::encode(&header, payload, &key),
    }?;
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use pretty_assertions::assert_eq;

    const SECRET: &[u8] = b"secret";

    fn v1_payload() -> Payload {
        Payload::V1(PayloadV1 {
            ledger_api: ClaimsV1 {
                ledger_id: "sandbox".to_owned(),
                application_id: "ledgerdump".to_owned(),
                admin: true,
                act_as: vec!["Alice".to_owned(), "Bob".to_owned()],
                read_as: vec!["Carol".to_owned()],
            },
        })
    }

    /// Builds an unverified token around a raw claim-set JSON string.
    fn token_with_claims(claims: &str) -> String {
        let encode = |bytes: &[u8]| general_purpose::URL_SAFE_NO_PAD.encode(bytes);
        format!(
            "{}.{}.{}",
            encode(br#"{"alg":"HS256","typ":"JWT"}"#),
            encode(claims.as_bytes()),
            encode(b"not-a-real-signature"),
        )
    }

    #[test]
    fn v1_round_trips_through_mint_and_parse() {
        let payload = v1_payload();
        let token = mint(&payload, SECRET).unwrap();
        assert_eq!(parse(&token).unwrap(), payload);
    }

    #[test]
    fn v2_round_trips_through_mint_and_parse() {
        let payload = Payload::V2(PayloadV2 {
            sub: "alice".to_owned(),
        });
        let token = mint(&payload, SECRET).unwrap();
        assert_eq!(parse(&token).unwrap(), payload);
    }

    #[test]
    fn v1_claim_set_uses_the_ledger_api_key_and_camel_case_fields() {
        let Payload::V1(payload) = v1_payload() else {
            unreachable!()
        };
        let json = serde_json::to_value(&payload).unwrap();
        let claims = &json[LEDGER_API_CLAIM];
        assert_eq!(claims["ledgerId"], "sandbox");
        assert_eq!(claims["applicationId"], "ledgerdump");
        assert_eq!(claims["admin"], true);
        assert_eq!(claims["actAs"][0], "Alice");
        assert_eq!(claims["readAs"][0], "Carol");
    }

    #[test]
    fn bare_sub_claim_parses_as_v2() {
        let token = token_with_claims(r#"{"sub":"alice"}"#);
        let Payload::V2(payload) = parse(&token).unwrap() else {
            panic!("expected V2")
        };
        assert_eq!(payload.sub, "alice");
    }

    #[test]
    fn v1_shaped_claims_never_parse_as_v2() {
        // Even with an extra `sub` field present, the V1 attempt comes first.
        let token = token_with_claims(
            r#"{"https://daml.com/ledger-api":{"ledgerId":"sandbox","applicationId":"app","actAs":["Alice"]},"sub":"alice"}"#,
        );
        assert!(matches!(parse(&token).unwrap(), Payload::V1(_)));
    }

    #[test]
    fn v2_tolerates_standard_registered_claims() {
        let token =
            token_with_claims(r#"{"sub":"alice","aud":"ledger","iss":"issuer","exp":1}"#);
        assert!(matches!(parse(&token).unwrap(), Payload::V2(_)));
    }

    #[test]
    fn unrecognized_claims_carry_both_decode_errors() {
        let token = token_with_claims(r#"{"unrelated":42}"#);
        let err = parse(&token).unwrap_err();
        let ParseError::UnrecognizedClaimsSchema {
            token: offending, ..
        } = &err
        else {
            panic!("expected UnrecognizedClaimsSchema, got {err}")
        };
        assert_eq!(*offending, token);
        let message = err.to_string();
        assert!(message.contains("as v1:"), "{message}");
        assert!(message.contains("as v2:"), "{message}");
    }

    #[test]
    fn non_jws_input_is_malformed() {
        assert!(matches!(
            parse("garbage").unwrap_err(),
            ParseError::Malformed { .. }
        ));
    }
}
