//! The authenticated gRPC client facade and the service seam the dump
//! pipeline is generic over.

use std::future::Future;
use std::str::FromStr;

use anyhow::anyhow;
use futures::stream::BoxStream;
use futures::{Stream, StreamExt as _, TryStreamExt as _};
use ledger_api::v1::admin::user_management_service_client::UserManagementServiceClient;
use ledger_api::v1::admin::{ListUserRightsRequest, Right};
use ledger_api::v1::ledger_identity_service_client::LedgerIdentityServiceClient;
use ledger_api::v1::package_service_client::PackageServiceClient;
use ledger_api::v1::transaction_service_client::TransactionServiceClient;
use ledger_api::v1::{
    GetLedgerEndRequest, GetLedgerIdentityRequest, GetPackageRequest, GetPackageResponse,
    GetTransactionTreesResponse, GetTransactionsRequest, LedgerOffset, ListPackagesRequest,
    TransactionFilter, ledger_offset,
};
use thiserror::Error;
use tonic::codegen::http::uri::InvalidUri;
use tonic::metadata::errors::InvalidMetadataValue;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::service::Interceptor;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::{Channel, Endpoint, Uri};
use url::Url;

use crate::resolve::Credential;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP connection error: {0}")]
    Connection(#[from] tonic::transport::Error),
    #[error("gRPC call error: {0}")]
    Call(#[from] tonic::Status),
    #[error("URL parse error: {0}")]
    UriParse(#[from] InvalidUri),
    #[error("Access token not usable as a header value: {0}")]
    TokenNotAscii(#[from] InvalidMetadataValue),
    #[error("Malformed response: {0}")]
    BadResponse(anyhow::Error),
}

/// Injects `authorization: Bearer <token>` into every outbound call.
///
/// Applied once at channel construction so unary and streaming calls are
/// covered uniformly. With no credential attached (the bootstrap
/// ledger-identity lookup) calls pass through unmodified.
#[derive(Clone)]
pub struct AuthInterceptor {
    token: Option<MetadataValue<Ascii>>,
}

impl AuthInterceptor {
    pub fn new(credential: Option<&Credential>) -> Result<Self, Error> {
        let token = match credential {
            Some(credential) => {
                let bearer = format!("Bearer {}", credential.access_token());
                Some(bearer.parse::<MetadataValue<Ascii>>()?)
            }
            None => None,
        };
        Ok(AuthInterceptor { token })
    }
}

impl std::fmt::Debug for AuthInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.token {
            Some(_) => f.write_str("token_redacted"),
            None => f.write_str("no_token_attached"),
        }
    }
}

impl Interceptor for AuthInterceptor {
    fn call(&mut self, mut req: tonic::Request<()>) -> Result<tonic::Request<()>, tonic::Status> {
        if let Some(ref t) = self.token {
            req.metadata_mut().insert("authorization", t.clone());
        }

        Ok(req)
    }
}

type AuthedChannel = InterceptedService<Channel, AuthInterceptor>;

// Cloning is cheap and shares the underlying connection.
#[derive(Clone)]
pub struct LedgerClient {
    identity: LedgerIdentityServiceClient<AuthedChannel>,
    packages: PackageServiceClient<AuthedChannel>,
    transactions: TransactionServiceClient<AuthedChannel>,
    users: UserManagementServiceClient<AuthedChannel>,
}

impl LedgerClient {
    /// Connect to the ledger at `address`, attaching `credential` (when
    /// given) to every outbound call.
    pub async fn connect(address: &Url, credential: Option<&Credential>) -> Result<Self, Error> {
        let uri = Uri::from_str(address.as_str())?;
        let channel = Endpoint::from(uri).connect().await?;
        let auth = AuthInterceptor::new(credential)?;
        Ok(LedgerClient {
            identity: LedgerIdentityServiceClient::with_interceptor(
                channel.clone(),
                auth.clone(),
            ),
            packages: PackageServiceClient::with_interceptor(channel.clone(), auth.clone()),
            transactions: TransactionServiceClient::with_interceptor(
                channel.clone(),
                auth.clone(),
            ),
            users: UserManagementServiceClient::with_interceptor(channel, auth),
        })
    }

    /// The ledger identifier reported by the identity endpoint. The endpoint
    /// is anonymous-accessible, so this works on credential-less clients.
    pub async fn ledger_identity(&mut self) -> Result<String, Error> {
        let response = self
            .identity
            .get_ledger_identity(GetLedgerIdentityRequest {})
            .await?;
        Ok(response.into_inner().ledger_id)
    }
}

/// The ledger operations the dump pipeline consumes. `LedgerClient` is the
/// production implementation; tests substitute in-memory fakes.
pub trait LedgerServices {
    type TreeStream: Stream<Item = Result<GetTransactionTreesResponse, Error>> + Send + Unpin;

    fn list_packages(
        &mut self,
        ledger_id: &str,
    ) -> impl Future<Output = Result<Vec<String>, Error>> + Send;

    fn get_package(
        &mut self,
        ledger_id: &str,
        package_id: &str,
    ) -> impl Future<Output = Result<GetPackageResponse, Error>> + Send;

    fn ledger_end(
        &mut self,
        ledger_id: &str,
    ) -> impl Future<Output = Result<LedgerOffset, Error>> + Send;

    fn user_rights(
        &mut self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<Right>, Error>> + Send;

    /// Open the transaction-tree stream from ledger begin to `end`,
    /// restricted to `filter`, with verbose detail.
    fn transaction_trees(
        &mut self,
        ledger_id: &str,
        end: LedgerOffset,
        filter: TransactionFilter,
    ) -> impl Future<Output = Result<Self::TreeStream, Error>> + Send;
}

impl LedgerServices for LedgerClient {
    type TreeStream = BoxStream<'static, Result<GetTransactionTreesResponse, Error>>;

    fn list_packages(
        &mut self,
        ledger_id: &str,
    ) -> impl Future<Output = Result<Vec<String>, Error>> + Send {
        let request = ListPackagesRequest {
            ledger_id: ledger_id.to_owned(),
        };
        async move {
            let response = self.packages.list_packages(request).await?;
            Ok(response.into_inner().package_ids)
        }
    }

    fn get_package(
        &mut self,
        ledger_id: &str,
        package_id: &str,
    ) -> impl Future<Output = Result<GetPackageResponse, Error>> + Send {
        let request = GetPackageRequest {
            ledger_id: ledger_id.to_owned(),
            package_id: package_id.to_owned(),
        };
        async move { Ok(self.packages.get_package(request).await?.into_inner()) }
    }

    fn ledger_end(
        &mut self,
        ledger_id: &str,
    ) -> impl Future<Output = Result<LedgerOffset, Error>> + Send {
        let request = GetLedgerEndRequest {
            ledger_id: ledger_id.to_owned(),
        };
        async move {
            let response = self.transactions.get_ledger_end(request).await?.into_inner();
            response
                .offset
                .ok_or_else(|| Error::BadResponse(anyhow!("ledger end response carries no offset")))
        }
    }

    fn user_rights(
        &mut self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<Right>, Error>> + Send {
        let request = ListUserRightsRequest {
            user_id: user_id.to_owned(),
        };
        async move {
            let response = self.users.list_user_rights(request).await?;
            Ok(response.into_inner().rights)
        }
    }

    fn transaction_trees(
        &mut self,
        ledger_id: &str,
        end: LedgerOffset,
        filter: TransactionFilter,
    ) -> impl Future<Output = Result<Self::TreeStream, Error>> + Send {
        let request = GetTransactionsRequest {
            ledger_id: ledger_id.to_owned(),
            begin: Some(LedgerOffset {
                value: Some(ledger_offset::Value::Boundary(
                    ledger_offset::LedgerBoundary::LedgerBegin as i32,
                )),
            }),
            end: Some(end),
            filter: Some(filter),
            verbose: true,
        };
        async move {
            let raw_stream = self
                .transactions
                .get_transaction_trees(request)
                .await?
                .into_inner();
            Ok(raw_stream.err_into::<Error>().boxed())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthMode, ValidatedConnection};
    use crate::resolve::resolve_with_ledger_id;

    fn credential() -> Credential {
        let connection = ValidatedConnection {
            address: Url::parse("http://localhost:6865").unwrap(),
            application_id: "ledgerdump".to_owned(),
            token_secret: "secret".to_owned().into(),
            mode: AuthMode::V2 {
                user: "alice".to_owned(),
            },
        };
        resolve_with_ledger_id(&connection, None).unwrap()
    }

    #[test]
    fn interceptor_attaches_a_bearer_header() {
        let credential = credential();
        let mut interceptor = AuthInterceptor::new(Some(&credential)).unwrap();
        let request = interceptor.call(tonic::Request::new(())).unwrap();
        let header = request.metadata().get("authorization").unwrap();
        assert_eq!(
            header.to_str().unwrap(),
            format!("Bearer {}", credential.access_token())
        );
    }

    #[test]
    fn interceptor_passes_through_without_a_credential() {
        let mut interceptor = AuthInterceptor::new(None).unwrap();
        let request = interceptor.call(tonic::Request::new(())).unwrap();
        assert!(request.metadata().get("authorization").is_none());
    }

    #[test]
    fn interceptor_debug_never_shows_the_token() {
        let credential = credential();
        let interceptor = AuthInterceptor::new(Some(&credential)).unwrap();
        assert_eq!(format!("{interceptor:?}"), "token_redacted");
    }
}
