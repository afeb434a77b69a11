//! The sequential extraction pipeline.
//!
//! A dump is a single pass with no parallelism and no checkpointing: header,
//! packages in listing order, then the transaction-tree stream in arrival
//! order. Correctness of the artifact layout depends on strict sequential
//! writes, so nothing here overlaps I/O.

use std::collections::HashMap;
use std::io::Write;

use futures::TryStreamExt as _;
use ledger_api::v1::admin::right;
use ledger_api::v1::{Filters, TransactionFilter};
use ledger_auth::Payload;
use ledger_client::client::{Error as ClientError, LedgerServices};
use ledger_client::resolve::Credential;
use thiserror::Error;

use crate::artifact::ArtifactWriter;

#[derive(Debug, Error)]
pub enum DumpError {
    #[error("ledger call failed: {0}")]
    Client(#[from] ClientError),
    #[error("failed to write dump artifact")]
    Io(#[from] std::io::Error),
    #[error("access token grants no act-as party to derive the dump subject")]
    NoSubject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpStats {
    pub packages: u32,
    pub transactions: u64,
}

/// Extract the full ledger state reachable with `credential` into `out`.
///
/// Any call or write failure aborts the run; whatever was already written
/// stays on disk. Operators delete and re-run rather than resume.
pub async fn run<S, W>(
    services: &mut S,
    credential: &Credential,
    out: &mut ArtifactWriter<W>,
) -> Result<DumpStats, DumpError>
where
    S: LedgerServices,
    W: Write,
{
    let subject = credential.subject().ok_or(DumpError::NoSubject)?.to_owned();
    let ledger_id = credential.ledger_id().to_owned();
    out.string(&subject)?;
    out.string(&ledger_id)?;

    let package_ids = services.list_packages(&ledger_id).await?;
    let packages = package_ids.len() as u32;
    out.count(packages)?;
    for package_id in &package_ids {
        out.string(package_id)?;
        let package = services.get_package(&ledger_id, package_id).await?;
        out.message(&package)?;
    }
    tracing::debug!(packages, "package section written");

    // The snapshot boundary. Captured after the package listing and before
    // the filter computation; transactions committed past this offset are
    // excluded even if they arrive while the stream is being set up.
    let end = services.ledger_end(&ledger_id).await?;

    let filter = party_filter(services, credential).await?;

    let mut stream = services.transaction_trees(&ledger_id, end, filter).await?;
    let mut transactions = 0u64;
    while let Some(response) = stream.try_next().await? {
        out.message(&response)?;
        transactions += 1;
    }

    Ok(DumpStats {
        packages,
        transactions,
    })
}

/// The party set whose visible data the dump covers: for V1 claims, the
/// union of act-as and read-as; for V2, every party appearing in an act-as
/// or read-as right of the user (other right kinds carry no party). Each
/// party gets an empty filter, i.e. all data visible to it.
async fn party_filter<S: LedgerServices>(
    services: &mut S,
    credential: &Credential,
) -> Result<TransactionFilter, ClientError> {
    let mut filters_by_party = HashMap::new();
    match credential.payload() {
        Payload::V1(v1) => {
            for party in v1.ledger_api.act_as.iter().chain(&v1.ledger_api.read_as) {
                filters_by_party.insert(party.clone(), Filters::default());
            }
        }
        Payload::V2(v2) => {
            for user_right in services.user_rights(&v2.sub).await? {
                match user_right.kind {
                    Some(right::Kind::CanActAs(act_as)) => {
                        filters_by_party.insert(act_as.party, Filters::default());
                    }
                    Some(right::Kind::CanReadAs(read_as)) => {
                        filters_by_party.insert(read_as.party, Filters::default());
                    }
                    _ => {}
                }
            }
        }
    }
    Ok(TransactionFilter { filters_by_party })
}
