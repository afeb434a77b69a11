//! Prints the identity of the ledger at the given address, using an
//! anonymous (credential-less) connection.
//!
//! ```sh
//! cargo run --example ledger_identity -- http://localhost:6865
//! ```

use ledger_client::client::LedgerClient;
use url::Url;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let address = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:6865".to_owned());
    let address = Url::parse(&address)?;

    let mut client = LedgerClient::connect(&address, None).await?;
    println!("Ledger identity = {}", client.ledger_identity().await?);

    Ok(())
}
