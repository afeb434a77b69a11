mod artifact;
mod dump;
mod logging;

use std::path::{Path, PathBuf};

use clap::Parser;
use fs_err as fs;
use ledger_client::client::LedgerClient;
use ledger_client::config::ConnectionConfig;
use ledger_client::resolve;

use crate::artifact::ArtifactWriter;

/// A tool for dumping a full ledger snapshot (package definitions and
/// transaction-tree history) to a single binary artifact.
#[derive(Parser, Debug)]
#[command(name = "ledgerdump")]
struct Args {
    /// Path to a connection config file. Example config:
    ///
    /// ```toml
    /// address = "http://localhost:6865"
    /// party = "Alice"
    /// ```
    #[arg(long, short, env = "LEDGERDUMP_CONNECTION")]
    config: String,

    /// The path to write the dump artifact to.
    #[arg(long, short)]
    out: PathBuf,

    /// Overwrite the output file if it already exists.
    #[arg(long)]
    force: bool,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    logging::init();
    run(Args::parse()).await
}

async fn run(args: Args) -> Result<(), anyhow::Error> {
    let config: ConnectionConfig = toml::from_str(&fs::read_to_string(&args.config)?)?;
    let connection = config.validate()?;

    // Checked before any RPC so an already-present artifact costs nothing
    // and is never truncated.
    if skip_existing_output(&args.out, args.force) {
        tracing::warn!(
            "'{}' already exists! Pass --force to overwrite.",
            args.out.display()
        );
        return Ok(());
    }

    let credential = resolve::resolve(&connection).await?;
    let mut client = LedgerClient::connect(&connection.address, Some(&credential)).await?;

    let mut writer = ArtifactWriter::new(std::io::BufWriter::new(fs::File::create(&args.out)?));
    let stats = dump::run(&mut client, &credential, &mut writer).await?;
    writer.flush()?;

    tracing::info!(
        "Written {} packages and {} transactions to '{}'.",
        stats.packages,
        stats.transactions,
        args.out.display()
    );
    Ok(())
}

fn skip_existing_output(out: &Path, force: bool) -> bool {
    !force && out.exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_output_is_skipped_unless_forced() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(skip_existing_output(file.path(), false));
        assert!(!skip_existing_output(file.path(), true));
    }

    #[test]
    fn missing_output_is_never_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dump.bin");
        assert!(!skip_existing_output(&path, false));
        assert!(!skip_existing_output(&path, true));
    }
}
