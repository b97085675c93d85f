//! Binary entrypoint.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    reader_xpost_combiner::interface::cli::run().await
}
