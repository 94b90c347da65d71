use clap::Args;
use tracing::warn;
use zemberek::proto::NormalizationRequest;
use zemberek::{Connection, NormalizationClient};

use crate::checked;
use crate::output::Output;

#[derive(Args)]
pub(crate) struct Opts {
    /// Noisy text to normalize.
    #[clap(default_value = "Mrhaba dnya")]
    pub(crate) text: String,
}

pub(crate) async fn run(
    connection: &Connection,
    opts: Opts,
    output: Output,
) -> anyhow::Result<()> {
    let client = NormalizationClient::new(connection);
    output.input(&opts.text);

    let response = checked(
        client.normalize(NormalizationRequest::new(opts.text)).await,
        "Normalize",
    )?;

    // The server reports some failures in the body rather than the status.
    if !response.error.is_empty() {
        warn!(error = %response.error, "normalization reported an error");
    }

    output.response(&response, |response| {
        [format!("Normalized = {}", response.normalized_input)]
    })
}
