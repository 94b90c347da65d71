use clap::Args;
use tracing::info;
use zemberek::proto::LanguageIdRequest;
use zemberek::{Connection, LanguageIdClient};

use crate::checked;
use crate::output::Output;

#[derive(Args)]
pub(crate) struct Opts {
    /// Text to identify.
    #[clap(default_value = "Merhaba Dünya!\n")]
    pub(crate) text: String,

    /// Use the faster, less accurate model.
    #[clap(long)]
    pub(crate) fast: bool,

    /// Only tell Turkish apart from the languages closest to it.
    #[clap(long)]
    pub(crate) tr: bool,

    /// Print the score of every candidate language instead of the best one.
    #[clap(long)]
    pub(crate) scores: bool,

    /// Number of samples the server takes from long inputs.
    #[clap(long = "max-samples")]
    pub(crate) max_samples: Option<i32>,
}

impl Opts {
    fn request(&self) -> LanguageIdRequest {
        let request = LanguageIdRequest::new(self.text.clone());
        match self.max_samples {
            Some(count) => request.with_max_sample_count(count),
            None => request,
        }
    }
}

pub(crate) async fn run(
    connection: &Connection,
    opts: Opts,
    output: Output,
) -> anyhow::Result<()> {
    let client = LanguageIdClient::new(connection);
    output.input(&opts.text);
    let request = opts.request();

    if opts.scores {
        let (call, method) = match (opts.fast, opts.tr) {
            (false, false) => (client.get_scores(request), "GetScores"),
            (true, false) => (client.get_scores_fast(request), "GetScoresFast"),
            (false, true) => (client.get_scores_tr(request), "GetScoresTr"),
            (true, true) => (client.get_scores_fast_tr(request), "GetScoresFastTr"),
        };

        let response = checked(call.await, method)?;
        info!(candidates = response.id_result.len(), "got language scores");

        output.response(&response, |response| {
            response
                .ranked()
                .into_iter()
                .map(|result| result.describe())
                .collect::<Vec<_>>()
        })
    } else {
        let (call, method) = match (opts.fast, opts.tr) {
            (false, false) => (client.detect(request), "Detect"),
            (true, false) => (client.detect_fast(request), "DetectFast"),
            (false, true) => (client.detect_tr(request), "DetectTr"),
            (true, true) => (client.detect_fast_tr(request), "DetectFastTr"),
        };

        let response = checked(call.await, method)?;

        output.response(&response, |response| {
            [format!("Language = {}", response.lang_id)]
        })
    }
}
