use clap::Args;
use zemberek::proto::{SentenceExtractionRequest, TokenizationRequest};
use zemberek::{Connection, PreprocessingClient};

use crate::checked;
use crate::output::Output;

const TOKENIZE_SAMPLE: &str = "İstanbul'a 3.5 saatte vardık, değil mi?";

const SENTENCES_SAMPLE: &str =
    "Prof. Dr. Ahmet Bey geldi. \"Merhaba. Nasılsınız?\" dedi. Herkes ayağa kalktı.";

#[derive(Args)]
pub(crate) struct TokenizeOpts {
    /// Text to split into tokens.
    #[clap(default_value = TOKENIZE_SAMPLE)]
    pub(crate) text: String,

    /// Include the start and end offset of every token.
    #[clap(long)]
    pub(crate) boundaries: bool,
}

#[derive(Args)]
pub(crate) struct SentenceOpts {
    /// Document to split into sentences.
    #[clap(default_value = SENTENCES_SAMPLE)]
    pub(crate) text: String,

    /// Do not split inside double quotes.
    #[clap(long = "keep-quotes")]
    pub(crate) keep_quotes: bool,
}

pub(crate) async fn run_tokenize(
    connection: &Connection,
    opts: TokenizeOpts,
    output: Output,
) -> anyhow::Result<()> {
    let client = PreprocessingClient::new(connection);
    output.input(&opts.text);

    let mut request = TokenizationRequest::new(opts.text);
    if opts.boundaries {
        request = request.with_boundaries();
    }

    let response = checked(client.tokenize(request).await, "Tokenize")?;

    output.response(&response, |response| {
        response
            .tokens
            .iter()
            .map(|token| token.describe(opts.boundaries))
            .collect::<Vec<_>>()
    })
}

pub(crate) async fn run_sentences(
    connection: &Connection,
    opts: SentenceOpts,
    output: Output,
) -> anyhow::Result<()> {
    let client = PreprocessingClient::new(connection);
    output.input(&opts.text);

    let mut request = SentenceExtractionRequest::new(opts.text);
    if opts.keep_quotes {
        request = request.keep_double_quotes();
    }

    let response = checked(client.extract_sentences(request).await, "ExtractSentences")?;

    output.response(&response, |response| response.sentences.clone())
}
