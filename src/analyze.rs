use clap::Args;
use zemberek::proto::{SentenceAnalysis, SentenceRequest, WordAnalysis, WordRequest};
use zemberek::{Connection, MorphologyClient, SimpleAnalysisClient};

use crate::checked;
use crate::output::Output;

#[derive(Args)]
pub(crate) struct SentenceOpts {
    /// Sentence to analyze and disambiguate.
    #[clap(default_value = "kavanozun kapağını açtır demiştim sana.")]
    pub(crate) text: String,

    /// Ask the server for every analysis of every token, not just the best one.
    #[clap(long)]
    pub(crate) all: bool,

    /// Use the morphology service, which also returns morphemes.
    #[clap(long)]
    pub(crate) morphology: bool,
}

#[derive(Args)]
pub(crate) struct WordOpts {
    /// Word to analyze.
    #[clap(default_value = "kavanozun")]
    pub(crate) text: String,

    /// Use the morphology service, which also returns morphemes.
    #[clap(long)]
    pub(crate) morphology: bool,
}

pub(crate) async fn run_sentence(
    connection: &Connection,
    opts: SentenceOpts,
    output: Output,
) -> anyhow::Result<()> {
    output.input(&opts.text);

    let mut request = SentenceRequest::new(opts.text);
    if opts.all {
        request = request.with_all_analyses();
    }

    let analysis = if opts.morphology {
        let client = MorphologyClient::new(connection);
        checked(client.analyze_sentence(request).await, "AnalyzeSentence")?
    } else {
        let client = SimpleAnalysisClient::new(connection);
        checked(client.analyze_sentence(request).await, "AnalyzeSentence")?
    };

    output.response(&analysis, |analysis| sentence_lines(analysis, opts.all))
}

fn sentence_lines(analysis: &SentenceAnalysis, all: bool) -> Vec<String> {
    if !all {
        return analysis.describe_lines();
    }

    let mut lines = Vec::new();
    for result in &analysis.results {
        lines.push(result.describe());
        if let Some(all) = &result.all {
            lines.extend(all.describe_lines().into_iter().map(|line| format!("    {}", line)));
        }
    }
    lines
}

pub(crate) async fn run_word(
    connection: &Connection,
    opts: WordOpts,
    output: Output,
) -> anyhow::Result<()> {
    output.input(&opts.text);
    let request = WordRequest::new(opts.text);

    let analysis = if opts.morphology {
        let client = MorphologyClient::new(connection);
        checked(client.analyze_word(request).await, "AnalyzeWord")?
    } else {
        let client = SimpleAnalysisClient::new(connection);
        checked(client.analyze_word(request).await, "AnalyzeWord")?
    };

    output.response(&analysis, word_lines)
}

fn word_lines(analysis: &WordAnalysis) -> Vec<String> {
    analysis
        .analyses
        .iter()
        .map(|single| {
            let mut line = single.analysis.clone();
            if let Some(lemma) = single.lemma() {
                line.push_str(&format!(" ({})", lemma));
            }
            if let Some(segmentation) = single.segmentation() {
                line.push_str(&format!(" {}", segmentation));
            }
            line
        })
        .collect()
}
