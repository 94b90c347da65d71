//! Human-readable renderings of responses.

use crate::proto::{
    IdResult, LanguageIdScoresResponse, SentenceAnalysis, SentenceWordAnalysis, SingleAnalysis,
    TokenProto, WordAnalysis,
};

impl SentenceWordAnalysis {
    /// Lemmas of the top-ranked analysis, or nothing if the server sent none.
    pub fn best_lemmas(&self) -> &[String] {
        self.best
            .as_ref()
            .map(|best| best.lemmas.as_slice())
            .unwrap_or(&[])
    }

    /// `"<token> -> <lemma1> <lemma2> ..."`
    pub fn describe(&self) -> String {
        let lemmas = self.best_lemmas();
        if lemmas.is_empty() {
            format!("{} ->", self.token)
        } else {
            format!("{} -> {}", self.token, lemmas.join(" "))
        }
    }
}

impl SentenceAnalysis {
    pub fn describe_lines(&self) -> Vec<String> {
        self.results
            .iter()
            .map(SentenceWordAnalysis::describe)
            .collect()
    }
}

impl SingleAnalysis {
    pub fn lemma(&self) -> Option<&str> {
        self.dictionary_item
            .as_ref()
            .map(|item| item.lemma.as_str())
    }

    /// Surface forms of the morphemes joined with `-`, e.g. `kavanoz-un`.
    /// `None` when the server sent no morphemes.
    pub fn segmentation(&self) -> Option<String> {
        if self.morphemes.is_empty() {
            return None;
        }
        let surfaces = self.morphemes
            .iter()
            .filter(|m| !m.surface.is_empty())
            .map(|m| m.surface.as_str())
            .collect::<Vec<_>>();
        Some(surfaces.join("-"))
    }
}

impl WordAnalysis {
    pub fn describe_lines(&self) -> Vec<String> {
        self.analyses
            .iter()
            .map(|analysis| analysis.analysis.clone())
            .collect()
    }
}

impl IdResult {
    pub fn describe(&self) -> String {
        format!("{} {:.4}", self.id, self.score)
    }
}

impl LanguageIdScoresResponse {
    /// Results ordered from the most to the least likely language.
    pub fn ranked(&self) -> Vec<&IdResult> {
        let mut ranked = self.id_result.iter().collect::<Vec<_>>();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }
}

impl TokenProto {
    pub fn describe(&self, with_boundaries: bool) -> String {
        if with_boundaries {
            format!("{} {} [{}-{}]", self.token, self.r#type, self.start, self.end)
        } else {
            format!("{} {}", self.token, self.r#type)
        }
    }
}
