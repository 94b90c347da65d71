//! Request and response messages exchanged with the Zemberek services.
//!
//! Field names serialize to JSON in the proto3 camelCase convention
//! (`langId`, `normalizedInput`, ...).

use serde::Serialize;

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageIdRequest {
    #[prost(string, tag = "1")]
    pub input: String,
    /// Zero lets the server pick its own sample count.
    #[prost(int32, tag = "2")]
    pub max_sample_count: i32,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageIdResponse {
    #[prost(string, tag = "1")]
    pub lang_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdResult {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(double, tag = "2")]
    pub score: f64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageIdScoresResponse {
    #[prost(message, repeated, tag = "1")]
    pub id_result: Vec<IdResult>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationRequest {
    #[prost(string, tag = "1")]
    pub input: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationResponse {
    #[prost(string, tag = "1")]
    pub normalized_input: String,
    #[prost(string, tag = "2")]
    pub error: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenizationRequest {
    #[prost(string, tag = "1")]
    pub input: String,
    #[prost(bool, tag = "2")]
    pub include_token_boundaries: bool,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenProto {
    #[prost(string, tag = "1")]
    pub token: String,
    #[prost(string, tag = "2")]
    pub r#type: String,
    #[prost(int32, tag = "3")]
    pub start: i32,
    #[prost(int32, tag = "4")]
    pub end: i32,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenizationResponse {
    #[prost(message, repeated, tag = "1")]
    pub tokens: Vec<TokenProto>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceExtractionRequest {
    #[prost(string, tag = "1")]
    pub document: String,
    #[prost(bool, tag = "2")]
    pub do_not_split_in_double_quotes: bool,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceExtractionResponse {
    #[prost(string, repeated, tag = "1")]
    pub sentences: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceRequest {
    #[prost(string, tag = "1")]
    pub input: String,
    #[prost(bool, tag = "2")]
    pub contain_all_analyses: bool,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRequest {
    #[prost(string, tag = "1")]
    pub input: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryItem {
    #[prost(string, tag = "1")]
    pub lemma: String,
    #[prost(string, tag = "2")]
    pub pos: String,
    /// Secondary part of speech; empty when the item has none.
    #[prost(string, tag = "3")]
    pub pos2: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleAnalysis {
    #[prost(string, tag = "1")]
    pub analysis: String,
    #[prost(message, optional, tag = "2")]
    pub dictionary_item: Option<DictionaryItem>,
    #[prost(string, tag = "3")]
    pub pos: String,
    #[prost(bool, tag = "4")]
    pub informal: bool,
    #[prost(bool, tag = "5")]
    pub runtime: bool,
    #[prost(string, repeated, tag = "6")]
    pub lemmas: Vec<String>,
    /// Only sent by the morphology service.
    #[prost(message, repeated, tag = "7")]
    pub morphemes: Vec<MorphemeData>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MorphemeData {
    /// Morpheme id, such as `Noun` or `A3sg`.
    #[prost(string, tag = "1")]
    pub morpheme: String,
    /// The letters the morpheme contributes to the word. Often empty.
    #[prost(string, tag = "2")]
    pub surface: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordAnalysis {
    #[prost(string, tag = "1")]
    pub input: String,
    #[prost(message, repeated, tag = "2")]
    pub analyses: Vec<SingleAnalysis>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceWordAnalysis {
    #[prost(string, tag = "1")]
    pub token: String,
    #[prost(message, optional, tag = "2")]
    pub best: Option<SingleAnalysis>,
    /// Only filled in when the request asked for all analyses.
    #[prost(message, optional, tag = "3")]
    pub all: Option<WordAnalysis>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceAnalysis {
    #[prost(string, tag = "1")]
    pub input: String,
    #[prost(message, repeated, tag = "2")]
    pub results: Vec<SentenceWordAnalysis>,
}

impl LanguageIdRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            max_sample_count: 0,
        }
    }

    pub fn with_max_sample_count(mut self, count: i32) -> Self {
        self.max_sample_count = count;
        self
    }
}

impl NormalizationRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

impl TokenizationRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            include_token_boundaries: false,
        }
    }

    pub fn with_boundaries(mut self) -> Self {
        self.include_token_boundaries = true;
        self
    }
}

impl SentenceExtractionRequest {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            do_not_split_in_double_quotes: false,
        }
    }

    pub fn keep_double_quotes(mut self) -> Self {
        self.do_not_split_in_double_quotes = true;
        self
    }
}

impl SentenceRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            contain_all_analyses: false,
        }
    }

    pub fn with_all_analyses(mut self) -> Self {
        self.contain_all_analyses = true;
        self
    }
}

impl WordRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
