use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use prost::Message;
use tonic::metadata::MetadataMap;
use tonic::Status;

use zemberek::proto::*;
use zemberek::{
    CallError, CallOptions, CallParams, Code, Dispatcher, LanguageIdClient, MorphologyClient,
    NormalizationClient, PreprocessingClient, SimpleAnalysisClient,
};

#[derive(Clone, Debug)]
struct RecordedCall {
    path: &'static str,
    body: Bytes,
    metadata: MetadataMap,
    options: CallOptions,
}

type Responder = dyn Fn(&'static str) -> Result<Bytes, Status> + Send + Sync;

#[derive(Clone)]
struct RecordingDispatcher {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    responder: Arc<Responder>,
    delay: Option<Duration>,
}

impl RecordingDispatcher {
    fn replying<F>(responder: F) -> Self
    where
        F: Fn(&'static str) -> Result<Bytes, Status> + Send + Sync + 'static,
    {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            responder: Arc::new(responder),
            delay: None,
        }
    }

    fn with_message<M: Message>(response: M) -> Self {
        let bytes = Bytes::from(response.encode_to_vec());
        Self::replying(move |_| Ok(bytes.clone()))
    }

    fn empty() -> Self {
        Self::replying(|_| Ok(Bytes::new()))
    }

    fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn only_call(&self) -> RecordedCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {:?}", calls);
        calls.into_iter().next().unwrap()
    }
}

#[async_trait]
impl Dispatcher for RecordingDispatcher {
    async fn unary(
        &self,
        path: &'static str,
        body: Bytes,
        metadata: MetadataMap,
        options: CallOptions,
    ) -> Result<Bytes, Status> {
        self.calls.lock().unwrap().push(RecordedCall {
            path,
            body,
            metadata,
            options,
        });
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        (self.responder)(path)
    }
}

#[tokio::test]
async fn detect_sends_one_call_to_its_path() {
    let dispatcher = RecordingDispatcher::with_message(LanguageIdResponse {
        lang_id: "tr".to_owned(),
    });
    let client = LanguageIdClient::with_dispatcher(dispatcher.clone());

    let response = client
        .detect(LanguageIdRequest::new("Merhaba Dünya!\n"))
        .await
        .into_result()
        .unwrap();
    assert_eq!(response.lang_id, "tr");

    let call = dispatcher.only_call();
    assert_eq!(call.path, "/zemberek.langid.LanguageIdService/Detect");
    let sent = LanguageIdRequest::decode(call.body).unwrap();
    assert_eq!(sent.input, "Merhaba Dünya!\n");
}

#[tokio::test]
async fn every_language_id_method_has_its_own_path() {
    let dispatcher = RecordingDispatcher::empty();
    let client = LanguageIdClient::with_dispatcher(dispatcher.clone());
    let request = || LanguageIdRequest::new("hello").with_max_sample_count(50);

    assert!(client.detect_fast(request()).await.is_ok());
    assert!(client.get_scores(request()).await.is_ok());
    assert!(client.get_scores_fast(request()).await.is_ok());

    let paths = dispatcher.calls().iter().map(|c| c.path).collect::<Vec<_>>();
    assert_eq!(
        paths,
        vec![
            "/zemberek.langid.LanguageIdService/DetectFast",
            "/zemberek.langid.LanguageIdService/GetScores",
            "/zemberek.langid.LanguageIdService/GetScoresFast",
        ]
    );
    for call in dispatcher.calls() {
        assert_eq!(LanguageIdRequest::decode(call.body).unwrap().max_sample_count, 50);
    }
}

#[tokio::test]
async fn turkish_group_methods_have_their_own_paths() {
    let dispatcher = RecordingDispatcher::empty();
    let client = LanguageIdClient::with_dispatcher(dispatcher.clone());
    let request = || LanguageIdRequest::new("Merhaba");

    assert!(client.detect_tr(request()).await.is_ok());
    assert!(client.detect_fast_tr(request()).await.is_ok());
    assert!(client.get_scores_tr(request()).await.is_ok());
    assert!(client.get_scores_fast_tr(request()).await.is_ok());

    let paths = dispatcher.calls().iter().map(|c| c.path).collect::<Vec<_>>();
    assert_eq!(
        paths,
        vec![
            "/zemberek.langid.LanguageIdService/DetectTr",
            "/zemberek.langid.LanguageIdService/DetectFastTr",
            "/zemberek.langid.LanguageIdService/GetScoresTr",
            "/zemberek.langid.LanguageIdService/GetScoresFastTr",
        ]
    );
}

#[tokio::test]
async fn morphology_service_returns_morphemes() {
    let dispatcher = RecordingDispatcher::with_message(WordAnalysis {
        input: "kavanozun".to_owned(),
        analyses: vec![SingleAnalysis {
            analysis: "[kavanoz:Noun] kavanoz:Noun+A3sg+un:Gen".to_owned(),
            morphemes: vec![
                MorphemeData {
                    morpheme: "Noun".to_owned(),
                    surface: "kavanoz".to_owned(),
                },
                MorphemeData {
                    morpheme: "Gen".to_owned(),
                    surface: "un".to_owned(),
                },
            ],
            ..Default::default()
        }],
    });
    let client = MorphologyClient::with_dispatcher(dispatcher.clone());

    let analysis = client
        .analyze_word(WordRequest::new("kavanozun"))
        .await
        .into_result()
        .unwrap();
    assert_eq!(analysis.analyses[0].segmentation().as_deref(), Some("kavanoz-un"));
    assert_eq!(
        dispatcher.only_call().path,
        "/zemberek.morphology.MorphologyService/AnalyzeWord"
    );

    let sentence = MorphologyClient::with_dispatcher(RecordingDispatcher::empty());
    let reply = sentence
        .analyze_sentence(SentenceRequest::new("kavanozun kapağını").with_all_analyses())
        .await;
    assert!(reply.is_ok());
}

#[tokio::test]
async fn normalized_input_is_passed_through_unmodified() {
    let dispatcher = RecordingDispatcher::with_message(NormalizationResponse {
        normalized_input: "merhaba dünya".to_owned(),
        error: String::new(),
    });
    let client = NormalizationClient::with_dispatcher(dispatcher.clone());

    let response = client
        .normalize(NormalizationRequest::new("Mrhaba dnya"))
        .await
        .into_result()
        .unwrap();
    assert_eq!(response.normalized_input, "merhaba dünya");
    assert_ne!(response.normalized_input, "Mrhaba dnya");
    assert_eq!(
        dispatcher.only_call().path,
        "/zemberek.normalization.NormalizationService/Normalize"
    );
}

#[tokio::test]
async fn preprocessing_methods() {
    let dispatcher = RecordingDispatcher::replying(|path| {
        let bytes = if path.ends_with("/Tokenize") {
            TokenizationResponse {
                tokens: vec![TokenProto {
                    token: "Merhaba".to_owned(),
                    r#type: "Word".to_owned(),
                    start: 0,
                    end: 6,
                }],
            }
            .encode_to_vec()
        } else {
            SentenceExtractionResponse {
                sentences: vec!["Merhaba.".to_owned(), "Nasılsın?".to_owned()],
            }
            .encode_to_vec()
        };
        Ok(Bytes::from(bytes))
    });
    let client = PreprocessingClient::with_dispatcher(dispatcher.clone());

    let tokens = client
        .tokenize(TokenizationRequest::new("Merhaba").with_boundaries())
        .await
        .into_result()
        .unwrap();
    assert_eq!(tokens.tokens[0].r#type, "Word");

    let sentences = client
        .extract_sentences(SentenceExtractionRequest::new("Merhaba. Nasılsın?"))
        .await
        .into_result()
        .unwrap();
    assert_eq!(sentences.sentences.len(), 2);

    let calls = dispatcher.calls();
    assert_eq!(calls[0].path, "/zemberek.preprocessor.PreprocessingService/Tokenize");
    assert!(TokenizationRequest::decode(calls[0].body.clone()).unwrap().include_token_boundaries);
    assert_eq!(calls[1].path, "/zemberek.preprocessor.PreprocessingService/ExtractSentences");
    assert_eq!(
        SentenceExtractionRequest::decode(calls[1].body.clone()).unwrap().document,
        "Merhaba. Nasılsın?"
    );
}

#[tokio::test]
async fn sentence_analysis_yields_one_line_per_token() {
    let sentence = "kavanozun kapağını açtır demiştim sana.";
    let lemmas: [(&str, &[&str]); 6] = [
        ("kavanozun", &["kavanoz"]),
        ("kapağını", &["kapak"]),
        ("açtır", &["aç", "açtır"]),
        ("demiştim", &["de", "demek"]),
        ("sana", &["sen"]),
        (".", &["."]),
    ];
    let response = SentenceAnalysis {
        input: sentence.to_owned(),
        results: lemmas
            .iter()
            .map(|(token, lemmas)| SentenceWordAnalysis {
                token: token.to_string(),
                best: Some(SingleAnalysis {
                    lemmas: lemmas.iter().map(|l| l.to_string()).collect(),
                    ..Default::default()
                }),
                all: None,
            })
            .collect(),
    };
    let dispatcher = RecordingDispatcher::with_message(response);
    let client = SimpleAnalysisClient::with_dispatcher(dispatcher.clone());

    let analysis = client
        .analyze_sentence(SentenceRequest::new(sentence))
        .await
        .into_result()
        .unwrap();
    assert_eq!(analysis.results.len(), 6);
    assert_eq!(analysis.describe_lines()[2], "açtır -> aç açtır");
    assert_eq!(
        dispatcher.only_call().path,
        "/zemberek.simple_analysis.SimpleAnalysisService/AnalyzeSentence"
    );
}

#[tokio::test]
async fn analyze_word_path() {
    let dispatcher = RecordingDispatcher::empty();
    let client = SimpleAnalysisClient::with_dispatcher(dispatcher.clone());
    let analysis = client
        .analyze_word(WordRequest::new("kavanozun"))
        .await
        .into_result()
        .unwrap();
    assert!(analysis.analyses.is_empty());
    assert_eq!(
        dispatcher.only_call().path,
        "/zemberek.simple_analysis.SimpleAnalysisService/AnalyzeWord"
    );
}

#[tokio::test]
async fn metadata_and_timeout_are_forwarded() {
    let dispatcher = RecordingDispatcher::empty();
    let client = NormalizationClient::with_dispatcher(dispatcher.clone());
    let params = CallParams::new()
        .with_metadata("x-request-id", "abc-123".parse().unwrap())
        .with_timeout(Duration::from_secs(2));

    let reply = client
        .normalize_with(NormalizationRequest::new("slm"), params)
        .wait(None)
        .await;
    assert!(reply.is_ok());

    let call = dispatcher.only_call();
    assert_eq!(call.metadata.get("x-request-id").unwrap(), "abc-123");
    assert_eq!(call.options.timeout, Some(Duration::from_secs(2)));
}

#[tokio::test]
async fn server_status_is_surfaced() {
    let dispatcher =
        RecordingDispatcher::replying(|_| Err(Status::invalid_argument("empty input")));
    let client = LanguageIdClient::with_dispatcher(dispatcher);

    let reply = client.detect(LanguageIdRequest::new("")).await;
    assert!(!reply.is_ok());
    assert_eq!(reply.status().code, Code::InvalidArgument);
    match reply.into_result() {
        Err(CallError::Status(status)) => assert_eq!(status.message, "empty input"),
        other => panic!("unexpected result {:?}", other),
    }
}

#[tokio::test]
async fn transport_failure_is_distinct_from_server_status() {
    let dispatcher =
        RecordingDispatcher::replying(|_| Err(Status::unavailable("connection refused")));
    let client = LanguageIdClient::with_dispatcher(dispatcher);

    let (response, status) = client.detect(LanguageIdRequest::new("hi")).await.into_parts();
    assert!(response.is_none());
    assert_eq!(status.code, Code::Unavailable);
}

#[tokio::test]
async fn undecodable_response_is_a_decode_error() {
    let dispatcher = RecordingDispatcher::replying(|_| Ok(Bytes::from_static(&[0xff, 0xff])));
    let client = LanguageIdClient::with_dispatcher(dispatcher);

    let reply = client.detect(LanguageIdRequest::new("hi")).await;
    assert!(matches!(reply.into_result(), Err(CallError::Decode(_))));
}

#[tokio::test]
async fn slow_call_times_out_while_waiting() {
    let mut dispatcher = RecordingDispatcher::empty();
    dispatcher.delay = Some(Duration::from_secs(30));
    let client = LanguageIdClient::with_dispatcher(dispatcher);

    let pending = client.detect(LanguageIdRequest::new("hi"));
    assert!(!pending.is_finished());
    let reply = pending.wait(Some(Duration::from_millis(50))).await;
    assert_eq!(reply.status().code, Code::DeadlineExceeded);
}

#[tokio::test]
async fn server_cancellation_keeps_its_message() {
    let dispatcher = RecordingDispatcher::replying(|_| Err(Status::cancelled("shutting down")));
    let client = LanguageIdClient::with_dispatcher(dispatcher);

    let status = client.detect(LanguageIdRequest::new("hi")).await.status();
    assert_eq!(status.code, Code::Cancelled);
    assert_eq!(status.message, "shutting down");
}
