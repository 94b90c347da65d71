use crate::call::PendingCall;
use crate::client::{ClientBuilder, Connection};
use crate::descriptor::{method, MethodDescriptor, ServiceDescriptor};
use crate::dispatch::{Dispatcher, GrpcDispatcher};
use crate::error::ConnectionResult;
use crate::proto::{SentenceAnalysis, SentenceRequest, WordAnalysis, WordRequest};
use crate::stub::{CallParams, Stub};

pub const SERVICE: ServiceDescriptor = ServiceDescriptor {
    name: "zemberek.simple_analysis.SimpleAnalysisService",
    methods: &["AnalyzeSentence", "AnalyzeWord"],
};

pub const ANALYZE_SENTENCE: MethodDescriptor<SentenceRequest, SentenceAnalysis> =
    method!("zemberek.simple_analysis.SimpleAnalysisService", "AnalyzeSentence");

pub const ANALYZE_WORD: MethodDescriptor<WordRequest, WordAnalysis> =
    method!("zemberek.simple_analysis.SimpleAnalysisService", "AnalyzeWord");

/// Morphological analysis. Sentences come back disambiguated, with the best
/// analysis of every token; words come back with all of their analyses.
#[derive(Clone, Debug)]
pub struct SimpleAnalysisClient<D = GrpcDispatcher> {
    stub: Stub<D>,
}

impl SimpleAnalysisClient<GrpcDispatcher> {
    pub fn new(connection: &Connection) -> Self {
        Self::with_dispatcher(connection.dispatcher())
    }

    pub fn connect(builder: ClientBuilder) -> ConnectionResult<Self> {
        Ok(Self::new(&builder.connect()?))
    }
}

impl<D: Dispatcher> SimpleAnalysisClient<D> {
    pub fn with_dispatcher(dispatcher: D) -> Self {
        Self {
            stub: Stub::new(SERVICE, dispatcher),
        }
    }

    pub fn analyze_sentence(&self, request: SentenceRequest) -> PendingCall<SentenceAnalysis> {
        self.analyze_sentence_with(request, CallParams::default())
    }

    pub fn analyze_sentence_with(
        &self,
        request: SentenceRequest,
        params: CallParams,
    ) -> PendingCall<SentenceAnalysis> {
        self.stub.invoke(&ANALYZE_SENTENCE, request, params)
    }

    pub fn analyze_word(&self, request: WordRequest) -> PendingCall<WordAnalysis> {
        self.analyze_word_with(request, CallParams::default())
    }

    pub fn analyze_word_with(
        &self,
        request: WordRequest,
        params: CallParams,
    ) -> PendingCall<WordAnalysis> {
        self.stub.invoke(&ANALYZE_WORD, request, params)
    }
}
