use crate::call::PendingCall;
use crate::client::{ClientBuilder, Connection};
use crate::descriptor::{method, MethodDescriptor, ServiceDescriptor};
use crate::dispatch::{Dispatcher, GrpcDispatcher};
use crate::error::ConnectionResult;
use crate::proto::{SentenceAnalysis, SentenceRequest, WordAnalysis, WordRequest};
use crate::stub::{CallParams, Stub};

pub const SERVICE: ServiceDescriptor = ServiceDescriptor {
    name: "zemberek.morphology.MorphologyService",
    methods: &["AnalyzeSentence", "AnalyzeWord"],
};

pub const ANALYZE_SENTENCE: MethodDescriptor<SentenceRequest, SentenceAnalysis> =
    method!("zemberek.morphology.MorphologyService", "AnalyzeSentence");

pub const ANALYZE_WORD: MethodDescriptor<WordRequest, WordAnalysis> =
    method!("zemberek.morphology.MorphologyService", "AnalyzeWord");

/// The full morphology service. Same messages as [`SimpleAnalysisClient`], but
/// every analysis also carries its morphemes and their surface forms.
///
/// [`SimpleAnalysisClient`]: super::SimpleAnalysisClient
#[derive(Clone, Debug)]
pub struct MorphologyClient<D = GrpcDispatcher> {
    stub: Stub<D>,
}

impl MorphologyClient<GrpcDispatcher> {
    pub fn new(connection: &Connection) -> Self {
        Self::with_dispatcher(connection.dispatcher())
    }

    pub fn connect(builder: ClientBuilder) -> ConnectionResult<Self> {
        Ok(Self::new(&builder.connect()?))
    }
}

impl<D: Dispatcher> MorphologyClient<D> {
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
