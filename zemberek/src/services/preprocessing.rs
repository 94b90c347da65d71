use crate::call::PendingCall;
use crate::client::{ClientBuilder, Connection};
use crate::descriptor::{method, MethodDescriptor, ServiceDescriptor};
use crate::dispatch::{Dispatcher, GrpcDispatcher};
use crate::error::ConnectionResult;
use crate::proto::{
    SentenceExtractionRequest, SentenceExtractionResponse, TokenizationRequest,
    TokenizationResponse,
};
use crate::stub::{CallParams, Stub};

pub const SERVICE: ServiceDescriptor = ServiceDescriptor {
    name: "zemberek.preprocessor.PreprocessingService",
    methods: &["Tokenize", "ExtractSentences"],
};

pub const TOKENIZE: MethodDescriptor<TokenizationRequest, TokenizationResponse> =
    method!("zemberek.preprocessor.PreprocessingService", "Tokenize");

pub const EXTRACT_SENTENCES: MethodDescriptor<
    SentenceExtractionRequest,
    SentenceExtractionResponse,
> = method!("zemberek.preprocessor.PreprocessingService", "ExtractSentences");

#[derive(Clone, Debug)]
pub struct PreprocessingClient<D = GrpcDispatcher> {
    stub: Stub<D>,
}

impl PreprocessingClient<GrpcDispatcher> {
    pub fn new(connection: &Connection) -> Self {
        Self::with_dispatcher(connection.dispatcher())
    }

    pub fn connect(builder: ClientBuilder) -> ConnectionResult<Self> {
        Ok(Self::new(&builder.connect()?))
    }
}

impl<D: Dispatcher> PreprocessingClient<D> {
    pub fn with_dispatcher(dispatcher: D) -> Self {
        Self {
            stub: Stub::new(SERVICE, dispatcher),
        }
    }

    pub fn tokenize(&self, request: TokenizationRequest) -> PendingCall<TokenizationResponse> {
        self.tokenize_with(request, CallParams::default())
    }

    pub fn tokenize_with(
        &self,
        request: TokenizationRequest,
        params: CallParams,
    ) -> PendingCall<TokenizationResponse> {
        self.stub.invoke(&TOKENIZE, request, params)
    }

    pub fn extract_sentences(
        &self,
        request: SentenceExtractionRequest,
    ) -> PendingCall<SentenceExtractionResponse> {
        self.extract_sentences_with(request, CallParams::default())
    }

    pub fn extract_sentences_with(
        &self,
        request: SentenceExtractionRequest,
        params: CallParams,
    ) -> PendingCall<SentenceExtractionResponse> {
        self.stub.invoke(&EXTRACT_SENTENCES, request, params)
    }
}
