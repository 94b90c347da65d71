use crate::call::PendingCall;
use crate::client::{ClientBuilder, Connection};
use crate::descriptor::{method, MethodDescriptor, ServiceDescriptor};
use crate::dispatch::{Dispatcher, GrpcDispatcher};
use crate::error::ConnectionResult;
use crate::proto::{LanguageIdRequest, LanguageIdResponse, LanguageIdScoresResponse};
use crate::stub::{CallParams, Stub};

pub const SERVICE: ServiceDescriptor = ServiceDescriptor {
    name: "zemberek.langid.LanguageIdService",
    methods: &[
        "Detect",
        "DetectFast",
        "GetScores",
        "GetScoresFast",
        "DetectTr",
        "DetectFastTr",
        "GetScoresTr",
        "GetScoresFastTr",
    ],
};

pub const DETECT: MethodDescriptor<LanguageIdRequest, LanguageIdResponse> =
    method!("zemberek.langid.LanguageIdService", "Detect");

pub const DETECT_FAST: MethodDescriptor<LanguageIdRequest, LanguageIdResponse> =
    method!("zemberek.langid.LanguageIdService", "DetectFast");

pub const GET_SCORES: MethodDescriptor<LanguageIdRequest, LanguageIdScoresResponse> =
    method!("zemberek.langid.LanguageIdService", "GetScores");

pub const GET_SCORES_FAST: MethodDescriptor<LanguageIdRequest, LanguageIdScoresResponse> =
    method!("zemberek.langid.LanguageIdService", "GetScoresFast");

pub const DETECT_TR: MethodDescriptor<LanguageIdRequest, LanguageIdResponse> =
    method!("zemberek.langid.LanguageIdService", "DetectTr");

pub const DETECT_FAST_TR: MethodDescriptor<LanguageIdRequest, LanguageIdResponse> =
    method!("zemberek.langid.LanguageIdService", "DetectFastTr");

pub const GET_SCORES_TR: MethodDescriptor<LanguageIdRequest, LanguageIdScoresResponse> =
    method!("zemberek.langid.LanguageIdService", "GetScoresTr");

pub const GET_SCORES_FAST_TR: MethodDescriptor<LanguageIdRequest, LanguageIdScoresResponse> =
    method!("zemberek.langid.LanguageIdService", "GetScoresFastTr");

/// Language identification. The fast variants sample less of the input, and
/// the `*_tr` variants only tell Turkish apart from the languages closest to it.
#[derive(Clone, Debug)]
pub struct LanguageIdClient<D = GrpcDispatcher> {
    stub: Stub<D>,
}

impl LanguageIdClient<GrpcDispatcher> {
    pub fn new(connection: &Connection) -> Self {
        Self::with_dispatcher(connection.dispatcher())
    }

    pub fn connect(builder: ClientBuilder) -> ConnectionResult<Self> {
        Ok(Self::new(&builder.connect()?))
    }
}

impl<D: Dispatcher> LanguageIdClient<D> {
    pub fn with_dispatcher(dispatcher: D) -> Self {
        Self {
            stub: Stub::new(SERVICE, dispatcher),
        }
    }

    pub fn detect(&self, request: LanguageIdRequest) -> PendingCall<LanguageIdResponse> {
        self.detect_with(request, CallParams::default())
    }

    pub fn detect_with(
        &self,
        request: LanguageIdRequest,
        params: CallParams,
    ) -> PendingCall<LanguageIdResponse> {
        self.stub.invoke(&DETECT, request, params)
    }

    pub fn detect_fast(&self, request: LanguageIdRequest) -> PendingCall<LanguageIdResponse> {
        self.detect_fast_with(request, CallParams::default())
    }

    pub fn detect_fast_with(
        &self,
        request: LanguageIdRequest,
        params: CallParams,
    ) -> PendingCall<LanguageIdResponse> {
        self.stub.invoke(&DETECT_FAST, request, params)
    }

    pub fn get_scores(&self, request: LanguageIdRequest) -> PendingCall<LanguageIdScoresResponse> {
        self.get_scores_with(request, CallParams::default())
    }

    pub fn get_scores_with(
        &self,
        request: LanguageIdRequest,
        params: CallParams,
    ) -> PendingCall<LanguageIdScoresResponse> {
        self.stub.invoke(&GET_SCORES, request, params)
    }

    pub fn get_scores_fast(
        &self,
        request: LanguageIdRequest,
    ) -> PendingCall<LanguageIdScoresResponse> {
        self.get_scores_fast_with(request, CallParams::default())
    }

    pub fn get_scores_fast_with(
        &self,
        request: LanguageIdRequest,
        params: CallParams,
    ) -> PendingCall<LanguageIdScoresResponse> {
        self.stub.invoke(&GET_SCORES_FAST, request, params)
    }

    pub fn detect_tr(&self, request: LanguageIdRequest) -> PendingCall<LanguageIdResponse> {
        self.detect_tr_with(request, CallParams::default())
    }

    pub fn detect_tr_with(
        &self,
        request: LanguageIdRequest,
        params: CallParams,
    ) -> PendingCall<LanguageIdResponse> {
        self.stub.invoke(&DETECT_TR, request, params)
    }

    pub fn detect_fast_tr(&self, request: LanguageIdRequest) -> PendingCall<LanguageIdResponse> {
        self.detect_fast_tr_with(request, CallParams::default())
    }

    pub fn detect_fast_tr_with(
        &self,
        request: LanguageIdRequest,
        params: CallParams,
    ) -> PendingCall<LanguageIdResponse> {
        self.stub.invoke(&DETECT_FAST_TR, request, params)
    }

    pub fn get_scores_tr(
        &self,
        request: LanguageIdRequest,
    ) -> PendingCall<LanguageIdScoresResponse> {
        self.get_scores_tr_with(request, CallParams::default())
    }

    pub fn get_scores_tr_with(
        &self,
        request: LanguageIdRequest,
        params: CallParams,
    ) -> PendingCall<LanguageIdScoresResponse> {
        self.stub.invoke(&GET_SCORES_TR, request, params)
    }

    pub fn get_scores_fast_tr(
        &self,
        request: LanguageIdRequest,
    ) -> PendingCall<LanguageIdScoresResponse> {
        self.get_scores_fast_tr_with(request, CallParams::default())
    }

    pub fn get_scores_fast_tr_with(
        &self,
        request: LanguageIdRequest,
        params: CallParams,
    ) -> PendingCall<LanguageIdScoresResponse> {
        self.stub.invoke(&GET_SCORES_FAST_TR, request, params)
    }
}
