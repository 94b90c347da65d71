use crate::call::PendingCall;
use crate::client::{ClientBuilder, Connection};
use crate::descriptor::{method, MethodDescriptor, ServiceDescriptor};
use crate::dispatch::{Dispatcher, GrpcDispatcher};
use crate::error::ConnectionResult;
use crate::proto::{NormalizationRequest, NormalizationResponse};
use crate::stub::{CallParams, Stub};

pub const SERVICE: ServiceDescriptor = ServiceDescriptor {
    name: "zemberek.normalization.NormalizationService",
    methods: &["Normalize"],
};

pub const NORMALIZE: MethodDescriptor<NormalizationRequest, NormalizationResponse> =
    method!("zemberek.normalization.NormalizationService", "Normalize");

/// Noisy text normalization.
#[derive(Clone, Debug)]
pub struct NormalizationClient<D = GrpcDispatcher> {
    stub: Stub<D>,
}

impl NormalizationClient<GrpcDispatcher> {
    pub fn new(connection: &Connection) -> Self {
        Self::with_dispatcher(connection.dispatcher())
    }

    pub fn connect(builder: ClientBuilder) -> ConnectionResult<Self> {
        Ok(Self::new(&builder.connect()?))
    }
}

impl<D: Dispatcher> NormalizationClient<D> {
    pub fn with_dispatcher(dispatcher: D) -> Self {
        Self {
            stub: Stub::new(SERVICE, dispatcher),
        }
    }

    pub fn normalize(&self, request: NormalizationRequest) -> PendingCall<NormalizationResponse> {
        self.normalize_with(request, CallParams::default())
    }

    pub fn normalize_with(
        &self,
        request: NormalizationRequest,
        params: CallParams,
    ) -> PendingCall<NormalizationResponse> {
        self.stub.invoke(&NORMALIZE, request, params)
    }
}
