use std::time::Duration;

use bytes::Bytes;
use prost::Message;
use tonic::metadata::{AsciiMetadataValue, MetadataMap};
use tracing::{trace, warn};

use crate::call::PendingCall;
use crate::descriptor::{MethodDescriptor, ServiceDescriptor};
use crate::dispatch::{CallOptions, Dispatcher, GrpcDispatcher};
use crate::error::CallError;

/// Metadata and options attached to a single call.
#[derive(Clone, Debug, Default)]
pub struct CallParams {
    pub metadata: MetadataMap,
    pub options: CallOptions,
}

impl CallParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metadata(mut self, key: &'static str, value: AsciiMetadataValue) -> Self {
        self.metadata.append(key, value);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options = self.options.timeout(timeout);
        self
    }
}

/// Client side of one remote service. Each call encodes the request, hands it
/// to the dispatcher under the method's path and decodes the declared response.
#[derive(Clone, Debug)]
pub struct Stub<D = GrpcDispatcher> {
    service: ServiceDescriptor,
    dispatcher: D,
}

impl<D> Stub<D>
where
    D: Dispatcher,
{
    pub fn new(service: ServiceDescriptor, dispatcher: D) -> Self {
        Self {
            service,
            dispatcher,
        }
    }

    pub fn service(&self) -> &ServiceDescriptor {
        &self.service
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    pub fn invoke<Req, Res>(
        &self,
        method: &MethodDescriptor<Req, Res>,
        request: Req,
        params: CallParams,
    ) -> PendingCall<Res>
    where
        Req: Message,
        Res: Message + Default + Send + 'static,
    {
        debug_assert!(
            method.service() == self.service.name && self.service.has_method(method.method()),
            "{} is not a method of {}",
            method.path(),
            self.service.name
        );

        let path = method.path();
        let body = Bytes::from(request.encode_to_vec());
        let dispatcher = self.dispatcher.clone();

        PendingCall::spawn(async move {
            let response = dispatcher
                .unary(path, body, params.metadata, params.options)
                .await
                .map_err(|status| {
                    warn!(path, code = ?status.code(), message = status.message(), "call failed");
                    CallError::from(status)
                })?;
            trace!(path, len = response.len(), "decoding response");
            Res::decode(response).map_err(|err| {
                warn!(path, %err, "undecodable response");
                CallError::from(err)
            })
        })
    }
}
