use std::time::Duration;

use async_trait::async_trait;
use bytes::{Buf, BufMut, Bytes};
use tonic::client::Grpc;
use tonic::codec::{Codec, DecodeBuf, Decoder, EncodeBuf, Encoder};
use tonic::codegen::http::uri::PathAndQuery;
use tonic::metadata::MetadataMap;
use tonic::transport::Channel;
use tonic::{Request, Status};
use tracing::debug;

use crate::client::non_zero;

/// Per-call options. A `None` timeout falls back to the connection's request timeout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallOptions {
    pub timeout: Option<Duration>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// A zero timeout leaves the call bounded by the connection's timeout, if any.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = non_zero(timeout);
        self
    }
}

/// Performs one unary call: encoded request bytes in, encoded response bytes out.
#[async_trait]
pub trait Dispatcher: Clone + Send + Sync + 'static {
    async fn unary(
        &self,
        path: &'static str,
        body: Bytes,
        metadata: MetadataMap,
        options: CallOptions,
    ) -> Result<Bytes, Status>;
}

#[derive(Clone, Debug)]
pub struct GrpcDispatcher {
    grpc: Grpc<Channel>,
    request_timeout: Option<Duration>,
}

impl GrpcDispatcher {
    pub fn new(channel: Channel, request_timeout: Option<Duration>) -> Self {
        Self {
            grpc: Grpc::new(channel),
            request_timeout: request_timeout.and_then(non_zero),
        }
    }
}

#[async_trait]
impl Dispatcher for GrpcDispatcher {
    async fn unary(
        &self,
        path: &'static str,
        body: Bytes,
        metadata: MetadataMap,
        options: CallOptions,
    ) -> Result<Bytes, Status> {
        let mut grpc = self.grpc.clone();
        grpc.ready()
            .await
            .map_err(|err| Status::unavailable(format!("service was not ready: {}", err)))?;

        let timeout = options.timeout.and_then(non_zero).or(self.request_timeout);
        let mut request = Request::new(body);
        *request.metadata_mut() = metadata;
        if let Some(timeout) = timeout {
            request.set_timeout(timeout);
        }

        debug!(path, ?timeout, "dispatching unary call");

        let call = grpc.unary(request, PathAndQuery::from_static(path), RawCodec);
        let response = match timeout {
            // grpc-timeout is only advisory for the server, so enforce it locally as well
            Some(timeout) => tokio::time::timeout(timeout, call)
                .await
                .map_err(|_| {
                    Status::deadline_exceeded(format!("no response within {:?}", timeout))
                })??,
            None => call.await?,
        };

        Ok(response.into_inner())
    }
}

/// Passes message bodies through untouched; stubs do their own prost encoding.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawCodec;

impl Codec for RawCodec {
    type Encode = Bytes;
    type Decode = Bytes;
    type Encoder = RawCodec;
    type Decoder = RawCodec;

    fn encoder(&mut self) -> Self::Encoder {
        RawCodec
    }

    fn decoder(&mut self) -> Self::Decoder {
        RawCodec
    }
}

impl Encoder for RawCodec {
    type Item = Bytes;
    type Error = Status;

    fn encode(&mut self, item: Bytes, dst: &mut EncodeBuf<'_>) -> Result<(), Status> {
        dst.put(item);
        Ok(())
    }
}

impl Decoder for RawCodec {
    type Item = Bytes;
    type Error = Status;

    fn decode(&mut self, src: &mut DecodeBuf<'_>) -> Result<Option<Bytes>, Status> {
        Ok(Some(src.copy_to_bytes(src.remaining())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_builder() {
        assert_eq!(CallOptions::new().timeout, None);
        let options = CallOptions::new().timeout(Duration::from_millis(250));
        assert_eq!(options.timeout, Some(Duration::from_millis(250)));
    }

    #[test]
    fn zero_call_timeout_is_unset() {
        let options = CallOptions::new().timeout(Duration::ZERO);
        assert_eq!(options.timeout, None);
    }
}
