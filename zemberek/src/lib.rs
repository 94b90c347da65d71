pub mod call;
pub mod client;
pub mod descriptor;
pub mod dispatch;
pub mod error;
pub mod proto;
pub mod services;
pub mod stub;
mod format;

pub use call::{PendingCall, Reply};
pub use client::{ClientBuilder, Connection, Credentials, TlsOptions};
pub use dispatch::{CallOptions, Dispatcher, GrpcDispatcher};
pub use error::{CallError, CallStatus, ConnectionError};
pub use services::{
    LanguageIdClient, MorphologyClient, NormalizationClient, PreprocessingClient,
    SimpleAnalysisClient,
};
pub use stub::{CallParams, Stub};

// Re-exported so callers can build metadata and inspect codes without a direct dependency.
pub use tonic::metadata;
pub use tonic::Code;
