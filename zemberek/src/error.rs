use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tonic::Code;

pub type ConnectionResult<T> = Result<T, ConnectionError>;

#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("invalid URI: {0}")]
    InvalidUri(String),
    #[error("failed to read CA certificate {}: {source}", .path.display())]
    Certificate {
        path: PathBuf,
        source: io::Error,
    },
    #[error(transparent)]
    Tonic(#[from] tonic::transport::Error),
}

/// Code and message of a finished call, as reported by the transport or the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallStatus {
    pub code: Code,
    pub message: String,
}

impl CallStatus {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn ok() -> Self {
        Self::new(Code::Ok, "")
    }

    pub fn is_ok(&self) -> bool {
        self.code == Code::Ok
    }
}

impl Display for CallStatus {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        if self.message.is_empty() {
            write!(fmt, "{:?}", self.code)
        } else {
            write!(fmt, "{:?}: {}", self.code, self.message)
        }
    }
}

impl From<&tonic::Status> for CallStatus {
    fn from(status: &tonic::Status) -> Self {
        Self::new(status.code(), status.message())
    }
}

pub type CallResult<T> = Result<T, CallError>;

#[derive(Debug, Error)]
pub enum CallError {
    /// The request never reached the server or the connection broke mid-call.
    #[error("transport failure ({0})")]
    Transport(CallStatus),
    #[error("deadline exceeded ({0})")]
    DeadlineExceeded(CallStatus),
    /// The server answered with a non-OK status.
    #[error("server returned {0}")]
    Status(CallStatus),
    #[error("failed to decode response: {0}")]
    Decode(#[from] prost::DecodeError),
    #[error("call was cancelled before it completed ({0})")]
    Cancelled(CallStatus),
}

impl CallError {
    pub fn status(&self) -> CallStatus {
        match self {
            CallError::Transport(status)
            | CallError::DeadlineExceeded(status)
            | CallError::Status(status)
            | CallError::Cancelled(status) => status.clone(),
            CallError::Decode(err) => CallStatus::new(Code::Internal, err.to_string()),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, CallError::Transport(_))
    }
}

impl From<tonic::Status> for CallError {
    fn from(status: tonic::Status) -> Self {
        let call_status = CallStatus::from(&status);
        match status.code() {
            Code::Unavailable => CallError::Transport(call_status),
            Code::DeadlineExceeded => CallError::DeadlineExceeded(call_status),
            // tonic's own timeout layer reports an expired grpc-timeout as a cancellation
            Code::Cancelled if timed_out(&status) => CallError::DeadlineExceeded(
                CallStatus::new(Code::DeadlineExceeded, status.message()),
            ),
            Code::Cancelled => CallError::Cancelled(call_status),
            Code::Unknown if caused_by_transport(&status) => CallError::Transport(call_status),
            _ => CallError::Status(call_status),
        }
    }
}

fn timed_out(status: &tonic::Status) -> bool {
    if status.message() == tonic::TimeoutExpired(()).to_string() {
        return true;
    }
    source_chain_contains::<tonic::TimeoutExpired>(status)
}

fn caused_by_transport(status: &tonic::Status) -> bool {
    if status.message() == "transport error" {
        return true;
    }
    source_chain_contains::<tonic::transport::Error>(status)
}

fn source_chain_contains<E: StdError + 'static>(status: &tonic::Status) -> bool {
    let mut source = status.source();
    while let Some(err) = source {
        if err.is::<E>() {
            return true;
        }
        source = err.source();
    }
    false
}
