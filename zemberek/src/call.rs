use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use tokio::task::{JoinError, JoinHandle};
use tonic::Code;

use crate::error::{CallError, CallResult, CallStatus};

/// A call that has already been sent.
///
/// Await it (or attach it to any other future) to get the [`Reply`], or use
/// [`PendingCall::wait`] to bound how long to wait. Dropping the handle does
/// not cancel the call.
#[must_use = "the reply of a pending call should be checked"]
#[derive(Debug)]
pub struct PendingCall<T> {
    handle: JoinHandle<CallResult<T>>,
}

impl<T> PendingCall<T>
where
    T: Send + 'static,
{
    pub(crate) fn spawn<F>(call: F) -> Self
    where
        F: Future<Output = CallResult<T>> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(call),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the reply. If `timeout` elapses first the call is aborted and the
    /// reply carries a `DeadlineExceeded` status.
    pub async fn wait(self, timeout: Option<Duration>) -> Reply<T> {
        let limit = match timeout {
            Some(limit) => limit,
            None => return self.await,
        };

        let abort = self.handle.abort_handle();
        match tokio::time::timeout(limit, self).await {
            Ok(reply) => reply,
            Err(_) => {
                abort.abort();
                Reply::from(CallError::DeadlineExceeded(CallStatus::new(
                    Code::DeadlineExceeded,
                    format!("no reply within {:?}", limit),
                )))
            }
        }
    }
}

impl<T> Future for PendingCall<T> {
    type Output = Reply<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Reply<T>> {
        Pin::new(&mut self.handle).poll(cx).map(Reply::from_joined)
    }
}

/// The outcome of a finished call: a response, or the reason there is none.
///
/// The response is only reachable through methods that look at the status first.
#[must_use = "a reply's status should be checked before its response is used"]
#[derive(Debug)]
pub struct Reply<T> {
    result: CallResult<T>,
}

impl<T> Reply<T> {
    fn from_joined(joined: Result<CallResult<T>, JoinError>) -> Self {
        match joined {
            Ok(result) => Self { result },
            Err(err) if err.is_cancelled() => Self::from(CallError::Cancelled(CallStatus::new(
                Code::Cancelled,
                "call task was aborted",
            ))),
            Err(_) => Self::from(CallError::Status(CallStatus::new(
                Code::Internal,
                "call task panicked",
            ))),
        }
    }

    pub fn status(&self) -> CallStatus {
        match &self.result {
            Ok(_) => CallStatus::ok(),
            Err(err) => err.status(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn into_result(self) -> CallResult<T> {
        self.result
    }

    pub fn ok(self) -> Option<T> {
        self.result.ok()
    }

    /// The response (if any) alongside the call status.
    pub fn into_parts(self) -> (Option<T>, CallStatus) {
        let status = self.status();
        (self.result.ok(), status)
    }
}

impl<T> From<CallError> for Reply<T> {
    fn from(err: CallError) -> Self {
        Self { result: Err(err) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn completed_call_yields_its_response() {
        let call = PendingCall::spawn(async { Ok::<_, CallError>(42u32) });
        let reply = call.await;
        assert!(reply.is_ok());
        assert_eq!(reply.status(), CallStatus::ok());
        assert_eq!(reply.ok(), Some(42));
    }

    #[tokio::test]
    async fn failed_call_has_no_response() {
        let call = PendingCall::<u32>::spawn(async {
            Err(CallError::Status(CallStatus::new(Code::NotFound, "missing")))
        });
        let (response, status) = call.wait(None).await.into_parts();
        assert_eq!(response, None);
        assert_eq!(status.code, Code::NotFound);
    }

    #[tokio::test]
    async fn wait_gives_up_after_timeout() {
        let call = PendingCall::spawn(async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok::<_, CallError>(())
        });
        let reply = call.wait(Some(Duration::from_millis(20))).await;
        match reply.into_result() {
            Err(CallError::DeadlineExceeded(status)) => {
                assert_eq!(status.code, Code::DeadlineExceeded)
            }
            other => panic!("unexpected result {:?}", other),
        }
    }
}
