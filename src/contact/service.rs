use std::future::Future;
use std::rc::Rc;

use futures::future::{self, Either, FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{error, info};
use serde::Deserialize;
use thiserror::Error;
use web_sys::AbortController;

use super::ContactMessage;
use crate::config::{self, ContactMode};

/// Receipt from the collaborator that accepted the message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("network error: {0}")]
    Network(String),
    #[error("the server took too long to respond")]
    Timeout,
    #[error("server rejected the message ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("server rejected {} field(s)", .fields.len())]
    Invalid { fields: Vec<FieldError> },
    #[error("submission cancelled")]
    Cancelled,
}

/// Whatever actually delivers the contact message. Retrying is its business, not the form's.
pub trait ContactSubmissionService {
    fn send(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<Ack, SubmissionError>>;
}

pub fn service_for(mode: ContactMode) -> Rc<dyn ContactSubmissionService> {
    match mode {
        ContactMode::Simulated => Rc::new(SimulatedContactService::default()),
        ContactMode::Http => Rc::new(HttpContactService::default()),
    }
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
    #[serde(default)]
    fields: Vec<FieldError>,
}

/// Maps a non-2xx reply to an error, preferring per-field errors when the body carries them.
fn error_from_response(status: u16, body: &str) -> SubmissionError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(resp) if !resp.fields.is_empty() => SubmissionError::Invalid {
            fields: resp.fields,
        },
        Ok(resp) => SubmissionError::Rejected {
            status,
            message: resp.error,
        },
        Err(_) => SubmissionError::Rejected {
            status,
            message: if body.trim().is_empty() {
                "no details".to_string()
            } else {
                body.trim().to_string()
            },
        },
    }
}

/// Runs `cancel` if dropped before [`CancelOnDrop::disarm`].
pub(crate) struct CancelOnDrop<F: FnOnce()> {
    cancel: Option<F>,
}

impl<F: FnOnce()> CancelOnDrop<F> {
    pub(crate) fn new(cancel: F) -> Self {
        Self {
            cancel: Some(cancel),
        }
    }

    pub(crate) fn disarm(mut self) {
        self.cancel = None;
    }
}

impl<F: FnOnce()> Drop for CancelOnDrop<F> {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Whichever finishes first wins. A request that loses is dropped.
async fn with_timeout<R, T>(request: R, timeout: T) -> Result<Ack, SubmissionError>
where
    R: Future<Output = Result<Ack, SubmissionError>>,
    T: Future<Output = ()>,
{
    match future::select(Box::pin(request), Box::pin(timeout)).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(SubmissionError::Timeout),
    }
}

pub struct HttpContactService {
    endpoint: String,
    timeout_ms: u32,
}

impl Default for HttpContactService {
    fn default() -> Self {
        Self {
            endpoint: config::contact_endpoint(),
            timeout_ms: config::CONTACT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl HttpContactService {
    /// Dropping this future (cancel or timeout) aborts the browser fetch as well.
    async fn post(endpoint: String, message: ContactMessage) -> Result<Ack, SubmissionError> {
        let controller = AbortController::new()
            .map_err(|e| SubmissionError::Network(format!("{:?}", e)))?;
        let guard = CancelOnDrop::new({
            let controller = controller.clone();
            move || {
                info!("Aborting contact request");
                controller.abort();
            }
        });

        let request = Request::post(&endpoint)
            .abort_signal(Some(&controller.signal()))
            .json(&message)
            .map_err(|e| SubmissionError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        let status = response.status();
        // An empty 2xx body is still a success.
        let body = response.text().await.unwrap_or_default();
        guard.disarm();

        if response.ok() {
            Ok(serde_json::from_str::<Ack>(&body).unwrap_or_default())
        } else {
            Err(error_from_response(status, &body))
        }
    }
}

impl ContactSubmissionService for HttpContactService {
    fn send(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<Ack, SubmissionError>> {
        let endpoint = self.endpoint.clone();
        let timeout_ms = self.timeout_ms;
        async move {
            info!("Posting contact message to {}", endpoint);
            let result =
                with_timeout(Self::post(endpoint, message), TimeoutFuture::new(timeout_ms)).await;
            if let Err(e) = &result {
                error!("Contact message not delivered: {}", e);
            }
            result
        }
        .boxed_local()
    }
}

/// Logs the message and reports success after a cosmetic delay.
pub struct SimulatedContactService {
    delay_ms: u32,
}

impl Default for SimulatedContactService {
    fn default() -> Self {
        Self {
            delay_ms: config::SIMULATED_SEND_DELAY_MS,
        }
    }
}

impl SimulatedContactService {
    pub fn with_delay(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

impl ContactSubmissionService for SimulatedContactService {
    fn send(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<Ack, SubmissionError>> {
        let delay_ms = self.delay_ms;
        async move {
            if delay_ms > 0 {
                TimeoutFuture::new(delay_ms).await;
            }
            info!("Form submitted:\n{}", message.email_body());
            Ok(Ack::default())
        }
        .boxed_local()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Records every message and answers with a canned result, or never answers when stalled.
    pub struct RecordingService {
        result: Option<Result<Ack, SubmissionError>>,
        sent: RefCell<Vec<ContactMessage>>,
    }

    impl RecordingService {
        pub fn succeeding() -> Self {
            Self {
                result: Some(Ok(Ack {
                    id: Some("msg-1".to_string()),
                })),
                sent: RefCell::new(Vec::new()),
            }
        }

        pub fn failing(error: SubmissionError) -> Self {
            Self {
                result: Some(Err(error)),
                sent: RefCell::new(Vec::new()),
            }
        }

        pub fn stalled() -> Self {
            Self {
                result: None,
                sent: RefCell::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> usize {
            self.sent.borrow().len()
        }

        pub fn last(&self) -> Option<ContactMessage> {
            self.sent.borrow().last().cloned()
        }
    }

    impl ContactSubmissionService for RecordingService {
        fn send(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<Ack, SubmissionError>> {
            self.sent.borrow_mut().push(message);
            match self.result.clone() {
                Some(result) => future::ready(result).boxed_local(),
                None => future::pending().boxed_local(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingService;
    use super::*;
    use futures::executor::block_on;
    use futures::future::abortable;
    use std::cell::Cell;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            instagram: Some("@jane".to_string()),
            facebook: None,
            message: "Interested in a campaign".to_string(),
        }
    }

    #[test]
    fn simulated_service_always_acks() {
        let service = SimulatedContactService::with_delay(0);
        assert_eq!(block_on(service.send(message())), Ok(Ack::default()));
    }

    #[test]
    fn field_errors_become_invalid() {
        let body = r#"{"error":"validation failed","fields":[{"field":"email","message":"not an address"}]}"#;
        assert_eq!(
            error_from_response(422, body),
            SubmissionError::Invalid {
                fields: vec![FieldError {
                    field: "email".to_string(),
                    message: "not an address".to_string(),
                }],
            }
        );
    }

    #[test]
    fn plain_error_body_becomes_rejected() {
        assert_eq!(
            error_from_response(500, r#"{"error":"mail relay down"}"#),
            SubmissionError::Rejected {
                status: 500,
                message: "mail relay down".to_string(),
            }
        );
        assert_eq!(
            error_from_response(502, "  "),
            SubmissionError::Rejected {
                status: 502,
                message: "no details".to_string(),
            }
        );
        assert_eq!(
            error_from_response(503, "Service Unavailable"),
            SubmissionError::Rejected {
                status: 503,
                message: "Service Unavailable".to_string(),
            }
        );
    }

    #[test]
    fn payload_uses_field_keys() {
        let json = serde_json::to_value(message()).unwrap();
        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["instagram"], "@jane");
        assert!(json["facebook"].is_null());
        assert_eq!(json["message"], "Interested in a campaign");
    }

    #[test]
    fn stalled_request_times_out() {
        let service = RecordingService::stalled();
        let result = block_on(with_timeout(service.send(message()), future::ready(())));
        assert_eq!(result, Err(SubmissionError::Timeout));
        assert_eq!(service.calls(), 1);
    }

    #[test]
    fn answer_beats_pending_timeout() {
        let service = RecordingService::succeeding();
        let result = block_on(with_timeout(service.send(message()), future::pending()));
        assert_eq!(result.map(|ack| ack.id), Ok(Some("msg-1".to_string())));
    }

    /// Stands in for `post`: holds a guard while waiting on a reply that never comes.
    fn guarded_request(aborted: Rc<Cell<bool>>) -> impl Future<Output = Result<Ack, SubmissionError>> {
        async move {
            let guard = CancelOnDrop::new(move || aborted.set(true));
            future::pending::<()>().await;
            guard.disarm();
            Ok(Ack::default())
        }
    }

    #[test]
    fn aborting_the_send_cancels_the_request() {
        let aborted = Rc::new(Cell::new(false));
        let (send, handle) = abortable(guarded_request(aborted.clone()));
        let mut send = Box::pin(send);
        assert!(send.as_mut().now_or_never().is_none());
        assert!(!aborted.get());

        handle.abort();
        assert!(block_on(send).is_err());
        assert!(aborted.get());
    }

    #[test]
    fn timing_out_cancels_the_request() {
        let aborted = Rc::new(Cell::new(false));
        let result = block_on(with_timeout(guarded_request(aborted.clone()), future::ready(())));
        assert_eq!(result, Err(SubmissionError::Timeout));
        assert!(aborted.get());
    }

    #[test]
    fn completed_request_is_not_cancelled() {
        let aborted = Rc::new(Cell::new(false));
        let flag = aborted.clone();
        let guard = CancelOnDrop::new(move || flag.set(true));
        guard.disarm();
        assert!(!aborted.get());
    }

    #[test]
    fn ack_tolerates_missing_id() {
        let ack: Ack = serde_json::from_str("{}").unwrap();
        assert_eq!(ack.id, None);
    }
}
