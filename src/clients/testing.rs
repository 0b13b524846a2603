//! In-memory [`Transport`] used by unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::clients::{HttpError, HttpRequest, HttpResponseError, Transport};

/// Records every request and replays queued responses in order.
///
/// When the queue runs dry the transport answers with a 500 response error.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: RefCell<Vec<HttpRequest>>,
    responses: RefCell<VecDeque<Result<Vec<u8>, HttpError>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_with(&self, body: impl Into<String>) {
        self.responses
            .borrow_mut()
            .push_back(Ok(body.into().into_bytes()));
    }

    pub fn fail_with(&self, code: u16, message: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(HttpError::Response(HttpResponseError {
                code,
                message: message.to_string(),
                error_reference: None,
            })));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn bodies(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|request| request.body.clone().unwrap_or_default())
            .collect()
    }
}

impl Transport for RecordingTransport {
    fn send(&self, request: HttpRequest) -> Result<Vec<u8>, HttpError> {
        request.verify()?;
        self.requests.borrow_mut().push(request);
        self.responses.borrow_mut().pop_front().unwrap_or_else(|| {
            Err(HttpError::Response(HttpResponseError {
                code: 500,
                message: "no response queued".to_string(),
                error_reference: None,
            }))
        })
    }
}
