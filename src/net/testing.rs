//! Canned-response transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::net::error::TransportError;
use crate::net::transport::{Transport, TransportRequest, TransportResponse};

/// Transport that replays queued responses and records every request.
///
/// Clones share the same queues, so a stub handed to a client can still be
/// inspected by the test afterwards.
#[derive(Clone, Debug, Default)]
pub struct StubTransport {
    responses: Rc<RefCell<VecDeque<Result<TransportResponse, TransportError>>>>,
    requests: Rc<RefCell<Vec<TransportRequest>>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body text.
    pub fn push_response(&self, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .push_back(Ok(TransportResponse { status, body: body.to_owned() }));
    }

    /// Queue a network-level failure.
    pub fn push_error(&self, message: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError(message.to_owned())));
    }

    /// Every request sent so far, in order.
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for StubTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no stubbed response".to_owned())))
    }
}
