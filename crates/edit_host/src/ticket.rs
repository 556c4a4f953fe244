//! WebDAV access-ticket contracts.
//!
//! A ticket is requested fresh for every launch, embedded in one URL, and dropped. It is never
//! cached and never logged, so [`EditTicket`] redacts itself in `Debug` output.

use std::{cell::RefCell, fmt, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`TicketService`].
pub type TicketFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Short-lived repository credential scoped to WebDAV access.
#[derive(Clone, PartialEq, Eq)]
pub struct EditTicket(String);

impl EditTicket {
    /// Validates a raw ticket string.
    ///
    /// # Errors
    ///
    /// Returns an error when the ticket is blank or contains `/`; the repository reads the ticket
    /// back as exactly one URL path segment.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err("ticket is empty".to_string());
        }
        if raw.contains('/') {
            return Err("ticket contains a path separator".to_string());
        }
        Ok(Self(raw))
    }

    /// Returns the ticket text for URL construction.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for EditTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EditTicket(<redacted>)")
    }
}

/// JSON body returned by the ticket endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketResponse {
    /// Issued ticket string.
    pub ticket: String,
}

impl TicketResponse {
    /// Parses a raw JSON response body.
    ///
    /// # Errors
    ///
    /// Returns an error when the body is not JSON or lacks a string `ticket` field.
    pub fn from_json(body: &str) -> Result<Self, String> {
        serde_json::from_str(body).map_err(|e| format!("malformed ticket response: {e}"))
    }

    /// Validates the carried ticket.
    ///
    /// # Errors
    ///
    /// See [`EditTicket::new`].
    pub fn into_ticket(self) -> Result<EditTicket, String> {
        EditTicket::new(self.ticket)
    }
}

/// Host service that obtains a ticket from the repository's authentication endpoint.
pub trait TicketService {
    /// Requests a ticket from `endpoint` using the caller's authenticated session.
    fn fetch_ticket<'a>(
        &'a self,
        endpoint: &'a str,
    ) -> TicketFuture<'a, Result<EditTicket, String>>;
}

/// In-memory ticket service with a fixed answer that records requested endpoints.
#[derive(Debug, Clone)]
pub struct MemoryTicketService {
    answer: Result<String, String>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl MemoryTicketService {
    /// Service that issues `ticket` on every request.
    pub fn issuing(ticket: impl Into<String>) -> Self {
        Self {
            answer: Ok(ticket.into()),
            requests: Rc::default(),
        }
    }

    /// Service whose requests fail with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            answer: Err(message.into()),
            requests: Rc::default(),
        }
    }

    /// Returns the endpoints requested so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl TicketService for MemoryTicketService {
    fn fetch_ticket<'a>(
        &'a self,
        endpoint: &'a str,
    ) -> TicketFuture<'a, Result<EditTicket, String>> {
        Box::pin(async move {
            self.requests.borrow_mut().push(endpoint.to_string());
            self.answer.clone().and_then(EditTicket::new)
        })
    }
}

/// Ticket service whose requests never complete.
#[derive(Debug, Clone, Default)]
pub struct PendingTicketService {
    requests: Rc<RefCell<Vec<String>>>,
}

impl PendingTicketService {
    /// Returns the endpoints requested so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl TicketService for PendingTicketService {
    fn fetch_ticket<'a>(
        &'a self,
        endpoint: &'a str,
    ) -> TicketFuture<'a, Result<EditTicket, String>> {
        self.requests.borrow_mut().push(endpoint.to_string());
        Box::pin(std::future::pending())
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ticket_response_parses_and_ignores_extra_fields() {
        let response =
            TicketResponse::from_json(r#"{"ticket":"TICKET_abc123","user":"admin"}"#)
                .expect("parse");
        assert_eq!(
            response,
            TicketResponse {
                ticket: "TICKET_abc123".to_string()
            }
        );
        assert_eq!(response.into_ticket().expect("valid").as_str(), "TICKET_abc123");
    }

    #[test]
    fn ticket_response_rejects_missing_or_mistyped_field() {
        for body in ["{}", r#"{"ticket":42}"#, "<html>login</html>"] {
            let err = TicketResponse::from_json(body).expect_err("should fail");
            assert!(err.starts_with("malformed ticket response"), "body={body:?}");
        }
    }

    #[test]
    fn edit_ticket_rejects_blank_and_multi_segment_values() {
        assert_eq!(EditTicket::new("  ").expect_err("blank"), "ticket is empty");
        assert_eq!(
            EditTicket::new("a/b").expect_err("slash"),
            "ticket contains a path separator"
        );
    }

    #[test]
    fn edit_ticket_debug_output_is_redacted() {
        let ticket = EditTicket::new("TICKET_secret").expect("valid");
        assert_eq!(format!("{ticket:?}"), "EditTicket(<redacted>)");
    }

    #[test]
    fn memory_ticket_service_records_endpoint_and_propagates_failure() {
        let issuing = MemoryTicketService::issuing("TICKET_1");
        let ticket = block_on(issuing.fetch_ticket("/proxy/get_ticket")).expect("ticket");
        assert_eq!(ticket.as_str(), "TICKET_1");
        assert_eq!(issuing.requests(), vec!["/proxy/get_ticket"]);

        let failing = MemoryTicketService::failing("HTTP 401");
        assert_eq!(
            block_on(failing.fetch_ticket("/proxy/get_ticket")).expect_err("fail"),
            "HTTP 401"
        );
    }
}
