//! Ticket endpoint adapter backed by the browser `fetch` API.

use edit_host::{EditTicket, TicketFuture, TicketResponse, TicketService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser ticket adapter.
///
/// Issues a same-origin `GET` so the session cookie authenticates the request, then reads the
/// `ticket` field of the JSON body.
pub struct WebTicketService;

impl TicketService for WebTicketService {
    fn fetch_ticket<'a>(
        &'a self,
        endpoint: &'a str,
    ) -> TicketFuture<'a, Result<EditTicket, String>> {
        Box::pin(async move {
            bridge::fetch_ticket_response(endpoint)
                .await
                .and_then(TicketResponse::into_ticket)
        })
    }
}
