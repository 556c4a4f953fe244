//! Ticketed WebDAV URL construction and recognition.
//!
//! The repository authenticates `<prefix><ticket>/<uuid>.<extension>` requests by reading the
//! ticket back out of the path, so the ticket always occupies exactly one path segment.

use edit_host::{BrowsingOrigin, EditTicket};

use crate::ContentReference;

/// Path under which the repository serves ticket-authenticated WebDAV.
pub const DEFAULT_WEBDAV_PREFIX: &str = "/alfresco/webdav2/";

/// Returns `prefix` with exactly one leading and one trailing `/`.
pub(crate) fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

/// Builds `<protocol>//<host><prefix><ticket>/<uuid>.<extension>`.
pub fn webdav_url(
    origin: &BrowsingOrigin,
    prefix: &str,
    ticket: &EditTicket,
    content: &ContentReference,
) -> String {
    format!(
        "{}{}{}/{}.{}",
        origin.as_prefix(),
        normalize_prefix(prefix),
        ticket.as_str(),
        content.uuid(),
        content.extension()
    )
}

/// Shape of a request path below the WebDAV prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebDavPath {
    /// `<prefix><ticket>/<uuid>.<extension>`: a ticketed document.
    Document {
        /// Ticket segment.
        ticket: String,
        /// Item id before the first `.` of the last segment.
        uuid: String,
        /// Extension after the first `.` of the last segment.
        extension: String,
    },
    /// `<prefix><ticket>` with or without a trailing `/`.
    TicketRoot {
        /// Ticket segment.
        ticket: String,
    },
    /// The prefix itself, with no credential.
    Root,
    /// Anything outside the ticketed WebDAV namespace.
    Other,
}

impl WebDavPath {
    /// Classifies a request path (query and fragment are ignored).
    pub fn classify(path: &str, prefix: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let root = normalize_prefix(prefix);
        let root = root.trim_end_matches('/');

        let Some(rest) = path.strip_prefix(root) else {
            return Self::Other;
        };
        let rest = match rest.strip_prefix('/') {
            Some(rest) => rest,
            None if rest.is_empty() => return Self::Root,
            None => return Self::Other,
        };
        if rest.is_empty() {
            return Self::Root;
        }

        let (ticket, name) = match rest.split_once('/') {
            Some((ticket, name)) => (ticket, name),
            None => (rest, ""),
        };
        if ticket.is_empty() {
            return Self::Other;
        }
        if name.is_empty() {
            return Self::TicketRoot {
                ticket: ticket.to_string(),
            };
        }
        if name.contains('/') {
            return Self::Other;
        }
        match name.split_once('.') {
            Some((uuid, extension)) if !uuid.is_empty() && !extension.is_empty() => {
                Self::Document {
                    ticket: ticket.to_string(),
                    uuid: uuid.to_string(),
                    extension: extension.to_string(),
                }
            }
            _ => Self::Other,
        }
    }

    /// Classifies an absolute URL by discarding its scheme and authority first.
    pub fn from_url(url: &str, prefix: &str) -> Self {
        let path = match url.split_once("://") {
            Some((_, after_scheme)) => match after_scheme.find('/') {
                Some(index) => &after_scheme[index..],
                None => "/",
            },
            None => url,
        };
        Self::classify(path, prefix)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn content(uuid: &str, file_name: &str) -> ContentReference {
        ContentReference::parse(format!("workspace://SpacesStore/{uuid}"), file_name)
            .expect("valid content")
    }

    #[test]
    fn url_concatenates_origin_prefix_ticket_uuid_and_extension() {
        let url = webdav_url(
            &BrowsingOrigin::new("https:", "host"),
            DEFAULT_WEBDAV_PREFIX,
            &EditTicket::new("T").expect("ticket"),
            &content("U", "name.E"),
        );
        assert_eq!(url, "https://host/alfresco/webdav2/T/U.E");
    }

    #[test]
    fn url_keeps_port_and_tolerates_unslashed_prefix() {
        let url = webdav_url(
            &BrowsingOrigin::new("http:", "share.local:8080"),
            "alfresco/webdav2",
            &EditTicket::new("TICKET_9f").expect("ticket"),
            &content("0b7d", "minutes.docx"),
        );
        assert_eq!(url, "http://share.local:8080/alfresco/webdav2/TICKET_9f/0b7d.docx");
    }

    #[test]
    fn classify_recognizes_each_path_shape() {
        let cases = [
            (
                "/alfresco/webdav2/TICKET_1/u1.docx",
                WebDavPath::Document {
                    ticket: "TICKET_1".to_string(),
                    uuid: "u1".to_string(),
                    extension: "docx".to_string(),
                },
            ),
            (
                "/alfresco/webdav2/TICKET_1/u1.docx?x=1",
                WebDavPath::Document {
                    ticket: "TICKET_1".to_string(),
                    uuid: "u1".to_string(),
                    extension: "docx".to_string(),
                },
            ),
            (
                "/alfresco/webdav2/TICKET_1",
                WebDavPath::TicketRoot {
                    ticket: "TICKET_1".to_string(),
                },
            ),
            (
                "/alfresco/webdav2/TICKET_1/",
                WebDavPath::TicketRoot {
                    ticket: "TICKET_1".to_string(),
                },
            ),
            ("/alfresco/webdav2", WebDavPath::Root),
            ("/alfresco/webdav2/", WebDavPath::Root),
            ("/alfresco/webdav2/TICKET_1/folder/u1.docx", WebDavPath::Other),
            ("/alfresco/webdav2/TICKET_1/noextension", WebDavPath::Other),
            ("/alfresco/webdav2x/TICKET_1/u1.docx", WebDavPath::Other),
            ("/alfresco/webdav/u1.docx", WebDavPath::Other),
        ];

        for (path, expected) in cases {
            assert_eq!(
                WebDavPath::classify(path, DEFAULT_WEBDAV_PREFIX),
                expected,
                "path={path:?}"
            );
        }
    }

    #[test]
    fn built_urls_classify_back_to_their_parts() {
        let url = webdav_url(
            &BrowsingOrigin::new("https:", "repo.example.com"),
            DEFAULT_WEBDAV_PREFIX,
            &EditTicket::new("TICKET_abc").expect("ticket"),
            &content("6a1c9f2e", "Quarterly.xlsx"),
        );

        assert_eq!(
            WebDavPath::from_url(&url, DEFAULT_WEBDAV_PREFIX),
            WebDavPath::Document {
                ticket: "TICKET_abc".to_string(),
                uuid: "6a1c9f2e".to_string(),
                extension: "xlsx".to_string(),
            }
        );
    }
}
