use std::rc::Rc;

use edit_host::{
    BrowsingOrigin, HostServices, MemoryTicketService, PendingTicketService, PlatformCapability,
    RecordingExternalUrlService, RecordingNotificationService, ScriptedNativeEditorService,
    TicketService,
};
use edit_online::{
    file_extension, item_uuid, register_edit_online, ActionError, ActionRecord, ActionRegistry,
    EditOnlineConfig, EditOnlineError, EditOnlineLauncher, LaunchOutcome, WebDavPath,
    DEFAULT_ACTION_NAME, DEFAULT_WEBDAV_PREFIX,
};
use futures::{executor::block_on, FutureExt};

struct Page {
    registry: ActionRegistry,
    navigation: RecordingExternalUrlService,
    editor: ScriptedNativeEditorService,
    notifications: RecordingNotificationService,
    _handle: edit_online::ActionRegistrationHandle,
}

fn page(
    user_agent: &str,
    tickets: Rc<dyn TicketService>,
    editor: ScriptedNativeEditorService,
) -> Page {
    let navigation = RecordingExternalUrlService::default();
    let notifications = RecordingNotificationService::default();
    let services = HostServices {
        tickets,
        external_urls: Rc::new(navigation.clone()),
        native_editor: Rc::new(editor.clone()),
        notifications: Rc::new(notifications.clone()),
        origin: BrowsingOrigin::new("https:", "host"),
        platform: PlatformCapability::from_user_agent(user_agent),
    };
    let registry = ActionRegistry::default();
    let launcher = Rc::new(EditOnlineLauncher::new(services, &EditOnlineConfig::default()));
    let handle = register_edit_online(&registry, launcher, DEFAULT_ACTION_NAME);
    Page {
        registry,
        navigation,
        editor,
        notifications,
        _handle: handle,
    }
}

const LEGACY_AGENT: &str = "Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1; Trident/4.0)";
const MODERN_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

fn run(page: &Page, file_name: &str) -> Result<LaunchOutcome, ActionError> {
    let pending = page
        .registry
        .dispatch(
            DEFAULT_ACTION_NAME,
            ActionRecord::new("workspace://SpacesStore/U", file_name),
        )
        .expect("action registered");
    block_on(pending)
}

#[test]
fn extracted_parts_follow_segment_positions() {
    assert_eq!(item_uuid("workspace://SpacesStore/U"), Some("U"));
    assert_eq!(item_uuid("x/y/z/w/v"), Some("w"));
    assert_eq!(file_extension("name.E"), Some("E"));
    assert_eq!(file_extension("one.two.three"), Some("two"));
}

#[test]
fn modern_browser_opens_constructed_url_for_every_extension() {
    let page = page(
        MODERN_AGENT,
        Rc::new(MemoryTicketService::issuing("T")),
        ScriptedNativeEditorService::succeeding(),
    );

    for extension in ["doc", "docx", "xls", "xlsx", "ppt", "pptx", "dot", "dotx", "txt", "E"] {
        assert_eq!(run(&page, &format!("name.{extension}")), Ok(LaunchOutcome::NewTab));
    }

    let opened = page.navigation.opened();
    assert_eq!(opened.len(), 10);
    assert_eq!(opened[9], "https://host/alfresco/webdav2/T/U.E");
    assert!(page.editor.attempts().is_empty());
}

#[test]
fn legacy_browser_uses_exactly_one_launch_path() {
    let working = page(
        LEGACY_AGENT,
        Rc::new(MemoryTicketService::issuing("T")),
        ScriptedNativeEditorService::succeeding(),
    );
    assert_eq!(run(&working, "minutes.docx"), Ok(LaunchOutcome::NativeEditor));
    assert_eq!(working.editor.attempts(), vec!["https://host/alfresco/webdav2/T/U.docx"]);
    assert!(working.navigation.opened().is_empty());

    let broken = page(
        LEGACY_AGENT,
        Rc::new(MemoryTicketService::issuing("T")),
        ScriptedNativeEditorService::failing(),
    );
    assert_eq!(run(&broken, "minutes.docx"), Ok(LaunchOutcome::NewTab));
    assert_eq!(broken.editor.attempts().len(), 1);
    assert_eq!(broken.navigation.opened(), vec!["https://host/alfresco/webdav2/T/U.docx"]);
}

#[test]
fn legacy_browser_skips_probe_for_plain_text() {
    let page = page(
        LEGACY_AGENT,
        Rc::new(MemoryTicketService::issuing("T")),
        ScriptedNativeEditorService::succeeding(),
    );

    assert_eq!(run(&page, "notes.txt"), Ok(LaunchOutcome::NewTab));
    assert!(page.editor.attempts().is_empty());
    assert_eq!(page.navigation.opened(), vec!["https://host/alfresco/webdav2/T/U.txt"]);
}

#[test]
fn unresolved_ticket_request_has_no_observable_effect() {
    let tickets = PendingTicketService::default();
    let page = page(
        LEGACY_AGENT,
        Rc::new(tickets.clone()),
        ScriptedNativeEditorService::succeeding(),
    );

    let pending = page
        .registry
        .dispatch(
            DEFAULT_ACTION_NAME,
            ActionRecord::new("workspace://SpacesStore/U", "a.docx"),
        )
        .expect("action registered");

    assert!(pending.now_or_never().is_none());
    assert_eq!(tickets.requests().len(), 1);
    assert!(page.editor.attempts().is_empty());
    assert!(page.navigation.opened().is_empty());
    assert!(page.notifications.sent().is_empty());
}

#[test]
fn failed_ticket_request_notifies_instead_of_failing_silently() {
    let page = page(
        MODERN_AGENT,
        Rc::new(MemoryTicketService::failing("ticket endpoint answered HTTP 500")),
        ScriptedNativeEditorService::succeeding(),
    );

    assert_eq!(
        run(&page, "a.docx"),
        Err(ActionError::Launch(EditOnlineError::TicketRequest(
            "ticket endpoint answered HTTP 500".to_string()
        )))
    );
    assert!(page.navigation.opened().is_empty());
    let sent = page.notifications.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].title, "Edit Online");
}

#[test]
fn overlapping_dispatches_each_request_their_own_ticket() {
    let tickets = MemoryTicketService::issuing("T");
    let page = page(
        MODERN_AGENT,
        Rc::new(tickets.clone()),
        ScriptedNativeEditorService::failing(),
    );
    let first = page
        .registry
        .dispatch(DEFAULT_ACTION_NAME, ActionRecord::new("a://b/first", "one.docx"))
        .expect("registered");
    let second = page
        .registry
        .dispatch(DEFAULT_ACTION_NAME, ActionRecord::new("a://b/second", "two.xlsx"))
        .expect("registered");

    assert_eq!(block_on(second), Ok(LaunchOutcome::NewTab));
    assert_eq!(block_on(first), Ok(LaunchOutcome::NewTab));
    assert_eq!(tickets.requests().len(), 2);

    let documents: Vec<WebDavPath> = page
        .navigation
        .opened()
        .iter()
        .map(|url| WebDavPath::from_url(url, DEFAULT_WEBDAV_PREFIX))
        .collect();
    assert_eq!(
        documents,
        vec![
            WebDavPath::Document {
                ticket: "T".to_string(),
                uuid: "second".to_string(),
                extension: "xlsx".to_string(),
            },
            WebDavPath::Document {
                ticket: "T".to_string(),
                uuid: "first".to_string(),
                extension: "docx".to_string(),
            },
        ]
    );
}
