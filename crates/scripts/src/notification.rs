//! Toast notifications. Any element flagged `noti="true"` is a sender;
//! a notify event dispatched at it clones the matching severity template
//! into the `[id=notification]` container and arms an auto-dismiss timer.

use crate::error::ConfigError;
use dom::query::{attr_is, collect_ids, find_descendant, find_descendant_mut, has_class};
use dom::traverse::find_node_by_id;
use dom::{Id, Node, mutate};
use page::{EventName, Handler, NotificationPayload, Page, ScriptId, Severity, TimerAction};

/// Auto-dismiss delay. One consistent value per deployment.
pub const AUTO_DISMISS_MS: u64 = 5000;

/// Wire the notification renderer for everything under `root`: validate
/// the container and its template registry, then (re)bind every sender in
/// scope. Safe to call repeatedly; rebinding replaces this script's
/// previous binding per sender instead of stacking a second one.
pub fn process(page: &mut Page, root: Id) -> Result<(), ConfigError> {
    let (container, senders) = {
        let scope =
            find_node_by_id(&page.dom, root).ok_or(ConfigError::MissingNotificationContainer)?;
        let container = find_descendant(scope, |n| attr_is(n, "id", "notification"))
            .ok_or(ConfigError::MissingNotificationContainer)?;
        let registry = find_descendant(container, |n| n.is_element_named("template"))
            .ok_or(ConfigError::MissingTemplateRegistry)?;
        for severity in Severity::ALL {
            resolve_template(registry, severity).ok_or(ConfigError::MissingTemplate(severity))?;
        }

        let mut senders = Vec::new();
        collect_ids(scope, |n| attr_is(n, "noti", "true"), &mut senders);
        (container.id(), senders)
    };

    for sender in &senders {
        page.listeners.bind(
            *sender,
            EventName::Notify,
            ScriptId::Notification,
            Handler::ShowNotification { container },
        );
    }
    log::debug!("notification: bound {} sender(s) under {root:?}", senders.len());
    Ok(())
}

/// Template fragment for this severity, keyed by class inside the
/// registry. Total over `Severity` on any registry `process` accepted.
pub fn resolve_template(registry: &Node, severity: Severity) -> Option<&Node> {
    registry.children()?.iter().find(|c| has_class(c, severity.class_name()))
}

/// Render one toast: clone the severity template, fill the text slot,
/// wire the dismiss control, insert newest-first, arm auto-dismiss.
pub(crate) fn show(page: &mut Page, container: Id, payload: &NotificationPayload) {
    let template = {
        let Some(container_node) = find_node_by_id(&page.dom, container) else {
            log::warn!("notification container {container:?} is gone; dropping toast");
            return;
        };
        let Some(registry) =
            find_descendant(container_node, |n| n.is_element_named("template"))
        else {
            return;
        };
        let Some(template) = resolve_template(registry, payload.severity) else {
            return;
        };
        let mut template = template.clone();
        if let Some(slot) = find_descendant_mut(&mut template, |n| n.is_element_named("p")) {
            mutate::set_text_content(slot, &payload.message);
        }
        template
    };

    let toast = page.instantiate(&template);
    let toast_id = toast.id();
    let dismiss = find_descendant(&toast, |n| n.is_element_named("span")).map(Node::id);

    page.insert_first_child(container, toast);
    if let Some(control) = dismiss {
        page.listeners.bind(
            control,
            EventName::Click,
            ScriptId::Notification,
            Handler::DismissToast { toast: toast_id },
        );
    }
    page.schedule_in(AUTO_DISMISS_MS, TimerAction::RemoveNode(toast_id));
}
