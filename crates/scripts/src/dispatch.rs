//! Direct-target event dispatch: look up the handlers bound on the target
//! for this event and execute them in binding order. Handlers are plain
//! commands, so execution gets the whole page mutably without any closure
//! capturing it.

use crate::{clipboard, code, notification, popup, scrollspy};
use dom::Id;
use page::{EventName, Handler, NotificationPayload, Page};

pub fn dispatch(
    page: &mut Page,
    target: Id,
    event: EventName,
    payload: Option<&NotificationPayload>,
) {
    let handlers: Vec<Handler> =
        page.listeners.handlers_for(target, event).iter().map(|(_, h)| h.clone()).collect();
    for handler in &handlers {
        execute(page, handler, payload);
    }
}

fn execute(page: &mut Page, handler: &Handler, payload: Option<&NotificationPayload>) {
    match handler {
        Handler::ShowNotification { container } => {
            let Some(payload) = payload else {
                log::debug!("notify event without payload dropped");
                return;
            };
            notification::show(page, *container, payload);
        }
        Handler::DismissToast { toast } => {
            page.remove(*toast);
        }
        Handler::CopyCodeBlock { codeblock, button } => {
            clipboard::copy_code_block(page, *codeblock, *button);
        }
        Handler::CopyHeadingUrl { heading, fragment } => {
            clipboard::copy_heading_url(page, *heading, fragment);
        }
        Handler::SyncGutters { codeblock } => code::sync_gutters(page, *codeblock),
        Handler::RepositionPopups { popups } => popup::reposition(page, popups),
        Handler::HighlightChapter { sections, topbar } => {
            scrollspy::highlight(page, sections, *topbar);
        }
    }
}
