//! Copy-to-clipboard producers. After performing the copy each handler
//! raises a notify event on itself; the notification renderer takes it
//! from there.

use crate::dispatch;
use crate::error::ConfigError;
use dom::query::{attr, attr_is, collect_ids, find_descendant, has_attr, is_heading, text_of};
use dom::traverse::{find_node_by_id, find_node_by_id_mut};
use dom::{Id, mutate};
use page::{EventName, Handler, NotificationPayload, Page, ScriptId, TimerAction};

/// How long the copy button shows the confirmation glyph.
pub const BUTTON_RESTORE_MS: u64 = 1000;

const COPIED_GLYPH: &str = "✓";

pub fn process(page: &mut Page, root: Id) -> Result<(), ConfigError> {
    let (buttons, anchors) = {
        let scope = find_node_by_id(&page.dom, root).ok_or(ConfigError::MissingContentRoot)?;
        let content = find_descendant(scope, |n| attr_is(n, "id", "content"))
            .ok_or(ConfigError::MissingContentRoot)?;

        let mut blocks = Vec::new();
        collect_ids(scope, |n| has_attr(n, "codeblock"), &mut blocks);
        let mut buttons = Vec::new();
        for block in blocks {
            let Some(block_node) = find_node_by_id(scope, block) else {
                continue;
            };
            let button = find_descendant(block_node, |n| {
                n.is_element_named("button") && has_attr(n, "clipboard")
            });
            match button {
                Some(b) => buttons.push((block, b.id())),
                None => log::debug!("codeblock {block:?} has no clipboard button"),
            }
        }

        let mut headings = Vec::new();
        collect_ids(content, is_heading, &mut headings);
        let mut anchors = Vec::new();
        for heading in headings {
            let Some(node) = find_node_by_id(content, heading) else {
                continue;
            };
            match attr(node, "id") {
                Some(fragment) => anchors.push((heading, fragment.to_string())),
                None => log::debug!("heading {heading:?} has no id; skipping anchor copy"),
            }
        }
        (buttons, anchors)
    };

    for (codeblock, button) in &buttons {
        page.listeners.bind(
            *button,
            EventName::Click,
            ScriptId::Clipboard,
            Handler::CopyCodeBlock { codeblock: *codeblock, button: *button },
        );
    }
    for (heading, fragment) in anchors {
        page.listeners.bind(
            heading,
            EventName::Click,
            ScriptId::Clipboard,
            Handler::CopyHeadingUrl { heading, fragment },
        );
    }
    Ok(())
}

pub(crate) fn copy_code_block(page: &mut Page, codeblock: Id, button: Id) {
    let code = {
        let Some(block) = find_node_by_id(&page.dom, codeblock) else {
            return;
        };
        match find_descendant(block, |n| n.is_element_named("pre")) {
            Some(pre) => text_of(pre),
            None => return,
        }
    };
    page.clipboard.write_text(&code);

    // Confirmation glyph on the button, restored a moment later.
    let previous = match find_node_by_id(&page.dom, button) {
        Some(b) => text_of(b),
        None => return,
    };
    if let Some(b) = find_node_by_id_mut(&mut page.dom, button) {
        mutate::set_text_content(b, COPIED_GLYPH);
    }
    page.schedule_in(BUTTON_RESTORE_MS, TimerAction::RestoreText { node: button, text: previous });

    dispatch::dispatch(
        page,
        button,
        EventName::Notify,
        Some(&NotificationPayload::success("Code copied to clipboard")),
    );
}

pub(crate) fn copy_heading_url(page: &mut Page, heading: Id, fragment: &str) {
    let base = match page.location.split_once('#') {
        Some((base, _)) => base,
        None => page.location.as_str(),
    };
    let url = format!("{base}#{fragment}");
    page.clipboard.write_text(&url);

    dispatch::dispatch(
        page,
        heading,
        EventName::Notify,
        Some(&NotificationPayload::success("Url copied to clipboard")),
    );
}
