//! Floating-popup vertical flip: a popup opens downward unless fewer than
//! `FLIP_MARGIN_PX` remain below its parent in the viewport, in which case
//! it opens upward.

use crate::error::ConfigError;
use dom::query::{attr_is, collect_ids, find_descendant, has_attr, replace_class};
use dom::traverse::{find_node_by_id, find_node_by_id_mut, parent_of};
use dom::{Id, Node};
use page::{EventName, Handler, Page, ScriptId};

const FLIP_MARGIN_PX: f32 = 10.0;

pub fn process(page: &mut Page, root: Id) -> Result<(), ConfigError> {
    let (popups, main) = {
        let Some(scope) = find_node_by_id(&page.dom, root) else {
            return Ok(());
        };
        let mut popups = Vec::new();
        collect_ids(scope, |n| has_attr(n, "pop-up"), &mut popups);
        if popups.is_empty() {
            return Ok(());
        }
        let main = find_descendant(scope, |n| attr_is(n, "id", "main")).map(Node::id);
        (popups, main)
    };
    let main = main.ok_or(ConfigError::MissingMainColumn)?;

    page.listeners.bind(
        root,
        EventName::Resize,
        ScriptId::Popup,
        Handler::RepositionPopups { popups: popups.clone() },
    );
    page.listeners.bind(
        main,
        EventName::Scroll,
        ScriptId::Popup,
        Handler::RepositionPopups { popups },
    );
    Ok(())
}

pub(crate) fn reposition(page: &mut Page, popups: &[Id]) {
    for popup in popups {
        let Some(parent) = parent_of(&page.dom, *popup) else {
            continue;
        };
        let (Some(parent_rect), Some(popup_height)) =
            (page.geometry.rect(parent), page.geometry.height(*popup))
        else {
            continue;
        };

        let below = page.viewport.height - page.viewport.client_bottom(parent_rect) - popup_height;
        let opens_up = below < FLIP_MARGIN_PX;

        if let Some(node) = find_node_by_id_mut(&mut page.dom, *popup) {
            if opens_up {
                replace_class(node, "pop-up-bottom", "pop-up-top");
            } else {
                replace_class(node, "pop-up-top", "pop-up-bottom");
            }
        }
    }
}
