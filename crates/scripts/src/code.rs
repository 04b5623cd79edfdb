//! Code gutter row-height synchronizer: keeps line-number paragraphs the
//! same height as their (possibly wrapped) code lines whenever a code
//! block resizes.

use crate::error::ConfigError;
use dom::query::{collect_ids, has_attr, set_style};
use dom::traverse::{find_node_by_id, find_node_by_id_mut};
use dom::Id;
use page::{EventName, Handler, Page, Rectangle, ScriptId};

pub fn process(page: &mut Page, root: Id) -> Result<(), ConfigError> {
    let mut blocks = Vec::new();
    if let Some(scope) = find_node_by_id(&page.dom, root) {
        collect_ids(scope, |n| has_attr(n, "codeblock"), &mut blocks);
    }
    for codeblock in blocks {
        page.listeners.bind(
            codeblock,
            EventName::Resize,
            ScriptId::Code,
            Handler::SyncGutters { codeblock },
        );
    }
    Ok(())
}

pub(crate) fn sync_gutters(page: &mut Page, codeblock: Id) {
    let (gutters, lines) = {
        let Some(block) = find_node_by_id(&page.dom, codeblock) else {
            return;
        };
        let mut gutters = Vec::new();
        collect_ids(block, |n| n.is_element_named("p") && has_attr(n, "code-gutter"), &mut gutters);
        let mut lines = Vec::new();
        collect_ids(block, |n| n.is_element_named("p") && has_attr(n, "code-line"), &mut lines);
        (gutters, lines)
    };

    for (gutter, line) in gutters.iter().zip(lines.iter()) {
        let Some(line_height) = page.geometry.height(*line) else {
            continue;
        };
        if page.geometry.height(*gutter) == Some(line_height) {
            continue;
        }
        if let Some(node) = find_node_by_id_mut(&mut page.dom, *gutter) {
            set_style(node, "height", format!("{line_height}px"));
        }
        let rect = page.geometry.rect(*gutter).unwrap_or_default();
        page.geometry.set(*gutter, Rectangle { height: line_height, ..rect });
    }
}
