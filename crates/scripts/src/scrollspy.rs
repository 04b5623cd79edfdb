//! Table-of-contents scroll-spy: as the main column scrolls, the chapter
//! link of the section currently under the top bar carries the
//! `chapter-highlight` class, exclusively.

use crate::error::ConfigError;
use dom::query::{attr_is, collect_ids, find_descendant, has_class, is_heading};
use dom::traverse::{find_node_by_id, find_node_by_id_mut};
use dom::Id;
use page::{EventName, Handler, Page, ScriptId, Section};

const HIGHLIGHT_CLASS: &str = "chapter-highlight";

pub fn process(page: &mut Page, root: Id) -> Result<(), ConfigError> {
    let (main, sections, topbar) = {
        let scope = find_node_by_id(&page.dom, root).ok_or(ConfigError::MissingMainColumn)?;
        let main = find_descendant(scope, |n| attr_is(n, "id", "main"))
            .ok_or(ConfigError::MissingMainColumn)?;
        let toc = find_descendant(scope, |n| has_class(n, "side-bar") && has_class(n, "toc"))
            .ok_or(ConfigError::MissingToc)?;
        let topbar = find_descendant(scope, |n| n.is_element_named("div") && has_class(n, "top-bar"))
            .ok_or(ConfigError::MissingTopBar)?;

        let mut headings = Vec::new();
        collect_ids(main, is_heading, &mut headings);
        let mut chapters = Vec::new();
        collect_ids(toc, |n| n.is_element_named("a") && has_class(n, "chapter"), &mut chapters);

        // Headings and chapter links pair up positionally; a TOC that is
        // shorter than the document just spies on its prefix.
        let sections: Vec<Section> = headings
            .iter()
            .zip(chapters.iter())
            .map(|(&heading, &chapter)| Section { heading, chapter })
            .collect();
        (main.id(), sections, topbar.id())
    };

    page.listeners.bind(
        main,
        EventName::Scroll,
        ScriptId::Scrollspy,
        Handler::HighlightChapter { sections, topbar },
    );
    Ok(())
}

pub(crate) fn highlight(page: &mut Page, sections: &[Section], topbar: Id) {
    let selected = {
        let topbar_height = page.geometry.height(topbar).unwrap_or(0.0);
        let client_top =
            |id: Id| page.geometry.rect(id).map(|r| page.viewport.client_top(r));

        let mut selected = None;
        for i in 0..sections.len() {
            if i == sections.len() - 1 {
                // Once the last heading crosses the viewport top it owns
                // the highlight; nothing comes after it.
                if client_top(sections[i].heading).is_some_and(|top| top <= 0.0) {
                    selected = Some(i);
                }
                continue;
            }
            let (Some(upper), Some(lower)) =
                (client_top(sections[i].heading), client_top(sections[i + 1].heading))
            else {
                continue;
            };
            if upper <= topbar_height && lower > topbar_height {
                selected = Some(i);
                break;
            }
        }
        selected
    };

    let Some(current) = selected else {
        return;
    };
    for (i, section) in sections.iter().enumerate() {
        let Some(chapter) = find_node_by_id_mut(&mut page.dom, section.chapter) else {
            continue;
        };
        if i == current {
            dom::query::add_class(chapter, HIGHLIGHT_CLASS);
        } else {
            dom::query::remove_class(chapter, HIGHLIGHT_CLASS);
        }
    }
}
