use dom::build::{doc, elem, text};
use dom::query::{attr_is, find_descendant, has_attr, has_class};
use dom::traverse::find_node_by_id;
use dom::{Id, Node};
use page::{EventName, Page, Rectangle};
use scripts::{dispatch, process_all};

fn layout_page() -> Page {
    let dom = doc(vec![elem(
        "body",
        &[],
        vec![
            elem("div", &[("class", Some("top-bar"))], vec![]),
            elem(
                "div",
                &[("id", Some("main"))],
                vec![
                    elem("h1", &[("id", Some("one"))], vec![text("One")]),
                    elem("h2", &[("id", Some("two"))], vec![text("Two")]),
                    elem(
                        "div",
                        &[("codeblock", None)],
                        vec![
                            elem("p", &[("code-gutter", None)], vec![text("1")]),
                            elem("p", &[("code-line", None)], vec![text("long wrapped line")]),
                        ],
                    ),
                    elem(
                        "abbr",
                        &[],
                        vec![elem(
                            "div",
                            &[("pop-up", None), ("class", Some("pop-up pop-up-bottom"))],
                            vec![text("definition")],
                        )],
                    ),
                ],
            ),
            elem(
                "div",
                &[("class", Some("side-bar toc"))],
                vec![
                    elem("a", &[("class", Some("chapter"))], vec![text("One")]),
                    elem("a", &[("class", Some("chapter"))], vec![text("Two")]),
                ],
            ),
        ],
    )]);
    Page::new(dom)
}

fn find_id<F: Fn(&Node) -> bool>(page: &Page, pred: F) -> Id {
    find_descendant(&page.dom, pred).map(Node::id).unwrap()
}

#[test]
fn gutter_rows_track_wrapped_line_heights() {
    let mut page = layout_page();
    process_all(&mut page);

    let codeblock = find_id(&page, |n| has_attr(n, "codeblock"));
    let gutter = find_id(&page, |n| has_attr(n, "code-gutter"));
    let line = find_id(&page, |n| has_attr(n, "code-line"));

    page.geometry.set(gutter, Rectangle::new(0.0, 100.0, 40.0, 20.0));
    page.geometry.set(line, Rectangle::new(40.0, 100.0, 600.0, 44.0));

    dispatch(&mut page, codeblock, EventName::Resize, None);

    let gutter_node = find_node_by_id(&page.dom, gutter).unwrap();
    match gutter_node {
        Node::Element { style, .. } => {
            assert_eq!(style.as_slice(), &[("height".to_string(), "44px".to_string())]);
        }
        _ => panic!("gutter is not an element"),
    }
    assert_eq!(page.geometry.height(gutter), Some(44.0));

    // Heights agree now; a second resize changes nothing.
    dispatch(&mut page, codeblock, EventName::Resize, None);
    let gutter_node = find_node_by_id(&page.dom, gutter).unwrap();
    if let Node::Element { style, .. } = gutter_node {
        assert_eq!(style.len(), 1);
    }
}

#[test]
fn popup_flips_up_when_the_viewport_runs_out() {
    let mut page = layout_page();
    process_all(&mut page);

    let main = find_id(&page, |n| attr_is(n, "id", "main"));
    let popup = find_id(&page, |n| has_attr(n, "pop-up"));
    let parent = find_id(&page, |n| n.is_element_named("abbr"));

    page.viewport.height = 800.0;
    page.geometry.set(popup, Rectangle::new(0.0, 0.0, 200.0, 120.0));

    // Plenty of room below: stays (or returns to) bottom.
    page.geometry.set(parent, Rectangle::new(0.0, 100.0, 200.0, 20.0));
    dispatch(&mut page, main, EventName::Scroll, None);
    assert!(has_class(find_node_by_id(&page.dom, popup).unwrap(), "pop-up-bottom"));

    // Parent near the fold: fewer than 10 px remain below the popup.
    page.geometry.set(parent, Rectangle::new(0.0, 700.0, 200.0, 20.0));
    dispatch(&mut page, main, EventName::Scroll, None);
    assert!(has_class(find_node_by_id(&page.dom, popup).unwrap(), "pop-up-top"));

    // Scrolling the parent back up flips it down again.
    page.viewport.scroll_top = 400.0;
    dispatch(&mut page, main, EventName::Scroll, None);
    assert!(has_class(find_node_by_id(&page.dom, popup).unwrap(), "pop-up-bottom"));
}

#[test]
fn scroll_spy_highlights_exactly_the_visible_section() {
    let mut page = layout_page();
    process_all(&mut page);

    let main = find_id(&page, |n| attr_is(n, "id", "main"));
    let topbar = find_id(&page, |n| has_class(n, "top-bar"));
    let h1 = find_id(&page, |n| attr_is(n, "id", "one"));
    let h2 = find_id(&page, |n| attr_is(n, "id", "two"));

    page.geometry.set(topbar, Rectangle::new(0.0, 0.0, 1000.0, 50.0));
    page.geometry.set(h1, Rectangle::new(0.0, 60.0, 600.0, 30.0));
    page.geometry.set(h2, Rectangle::new(0.0, 900.0, 600.0, 30.0));

    let chapter_classes = |page: &Page| -> Vec<bool> {
        let toc = find_descendant(&page.dom, |n| has_class(n, "toc")).unwrap();
        toc.children()
            .unwrap()
            .iter()
            .map(|a| has_class(a, "chapter-highlight"))
            .collect()
    };

    // First heading sits under the top bar, second is far below.
    page.viewport.scroll_top = 20.0;
    dispatch(&mut page, main, EventName::Scroll, None);
    assert_eq!(chapter_classes(&page), vec![true, false]);

    // Scroll until the last heading crosses the viewport top.
    page.viewport.scroll_top = 950.0;
    dispatch(&mut page, main, EventName::Scroll, None);
    assert_eq!(chapter_classes(&page), vec![false, true]);
}
