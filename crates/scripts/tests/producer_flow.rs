use dom::build::{doc, elem, text};
use dom::query::{attr_is, find_descendant, has_attr, has_class, text_of};
use dom::traverse::find_node_by_id;
use dom::{Id, Node};
use page::{EventName, Page};
use scripts::clipboard::BUTTON_RESTORE_MS;
use scripts::{dispatch, process_all};

const IDLE_GLYPH: &str = "⧉";

fn toast_template(class: &str) -> Node {
    elem(
        "div",
        &[("class", Some(&format!("noti-popup {class}")[..]))],
        vec![elem("p", &[], vec![]), elem("span", &[], vec![text("x")])],
    )
}

fn blog_page() -> Page {
    let dom = doc(vec![elem(
        "body",
        &[],
        vec![
            elem("div", &[("class", Some("top-bar"))], vec![]),
            elem(
                "div",
                &[("id", Some("notification"))],
                vec![elem(
                    "template",
                    &[],
                    vec![
                        toast_template("successful"),
                        toast_template("warning"),
                        toast_template("error"),
                        toast_template("default"),
                    ],
                )],
            ),
            elem(
                "div",
                &[("id", Some("main"))],
                vec![elem(
                    "div",
                    &[("id", Some("content"))],
                    vec![
                        elem(
                            "h1",
                            &[("id", Some("getting-started")), ("noti", Some("true"))],
                            vec![text("Getting started")],
                        ),
                        elem(
                            "div",
                            &[("codeblock", None)],
                            vec![
                                elem(
                                    "button",
                                    &[("clipboard", None), ("noti", Some("true"))],
                                    vec![text(IDLE_GLYPH)],
                                ),
                                elem("pre", &[], vec![text("fn main() {\n    run();\n}")]),
                            ],
                        ),
                    ],
                )],
            ),
        ],
    )]);
    Page::with_location(dom, "https://blog.example/posts/rust")
}

fn find_id<F: Fn(&Node) -> bool>(page: &Page, pred: F) -> Id {
    find_descendant(&page.dom, pred).map(Node::id).unwrap()
}

fn toast_messages(page: &Page) -> Vec<String> {
    let container = find_descendant(&page.dom, |n| attr_is(n, "id", "notification")).unwrap();
    container
        .children()
        .unwrap()
        .iter()
        .filter(|c| !c.is_element_named("template"))
        .map(|toast| {
            find_descendant(toast, |n| n.is_element_named("p")).map(text_of).unwrap_or_default()
        })
        .collect()
}

#[test]
fn code_block_copy_reaches_the_clipboard_and_raises_a_toast() {
    let mut page = blog_page();
    process_all(&mut page);

    let button = find_id(&page, |n| n.is_element_named("button") && has_attr(n, "clipboard"));
    dispatch(&mut page, button, EventName::Click, None);

    assert_eq!(page.clipboard.read_text().as_deref(), Some("fn main() {\n    run();\n}"));
    assert_eq!(toast_messages(&page), vec!["Code copied to clipboard".to_string()]);

    let container = find_descendant(&page.dom, |n| attr_is(n, "id", "notification")).unwrap();
    assert!(has_class(&container.children().unwrap()[0], "successful"));
}

#[test]
fn copy_button_glyph_swaps_and_restores() {
    let mut page = blog_page();
    process_all(&mut page);

    let button = find_id(&page, |n| n.is_element_named("button") && has_attr(n, "clipboard"));
    dispatch(&mut page, button, EventName::Click, None);

    let label = |page: &Page| text_of(find_node_by_id(&page.dom, button).unwrap());
    assert_eq!(label(&page), "✓");

    page.advance(BUTTON_RESTORE_MS - 1);
    assert_eq!(label(&page), "✓");
    page.advance(1);
    assert_eq!(label(&page), IDLE_GLYPH);
}

#[test]
fn heading_click_copies_its_anchor_url() {
    let mut page = blog_page();
    process_all(&mut page);

    let heading = find_id(&page, |n| n.is_element_named("h1"));
    dispatch(&mut page, heading, EventName::Click, None);

    assert_eq!(
        page.clipboard.read_text().as_deref(),
        Some("https://blog.example/posts/rust#getting-started")
    );
    assert_eq!(toast_messages(&page), vec!["Url copied to clipboard".to_string()]);
}

#[test]
fn anchor_base_drops_an_existing_fragment() {
    let mut page = blog_page();
    page.location = "https://blog.example/posts/rust#old-anchor".to_string();
    process_all(&mut page);

    let heading = find_id(&page, |n| n.is_element_named("h1"));
    dispatch(&mut page, heading, EventName::Click, None);

    assert_eq!(
        page.clipboard.read_text().as_deref(),
        Some("https://blog.example/posts/rust#getting-started")
    );
}

#[test]
fn missing_notification_scaffolding_degrades_without_blocking_the_copy() {
    let mut page = blog_page();
    let container = find_id(&page, |n| attr_is(n, "id", "notification"));
    page.remove(container);

    let report = process_all(&mut page);
    assert!(report.iter().any(|(s, r)| *s == page::ScriptId::Notification && r.is_err()));

    let button = find_id(&page, |n| n.is_element_named("button") && has_attr(n, "clipboard"));
    dispatch(&mut page, button, EventName::Click, None);

    // The copy itself still happened; only the toast is gone.
    assert!(page.clipboard.read_text().is_some());
}
