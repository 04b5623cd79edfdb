use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use dom::Node;
use dom::build::{doc, elem, text};
use dom::query::{find_descendant, has_attr};
use dom::snapshot::{DomSnapshot, DomSnapshotOptions};
use page::{EventName, Page};
use scripts::{Dispatcher, dispatch};

fn toast_template(class: &str, label: &str) -> Node {
    elem(
        "div",
        &[("class", Some(&format!("noti-popup {class}")[..]))],
        vec![
            elem("p", &[], vec![]),
            elem("span", &[], vec![text(label)]),
        ],
    )
}

/// A rendered blog post the way the site serves it, before any behavior is
/// wired up.
fn blog_post() -> Node {
    doc(vec![elem(
        "body",
        &[],
        vec![
            elem("div", &[("class", Some("top-bar"))], vec![text("my blog")]),
            elem(
                "div",
                &[("id", Some("notification"))],
                vec![elem(
                    "template",
                    &[],
                    vec![
                        toast_template("successful", "✕"),
                        toast_template("warning", "✕"),
                        toast_template("error", "✕"),
                        toast_template("default", "✕"),
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
                            &[("id", Some("hello-rust")), ("noti", Some("true"))],
                            vec![text("Hello, Rust")],
                        ),
                        elem(
                            "div",
                            &[("codeblock", None)],
                            vec![
                                elem(
                                    "button",
                                    &[("clipboard", None), ("noti", Some("true"))],
                                    vec![text("⧉")],
                                ),
                                elem("pre", &[], vec![text("fn main() {\n    println!(\"hi\");\n}")]),
                            ],
                        ),
                    ],
                )],
            ),
            elem(
                "div",
                &[("class", Some("side-bar toc"))],
                vec![elem("a", &[("class", Some("chapter"))], vec![text("Hello, Rust")])],
            ),
        ],
    )])
}

fn print_container(page: &Page) {
    let container = find_descendant(&page.dom, |n| dom::query::attr_is(n, "id", "notification"))
        .expect("notification container");
    let snapshot = DomSnapshot::new(container, DomSnapshotOptions::default());
    println!("{snapshot}");
}

fn main() {
    let mut page = Page::with_location(blog_post(), "https://blog.example/posts/hello-rust");
    let mut dispatcher = Dispatcher::new();

    println!("== registration requested before the document is ready");
    if dispatcher.request(&mut page).is_none() {
        println!("   deferred");
    }

    println!("== document ready");
    let report = dispatcher.document_ready(&mut page).expect("deferred pass runs");
    for (script, result) in &report {
        match result {
            Ok(()) => println!("   {script:?}: bound"),
            Err(e) => println!("   {script:?}: {e}"),
        }
    }

    let button = find_descendant(&page.dom, |n| {
        n.is_element_named("button") && has_attr(n, "clipboard")
    })
    .map(Node::id)
    .expect("copy button");

    println!("== user clicks the copy button");
    dispatch(&mut page, button, EventName::Click, None);
    if let Some(copied) = page.clipboard.read_text() {
        println!("   clipboard now holds: {copied:?}");
    }
    print_container(&page);

    println!("== 1000 ms later the button label restores");
    page.advance(1000);

    println!("== 5000 ms after the click the toast auto-dismisses");
    page.advance(4000);
    print_container(&page);
}
