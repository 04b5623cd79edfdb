//! Deterministic DOM serialization for test comparisons. Not a public
//! stable format.
//!
//! Equivalence rules:
//! - Node kinds and element names must match.
//! - Attribute list order is significant; names and values must match.
//! - Text and comments must match exactly.
//! - Node ids and empty style vectors can be ignored by options.

use crate::Node;
use std::fmt::{self, Write};

#[derive(Clone, Copy, Debug)]
pub struct DomSnapshotOptions {
    pub ignore_ids: bool,
    pub ignore_empty_style: bool,
}

impl Default for DomSnapshotOptions {
    fn default() -> Self {
        Self { ignore_ids: true, ignore_empty_style: true }
    }
}

#[derive(Debug)]
pub struct DomSnapshot {
    lines: Vec<String>,
}

impl DomSnapshot {
    pub fn new(root: &Node, options: DomSnapshotOptions) -> Self {
        let mut lines = Vec::new();
        walk_snapshot(root, &options, 0, &mut lines);
        Self { lines }
    }

    pub fn as_lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for DomSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i != 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

fn walk_snapshot(node: &Node, options: &DomSnapshotOptions, indent: usize, lines: &mut Vec<String>) {
    let mut line = "  ".repeat(indent);

    match node {
        Node::Document { id, children } => {
            line.push_str("document");
            if !options.ignore_ids {
                let _ = write!(line, " #{}", id.0);
            }
            lines.push(line);
            for c in children {
                walk_snapshot(c, options, indent + 1, lines);
            }
        }
        Node::Element { id, name, attributes, style, children } => {
            let _ = write!(line, "element {name}");
            if !options.ignore_ids {
                let _ = write!(line, " #{}", id.0);
            }
            for (k, v) in attributes {
                match v {
                    Some(v) => {
                        let _ = write!(line, " {k}={v:?}");
                    }
                    None => {
                        let _ = write!(line, " {k}");
                    }
                }
            }
            if !(style.is_empty() && options.ignore_empty_style) {
                let _ = write!(line, " style[");
                for (i, (k, v)) in style.iter().enumerate() {
                    if i != 0 {
                        line.push(' ');
                    }
                    let _ = write!(line, "{k}:{v}");
                }
                line.push(']');
            }
            lines.push(line);
            for c in children {
                walk_snapshot(c, options, indent + 1, lines);
            }
        }
        Node::Text { text, .. } => {
            let _ = write!(line, "text {text:?}");
            lines.push(line);
        }
        Node::Comment { text, .. } => {
            let _ = write!(line, "comment {text:?}");
            lines.push(line);
        }
    }
}
