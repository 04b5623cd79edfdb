//! One-time, idempotent registration pass. `process_all` wires every
//! script against the page root; `Dispatcher` holds the single
//! "document ready" flag and defers the pass until the host reports
//! readiness.

use crate::error::ConfigError;
use crate::{clipboard, code, notification, popup, scrollspy};
use page::{Page, ScriptId};

pub type PassReport = Vec<(ScriptId, Result<(), ConfigError>)>;

/// Run every script's `process` against the page root, in the site's
/// deterministic order. One script's missing scaffolding never stops the
/// others from binding; its error is logged and reported.
pub fn process_all(page: &mut Page) -> PassReport {
    let root = page.root_id();
    let report: PassReport = vec![
        (ScriptId::Notification, notification::process(page, root)),
        (ScriptId::Clipboard, clipboard::process(page, root)),
        (ScriptId::Code, code::process(page, root)),
        (ScriptId::Popup, popup::process(page, root)),
        (ScriptId::Scrollspy, scrollspy::process(page, root)),
    ];
    for (script, result) in &report {
        if let Err(e) = result {
            log::warn!("{script:?} setup failed: {e}");
        }
    }
    report
}

/// Defers the registration pass until the document is ready. The ready
/// flag is set exactly once; a pass requested after that point runs
/// immediately instead of being deferred again.
#[derive(Debug, Default)]
pub struct Dispatcher {
    ready: bool,
    pending: bool,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Ask for a registration pass. Runs now if the document is ready,
    /// otherwise queues a single pass for `document_ready`.
    pub fn request(&mut self, page: &mut Page) -> Option<PassReport> {
        if self.ready {
            return Some(process_all(page));
        }
        self.pending = true;
        None
    }

    /// The host's DOMContentLoaded moment. Flushes at most one deferred
    /// pass; later calls are no-ops.
    pub fn document_ready(&mut self, page: &mut Page) -> Option<PassReport> {
        if self.ready {
            return None;
        }
        self.ready = true;
        if self.pending {
            self.pending = false;
            return Some(process_all(page));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::build::{doc, elem};
    use page::Page;

    fn bare_page() -> Page {
        // No scaffolding at all; every script reports its ConfigError.
        Page::new(doc(vec![elem("div", &[], vec![])]))
    }

    #[test]
    fn request_before_ready_defers_exactly_one_pass() {
        let mut page = bare_page();
        let mut dispatcher = Dispatcher::new();

        assert!(dispatcher.request(&mut page).is_none());
        assert!(dispatcher.request(&mut page).is_none());

        let report = dispatcher.document_ready(&mut page);
        assert!(report.is_some());
        assert!(dispatcher.document_ready(&mut page).is_none());
    }

    #[test]
    fn request_after_ready_runs_immediately() {
        let mut page = bare_page();
        let mut dispatcher = Dispatcher::new();

        assert!(dispatcher.document_ready(&mut page).is_none());
        assert!(dispatcher.is_ready());
        assert!(dispatcher.request(&mut page).is_some());
    }

    #[test]
    fn scripts_fail_independently_on_missing_scaffolding() {
        let mut page = bare_page();
        let report = process_all(&mut page);

        assert_eq!(report.len(), 5);
        assert!(report.iter().any(|(s, r)| *s == ScriptId::Notification && r.is_err()));
        // No popups in scope, so the popup script has nothing to require.
        assert!(report.iter().any(|(s, r)| *s == ScriptId::Popup && r.is_ok()));
        assert!(report.iter().any(|(s, r)| *s == ScriptId::Code && r.is_ok()));
    }
}
