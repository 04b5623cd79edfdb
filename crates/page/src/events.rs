//! Shared event vocabulary. Handlers are plain data: the scripts crate
//! binds them into the listener table and executes them on dispatch, so no
//! closures ever capture the document.

use dom::Id;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventName {
    Notify,
    Click,
    Scroll,
    Resize,
}

/// The script owning a binding. Rebinding replaces the previous binding
/// with the same owner on the same (element, event) key, which is what
/// makes repeated `process` passes idempotent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScriptId {
    Notification,
    Clipboard,
    Code,
    Popup,
    Scrollspy,
}

/// A heading paired with its table-of-contents link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub heading: Id,
    pub chapter: Id,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Handler {
    ShowNotification { container: Id },
    DismissToast { toast: Id },
    CopyCodeBlock { codeblock: Id, button: Id },
    CopyHeadingUrl { heading: Id, fragment: String },
    SyncGutters { codeblock: Id },
    RepositionPopups { popups: Vec<Id> },
    HighlightChapter { sections: Vec<Section>, topbar: Id },
}
