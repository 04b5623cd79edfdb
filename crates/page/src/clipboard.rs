/// Seam between the producers and whatever clipboard the host has.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str);

    /// Last written text, where the sink can report it. The in-memory sink
    /// does; a system sink may not.
    fn read_text(&self) -> Option<String> {
        None
    }
}

/// Default sink: records writes, nothing leaves the process.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    last: Option<String>,
    writes: u64,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&mut self, text: &str) {
        self.last = Some(text.to_string());
        self.writes += 1;
    }

    fn read_text(&self) -> Option<String> {
        self.last.clone()
    }
}

/// Best-effort system clipboard. Failures are logged and swallowed; a copy
/// that silently does nothing beats crashing the whole page.
#[cfg(feature = "system-clipboard")]
#[derive(Debug, Default)]
pub struct SystemClipboard;

#[cfg(feature = "system-clipboard")]
impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) {
        use clipboard::{ClipboardContext, ClipboardProvider};

        match ClipboardContext::new() {
            Ok(mut ctx) => {
                if let Err(e) = ctx.set_contents(text.to_string()) {
                    log::warn!("clipboard write failed: {e}");
                }
            }
            Err(e) => log::warn!("clipboard unavailable: {e}"),
        }
    }

    fn read_text(&self) -> Option<String> {
        use clipboard::{ClipboardContext, ClipboardProvider};

        ClipboardContext::new().ok().and_then(|mut ctx| ctx.get_contents().ok())
    }
}
