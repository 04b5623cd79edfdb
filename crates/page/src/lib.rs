mod clipboard;
mod events;
mod geom;
mod listeners;
mod page;
mod payload;
mod timers;

pub use crate::clipboard::{ClipboardSink, MemoryClipboard};
#[cfg(feature = "system-clipboard")]
pub use crate::clipboard::SystemClipboard;
pub use crate::events::{EventName, Handler, ScriptId, Section};
pub use crate::geom::{GeometryMap, Rectangle, Viewport};
pub use crate::listeners::ListenerTable;
pub use crate::page::Page;
pub use crate::payload::{NotificationPayload, Severity};
pub use crate::timers::{Scheduler, TimerAction};
