//! The site's enhancement scripts, one module per script, each exposing
//! `process(&mut Page, root) -> Result<(), ConfigError>`. Binding produces
//! `Handler` commands in the page's listener table; `dispatch` executes
//! them.

pub mod bootstrap;
pub mod clipboard;
pub mod code;
pub mod dispatch;
pub mod notification;
pub mod popup;
pub mod scrollspy;

mod error;

pub use crate::bootstrap::{Dispatcher, process_all};
pub use crate::dispatch::dispatch;
pub use crate::error::ConfigError;
