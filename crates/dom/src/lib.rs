pub mod build;
pub mod mutate;
pub mod query;
#[cfg(any(test, feature = "dom-snapshot"))]
pub mod snapshot;
pub mod traverse;

mod types;

pub use crate::types::{Id, Node, NodeId};
