//! Application-Layer: Edit-Session, History und Use-Cases.

mod error;
pub mod history;
/// Edit-Session
///
/// Dieses Modul verwaltet das aktuelle Building und alle Mutationen darauf.
pub mod session;
pub mod use_cases;

pub use error::EditError;
pub use history::{EditHistory, DEFAULT_HISTORY_DEPTH};
pub use session::EditSession;
pub use use_cases::editing::{NewEdge, MAX_GRAPH_INDEX};
