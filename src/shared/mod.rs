//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Konfiguration, die von `app`, `interchange` und
//! der Binary gemeinsam genutzt wird.

pub mod options;

pub use options::EditorOptions;
pub use options::{DEFAULT_BUILDING_NAME, DEFAULT_LEVEL_NAME};
