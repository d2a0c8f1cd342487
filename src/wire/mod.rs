//! Wire-Codec: positionale Darstellung einer Site-Map in YAML oder JSON.
//!
//! - `parser`: Text → Building
//! - `writer`: Building → Text
//! - `params`: gemeinsames Aufteilen/Zusammenführen der abschließenden Maps
//! - `scene`: Projektion auf den Editor-Snapshot (`points` + `segments`)

mod error;
mod format;
pub mod params;
mod parser;
pub mod scene;
mod writer;

pub use error::MapError;
pub use format::MapFormat;
pub use params::{merge_params, split_params, SplitParams};
pub use parser::{decode_building, parse_building, read_document};
pub use scene::{EditorScene, PointType, ScenePoint, SceneSegment, SegmentType};
pub use writer::{encode_building, write_building};
