//! RMF Site Editor Library.
//! Datenmodell, Wire-Codec, Edit-Session und Interchange-Service als Library
//! exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod interchange;
pub mod shared;
pub mod wire;

pub use app::{EditError, EditHistory, EditSession, NewEdge};
pub use core::{
    Building, Door, DoorType, Drawing, Floor, Lane, LaneOrientation, Level, Lift, Measurement,
    Params, Vertex, Wall,
};
pub use interchange::{
    export_building, export_map, import_building, import_map, ExportPayload, ExportRequest,
    FailureResponse, ImportRequest, ImportResponse,
};
pub use shared::EditorOptions;
pub use wire::{parse_building, write_building, EditorScene, MapError, MapFormat};
