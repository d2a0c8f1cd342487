//! Use-Case: Levels anlegen und das Gebäude leeren.

use super::rejected;
use crate::app::{EditError, EditSession};
use crate::core::Level;

/// Legt ein leeres Level auf der angegebenen Höhe an.
pub fn add_level(session: &mut EditSession, name: &str, elevation: f64) -> Result<(), EditError> {
    let result = session.commit(|building| {
        if name.trim().is_empty() {
            return Err(EditError::EmptyLevelName);
        }
        if building.levels.contains_key(name) {
            return Err(EditError::DuplicateLevel(name.to_string()));
        }
        building.levels.insert(name.to_string(), Level::new(elevation));
        Ok(())
    });

    rejected(session, "Level anlegen", result)?;
    log::info!("Level '{}' auf {:.2} m angelegt", name, elevation);
    Ok(())
}

/// Verwirft das aktuelle Gebäude samt History.
pub fn clear(session: &mut EditSession) {
    session.clear();
}
