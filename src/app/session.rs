//! Edit-Session: das eine aktuelle Building plus Undo/Redo-History.

use super::{EditError, EditHistory};
use crate::core::{Building, Level};
use crate::interchange::{self, ExportPayload};
use crate::shared::EditorOptions;
use crate::wire::MapError;
use std::sync::Arc;

/// Besitzt das aktuelle Building und serialisiert alle Mutationen darauf.
///
/// Jede Mutation berechnet zuerst das vollständige nächste Building und hängt
/// es dann an die History an. Der bisherige Snapshot wird nie in-place
/// verändert. Die Session synchronisiert nicht selbst: mehrere Threads müssen
/// jeden Aufruf in einen gemeinsamen Mutex legen.
#[derive(Debug, Clone)]
pub struct EditSession {
    history: EditHistory,
    building_name: String,
    level_name: String,
}

impl EditSession {
    /// Neue Session mit leerem Gebäude und einem Standard-Level.
    pub fn new(options: &EditorOptions) -> Self {
        let building_name = options.default_building_name.clone();
        let level_name = options.default_level_name.clone();
        let initial = Arc::new(Self::blank(&building_name, &level_name));
        Self {
            history: EditHistory::new(initial, options.history_depth),
            building_name,
            level_name,
        }
    }

    /// Neue Session mit einem vorhandenen Building als Anfangszustand.
    pub fn with_building(building: Building, options: &EditorOptions) -> Self {
        Self {
            history: EditHistory::new(Arc::new(building), options.history_depth),
            building_name: options.default_building_name.clone(),
            level_name: options.default_level_name.clone(),
        }
    }

    fn blank(building_name: &str, level_name: &str) -> Building {
        Building::new(building_name).with_level(level_name, Level::new(0.0))
    }

    /// Aktueller Snapshot (geteilt, unveränderlich)
    pub fn current(&self) -> &Arc<Building> {
        self.history.current()
    }

    /// Aktuelles Building
    pub fn building(&self) -> &Building {
        self.history.current()
    }

    /// Zugriff auf die History (nur lesend)
    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Hängt einen fertig berechneten Snapshot an.
    pub fn apply(&mut self, snapshot: Arc<Building>) {
        self.history.apply(snapshot);
    }

    /// Führt eine Mutation auf einer Kopie des aktuellen Buildings aus.
    ///
    /// Nur bei Erfolg wird das Ergebnis zum neuen Snapshot; bei einem Fehler
    /// bleiben Building und History unverändert.
    pub fn commit<T>(
        &mut self,
        mutate: impl FnOnce(&mut Building) -> Result<T, EditError>,
    ) -> Result<T, EditError> {
        let mut next = Arc::clone(self.history.current());
        let result = mutate(Arc::make_mut(&mut next))?;
        self.history.apply(next);
        Ok(result)
    }

    /// Macht die letzte Aktion rückgängig. Gibt `false` zurück, wenn nichts zu tun war.
    pub fn undo(&mut self) -> bool {
        if self.history.undo().is_some() {
            log::info!(
                "Undo ausgeführt ({}/{})",
                self.history.index() + 1,
                self.history.len()
            );
            true
        } else {
            log::debug!("Undo nicht möglich: bereits am Anfang der History");
            false
        }
    }

    /// Stellt die zuletzt rückgängig gemachte Aktion wieder her.
    pub fn redo(&mut self) -> bool {
        if self.history.redo().is_some() {
            log::info!(
                "Redo ausgeführt ({}/{})",
                self.history.index() + 1,
                self.history.len()
            );
            true
        } else {
            log::debug!("Redo nicht möglich: bereits am Ende der History");
            false
        }
    }

    /// Ersetzt Building und History durch einen einzelnen Snapshot.
    pub fn replace_all(&mut self, building: Building) {
        self.history.replace_all(Arc::new(building));
    }

    /// Verwirft das aktuelle Gebäude zugunsten eines leeren Standard-Gebäudes.
    pub fn clear(&mut self) {
        let blank = Self::blank(&self.building_name, &self.level_name);
        self.replace_all(blank);
        log::info!("Gebäude geleert");
    }

    /// Importiert Text im angegebenen Format und ersetzt bei Erfolg das Building.
    ///
    /// Ein fehlgeschlagener Import lässt Building und History unverändert.
    pub fn import(&mut self, data: &str, format: &str) -> Result<(), MapError> {
        let building = interchange::import_building(data, format)?;
        log::info!(
            "Building '{}' importiert: {} Levels, {} Vertices, {} Kanten",
            building.name,
            building.level_count(),
            building.vertex_count(),
            building.edge_count()
        );
        self.replace_all(building);
        Ok(())
    }

    /// Exportiert das aktuelle Building im angegebenen Format.
    pub fn export(&self, format: &str) -> Result<ExportPayload, MapError> {
        interchange::export_building(self.building(), format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vertex;

    fn session() -> EditSession {
        EditSession::new(&EditorOptions::default())
    }

    #[test]
    fn new_session_has_default_building() {
        let session = session();
        assert_eq!(session.building().name, "RMF Site Map");
        assert!(session.building().level("L1").is_some());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn apply_appends_precomputed_snapshot() {
        let options = EditorOptions {
            history_depth: 2,
            ..EditorOptions::default()
        };
        let mut session = EditSession::with_building(Building::new("s0"), &options);
        session.apply(Arc::new(Building::new("s1")));
        session.apply(Arc::new(Building::new("s2")));

        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history().max_depth(), 2);
        assert!(session.undo());
        assert_eq!(session.building().name, "s1");
        assert!(!session.undo());
    }

    #[test]
    fn commit_error_leaves_history_untouched() {
        let mut session = session();
        let result: Result<(), EditError> = session.commit(|building| {
            building.name = "verändert".into();
            Err(EditError::EmptyDoorName)
        });

        assert_eq!(result, Err(EditError::EmptyDoorName));
        assert_eq!(session.building().name, "RMF Site Map");
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn commit_never_mutates_held_snapshot() {
        let mut session = session();
        let before = Arc::clone(session.current());

        session
            .commit(|building| {
                if let Some(level) = building.level_mut("L1") {
                    level.vertices.push(Vertex::new(1.0, 2.0, 0.0));
                }
                Ok(())
            })
            .expect("Commit erwartet");

        assert_eq!(before.vertex_count(), 0);
        assert_eq!(session.building().vertex_count(), 1);
        assert!(session.undo());
        assert_eq!(session.building().vertex_count(), 0);
        assert!(!session.undo());
        assert!(session.redo());
        assert_eq!(session.building().vertex_count(), 1);
    }

    #[test]
    fn failed_import_keeps_current_building() {
        let mut session = session();
        session
            .commit(|building| {
                building.name = "Bestand".into();
                Ok(())
            })
            .expect("Commit erwartet");

        let err = session
            .import("name: X\nlevels: nope\n", "yaml")
            .expect_err("Import muss fehlschlagen");
        assert_eq!(err.kind(), "validation");
        assert_eq!(session.building().name, "Bestand");
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn import_resets_history() {
        let mut session = session();
        session.commit(|_| Ok(())).expect("Commit erwartet");

        session
            .import("name: Neu\nlevels:\n  G: {elevation: 0}\n", "yaml")
            .expect("Import erwartet");

        assert_eq!(session.building().name, "Neu");
        assert_eq!(session.history().len(), 1);
        assert!(!session.undo());
    }

    #[test]
    fn clear_replaces_history_with_blank_building() {
        let mut session = session();
        session
            .commit(|building| {
                building.name = "Alt".into();
                Ok(())
            })
            .expect("Commit erwartet");
        session.clear();

        assert_eq!(session.building().name, "RMF Site Map");
        assert_eq!(session.history().len(), 1);
    }
}
