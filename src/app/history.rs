use crate::core::Building;
use std::sync::Arc;

/// Standard-Tiefe der Undo/Redo-History.
pub const DEFAULT_HISTORY_DEPTH: usize = 50;

/// Lineare Undo/Redo-History aus vollständigen Building-Snapshots.
///
/// Snapshots sind `Arc`-geteilt: Ein Snapshot aufzunehmen ist O(1), der
/// eigentliche Klon passiert erst beim nächsten `Arc::make_mut()` in einem
/// Use-Case (COW-Semantik). Ältere Snapshots bleiben dadurch unveränderlich,
/// auch wenn ein Aufrufer noch eine Referenz hält.
///
/// Invariante: `snapshots` ist nie leer und `index < snapshots.len()`.
#[derive(Debug, Clone)]
pub struct EditHistory {
    snapshots: Vec<Arc<Building>>,
    index: usize,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt eine History mit genau einem Anfangszustand.
    ///
    /// `max_depth` wird auf mindestens 1 angehoben.
    pub fn new(initial: Arc<Building>, max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        let mut snapshots = Vec::with_capacity(max_depth);
        snapshots.push(initial);
        Self {
            snapshots,
            index: 0,
            max_depth,
        }
    }

    /// Aktueller Snapshot
    pub fn current(&self) -> &Arc<Building> {
        &self.snapshots[self.index]
    }

    /// Hängt einen neuen Snapshot an.
    ///
    /// Verwirft den Redo-Anteil hinter dem aktuellen Index. Bei Überschreiten
    /// der maximalen Tiefe fällt der älteste Snapshot heraus; der Index zeigt
    /// danach weiterhin auf den gerade angehängten Snapshot.
    pub fn apply(&mut self, snapshot: Arc<Building>) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(snapshot);
        if self.snapshots.len() > self.max_depth {
            let overflow = self.snapshots.len() - self.max_depth;
            self.snapshots.drain(..overflow);
        }
        self.index = self.snapshots.len() - 1;
    }

    /// Geht einen Schritt zurück. Gibt `None` zurück, wenn bereits am Anfang.
    pub fn undo(&mut self) -> Option<&Arc<Building>> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    /// Geht einen Schritt vor. Gibt `None` zurück, wenn bereits am Ende.
    pub fn redo(&mut self) -> Option<&Arc<Building>> {
        if self.index + 1 >= self.snapshots.len() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    /// Ersetzt die gesamte History durch einen einzelnen Snapshot.
    pub fn replace_all(&mut self, snapshot: Arc<Building>) {
        self.snapshots.clear();
        self.snapshots.push(snapshot);
        self.index = 0;
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    /// Anzahl gespeicherter Snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Eine History enthält immer mindestens einen Snapshot.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Position des aktuellen Snapshots
    pub fn index(&self) -> usize {
        self.index
    }

    /// Maximale Anzahl Snapshots
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Snapshot an einer Position (0 = ältester)
    pub fn snapshot(&self, position: usize) -> Option<&Arc<Building>> {
        self.snapshots.get(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Arc<Building> {
        Arc::new(Building::new(name))
    }

    #[test]
    fn fresh_history_cannot_undo_or_redo() {
        let mut history = EditHistory::new(named("s0"), DEFAULT_HISTORY_DEPTH);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
        assert_eq!(history.current().name, "s0");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn undo_and_redo_walk_the_sequence() {
        let mut history = EditHistory::new(named("s0"), DEFAULT_HISTORY_DEPTH);
        history.apply(named("s1"));
        history.apply(named("s2"));

        assert_eq!(history.undo().map(|b| b.name.clone()).as_deref(), Some("s1"));
        assert_eq!(history.undo().map(|b| b.name.clone()).as_deref(), Some("s0"));
        assert!(history.undo().is_none());
        assert_eq!(history.redo().map(|b| b.name.clone()).as_deref(), Some("s1"));
        assert!(history.can_redo());
    }

    #[test]
    fn apply_after_undo_discards_redo_tail() {
        let mut history = EditHistory::new(named("s0"), DEFAULT_HISTORY_DEPTH);
        history.apply(named("s1"));
        history.apply(named("s2"));
        history.undo();
        history.apply(named("s3"));

        assert_eq!(history.len(), 3);
        assert!(!history.can_redo());
        assert_eq!(history.current().name, "s3");
        assert_eq!(history.snapshot(1).map(|b| b.name.as_str()), Some("s1"));
    }

    #[test]
    fn sixty_applies_keep_fifty_snapshots() {
        let mut history = EditHistory::new(named("s0"), DEFAULT_HISTORY_DEPTH);
        for i in 1..=60 {
            history.apply(named(&format!("s{i}")));
        }

        assert_eq!(history.len(), 50);
        assert_eq!(history.index(), 49);
        assert_eq!(history.current().name, "s60");
        // s0..=s10 sind herausgefallen, s11 ist der älteste verbliebene Snapshot
        assert_eq!(history.snapshot(0).map(|b| b.name.as_str()), Some("s11"));
        assert!((0..history.len()).all(|i| history
            .snapshot(i)
            .is_some_and(|b| b.name != "s10")));
    }

    #[test]
    fn replace_all_resets_to_single_entry() {
        let mut history = EditHistory::new(named("s0"), DEFAULT_HISTORY_DEPTH);
        history.apply(named("s1"));
        history.apply(named("s2"));
        history.replace_all(named("imported"));

        assert_eq!(history.len(), 1);
        assert_eq!(history.index(), 0);
        assert!(history.undo().is_none());
        assert_eq!(history.current().name, "imported");
    }

    #[test]
    fn older_snapshots_stay_untouched_by_copy_on_write() {
        let mut history = EditHistory::new(named("s0"), DEFAULT_HISTORY_DEPTH);
        let held = Arc::clone(history.current());

        let mut next = Arc::clone(history.current());
        Arc::make_mut(&mut next).name = "s1".into();
        history.apply(next);

        assert_eq!(held.name, "s0");
        assert_eq!(history.snapshot(0).map(|b| b.name.as_str()), Some("s0"));
    }

    #[test]
    fn zero_depth_is_raised_to_one() {
        let mut history = EditHistory::new(named("s0"), 0);
        history.apply(named("s1"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.current().name, "s1");
    }
}
