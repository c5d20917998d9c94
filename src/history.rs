use std::collections::VecDeque;

use crate::config::ThemeConfiguration;

pub const DEFAULT_CAPACITY: usize = 50;

/// Linear undo/redo over full configuration snapshots.
///
/// Pushing after an undo discards the redo branch; once `capacity` is exceeded
/// the oldest snapshot is evicted.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: VecDeque<ThemeConfiguration>,
    index: Option<usize>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        History {
            snapshots: VecDeque::with_capacity(capacity),
            index: None,
            capacity,
        }
    }

    pub fn push(&mut self, snapshot: ThemeConfiguration) {
        let keep = self.index.map_or(0, |index| index + 1);
        self.snapshots.truncate(keep);
        self.snapshots.push_back(snapshot);

        while self.snapshots.len() > self.capacity {
            self.snapshots.pop_front();
            log::debug!("history full; evicted oldest snapshot");
        }
        self.index = Some(self.snapshots.len() - 1);
    }

    /// Steps back one snapshot; `None` when already at the oldest.
    pub fn undo(&mut self) -> Option<&ThemeConfiguration> {
        let index = self.index.filter(|&index| index > 0)? - 1;
        self.index = Some(index);
        self.snapshots.get(index)
    }

    /// Steps forward one snapshot; `None` when already at the tip.
    pub fn redo(&mut self) -> Option<&ThemeConfiguration> {
        let index = self.index? + 1;
        if index >= self.snapshots.len() {
            return None;
        }
        self.index = Some(index);
        self.snapshots.get(index)
    }

    pub fn can_undo(&self) -> bool {
        self.index.is_some_and(|index| index > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.index
            .is_some_and(|index| index + 1 < self.snapshots.len())
    }

    pub fn current(&self) -> Option<&ThemeConfiguration> {
        self.snapshots.get(self.index?)
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Drops every snapshot and starts over from `current`.
    pub fn clear(&mut self, current: ThemeConfiguration) {
        self.snapshots.clear();
        self.snapshots.push_back(current);
        self.index = Some(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> ThemeConfiguration {
        let mut config = ThemeConfiguration::default();
        config.manifest.name = name.to_string();
        config
    }

    fn current_name(history: &History) -> String {
        history.current().unwrap().manifest.name.clone()
    }

    #[test]
    fn empty_history_cannot_move() {
        let mut history = History::new();
        assert!(history.is_empty());
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
        assert!(!history.can_undo());
    }

    #[test]
    fn undo_and_redo_walk_snapshots() {
        let mut history = History::new();
        for name in ["v0", "v1", "v2", "v3"] {
            history.push(named(name));
        }

        assert_eq!(history.undo().unwrap().manifest.name, "v2");
        assert_eq!(history.redo().unwrap().manifest.name, "v3");
        assert!(history.redo().is_none());
        assert_eq!(current_name(&history), "v3");
    }

    #[test]
    fn undo_stops_at_first_snapshot() {
        let mut history = History::new();
        history.push(named("v0"));
        history.push(named("v1"));

        assert!(history.undo().is_some());
        assert!(history.undo().is_none());
        assert_eq!(current_name(&history), "v0");
    }

    #[test]
    fn push_after_undo_discards_redo_branch() {
        let mut history = History::new();
        for name in ["v0", "v1", "v2"] {
            history.push(named(name));
        }
        history.undo();
        history.undo();
        history.push(named("branch"));

        assert_eq!(history.len(), 2);
        assert!(!history.can_redo());
        assert!(history.redo().is_none());
        assert_eq!(history.undo().unwrap().manifest.name, "v0");
    }

    #[test]
    fn capacity_evicts_oldest_in_order() {
        let mut history = History::with_capacity(3);
        for index in 0..5 {
            history.push(named(&format!("v{index}")));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(current_name(&history), "v4");
        assert_eq!(history.undo().unwrap().manifest.name, "v3");
        assert_eq!(history.undo().unwrap().manifest.name, "v2");
        assert!(history.undo().is_none());
    }

    #[test]
    fn default_capacity_is_fifty() {
        let mut history = History::new();
        for index in 0..60 {
            history.push(named(&format!("v{index}")));
        }
        assert_eq!(history.capacity(), DEFAULT_CAPACITY);
        assert_eq!(history.len(), 50);
        assert_eq!(history.index(), Some(49));
    }

    #[test]
    fn clear_keeps_only_current() {
        let mut history = History::new();
        history.push(named("v0"));
        history.push(named("v1"));
        history.clear(named("fresh"));

        assert_eq!(history.len(), 1);
        assert_eq!(current_name(&history), "fresh");
        assert!(!history.can_undo());
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut history = History::with_capacity(0);
        history.push(named("a"));
        history.push(named("b"));
        assert_eq!(history.len(), 1);
        assert_eq!(current_name(&history), "b");
    }
}
