//! Host navigation history.
//!
//! [`History`] is the seam to whatever owns the address bar. The router only
//! ever reads the current entry, pushes, replaces, or steps back.
//! Changes the user makes (back, forward, typing a link) arrive separately
//! through [`Router::notify`](crate::Router::notify).

use std::collections::VecDeque;

/// Router bookkeeping stored with a history entry, the way a browser keeps
/// `history.state` next to each URL.
///
/// The entry beneath an entry never changes while that entry exists, so the
/// mark stays true across back and forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryState {
    /// The entry was pushed by the router directly over a list entry.
    pub over_list: bool,
}

impl EntryState {
    pub const OVER_LIST: Self = Self { over_list: true };
}

/// A navigation history of URL fragments.
pub trait History {
    /// Fragment of the current entry, without `#`.
    fn fragment(&self) -> String;

    /// Bookkeeping of the current entry. Entries the user created carry the default.
    fn state(&self) -> EntryState;

    /// Add an entry after the current one, discarding any forward entries.
    fn push(&mut self, fragment: &str, state: EntryState);

    /// Overwrite the current entry.
    fn replace(&mut self, fragment: &str, state: EntryState);

    /// Step back one entry. Returns `false` when there is nothing to go back to.
    ///
    /// Hosts report the resulting change like any other back navigation.
    fn back(&mut self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    fragment: String,
    state: EntryState,
}

impl Entry {
    fn new(fragment: &str, state: EntryState) -> Self {
        Self {
            fragment: normalize(fragment),
            state,
        }
    }
}

/// In-memory history used by headless hosts and tests.
///
/// Mimics a browser tab: [`back`](History::back), [`forward`](Self::forward)
/// and [`visit`](Self::visit) queue a change notification, while
/// [`push`](History::push) and [`replace`](History::replace) are silent.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Entry>,
    cursor: usize,
    changes: VecDeque<String>,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHistory {
    /// A history with one entry and an empty fragment.
    pub fn new() -> Self {
        Self::starting_at("")
    }

    /// A history whose first entry is `fragment`, as when a page is opened
    /// through a deep link.
    pub fn starting_at(fragment: &str) -> Self {
        Self {
            entries: vec![Entry::new(fragment, EntryState::default())],
            cursor: 0,
            changes: VecDeque::new(),
        }
    }

    /// Move forward one entry if there is one.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        self.changes.push_back(self.entries[self.cursor].fragment.clone());
        true
    }

    /// The user typed or followed a link to `fragment`.
    pub fn visit(&mut self, fragment: &str) {
        let fragment = normalize(fragment);
        if fragment == self.entries[self.cursor].fragment {
            return;
        }
        self.push(&fragment, EntryState::default());
        self.changes.push_back(fragment);
    }

    /// Drain queued change notifications, oldest first.
    pub fn take_changes(&mut self) -> Vec<String> {
        self.changes.drain(..).collect()
    }

    /// Fragments of every entry, oldest first.
    pub fn entries(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.fragment.as_str()).collect()
    }

    /// Index of the current entry.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl History for MemoryHistory {
    fn fragment(&self) -> String {
        self.entries[self.cursor].fragment.clone()
    }

    fn state(&self) -> EntryState {
        self.entries[self.cursor].state
    }

    fn push(&mut self, fragment: &str, state: EntryState) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(Entry::new(fragment, state));
        self.cursor += 1;
    }

    fn replace(&mut self, fragment: &str, state: EntryState) {
        self.entries[self.cursor] = Entry::new(fragment, state);
    }

    fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.changes.push_back(self.entries[self.cursor].fragment.clone());
        true
    }
}

fn normalize(fragment: &str) -> String {
    crate::fragment::strip_marker(fragment).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_truncates_forward_entries() {
        let mut history = MemoryHistory::new();
        history.push("dest/a", EntryState::OVER_LIST);
        history.push("dest/b", EntryState::default());
        assert!(history.back());
        history.push("dest/c", EntryState::default());
        assert_eq!(history.entries(), ["", "dest/a", "dest/c"]);
        assert!(!history.forward());
    }

    #[test]
    fn only_user_navigation_is_reported() {
        let mut history = MemoryHistory::new();
        history.push("dest/a", EntryState::OVER_LIST);
        history.replace("dest/b", EntryState::OVER_LIST);
        assert!(history.take_changes().is_empty());

        assert!(history.back());
        assert!(history.forward());
        history.visit("#dest/c");
        assert_eq!(history.take_changes(), ["", "dest/b", "dest/c"]);
        assert_eq!(history.fragment(), "dest/c");
    }

    #[test]
    fn back_at_first_entry_leaves_the_page() {
        let mut history = MemoryHistory::starting_at("#dest/a");
        assert_eq!(history.fragment(), "dest/a");
        assert!(!history.back());
        assert!(history.take_changes().is_empty());
    }

    #[test]
    fn visiting_the_current_fragment_is_a_no_op() {
        let mut history = MemoryHistory::starting_at("dest/a");
        history.visit("dest/a");
        assert_eq!(history.len(), 1);
        assert!(history.take_changes().is_empty());
    }

    #[test]
    fn entry_state_survives_back_and_forward() {
        let mut history = MemoryHistory::new();
        history.push("dest/a", EntryState::OVER_LIST);
        assert!(history.back());
        assert_eq!(history.state(), EntryState::default());
        assert!(history.forward());
        assert_eq!(history.state(), EntryState::OVER_LIST);

        history.visit("dest/b");
        assert_eq!(history.state(), EntryState::default());
    }
}
