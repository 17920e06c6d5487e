//! Deep-link router.
//!
//! Keeps the host history in step with the view target:
//!
//! - Opening a detail from the list pushes one entry, so back returns to the
//!   list instead of leaving the page.
//! - Closing a detail the router pushed over the list steps back instead of
//!   pushing, so the history never holds a spurious list entry. The mark lives
//!   on the entry itself and survives back and forward.
//! - Its own steps back are recognised when the host reports them and are not
//!   fed into the controller a second time.

use std::collections::VecDeque;
use std::fmt;

use catalog_model::ViewTarget;

use crate::fragment::{fragment_for, parse_fragment, strip_marker};
use crate::history::{EntryState, History};

type ChangeListener = Box<dyn FnMut(&ViewTarget)>;

pub struct Router<H: History> {
    history: H,
    /// Targets the host is about to report, one per own `back()`, oldest first.
    expected_echoes: VecDeque<ViewTarget>,
    listener: Option<ChangeListener>,
}

impl<H: History + fmt::Debug> fmt::Debug for Router<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("history", &self.history)
            .field("expected_echoes", &self.expected_echoes)
            .finish_non_exhaustive()
    }
}

impl<H: History> Router<H> {
    pub fn new(history: H) -> Self {
        Self {
            history,
            expected_echoes: VecDeque::new(),
            listener: None,
        }
    }

    /// The target named by the current history entry.
    pub fn current_target(&self) -> ViewTarget {
        parse_fragment(&self.history.fragment())
    }

    /// Record a user-initiated navigation.
    pub fn navigate_to(&mut self, target: &ViewTarget) {
        let fragment = fragment_for(target);
        if self.history.fragment() == fragment {
            return;
        }

        match target {
            ViewTarget::Detail(_) if self.current_target().is_list() => {
                self.history.push(&fragment, EntryState::OVER_LIST);
            }
            ViewTarget::Detail(_) => {
                // Detail to detail swaps the entry so back still lands on the list.
                let state = self.history.state();
                self.history.replace(&fragment, state);
            }
            ViewTarget::List if self.history.state().over_list && self.history.back() => {
                tracing::trace!("Closed detail by stepping back");
                self.expected_echoes.push_back(ViewTarget::List);
            }
            ViewTarget::List => {
                self.history.replace(&fragment, EntryState::default());
            }
        }
        tracing::debug!(fragment = %fragment, "Router navigated");
    }

    /// Canonicalise the current entry without adding history.
    pub fn replace_with(&mut self, target: &ViewTarget) {
        let fragment = fragment_for(target);
        if self.history.fragment() == fragment {
            return;
        }
        let state = if target.is_list() {
            EntryState::default()
        } else {
            self.history.state()
        };
        self.history.replace(&fragment, state);
        tracing::debug!(fragment = %fragment, "Router replaced entry");
    }

    /// Register the callback for navigation the router did not initiate.
    pub fn on_external_change(&mut self, listener: impl FnMut(&ViewTarget) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// The host reports that the current fragment changed.
    ///
    /// Returns the new target for external changes, or `None` when the change
    /// is the echo of one of the router's own steps back.
    pub fn notify(&mut self, fragment: &str) -> Option<ViewTarget> {
        let target = parse_fragment(fragment);
        if self.expected_echoes.front() == Some(&target) {
            self.expected_echoes.pop_front();
            tracing::trace!(fragment = strip_marker(fragment), "Ignored own navigation");
            return None;
        }

        // The user moved elsewhere; pending echoes will never arrive as expected.
        self.expected_echoes.clear();
        tracing::debug!(fragment = strip_marker(fragment), "External route change");
        if let Some(listener) = self.listener.as_mut() {
            listener(&target);
        }
        Some(target)
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use catalog_model::ItemId;

    use super::*;
    use crate::history::MemoryHistory;

    fn detail(id: &str) -> ViewTarget {
        ViewTarget::Detail(ItemId::new(id).unwrap())
    }

    #[test]
    fn open_then_close_leaves_a_single_list_entry() {
        let mut router = Router::new(MemoryHistory::new());
        router.navigate_to(&detail("a"));
        assert_eq!(router.history().entries(), ["", "dest/a"]);

        router.navigate_to(&ViewTarget::List);
        assert_eq!(router.current_target(), ViewTarget::List);
        assert_eq!(router.history().position(), 0);

        let echo = router.history_mut().take_changes();
        assert_eq!(echo, [""]);
        assert_eq!(router.notify(&echo[0]), None);

        // One more back leaves the page.
        assert!(!router.history_mut().back());
    }

    #[test]
    fn detail_to_detail_replaces() {
        let mut router = Router::new(MemoryHistory::new());
        router.navigate_to(&detail("a"));
        router.navigate_to(&detail("b"));
        assert_eq!(router.history().entries(), ["", "dest/b"]);

        router.navigate_to(&ViewTarget::List);
        assert_eq!(router.history().position(), 0);
    }

    #[test]
    fn closing_a_deep_link_replaces() {
        let mut router = Router::new(MemoryHistory::starting_at("dest/a"));
        assert_eq!(router.current_target(), detail("a"));

        router.navigate_to(&ViewTarget::List);
        assert_eq!(router.history().entries(), [""]);
        assert!(router.history_mut().take_changes().is_empty());
    }

    #[test]
    fn navigating_to_the_current_target_adds_nothing() {
        let mut router = Router::new(MemoryHistory::new());
        router.navigate_to(&ViewTarget::List);
        router.navigate_to(&detail("a"));
        router.navigate_to(&detail("a"));
        assert_eq!(router.history().len(), 2);
    }

    #[test]
    fn replace_with_canonicalises_in_place() {
        let mut router = Router::new(MemoryHistory::starting_at("about"));
        router.replace_with(&ViewTarget::List);
        assert_eq!(router.history().entries(), [""]);
    }

    #[test]
    fn external_changes_reach_the_listener() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut router = Router::new(MemoryHistory::new());
        router.on_external_change(move |target| sink.borrow_mut().push(target.clone()));

        router.navigate_to(&detail("a"));
        assert!(router.history_mut().back());
        for fragment in router.history_mut().take_changes() {
            assert_eq!(router.notify(&fragment), Some(ViewTarget::List));
        }
        assert_eq!(*seen.borrow(), vec![ViewTarget::List]);
    }

    #[test]
    fn closing_after_back_and_forward_still_steps_back() {
        let mut router = Router::new(MemoryHistory::new());
        router.navigate_to(&detail("a"));
        router.history_mut().back();
        router.history_mut().forward();
        for fragment in router.history_mut().take_changes() {
            router.notify(&fragment);
        }

        router.navigate_to(&ViewTarget::List);
        assert_eq!(router.history().entries(), ["", "dest/a"]);
        assert_eq!(router.history().position(), 0);
        assert!(!router.history_mut().back());
    }

    #[test]
    fn every_own_step_back_is_suppressed() {
        let mut router = Router::new(MemoryHistory::new());
        router.navigate_to(&detail("a"));
        router.navigate_to(&ViewTarget::List);
        router.navigate_to(&detail("b"));
        router.navigate_to(&ViewTarget::List);

        let changes = router.history_mut().take_changes();
        assert_eq!(changes, ["", ""]);
        for fragment in &changes {
            assert_eq!(router.notify(fragment), None);
        }
    }

    #[test]
    fn closing_a_visited_detail_replaces() {
        let mut router = Router::new(MemoryHistory::new());
        router.history_mut().visit("dest/a");
        for fragment in router.history_mut().take_changes() {
            router.notify(&fragment);
        }

        router.navigate_to(&ViewTarget::List);
        assert_eq!(router.history().entries(), ["", ""]);
        assert_eq!(router.history().position(), 1);
    }
}
