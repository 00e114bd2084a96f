//! Split point discovery
//!
//! The split point of two branch heads is the commit a three-way merge compares both sides
//! against. It is found with two breadth-first searches:
//!
//! 1. Walk every ancestor of the current head (the head included), first parent before
//!    merge parent, marking each one as visited from the current side
//! 2. Walk the ancestors of the target head in the same order and return the first commit
//!    already visited from the current side
//!
//! The result is a common ancestor closest to the target head in breadth-first order. In
//! criss-cross histories with several best common ancestors it is one of them, but not
//! necessarily the lowest one.

use crate::artifacts::objects::object_id::ObjectId;
use bitflags::bitflags;
use std::collections::{HashMap, VecDeque};
use std::fmt;

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    struct VisitState: u8 {
        const NONE = 0b00;
        const VISITED_FROM_CURRENT = 0b01;
        const VISITED_FROM_TARGET = 0b10;
    }
}

impl fmt::Debug for VisitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags = Vec::new();
        if self.contains(VisitState::VISITED_FROM_CURRENT) {
            flags.push("CURRENT");
        }
        if self.contains(VisitState::VISITED_FROM_TARGET) {
            flags.push("TARGET");
        }
        if flags.is_empty() {
            write!(f, "NONE")
        } else {
            write!(f, "{}", flags.join("|"))
        }
    }
}

/// Finds the split point of two commits
///
/// # Type Parameters
///
/// * `ParentsLoaderFn` - Returns the parents of a commit, first parent first. Root commits
///   have no parents.
pub struct SplitFinder<ParentsLoaderFn>
where
    ParentsLoaderFn: Fn(&ObjectId) -> anyhow::Result<Vec<ObjectId>>,
{
    parents_loader: ParentsLoaderFn,
}

impl<ParentsLoaderFn> SplitFinder<ParentsLoaderFn>
where
    ParentsLoaderFn: Fn(&ObjectId) -> anyhow::Result<Vec<ObjectId>>,
{
    pub fn new(parents_loader: ParentsLoaderFn) -> Self {
        Self { parents_loader }
    }

    /// Split point of `current` and `target`, or `None` for unrelated histories
    pub fn find_split_point(
        &self,
        current: &ObjectId,
        target: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        let mut states = HashMap::<ObjectId, VisitState>::new();

        self.walk(current, &mut states, VisitState::VISITED_FROM_CURRENT, |_| false)?;
        let split = self.walk(target, &mut states, VisitState::VISITED_FROM_TARGET, |state| {
            state.contains(VisitState::VISITED_FROM_CURRENT)
        })?;

        log::debug!(
            "split point of {current} and {target}: {}",
            split
                .as_ref()
                .map(ObjectId::to_string)
                .unwrap_or_else(|| "none".to_string())
        );

        Ok(split)
    }

    /// Breadth-first walk from `start`, returning the first commit whose prior state satisfies
    /// `stop`
    fn walk(
        &self,
        start: &ObjectId,
        states: &mut HashMap<ObjectId, VisitState>,
        side: VisitState,
        stop: impl Fn(VisitState) -> bool,
    ) -> anyhow::Result<Option<ObjectId>> {
        let mut queue = VecDeque::from([start.clone()]);

        while let Some(commit_id) = queue.pop_front() {
            let state = states.get(&commit_id).copied().unwrap_or(VisitState::NONE);

            if stop(state) {
                return Ok(Some(commit_id));
            }
            if state.contains(side) {
                continue;
            }
            states.insert(commit_id.clone(), state | side);

            for parent_id in (self.parents_loader)(&commit_id)? {
                let parent_state = states.get(&parent_id).copied().unwrap_or(VisitState::NONE);
                if !parent_state.contains(side) || stop(parent_state) {
                    queue.push_back(parent_id);
                }
            }
        }

        Ok(None)
    }
}
