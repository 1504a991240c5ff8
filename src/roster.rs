//! Bounded CR roster
//!
//! Insertion-ordered list of CR identifiers, each carrying at most one
//! assigned participant. Capped at a fixed capacity; adding past the cap
//! evicts the oldest entry together with its assignment.

use serde::{Deserialize, Serialize};

/// One roster entry: a CR identifier plus whoever it is assigned to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrSlot {
    pub id: String,
    pub assignee: Option<String>,
}

/// Bounded, insertion-ordered CR list with per-entry assignments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterStore {
    slots: Vec<CrSlot>,
    capacity: usize,
}

impl RosterStore {
    /// Create an empty roster holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// All slots in insertion order
    pub fn slots(&self) -> &[CrSlot] {
        &self.slots
    }

    /// Slot at the given roster position
    pub fn get(&self, index: usize) -> Option<&CrSlot> {
        self.slots.get(index)
    }

    /// Oldest CR id still in the roster
    pub fn first_id(&self) -> Option<&str> {
        self.slots.first().map(|s| s.id.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.slots.iter().any(|s| s.id == id)
    }

    /// Add a CR, evicting the oldest entry (and its assignment) at capacity.
    /// Blank or whitespace-only input is ignored. Returns whether an entry
    /// was added.
    pub fn add(&mut self, id: &str) -> bool {
        let id = id.trim();
        if id.is_empty() {
            return false;
        }
        if self.slots.len() >= self.capacity {
            let evicted = self.slots.remove(0);
            log::info!("Roster full, evicted CR {}", evicted.id);
        }
        self.slots.push(CrSlot {
            id: id.to_string(),
            assignee: None,
        });
        log::info!("Added CR: {}. List size: {}", id, self.slots.len());
        true
    }

    /// Remove the first slot matching `id`, dropping its assignment with it.
    /// Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.slots.iter().position(|s| s.id == id) {
            Some(index) => {
                self.slots.remove(index);
                log::info!("Removed CR: {id}");
                true
            }
            None => false,
        }
    }

    /// Assign a participant to the first slot matching `id`, overwriting any
    /// previous assignee. Silent no-op if the CR is not in the roster.
    pub fn assign(&mut self, id: &str, assignee: &str) -> bool {
        match self.slots.iter_mut().find(|s| s.id == id) {
            Some(slot) => {
                slot.assignee = Some(assignee.to_string());
                log::info!("Assigned {assignee} to CR {id}");
                true
            }
            None => false,
        }
    }

    /// `(id, assignee)` pairs for assigned slots, in insertion order
    pub fn assignments(&self) -> impl Iterator<Item = (&str, &str)> {
        self.slots
            .iter()
            .filter_map(|s| s.assignee.as_deref().map(|a| (s.id.as_str(), a)))
    }
}
