//! Mount/unmount bookkeeping for the animated parts of the switch.
//!
//! Each animated element is tracked by key with a [`Phase`]. Making a key
//! current retires every other key, and the component's scheduler later
//! settles entering keys and drops exited ones. Every phase change carries a
//! generation so a late timer from an interrupted transition is ignored.

use std::time::Duration;

use super::state::{Edge, ToggleSide, VisualVariant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Steady,
    Exiting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresenceEntry<K> {
    pub key: K,
    pub phase: Phase,
    pub generation: u64,
}

/// Work the scheduler has to do after [`Presence::show`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresenceChange<K> {
    pub entered: Option<(K, u64)>,
    pub exited: Vec<(K, u64)>,
}

impl<K> PresenceChange<K> {
    pub fn is_empty(&self) -> bool {
        self.entered.is_none() && self.exited.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presence<K> {
    entries: Vec<PresenceEntry<K>>,
    next_generation: u64,
}

impl<K: Copy + PartialEq> Presence<K> {
    /// Starts with `current` already mounted, skipping its enter transition.
    pub fn new(current: K) -> Self {
        Presence {
            entries: vec![PresenceEntry {
                key: current,
                phase: Phase::Steady,
                generation: 0,
            }],
            next_generation: 1,
        }
    }

    fn bump(&mut self) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;
        generation
    }

    /// Makes `key` the current element. An exiting `key` is reversed in place
    /// rather than re-mounted.
    pub fn show(&mut self, key: K) -> PresenceChange<K> {
        let mut exited = Vec::new();
        for index in 0..self.entries.len() {
            let entry = self.entries[index];
            if entry.key != key && entry.phase != Phase::Exiting {
                let generation = self.bump();
                self.entries[index].phase = Phase::Exiting;
                self.entries[index].generation = generation;
                exited.push((entry.key, generation));
            }
        }

        let entered = match self.entries.iter().position(|entry| entry.key == key) {
            Some(index) if self.entries[index].phase == Phase::Exiting => {
                let generation = self.bump();
                self.entries[index].phase = Phase::Entering;
                self.entries[index].generation = generation;
                Some((key, generation))
            }
            Some(_) => None,
            None => {
                let generation = self.bump();
                self.entries.push(PresenceEntry {
                    key,
                    phase: Phase::Entering,
                    generation,
                });
                Some((key, generation))
            }
        };

        PresenceChange { entered, exited }
    }

    /// Entering -> steady, if nothing interrupted the entry since `generation`.
    pub fn settle(&mut self, key: K, generation: u64) -> bool {
        match self.entry_mut(key, generation) {
            Some(entry) if entry.phase == Phase::Entering => {
                entry.phase = Phase::Steady;
                true
            }
            _ => false,
        }
    }

    /// Unmounts an exited entry, if it was not brought back since `generation`.
    pub fn remove_exited(&mut self, key: K, generation: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| {
            !(entry.key == key && entry.generation == generation && entry.phase == Phase::Exiting)
        });
        before != self.entries.len()
    }

    /// Finishes every transition at once. Used where no timers run.
    pub fn finish_all(&mut self) {
        self.entries.retain(|entry| entry.phase != Phase::Exiting);
        for entry in &mut self.entries {
            entry.phase = Phase::Steady;
        }
    }

    fn entry_mut(&mut self, key: K, generation: u64) -> Option<&mut PresenceEntry<K>> {
        self.entries
            .iter_mut()
            .find(|entry| entry.key == key && entry.generation == generation)
    }

    pub fn phase_of(&self, key: K) -> Option<Phase> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.phase)
    }

    pub fn mounted(&self) -> Vec<K> {
        self.entries.iter().map(|entry| entry.key).collect()
    }

    pub fn is_settled(&self) -> bool {
        self.entries.iter().all(|entry| entry.phase == Phase::Steady)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ThumbState {
    Resting(Edge),
    Moving { to: Edge, generation: u64 },
}

/// Position of the round thumb. It is either resting on an edge or travelling
/// toward one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThumbMotion {
    state: ThumbState,
    next_generation: u64,
}

impl ThumbMotion {
    pub fn resting_at(side: ToggleSide) -> Self {
        ThumbMotion {
            state: ThumbState::Resting(VisualVariant::for_side(side).thumb_edge),
            next_generation: 1,
        }
    }

    /// Where the thumb is, or is heading.
    pub fn target(&self) -> Edge {
        match self.state {
            ThumbState::Resting(edge) => edge,
            ThumbState::Moving { to, .. } => to,
        }
    }

    pub fn resting_edge(&self) -> Option<Edge> {
        match self.state {
            ThumbState::Resting(edge) => Some(edge),
            ThumbState::Moving { .. } => None,
        }
    }

    /// Starts a move toward `side`. A move already in flight is redirected.
    pub fn move_to(&mut self, side: ToggleSide) -> Option<u64> {
        let to = VisualVariant::for_side(side).thumb_edge;
        if self.target() == to {
            return None;
        }
        let generation = self.next_generation;
        self.next_generation += 1;
        self.state = ThumbState::Moving { to, generation };
        Some(generation)
    }

    pub fn arrive(&mut self, generation: u64) -> bool {
        match self.state {
            ThumbState::Moving {
                to,
                generation: current,
            } if current == generation => {
                self.state = ThumbState::Resting(to);
                true
            }
            _ => false,
        }
    }
}

/// Timing of one CSS transition. `bounce: 0` springs are close enough to an
/// ease-out curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionSpec {
    pub delay_ms: u64,
    pub duration_ms: u64,
}

const EASE_OUT: &str = "cubic-bezier(0.22, 1, 0.36, 1)";

impl TransitionSpec {
    pub const OVERLAY: TransitionSpec = TransitionSpec::new(0, 600);
    pub const THUMB: TransitionSpec = TransitionSpec::new(0, 600);
    pub const LABEL_ENTER: TransitionSpec = TransitionSpec::new(100, 600);
    pub const LABEL_EXIT: TransitionSpec = TransitionSpec::new(0, 300);

    pub const fn new(delay_ms: u64, duration_ms: u64) -> Self {
        TransitionSpec {
            delay_ms,
            duration_ms,
        }
    }

    pub fn total(&self) -> Duration {
        Duration::from_millis(self.delay_ms + self.duration_ms)
    }

    /// A `transition` CSS value animating each of `properties`.
    pub fn css(&self, properties: &[&str]) -> String {
        properties
            .iter()
            .map(|property| {
                format!(
                    "{property} {}ms {EASE_OUT} {}ms",
                    self.duration_ms, self.delay_ms
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
