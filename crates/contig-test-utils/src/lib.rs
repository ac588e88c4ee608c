//! Test utilities and instrumented element types for contig development.
//!
//! - [`ProbeSet`] / [`Probe`]: elements that count live instances and can be
//!   armed to panic after a fixed number of clones, for checking that bulk
//!   operations neither leak nor double-drop when a copy fails.
//! - [`fixtures`]: ready-made vectors and the reference growth model.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Message carried by the panic a [`Probe`] raises when its set's clone
/// budget is exhausted.
pub const CLONE_BUDGET_EXHAUSTED: &str = "probe clone budget exhausted";

struct ProbeState {
    live: AtomicUsize,
    clones: AtomicUsize,
    clone_budget: Option<usize>,
}

/// Factory and counters for a family of [`Probe`]s.
///
/// Every probe created by the set, or cloned from one, counts as live until
/// dropped. With a clone budget, the clone after the budget is used up
/// panics with [`CLONE_BUDGET_EXHAUSTED`].
#[derive(Clone)]
pub struct ProbeSet {
    state: Arc<ProbeState>,
}

impl ProbeSet {
    /// A set whose probes clone without limit.
    pub fn unlimited() -> Self {
        Self::build(None)
    }

    /// A set whose probes allow `budget` successful clones in total.
    pub fn with_clone_budget(budget: usize) -> Self {
        Self::build(Some(budget))
    }

    fn build(clone_budget: Option<usize>) -> Self {
        Self {
            state: Arc::new(ProbeState {
                live: AtomicUsize::new(0),
                clones: AtomicUsize::new(0),
                clone_budget,
            }),
        }
    }

    /// Create a tracked probe carrying `value`.
    pub fn probe(&self, value: i32) -> Probe {
        self.state.live.fetch_add(1, Ordering::Relaxed);
        Probe {
            value,
            state: Some(Arc::clone(&self.state)),
        }
    }

    /// Create one probe per value.
    pub fn probes(&self, values: impl IntoIterator<Item = i32>) -> Vec<Probe> {
        values.into_iter().map(|v| self.probe(v)).collect()
    }

    /// Number of tracked probes not yet dropped.
    pub fn live(&self) -> usize {
        self.state.live.load(Ordering::Relaxed)
    }

    /// Number of successful clones so far.
    pub fn clones(&self) -> usize {
        self.state.clones.load(Ordering::Relaxed)
    }
}

/// An `i32` wrapper instrumented by its [`ProbeSet`].
///
/// `Probe::default()` is untracked: it belongs to no set, is never counted
/// and never panics. That keeps default-filled buffer slots out of the
/// counts.
#[derive(Default)]
pub struct Probe {
    pub value: i32,
    state: Option<Arc<ProbeState>>,
}

impl Probe {
    /// Whether this probe is counted by a set.
    pub fn is_tracked(&self) -> bool {
        self.state.is_some()
    }
}

impl Clone for Probe {
    fn clone(&self) -> Self {
        if let Some(state) = &self.state {
            let made = state.clones.load(Ordering::Relaxed);
            if state.clone_budget.is_some_and(|budget| made >= budget) {
                panic!("{CLONE_BUDGET_EXHAUSTED}");
            }
            state.clones.fetch_add(1, Ordering::Relaxed);
            state.live.fetch_add(1, Ordering::Relaxed);
        }
        Self {
            value: self.value,
            state: self.state.clone(),
        }
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        if let Some(state) = &self.state {
            state.live.fetch_sub(1, Ordering::Relaxed);
        }
    }
}

impl PartialEq for Probe {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialOrd for Probe {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl fmt::Debug for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Probe({})", self.value)
    }
}
