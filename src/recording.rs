//! Differentiable-recording capability.
//!
//! A surrounding solver may record the residual evaluation on an
//! algorithmic-differentiation tape. The analytic Jacobians must stay off the
//! tape, so the kernels wrap their implicit part in a [`PassiveScope`].
//! Passive regions are counted rather than toggled: edges evaluated on
//! several threads may overlap, and recording resumes only once the last
//! region is left, including during unwinding.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Start/stop switch of a differentiation tape.
pub trait Recording: Send + Sync {
    /// Whether operations are currently being recorded.
    fn is_recording(&self) -> bool;

    /// Enter a passive region. Recording stays off until every entered
    /// region has been left with [`resume`](Recording::resume).
    fn suspend(&self);

    /// Leave a passive region entered with [`suspend`](Recording::suspend).
    fn resume(&self);
}

/// Recording that is never active.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoRecording;

impl Recording for NoRecording {
    #[inline]
    fn is_recording(&self) -> bool {
        false
    }

    #[inline]
    fn suspend(&self) {}

    #[inline]
    fn resume(&self) {}
}

/// Thread-safe recording flag with a passive-region depth.
#[derive(Debug, Default)]
pub struct RecordingFlag {
    enabled: AtomicBool,
    passive_depth: AtomicUsize,
}

impl RecordingFlag {
    /// Create a flag in the given state.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
            passive_depth: AtomicUsize::new(0),
        }
    }

    /// Switch the tape on or off outside of passive regions.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    /// Number of passive regions currently entered.
    pub fn passive_depth(&self) -> usize {
        self.passive_depth.load(Ordering::Acquire)
    }
}

impl Recording for RecordingFlag {
    fn is_recording(&self) -> bool {
        self.enabled.load(Ordering::Acquire) && self.passive_depth() == 0
    }

    fn suspend(&self) {
        self.passive_depth.fetch_add(1, Ordering::AcqRel);
    }

    fn resume(&self) {
        self.passive_depth.fetch_sub(1, Ordering::AcqRel);
    }
}

/// Scope in which recording is suspended.
#[must_use = "recording resumes as soon as the scope is dropped"]
pub struct PassiveScope<'a> {
    recording: &'a dyn Recording,
    was_active: bool,
}

impl<'a> PassiveScope<'a> {
    /// Suspend recording until the returned guard is dropped.
    pub fn enter(recording: &'a dyn Recording) -> Self {
        let was_active = recording.is_recording();
        recording.suspend();
        Self {
            recording,
            was_active,
        }
    }

    /// Recording state on entry.
    pub fn was_active(&self) -> bool {
        self.was_active
    }
}

impl Drop for PassiveScope<'_> {
    fn drop(&mut self) {
        self.recording.resume();
    }
}
