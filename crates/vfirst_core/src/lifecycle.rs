//! Whole-program lifecycle
//!
//! The bootstrap runs exactly one straight-line flow:
//!
//! ```text
//! Uninitialized -> WindowCreated -> InstanceRequested -> InstanceReady
//!               -> EventLoop -> Teardown -> Terminated
//! ```
//!
//! `InstanceRequested` may instead end in `InitFailed`. A window that cannot
//! be opened fails straight from `Uninitialized`. There are no retry edges.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Uninitialized,
    WindowCreated,
    InstanceRequested,
    InstanceReady,
    InitFailed,
    EventLoop,
    Teardown,
    Terminated,
}

impl Stage {
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::InitFailed | Stage::Terminated)
    }

    fn can_advance_to(self, next: Stage) -> bool {
        use Stage::*;

        matches!(
            (self, next),
            (Uninitialized, WindowCreated)
                | (Uninitialized, InitFailed)
                | (WindowCreated, InstanceRequested)
                | (InstanceRequested, InstanceReady)
                | (InstanceRequested, InitFailed)
                | (InstanceReady, EventLoop)
                | (EventLoop, Teardown)
                | (Teardown, Terminated)
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("illegal lifecycle transition {from:?} -> {to:?}")]
    IllegalTransition { from: Stage, to: Stage },
}

/// Tracks where the program is in its single init/run/teardown pass
#[derive(Debug)]
pub struct Lifecycle {
    stage: Stage,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            stage: Stage::Uninitialized,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn advance(&mut self, next: Stage) -> Result<(), LifecycleError> {
        if !self.stage.can_advance_to(next) {
            return Err(LifecycleError::IllegalTransition {
                from: self.stage,
                to: next,
            });
        }

        tracing::debug!(from = ?self.stage, to = ?next, "lifecycle transition");
        self.stage = next;
        Ok(())
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}
