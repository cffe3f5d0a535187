//! Idle → Processing → Idle submit flow shared by every form.
//!
//! Waiting goes through [`Delay`] so the flow can be driven to completion
//! in tests without real timers.

use std::future::Future;
use std::time::Duration;

use futures::future::LocalBoxFuture;

use crate::error::{DashboardError, Result};

pub trait Delay {
    fn wait(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Browser timer backed delay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimerDelay;

impl Delay for TimerDelay {
    fn wait(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(yew::platform::time::sleep(duration))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Processing,
}

impl SubmitPhase {
    pub fn begin(self) -> Result<SubmitPhase> {
        match self {
            SubmitPhase::Idle => Ok(SubmitPhase::Processing),
            SubmitPhase::Processing => Err(DashboardError::AlreadyProcessing),
        }
    }

    pub fn is_processing(self) -> bool {
        self == SubmitPhase::Processing
    }
}

/// Labels of one submit control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitLabels {
    pub idle: &'static str,
    pub busy: &'static str,
}

impl SubmitLabels {
    pub const fn new(idle: &'static str, busy: &'static str) -> Self {
        SubmitLabels { idle, busy }
    }

    pub fn for_phase(self, phase: SubmitPhase) -> &'static str {
        match phase {
            SubmitPhase::Idle => self.idle,
            SubmitPhase::Processing => self.busy,
        }
    }
}

/// Reports `Processing`, runs `work`, then reports `Idle` whatever the
/// outcome was.
pub async fn drive_submission<T, F, W>(set_phase: F, work: W) -> T
where
    F: Fn(SubmitPhase),
    W: Future<Output = T>,
{
    set_phase(SubmitPhase::Processing);
    let outcome = work.await;
    set_phase(SubmitPhase::Idle);
    outcome
}

/// Stand-in for a backend round trip: waits, then yields `value`.
pub async fn simulated<T, D: Delay + ?Sized>(delay: &D, duration: Duration, value: T) -> T {
    delay.wait(duration).await;
    value
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Resolves immediately and records every requested duration.
    #[derive(Clone, Default)]
    pub struct ImmediateDelay {
        pub requested: Rc<RefCell<Vec<Duration>>>,
    }

    impl Delay for ImmediateDelay {
        fn wait(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
            self.requested.borrow_mut().push(duration);
            Box::pin(async {})
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ImmediateDelay;
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[test]
    fn phases_go_processing_then_idle() {
        let seen = RefCell::new(Vec::new());
        let delay = ImmediateDelay::default();
        let result = block_on(drive_submission(
            |p| seen.borrow_mut().push(p),
            simulated(&delay, Duration::from_millis(3000), "done"),
        ));
        assert_eq!(result, "done");
        assert_eq!(*seen.borrow(), vec![SubmitPhase::Processing, SubmitPhase::Idle]);
        assert_eq!(*delay.requested.borrow(), vec![Duration::from_millis(3000)]);
    }

    #[test]
    fn failed_work_still_returns_to_idle() {
        let seen = RefCell::new(Vec::new());
        let result: Result<()> = block_on(drive_submission(
            |p| seen.borrow_mut().push(p),
            async { Err(DashboardError::Http("offline".into())) },
        ));
        assert!(matches!(result, Err(DashboardError::Http(_))));
        assert_eq!(seen.borrow().last(), Some(&SubmitPhase::Idle));
    }

    #[test]
    fn second_submit_while_processing_is_rejected() {
        let phase = SubmitPhase::default().begin().unwrap();
        assert!(phase.is_processing());
        assert!(matches!(phase.begin(), Err(DashboardError::AlreadyProcessing)));
    }

    #[test]
    fn labels_follow_phase() {
        let labels = SubmitLabels::new("Create Investment", "Creating Investment...");
        assert_eq!(labels.for_phase(SubmitPhase::Idle), "Create Investment");
        assert_eq!(labels.for_phase(SubmitPhase::Processing), "Creating Investment...");
    }
}
