//! Mock compositor for unit testing.
//!
//! Records every submitted layout so tests can assert on the exact sequence
//! the controller produced, and can be armed to fail the next submission.

use std::sync::Mutex;

use gridcast_core::MixLayout;

use crate::application::control_loop::{Compositor, CompositorError};

/// A [`Compositor`] implementation that captures submissions.
#[derive(Debug, Default)]
pub struct CapturingCompositor {
    submitted: Mutex<Vec<MixLayout>>,
    fail_next: Mutex<bool>,
}

impl CapturingCompositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every layout successfully submitted so far.
    pub fn submitted(&self) -> Vec<MixLayout> {
        self.submitted.lock().expect("lock poisoned").clone()
    }

    /// Makes the next `submit` call fail with [`CompositorError::Rejected`].
    pub fn fail_next_submission(&self) {
        *self.fail_next.lock().expect("lock poisoned") = true;
    }
}

impl Compositor for CapturingCompositor {
    fn submit(&self, layout: &MixLayout) -> Result<(), CompositorError> {
        let mut fail = self.fail_next.lock().expect("lock poisoned");
        if *fail {
            *fail = false;
            return Err(CompositorError::Rejected("armed test failure".into()));
        }
        self.submitted
            .lock()
            .expect("lock poisoned")
            .push(layout.clone());
        Ok(())
    }
}
