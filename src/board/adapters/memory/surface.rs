//! Input surface that records listener registration.

use crate::board::{
    domain::{InputModality, PointerId},
    ports::InputSurface,
};
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Default)]
struct Registrations {
    attached: Vec<(PointerId, InputModality)>,
    attach_calls: usize,
    detach_calls: usize,
}

/// Tracks which pointers currently have gesture listeners attached.
#[derive(Debug, Default)]
pub struct RecordingInputSurface {
    registrations: Mutex<Registrations>,
}

impl RecordingInputSurface {
    /// Creates a surface with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns pointers with listeners currently attached.
    #[must_use]
    pub fn attached(&self) -> Vec<(PointerId, InputModality)> {
        self.registrations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .attached
            .clone()
    }

    /// Returns the number of attach calls so far.
    #[must_use]
    pub fn attach_calls(&self) -> usize {
        self.registrations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .attach_calls
    }

    /// Returns the number of detach calls so far.
    #[must_use]
    pub fn detach_calls(&self) -> usize {
        self.registrations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .detach_calls
    }
}

impl InputSurface for RecordingInputSurface {
    fn attach(&self, pointer_id: PointerId, modality: InputModality) {
        let mut registrations = self
            .registrations
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        registrations.attach_calls += 1;
        registrations.attached.push((pointer_id, modality));
    }

    fn detach(&self, pointer_id: PointerId) {
        let mut registrations = self
            .registrations
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        registrations.detach_calls += 1;
        registrations.attached.retain(|(id, _)| *id != pointer_id);
    }
}
