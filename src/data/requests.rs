//! LabData: the view handed to side panels each frame.
//!
//! Panels read the session and record what they want done in
//! [`LabRequests`]; the owning widget applies the requests after all panels
//! have rendered, so every mutation goes through one place.

use crate::data::session::Session;

/// Requests raised by panel UI during a frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabRequests {
    /// Regenerate the point set with this noise level.
    pub regenerate: Option<i32>,
    /// The regeneration came from the noise slider (not the reset button).
    pub noise_changed: bool,
    /// Take a PNG screenshot of the window.
    pub screenshot: bool,
}

impl LabRequests {
    pub fn request_reset(&mut self, noise_level: i32) {
        self.regenerate = Some(noise_level);
    }

    pub fn request_noise(&mut self, noise_level: i32) {
        self.regenerate = Some(noise_level);
        self.noise_changed = true;
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Read-only session plus the request sink.
pub struct LabData<'a> {
    pub session: &'a Session,
    pub requests: &'a mut LabRequests,
}
