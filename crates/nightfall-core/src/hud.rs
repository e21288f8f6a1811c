//! Transient presentation state: the message line, tool recoil, and the
//! damage vignette.
//!
//! Message and recoil each bump a generation when started. The matching
//! deferred effect only applies if its generation is still current.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    message: Option<String>,
    message_generation: u64,
    recoiling: bool,
    recoil_generation: u64,
    /// Damage overlay strength in [0, 1].
    pub vignette: f32,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_recoiling(&self) -> bool {
        self.recoiling
    }

    /// Replace the message line. Returns the generation to clear it with.
    pub fn show(&mut self, text: impl Into<String>) -> u64 {
        self.message_generation += 1;
        self.message = Some(text.into());
        self.message_generation
    }

    /// Clear the message if nothing newer replaced it.
    pub fn clear_message(&mut self, generation: u64) -> bool {
        if generation != self.message_generation {
            return false;
        }
        self.message = None;
        true
    }

    pub fn start_recoil(&mut self) -> u64 {
        self.recoil_generation += 1;
        self.recoiling = true;
        self.recoil_generation
    }

    pub fn end_recoil(&mut self, generation: u64) -> bool {
        if generation != self.recoil_generation {
            return false;
        }
        self.recoiling = false;
        true
    }

    pub fn set_vignette(&mut self, value: f32) {
        self.vignette = value.clamp(0.0, 1.0);
    }
}
