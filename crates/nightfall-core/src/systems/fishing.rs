//! Fishing mini-game: cast, wait, bite, reel.
//!
//! ```text
//! Idle --cast--> Waiting --wait elapsed--> BiteOpen --reel--> caught  -> Idle
//!                   |                          |
//!                   +--reel--> empty -> Idle   +--window closes--> escaped -> Idle
//! ```
//!
//! The bite window is closed by a deferred effect tagged with the session
//! id; a reel that already resolved the session makes that effect stale.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::{PlayerBody, Vec3};
use crate::config::FishingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FishingSession {
    pub id: u64,
    pub wait_remaining: f32,
    pub bite_open: bool,
    /// Float marker; sits on the surface and dips on a bite.
    pub marker: Vec3,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    Caught,
    /// Reeled in before anything bit.
    Empty,
    Escaped,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FishingController {
    pub session: Option<FishingSession>,
    next_id: u64,
}

impl FishingController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Start a session. Returns `None` if one is already running.
    pub fn cast(&mut self, body: &PlayerBody, config: &FishingConfig, rng: &mut impl Rng) -> Option<FishingSession> {
        if self.session.is_some() {
            return None;
        }
        self.next_id += 1;
        let wait_remaining = if config.wait_max > config.wait_min {
            rng.gen_range(config.wait_min..config.wait_max)
        } else {
            config.wait_min
        };
        let ahead = body.position + body.facing * config.cast_distance;
        let session = FishingSession {
            id: self.next_id,
            wait_remaining,
            bite_open: false,
            marker: Vec3::new(ahead.x, config.surface_height, ahead.z),
        };
        self.session = Some(session);
        log::info!("Cast line (session {}, bite in {:.1})", session.id, wait_remaining);
        Some(session)
    }

    /// Reel in the active session, if any.
    pub fn reel(&mut self) -> Option<Resolution> {
        let session = self.session.take()?;
        let resolution = if session.bite_open {
            Resolution::Caught
        } else {
            Resolution::Empty
        };
        log::info!("Reeled in session {}: {:?}", session.id, resolution);
        Some(resolution)
    }

    /// The bite window for `session` ran out. Ignored if that session
    /// already ended.
    pub fn close_window(&mut self, session: u64) -> Option<Resolution> {
        match self.session {
            Some(s) if s.id == session && s.bite_open => {
                self.session = None;
                log::info!("Fish escaped from session {}", session);
                Some(Resolution::Escaped)
            }
            _ => None,
        }
    }
}

/// Count down the wait. Returns the session id on the tick a bite opens.
pub fn fishing_system(controller: &mut FishingController, delta: f32, config: &FishingConfig) -> Option<u64> {
    let session = controller.session.as_mut()?;
    if session.bite_open {
        return None;
    }
    session.wait_remaining -= delta;
    if session.wait_remaining > 0.0 {
        return None;
    }
    session.bite_open = true;
    session.marker.y = config.bite_height;
    log::debug!("Bite on session {}", session.id);
    Some(session.id)
}
