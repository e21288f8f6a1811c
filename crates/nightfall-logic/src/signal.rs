//! Radio signal readout - quantised distance to the nearest missing part.

use serde::{Deserialize, Serialize};

use crate::constants::quest::{SIGNAL_CLOSE, SIGNAL_VERY_CLOSE, SIGNAL_WEAK};

/// Strength band of the signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SignalBand {
    None,
    Weak,
    Close,
    VeryClose,
}

impl SignalBand {
    pub fn from_distance(distance: f32) -> Self {
        if distance < SIGNAL_VERY_CLOSE {
            Self::VeryClose
        } else if distance < SIGNAL_CLOSE {
            Self::Close
        } else if distance < SIGNAL_WEAK {
            Self::Weak
        } else {
            Self::None
        }
    }
}

/// What the HUD's signal line shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalReadout {
    Band(SignalBand),
    /// Every part has been found; head back to the wreck.
    AllFound,
}

impl SignalReadout {
    /// Readout from the distances to each remaining part.
    pub fn from_distances(distances: impl IntoIterator<Item = f32>) -> Self {
        distances
            .into_iter()
            .fold(None, |nearest: Option<f32>, d| {
                Some(nearest.map_or(d, |n| n.min(d)))
            })
            .map_or(Self::AllFound, |d| Self::Band(SignalBand::from_distance(d)))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Band(SignalBand::VeryClose) => "_/\\_ (VERY CLOSE!)",
            Self::Band(SignalBand::Close) => "--/-- (Close)",
            Self::Band(SignalBand::Weak) => "___-_ (Weak signal)",
            Self::Band(SignalBand::None) => "_____ (No signal)",
            Self::AllFound => "ALL PARTS FOUND! GO TO THE VAN!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(SignalBand::from_distance(9.99), SignalBand::VeryClose);
        assert_eq!(SignalBand::from_distance(10.0), SignalBand::Close);
        assert_eq!(SignalBand::from_distance(29.9), SignalBand::Close);
        assert_eq!(SignalBand::from_distance(30.0), SignalBand::Weak);
        assert_eq!(SignalBand::from_distance(60.0), SignalBand::None);
    }

    #[test]
    fn test_readout_uses_nearest() {
        let r = SignalReadout::from_distances([80.0, 25.0, 55.0]);
        assert_eq!(r, SignalReadout::Band(SignalBand::Close));
    }

    #[test]
    fn test_readout_empty_is_complete() {
        let r = SignalReadout::from_distances(std::iter::empty());
        assert_eq!(r, SignalReadout::AllFound);
        assert!(r.label().contains("ALL PARTS"));
    }
}
