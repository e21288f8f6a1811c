//! Survival system - drains hunger and thirst and decides death.

use nightfall_logic::survival::DecayRates;

use crate::components::SurvivalState;

/// Drain the passive stats. Returns `true` on the tick the player dies.
pub fn survival_system(survival: &mut SurvivalState, delta: f32, rates: &DecayRates) -> bool {
    if survival.is_dead {
        return false;
    }
    survival.vitals.decay(delta, rates);
    check_death(survival)
}

/// Latch the death flag if any stat hit zero. Returns `true` only on the
/// transition.
pub fn check_death(survival: &mut SurvivalState) -> bool {
    if survival.is_dead || !survival.vitals.is_fatal() {
        return false;
    }
    survival.is_dead = true;
    log::info!(
        "Player died (health {:.1}, hunger {:.1}, thirst {:.1})",
        survival.health(),
        survival.hunger(),
        survival.thirst()
    );
    true
}
