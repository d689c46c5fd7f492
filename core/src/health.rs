//! Shared health and defeat contract reused by every damageable entity.

use serde::{Deserialize, Serialize};

/// Result of applying damage to a [`Health`] pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageOutcome {
    /// The damage was not applied: invalid amount or already depleted.
    Rejected,
    /// Health dropped but remains above zero.
    Damaged,
    /// Health reached zero with this call. Reported exactly once.
    Destroyed,
}

/// Bounded health pool with a terminal depleted state.
///
/// `current` is always within `[0, initial]`; once it reaches zero every
/// further damage call is rejected, so destruction side effects can key off
/// the single [`DamageOutcome::Destroyed`] report.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Health {
    initial: f32,
    current: f32,
}

impl Health {
    /// Creates a full health pool.
    ///
    /// Non-finite or non-positive capacities are clamped to 1 so the
    /// depleted predicate stays meaningful.
    #[must_use]
    pub fn new(initial: f32) -> Self {
        let initial = if initial.is_finite() && initial > 0.0 {
            initial
        } else {
            log::warn!("invalid initial health {initial}, clamping to 1");
            1.0
        };
        Self {
            initial,
            current: initial,
        }
    }

    /// Capacity fixed at construction.
    #[must_use]
    pub const fn initial(&self) -> f32 {
        self.initial
    }

    /// Remaining health in `[0, initial]`.
    #[must_use]
    pub const fn current(&self) -> f32 {
        self.current
    }

    /// Remaining health as a percentage in `[0, 100]`.
    #[must_use]
    pub fn percentage(&self) -> f32 {
        (self.current / self.initial) * 100.0
    }

    /// Remaining health as a fraction in `[0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        self.current / self.initial
    }

    /// Reports whether the pool has reached its terminal depleted state.
    #[must_use]
    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// Applies damage, clamping at zero.
    ///
    /// Rejects non-finite and non-positive amounts, and any damage once the
    /// pool is depleted. A corrupted (NaN) current value is self-healed back
    /// to the initial capacity before the amount is applied.
    pub fn apply(&mut self, amount: f32) -> DamageOutcome {
        if !amount.is_finite() || amount <= 0.0 {
            log::warn!("rejecting invalid damage amount {amount}");
            return DamageOutcome::Rejected;
        }

        if self.current.is_nan() {
            log::warn!("health was NaN, resetting to initial {}", self.initial);
            self.current = self.initial;
        }

        if self.is_depleted() {
            return DamageOutcome::Rejected;
        }

        self.current -= amount;
        if self.current <= 0.0 {
            self.current = 0.0;
            DamageOutcome::Destroyed
        } else {
            DamageOutcome::Damaged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DamageOutcome, Health};

    #[test]
    fn damage_sequence_clamps_at_zero() {
        let mut health = Health::new(200.0);
        assert_eq!(health.apply(80.0), DamageOutcome::Damaged);
        assert_eq!(health.current(), 120.0);
        assert_eq!(health.apply(80.0), DamageOutcome::Damaged);
        assert_eq!(health.current(), 40.0);
        assert_eq!(health.apply(80.0), DamageOutcome::Destroyed);
        assert_eq!(health.current(), 0.0);
    }

    #[test]
    fn destroyed_is_reported_exactly_once() {
        let mut health = Health::new(10.0);
        assert_eq!(health.apply(25.0), DamageOutcome::Destroyed);
        assert_eq!(health.apply(25.0), DamageOutcome::Rejected);
        assert_eq!(health.apply(1.0), DamageOutcome::Rejected);
        assert_eq!(health.current(), 0.0);
    }

    #[test]
    fn invalid_amounts_are_rejected_without_state_change() {
        let mut health = Health::new(100.0);
        assert_eq!(health.apply(0.0), DamageOutcome::Rejected);
        assert_eq!(health.apply(-5.0), DamageOutcome::Rejected);
        assert_eq!(health.apply(f32::NAN), DamageOutcome::Rejected);
        assert_eq!(health.apply(f32::INFINITY), DamageOutcome::Rejected);
        assert_eq!(health.current(), 100.0);
    }

    #[test]
    fn nan_current_health_self_heals() {
        let mut health = Health::new(100.0);
        health.current = f32::NAN;
        assert_eq!(health.apply(30.0), DamageOutcome::Damaged);
        assert_eq!(health.current(), 70.0);
    }

    #[test]
    fn degenerate_capacity_is_clamped() {
        let health = Health::new(-10.0);
        assert_eq!(health.initial(), 1.0);
        assert!(!health.is_depleted());
    }

    #[test]
    fn percentage_tracks_remaining_health() {
        let mut health = Health::new(200.0);
        let _ = health.apply(50.0);
        assert_eq!(health.percentage(), 75.0);
        assert_eq!(health.fraction(), 0.75);
    }
}
