#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Control policy for scripted monsters.
//!
//! The policy is a pure system: each tick it reads the sorted monster view
//! and answers with one [`Command::SetMonsterIntent`] per scripted monster.
//! It owns a seeded generator for the punch probability draw, so a full run
//! is reproducible from the seed.

use kaiju_core::snapshot::{MonsterSnapshot, MonsterView};
use kaiju_core::{Command, ControlKind, FacingDirection, Intent};

/// Punch attempts per thousand eligible ticks.
const AGGRESSION_PER_MILLE: u32 = 30;
/// Horizontal punch window as a multiple of the monster's width.
const PUNCH_REACH_FACTOR: f32 = 1.5;

/// Pursuit-and-punch policy for scripted monsters.
///
/// Derives intent from the target's offset: horizontal chase outside a
/// speed-sized dead zone, vertical chase while climbing, and a
/// probabilistic punch when close enough and facing the target.
#[derive(Clone, Debug)]
pub struct BrawlerPolicy {
    rng_state: u64,
}

impl BrawlerPolicy {
    /// Creates a policy with the provided random seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { rng_state: seed }
    }

    fn rng_next(&mut self) -> u32 {
        self.rng_state = self
            .rng_state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1);
        (self.rng_state >> 33) as u32
    }

    fn wants_to_punch(&mut self) -> bool {
        self.rng_next() % 1000 < AGGRESSION_PER_MILLE
    }

    /// Nearest living monster other than the brawler itself, measured
    /// between upper-left corners.
    fn acquire_target<'view>(
        brawler: &MonsterSnapshot,
        view: &'view MonsterView,
    ) -> Option<&'view MonsterSnapshot> {
        let mut closest = f32::INFINITY;
        let mut target = None;
        for candidate in view.iter() {
            if candidate.id == brawler.id || candidate.defeated {
                continue;
            }
            let dx = candidate.footprint.x() - brawler.footprint.x();
            let dy = candidate.footprint.y() - brawler.footprint.y();
            let distance = (dx * dx + dy * dy).sqrt();
            if distance < closest {
                closest = distance;
                target = Some(candidate);
            }
        }
        target
    }

    fn intent_for(&mut self, brawler: &MonsterSnapshot, view: &MonsterView) -> Intent {
        let Some(target) = Self::acquire_target(brawler, view) else {
            return Intent::default();
        };

        let horizontal = target.footprint.x() - brawler.footprint.x();
        let vertical = target.footprint.y() - brawler.footprint.y();
        let buffer = brawler.speed;
        let mut intent = Intent {
            right: horizontal > buffer,
            left: horizontal < -buffer,
            ..Intent::default()
        };

        let within_reach = horizontal.abs() < brawler.footprint.width() * PUNCH_REACH_FACTOR
            && vertical.abs() < brawler.footprint.height();
        if within_reach {
            let facing_target = match brawler.facing {
                FacingDirection::Right => horizontal > 0.0,
                FacingDirection::Left => horizontal < 0.0,
            };
            if facing_target && self.wants_to_punch() {
                intent.punch = true;
            }
        }

        if brawler.climbing {
            intent.up = vertical < -buffer;
            intent.down = vertical > buffer;
        }

        intent
    }

    /// Emits a fresh intent for every living scripted monster in the view.
    ///
    /// Intents are emitted even when empty, so a monster whose target
    /// disappeared stops instead of replaying stale input.
    pub fn handle(&mut self, view: &MonsterView, out: &mut Vec<Command>) {
        for brawler in view.iter() {
            if brawler.control != ControlKind::Scripted || brawler.defeated {
                continue;
            }
            let intent = self.intent_for(brawler, view);
            out.push(Command::SetMonsterIntent {
                monster: brawler.id,
                intent,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BrawlerPolicy;
    use kaiju_core::animation::MonsterAnimation;
    use kaiju_core::geometry::Rect;
    use kaiju_core::snapshot::{MonsterSnapshot, MonsterView};
    use kaiju_core::{Command, ControlKind, FacingDirection, MonsterId};

    fn monster(id: u32, control: ControlKind, x: f32, y: f32) -> MonsterSnapshot {
        MonsterSnapshot {
            id: MonsterId::new(id),
            control,
            footprint: Rect::new(x, y, 50.0, 50.0),
            speed: 5.0,
            current_health: 100.0,
            initial_health: 100.0,
            defeated: false,
            climbing: false,
            punching: false,
            invulnerable_ticks: 0,
            facing: FacingDirection::Right,
            animation: MonsterAnimation::Idle,
            animation_frame: 0,
        }
    }

    fn single_intent(policy: &mut BrawlerPolicy, view: &MonsterView) -> kaiju_core::Intent {
        let mut out = Vec::new();
        policy.handle(view, &mut out);
        assert_eq!(out.len(), 1);
        match out[0] {
            Command::SetMonsterIntent { intent, .. } => intent,
            _ => unreachable!("policy only emits intents"),
        }
    }

    #[test]
    fn pursues_a_target_beyond_the_dead_zone() {
        let mut policy = BrawlerPolicy::new(1);
        let view = MonsterView::from_snapshots(vec![
            monster(0, ControlKind::Human, 400.0, 650.0),
            monster(1, ControlKind::Scripted, 100.0, 650.0),
        ]);
        let intent = single_intent(&mut policy, &view);
        assert!(intent.right);
        assert!(!intent.left);
    }

    #[test]
    fn holds_position_inside_the_dead_zone() {
        let mut policy = BrawlerPolicy::new(1);
        let view = MonsterView::from_snapshots(vec![
            monster(0, ControlKind::Human, 103.0, 650.0),
            monster(1, ControlKind::Scripted, 100.0, 650.0),
        ]);
        let intent = single_intent(&mut policy, &view);
        assert!(!intent.right);
        assert!(!intent.left);
    }

    #[test]
    fn emits_an_empty_intent_when_every_target_is_defeated() {
        let mut policy = BrawlerPolicy::new(1);
        let mut fallen = monster(0, ControlKind::Human, 400.0, 650.0);
        fallen.defeated = true;
        let view = MonsterView::from_snapshots(vec![
            fallen,
            monster(1, ControlKind::Scripted, 100.0, 650.0),
        ]);
        let intent = single_intent(&mut policy, &view);
        assert_eq!(intent, kaiju_core::Intent::default());
    }

    #[test]
    fn never_punches_while_facing_away() {
        let mut policy = BrawlerPolicy::new(1);
        let mut brawler = monster(1, ControlKind::Scripted, 100.0, 650.0);
        brawler.facing = FacingDirection::Left;
        let view = MonsterView::from_snapshots(vec![
            monster(0, ControlKind::Human, 130.0, 650.0),
            brawler,
        ]);
        for _ in 0..2000 {
            assert!(!single_intent(&mut policy, &view).punch);
        }
    }

    #[test]
    fn eventually_punches_a_faced_target_in_reach() {
        let mut policy = BrawlerPolicy::new(1);
        let view = MonsterView::from_snapshots(vec![
            monster(0, ControlKind::Human, 130.0, 650.0),
            monster(1, ControlKind::Scripted, 100.0, 650.0),
        ]);
        let punched = (0..2000).any(|_| single_intent(&mut policy, &view).punch);
        assert!(punched);
    }

    #[test]
    fn climbing_brawler_chases_vertically() {
        let mut policy = BrawlerPolicy::new(1);
        let mut brawler = monster(1, ControlKind::Scripted, 200.0, 500.0);
        brawler.climbing = true;
        let view = MonsterView::from_snapshots(vec![
            monster(0, ControlKind::Human, 200.0, 300.0),
            brawler,
        ]);
        let intent = single_intent(&mut policy, &view);
        assert!(intent.up);
        assert!(!intent.down);
    }

    #[test]
    fn identical_seeds_produce_identical_decisions() {
        let view = MonsterView::from_snapshots(vec![
            monster(0, ControlKind::Human, 130.0, 650.0),
            monster(1, ControlKind::Scripted, 100.0, 650.0),
        ]);
        let mut first = BrawlerPolicy::new(99);
        let mut second = BrawlerPolicy::new(99);
        for _ in 0..500 {
            assert_eq!(
                single_intent(&mut first, &view),
                single_intent(&mut second, &view)
            );
        }
    }
}
