//! Read-only, serializable state captures for systems and spectators.

use serde::{Deserialize, Serialize};

use crate::{
    animation::MonsterAnimation, geometry::Rect, BuildingId, CivilianId, ControlKind, EnemyId,
    FacingDirection, MonsterId, ProjectileId, RoundState, SoldierId, Viewport,
};

/// Immutable representation of a single monster's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonsterSnapshot {
    /// Unique identifier assigned to the monster.
    pub id: MonsterId,
    /// How the monster's intent is produced.
    pub control: ControlKind,
    /// Effective collision rectangle for the current tick.
    pub footprint: Rect,
    /// Horizontal speed in world units per tick.
    pub speed: f32,
    /// Remaining health.
    pub current_health: f32,
    /// Health capacity fixed at spawn.
    pub initial_health: f32,
    /// Whether the monster reached its terminal defeated state.
    pub defeated: bool,
    /// Whether the monster is currently engaged with a building.
    pub climbing: bool,
    /// Whether a punch activation is in progress.
    pub punching: bool,
    /// Remaining ticks of post-hit invulnerability.
    pub invulnerable_ticks: u32,
    /// Horizontal orientation.
    pub facing: FacingDirection,
    /// Currently selected animation.
    pub animation: MonsterAnimation,
    /// Current frame index within the animation.
    pub animation_frame: u32,
}

/// Immutable representation of a single building's state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildingSnapshot {
    /// Unique identifier assigned to the building.
    pub id: BuildingId,
    /// Effective collision rectangle.
    pub footprint: Rect,
    /// Remaining health.
    pub current_health: f32,
    /// Health capacity fixed at spawn.
    pub initial_health: f32,
    /// Whether the building collapsed.
    pub destroyed: bool,
    /// Damage bucket selected for rendering.
    pub damage_frame: DamageFrameRef,
}

/// Damage bucket chosen from a building's threshold table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DamageFrameRef {
    /// Health-percentage threshold that won the selection.
    pub threshold: u8,
    /// Horizontal offset of the frame on the building sheet.
    pub source_x: f32,
    /// Vertical offset of the frame on the building sheet.
    pub source_y: f32,
}

/// Immutable representation of a single flying enemy's state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemySnapshot {
    /// Unique identifier assigned to the enemy.
    pub id: EnemyId,
    /// Effective collision rectangle.
    pub footprint: Rect,
    /// Remaining health.
    pub current_health: f32,
    /// Health capacity fixed at spawn.
    pub initial_health: f32,
    /// Patrol direction: `1` toward increasing x, `-1` toward decreasing x.
    pub direction: i8,
    /// Current frame index of the hover loop.
    pub animation_frame: u32,
}

/// Behavioral state of a soldier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoldierState {
    /// No monster within the detection radius.
    Idle,
    /// Advancing toward the acquired target.
    Advancing,
    /// Within firing range of the acquired target.
    Firing,
    /// Terminal defeated state.
    Defeated,
}

/// Immutable representation of a single soldier's state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoldierSnapshot {
    /// Unique identifier assigned to the soldier.
    pub id: SoldierId,
    /// Effective collision rectangle.
    pub footprint: Rect,
    /// Remaining health.
    pub current_health: f32,
    /// Health capacity fixed at spawn.
    pub initial_health: f32,
    /// Behavioral state for the current tick.
    pub state: SoldierState,
    /// Aim angle toward the acquired target, in radians.
    pub rifle_angle: f32,
}

/// Behavioral state of a civilian.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CivilianState {
    /// Walking toward the originally assigned viewport edge.
    Walking,
    /// Fleeing away from a nearby monster at elevated speed.
    Fleeing,
}

/// Immutable representation of a single civilian's state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CivilianSnapshot {
    /// Unique identifier assigned to the civilian.
    pub id: CivilianId,
    /// Effective collision rectangle.
    pub footprint: Rect,
    /// Behavioral state for the current tick.
    pub state: CivilianState,
    /// Walk direction: `1` toward increasing x, `-1` toward decreasing x.
    pub walk_direction: i8,
    /// Hue assigned at spawn, in degrees.
    pub hue: f32,
}

/// Kind of entity that fired a projectile. Presentation differs per
/// origin; collision behavior does not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileOrigin {
    /// Dropped by a flying enemy.
    Enemy,
    /// Fired from a soldier's rifle.
    Soldier,
}

/// Immutable representation of a single projectile's state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectileSnapshot {
    /// Unique identifier assigned to the projectile.
    pub id: ProjectileId,
    /// Kind of entity that fired the projectile.
    pub origin: ProjectileOrigin,
    /// Effective collision rectangle.
    pub footprint: Rect,
    /// Horizontal velocity in world units per tick.
    pub velocity_x: f32,
    /// Vertical velocity in world units per tick.
    pub velocity_y: f32,
    /// Damage applied on impact.
    pub damage: f32,
}

/// Complete serializable capture of the round, intended for external
/// controllers and spectators rather than gameplay-critical timing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    /// Tick index at capture time. The deterministic core carries no
    /// wall-clock; adapters may attach one.
    pub tick: u64,
    /// Lifecycle state of the round.
    pub state: RoundState,
    /// Current score total.
    pub score: u32,
    /// Playfield bounds.
    pub viewport: Viewport,
    /// All monsters in deterministic id order.
    pub monsters: Vec<MonsterSnapshot>,
    /// All buildings in deterministic id order.
    pub buildings: Vec<BuildingSnapshot>,
    /// All flying enemies in deterministic id order.
    pub enemies: Vec<EnemySnapshot>,
    /// All soldiers in deterministic id order.
    pub soldiers: Vec<SoldierSnapshot>,
    /// All civilians in deterministic id order.
    pub civilians: Vec<CivilianSnapshot>,
    /// All live projectiles in deterministic id order.
    pub projectiles: Vec<ProjectileSnapshot>,
}

/// Read-only view of the monsters, sorted for deterministic iteration.
#[derive(Clone, Debug, Default)]
pub struct MonsterView {
    snapshots: Vec<MonsterSnapshot>,
}

impl MonsterView {
    /// Creates a new view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<MonsterSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &MonsterSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<MonsterSnapshot> {
        self.snapshots
    }
}

#[cfg(test)]
mod tests {
    use super::{MonsterSnapshot, MonsterView};
    use crate::{
        animation::MonsterAnimation, geometry::Rect, ControlKind, FacingDirection, MonsterId,
    };

    fn snapshot(id: u32) -> MonsterSnapshot {
        MonsterSnapshot {
            id: MonsterId::new(id),
            control: ControlKind::Human,
            footprint: Rect::new(0.0, 0.0, 50.0, 50.0),
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

    #[test]
    fn view_orders_snapshots_by_id() {
        let view = MonsterView::from_snapshots(vec![snapshot(2), snapshot(0), snapshot(1)]);
        let ids: Vec<u32> = view.iter().map(|snapshot| snapshot.id.get()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn monster_snapshot_round_trips_through_bincode() {
        let value = snapshot(3);
        let bytes = bincode::serialize(&value).expect("serialize");
        let restored: MonsterSnapshot = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(restored, value);
    }
}
