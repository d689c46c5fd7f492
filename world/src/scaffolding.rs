//! Direct world construction for scenario tests.
//!
//! These helpers bypass the command surface so tests can lay out exact
//! situations. Only compiled for tests and the `scenario_scaffolding`
//! feature.

use kaiju_core::{
    health::DamageOutcome, snapshot::ProjectileOrigin, BuildingId, CivilianId, ControlKind,
    EnemyId, Event, GameMode, MonsterId, ProjectileId, RoundState, SoldierId,
};

use crate::projectile::ProjectileSeed;
use crate::World;

/// Puts the world into an active round without spawning the standard
/// layout. Entities placed afterwards come exclusively from the test.
pub fn begin_empty_round(world: &mut World, mode: GameMode, seed: u64) {
    world.clear_entities();
    world.mode = mode;
    world.score = 0;
    world.tick_index = 0;
    world.rng_state = seed;
    world.round = RoundState::Playing;
}

/// Spawns a monster at the given position.
pub fn spawn_monster(world: &mut World, control: ControlKind, x: f32, y: f32) -> MonsterId {
    world.spawn_monster(control, x, y)
}

/// Places a building with the given footprint and health.
pub fn place_building(
    world: &mut World,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    health: f32,
) -> BuildingId {
    world.spawn_building(x, y, width, height, health)
}

/// Spawns a flying enemy at the given position.
pub fn spawn_enemy(world: &mut World, x: f32, y: f32) -> EnemyId {
    world.spawn_enemy(x, y)
}

/// Spawns a soldier with an explicit initial fire cooldown.
pub fn spawn_soldier(world: &mut World, x: f32, y: f32, initial_cooldown: f32) -> SoldierId {
    world.spawn_soldier(x, y, initial_cooldown)
}

/// Spawns a civilian with an explicit walk direction and hue.
pub fn spawn_civilian(
    world: &mut World,
    x: f32,
    y: f32,
    walk_direction: i8,
    hue: f32,
) -> CivilianId {
    world.spawn_civilian_at(x, y, walk_direction, hue)
}

/// Spawns a projectile with an explicit velocity vector.
pub fn spawn_projectile(
    world: &mut World,
    x: f32,
    y: f32,
    velocity_x: f32,
    velocity_y: f32,
    damage: f32,
    size: f32,
) -> ProjectileId {
    let frame = world.sprites.projectile;
    world.spawn_projectile(
        ProjectileSeed {
            origin: ProjectileOrigin::Enemy,
            x,
            y,
            velocity_x,
            velocity_y,
            damage,
            size,
        },
        frame,
    )
}

/// Applies damage to a monster, emitting the same events combat would.
pub fn damage_monster(
    world: &mut World,
    id: MonsterId,
    amount: f32,
    out: &mut Vec<Event>,
) -> DamageOutcome {
    match world.monsters.iter().position(|m| m.id() == id) {
        Some(index) => world.damage_monster_at(index, amount, out),
        None => {
            log::warn!("no monster {} to damage", id.get());
            DamageOutcome::Rejected
        }
    }
}

/// Applies damage to a building, emitting the same events combat would.
pub fn damage_building(
    world: &mut World,
    id: BuildingId,
    amount: f32,
    out: &mut Vec<Event>,
) -> DamageOutcome {
    match world.buildings.iter().position(|b| b.id() == id) {
        Some(index) => world.damage_building_at(index, amount, out),
        None => {
            log::warn!("no building {} to damage", id.get());
            DamageOutcome::Rejected
        }
    }
}

/// Applies damage to a soldier, emitting the same events combat would.
pub fn damage_soldier(
    world: &mut World,
    id: SoldierId,
    amount: f32,
    out: &mut Vec<Event>,
) -> DamageOutcome {
    match world.soldiers.iter().position(|s| s.id() == id) {
        Some(index) => world.damage_soldier_at(index, amount, out),
        None => {
            log::warn!("no soldier {} to damage", id.get());
            DamageOutcome::Rejected
        }
    }
}
