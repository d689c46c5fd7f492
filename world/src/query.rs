//! Read-only views over the world for systems and adapters.

use kaiju_core::snapshot::{MonsterView, RoundSnapshot};
use kaiju_core::{GameMode, RoundState, Viewport};

use crate::World;

/// Complete serializable capture of the round in deterministic id order.
#[must_use]
pub fn round_snapshot(world: &World) -> RoundSnapshot {
    let mut snapshot = RoundSnapshot {
        tick: world.tick_index,
        state: world.round,
        score: world.score,
        viewport: world.viewport,
        monsters: world.monsters.iter().map(|m| m.snapshot()).collect(),
        buildings: world.buildings.iter().map(|b| b.snapshot()).collect(),
        enemies: world.enemies.iter().map(|e| e.snapshot()).collect(),
        soldiers: world.soldiers.iter().map(|s| s.snapshot()).collect(),
        civilians: world.civilians.iter().map(|c| c.snapshot()).collect(),
        projectiles: world.projectiles.iter().map(|p| p.snapshot()).collect(),
    };
    snapshot.monsters.sort_by_key(|m| m.id);
    snapshot.buildings.sort_by_key(|b| b.id);
    snapshot.enemies.sort_by_key(|e| e.id);
    snapshot.soldiers.sort_by_key(|s| s.id);
    snapshot.civilians.sort_by_key(|c| c.id);
    snapshot.projectiles.sort_by_key(|p| p.id);
    snapshot
}

/// Sorted monster snapshots for the AI control policy.
#[must_use]
pub fn monster_view(world: &World) -> MonsterView {
    MonsterView::from_snapshots(world.monsters.iter().map(|m| m.snapshot()).collect())
}

/// Playfield bounds.
#[must_use]
pub fn viewport(world: &World) -> Viewport {
    world.viewport
}

/// Lifecycle state of the round.
#[must_use]
pub fn round_state(world: &World) -> RoundState {
    world.round
}

/// Player configuration of the current round.
#[must_use]
pub fn game_mode(world: &World) -> GameMode {
    world.mode
}

/// Current score total.
#[must_use]
pub fn score(world: &World) -> u32 {
    world.score
}

/// Number of ticks simulated in the current round.
#[must_use]
pub fn tick_index(world: &World) -> u64 {
    world.tick_index
}
