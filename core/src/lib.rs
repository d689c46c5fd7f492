#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Kaiju engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems and
//! adapters to react to deterministically. Systems consume event streams,
//! query immutable snapshots, and respond exclusively with new command
//! batches.

use serde::{Deserialize, Serialize};

pub mod animation;
pub mod geometry;
pub mod health;
pub mod snapshot;

use geometry::FrameSize;

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Configures the fixed-size viewport that bounds the simulation.
    ConfigureViewport {
        /// Width of the playfield in world units.
        width: f32,
        /// Height of the playfield in world units.
        height: f32,
    },
    /// Records which sprite sheets the presenting adapter managed to load.
    ///
    /// Entities spawned afterwards use the configured frame dimensions as
    /// their collision footprint; missing entries fall back to the declared
    /// collision-box sizes and flat-color rendering.
    ConfigureSprites {
        /// Loaded frame dimensions per entity kind.
        frames: SpriteFrames,
    },
    /// Resets the score, rebuilds the city, and starts a new round.
    StartRound {
        /// Player configuration for the round.
        mode: GameMode,
        /// Seed for the world's deterministic random generator.
        seed: u64,
    },
    /// Simulates player input for a keyboard-controlled monster.
    PerformAction {
        /// Identifier of the monster to control.
        monster: MonsterId,
        /// Logical action being pressed, released, or triggered.
        action: ActionKind,
        /// Kind of input transition to simulate.
        input: InputEvent,
    },
    /// Supplies the per-tick intent for a policy-controlled monster.
    SetMonsterIntent {
        /// Identifier of the scripted monster.
        monster: MonsterId,
        /// Resolved control flags for the upcoming tick.
        intent: Intent,
    },
    /// Advances the simulation by one tick while the round is active.
    Tick,
    /// Clears all entities and returns the round to the idle state.
    ResetRound,
}

/// Events broadcast by the world after processing commands.
///
/// Destruction events fire exactly once per entity, on the tick its health
/// first reaches zero. Adapters realize sound playback by reacting to these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// A new round began.
    RoundStarted {
        /// Player configuration chosen for the round.
        mode: GameMode,
    },
    /// All controlled monsters were defeated and the round ended.
    RoundEnded {
        /// Final score of the round.
        score: u32,
    },
    /// The round state was cleared back to idle.
    RoundReset,
    /// A monster began a punch activation.
    MonsterPunched {
        /// Monster that threw the punch.
        monster: MonsterId,
    },
    /// A monster took damage without being defeated.
    MonsterDamaged {
        /// Monster that was hit.
        monster: MonsterId,
    },
    /// A monster's health reached zero.
    MonsterDefeated {
        /// Monster that was defeated.
        monster: MonsterId,
    },
    /// A building took damage without being destroyed.
    BuildingDamaged {
        /// Building that was hit.
        building: BuildingId,
    },
    /// A building's health reached zero.
    BuildingDestroyed {
        /// Building that collapsed.
        building: BuildingId,
    },
    /// A flying enemy emitted a projectile.
    EnemyFired {
        /// Enemy that fired.
        enemy: EnemyId,
        /// Projectile that was spawned.
        projectile: ProjectileId,
    },
    /// A flying enemy's health reached zero.
    EnemyDestroyed {
        /// Enemy that was destroyed.
        enemy: EnemyId,
    },
    /// A soldier fired an aimed projectile.
    SoldierFired {
        /// Soldier that fired.
        soldier: SoldierId,
        /// Projectile that was spawned.
        projectile: ProjectileId,
    },
    /// A soldier's health reached zero.
    SoldierDefeated {
        /// Soldier that was defeated.
        soldier: SoldierId,
    },
    /// A civilian walked or fled past the viewport bounds and was removed.
    CivilianDespawned {
        /// Civilian that left the playfield.
        civilian: CivilianId,
    },
    /// A projectile struck a monster and was consumed.
    ProjectileHit {
        /// Projectile that connected.
        projectile: ProjectileId,
        /// Monster that was struck.
        monster: MonsterId,
    },
    /// A projectile left the viewport and was removed.
    ProjectileExpired {
        /// Projectile that expired.
        projectile: ProjectileId,
    },
    /// The round score changed.
    ScoreChanged {
        /// New score total.
        total: u32,
    },
}

/// Player configuration for a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// One human-controlled monster.
    Solo,
    /// A human-controlled monster versus a policy-controlled one.
    VersusAi,
    /// Two human-controlled monsters.
    TwoPlayer,
}

/// Lifecycle state of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundState {
    /// No round is running; entities are cleared.
    Idle,
    /// The round is active and ticks advance the simulation.
    Playing,
    /// All monsters were defeated; updates are frozen, rendering continues.
    Over,
}

/// Horizontal orientation of an actor's sprite and attacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacingDirection {
    /// Facing toward decreasing x.
    Left,
    /// Facing toward increasing x.
    Right,
}

/// How a monster's per-tick intent is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlKind {
    /// Intent resolved from a keyboard pressed-state map.
    Human,
    /// Intent supplied each tick by an external policy.
    Scripted,
}

/// Resolved control flags driving a monster for one tick, regardless of
/// whether they came from keyboard state or an AI policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    /// Move toward decreasing x.
    pub left: bool,
    /// Move toward increasing x.
    pub right: bool,
    /// Climb upward while engaged with a building.
    pub up: bool,
    /// Climb downward while engaged with a building.
    pub down: bool,
    /// Begin a punch activation this tick.
    pub punch: bool,
}

/// Logical actions exposed by the programmatic control surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Horizontal movement toward decreasing x.
    Left,
    /// Horizontal movement toward increasing x.
    Right,
    /// Vertical climb movement toward decreasing y.
    Up,
    /// Vertical climb movement toward increasing y.
    Down,
    /// The punch attack.
    Punch,
}

/// Input transitions accepted by [`Command::PerformAction`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// The key went down; movement actions latch until released.
    Press,
    /// The key went up; movement actions stop.
    Release,
    /// One-shot activation, used for the punch.
    Trigger,
}

/// Fixed-size playfield that bounds every entity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Creates a viewport with the provided dimensions.
    ///
    /// Non-finite or non-positive dimensions are clamped to 1 so collision
    /// queries always operate on a valid playfield.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize_dimension(width),
            height: sanitize_dimension(height),
        }
    }

    /// Width of the playfield in world units.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Height of the playfield in world units.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 700.0)
    }
}

fn sanitize_dimension(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        1.0
    }
}

/// Frame dimensions of the sprite sheets an adapter managed to load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpriteFrames {
    /// Monster sheet frame size, if the sheet loaded.
    pub monster: Option<FrameSize>,
    /// Flying-enemy sheet frame size, if the sheet loaded.
    pub enemy: Option<FrameSize>,
    /// Projectile sheet frame size, if the sheet loaded.
    pub projectile: Option<FrameSize>,
    /// Building sheet frame size, if the sheet loaded.
    pub building: Option<FrameSize>,
}

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Clone,
            Copy,
            Debug,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            Serialize,
            Deserialize,
        )]
        pub struct $name(u32);

        impl $name {
            /// Creates a new identifier with the provided numeric value.
            #[must_use]
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// Retrieves the numeric representation of the identifier.
            #[must_use]
            pub const fn get(&self) -> u32 {
                self.0
            }
        }
    };
}

entity_id!(
    /// Unique identifier assigned to a player or AI monster.
    MonsterId
);
entity_id!(
    /// Unique identifier assigned to a building.
    BuildingId
);
entity_id!(
    /// Unique identifier assigned to a flying enemy.
    EnemyId
);
entity_id!(
    /// Unique identifier assigned to a ground soldier.
    SoldierId
);
entity_id!(
    /// Unique identifier assigned to a civilian.
    CivilianId
);
entity_id!(
    /// Unique identifier assigned to a projectile.
    ProjectileId
);
