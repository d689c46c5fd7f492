//! Event-to-sound mapping for audio-capable backends.
//!
//! Backends resolve each cue to a loaded buffer and play it; events without
//! a cue are simply silent, so a backend with no audio device can ignore
//! this module entirely.

use kaiju_core::Event;

/// Sound effects the game distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// A monster threw a punch.
    Punch,
    /// A building absorbed damage.
    BuildingDamage,
    /// A building collapsed.
    BuildingDestroyed,
    /// A monster was hit.
    MonsterHit,
    /// A flying enemy fired.
    EnemyShoot,
    /// A flying enemy was destroyed.
    EnemyDestroyed,
}

impl SoundCue {
    /// Conventional asset file name for the cue.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Punch => "punch.wav",
            Self::BuildingDamage => "building_damage.wav",
            Self::BuildingDestroyed => "building_destroyed.wav",
            Self::MonsterHit => "monster_hit.wav",
            Self::EnemyShoot => "enemy_shoot.wav",
            Self::EnemyDestroyed => "enemy_destroyed.wav",
        }
    }
}

/// Cue to play for the provided event, if any.
#[must_use]
pub fn cue_for(event: &Event) -> Option<SoundCue> {
    match event {
        Event::MonsterPunched { .. } => Some(SoundCue::Punch),
        Event::BuildingDamaged { .. } => Some(SoundCue::BuildingDamage),
        Event::BuildingDestroyed { .. } => Some(SoundCue::BuildingDestroyed),
        Event::MonsterDamaged { .. } => Some(SoundCue::MonsterHit),
        Event::EnemyFired { .. } => Some(SoundCue::EnemyShoot),
        Event::EnemyDestroyed { .. } => Some(SoundCue::EnemyDestroyed),
        _ => None,
    }
}
