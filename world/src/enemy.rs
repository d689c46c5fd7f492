//! Flying enemies patrolling the skyline and bombing downward.

use kaiju_core::{
    animation::{Animator, EnemyAnimation},
    geometry::{FrameSize, Footprint, Rect},
    health::{DamageOutcome, Health},
    snapshot::EnemySnapshot,
    EnemyId, Viewport,
};

pub(crate) const ENEMY_WIDTH: f32 = 60.0;
pub(crate) const ENEMY_HEIGHT: f32 = 30.0;
pub(crate) const ENEMY_HEALTH: f32 = 100.0;
const ENEMY_SPEED: f32 = 2.0;
const FIRE_COOLDOWN: u32 = 120;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Enemy {
    id: EnemyId,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    speed: f32,
    health: Health,
    direction: i8,
    fire_cooldown: u32,
    animator: Animator<EnemyAnimation>,
    frame: Option<FrameSize>,
}

impl Enemy {
    pub(crate) fn new(id: EnemyId, x: f32, y: f32, frame: Option<FrameSize>) -> Self {
        Self {
            id,
            x,
            y,
            width: ENEMY_WIDTH,
            height: ENEMY_HEIGHT,
            speed: ENEMY_SPEED,
            health: Health::new(ENEMY_HEALTH),
            direction: 1,
            fire_cooldown: 0,
            animator: Animator::new(EnemyAnimation::Hover),
            frame,
        }
    }

    pub(crate) const fn id(&self) -> EnemyId {
        self.id
    }

    pub(crate) fn is_destroyed(&self) -> bool {
        self.health.is_depleted()
    }

    pub(crate) fn take_damage(&mut self, amount: f32) -> DamageOutcome {
        self.health.apply(amount)
    }

    /// Advances the patrol by one tick.
    ///
    /// Returns `true` when the fire cooldown elapsed this tick; the caller
    /// spawns the projectile centered under the post-move position. The
    /// cooldown starts elapsed, so the first shot lands on the first tick.
    pub(crate) fn update(&mut self, viewport: Viewport) -> bool {
        if self.is_destroyed() {
            return false;
        }
        self.x += self.speed * f32::from(self.direction);
        if self.x + self.width > viewport.width() || self.x < 0.0 {
            self.direction = -self.direction;
        }
        let fired = if self.fire_cooldown == 0 {
            self.fire_cooldown = FIRE_COOLDOWN;
            true
        } else {
            self.fire_cooldown -= 1;
            false
        };
        self.animator.advance();
        fired
    }

    pub(crate) fn snapshot(&self) -> EnemySnapshot {
        EnemySnapshot {
            id: self.id,
            footprint: self.footprint(),
            current_health: self.health.current(),
            initial_health: self.health.initial(),
            direction: self.direction,
            animation_frame: self.animator.frame(),
        }
    }
}

impl Footprint for Enemy {
    fn footprint(&self) -> Rect {
        let width = self.frame.map_or(self.width, |frame| frame.width());
        let height = self.frame.map_or(self.height, |frame| frame.height());
        Rect::new(self.x, self.y, width, height)
    }
}
