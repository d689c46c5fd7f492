//! Ground soldiers that acquire, chase, and shoot at living monsters.

use kaiju_core::{
    geometry::{Footprint, Rect},
    health::{DamageOutcome, Health},
    snapshot::{ProjectileOrigin, SoldierSnapshot, SoldierState},
    SoldierId, Viewport,
};

use crate::projectile::ProjectileSeed;

pub(crate) const SOLDIER_WIDTH: f32 = 25.0;
pub(crate) const SOLDIER_HEIGHT: f32 = 50.0;
pub(crate) const SOLDIER_HEALTH: f32 = 50.0;
pub(crate) const FIRE_COOLDOWN: f32 = 120.0;
const SOLDIER_SPEED: f32 = 0.5;
const DETECTION_RADIUS: f32 = 300.0;
const FIRING_RANGE: f32 = 250.0;
const BULLET_SPEED: f32 = 3.0;
const BULLET_SIZE: f32 = 5.0;
const BULLET_DAMAGE: f32 = 5.0;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Soldier {
    id: SoldierId,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    speed: f32,
    health: Health,
    defeated: bool,
    state: SoldierState,
    rifle_angle: f32,
    // Fractional so spawn staggering can use a uniform draw in [0, 120).
    fire_cooldown: f32,
}

impl Soldier {
    pub(crate) fn new(id: SoldierId, x: f32, y: f32, initial_cooldown: f32) -> Self {
        Self {
            id,
            x,
            y,
            width: SOLDIER_WIDTH,
            height: SOLDIER_HEIGHT,
            speed: SOLDIER_SPEED,
            health: Health::new(SOLDIER_HEALTH),
            defeated: false,
            state: SoldierState::Idle,
            rifle_angle: 0.0,
            fire_cooldown: initial_cooldown,
        }
    }

    pub(crate) const fn id(&self) -> SoldierId {
        self.id
    }

    pub(crate) const fn is_defeated(&self) -> bool {
        self.defeated
    }

    /// Nearest living monster footprint within the detection radius,
    /// measured between upper-left corners.
    fn acquire_target(&self, targets: &[Rect]) -> Option<Rect> {
        let mut closest = DETECTION_RADIUS;
        let mut acquired = None;
        for target in targets {
            let distance = ((self.x - target.x()).powi(2) + (self.y - target.y()).powi(2)).sqrt();
            if distance < closest {
                closest = distance;
                acquired = Some(*target);
            }
        }
        acquired
    }

    /// Advances the soldier by one tick against the living monsters.
    ///
    /// Returns the bullet to spawn when the soldier fired.
    pub(crate) fn update(
        &mut self,
        targets: &[Rect],
        viewport: Viewport,
    ) -> Option<ProjectileSeed> {
        if self.defeated {
            return None;
        }

        let mut fired = None;
        if let Some(target) = self.acquire_target(targets) {
            let (target_x, target_y) = target.center();
            let dx = target_x - (self.x + self.width / 2.0);
            let dy = target_y - (self.y + self.height / 2.0);
            self.rifle_angle = dy.atan2(dx);
            let distance = (dx * dx + dy * dy).sqrt();

            if distance > FIRING_RANGE {
                self.state = SoldierState::Advancing;
                self.x += self.rifle_angle.cos() * self.speed;
            } else {
                self.state = SoldierState::Firing;
            }

            if self.state == SoldierState::Firing && self.fire_cooldown <= 0.0 {
                fired = Some(self.fire());
                self.fire_cooldown = FIRE_COOLDOWN;
            }
        } else {
            self.state = SoldierState::Idle;
        }

        if self.fire_cooldown > 0.0 {
            self.fire_cooldown -= 1.0;
        }

        let ground = viewport.height() - self.height;
        if self.y > ground {
            self.y = ground;
        }

        fired
    }

    /// Bullet leaving the rifle muzzle along the current aim angle.
    fn fire(&self) -> ProjectileSeed {
        let muzzle_length = self.width / 2.0 + 5.0;
        ProjectileSeed {
            origin: ProjectileOrigin::Soldier,
            x: self.x + self.width / 2.0 + self.rifle_angle.cos() * muzzle_length,
            y: self.y + self.height / 2.0 + self.rifle_angle.sin() * muzzle_length,
            velocity_x: self.rifle_angle.cos() * BULLET_SPEED,
            velocity_y: self.rifle_angle.sin() * BULLET_SPEED,
            damage: BULLET_DAMAGE,
            size: BULLET_SIZE,
        }
    }

    pub(crate) fn take_damage(&mut self, amount: f32) -> DamageOutcome {
        if self.defeated {
            return DamageOutcome::Rejected;
        }
        let outcome = self.health.apply(amount);
        if outcome == DamageOutcome::Destroyed {
            self.defeated = true;
            self.state = SoldierState::Defeated;
        }
        outcome
    }

    pub(crate) fn snapshot(&self) -> SoldierSnapshot {
        SoldierSnapshot {
            id: self.id,
            footprint: self.footprint(),
            current_health: self.health.current(),
            initial_health: self.health.initial(),
            state: self.state,
            rifle_angle: self.rifle_angle,
        }
    }
}

impl Footprint for Soldier {
    fn footprint(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
