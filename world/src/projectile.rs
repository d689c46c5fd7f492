//! Ballistic damage carriers emitted by flying enemies and soldiers.

use kaiju_core::{
    geometry::{FrameSize, Footprint, Rect},
    snapshot::{ProjectileOrigin, ProjectileSnapshot},
    ProjectileId, Viewport,
};

/// Spawn parameters produced by a firing entity and materialized by the
/// world, which owns identifier allocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ProjectileSeed {
    pub(crate) origin: ProjectileOrigin,
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) velocity_x: f32,
    pub(crate) velocity_y: f32,
    pub(crate) damage: f32,
    pub(crate) size: f32,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Projectile {
    id: ProjectileId,
    origin: ProjectileOrigin,
    x: f32,
    y: f32,
    size: f32,
    velocity_x: f32,
    velocity_y: f32,
    damage: f32,
    frame: Option<FrameSize>,
}

impl Projectile {
    pub(crate) fn from_seed(id: ProjectileId, seed: ProjectileSeed, frame: Option<FrameSize>) -> Self {
        Self {
            id,
            origin: seed.origin,
            x: seed.x,
            y: seed.y,
            size: seed.size,
            velocity_x: seed.velocity_x,
            velocity_y: seed.velocity_y,
            damage: seed.damage,
            frame,
        }
    }

    pub(crate) const fn id(&self) -> ProjectileId {
        self.id
    }

    pub(crate) const fn damage(&self) -> f32 {
        self.damage
    }

    /// Constant-velocity translation for one tick.
    pub(crate) fn advance(&mut self) {
        self.x += self.velocity_x;
        self.y += self.velocity_y;
    }

    /// Reports whether the projectile left the viewport: past the bottom
    /// edge, fully above the top, or fully past either horizontal bound.
    pub(crate) fn is_off_screen(&self, viewport: Viewport) -> bool {
        let rect = self.footprint();
        rect.y() > viewport.height()
            || rect.bottom() < 0.0
            || rect.right() < 0.0
            || rect.x() > viewport.width()
    }

    pub(crate) fn snapshot(&self) -> ProjectileSnapshot {
        ProjectileSnapshot {
            id: self.id,
            origin: self.origin,
            footprint: self.footprint(),
            velocity_x: self.velocity_x,
            velocity_y: self.velocity_y,
            damage: self.damage,
        }
    }
}

impl Footprint for Projectile {
    fn footprint(&self) -> Rect {
        let width = self.frame.map_or(self.size, |frame| frame.width());
        let height = self.frame.map_or(self.size, |frame| frame.height());
        Rect::new(self.x, self.y, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::{Projectile, ProjectileSeed};
    use kaiju_core::{geometry::Footprint, snapshot::ProjectileOrigin, ProjectileId, Viewport};

    fn projectile(x: f32, y: f32, velocity_x: f32, velocity_y: f32) -> Projectile {
        Projectile::from_seed(
            ProjectileId::new(0),
            ProjectileSeed {
                origin: ProjectileOrigin::Enemy,
                x,
                y,
                velocity_x,
                velocity_y,
                damage: 10.0,
                size: 8.0,
            },
            None,
        )
    }

    #[test]
    fn advance_applies_vector_velocity() {
        let mut shot = projectile(100.0, 50.0, 3.0, -2.0);
        shot.advance();
        let rect = shot.footprint();
        assert_eq!(rect.x(), 103.0);
        assert_eq!(rect.y(), 48.0);
    }

    #[test]
    fn off_screen_requires_crossing_the_bottom_edge() {
        let viewport = Viewport::new(800.0, 700.0);
        let mut shot = projectile(100.0, 698.0, 0.0, 4.0);
        assert!(!shot.is_off_screen(viewport));
        shot.advance();
        assert!(shot.is_off_screen(viewport));
    }

    #[test]
    fn off_screen_detects_horizontal_exit() {
        let viewport = Viewport::new(800.0, 700.0);
        let mut shot = projectile(-5.0, 100.0, -4.0, 0.0);
        assert!(!shot.is_off_screen(viewport));
        shot.advance();
        assert!(shot.is_off_screen(viewport));
    }
}
