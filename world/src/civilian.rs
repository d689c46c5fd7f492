//! Civilians wandering the streets and fleeing nearby monsters.

use kaiju_core::{
    geometry::{Footprint, Rect},
    snapshot::{CivilianSnapshot, CivilianState},
    CivilianId, Viewport,
};

pub(crate) const CIVILIAN_WIDTH: f32 = 20.0;
pub(crate) const CIVILIAN_HEIGHT: f32 = 40.0;
const CIVILIAN_SPEED: f32 = 1.5;
const FEAR_RADIUS: f32 = 150.0;
const FLEE_MULTIPLIER: f32 = 1.5;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Civilian {
    id: CivilianId,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    speed: f32,
    state: CivilianState,
    walk_direction: i8,
    hue: f32,
}

impl Civilian {
    pub(crate) fn new(id: CivilianId, x: f32, y: f32, walk_direction: i8, hue: f32) -> Self {
        Self {
            id,
            x,
            y,
            width: CIVILIAN_WIDTH,
            height: CIVILIAN_HEIGHT,
            speed: CIVILIAN_SPEED,
            state: CivilianState::Walking,
            walk_direction,
            hue,
        }
    }

    pub(crate) const fn id(&self) -> CivilianId {
        self.id
    }

    /// Nearest living monster within the fear radius, measured between
    /// upper-left corners.
    fn nearest_threat(&self, monsters: &[Rect]) -> Option<Rect> {
        let mut closest = FEAR_RADIUS;
        let mut threat = None;
        for monster in monsters {
            let distance =
                ((self.x - monster.x()).powi(2) + (self.y - monster.y()).powi(2)).sqrt();
            if distance < closest {
                closest = distance;
                threat = Some(*monster);
            }
        }
        threat
    }

    /// Advances the civilian by one tick.
    ///
    /// Returns `true` once the civilian is fully past either horizontal
    /// bound and should be removed.
    pub(crate) fn update(&mut self, monsters: &[Rect], viewport: Viewport) -> bool {
        if let Some(threat) = self.nearest_threat(monsters) {
            self.state = CivilianState::Fleeing;
            self.walk_direction = if threat.x() < self.x { 1 } else { -1 };
            self.x += f32::from(self.walk_direction) * self.speed * FLEE_MULTIPLIER;
        } else {
            self.state = CivilianState::Walking;
            self.x += f32::from(self.walk_direction) * self.speed;
        }

        let ground = viewport.height() - self.height;
        if self.y > ground {
            self.y = ground;
        }

        self.x + self.width < 0.0 || self.x > viewport.width()
    }

    pub(crate) fn snapshot(&self) -> CivilianSnapshot {
        CivilianSnapshot {
            id: self.id,
            footprint: self.footprint(),
            state: self.state,
            walk_direction: self.walk_direction,
            hue: self.hue,
        }
    }
}

impl Footprint for Civilian {
    fn footprint(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::{Civilian, CIVILIAN_HEIGHT};
    use kaiju_core::{geometry::Rect, snapshot::CivilianState, CivilianId, Viewport};

    fn viewport() -> Viewport {
        Viewport::new(800.0, 700.0)
    }

    fn civilian(x: f32, walk_direction: i8) -> Civilian {
        Civilian::new(
            CivilianId::new(0),
            x,
            700.0 - CIVILIAN_HEIGHT,
            walk_direction,
            120.0,
        )
    }

    fn monster_at(x: f32) -> Rect {
        Rect::new(x, 650.0, 50.0, 50.0)
    }

    #[test]
    fn walks_in_its_assigned_direction() {
        let mut walker = civilian(400.0, -1);
        assert!(!walker.update(&[], viewport()));
        let snapshot = walker.snapshot();
        assert_eq!(snapshot.state, CivilianState::Walking);
        assert_eq!(snapshot.footprint.x(), 398.5);
    }

    #[test]
    fn flees_away_from_a_nearby_monster_at_elevated_speed() {
        let mut walker = civilian(400.0, -1);
        assert!(!walker.update(&[monster_at(350.0)], viewport()));
        let snapshot = walker.snapshot();
        assert_eq!(snapshot.state, CivilianState::Fleeing);
        assert_eq!(snapshot.walk_direction, 1);
        assert_eq!(snapshot.footprint.x(), 402.25);
    }

    #[test]
    fn distant_monster_does_not_trigger_fleeing() {
        let mut walker = civilian(400.0, 1);
        assert!(!walker.update(&[monster_at(100.0)], viewport()));
        assert_eq!(walker.snapshot().state, CivilianState::Walking);
    }

    #[test]
    fn despawns_once_fully_past_the_left_bound() {
        let mut walker = civilian(-19.0, -1);
        assert!(walker.update(&[], viewport()));
    }

    #[test]
    fn despawns_past_the_right_bound() {
        let mut walker = civilian(799.5, 1);
        assert!(walker.update(&[], viewport()));
    }
}
