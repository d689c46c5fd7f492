//! Destructible city buildings and their damage-frame selection.

use kaiju_core::{
    geometry::{FrameSize, Footprint, Rect},
    health::{DamageOutcome, Health},
    snapshot::{BuildingSnapshot, DamageFrameRef},
    BuildingId,
};

/// Health-percentage thresholds in ascending order. The frame for a
/// threshold sits `(100 - t) / 25` cells from the left on the sheet.
const DAMAGE_THRESHOLDS: [u8; 5] = [0, 25, 50, 75, 100];
const DEFAULT_FRAME_WIDTH: f32 = 100.0;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Building {
    id: BuildingId,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    health: Health,
    frame: Option<FrameSize>,
}

impl Building {
    pub(crate) fn new(
        id: BuildingId,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        health: f32,
        frame: Option<FrameSize>,
    ) -> Self {
        Self {
            id,
            x,
            y,
            width,
            height,
            health: Health::new(health),
            frame,
        }
    }

    pub(crate) const fn id(&self) -> BuildingId {
        self.id
    }

    pub(crate) fn is_destroyed(&self) -> bool {
        self.health.is_depleted()
    }

    /// Applies damage, clamping at zero. Destroyed buildings reject further
    /// damage, so [`DamageOutcome::Destroyed`] is reported exactly once.
    pub(crate) fn take_damage(&mut self, amount: f32) -> DamageOutcome {
        self.health.apply(amount)
    }

    /// Selects the damage frame for the current health percentage.
    ///
    /// Thresholds are scanned in ascending order and the first threshold at
    /// or above the percentage wins, defaulting to the intact frame. The
    /// selection is monotonic: losing health never picks a less-damaged
    /// frame.
    pub(crate) fn damage_frame(&self) -> DamageFrameRef {
        let percentage = self.health.percentage();
        let mut chosen = *DAMAGE_THRESHOLDS.last().unwrap_or(&100);
        for threshold in DAMAGE_THRESHOLDS {
            if percentage <= f32::from(threshold) {
                chosen = threshold;
                break;
            }
        }
        let frame_width = self.frame.map_or(DEFAULT_FRAME_WIDTH, |frame| frame.width());
        let cell = (100 - u32::from(chosen)) / 25;
        DamageFrameRef {
            threshold: chosen,
            source_x: cell as f32 * frame_width,
            source_y: 0.0,
        }
    }

    pub(crate) fn snapshot(&self) -> BuildingSnapshot {
        BuildingSnapshot {
            id: self.id,
            footprint: self.footprint(),
            current_health: self.health.current(),
            initial_health: self.health.initial(),
            destroyed: self.is_destroyed(),
            damage_frame: self.damage_frame(),
        }
    }
}

impl Footprint for Building {
    fn footprint(&self) -> Rect {
        let width = self.frame.map_or(self.width, |frame| frame.width());
        let height = self.frame.map_or(self.height, |frame| frame.height());
        Rect::new(self.x, self.y, width, height)
    }
}
