//! Player- and policy-controlled monsters.
//!
//! Both control modes resolve to the same [`Intent`] record each tick, so
//! movement, climbing, and punching behave identically regardless of who is
//! driving.

use kaiju_core::{
    animation::{Animator, MonsterAnimation},
    geometry::{collides, FrameSize, Footprint, Rect},
    health::{DamageOutcome, Health},
    snapshot::MonsterSnapshot,
    ActionKind, ControlKind, FacingDirection, InputEvent, Intent, MonsterId, Viewport,
};

use crate::building::Building;

pub(crate) const MONSTER_SIZE: f32 = 50.0;
pub(crate) const MONSTER_HEALTH: f32 = 100.0;
pub(crate) const MONSTER_SPEED: f32 = 5.0;
pub(crate) const PUNCH_POWER: f32 = 20.0;
const PUNCH_DURATION: u32 = 30;
const INVULNERABILITY_DURATION: u32 = 60;
const GRAVITY_FALL: f32 = 2.5;

/// Latched keyboard state for one monster. Movement actions stay pressed
/// until released; the punch is a one-shot queued for the next tick.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ActionState {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    punch_queued: bool,
}

impl ActionState {
    fn apply(&mut self, action: ActionKind, input: InputEvent) {
        let pressed = match input {
            InputEvent::Press | InputEvent::Trigger => true,
            InputEvent::Release => false,
        };
        match action {
            ActionKind::Left => self.left = pressed,
            ActionKind::Right => self.right = pressed,
            ActionKind::Up => self.up = pressed,
            ActionKind::Down => self.down = pressed,
            ActionKind::Punch => {
                if pressed {
                    self.punch_queued = true;
                }
            }
        }
    }

    fn resolve(&mut self) -> Intent {
        let intent = Intent {
            left: self.left,
            right: self.right,
            up: self.up,
            down: self.down,
            punch: self.punch_queued,
        };
        self.punch_queued = false;
        intent
    }
}

/// Intent source for one monster.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Controller {
    Keyboard(ActionState),
    Scripted { pending: Intent },
}

impl Controller {
    const fn kind(&self) -> ControlKind {
        match self {
            Self::Keyboard(_) => ControlKind::Human,
            Self::Scripted { .. } => ControlKind::Scripted,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Monster {
    id: MonsterId,
    controller: Controller,
    x: f32,
    y: f32,
    size: f32,
    speed: f32,
    health: Health,
    facing: FacingDirection,
    climbing: bool,
    punching: bool,
    punch_timer: u32,
    invulnerable_ticks: u32,
    defeated: bool,
    punch_power: f32,
    animator: Animator<MonsterAnimation>,
    frame: Option<FrameSize>,
}

impl Monster {
    pub(crate) fn new(
        id: MonsterId,
        control: ControlKind,
        x: f32,
        y: f32,
        frame: Option<FrameSize>,
    ) -> Self {
        let controller = match control {
            ControlKind::Human => Controller::Keyboard(ActionState::default()),
            ControlKind::Scripted => Controller::Scripted {
                pending: Intent::default(),
            },
        };
        Self {
            id,
            controller,
            x,
            y,
            size: MONSTER_SIZE,
            speed: MONSTER_SPEED,
            health: Health::new(MONSTER_HEALTH),
            facing: FacingDirection::Right,
            climbing: false,
            punching: false,
            punch_timer: 0,
            invulnerable_ticks: 0,
            defeated: false,
            punch_power: PUNCH_POWER,
            animator: Animator::new(MonsterAnimation::Idle),
            frame,
        }
    }

    pub(crate) const fn id(&self) -> MonsterId {
        self.id
    }

    pub(crate) const fn control(&self) -> ControlKind {
        self.controller.kind()
    }

    pub(crate) const fn is_defeated(&self) -> bool {
        self.defeated
    }

    pub(crate) const fn punch_power(&self) -> f32 {
        self.punch_power
    }

    fn width(&self) -> f32 {
        self.frame.map_or(self.size, |frame| frame.width())
    }

    fn height(&self) -> f32 {
        self.frame.map_or(self.size, |frame| frame.height())
    }

    /// Latches keyboard input. Returns `false` for scripted monsters, which
    /// only accept whole-intent updates.
    pub(crate) fn apply_input(&mut self, action: ActionKind, input: InputEvent) -> bool {
        match &mut self.controller {
            Controller::Keyboard(state) => {
                state.apply(action, input);
                true
            }
            Controller::Scripted { .. } => false,
        }
    }

    /// Stores the intent for the next tick. Returns `false` for
    /// keyboard-controlled monsters.
    pub(crate) fn set_intent(&mut self, intent: Intent) -> bool {
        match &mut self.controller {
            Controller::Keyboard(_) => false,
            Controller::Scripted { pending } => {
                *pending = intent;
                true
            }
        }
    }

    /// Resolves this tick's intent from whichever controller is attached.
    /// Scripted intents and queued punches are consumed by the call.
    pub(crate) fn resolve_intent(&mut self) -> Intent {
        match &mut self.controller {
            Controller::Keyboard(state) => state.resolve(),
            Controller::Scripted { pending } => std::mem::take(pending),
        }
    }

    /// Begins a punch activation unless one is already in progress.
    fn begin_punch(&mut self) -> bool {
        if self.punching && self.punch_timer < PUNCH_DURATION {
            return false;
        }
        self.punching = true;
        self.punch_timer = 0;
        self.animator.set(MonsterAnimation::Punch);
        true
    }

    /// Advances the monster by one tick.
    ///
    /// Returns `true` when a new punch activation began, so the caller can
    /// resolve the damage sweep at the monster's current position.
    pub(crate) fn update(
        &mut self,
        intent: Intent,
        buildings: &[Building],
        viewport: Viewport,
    ) -> bool {
        if self.defeated {
            self.animator.set(MonsterAnimation::Defeated);
            self.animator.advance();
            return false;
        }

        let punch_started = if intent.punch { self.begin_punch() } else { false };

        if self.invulnerable_ticks > 0 {
            self.invulnerable_ticks -= 1;
            if self.animator.current() == MonsterAnimation::Hit && self.invulnerable_ticks == 0 {
                self.animator.set(MonsterAnimation::Idle);
            }
        }

        if self.punching {
            if self.animator.current() != MonsterAnimation::Hit {
                self.animator.set(MonsterAnimation::Punch);
            }
            self.punch_timer += 1;
            if self.punch_timer >= PUNCH_DURATION {
                self.punching = false;
                self.punch_timer = 0;
                if self.animator.current() == MonsterAnimation::Punch {
                    self.animator.set(MonsterAnimation::Idle);
                }
            }
        }

        let hit_locked =
            self.animator.current() == MonsterAnimation::Hit && self.invulnerable_ticks > 0;
        if !self.punching && !hit_locked && !intent.punch {
            let mut moving = false;
            if intent.left && self.x > 0.0 {
                self.x -= self.speed;
                self.facing = FacingDirection::Left;
                moving = true;
            }
            if intent.right && self.x < viewport.width() - self.width() {
                self.x += self.speed;
                self.facing = FacingDirection::Right;
                moving = true;
            }

            self.climbing = false;
            let mut engaged = None;
            for building in buildings {
                if building.is_destroyed() {
                    continue;
                }
                if collides(self, building) {
                    self.climbing = true;
                    engaged = Some(building.footprint());
                    break;
                }
            }

            if let Some(span) = engaged {
                moving = true;
                self.animator.set(MonsterAnimation::Climb);
                if intent.up && self.y > span.y() {
                    self.y -= self.speed;
                    if self.y < span.y() {
                        self.y = span.y();
                    }
                }
                if intent.down && self.y + self.height() < span.bottom() {
                    self.y += self.speed;
                    if self.y + self.height() > span.bottom() {
                        self.y = span.bottom() - self.height();
                    }
                }
            } else {
                self.y += GRAVITY_FALL;
                self.animator.set(if moving {
                    MonsterAnimation::Walk
                } else {
                    MonsterAnimation::Idle
                });
            }

            if self.y < 0.0 {
                self.y = 0.0;
            }
            let ground = viewport.height() - self.height();
            if self.y > ground {
                self.y = ground;
                if !self.climbing {
                    self.animator.set(if moving {
                        MonsterAnimation::Walk
                    } else {
                        MonsterAnimation::Idle
                    });
                }
            }
        }

        self.animator.advance();
        punch_started
    }

    /// Applies damage unless the monster is invulnerable or defeated.
    pub(crate) fn take_damage(&mut self, amount: f32) -> DamageOutcome {
        if self.invulnerable_ticks > 0 || self.defeated {
            return DamageOutcome::Rejected;
        }
        match self.health.apply(amount) {
            DamageOutcome::Destroyed => {
                self.defeated = true;
                self.animator.set(MonsterAnimation::Defeated);
                DamageOutcome::Destroyed
            }
            DamageOutcome::Damaged => {
                if !self.punching {
                    self.animator.set(MonsterAnimation::Hit);
                }
                self.invulnerable_ticks = INVULNERABILITY_DURATION;
                DamageOutcome::Damaged
            }
            DamageOutcome::Rejected => DamageOutcome::Rejected,
        }
    }

    pub(crate) fn snapshot(&self) -> MonsterSnapshot {
        MonsterSnapshot {
            id: self.id,
            control: self.control(),
            footprint: self.footprint(),
            speed: self.speed,
            current_health: self.health.current(),
            initial_health: self.health.initial(),
            defeated: self.defeated,
            climbing: self.climbing,
            punching: self.punching,
            invulnerable_ticks: self.invulnerable_ticks,
            facing: self.facing,
            animation: self.animator.current(),
            animation_frame: self.animator.frame(),
        }
    }
}

impl Footprint for Monster {
    fn footprint(&self) -> Rect {
        Rect::new(self.x, self.y, self.width(), self.height())
    }
}
