//! Generic named-animation state machine shared by actor entities.
//!
//! Animation identifiers are closed enumerations per actor kind, so an
//! unknown animation name is unrepresentable; switching to the already
//! current variant is still a no-op.

use serde::{Deserialize, Serialize};

/// Frame-table parameters for one animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationSpec {
    /// Sprite-sheet row holding this animation's frames.
    pub row: u32,
    /// Number of frames in the animation; always at least 1.
    pub frame_count: u32,
    /// Ticks accumulated before the frame index advances.
    pub frame_interval: u32,
    /// Whether the animation wraps back to frame 0 or freezes on the last
    /// frame.
    pub looping: bool,
}

/// Closed set of animation identifiers for one actor kind, with a fixed
/// lookup from identifier to frame table.
pub trait AnimationSet: Copy + Eq {
    /// Frame-table parameters for this identifier.
    fn spec(self) -> AnimationSpec;
}

/// Animations available to a monster. Rows match the monster sprite sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterAnimation {
    /// Standing still.
    Idle,
    /// Horizontal movement.
    Walk,
    /// Punch activation; freezes on the last frame.
    Punch,
    /// Scaling a building.
    Climb,
    /// Transient damage reaction.
    Hit,
    /// Terminal defeated pose.
    Defeated,
}

impl AnimationSet for MonsterAnimation {
    fn spec(self) -> AnimationSpec {
        match self {
            Self::Idle => AnimationSpec {
                row: 0,
                frame_count: 2,
                frame_interval: 20,
                looping: true,
            },
            Self::Walk => AnimationSpec {
                row: 1,
                frame_count: 4,
                frame_interval: 10,
                looping: true,
            },
            Self::Punch => AnimationSpec {
                row: 2,
                frame_count: 3,
                frame_interval: 7,
                looping: false,
            },
            Self::Climb => AnimationSpec {
                row: 3,
                frame_count: 2,
                frame_interval: 15,
                looping: true,
            },
            Self::Hit => AnimationSpec {
                row: 4,
                frame_count: 1,
                frame_interval: 10,
                looping: false,
            },
            Self::Defeated => AnimationSpec {
                row: 5,
                frame_count: 1,
                frame_interval: 1,
                looping: false,
            },
        }
    }
}

/// Animations available to a flying enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyAnimation {
    /// Rotor loop while patrolling.
    Hover,
}

impl AnimationSet for EnemyAnimation {
    fn spec(self) -> AnimationSpec {
        match self {
            Self::Hover => AnimationSpec {
                row: 0,
                frame_count: 4,
                frame_interval: 5,
                looping: true,
            },
        }
    }
}

/// Drives frame selection for one actor.
///
/// `frame` stays within `[0, frame_count)`; non-looping animations freeze on
/// their last frame until a different animation is selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Animator<A: AnimationSet> {
    current: A,
    frame: u32,
    timer: u32,
}

impl<A: AnimationSet> Animator<A> {
    /// Creates an animator starting at frame 0 of the provided animation.
    #[must_use]
    pub const fn new(initial: A) -> Self {
        Self {
            current: initial,
            frame: 0,
            timer: 0,
        }
    }

    /// Currently selected animation.
    #[must_use]
    pub const fn current(&self) -> A {
        self.current
    }

    /// Current frame index within the animation.
    #[must_use]
    pub const fn frame(&self) -> u32 {
        self.frame
    }

    /// Switches to the provided animation, resetting frame and timer.
    /// No-op when the animation is already current.
    pub fn set(&mut self, animation: A) {
        if self.current == animation {
            return;
        }
        self.current = animation;
        self.frame = 0;
        self.timer = 0;
    }

    /// Accumulates one tick toward the next frame advance.
    pub fn advance(&mut self) {
        let spec = self.current.spec();
        if spec.frame_count <= 1 {
            return;
        }
        if !spec.looping && self.frame == spec.frame_count - 1 {
            return;
        }
        self.timer += 1;
        if self.timer >= spec.frame_interval {
            self.timer = 0;
            self.frame += 1;
            if self.frame >= spec.frame_count {
                self.frame = if spec.looping {
                    0
                } else {
                    spec.frame_count - 1
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimationSet, Animator, MonsterAnimation};

    fn run_ticks(animator: &mut Animator<MonsterAnimation>, ticks: u32) {
        for _ in 0..ticks {
            animator.advance();
        }
    }

    #[test]
    fn frame_stays_within_bounds_for_looping_animation() {
        let mut animator = Animator::new(MonsterAnimation::Walk);
        let frame_count = MonsterAnimation::Walk.spec().frame_count;
        for _ in 0..500 {
            animator.advance();
            assert!(animator.frame() < frame_count);
        }
    }

    #[test]
    fn looping_animation_wraps_to_zero() {
        let mut animator = Animator::new(MonsterAnimation::Walk);
        let spec = MonsterAnimation::Walk.spec();
        run_ticks(&mut animator, spec.frame_interval * spec.frame_count);
        assert_eq!(animator.frame(), 0);
    }

    #[test]
    fn non_looping_animation_freezes_on_last_frame() {
        let mut animator = Animator::new(MonsterAnimation::Punch);
        let spec = MonsterAnimation::Punch.spec();
        run_ticks(&mut animator, spec.frame_interval * spec.frame_count * 3);
        assert_eq!(animator.frame(), spec.frame_count - 1);
        animator.advance();
        assert_eq!(animator.frame(), spec.frame_count - 1);
    }

    #[test]
    fn single_frame_animation_never_advances() {
        let mut animator = Animator::new(MonsterAnimation::Hit);
        run_ticks(&mut animator, 100);
        assert_eq!(animator.frame(), 0);
    }

    #[test]
    fn switching_animation_resets_frame_and_timer() {
        let mut animator = Animator::new(MonsterAnimation::Walk);
        run_ticks(&mut animator, 25);
        assert!(animator.frame() > 0);
        animator.set(MonsterAnimation::Climb);
        assert_eq!(animator.current(), MonsterAnimation::Climb);
        assert_eq!(animator.frame(), 0);
    }

    #[test]
    fn setting_current_animation_is_a_no_op() {
        let mut animator = Animator::new(MonsterAnimation::Walk);
        run_ticks(&mut animator, 15);
        let frame_before = animator.frame();
        animator.set(MonsterAnimation::Walk);
        assert_eq!(animator.frame(), frame_before);
    }

    #[test]
    fn frame_advances_only_after_full_interval() {
        let mut animator = Animator::new(MonsterAnimation::Walk);
        let interval = MonsterAnimation::Walk.spec().frame_interval;
        run_ticks(&mut animator, interval - 1);
        assert_eq!(animator.frame(), 0);
        animator.advance();
        assert_eq!(animator.frame(), 1);
    }
}
