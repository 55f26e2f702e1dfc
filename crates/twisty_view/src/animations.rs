use twisty_core::{Move, QUARTER_TURN};

/// Tolerance for deciding that a twist has reached its target angle, in
/// radians.
pub const ANGLE_EPSILON: f32 = 1e-5;

/// Animation state of one quarter turn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TwistAnimation {
    /// Twist being animated.
    pub twist: Move,
    /// Unsigned angle turned so far.
    pub angle: f32,
    /// Unsigned angle at which the twist is complete.
    pub target: f32,
    /// Angular speed, in radians per second.
    pub speed: f32,
}

/// Rotation to apply to the layer group after one animation step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TwistStep {
    /// The twist is still in progress. Rotate the group by this many radians.
    Continue(f32),
    /// The twist is complete. Rotate the group by this many radians, then snap
    /// it to a quarter turn.
    Finish(f32),
}

impl TwistAnimation {
    /// Starts a quarter turn animation.
    pub fn new(twist: Move, speed: f32) -> Self {
        Self {
            twist,
            angle: 0.0,
            target: QUARTER_TURN,
            speed,
        }
    }

    /// Steps the animation forward by `delta` seconds.
    pub fn proceed(&mut self, delta: f32) -> TwistStep {
        let sign = self.twist.direction.to_f32();
        let prev_angle = self.angle;
        self.angle += self.speed * delta;
        if self.angle >= self.target - ANGLE_EPSILON {
            self.angle = self.target;
            TwistStep::Finish((self.target - prev_angle) * sign)
        } else {
            TwistStep::Continue((self.angle - prev_angle) * sign)
        }
    }

    /// Returns the progress of the twist, from 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        (self.angle / self.target).clamp(0.0, 1.0)
    }
}

/// Rounds an angle to the nearest multiple of a quarter turn.
pub fn snap_to_quarter_turn(angle: f32) -> f32 {
    (angle / QUARTER_TURN).round() * QUARTER_TURN
}
