// Spring-damper follower used by the cursor overlay.
//
// Each axis is a damped harmonic oscillator `m·x'' + c·x' + k·x = 0` in the
// displacement `x = pos - target`. [`step_spring`] advances the closed-form
// solution by `dt`, so the result does not depend on the frame rate and
// cannot blow up on a long frame. With the default parameters the system is
// slightly overdamped (ζ ≈ 1.12): starting from rest it approaches the
// target monotonically and never crosses it.

use crate::core::constants::{
    FOLLOWER_DAMPING, FOLLOWER_MASS, FOLLOWER_REST_DELTA_PX, FOLLOWER_REST_SPEED_PX_PER_SEC,
    FOLLOWER_STIFFNESS, MAX_FRAME_DT_SEC,
};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub damping: f32,
    pub stiffness: f32,
    pub mass: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            damping: FOLLOWER_DAMPING,
            stiffness: FOLLOWER_STIFFNESS,
            mass: FOLLOWER_MASS,
        }
    }
}

impl SpringParams {
    /// Undamped angular frequency ω0 = sqrt(k/m).
    #[inline]
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    /// ζ = c / (2·sqrt(k·m)); 1 is critical.
    #[inline]
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

// Closed-form step of one axis. `x0` is displacement from the target.
fn step_axis(x0: f32, v0: f32, dt: f32, omega: f32, zeta: f32) -> (f32, f32) {
    if (zeta - 1.0).abs() < 1e-4 {
        let decay = (-omega * dt).exp();
        let b = v0 + omega * x0;
        (decay * (x0 + b * dt), decay * (v0 - omega * b * dt))
    } else if zeta < 1.0 {
        let a = zeta * omega;
        let wd = omega * (1.0 - zeta * zeta).sqrt();
        let b = (v0 + a * x0) / wd;
        let decay = (-a * dt).exp();
        let (s, c) = (wd * dt).sin_cos();
        (
            decay * (x0 * c + b * s),
            decay * (v0 * c - (a * b + x0 * wd) * s),
        )
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -omega * (zeta - root);
        let r2 = -omega * (zeta + root);
        let c2 = (v0 - r1 * x0) / (r2 - r1);
        let c1 = x0 - c2;
        let e1 = (r1 * dt).exp();
        let e2 = (r2 * dt).exp();
        (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
    }
}

/// Advance a 2D spring toward `target` by `dt` seconds.
///
/// Returns the new `(position, velocity)`. A non-positive `dt` leaves the
/// state unchanged.
pub fn step_spring(
    position: Vec2,
    velocity: Vec2,
    target: Vec2,
    dt: f32,
    params: SpringParams,
) -> (Vec2, Vec2) {
    if dt <= 0.0 || !dt.is_finite() {
        return (position, velocity);
    }
    let omega = params.natural_frequency();
    let zeta = params.damping_ratio();
    let d = position - target;
    let (dx, vx) = step_axis(d.x, velocity.x, dt, omega, zeta);
    let (dy, vy) = step_axis(d.y, velocity.y, dt, omega, zeta);
    (target + Vec2::new(dx, dy), Vec2::new(vx, vy))
}

/// Position that chases a moving target under [`SpringParams`].
///
/// The output is only ever changed by [`SmoothFollower::tick`]; targets are
/// recorded by [`SmoothFollower::set_target`] and picked up on the next frame.
#[derive(Clone, Debug)]
pub struct SmoothFollower {
    params: SpringParams,
    position: Vec2,
    velocity: Vec2,
    target: Vec2,
    initialized: bool,
    at_rest: bool,
}

impl Default for SmoothFollower {
    fn default() -> Self {
        Self::new(SpringParams::default())
    }
}

impl SmoothFollower {
    pub fn new(params: SpringParams) -> Self {
        Self {
            params,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            target: Vec2::ZERO,
            initialized: false,
            at_rest: true,
        }
    }

    /// Record a new target. The first target ever seen places the follower
    /// directly on it so it does not fly in from the origin.
    pub fn set_target(&mut self, target: Vec2) {
        if !self.initialized {
            self.position = target;
            self.velocity = Vec2::ZERO;
            self.initialized = true;
        } else if target != self.target {
            self.at_rest = false;
        }
        self.target = target;
    }

    /// Integrate one frame of `dt_sec` seconds and return the new position.
    pub fn tick(&mut self, dt_sec: f32) -> Vec2 {
        if !self.initialized || self.at_rest {
            return self.position;
        }
        let dt = dt_sec.clamp(0.0, MAX_FRAME_DT_SEC);
        let (pos, vel) = step_spring(self.position, self.velocity, self.target, dt, self.params);
        self.position = pos;
        self.velocity = vel;

        let delta = (self.target - pos).abs();
        let speed = vel.abs();
        if delta.max_element() < FOLLOWER_REST_DELTA_PX
            && speed.max_element() < FOLLOWER_REST_SPEED_PX_PER_SEC
        {
            self.position = self.target;
            self.velocity = Vec2::ZERO;
            self.at_rest = true;
        }
        self.position
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[cfg(test)]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// True when the follower sits on its target with no velocity.
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }
}
