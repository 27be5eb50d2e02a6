// One moving body under constant gravity, bouncing off the window edges.
// Unit step = one frame; speed depends on frame rate and that is fine here.

use crate::types::Vec3;

/// Velocity lost to gravity every frame that did not bounce.
pub const GRAVITY: f32 = 0.4;
/// Distance from an edge at which the body turns around.
pub const EDGE: f32 = 20.0;

/// The one moving thing in the scene.
/// Visual: drawn as the green square (and the blue quad in the diagnostic view).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Body {
    pub pos: Vec3, // pixels, y grows upward
    pub vel: Vec3, // pixels per frame
}

impl Default for Body {
    /// Starts low on the left edge, drifting right.
    fn default() -> Self {
        Self {
            pos: Vec3::new(20.0, 200.0, 0.0),
            vel: Vec3::new(3.0, 0.0, 0.0),
        }
    }
}

/// Advance the body by one frame inside a `width x height` area.
/// No clamping: the body may overshoot an edge by one step before it turns.
pub fn step(body: &mut Body, width: f32, height: f32) {
    let mut add_gravity = true;

    // 1) Move by one frame of velocity.
    body.pos.x += body.vel.x;
    body.pos.y += body.vel.y;

    // 2) Side walls. Visual: the square bounces back horizontally.
    let hit_left = body.pos.x < EDGE && body.vel.x < 0.0;
    let hit_right = body.pos.x >= width - EDGE && body.vel.x > 0.0;
    if hit_left || hit_right {
        body.vel.x = -body.vel.x;
        add_gravity = false;
    }

    // 3) Floor and ceiling. The ceiling sits *above* the window (height + EDGE),
    //    so the body flies out of view before it turns back.
    let hit_floor = body.pos.y < EDGE && body.vel.y < 0.0;
    let hit_ceiling = body.pos.y >= height + EDGE && body.vel.y > 0.0;
    if hit_floor || hit_ceiling {
        body.vel.y = -body.vel.y;
        add_gravity = false;
    }

    // 4) Gravity only on frames without a bounce.
    if add_gravity {
        body.vel.y -= GRAVITY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(pos: (f32, f32), vel: (f32, f32)) -> Body {
        Body {
            pos: Vec3::new(pos.0, pos.1, 0.0),
            vel: Vec3::new(vel.0, vel.1, 0.0),
        }
    }

    #[test]
    fn resting_body_only_gains_gravity() {
        let mut b = body((300.0, 200.0), (0.0, 0.0));
        step(&mut b, 640.0, 480.0);
        assert_eq!(b.pos, Vec3::new(300.0, 200.0, 0.0));
        assert_eq!(b.vel.y, -GRAVITY);
    }

    #[test]
    fn left_edge_reflects_and_skips_gravity() {
        let mut b = body((19.0, 200.0), (-3.0, 0.0));
        step(&mut b, 640.0, 480.0);
        assert_eq!(b.vel.x, 3.0);
        assert_eq!(b.vel.y, 0.0);
    }

    #[test]
    fn right_edge_reflects() {
        let mut b = body((618.0, 200.0), (3.0, 0.0));
        step(&mut b, 640.0, 480.0);
        assert_eq!(b.pos.x, 621.0);
        assert_eq!(b.vel.x, -3.0);
    }

    #[test]
    fn floor_reflects_falling_body() {
        let mut b = body((300.0, 22.0), (0.0, -5.0));
        step(&mut b, 640.0, 480.0);
        assert_eq!(b.pos.y, 17.0);
        assert_eq!(b.vel.y, 5.0);
    }

    #[test]
    fn ceiling_is_above_the_window() {
        // height - EDGE is not a bounce point
        let mut b = body((300.0, 465.0), (0.0, 1.0));
        step(&mut b, 640.0, 480.0);
        assert_eq!(b.vel.y, 1.0 - GRAVITY);

        let mut b = body((300.0, 499.0), (0.0, 1.0));
        step(&mut b, 640.0, 480.0);
        assert_eq!(b.vel.y, -1.0);
    }

    #[test]
    fn first_frame_from_start() {
        let mut b = body((20.0, 200.0), (3.0, 0.0));
        step(&mut b, 640.0, 480.0);
        assert_eq!(b.pos, Vec3::new(23.0, 200.0, 0.0));
        assert_eq!(b.vel, Vec3::new(3.0, -0.4, 0.0));
    }

    #[test]
    fn default_matches_first_frame_setup() {
        assert_eq!(Body::default(), body((20.0, 200.0), (3.0, 0.0)));
    }
}
