use crate::real::Real;
use crate::vec2::Vec2;

// One fixed step of a point mass under constant acceleration.
// Semi-implicit: velocity first, then position with the updated
// velocity. The ordering matters for stability.
pub fn euler(position: &mut Vec2, velocity: &mut Vec2, acceleration: Vec2, dt: Real) {
    *velocity += acceleration * dt;
    *position += *velocity * dt;
}

// Midpoint (second-order Runge-Kutta) step, specialized to constant
// acceleration: position advances with the half-step velocity.
pub fn rk2(position: &mut Vec2, velocity: &mut Vec2, acceleration: Vec2, dt: Real) {
    let mid_velocity = *velocity + acceleration * (dt * 0.5);
    *position += mid_velocity * dt;
    *velocity += acceleration * dt;
}
