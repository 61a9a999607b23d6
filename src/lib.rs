pub mod geometry;
pub mod integrate;
mod mat2;
mod real;
mod tools;
mod vec2;
mod vec3;

pub use mat2::Mat2;
pub use real::{Real, DEG_TO_RAD, EPSILON, HALF_PI, PI, RAD_TO_DEG, TWO_PI};
pub use tools::{clamp, lerp, swap, to_degrees, to_radians, MathRng};
pub use vec2::Vec2;
pub use vec3::Vec3;
