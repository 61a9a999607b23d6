use crate::real::{Real, DEG_TO_RAD, RAD_TO_DEG, TWO_PI};
use crate::vec2::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

// callers must establish min <= max, the out-of-order result is
// unspecified
#[inline]
pub fn clamp(value: Real, min: Real, max: Real) -> Real {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

// t outside [0,1] extrapolates
#[inline]
pub fn lerp(a: Real, b: Real, t: Real) -> Real {
    a + t * (b - a)
}

#[inline]
pub fn to_radians(degrees: Real) -> Real {
    degrees * DEG_TO_RAD
}

#[inline]
pub fn to_degrees(radians: Real) -> Real {
    radians * RAD_TO_DEG
}

#[inline]
pub fn swap<T>(a: &mut T, b: &mut T) {
    core::mem::swap(a, b);
}

// Caller-owned generator, one per caller (or thread) instead of hidden
// process-wide state. Seed it for reproducible sequences in tests.
pub struct MathRng(Pcg32);

impl MathRng {
    pub fn from_entropy() -> Self {
        Self(Pcg32::from_entropy())
    }

    pub fn seed_from_u64(seed: u64) -> Self {
        Self(Pcg32::seed_from_u64(seed))
    }

    // uniform in [min, max]
    pub fn range(&mut self, min: Real, max: Real) -> Real {
        self.0.gen_range(min..=max)
    }

    pub fn unit_vec2(&mut self) -> Vec2 {
        let angle = self.range(0.0, TWO_PI);
        Vec2::new(angle.cos(), angle.sin())
    }

    // the square root keeps the areal distribution uniform over the
    // disc, without it samples bunch toward the centre
    pub fn inside_unit_circle(&mut self) -> Vec2 {
        self.unit_vec2() * self.range(0.0, 1.0).sqrt()
    }
}

impl Default for MathRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
