//! Fixed-point half units for ranks and skill points.
//!
//! Cross-class training buys ranks in half steps, and the cross-class ceiling
//! `(level + 3) / 2` is itself a half value on even levels. Storing a count of
//! halves keeps every training calculation exact and deterministic.
//!
//! The count is a `u64`, wide enough for any ceiling or investment built from
//! `u32` levels and `i32` point amounts. Growth saturates instead of wrapping.

use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// A non-negative quantity counted in halves (`Halves(3)` is 1.5).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Halves(u64);

/// Ranks invested in a skill.
pub type Ranks = Halves;

/// Skill points, in the same half-unit scale as ranks.
pub type SkillPoints = Halves;

impl Halves {
    pub const ZERO: Self = Self(0);

    /// Creates a quantity from a raw count of halves.
    pub const fn from_halves(halves: u64) -> Self {
        Self(halves)
    }

    /// Creates a quantity from a whole number.
    pub const fn from_whole(whole: u32) -> Self {
        Self(whole as u64 * 2)
    }

    /// Raw count of halves.
    pub const fn halves(self) -> u64 {
        self.0
    }

    /// Whole part, truncating any trailing half.
    pub const fn whole(self) -> u64 {
        self.0 / 2
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn is_whole(self) -> bool {
        self.0 % 2 == 0
    }

    /// Multiplies by a whole factor (the per-rank point cost).
    pub const fn scale(self, factor: u32) -> Self {
        Self(self.0.saturating_mul(factor as u64))
    }

    /// Divides by a whole factor, truncating below one half.
    pub const fn unscale(self, factor: u32) -> Self {
        Self(self.0 / factor as u64)
    }

    /// Addition clamped at the largest representable quantity.
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Subtraction clamped at zero.
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 2.0
    }
}

impl Add for Halves {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl AddAssign for Halves {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.saturating_add(rhs);
    }
}

impl Sub for Halves {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Halves {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Halves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.whole())
        } else {
            write!(f, "{}.5", self.whole())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_trailing_half() {
        assert_eq!(Halves::from_whole(2).to_string(), "2");
        assert_eq!(Halves::from_halves(3).to_string(), "1.5");
        assert_eq!(Halves::ZERO.to_string(), "0");
    }

    #[test]
    fn scale_and_unscale_are_exact_on_whole_costs() {
        // 1.5 ranks at 2 points per rank = 3 points
        let ranks = Halves::from_halves(3);
        assert_eq!(ranks.scale(2), Halves::from_whole(3));
        assert_eq!(ranks.scale(2).unscale(2), ranks);
        assert_eq!(ranks.as_f64(), 1.5);
    }

    #[test]
    fn saturating_sub_stops_at_zero() {
        let a = Halves::from_whole(1);
        let b = Halves::from_whole(3);
        assert_eq!(a.saturating_sub(b), Halves::ZERO);
        assert_eq!(b.saturating_sub(a), Halves::from_whole(2));
    }

    #[test]
    fn largest_whole_values_fit() {
        let max = Halves::from_whole(u32::MAX);
        assert_eq!(max.whole(), u64::from(u32::MAX));
        assert_eq!((max + max).whole(), 2 * u64::from(u32::MAX));
        assert_eq!(max.scale(2).unscale(2), max);
    }

    #[test]
    fn addition_saturates() {
        let top = Halves::from_halves(u64::MAX);
        assert_eq!(top + Halves::from_whole(1), top);

        let mut pool = top;
        pool += Halves::from_whole(3);
        assert_eq!(pool, top);
        assert_eq!(top.scale(2), top);
    }
}
