//! Principal axes, directional signs, and small 3-vector helpers.

use std::fmt;

/// A point or direction in 3D. Components are `[x, y, z]`; z is depth.
pub type Vec3 = [f64; 3];

/// One of the three principal directions of a reservoir grid.
///
/// X and Y span the horizontal (bedding) plane; Z is vertical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// First horizontal direction (`i`).
    X,
    /// Second horizontal direction (`j`).
    Y,
    /// Vertical direction (`k`), increasing with depth.
    Z,
}

impl Axis {
    /// All axes in canonical order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index into a [`Vec3`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// `true` for X and Y.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        !matches!(self, Self::Z)
    }

    /// Unit vector along this axis.
    pub fn unit(self) -> Vec3 {
        let mut v = [0.0; 3];
        v[self.index()] = 1.0;
        v
    }

    /// The axis along which `normal` has its largest-magnitude component.
    ///
    /// Ties resolve in X, Y, Z order, so a degenerate zero normal maps to X.
    pub fn dominant(normal: &Vec3) -> Axis {
        let mut best = Axis::X;
        let mut best_mag = normal[0].abs();
        for axis in [Axis::Y, Axis::Z] {
            let mag = normal[axis.index()].abs();
            if mag > best_mag {
                best = axis;
                best_mag = mag;
            }
        }
        best
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::Y => write!(f, "Y"),
            Self::Z => write!(f, "Z"),
        }
    }
}

/// Orientation of a directional quantity along an [`Axis`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    /// Towards increasing index along the axis.
    Positive,
    /// Towards decreasing index along the axis.
    Negative,
}

/// Dot product.
#[inline]
pub fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Component-wise `a - b`.
#[inline]
pub fn sub(a: &Vec3, b: &Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

/// Euclidean length.
#[inline]
pub fn norm(a: &Vec3) -> f64 {
    dot(a, a).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn dominant_picks_largest_magnitude() {
        assert_eq!(Axis::dominant(&[1.0, 0.0, 0.0]), Axis::X);
        assert_eq!(Axis::dominant(&[0.1, -0.9, 0.2]), Axis::Y);
        assert_eq!(Axis::dominant(&[0.0, 0.3, -0.95]), Axis::Z);
    }

    #[test]
    fn dominant_ties_resolve_in_axis_order() {
        assert_eq!(Axis::dominant(&[0.0, 0.0, 0.0]), Axis::X);
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_eq!(Axis::dominant(&[0.0, h, h]), Axis::Y);
    }

    #[test]
    fn horizontal_axes() {
        assert!(Axis::X.is_horizontal());
        assert!(Axis::Y.is_horizontal());
        assert!(!Axis::Z.is_horizontal());
    }

    #[test]
    fn vector_helpers() {
        assert_eq!(sub(&[3.0, 2.0, 1.0], &[1.0, 1.0, 1.0]), [2.0, 1.0, 0.0]);
        assert!((dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]) - 32.0).abs() < f64::EPSILON);
        assert!((norm(&[3.0, 4.0, 0.0]) - 5.0).abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn unit_vectors_are_their_own_dominant_axis(idx in 0usize..3, scale in 0.01f64..100.0) {
            let axis = Axis::ALL[idx];
            let mut v = axis.unit();
            v[axis.index()] *= -scale;
            prop_assert_eq!(Axis::dominant(&v), axis);
        }
    }
}
