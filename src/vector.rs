use crate::error::VectorError;
use core::fmt;
use core::ops::{Add, AddAssign, Deref, DerefMut, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// Axis labels, indexed by component position. Only used for formatting;
/// arithmetic goes through the component array directly.
const AXIS_NAMES: [&str; 4] = ["x", "y", "z", "w"];

/// An `N`-component vector of `f64` values.
///
/// The component list is fixed by the const parameter, so vectors of
/// different arities are distinct types and cannot be mixed in arithmetic
/// or compared for equality. The public surface of the crate fixes `N` to
/// 2 and 3 via the [`Vec2`](crate::Vec2) and [`Vec3`](crate::Vec3) aliases.
///
/// All operations return new values; the only mutating operations are
/// [`normalize_in_place`](Self::normalize_in_place), the per-axis setters
/// on the concrete aliases, and direct component assignment through
/// `DerefMut`.
#[derive(Copy, Clone, PartialEq)]
pub struct VecN<const N: usize>(pub(crate) [f64; N]);

impl<const N: usize> VecN<N> {
    /// Builds a vector from one value per component, in axis order.
    #[inline]
    pub const fn from_array(components: [f64; N]) -> Self {
        Self(components)
    }

    /// Builds a vector from an ordered slice of components.
    ///
    /// Fails with [`VectorError::DimensionMismatch`] when the slice length
    /// is not `N`, and with [`VectorError::EmptyDimensions`] when the type
    /// declares no components at all.
    pub fn try_from_slice(components: &[f64]) -> Result<Self, VectorError> {
        if N == 0 {
            return Err(VectorError::EmptyDimensions);
        }
        if components.len() != N {
            return Err(VectorError::DimensionMismatch {
                expected: N,
                got: components.len(),
            });
        }
        let mut values = [0.0; N];
        values.copy_from_slice(components);
        Ok(Self(values))
    }

    #[inline]
    pub const fn zero() -> Self {
        Self([0.0; N])
    }

    #[inline]
    pub const fn one() -> Self {
        Self([1.0; N])
    }

    /// A vector with every component set to `value`.
    #[inline]
    pub const fn splat(value: f64) -> Self {
        Self([value; N])
    }

    /// Sum of component-wise products.
    #[inline]
    pub fn dot(a: Self, b: Self) -> f64 {
        a.0.iter()
            .zip(b.0.iter())
            .fold(0.0, |dot, (&lhs, &rhs)| dot + lhs * rhs)
    }

    /// Component-wise minimum.
    pub fn min(a: Self, b: Self) -> Self {
        let mut tmp = a;
        for n in 0..N {
            tmp[n] = tmp[n].min(b[n]);
        }
        tmp
    }

    /// Component-wise maximum.
    pub fn max(a: Self, b: Self) -> Self {
        let mut tmp = a;
        for n in 0..N {
            tmp[n] = tmp[n].max(b[n]);
        }
        tmp
    }

    /// Clamps each component of `vector` between the corresponding
    /// components of `min` and `max`.
    pub fn clamp(vector: Self, min: Self, max: Self) -> Self {
        let mut tmp = vector;
        for n in 0..N {
            tmp[n] = clamp(vector[n], min[n], max[n]);
        }
        tmp
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(point1: Self, point2: Self) -> f64 {
        (point1 - point2).length()
    }

    /// Squared Euclidean distance between two points.
    #[inline]
    pub fn distance_squared(point1: Self, point2: Self) -> f64 {
        (point1 - point2).length_squared()
    }

    /// Linear interpolation from `a` to `b` by `amount`.
    ///
    /// `amount` must lie in `[0, 1]`; anything else fails with
    /// [`VectorError::OutOfRange`].
    pub fn lerp(a: Self, b: Self, amount: f64) -> Result<Self, VectorError> {
        check_fraction(amount)?;
        Ok(a + (b - a) * amount)
    }

    /// Cubic Hermite spline between `point1` and `point2` with tangents
    /// `tangent1` and `tangent2`, evaluated at `amount` in `[0, 1]`.
    pub fn hermite(
        point1: Self,
        tangent1: Self,
        point2: Self,
        tangent2: Self,
        amount: f64,
    ) -> Result<Self, VectorError> {
        check_fraction(amount)?;
        let t2 = amount * amount;
        let t3 = t2 * amount;
        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + amount;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;
        Ok(point1 * h00 + tangent1 * h10 + point2 * h01 + tangent2 * h11)
    }

    /// Catmull-Rom spline between `p1` and `p2`, with `p0` and `p3` as
    /// control tangents, evaluated at `amount` in `[0, 1]`.
    pub fn catmull_rom(
        p0: Self,
        p1: Self,
        p2: Self,
        p3: Self,
        amount: f64,
    ) -> Result<Self, VectorError> {
        check_fraction(amount)?;
        let a = p1 * 2.0;
        let b = p2 - p0;
        let c = p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3;
        let d = -p0 + p1 * 3.0 - p2 * 3.0 + p3;
        let t2 = amount * amount;
        let t3 = t2 * amount;
        Ok((a + b * amount + c * t2 + d * t3) / 2.0)
    }

    /// Returns `vector` scaled to unit length.
    ///
    /// A zero-length input yields non-finite components per IEEE-754; use
    /// [`try_normalize`](Self::try_normalize) when that case must fail.
    #[inline]
    pub fn normalize(vector: Self) -> Self {
        vector / vector.length()
    }

    /// Returns `vector` scaled to unit length, or
    /// [`VectorError::ZeroLength`] if the vector has no length to divide by.
    pub fn try_normalize(vector: Self) -> Result<Self, VectorError> {
        let length = vector.length();
        if length == 0.0 {
            return Err(VectorError::ZeroLength);
        }
        Ok(vector / length)
    }

    /// Reflects `vector` about `normal`, which is expected (not enforced)
    /// to be unit length.
    #[inline]
    pub fn reflect(vector: Self, normal: Self) -> Self {
        vector - normal * 2.0 * Self::dot(vector, normal)
    }

    /// Barycentric interpolation. Declared but not implemented; always
    /// fails with [`VectorError::NotImplemented`].
    pub fn barycentric(_p1: Self, _p2: Self, _p3: Self) -> Result<Self, VectorError> {
        Err(VectorError::NotImplemented("barycentric"))
    }

    /// Smooth-step interpolation. Declared but not implemented; always
    /// fails with [`VectorError::NotImplemented`].
    pub fn smooth_step(_a: Self, _b: Self, _amount: f64) -> Result<Self, VectorError> {
        Err(VectorError::NotImplemented("smooth_step"))
    }

    /// Sum of squared components.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        Self::dot(*self, *self)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Angle between `self` and `other` in radians, in `[0, π]`.
    pub fn angle(&self, other: &Self) -> f64 {
        let cos = Self::dot(*self, *other) / (self.length() * other.length());
        clamp(cos, -1.0, 1.0).acos()
    }

    /// Divides every component by the current length, in place.
    ///
    /// The mutating counterpart of [`normalize`](Self::normalize); a
    /// zero-length vector becomes all-NaN per IEEE-754.
    pub fn normalize_in_place(&mut self) {
        let length = self.length();
        for n in 0..N {
            self[n] /= length;
        }
    }
}

#[inline]
fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[inline]
fn check_fraction(amount: f64) -> Result<(), VectorError> {
    if !(0.0..=1.0).contains(&amount) {
        return Err(VectorError::OutOfRange { amount });
    }
    Ok(())
}

impl<const N: usize> Default for VecN<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> From<[f64; N]> for VecN<N> {
    #[inline]
    fn from(components: [f64; N]) -> Self {
        Self(components)
    }
}

impl<const N: usize> From<VecN<N>> for [f64; N] {
    #[inline]
    fn from(vector: VecN<N>) -> Self {
        vector.0
    }
}

impl<const N: usize> Deref for VecN<N> {
    type Target = [f64; N];
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for VecN<N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> Neg for VecN<N> {
    type Output = VecN<N>;
    #[inline]
    fn neg(self) -> Self::Output {
        let mut tmp = self;
        for n in 0..N {
            tmp[n] = -tmp[n];
        }
        tmp
    }
}

impl<const N: usize> Add<VecN<N>> for VecN<N> {
    type Output = VecN<N>;
    #[inline]
    fn add(self, rhs: VecN<N>) -> Self::Output {
        let mut tmp = self;
        for n in 0..N {
            tmp[n] += rhs[n];
        }
        tmp
    }
}

impl<const N: usize> Sub<VecN<N>> for VecN<N> {
    type Output = VecN<N>;
    #[inline]
    fn sub(self, rhs: VecN<N>) -> Self::Output {
        let mut tmp = self;
        for n in 0..N {
            tmp[n] -= rhs[n];
        }
        tmp
    }
}

impl<const N: usize> Mul<f64> for VecN<N> {
    type Output = VecN<N>;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        let mut tmp = self;
        for n in 0..N {
            tmp[n] *= rhs;
        }
        tmp
    }
}

// Scalar multiplication commutes.
impl<const N: usize> Mul<VecN<N>> for f64 {
    type Output = VecN<N>;
    #[inline]
    fn mul(self, rhs: VecN<N>) -> Self::Output {
        rhs * self
    }
}

impl<const N: usize> Div<f64> for VecN<N> {
    type Output = VecN<N>;
    // Division by zero follows IEEE-754: components go to inf/NaN.
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        let mut tmp = self;
        for n in 0..N {
            tmp[n] /= rhs;
        }
        tmp
    }
}

impl<const N: usize> AddAssign<VecN<N>> for VecN<N> {
    #[inline]
    fn add_assign(&mut self, rhs: VecN<N>) {
        for n in 0..N {
            self[n] += rhs[n];
        }
    }
}

impl<const N: usize> SubAssign<VecN<N>> for VecN<N> {
    #[inline]
    fn sub_assign(&mut self, rhs: VecN<N>) {
        for n in 0..N {
            self[n] -= rhs[n];
        }
    }
}

impl<const N: usize> MulAssign<f64> for VecN<N> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        for n in 0..N {
            self[n] *= rhs;
        }
    }
}

impl<const N: usize> fmt::Debug for VecN<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match N {
            2 => f.write_str("Vec2(")?,
            3 => f.write_str("Vec3(")?,
            _ => write!(f, "VecN<{}>(", N)?,
        }
        for (n, value) in self.0.iter().enumerate() {
            if n > 0 {
                f.write_str(", ")?;
            }
            match AXIS_NAMES.get(n) {
                Some(name) => write!(f, "{}: {}", name, value)?,
                None => write!(f, "{}", value)?,
            }
        }
        f.write_str(")")
    }
}

// Serialized as a fixed-length sequence of components, `[x, y]` in JSON.
#[cfg(feature = "serde")]
mod serde_impls {
    use super::VecN;
    use core::fmt;
    use serde::de::{Deserializer, Error, SeqAccess, Visitor};
    use serde::ser::{SerializeTuple, Serializer};
    use serde::{Deserialize, Serialize};

    impl<const N: usize> Serialize for VecN<N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut tuple = serializer.serialize_tuple(N)?;
            for value in self.0.iter() {
                tuple.serialize_element(value)?;
            }
            tuple.end()
        }
    }

    struct VecNVisitor<const N: usize>;

    impl<'de, const N: usize> Visitor<'de> for VecNVisitor<N> {
        type Value = VecN<N>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a sequence of {} numbers", N)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut values = [0.0; N];
            for (n, value) in values.iter_mut().enumerate() {
                *value = seq
                    .next_element()?
                    .ok_or_else(|| A::Error::invalid_length(n, &self))?;
            }
            Ok(VecN(values))
        }
    }

    impl<'de, const N: usize> Deserialize<'de> for VecN<N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_tuple(N, VecNVisitor::<N>)
        }
    }
}

#[test]
fn test_from_slice_length_checked() {
    assert_eq!(
        VecN::<2>::try_from_slice(&[1.0, 2.0]),
        Ok(VecN::from_array([1.0, 2.0]))
    );
    assert_eq!(
        VecN::<2>::try_from_slice(&[1.0, 2.0, 3.0]),
        Err(VectorError::DimensionMismatch {
            expected: 2,
            got: 3
        })
    );
    assert_eq!(
        VecN::<0>::try_from_slice(&[]),
        Err(VectorError::EmptyDimensions)
    );
}

#[test]
fn test_out_of_range_fraction() {
    let a = VecN::from_array([0.0, 0.0]);
    let b = VecN::from_array([1.0, 1.0]);
    assert_eq!(
        VecN::lerp(a, b, -0.5),
        Err(VectorError::OutOfRange { amount: -0.5 })
    );
    assert_eq!(
        VecN::lerp(a, b, 2.0),
        Err(VectorError::OutOfRange { amount: 2.0 })
    );
    assert_eq!(
        VecN::hermite(a, b, b, a, 1.5),
        Err(VectorError::OutOfRange { amount: 1.5 })
    );
    assert_eq!(
        VecN::catmull_rom(a, a, b, b, -1.0),
        Err(VectorError::OutOfRange { amount: -1.0 })
    );
}

#[test]
fn test_unimplemented_stubs() {
    let v = VecN::from_array([1.0, 2.0]);
    assert_eq!(
        VecN::barycentric(v, v, v),
        Err(VectorError::NotImplemented("barycentric"))
    );
    assert_eq!(
        VecN::smooth_step(v, v, 0.5),
        Err(VectorError::NotImplemented("smooth_step"))
    );
}

#[test]
fn test_try_normalize_zero_length() {
    assert_eq!(
        VecN::try_normalize(VecN::<3>::zero()),
        Err(VectorError::ZeroLength)
    );
    let v = VecN::try_normalize(VecN::from_array([3.0, 4.0])).unwrap();
    assert_eq!(v, VecN::from_array([0.6, 0.8]));
}

#[test]
fn test_debug_uses_axis_names() {
    let v = VecN::from_array([1.0, 2.5]);
    assert_eq!(format!("{:?}", v), "Vec2(x: 1, y: 2.5)");
    let v = VecN::from_array([0.0, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(format!("{:?}", v), "VecN<5>(x: 0, y: 0, z: 0, w: 0, 0)");
}
