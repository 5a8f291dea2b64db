use crate::vector::VecN;

/// A 3-component vector with `x`, `y` and `z` axes.
pub type Vec3 = VecN<3>;

/// Shorthand constructor for [`Vec3`].
#[inline]
pub const fn vec3(x: f64, y: f64, z: f64) -> Vec3 {
    VecN::from_array([x, y, z])
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self([x, y, z])
    }

    /// The unit vector along the x axis.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// The unit vector along the y axis.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// The unit vector along the z axis.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.0[0]
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.0[1]
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.0[2]
    }

    #[inline]
    pub fn set_x(&mut self, x: f64) {
        self.0[0] = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: f64) {
        self.0[1] = y;
    }

    #[inline]
    pub fn set_z(&mut self, z: f64) {
        self.0[2] = z;
    }

    /// The 3D cross product of `a` and `b`.
    pub fn cross(a: Self, b: Self) -> Self {
        Self::new(
            a.y() * b.z() - a.z() * b.y(),
            a.z() * b.x() - a.x() * b.z(),
            a.x() * b.y() - a.y() * b.x(),
        )
    }
}

#[test]
fn test_cross_follows_right_hand_rule() {
    assert_eq!(Vec3::cross(Vec3::unit_x(), Vec3::unit_y()), Vec3::unit_z());
    assert_eq!(Vec3::cross(Vec3::unit_y(), Vec3::unit_x()), -Vec3::unit_z());
}
