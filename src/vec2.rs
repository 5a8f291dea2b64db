use crate::vector::VecN;

/// A 2-component vector with `x` and `y` axes.
pub type Vec2 = VecN<2>;

/// Shorthand constructor for [`Vec2`].
#[inline]
pub const fn vec2(x: f64, y: f64) -> Vec2 {
    VecN::from_array([x, y])
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self([x, y])
    }

    /// The unit vector along the x axis.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0)
    }

    /// The unit vector along the y axis.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0)
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
    pub fn set_x(&mut self, x: f64) {
        self.0[0] = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: f64) {
        self.0[1] = y;
    }
}
