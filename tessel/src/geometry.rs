//! Geometric types and conversions.
//!
//! Tessel describes positions and picture (texture) coordinates with the
//! two-dimensional [`Vector`] type and axis-aligned bounds with [`Rect`].
//! Conversions to and from tuples and foreign types are expressed with the
//! [`FromGeometry`] and [`IntoGeometry`] traits. See the [`integration`]
//! module for conversions with types from linear algebra crates.
//!
//! [`integration`]: crate::integration

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num::Zero;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

pub trait FromGeometry<T> {
    fn from_geometry(other: T) -> Self;
}

impl<T> FromGeometry<T> for T {
    fn from_geometry(other: T) -> Self {
        other
    }
}

pub trait IntoGeometry<T> {
    fn into_geometry(self) -> T;
}

impl<T, U> IntoGeometry<U> for T
where
    U: FromGeometry<T>,
{
    fn into_geometry(self) -> U {
        U::from_geometry(self)
    }
}

/// Two-dimensional vector.
///
/// `Vector` is used both for points in space (vertex positions) and for
/// displacements (sizes and offsets). Components are `f64`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const fn new(x: f64, y: f64) -> Self {
        Vector { x, y }
    }

    /// Gets the components of the vector as a tuple.
    pub fn xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Vector::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Vector::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        Vector::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Vector::new(-self.x, -self.y)
    }
}

impl Zero for Vector {
    fn zero() -> Self {
        Vector::new(0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl UlpsEq for Vector {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps) && self.y.ulps_eq(&other.y, epsilon, max_ulps)
    }
}

impl<U> FromGeometry<(U, U)> for Vector
where
    U: Into<f64>,
{
    fn from_geometry(other: (U, U)) -> Self {
        Vector::new(other.0.into(), other.1.into())
    }
}

impl FromGeometry<Vector> for (f64, f64) {
    fn from_geometry(other: Vector) -> Self {
        other.xy()
    }
}

impl FromGeometry<Vector> for (f32, f32) {
    fn from_geometry(other: Vector) -> Self {
        (other.x as f32, other.y as f32)
    }
}

impl From<(f64, f64)> for Vector {
    fn from(xy: (f64, f64)) -> Self {
        Vector::new(xy.0, xy.1)
    }
}

impl From<[f64; 2]> for Vector {
    fn from(xy: [f64; 2]) -> Self {
        Vector::new(xy[0], xy[1])
    }
}

/// Axis-aligned rectangle.
///
/// `Rect`s are normalized on construction such that `min` is never greater
/// than `max` in either dimension.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: Vector,
    pub max: Vector,
}

impl Rect {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Rect {
            min: Vector::new(min_x.min(max_x), min_y.min(max_y)),
            max: Vector::new(min_x.max(max_x), min_y.max(max_y)),
        }
    }

    /// Constructs a `Rect` at the origin with the given size.
    pub fn with_size(size: Vector) -> Self {
        Rect::new(0.0, 0.0, size.x, size.y)
    }

    pub fn w(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn h(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vector {
        Vector::new(self.w(), self.h())
    }

    pub fn center(&self) -> Vector {
        (self.min + self.max) * 0.5
    }

    /// Returns `true` if the point is within the `Rect`, including its
    /// boundary.
    pub fn contains(&self, point: Vector) -> bool {
        (self.min.x..=self.max.x).contains(&point.x) && (self.min.y..=self.max.y).contains(&point.y)
    }
}
