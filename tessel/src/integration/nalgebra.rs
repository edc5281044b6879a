#![cfg(feature = "geometry-nalgebra")]

#[doc(hidden)]
pub use ::nalgebra::*;

use ::nalgebra::{Point2, Vector2};

use crate::geometry::{FromGeometry, Vector};

impl FromGeometry<Vector2<f64>> for Vector {
    fn from_geometry(other: Vector2<f64>) -> Self {
        Vector::new(other.x, other.y)
    }
}

impl FromGeometry<Vector> for Vector2<f64> {
    fn from_geometry(other: Vector) -> Self {
        Vector2::new(other.x, other.y)
    }
}

impl FromGeometry<Point2<f64>> for Vector {
    fn from_geometry(other: Point2<f64>) -> Self {
        Vector::new(other.x, other.y)
    }
}

impl FromGeometry<Vector> for Point2<f64> {
    fn from_geometry(other: Vector) -> Self {
        Point2::new(other.x, other.y)
    }
}
