#![cfg(feature = "geometry-glam")]

#[doc(hidden)]
pub use ::glam::*;

use ::glam::DVec2;

use crate::geometry::{FromGeometry, Vector};

impl FromGeometry<DVec2> for Vector {
    fn from_geometry(other: DVec2) -> Self {
        Vector::new(other.x, other.y)
    }
}

impl FromGeometry<Vector> for DVec2 {
    fn from_geometry(other: Vector) -> Self {
        DVec2::new(other.x, other.y)
    }
}
