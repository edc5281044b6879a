#![cfg(feature = "geometry-mint")]

#[doc(hidden)]
pub use ::mint::*;

use ::mint::{Point2, Vector2};

use crate::geometry::{FromGeometry, Vector};

impl FromGeometry<Vector2<f64>> for Vector {
    fn from_geometry(other: Vector2<f64>) -> Self {
        Vector::new(other.x, other.y)
    }
}

impl FromGeometry<Vector> for Vector2<f64> {
    fn from_geometry(other: Vector) -> Self {
        Vector2 {
            x: other.x,
            y: other.y,
        }
    }
}

impl FromGeometry<Point2<f64>> for Vector {
    fn from_geometry(other: Point2<f64>) -> Self {
        Vector::new(other.x, other.y)
    }
}

impl FromGeometry<Vector> for Point2<f64> {
    fn from_geometry(other: Vector) -> Self {
        Point2 {
            x: other.x,
            y: other.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use ::mint::{Point2, Vector2};

    use crate::geometry::{IntoGeometry, Vector};

    #[test]
    fn convert_mint() {
        let vector: Vector = Point2 { x: 1.0, y: 2.0 }.into_geometry();
        assert_eq!(Vector::new(1.0, 2.0), vector);

        let displacement: Vector2<f64> = Vector::new(-3.0, 0.5).into_geometry();
        assert_eq!(-3.0, displacement.x);
        assert_eq!(0.5, displacement.y);
    }
}
