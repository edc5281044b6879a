//! Vertex colors.

use approx::{AbsDiffEq, RelativeEq};

use crate::geometry::FromGeometry;

/// Straight (non-premultiplied) RGBA color.
///
/// Channels are `f64` in the interval `[0, 1]`. Conversion into other color
/// spaces or premultiplied representations is left to the rendering backend.
///
/// The default color is opaque white, which leaves pictures untinted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const WHITE: Self = Rgba::opaque(1.0, 1.0, 1.0);
    pub const BLACK: Self = Rgba::opaque(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Self = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Constructs a color, clamping each channel into `[0, 1]`.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Rgba {
            r: num::clamp(r, 0.0, 1.0),
            g: num::clamp(g, 0.0, 1.0),
            b: num::clamp(b, 0.0, 1.0),
            a: num::clamp(a, 0.0, 1.0),
        }
    }

    const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Rgba { r, g, b, a: 1.0 }
    }

    /// Constructs white with the given alpha.
    pub fn alpha(a: f64) -> Self {
        Rgba::new(1.0, 1.0, 1.0, a)
    }

    pub fn into_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::WHITE
    }
}

impl AbsDiffEq for Rgba {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.into_array()
            .iter()
            .zip(other.into_array().iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Rgba {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.into_array()
            .iter()
            .zip(other.into_array().iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<U> FromGeometry<(U, U, U, U)> for Rgba
where
    U: Into<f64>,
{
    fn from_geometry(other: (U, U, U, U)) -> Self {
        Rgba::new(other.0.into(), other.1.into(), other.2.into(), other.3.into())
    }
}

impl From<[f64; 4]> for Rgba {
    fn from(rgba: [f64; 4]) -> Self {
        let [r, g, b, a] = rgba;
        Rgba::new(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::color::Rgba;
    use crate::geometry::IntoGeometry;

    #[test]
    fn clamp_channels() {
        let color = Rgba::new(1.5, -0.25, 0.5, 2.0);

        assert_eq!(Rgba::new(1.0, 0.0, 0.5, 1.0), color);
    }

    #[test]
    fn default_is_opaque_white() {
        assert_eq!(Rgba::WHITE, Rgba::default());
        assert_eq!([1.0, 1.0, 1.0, 1.0], Rgba::default().into_array());
    }

    #[test]
    fn convert_from_tuple() {
        let color: Rgba = (0.1f32, 0.2f32, 0.3f32, 1.0f32).into_geometry();

        assert_abs_diff_eq!(Rgba::new(0.1, 0.2, 0.3, 1.0), color, epsilon = 1e-6);
    }
}
