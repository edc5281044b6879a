//! Triangle geometry and its capabilities.
//!
//! Geometry is represented as an ordered list of vertices. By convention, each
//! consecutive triple of vertices forms a triangle, but this grouping is never
//! enforced: a list of any length is valid.
//!
//! # Capabilities
//!
//! The [`Triangles`] trait is the minimal contract shared by all geometry: a
//! length, aliasing sub-views, bulk updates, and copying into an owned
//! [`TrianglesData`]. Per-vertex properties are exposed through independent
//! refinements:
//!
//! | Trait                 | Property             | Accessor on `Triangles` |
//! |-----------------------|----------------------|-------------------------|
//! | [`TrianglesPosition`] | position             | `as_position`           |
//! | [`TrianglesColor`]    | color                | `as_color`              |
//! | [`TrianglesPicture`]  | picture (texture) uv | `as_picture`            |
//!
//! A type may implement any subset of these refinements. When a
//! [`TrianglesData`] is updated from another source, only the properties that
//! the source exposes are copied and all other properties are left untouched.
//! This allows partial producers, such as a generator that only supplies
//! colors, to update a subset of the attributes of a buffer.
//!
//! # Examples
//!
//! Updating only the colors of a buffer:
//!
//! ```rust
//! use tessel::prelude::*;
//! use tessel::triangles::{Triangles, TrianglesColor, TrianglesData, TrianglesError};
//! use tessel::{Rgba, Vector};
//!
//! struct Fade(usize);
//!
//! impl Triangles for Fade {
//!     fn len(&self) -> usize {
//!         self.0
//!     }
//!
//!     fn slice(
//!         &mut self,
//!         range: std::ops::Range<usize>,
//!     ) -> Result<Box<dyn Triangles + '_>, TrianglesError> {
//!         Ok(Box::new(Fade(range.len())))
//!     }
//!
//!     fn update(&mut self, _: &dyn Triangles) -> Result<(), TrianglesError> {
//!         Ok(())
//!     }
//!
//!     fn copy(&self) -> TrianglesData {
//!         let mut data = TrianglesData::new(self.len());
//!         data.update(self).unwrap();
//!         data
//!     }
//!
//!     fn as_color(&self) -> Option<&dyn TrianglesColor> {
//!         Some(self)
//!     }
//! }
//!
//! impl TrianglesColor for Fade {
//!     fn color(&self, index: usize) -> Result<Rgba, TrianglesError> {
//!         Ok(Rgba::alpha(index as f64 / self.0 as f64))
//!     }
//! }
//!
//! let mut data = TrianglesData::new(3);
//! data[1].position = Vector::new(4.0, 2.0);
//! data.update(&Fade(3)).unwrap();
//!
//! assert_eq!(Rgba::alpha(0.0), data[0].color);
//! assert_eq!(Vector::new(4.0, 2.0), data[1].position);
//! ```

mod data;

use std::ops::Range;
use thiserror::Error;

use crate::color::Rgba;
use crate::geometry::Vector;

pub use crate::triangles::data::{TrianglesData, TrianglesSlice};

#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum TrianglesError {
    #[error("conflicting length; expected {expected}, but got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("range {start}..{end} out of range for length {len}")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },
}

/// Vertex of triangle geometry.
///
/// The default vertex is positioned at the origin, is opaque white, and has
/// no picture coordinate. The absence of a picture coordinate is represented
/// by [`Vertex::NO_PICTURE`], which lies outside of the unit square and is
/// therefore distinct from a legitimate `(0, 0)` mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vector,
    pub color: Rgba,
    /// Picture (texture) coordinate in normalized picture space.
    pub picture: Vector,
}

impl Vertex {
    /// Picture coordinate of vertices that are not mapped onto a picture.
    pub const NO_PICTURE: Vector = Vector::new(-1.0, -1.0);

    pub fn new(position: Vector, color: Rgba, picture: Vector) -> Self {
        Vertex {
            position,
            color,
            picture,
        }
    }

    pub fn has_picture(&self) -> bool {
        self.picture != Vertex::NO_PICTURE
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Vertex::new(Vector::new(0.0, 0.0), Rgba::WHITE, Vertex::NO_PICTURE)
    }
}

/// Triangle geometry.
///
/// `Triangles` is implemented by any type that can act as a source or sink of
/// vertex geometry. Properties of vertices are exposed through the optional
/// [`TrianglesPosition`], [`TrianglesColor`], and [`TrianglesPicture`]
/// capabilities, which are queried independently.
///
/// See the [module][`triangles`] documentation for more information.
///
/// [`triangles`]: crate::triangles
pub trait Triangles {
    /// Gets the number of vertices.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets a view over the vertices in `range`.
    ///
    /// The view aliases the same storage: mutations through the view are
    /// visible in `self` once the view is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if `range` is not within `0..self.len()`.
    fn slice(&mut self, range: Range<usize>) -> Result<Box<dyn Triangles + '_>, TrianglesError>;

    /// Copies the properties exposed by `source` into `self`.
    ///
    /// # Errors
    ///
    /// Returns an error if the length of `source` differs from the length of
    /// `self`, in which case `self` is not modified.
    fn update(&mut self, source: &dyn Triangles) -> Result<(), TrianglesError>;

    /// Copies the geometry into an independent [`TrianglesData`].
    fn copy(&self) -> TrianglesData;

    /// Gets the vertices as a contiguous slice.
    ///
    /// Types backed by [`Vertex`] storage return `Some`, which allows updates
    /// to copy all properties at once rather than querying each capability.
    fn as_vertices(&self) -> Option<&[Vertex]> {
        None
    }

    fn as_position(&self) -> Option<&dyn TrianglesPosition> {
        None
    }

    fn as_color(&self) -> Option<&dyn TrianglesColor> {
        None
    }

    fn as_picture(&self) -> Option<&dyn TrianglesPicture> {
        None
    }
}

/// Triangle geometry with vertex positions.
pub trait TrianglesPosition {
    fn position(&self, index: usize) -> Result<Vector, TrianglesError>;
}

/// Triangle geometry with vertex colors.
pub trait TrianglesColor {
    fn color(&self, index: usize) -> Result<Rgba, TrianglesError>;
}

/// Triangle geometry with picture (texture) coordinates.
pub trait TrianglesPicture {
    fn picture(&self, index: usize) -> Result<Vector, TrianglesError>;
}

// Copies from `source` into `vertices`. Properties read through capabilities
// are staged before any vertex is written, so `vertices` is unchanged when an
// error is returned.
fn update_vertices(vertices: &mut [Vertex], source: &dyn Triangles) -> Result<(), TrianglesError> {
    if vertices.len() != source.len() {
        return Err(TrianglesError::LengthMismatch {
            expected: vertices.len(),
            actual: source.len(),
        });
    }
    if let Some(source) = source.as_vertices() {
        if vertices.len() != source.len() {
            return Err(TrianglesError::LengthMismatch {
                expected: vertices.len(),
                actual: source.len(),
            });
        }
        vertices.copy_from_slice(source);
        return Ok(());
    }
    let n = vertices.len();
    let positions = source
        .as_position()
        .map(|source| {
            (0..n)
                .map(|index| source.position(index))
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?;
    let colors = source
        .as_color()
        .map(|source| {
            (0..n)
                .map(|index| source.color(index))
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?;
    let pictures = source
        .as_picture()
        .map(|source| {
            (0..n)
                .map(|index| source.picture(index))
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?;
    if let Some(positions) = positions {
        for (vertex, position) in vertices.iter_mut().zip(positions) {
            vertex.position = position;
        }
    }
    if let Some(colors) = colors {
        for (vertex, color) in vertices.iter_mut().zip(colors) {
            vertex.color = color;
        }
    }
    if let Some(pictures) = pictures {
        for (vertex, picture) in vertices.iter_mut().zip(pictures) {
            vertex.picture = picture;
        }
    }
    Ok(())
}

fn vertex_at(vertices: &[Vertex], index: usize) -> Result<&Vertex, TrianglesError> {
    vertices.get(index).ok_or(TrianglesError::IndexOutOfRange {
        index,
        len: vertices.len(),
    })
}

fn checked_range(range: Range<usize>, len: usize) -> Result<Range<usize>, TrianglesError> {
    if range.start <= range.end && range.end <= len {
        Ok(range)
    }
    else {
        Err(TrianglesError::RangeOutOfBounds {
            start: range.start,
            end: range.end,
            len,
        })
    }
}
