//! **Tessel** is the CPU-side geometry layer of a 2D rendering toolkit.
//!
//! Geometry is described as a flat list of vertices where each consecutive
//! triple of vertices forms a triangle. The [`TrianglesData`] buffer owns such
//! a list and is the concrete type produced by the shapes in the [`shape`]
//! module. Other producers and consumers of geometry interoperate with it
//! through the [`Triangles`] trait and its refinements, which expose any
//! subset of the position, color, and picture (texture coordinate) properties.
//!
//! Rendering itself is not performed here. The [`draw`] module describes the
//! boundary with a rendering backend and provides the [`Drawer`], which caches
//! geometry per render target and re-reads it only after being marked dirty.
//!
//! Please note that versions in the `0.0.*` series are experimental and
//! unstable! Use exact version constraints when specifying a dependency to
//! avoid spurious breakage.
//!
//! # Examples
//!
//! Building a convex polygon and reading back its triangles:
//!
//! ```rust
//! use tessel::prelude::*;
//! use tessel::shape::Polygon;
//! use tessel::{Rgba, Vector};
//!
//! let polygon = Polygon::new(
//!     Rgba::new(1.0, 0.0, 0.0, 1.0),
//!     [
//!         Vector::new(0.0, 0.0),
//!         Vector::new(1.0, 0.0),
//!         Vector::new(1.0, 1.0),
//!         Vector::new(0.0, 1.0),
//!     ],
//! );
//! assert_eq!(6, polygon.triangles().len());
//! ```
//!
//! [`Drawer`]: crate::draw::Drawer
//! [`Triangles`]: crate::triangles::Triangles
//! [`TrianglesData`]: crate::triangles::TrianglesData
#![allow(unknown_lints)] // Allow clippy lints.

pub mod color;
pub mod draw;
pub mod geometry;
pub mod integration;
pub mod primitive;
pub mod shape;
pub mod triangles;

pub use crate::color::Rgba;
pub use crate::geometry::{Rect, Vector};
pub use crate::triangles::{TrianglesData, TrianglesError, Vertex};

pub mod prelude {
    //! Re-exports commonly used traits.
    //!
    //! Geometry is mostly manipulated through traits, in particular the
    //! [`Triangles`] trait and its capability refinements. Importing the
    //! contents of this module brings these traits into scope without lengthy
    //! imports.
    //!
    //! [`Triangles`]: crate::triangles::Triangles

    pub use crate::draw::{Picture as _, Target as _, TargetPicture as _, TargetTriangles as _};
    pub use crate::geometry::{FromGeometry as _, IntoGeometry as _};
    pub use crate::primitive::{IntoTrigons as _, Triangulate as _};
    pub use crate::triangles::{
        Triangles as _, TrianglesColor as _, TrianglesPicture as _, TrianglesPosition as _,
    };
}
