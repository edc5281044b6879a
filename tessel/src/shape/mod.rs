//! Shapes that build and maintain triangle geometry.
//!
//! Each shape owns a [`TrianglesData`] and a [`Drawer`]. Mutating a shape
//! rewrites its geometry in place and marks its [`Drawer`] dirty before
//! returning, so the next draw always observes the new geometry.
//!
//! | Shape       | Geometry                                     |
//! |-------------|----------------------------------------------|
//! | [`Sprite`]  | Two trigons covering the bounds of a picture |
//! | [`Polygon`] | Fan triangulation of a convex polygon        |
//!
//! [`Drawer`]: crate::draw::Drawer
//! [`TrianglesData`]: crate::triangles::TrianglesData

mod polygon;
mod sprite;

pub use crate::shape::polygon::Polygon;
pub use crate::shape::sprite::Sprite;
