//! Polygonal primitives and their decomposition into triangles.
//!
//! Tessel uses the terms _trigon_ and _tetragon_ for its fixed-size polygon
//! types, which mean _triangle_ and _quadrilateral_, respectively. The term
//! _triangle_ is still used when referring to triangulation.
//!
//! Polygons are decomposed into [`Trigon`]s with _fan triangulation_: every
//! triangle shares the first vertex of the polygon, which is only correct for
//! convex polygons. Non-convex input is not rejected, but produces overlapping
//! or inverted triangles.
//!
//! # Examples
//!
//! Triangulating a square given by its corners:
//!
//! ```rust
//! use tessel::prelude::*;
//! use tessel::primitive::Trigon;
//!
//! let trigons: Vec<_> = [(0, 0), (1, 0), (1, 1), (0, 1)].into_iter().fan().collect();
//!
//! assert_eq!(
//!     vec![
//!         Trigon::new((0, 0), (1, 0), (1, 1)),
//!         Trigon::new((0, 0), (1, 1), (0, 1)),
//!     ],
//!     trigons,
//! );
//! ```

use arrayvec::ArrayVec;
use itertools::structs::TupleWindows;
use itertools::Itertools;
use std::ops::{Index, IndexMut};

/// Monomorphic n-gon.
///
/// `NGon` represents a polygonal structure as an array. Each array element
/// represents vertex data in order with adjacent elements being connected by an
/// implicit edge. Generally these elements are labeled A, B, C, etc.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NGon<T, const N: usize>(pub [T; N]);

impl<T, const N: usize> NGon<T, N> {
    pub const ARITY: usize = N;

    pub fn into_array(self) -> [T; N] {
        self.0
    }

    pub fn map<U, F>(self, f: F) -> NGon<U, N>
    where
        F: FnMut(T) -> U,
    {
        NGon(self.0.map(f))
    }
}

impl<T, const N: usize> AsRef<[T]> for NGon<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for NGon<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> From<[T; N]> for NGon<T, N> {
    fn from(array: [T; N]) -> Self {
        NGon(array)
    }
}

impl<T, const N: usize> Index<usize> for NGon<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for NGon<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T, const N: usize> IntoIterator for NGon<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Triangle.
pub type Trigon<T> = NGon<T, 3>;

impl<T> Trigon<T> {
    pub fn new(a: T, b: T, c: T) -> Self {
        NGon([a, b, c])
    }
}

/// Quadrilateral.
pub type Tetragon<T> = NGon<T, 4>;

impl<T> Tetragon<T> {
    pub fn new(a: T, b: T, c: T, d: T) -> Self {
        NGon([a, b, c, d])
    }
}

pub trait IntoTrigons {
    type Vertex;
    type Output: IntoIterator<Item = Trigon<Self::Vertex>>;

    fn into_trigons(self) -> Self::Output;
}

impl<T> IntoTrigons for Trigon<T> {
    type Vertex = T;
    type Output = ArrayVec<Trigon<T>, 1>;

    fn into_trigons(self) -> Self::Output {
        ArrayVec::from([self])
    }
}

impl<T> IntoTrigons for Tetragon<T>
where
    T: Clone,
{
    type Vertex = T;
    type Output = ArrayVec<Trigon<T>, 2>;

    // Both trigons share the diagonal from A to C.
    fn into_trigons(self) -> Self::Output {
        let [a, b, c, d] = self.into_array();
        ArrayVec::from([Trigon::new(a.clone(), b, c.clone()), Trigon::new(a, c, d)])
    }
}

/// Iterator over the [`Trigon`]s of a triangle fan.
///
/// See [`Triangulate::fan`].
pub struct Fan<I>
where
    I: Iterator,
    I::Item: Clone,
{
    anchor: Option<I::Item>,
    edges: TupleWindows<I, (I::Item, I::Item)>,
}

impl<I> Fan<I>
where
    I: Iterator,
    I::Item: Clone,
{
    fn new(mut input: I) -> Self {
        let anchor = input.next();
        Fan {
            anchor,
            edges: input.tuple_windows(),
        }
    }
}

impl<I> Iterator for Fan<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Trigon<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let anchor = self.anchor.clone()?;
        self.edges.next().map(|(b, c)| Trigon::new(anchor, b, c))
    }
}

/// Extension methods for triangulating iterators of polygon vertices.
pub trait Triangulate: Iterator + Sized
where
    Self::Item: Clone,
{
    /// Triangulates the vertices of a convex polygon as a fan.
    ///
    /// Given the ordered vertices `a, b, c, d, ...`, this iterator yields the
    /// trigons `(a, b, c), (a, c, d), ...`. A polygon with `n` vertices
    /// produces `n - 2` trigons. Fewer than three vertices produce no trigons.
    fn fan(self) -> Fan<Self>;
}

impl<I> Triangulate for I
where
    I: Iterator,
    I::Item: Clone,
{
    fn fan(self) -> Fan<Self> {
        Fan::new(self)
    }
}
