use std::ops::{Index, IndexMut, Range};
use std::slice;
use std::vec;

use crate::color::Rgba;
use crate::geometry::Vector;
use crate::triangles::{
    checked_range, update_vertices, vertex_at, Triangles, TrianglesColor, TrianglesError,
    TrianglesPicture, TrianglesPosition, Vertex,
};

/// Owned triangle geometry.
///
/// `TrianglesData` is a resizable list of [`Vertex`]s that implements all
/// capabilities of [`Triangles`]. Updates from another `TrianglesData` (or a
/// [`TrianglesSlice`] of one) copy whole vertices at once; updates from any
/// other source copy each property that the source exposes.
///
/// Prefer [`TrianglesData::new`] over collecting zeroed vertices: vertices are
/// always initialized to [`Vertex::default`], which has no picture coordinate.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrianglesData {
    vertices: Vec<Vertex>,
}

impl TrianglesData {
    /// Constructs a `TrianglesData` with `len` default vertices.
    pub fn new(len: usize) -> Self {
        TrianglesData {
            vertices: vec![Vertex::default(); len],
        }
    }

    /// Resizes the geometry to `len` vertices, keeping the original content.
    ///
    /// If `len` is greater than the current length, the geometry is extended
    /// with default vertices. Otherwise, the geometry is truncated.
    pub fn set_len(&mut self, len: usize) {
        self.vertices.resize(len, Vertex::default());
    }

    /// Gets an aliasing view over the vertices in `range`.
    ///
    /// # Errors
    ///
    /// Returns an error if `range` is not within the geometry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tessel::prelude::*;
    /// use tessel::{Rgba, TrianglesData};
    ///
    /// let mut data = TrianglesData::new(6);
    /// let black = TrianglesData::from(vec![
    ///     tessel::Vertex {
    ///         color: Rgba::BLACK,
    ///         ..Default::default()
    ///     };
    ///     3
    /// ]);
    /// data.slice(3..6).unwrap().update(&black).unwrap();
    ///
    /// assert_eq!(Rgba::WHITE, data[2].color);
    /// assert_eq!(Rgba::BLACK, data[3].color);
    /// ```
    pub fn slice(&mut self, range: Range<usize>) -> Result<TrianglesSlice<'_>, TrianglesError> {
        let range = checked_range(range, self.vertices.len())?;
        Ok(TrianglesSlice {
            vertices: &mut self.vertices[range],
        })
    }

    pub fn get(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Vertex> {
        self.vertices.get_mut(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Vertex> {
        self.vertices.iter_mut()
    }

    pub fn as_slice(&self) -> &[Vertex] {
        self.vertices.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [Vertex] {
        self.vertices.as_mut_slice()
    }

    pub fn into_vec(self) -> Vec<Vertex> {
        self.vertices
    }
}

impl AsRef<[Vertex]> for TrianglesData {
    fn as_ref(&self) -> &[Vertex] {
        self.as_slice()
    }
}

impl AsMut<[Vertex]> for TrianglesData {
    fn as_mut(&mut self) -> &mut [Vertex] {
        self.as_mut_slice()
    }
}

impl Extend<Vertex> for TrianglesData {
    fn extend<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = Vertex>,
    {
        self.vertices.extend(vertices)
    }
}

impl From<Vec<Vertex>> for TrianglesData {
    fn from(vertices: Vec<Vertex>) -> Self {
        TrianglesData { vertices }
    }
}

impl FromIterator<Vertex> for TrianglesData {
    fn from_iter<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = Vertex>,
    {
        TrianglesData {
            vertices: vertices.into_iter().collect(),
        }
    }
}

impl IntoIterator for TrianglesData {
    type Item = Vertex;
    type IntoIter = vec::IntoIter<Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl<'a> IntoIterator for &'a TrianglesData {
    type Item = &'a Vertex;
    type IntoIter = slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

/// Aliasing view into triangle geometry.
///
/// A `TrianglesSlice` borrows a contiguous range of the vertices of a
/// [`TrianglesData`]. Its length is fixed and mutations through the view are
/// written directly into the storage of the `TrianglesData`. The borrow
/// prevents the `TrianglesData` from being resized while the view is in use.
#[derive(Debug)]
pub struct TrianglesSlice<'a> {
    vertices: &'a mut [Vertex],
}

impl<'a> TrianglesSlice<'a> {
    /// Gets an aliasing view over the vertices in `range`, relative to this
    /// view.
    ///
    /// # Errors
    ///
    /// Returns an error if `range` is not within the view.
    pub fn slice(&mut self, range: Range<usize>) -> Result<TrianglesSlice<'_>, TrianglesError> {
        let range = checked_range(range, self.vertices.len())?;
        Ok(TrianglesSlice {
            vertices: &mut self.vertices[range],
        })
    }

    pub fn iter(&self) -> slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Vertex> {
        self.vertices.iter_mut()
    }

    pub fn as_slice(&self) -> &[Vertex] {
        &*self.vertices
    }

    pub fn as_mut_slice(&mut self) -> &mut [Vertex] {
        &mut *self.vertices
    }
}

macro_rules! impl_triangles {
    (types => $($t:ty),*$(,)?) => (
        $(
            impl Index<usize> for $t {
                type Output = Vertex;

                fn index(&self, index: usize) -> &Self::Output {
                    &self.vertices[index]
                }
            }

            impl IndexMut<usize> for $t {
                fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                    &mut self.vertices[index]
                }
            }

            impl Triangles for $t {
                fn len(&self) -> usize {
                    self.vertices.len()
                }

                fn slice(
                    &mut self,
                    range: Range<usize>,
                ) -> Result<Box<dyn Triangles + '_>, TrianglesError> {
                    let range = checked_range(range, self.vertices.len())?;
                    Ok(Box::new(TrianglesSlice {
                        vertices: &mut self.vertices[range],
                    }))
                }

                fn update(&mut self, source: &dyn Triangles) -> Result<(), TrianglesError> {
                    update_vertices(&mut self.vertices[..], source)
                }

                fn copy(&self) -> TrianglesData {
                    TrianglesData::from(self.vertices.to_vec())
                }

                fn as_vertices(&self) -> Option<&[Vertex]> {
                    Some(&self.vertices[..])
                }

                fn as_position(&self) -> Option<&dyn TrianglesPosition> {
                    Some(self)
                }

                fn as_color(&self) -> Option<&dyn TrianglesColor> {
                    Some(self)
                }

                fn as_picture(&self) -> Option<&dyn TrianglesPicture> {
                    Some(self)
                }
            }

            impl TrianglesPosition for $t {
                fn position(&self, index: usize) -> Result<Vector, TrianglesError> {
                    vertex_at(&self.vertices, index).map(|vertex| vertex.position)
                }
            }

            impl TrianglesColor for $t {
                fn color(&self, index: usize) -> Result<Rgba, TrianglesError> {
                    vertex_at(&self.vertices, index).map(|vertex| vertex.color)
                }
            }

            impl TrianglesPicture for $t {
                fn picture(&self, index: usize) -> Result<Vector, TrianglesError> {
                    vertex_at(&self.vertices, index).map(|vertex| vertex.picture)
                }
            }
        )*
    );
}
impl_triangles!(types => TrianglesData, TrianglesSlice<'_>);

#[cfg(test)]
mod tests {
    use crate::color::Rgba;
    use crate::geometry::Vector;
    use crate::triangles::{
        Triangles, TrianglesColor, TrianglesData, TrianglesError, TrianglesPicture,
        TrianglesPosition, Vertex,
    };

    fn numbered(n: usize) -> TrianglesData {
        (0..n)
            .map(|index| {
                let index = index as f64;
                Vertex::new(
                    Vector::new(index, index * 2.0),
                    Rgba::new(index / 10.0, 0.0, 0.0, 1.0),
                    Vector::new(0.0, index / 10.0),
                )
            })
            .collect()
    }

    #[test]
    fn new_uses_default_vertex() {
        let data = TrianglesData::new(5);

        assert_eq!(5, data.len());
        assert!(data.iter().all(|vertex| *vertex == Vertex::default()));
        assert!(TrianglesData::default().is_empty());
    }

    #[test]
    fn grow_preserves_prefix() {
        let mut data = numbered(4);
        data.set_len(7);

        assert_eq!(7, data.len());
        assert_eq!(numbered(4).as_slice(), &data.as_slice()[..4]);
        for vertex in &data.as_slice()[4..] {
            assert_eq!(Vertex::default(), *vertex);
            assert_eq!(Vector::new(-1.0, -1.0), vertex.picture);
        }
    }

    #[test]
    fn shrink_preserves_prefix() {
        let mut data = numbered(6);
        data.set_len(2);

        assert_eq!(numbered(2), data);

        data.set_len(2);
        assert_eq!(numbered(2), data);

        data.set_len(0);
        assert!(data.is_empty());
    }

    #[test]
    fn copy_is_independent() {
        let mut data = numbered(3);
        let copy = data.copy();

        assert_eq!(data, copy);

        data[0].position = Vector::new(100.0, 100.0);
        data.set_len(1);

        assert_eq!(3, copy.len());
        assert_eq!(Vector::new(0.0, 0.0), copy[0].position);
        assert_eq!(numbered(3), copy);
    }

    #[test]
    fn update_from_data() {
        let mut data = TrianglesData::new(3);
        data.update(&numbered(3)).unwrap();

        assert_eq!(numbered(3), data);
    }

    #[test]
    fn update_through_slice() {
        let mut data = numbered(6);
        {
            let mut slice = data.slice(2..4).unwrap();
            assert_eq!(2, slice.len());
            assert_eq!(Vector::new(2.0, 4.0), slice.position(0).unwrap());

            slice.update(&TrianglesData::new(2)).unwrap();
            slice[1].color = Rgba::BLACK;
        }

        assert_eq!(numbered(6)[1], data[1]);
        assert_eq!(Vertex::default().position, data[2].position);
        assert_eq!(Rgba::BLACK, data[3].color);
        assert_eq!(numbered(6)[4], data[4]);
    }

    #[test]
    fn update_from_slice() {
        let mut source = numbered(6);
        let mut data = TrianglesData::new(3);
        {
            let slice = source.slice(3..6).unwrap();
            data.update(&slice).unwrap();
        }

        assert_eq!(numbered(6).as_slice()[3..], data.as_slice()[..]);
    }

    #[test]
    fn nested_slice_aliases_parent() {
        let mut data = numbered(8);
        {
            let mut outer = data.slice(2..8).unwrap();
            let mut inner = outer.slice(1..3).unwrap();
            assert_eq!(Vector::new(3.0, 6.0), inner.position(0).unwrap());
            inner.iter_mut().for_each(|vertex| vertex.picture = Vector::new(0.5, 0.5));
        }

        assert_eq!(Vector::new(0.5, 0.5), data[3].picture);
        assert_eq!(Vector::new(0.5, 0.5), data[4].picture);
        assert_eq!(numbered(8)[5], data[5]);
    }

    #[test]
    fn dyn_slice_aliases_parent() {
        let mut data = numbered(3);
        {
            let triangles: &mut dyn Triangles = &mut data;
            let mut slice = triangles.slice(1..2).unwrap();
            slice.update(&TrianglesData::new(1)).unwrap();
        }

        assert_eq!(Vertex::default(), data[1]);
        assert_eq!(numbered(3)[2], data[2]);
    }

    #[test]
    fn reject_out_of_range() {
        let mut data = numbered(3);

        assert_eq!(
            Err(TrianglesError::IndexOutOfRange { index: 3, len: 3 }),
            data.position(3),
        );
        assert_eq!(
            Err(TrianglesError::IndexOutOfRange { index: 7, len: 3 }),
            data.color(7),
        );
        assert_eq!(
            Err(TrianglesError::IndexOutOfRange { index: 3, len: 3 }),
            data.picture(3),
        );
        assert_eq!(
            Err(TrianglesError::RangeOutOfBounds {
                start: 2,
                end: 4,
                len: 3,
            }),
            data.slice(2..4).map(|_| ()),
        );
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = 2..1;
        assert!(data.slice(reversed).is_err());
        assert!(data.slice(3..3).unwrap().is_empty());
    }

    #[test]
    fn read_capabilities() {
        let data = numbered(3);

        assert_eq!(Vector::new(2.0, 4.0), data.position(2).unwrap());
        assert_eq!(Rgba::new(0.1, 0.0, 0.0, 1.0), data.color(1).unwrap());
        assert_eq!(Vector::new(0.0, 0.2), data.picture(2).unwrap());
    }
}
