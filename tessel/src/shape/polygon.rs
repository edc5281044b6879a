use log::trace;

use crate::color::Rgba;
use crate::draw::{Drawer, Target};
use crate::geometry::{IntoGeometry, Vector};
use crate::primitive::Triangulate as _;
use crate::triangles::{Triangles as _, TrianglesData, TrianglesError};

/// Convex polygon filled with a single color.
///
/// The points of a `Polygon` may be given in clockwise or counterclockwise
/// order, but must form a convex polygon. The polygon is decomposed into a fan
/// of trigons anchored at its first point, so a polygon with `n` points is
/// drawn with `3 * (n - 2)` vertices. Points that do not form a convex polygon
/// are accepted, but produce incorrect geometry.
///
/// # Examples
///
/// ```rust
/// use tessel::prelude::*;
/// use tessel::shape::Polygon;
/// use tessel::Rgba;
///
/// let mut polygon = Polygon::new(Rgba::BLACK, [(0.0, 0.0), (2.0, 0.0), (1.0, 1.0)]);
/// assert_eq!(3, polygon.triangles().len());
///
/// polygon.set_points([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (-1.0, 0.5)]);
/// assert_eq!(9, polygon.triangles().len());
/// assert_eq!(5, polygon.outline().len());
/// ```
#[derive(Debug)]
pub struct Polygon {
    data: TrianglesData,
    drawer: Drawer,
    color: Rgba,
    outline: Vec<Vector>,
}

impl Polygon {
    pub fn new<I, P>(color: Rgba, points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: IntoGeometry<Vector>,
    {
        let mut polygon = Polygon {
            data: TrianglesData::default(),
            drawer: Drawer::new(),
            color,
            outline: Vec::new(),
        };
        polygon.set_color(color);
        polygon.set_points(points);
        polygon
    }

    /// Sets the color of the `Polygon`.
    ///
    /// This rewrites the color of every vertex, which may be expensive for
    /// very large polygons.
    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
        for vertex in self.data.iter_mut() {
            vertex.color = color;
        }
        self.drawer.dirty();
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Sets the points of the `Polygon`.
    ///
    /// The number of points may differ from the previous number of points.
    /// Fewer than three points produce empty geometry.
    pub fn set_points<I, P>(&mut self, points: I)
    where
        I: IntoIterator<Item = P>,
        P: IntoGeometry<Vector>,
    {
        self.outline = points.into_iter().map(|point| point.into_geometry()).collect();
        self.data.set_len(3 * self.outline.len().saturating_sub(2));
        trace!(
            "triangulating {} point(s) into {} vertices",
            self.outline.len(),
            self.data.len()
        );
        let positions = self.outline.iter().copied().fan().flatten();
        for (vertex, position) in self.data.iter_mut().zip(positions) {
            vertex.position = position;
            vertex.color = self.color;
        }
        self.drawer.dirty();
    }

    /// Gets the positions of all vertices of the triangulated `Polygon`.
    ///
    /// Every trigon repeats the first point, so for more than three points
    /// this is not the list of points given to [`Polygon::set_points`]. See
    /// [`Polygon::outline`].
    pub fn points(&self) -> Vec<Vector> {
        self.data.iter().map(|vertex| vertex.position).collect()
    }

    /// Gets the points of the `Polygon` in the order that they were given.
    pub fn outline(&self) -> &[Vector] {
        self.outline.as_slice()
    }

    pub fn triangles(&self) -> &TrianglesData {
        &self.data
    }

    /// Draws the `Polygon` onto `target`.
    pub fn draw(&mut self, target: &mut dyn Target) -> Result<(), TrianglesError> {
        self.drawer.draw(&self.data, target)
    }
}

#[cfg(test)]
mod tests {
    use crate::color::Rgba;
    use crate::draw::tests::{Canvas, Event};
    use crate::geometry::Vector;
    use crate::shape::Polygon;
    use crate::triangles::{Triangles, Vertex};

    fn square() -> Vec<Vector> {
        vec![
            Vector::new(0.0, 0.0),
            Vector::new(1.0, 0.0),
            Vector::new(1.0, 1.0),
            Vector::new(0.0, 1.0),
        ]
    }

    #[test]
    fn triangulate_square() {
        let color = Rgba::new(0.2, 0.4, 0.6, 0.8);
        let polygon = Polygon::new(color, square());

        assert_eq!(
            vec![
                Vector::new(0.0, 0.0),
                Vector::new(1.0, 0.0),
                Vector::new(1.0, 1.0),
                Vector::new(0.0, 0.0),
                Vector::new(1.0, 1.0),
                Vector::new(0.0, 1.0),
            ],
            polygon.points(),
        );
        assert!(polygon
            .triangles()
            .iter()
            .all(|vertex| vertex.color == color));
        assert_eq!(square().as_slice(), polygon.outline());
    }

    #[test]
    fn triangulate_from_tuples() {
        let polygon = Polygon::new(Rgba::WHITE, [(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)]);

        assert_eq!(
            vec![
                Vector::new(0.0, 0.0),
                Vector::new(4.0, 0.0),
                Vector::new(4.0, 3.0),
            ],
            polygon.points(),
        );
    }

    #[test]
    fn overwrite_color() {
        let mut polygon = Polygon::new(Rgba::WHITE, square());
        let positions = polygon.points();

        polygon.set_color(Rgba::BLACK);

        assert_eq!(Rgba::BLACK, polygon.color());
        assert_eq!(6, polygon.triangles().len());
        assert!(polygon
            .triangles()
            .iter()
            .all(|vertex| vertex.color == Rgba::BLACK));
        assert_eq!(positions, polygon.points());
    }

    #[test]
    fn reset_color_of_reused_vertices() {
        let mut polygon = Polygon::new(Rgba::WHITE, square());
        polygon.set_color(Rgba::BLACK);
        polygon.set_points(square().into_iter().chain(Some(Vector::new(-1.0, 0.5))));

        assert_eq!(9, polygon.triangles().len());
        assert!(polygon
            .triangles()
            .iter()
            .all(|vertex| vertex.color == Rgba::BLACK));
        assert!(polygon
            .triangles()
            .iter()
            .all(|vertex| vertex.picture == Vertex::NO_PICTURE));
    }

    #[test]
    fn degenerate_points_produce_empty_geometry() {
        let mut polygon = Polygon::new(Rgba::WHITE, square());

        polygon.set_points(vec![Vector::new(1.0, 1.0), Vector::new(2.0, 2.0)]);
        assert!(polygon.triangles().is_empty());
        assert!(polygon.points().is_empty());
        assert_eq!(2, polygon.outline().len());

        polygon.set_points(Vec::<Vector>::new());
        assert!(polygon.triangles().is_empty());
    }

    #[test]
    fn dirty_after_mutation() {
        let mut canvas = Canvas::new(3);
        let mut polygon = Polygon::new(Rgba::WHITE, square());
        polygon.draw(&mut canvas).unwrap();
        assert_eq!(Event::MakeTriangles(6), canvas.take()[0]);

        polygon.set_points(vec![Vector::new(0.0, 0.0)]);
        polygon.draw(&mut canvas).unwrap();
        assert_eq!(
            vec![Event::Update(0), Event::Draw(polygon.triangles().clone())],
            canvas.take(),
        );

        polygon.set_points(square());
        polygon.set_color(Rgba::BLACK);
        polygon.draw(&mut canvas).unwrap();
        assert_eq!(
            vec![Event::Update(6), Event::Draw(polygon.triangles().clone())],
            canvas.take(),
        );

        // Drawing again without mutation reuses the cached geometry.
        polygon.draw(&mut canvas).unwrap();
        assert_eq!(
            vec![Event::Draw(polygon.triangles().clone())],
            canvas.take(),
        );
    }

    #[test]
    fn dirty_after_color_change() {
        let mut canvas = Canvas::new(3);
        let mut polygon = Polygon::new(Rgba::WHITE, square());
        polygon.draw(&mut canvas).unwrap();
        canvas.take();

        polygon.set_color(Rgba::BLACK);
        polygon.draw(&mut canvas).unwrap();
        let events = canvas.take();
        assert_eq!(2, events.len());
        assert_eq!(Event::Update(6), events[0]);
        match &events[1] {
            Event::Draw(triangles) => {
                assert_eq!(6, triangles.len());
                assert!(triangles.iter().all(|vertex| vertex.color == Rgba::BLACK));
            }
            event => panic!("unexpected event: {:?}", event),
        }

        // Drawing again without mutation reuses the cached geometry.
        polygon.draw(&mut canvas).unwrap();
        assert_eq!(
            vec![Event::Draw(polygon.triangles().clone())],
            canvas.take(),
        );
    }
}
