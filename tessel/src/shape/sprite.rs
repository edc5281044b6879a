use derivative::Derivative;
use log::debug;
use num::Zero;
use std::rc::Rc;

use crate::color::Rgba;
use crate::draw::{Drawer, Picture, Target};
use crate::geometry::Vector;
use crate::primitive::{IntoTrigons, Tetragon};
use crate::triangles::{TrianglesData, TrianglesError, Vertex};

// Corners of a rectangle at the origin, in order around its boundary.
fn corners(size: Vector) -> Tetragon<Vector> {
    let (w, h) = size.xy();
    Tetragon::new(
        Vector::new(0.0, 0.0),
        Vector::new(w, 0.0),
        Vector::new(w, h),
        Vector::new(0.0, h),
    )
}

// Positions of the two trigons covering a rectangle, which share the diagonal
// from the origin to the opposite corner.
fn trigons(size: Vector) -> impl Iterator<Item = Vector> {
    corners(size).into_trigons().into_iter().flatten()
}

/// Picture drawn as a rectangle of the same size.
///
/// A `Sprite` is composed of two trigons (six vertices) that cover the bounds
/// of its picture. The picture coordinates of these vertices span the unit
/// square and are resolved into the space of the picture by the rendering
/// backend. To move, rotate, or scale a `Sprite`, transform the target onto
/// which it is drawn.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Sprite {
    data: TrianglesData,
    drawer: Drawer,
    #[derivative(Debug = "ignore")]
    picture: Rc<dyn Picture>,
}

impl Sprite {
    /// Constructs a `Sprite` with the size of `picture`.
    pub fn new(picture: Rc<dyn Picture>) -> Self {
        let data = trigons(Vector::new(1.0, 1.0))
            .map(|uv| Vertex::new(Vector::zero(), Rgba::WHITE, uv))
            .collect();
        let mut sprite = Sprite {
            data,
            drawer: Drawer::with_picture(picture.clone()),
            picture,
        };
        sprite.resize(sprite.picture.bounds().size());
        sprite
    }

    /// Replaces the picture of the `Sprite` and resizes it accordingly.
    ///
    /// If the size of the new picture is the same as the previous picture, the
    /// geometry is left untouched.
    pub fn set_picture(&mut self, picture: Rc<dyn Picture>) {
        let size = picture.bounds().size();
        self.drawer.set_picture(Some(picture.clone()));
        let previous = std::mem::replace(&mut self.picture, picture);
        if previous.bounds().size() != size {
            self.resize(size);
        }
    }

    fn resize(&mut self, size: Vector) {
        debug!("resizing sprite to {}x{}", size.x, size.y);
        for (vertex, position) in self.data.iter_mut().zip(trigons(size)) {
            vertex.position = position;
        }
        self.drawer.dirty();
    }

    pub fn picture(&self) -> &Rc<dyn Picture> {
        &self.picture
    }

    pub fn triangles(&self) -> &TrianglesData {
        &self.data
    }

    /// Draws the `Sprite` onto `target`.
    pub fn draw(&mut self, target: &mut dyn Target) -> Result<(), TrianglesError> {
        self.drawer.draw(&self.data, target)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::color::Rgba;
    use crate::draw::tests::{Canvas, Event, Image};
    use crate::geometry::Vector;
    use crate::shape::Sprite;
    use crate::triangles::Triangles;

    fn positions(sprite: &Sprite) -> Vec<Vector> {
        sprite.triangles().iter().map(|vertex| vertex.position).collect()
    }

    #[test]
    fn geometry_matches_picture() {
        let sprite = Sprite::new(Image::new(10.0, 20.0));

        assert_eq!(6, sprite.triangles().len());
        assert_eq!(
            vec![
                Vector::new(0.0, 0.0),
                Vector::new(10.0, 0.0),
                Vector::new(10.0, 20.0),
                Vector::new(0.0, 0.0),
                Vector::new(10.0, 20.0),
                Vector::new(0.0, 20.0),
            ],
            positions(&sprite),
        );
        assert_eq!(
            vec![
                Vector::new(0.0, 0.0),
                Vector::new(1.0, 0.0),
                Vector::new(1.0, 1.0),
                Vector::new(0.0, 0.0),
                Vector::new(1.0, 1.0),
                Vector::new(0.0, 1.0),
            ],
            sprite
                .triangles()
                .iter()
                .map(|vertex| vertex.picture)
                .collect::<Vec<_>>(),
        );
        assert!(sprite
            .triangles()
            .iter()
            .all(|vertex| vertex.color == Rgba::WHITE));
    }

    #[test]
    fn keep_geometry_for_same_size() {
        let mut canvas = Canvas::new(1);
        let mut sprite = Sprite::new(Image::new(10.0, 20.0));
        sprite.draw(&mut canvas).unwrap();
        canvas.take();

        let before = positions(&sprite);
        let picture = Image::new(10.0, 20.0);
        sprite.set_picture(picture.clone());

        assert_eq!(before, positions(&sprite));
        assert!(Rc::ptr_eq(&picture, sprite.picture()));

        // Only the picture is replaced: the cached geometry is not updated.
        sprite.draw(&mut canvas).unwrap();
        let events = canvas.take();
        assert!(!events
            .iter()
            .any(|event| matches!(event, Event::Update(_))));
        assert_eq!(Event::MakePicture(Vector::new(10.0, 20.0)), events[0]);
    }

    #[test]
    fn resize_for_new_size() {
        let mut canvas = Canvas::new(1);
        let mut sprite = Sprite::new(Image::new(10.0, 20.0));
        sprite.draw(&mut canvas).unwrap();
        canvas.take();

        sprite.set_picture(Image::new(4.0, 3.0));
        assert_eq!(Vector::new(4.0, 3.0), positions(&sprite)[2]);
        assert_eq!(Vector::new(0.0, 3.0), positions(&sprite)[5]);

        sprite.draw(&mut canvas).unwrap();
        assert_eq!(
            vec![
                Event::Update(6),
                Event::MakePicture(Vector::new(4.0, 3.0)),
                Event::DrawPicture(Vector::new(4.0, 3.0), sprite.triangles().clone()),
            ],
            canvas.take(),
        );
    }
}
