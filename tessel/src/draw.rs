//! Boundary with rendering backends.
//!
//! Tessel does not render geometry. Instead, a backend implements [`Target`]
//! and converts [`Triangles`] into its own representation, such as vertex
//! buffers on a device, via [`TargetTriangles`]. Pictures (textures) are
//! described by [`Picture`] and converted via [`TargetPicture`].
//!
//! The [`Drawer`] sits between mutable geometry and any number of targets. It
//! caches the converted geometry of each target and only re-reads its source
//! after it has been marked [dirty][`Drawer::dirty`]. Shapes call
//! [`Drawer::dirty`] whenever they mutate their geometry; any other code that
//! mutates geometry drawn through a `Drawer` must do the same before the next
//! draw, or stale geometry may be rendered.
//!
//! [`Triangles`]: crate::triangles::Triangles

use ahash::AHashMap;
use derivative::Derivative;
use log::{debug, trace};
use smallvec::SmallVec;
use std::collections::hash_map::Entry;
use std::rc::Rc;

use crate::geometry::Rect;
use crate::triangles::{Triangles, TrianglesError};

/// Picture (texture) resource.
pub trait Picture {
    /// Gets the bounds of the picture in picture space.
    fn bounds(&self) -> Rect;
}

/// Identity of a [`Target`].
///
/// Keys must be stable for the lifetime of a target and unique among live
/// targets.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TargetKey(pub u64);

/// Destination onto which geometry is rendered.
pub trait Target {
    fn key(&self) -> TargetKey;

    /// Converts geometry into the representation of the target.
    ///
    /// The returned triangles have the same length and properties as `source`.
    fn make_triangles(&mut self, source: &dyn Triangles) -> Box<dyn TargetTriangles>;

    /// Converts a picture into the representation of the target.
    fn make_picture(&mut self, picture: &dyn Picture) -> Box<dyn TargetPicture>;
}

/// Geometry owned by a [`Target`].
pub trait TargetTriangles: Triangles {
    /// Resizes the geometry to `len` vertices.
    fn set_len(&mut self, len: usize);

    /// Draws the geometry onto its target without a picture.
    fn draw(&mut self);
}

/// Picture owned by a [`Target`].
pub trait TargetPicture {
    /// Draws the geometry onto its target with this picture.
    fn draw(&mut self, triangles: &mut dyn TargetTriangles);
}

#[derive(Derivative)]
#[derivative(Debug)]
struct DrawerTarget {
    #[derivative(Debug = "ignore")]
    triangles: Box<dyn TargetTriangles>,
    #[derivative(Debug = "ignore")]
    pictures: SmallVec<[(Rc<dyn Picture>, Box<dyn TargetPicture>); 2]>,
    clean: bool,
}

impl DrawerTarget {
    fn draw_with_picture(&mut self, picture: &Rc<dyn Picture>, target: &mut dyn Target) {
        // Drop pictures that are only referenced by this cache.
        self.pictures
            .retain(|(cached, _)| Rc::ptr_eq(cached, picture) || Rc::strong_count(cached) > 1);
        let index = match self
            .pictures
            .iter()
            .position(|(cached, _)| Rc::ptr_eq(cached, picture))
        {
            Some(index) => index,
            None => {
                debug!("creating picture for target {:?}", target.key());
                self.pictures
                    .push((picture.clone(), target.make_picture(&**picture)));
                self.pictures.len() - 1
            }
        };
        let (_, cached) = &mut self.pictures[index];
        cached.draw(&mut *self.triangles);
    }
}

/// Cache of geometry and pictures drawn onto [`Target`]s.
///
/// A `Drawer` is bound to an optional [`Picture`] and draws geometry supplied
/// by its owner. The first draw onto a target converts the geometry with
/// [`Target::make_triangles`]. Subsequent draws reuse the converted geometry
/// until [`Drawer::dirty`] is called, after which the next draw onto each
/// target updates the converted geometry from its source.
///
/// # Examples
///
/// ```rust,ignore
/// let mut drawer = Drawer::new();
/// drawer.draw(&data, &mut target)?;
///
/// data[0].position = Vector::new(1.0, 1.0);
/// drawer.dirty();
/// drawer.draw(&data, &mut target)?;
/// ```
#[derive(Default, Derivative)]
#[derivative(Debug)]
pub struct Drawer {
    #[derivative(Debug = "ignore")]
    picture: Option<Rc<dyn Picture>>,
    targets: AHashMap<TargetKey, DrawerTarget>,
}

impl Drawer {
    pub fn new() -> Self {
        Drawer::default()
    }

    pub fn with_picture(picture: Rc<dyn Picture>) -> Self {
        Drawer {
            picture: Some(picture),
            ..Default::default()
        }
    }

    pub fn picture(&self) -> Option<&Rc<dyn Picture>> {
        self.picture.as_ref()
    }

    /// Replaces the picture, returning the previous picture (if any).
    ///
    /// Cached geometry is not invalidated: geometry is independent of the
    /// picture with which it is drawn.
    pub fn set_picture(&mut self, picture: Option<Rc<dyn Picture>>) -> Option<Rc<dyn Picture>> {
        std::mem::replace(&mut self.picture, picture)
    }

    /// Marks the cached geometry of all targets as stale.
    pub fn dirty(&mut self) {
        trace!("marking {} target(s) dirty", self.targets.len());
        for cached in self.targets.values_mut() {
            cached.clean = false;
        }
    }

    /// Returns `true` if any target has stale geometry.
    pub fn is_dirty(&self) -> bool {
        self.targets.values().any(|cached| !cached.clean)
    }

    /// Draws `source` onto `target`.
    ///
    /// `source` must be the geometry that this `Drawer` has been drawing all
    /// along; the cache of a target is only refreshed after [`Drawer::dirty`].
    ///
    /// # Errors
    ///
    /// Returns an error if the target geometry cannot be updated from
    /// `source`, which indicates a misbehaving [`TargetTriangles`].
    pub fn draw(
        &mut self,
        source: &dyn Triangles,
        target: &mut dyn Target,
    ) -> Result<(), TrianglesError> {
        let key = target.key();
        let cached = match self.targets.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                debug!("creating triangles for target {:?}", key);
                entry.insert(DrawerTarget {
                    triangles: target.make_triangles(source),
                    pictures: SmallVec::new(),
                    clean: true,
                })
            }
        };
        if !cached.clean {
            trace!("updating {} vertices for target {:?}", source.len(), key);
            cached.triangles.set_len(source.len());
            cached.triangles.update(source)?;
            cached.clean = true;
        }
        match self.picture.as_ref() {
            Some(picture) => cached.draw_with_picture(picture, target),
            None => cached.triangles.draw(),
        }
        Ok(())
    }
}
