//! A recursive region quadtree for broad-phase queries over axis-aligned
//! bounding boxes.
//!
//! Objects are pushed down to the deepest node whose quadrant fully contains
//! them. Objects that straddle a midline stay at the node where they were
//! classified. [`Quadtree::query`] returns a superset of the objects that may
//! overlap a rectangle; exact overlap tests are up to the caller.
//!
//! ```
//! use region_quadtree::{Bounded, Quadtree, Region};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Ball { id: u32, x: f64, y: f64, r: f64 }
//!
//! impl Bounded for Ball {
//!     fn bounds(&self) -> Region {
//!         Region::new(self.x - self.r, self.x + self.r, self.y - self.r, self.y + self.r)
//!     }
//! }
//!
//! let mut tree = Quadtree::new(4, 2, Region::new(0.0, 100.0, 0.0, 100.0)).unwrap();
//! tree.insert(Ball { id: 1, x: 10.0, y: 10.0, r: 2.0 });
//! tree.insert(Ball { id: 2, x: 80.0, y: 80.0, r: 2.0 });
//! tree.insert(Ball { id: 3, x: 12.0, y: 12.0, r: 2.0 });
//!
//! let candidates = tree.query(&Region::new(9.0, 11.0, 9.0, 11.0));
//! assert!(candidates.iter().any(|b| b.id == 1));
//! assert!(candidates.iter().all(|b| b.id != 2));
//! ```

mod config;
mod error;
mod node;
mod quadtree;
mod region;

/// Capability a stored object needs: a bounding rectangle.
pub trait Bounded {
    fn bounds(&self) -> Region;
}

impl Bounded for Region {
    fn bounds(&self) -> Region {
        *self
    }
}

impl<T: Bounded + ?Sized> Bounded for &T {
    fn bounds(&self) -> Region {
        (**self).bounds()
    }
}

impl<T: Bounded + ?Sized> Bounded for std::rc::Rc<T> {
    fn bounds(&self) -> Region {
        (**self).bounds()
    }
}

/// Callbacks for [`Quadtree::traverse`].
pub trait QuadtreeVisitor<T> {
    fn object(&mut self, depth: usize, object: &T);
    fn leaf(&mut self, depth: usize, region: &Region);
    fn branch(&mut self, depth: usize, region: &Region);
}

pub use config::QuadtreeConfig;
pub use error::Error;
pub use quadtree::{Iter, Quadtree};
pub use region::{Quadrant, Region};
