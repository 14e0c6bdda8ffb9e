use tracing::debug;

use crate::node::Node;
use crate::{Bounded, Error, QuadtreeConfig, QuadtreeVisitor, Region};

/// A region quadtree holding objects that expose a bounding [`Region`].
///
/// Nodes split lazily once they hold `max_objects_per_region` objects and are
/// shallower than `max_depth`. Removal never collapses the tree on its own; call
/// [`Quadtree::merge`] (or [`Quadtree::clear_by`], which merges) to prune
/// empty subtrees.
#[derive(Clone, Debug)]
pub struct Quadtree<T> {
    config: QuadtreeConfig,
    region: Region,
    root: Node<T>,
}

impl<T> Quadtree<T> {
    pub fn new(max_depth: usize, max_objects_per_region: usize, region: Region) -> Result<Self, Error> {
        Self::with_config(QuadtreeConfig::new(max_depth, max_objects_per_region), region)
    }

    pub fn with_config(config: QuadtreeConfig, region: Region) -> Result<Self, Error> {
        config.validate()?;
        let region = Region::try_new(region.min_x(), region.max_x(), region.min_y(), region.max_y())?;
        Ok(Self {
            config,
            region,
            root: Node::new(0, region),
        })
    }

    pub fn config(&self) -> &QuadtreeConfig {
        &self.config
    }

    pub fn max_depth(&self) -> usize {
        self.config.max_depth
    }

    pub fn max_objects_per_region(&self) -> usize {
        self.config.max_objects_per_region
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Drops every object and the whole node hierarchy.
    pub fn clear(&mut self) {
        debug!(objects = self.root.count(), "clearing quadtree");
        self.root = Node::new(0, self.region);
    }

    /// Removes every object matching `predicate`, then prunes emptied subtrees.
    pub fn clear_by<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.root.clear_by(&mut predicate);
        self.root.merge();
    }

    /// Prunes subtrees that hold no objects.
    pub fn merge(&mut self) {
        self.root.merge();
    }

    pub fn count(&self) -> usize {
        self.root.count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Number of levels in the tree, 1 when the root has not split.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Every stored object, parents before children.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root)
    }

    pub fn traverse<V>(&self, visitor: &mut V)
    where
        V: QuadtreeVisitor<T>,
    {
        let mut to_process = vec![&self.root];

        while let Some(node) = to_process.pop() {
            match node.children() {
                Some(children) => {
                    // Reversed so quadrant 0 is visited first.
                    to_process.extend(children.iter().rev());
                    visitor.branch(node.level(), node.region());
                }
                None => visitor.leaf(node.level(), node.region()),
            }
            for object in node.objects() {
                visitor.object(node.level(), object);
            }
        }
    }
}

impl<T: Bounded> Quadtree<T> {
    pub fn insert(&mut self, object: T) {
        self.root.insert(object, &self.config);
    }

    pub fn insert_all<I>(&mut self, objects: I)
    where
        I: IntoIterator<Item = T>,
    {
        for object in objects {
            self.insert(object);
        }
    }

    /// Borrowing form of [`Quadtree::query`].
    pub fn query_refs(&self, bounds: &Region) -> Vec<&T> {
        let mut out = Vec::new();
        self.root.query(bounds, &mut out);
        out
    }

    /// Candidates from [`Quadtree::query_refs`] whose bounds actually overlap `bounds`.
    pub fn query_intersecting(&self, bounds: &Region) -> Vec<&T> {
        let mut out = self.query_refs(bounds);
        out.retain(|object| object.bounds().intersects(bounds));
        out
    }
}

impl<T: Bounded + Clone> Quadtree<T> {
    /// Returns the objects that may overlap `bounds`.
    ///
    /// Never misses an overlapping object, but may return objects that do not
    /// overlap at all. The list is a copy and stays valid across later mutation.
    pub fn query(&self, bounds: &Region) -> Vec<T> {
        self.query_refs(bounds).into_iter().cloned().collect()
    }
}

impl<T: Bounded + PartialEq> Quadtree<T> {
    /// Removes the first stored object equal to `object`. Returns false when
    /// there is none.
    pub fn remove(&mut self, object: &T) -> bool {
        self.root.remove(object)
    }
}

impl<'a, T> IntoIterator for &'a Quadtree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Pre-order iterator over the objects of a [`Quadtree`].
pub struct Iter<'a, T> {
    to_process: Vec<&'a Node<T>>,
    current: std::slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: &'a Node<T>) -> Self {
        let mut iter = Self {
            to_process: Vec::new(),
            current: root.objects().iter(),
        };
        iter.push_children(root);
        iter
    }

    fn push_children(&mut self, node: &'a Node<T>) {
        if let Some(children) = node.children() {
            // Reversed so quadrant 0 comes out first.
            self.to_process.extend(children.iter().rev());
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(object) = self.current.next() {
                return Some(object);
            }
            let node = self.to_process.pop()?;
            self.push_children(node);
            self.current = node.objects().iter();
        }
    }
}

impl<T: Bounded> Extend<T> for Quadtree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}
