use tracing::{debug, trace};

use crate::{Bounded, Quadrant, QuadtreeConfig, Region};

/// One level of the tree. Owns its objects and, once split, its four children
/// in [`Quadrant`] order.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    depth: usize,
    region: Region,
    objects: Vec<T>,
    children: Option<Box<[Node<T>; 4]>>,
}

impl<T> Node<T> {
    pub fn new(depth: usize, region: Region) -> Self {
        Self {
            depth,
            region,
            objects: Vec::new(),
            children: None,
        }
    }

    pub fn level(&self) -> usize {
        self.depth
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn objects(&self) -> &[T] {
        &self.objects
    }

    pub fn children(&self) -> Option<&[Node<T>; 4]> {
        self.children.as_deref()
    }

    pub fn has_objects(&self) -> bool {
        !self.objects.is_empty()
    }

    pub fn has_children(&self) -> bool {
        self.children.is_some()
    }

    pub fn count(&self) -> usize {
        let below: usize = self
            .children
            .iter()
            .flat_map(|children| children.iter())
            .map(Node::count)
            .sum();
        self.objects.len() + below
    }

    /// Number of levels in this subtree, 1 for a leaf.
    pub fn depth(&self) -> usize {
        match self.children.as_deref() {
            Some(children) => 1 + children.iter().map(Node::depth).max().unwrap_or(0),
            None => 1,
        }
    }

    /// Prunes children that ended up empty. Never moves objects.
    pub fn merge(&mut self) {
        let Some(children) = self.children.as_deref_mut() else {
            return;
        };

        let mut prune = true;
        for child in children.iter_mut() {
            child.merge();
            if child.has_children() || child.has_objects() {
                prune = false;
            }
        }

        if prune {
            debug!(depth = self.depth, region = ?self.region, "merging empty children");
            self.children = None;
        }
    }

    pub fn clear_by<F>(&mut self, predicate: &mut F)
    where
        F: FnMut(&T) -> bool,
    {
        self.objects.retain(|object| !predicate(object));
        if let Some(children) = self.children.as_deref_mut() {
            for child in children.iter_mut() {
                child.clear_by(predicate);
            }
        }
    }

    /// Visits every object in this subtree, this node's objects first.
    pub fn for_each<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a T),
    {
        self.objects.iter().for_each(&mut *f);
        if let Some(children) = self.children.as_deref() {
            for child in children.iter() {
                child.for_each(f);
            }
        }
    }
}

impl<T: Bounded> Node<T> {
    pub fn insert(&mut self, object: T, config: &QuadtreeConfig) {
        let full = self.objects.len() >= config.max_objects_per_region
            && self.depth < config.max_depth;

        if self.has_children() || full {
            if !self.has_children() {
                self.split(config);
            }

            if let Some(quadrant) = self.region.quadrant_of(&object.bounds()) {
                if let Some(children) = self.children.as_deref_mut() {
                    children[quadrant.index()].insert(object, config);
                    return;
                }
            }
        }

        trace!(depth = self.depth, "storing object");
        self.objects.push(object);
    }

    /// Creates the four children and pushes down every object that fits one of them.
    fn split(&mut self, config: &QuadtreeConfig) {
        debug!(depth = self.depth, region = ?self.region, objects = self.objects.len(), "splitting node");

        let depth = self.depth + 1;
        let region = self.region;
        self.children = Some(Box::new(
            Quadrant::ALL.map(|quadrant| Node::new(depth, region.split(quadrant))),
        ));

        let objects = std::mem::take(&mut self.objects);
        for object in objects {
            self.insert(object, config);
        }
    }

    /// Collects the objects that may overlap `bounds`.
    ///
    /// The result is a superset of the true overlaps. A query that straddles
    /// the midlines of a split node gets that node's whole subtree.
    pub fn query<'a>(&'a self, bounds: &Region, out: &mut Vec<&'a T>) {
        let Some(children) = self.children.as_deref() else {
            out.extend(self.objects.iter());
            return;
        };

        match self.region.quadrant_of(bounds) {
            Some(quadrant) => {
                out.extend(self.objects.iter());
                children[quadrant.index()].query(bounds, out);
            }
            None => self.for_each(&mut |object| out.push(object)),
        }
    }
}

impl<T: Bounded + PartialEq> Node<T> {
    pub fn remove(&mut self, object: &T) -> bool {
        if let Some(quadrant) = self.region.quadrant_of(&object.bounds()) {
            if let Some(children) = self.children.as_deref_mut() {
                return children[quadrant.index()].remove(object);
            }
        }

        match self.objects.iter().position(|stored| stored == object) {
            Some(index) => {
                self.objects.remove(index);
                true
            }
            None => false,
        }
    }
}
