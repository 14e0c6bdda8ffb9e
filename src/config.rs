use crate::Error;

/// The two thresholds that make up the whole resizing policy of a [`crate::Quadtree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadtreeConfig {
    /// Deepest level a node may be created at. Zero keeps everything at the root.
    #[cfg_attr(feature = "serde", serde(default = "default_max_depth"))]
    pub max_depth: usize,
    /// Objects a node holds before it considers splitting.
    #[cfg_attr(feature = "serde", serde(default = "default_max_objects_per_region"))]
    pub max_objects_per_region: usize,
}

fn default_max_depth() -> usize {
    8
}

fn default_max_objects_per_region() -> usize {
    4
}

impl QuadtreeConfig {
    pub fn new(max_depth: usize, max_objects_per_region: usize) -> Self {
        Self {
            max_depth,
            max_objects_per_region,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.max_objects_per_region == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(())
    }
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            max_objects_per_region: default_max_objects_per_region(),
        }
    }
}
