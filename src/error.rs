#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("Inverted region: x [{min_x}, {max_x}], y [{min_y}, {max_y}]")]
    InvertedRegion {
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    },
    #[error("Max objects per region must be at least 1")]
    ZeroCapacity,
    #[error("Quadrant index out of range: {0}")]
    InvalidQuadrant(usize),
}
