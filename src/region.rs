use crate::Error;

/// One of the four sub-rectangles of a [`Region`].
///
/// The discriminant is the quadrant index. `NE` is the upper right quarter and
/// the indices go clockwise from there.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quadrant {
    NE = 0,
    SE = 1,
    SW = 2,
    NW = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Quadrant::NE, Quadrant::SE, Quadrant::SW, Quadrant::NW];

    pub fn index(self) -> usize {
        self as usize
    }

    fn is_east(self) -> bool {
        matches!(self, Quadrant::NE | Quadrant::SE)
    }

    fn is_north(self) -> bool {
        matches!(self, Quadrant::NE | Quadrant::NW)
    }
}

impl TryFrom<usize> for Quadrant {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self, Error> {
        Quadrant::ALL
            .get(index)
            .copied()
            .ok_or(Error::InvalidQuadrant(index))
    }
}

impl From<Quadrant> for usize {
    fn from(quadrant: Quadrant) -> Self {
        quadrant.index()
    }
}

/// An axis-aligned rectangle, closed on every side.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Region {
    /// Builds a region without normalizing the coordinates.
    ///
    /// The caller guarantees `min_x <= max_x` and `min_y <= max_y`. Debug builds
    /// panic on an inverted region, release builds leave the tree's behavior
    /// for it unspecified. Use [`Region::try_new`] for untrusted input.
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        debug_assert!(
            min_x <= max_x && min_y <= max_y,
            "inverted region: x [{min_x}, {max_x}], y [{min_y}, {max_y}]"
        );
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    pub fn try_new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<Self, Error> {
        // NaN fails both comparisons.
        if min_x <= max_x && min_y <= max_y {
            Ok(Self {
                min_x,
                max_x,
                min_y,
                max_y,
            })
        } else {
            Err(Error::InvertedRegion {
                min_x,
                max_x,
                min_y,
                max_y,
            })
        }
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn mid_x(&self) -> f64 {
        (self.min_x + self.max_x) / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        (self.min_y + self.max_y) / 2.0
    }

    /// Returns the quarter of this region named by `quadrant`.
    pub fn split(&self, quadrant: Quadrant) -> Region {
        let (min_x, max_x) = if quadrant.is_east() {
            (self.mid_x(), self.max_x)
        } else {
            (self.min_x, self.mid_x())
        };
        let (min_y, max_y) = if quadrant.is_north() {
            (self.mid_y(), self.max_y)
        } else {
            (self.min_y, self.mid_y())
        };
        Region {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    pub fn contains(&self, other: &Region) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    /// True when the two regions overlap or touch.
    pub fn intersects(&self, other: &Region) -> bool {
        other.min_x <= self.max_x
            && other.max_x >= self.min_x
            && other.min_y <= self.max_y
            && other.max_y >= self.min_y
    }

    /// Classifies `other` against the four quarters of this region.
    ///
    /// Returns the quadrant whose sub-rectangle contains `other`. A rectangle
    /// touching either midline straddles and yields `None`, as does one that
    /// leaves the region.
    pub fn quadrant_of(&self, other: &Region) -> Option<Quadrant> {
        let (mid_x, mid_y) = (self.mid_x(), self.mid_y());
        let clear_x = other.min_x > mid_x || other.max_x < mid_x;
        let clear_y = other.min_y > mid_y || other.max_y < mid_y;
        if !(clear_x && clear_y) {
            return None;
        }
        Quadrant::ALL
            .into_iter()
            .find(|&quadrant| self.split(quadrant).contains(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Region {
        Region::new(0.0, 100.0, 0.0, 100.0)
    }

    #[test]
    fn midpoints() {
        let region = Region::new(-10.0, 30.0, 4.0, 8.0);
        assert_eq!(region.mid_x(), 10.0);
        assert_eq!(region.mid_y(), 6.0);
        assert_eq!(region.width(), 40.0);
        assert_eq!(region.height(), 4.0);
    }

    #[test]
    fn split_layout() {
        let region = square();
        assert_eq!(region.split(Quadrant::NE), Region::new(50.0, 100.0, 50.0, 100.0));
        assert_eq!(region.split(Quadrant::SE), Region::new(50.0, 100.0, 0.0, 50.0));
        assert_eq!(region.split(Quadrant::SW), Region::new(0.0, 50.0, 0.0, 50.0));
        assert_eq!(region.split(Quadrant::NW), Region::new(0.0, 50.0, 50.0, 100.0));
    }

    #[test]
    fn quadrants_tile_parent() {
        let region = Region::new(-3.0, 17.0, 2.5, 9.5);
        let quarters = Quadrant::ALL.map(|q| region.split(q));
        let area: f64 = quarters.iter().map(|r| r.width() * r.height()).sum();
        assert_eq!(area, region.width() * region.height());
        for quarter in &quarters {
            assert!(region.contains(quarter));
        }
        // Neighbouring quarters only share an edge.
        for (i, a) in quarters.iter().enumerate() {
            for b in &quarters[i + 1..] {
                let overlap_w = a.max_x().min(b.max_x()) - a.min_x().max(b.min_x());
                let overlap_h = a.max_y().min(b.max_y()) - a.min_y().max(b.min_y());
                assert!(overlap_w <= 0.0 || overlap_h <= 0.0, "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn quadrant_indices() {
        for (i, quadrant) in Quadrant::ALL.iter().enumerate() {
            assert_eq!(quadrant.index(), i);
            assert_eq!(Quadrant::try_from(i), Ok(*quadrant));
        }
        assert_eq!(Quadrant::try_from(4), Err(Error::InvalidQuadrant(4)));
    }

    #[test]
    fn classify_matches_split() {
        let region = square();
        let samples = [
            Region::new(60.0, 70.0, 60.0, 70.0),
            Region::new(60.0, 70.0, 10.0, 20.0),
            Region::new(10.0, 20.0, 10.0, 20.0),
            Region::new(10.0, 20.0, 60.0, 70.0),
            Region::new(51.0, 100.0, 51.0, 100.0),
            Region::new(0.0, 49.0, 51.0, 100.0),
        ];
        for sample in samples {
            let quadrant = region.quadrant_of(&sample).expect("fits one quadrant");
            assert!(region.split(quadrant).contains(&sample));
        }
        // Left-top must not land in the right-bottom quadrant.
        assert_eq!(region.quadrant_of(&Region::new(10.0, 20.0, 60.0, 70.0)), Some(Quadrant::NW));
    }

    #[test]
    fn classify_straddling() {
        let region = square();
        assert_eq!(region.quadrant_of(&Region::new(40.0, 60.0, 10.0, 20.0)), None);
        assert_eq!(region.quadrant_of(&Region::new(10.0, 20.0, 45.0, 55.0)), None);
        assert_eq!(region.quadrant_of(&Region::new(50.0, 50.0, 10.0, 20.0)), None);
        assert_eq!(region.quadrant_of(&Region::new(40.0, 50.0, 40.0, 50.0)), None);
        assert_eq!(region.quadrant_of(&Region::new(50.0, 60.0, 60.0, 70.0)), None);
        assert_eq!(region.quadrant_of(&Region::new(60.0, 70.0, 50.0, 60.0)), None);
        assert_eq!(region.quadrant_of(&Region::new(110.0, 120.0, 10.0, 20.0)), None);
        assert_eq!(region.quadrant_of(&region), None);
    }

    #[test]
    fn intersects_counts_touching_edges() {
        let a = Region::new(0.0, 10.0, 0.0, 10.0);
        assert!(a.intersects(&Region::new(10.0, 20.0, 5.0, 6.0)));
        assert!(a.intersects(&Region::new(10.0, 20.0, 10.0, 20.0)));
        assert!(a.intersects(&Region::new(2.0, 3.0, 2.0, 3.0)));
        assert!(!a.intersects(&Region::new(10.5, 20.0, 5.0, 6.0)));
    }

    #[test]
    fn try_new_rejects_inverted() {
        assert!(Region::try_new(0.0, 1.0, 0.0, 1.0).is_ok());
        assert!(matches!(
            Region::try_new(2.0, 1.0, 0.0, 1.0),
            Err(Error::InvertedRegion { .. })
        ));
        assert!(Region::try_new(0.0, f64::NAN, 0.0, 1.0).is_err());
    }
}
