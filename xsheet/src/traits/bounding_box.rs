use serde::*;

///
/// A rectangle in document coordinates, used to choose the region of a layer to export
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x:      i32,
    pub y:      i32,
    pub width:  u32,
    pub height: u32,
}

impl BoundingBox {
    ///
    /// Creates a new bounding box
    ///
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> BoundingBox {
        BoundingBox { x, y, width, height }
    }

    ///
    /// True if this box covers no pixels
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    ///
    /// The coordinates just past the right and bottom edges of this box
    ///
    #[inline]
    pub fn max(&self) -> (i64, i64) {
        (self.x as i64 + self.width as i64, self.y as i64 + self.height as i64)
    }

    ///
    /// Returns the smallest box that contains both this box and another one
    ///
    /// Empty boxes do not contribute to the result.
    ///
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        if self.is_empty() { return *other; }
        if other.is_empty() { return *self; }

        let (self_max_x, self_max_y)    = self.max();
        let (other_max_x, other_max_y)  = other.max();

        let x       = self.x.min(other.x);
        let y       = self.y.min(other.y);
        let max_x   = self_max_x.max(other_max_x);
        let max_y   = self_max_y.max(other_max_y);

        BoundingBox {
            x:      x,
            y:      y,
            width:  u32::try_from(max_x - x as i64).unwrap_or(u32::MAX),
            height: u32::try_from(max_y - y as i64).unwrap_or(u32::MAX),
        }
    }
}
