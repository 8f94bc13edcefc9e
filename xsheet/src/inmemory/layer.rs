use crate::traits::*;

use image::{Rgba, RgbaImage};

///
/// A drawing layer stored as an image
///
#[derive(Clone, Debug, PartialEq)]
pub struct InMemoryLayer {
    id:         LayerId,
    name:       String,
    surface:    RgbaImage,
}

impl InMemoryLayer {
    ///
    /// Creates a transparent layer
    ///
    pub fn new(id: LayerId, name: &str, width: u32, height: u32) -> InMemoryLayer {
        InMemoryLayer {
            id:         id,
            name:       name.to_string(),
            surface:    RgbaImage::new(width, height),
        }
    }

    #[inline] pub fn id(&self) -> LayerId { self.id }
    #[inline] pub fn name(&self) -> &str { &self.name }
    #[inline] pub fn surface(&self) -> &RgbaImage { &self.surface }

    ///
    /// Sets a single pixel (points outside the layer are ignored)
    ///
    pub fn paint(&mut self, x: u32, y: u32, colour: [u8; 4]) {
        if x < self.surface.width() && y < self.surface.height() {
            self.surface.put_pixel(x, y, Rgba(colour));
        }
    }

    ///
    /// The region of this layer that has been drawn on, or `None` if it's entirely transparent
    ///
    pub fn pixel_bounds(&self) -> Option<BoundingBox> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;

        for (x, y, pixel) in self.surface.enumerate_pixels() {
            if pixel.0[3] == 0 { continue; }

            bounds = Some(match bounds {
                None                                => (x, y, x, y),
                Some((min_x, min_y, max_x, max_y))  => (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            });
        }

        bounds.map(|(min_x, min_y, max_x, max_y)| BoundingBox::new(min_x as i32, min_y as i32, max_x-min_x+1, max_y-min_y+1))
    }

    ///
    /// Copies a region of this layer, optionally flattening it onto a white background
    ///
    /// Parts of the region outside the layer are transparent (or white when flattened).
    ///
    pub fn render_region(&self, bbox: BoundingBox, alpha: bool) -> RgbaImage {
        let mut region = RgbaImage::new(bbox.width, bbox.height);

        for (x, y, pixel) in region.enumerate_pixels_mut() {
            let source_x = bbox.x as i64 + x as i64;
            let source_y = bbox.y as i64 + y as i64;

            if source_x >= 0 && source_y >= 0 && source_x < self.surface.width() as i64 && source_y < self.surface.height() as i64 {
                *pixel = *self.surface.get_pixel(source_x as u32, source_y as u32);
            }

            if !alpha {
                *pixel = flatten_onto_white(*pixel);
            }
        }

        region
    }
}

///
/// Composites a pixel onto an opaque white background
///
fn flatten_onto_white(pixel: Rgba<u8>) -> Rgba<u8> {
    let Rgba([r, g, b, a]) = pixel;
    let a       = a as u32;
    let blend   = |c: u8| ((c as u32 * a + 255 * (255 - a)) / 255) as u8;

    Rgba([blend(r), blend(g), blend(b), 255])
}
