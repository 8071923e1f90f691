//! Pixel Masks
//!
//! A mask is a boolean opacity bitmap computed once from a sprite's alpha
//! channel. Pixel-perfect collision tests two masks for a shared opaque
//! pixel inside the overlap of their bounding boxes.

use image::RgbaImage;

/// Pixels with alpha strictly above this count as solid
pub const ALPHA_THRESHOLD: u8 = 127;

/// Row-major opacity bitmap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl Mask {
    /// Mask with every pixel clear
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width * height],
        }
    }

    /// Build from tightly packed RGBA8 bytes
    pub fn from_rgba(width: usize, height: usize, rgba: &[u8]) -> Self {
        let bits = rgba
            .chunks_exact(4)
            .take(width * height)
            .map(|px| px[3] > ALPHA_THRESHOLD)
            .collect::<Vec<_>>();
        debug_assert_eq!(bits.len(), width * height);
        Self { width, height, bits }
    }

    /// Mask of a decoded sprite image
    pub fn from_image(img: &RgbaImage) -> Self {
        Self::from_rgba(img.width() as usize, img.height() as usize, img.as_raw())
    }

    /// Is pixel (x, y) solid? Out-of-range coordinates are clear.
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return false;
        }
        self.bits[y as usize * self.width + x as usize]
    }

    /// Rotate counter-clockwise by `degrees` (as seen on screen, y down).
    ///
    /// The result is sized to the rotated bounding box and sampled with
    /// nearest-neighbour inverse mapping around the centers of both masks.
    pub fn rotated(&self, degrees: f32) -> Mask {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let w = self.width as f32;
        let h = self.height as f32;
        let out_w = (w * cos.abs() + h * sin.abs()).round().max(0.0) as usize;
        let out_h = (w * sin.abs() + h * cos.abs()).round().max(0.0) as usize;

        let mut out = Mask::empty(out_w, out_h);
        let src_cx = w * 0.5;
        let src_cy = h * 0.5;
        let dst_cx = out_w as f32 * 0.5;
        let dst_cy = out_h as f32 * 0.5;

        for y in 0..out_h {
            let dy = y as f32 + 0.5 - dst_cy;
            for x in 0..out_w {
                let dx = x as f32 + 0.5 - dst_cx;
                let sx = cos * dx - sin * dy + src_cx;
                let sy = sin * dx + cos * dy + src_cy;
                if self.get(sx.floor() as i32, sy.floor() as i32) {
                    out.bits[y * out_w + x] = true;
                }
            }
        }
        out
    }

    /// Does `other`, placed at `offset` relative to this mask's origin,
    /// share at least one solid pixel with this mask?
    pub fn overlaps(&self, other: &Mask, offset: (i32, i32)) -> bool {
        let (ox, oy) = offset;
        let x0 = ox.max(0);
        let y0 = oy.max(0);
        let x1 = (self.width as i32).min(ox + other.width as i32);
        let y1 = (self.height as i32).min(oy + other.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return false;
        }

        for y in y0..y1 {
            for x in x0..x1 {
                if self.get(x, y) && other.get(x - ox, y - oy) {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
impl Mask {
    /// Mask with every pixel set
    pub fn filled(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits: vec![true; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set(&mut self, x: usize, y: usize, solid: bool) {
        if x < self.width && y < self.height {
            self.bits[y * self.width + x] = solid;
        }
    }

    /// Number of solid pixels
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}
