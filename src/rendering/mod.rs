pub mod blittable;
pub mod bresenham;
pub mod fonts;
pub mod rotated_rendering;
pub mod transform;

use bytemuck::{Pod, Zeroable};
use blittable::{Blittable, BufferProvider, BufferProviderMut, SizedSurface};

/// A single framebuffer pixel. Laid out so a pixel slice can be handed to the GPU as-is.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Source-over composition of `src` on top of `self`.
    #[inline(always)]
    pub fn blend(self, src: Rgba) -> Rgba {
        match src.a {
            0 => self,
            0xff => src,
            alpha => {
                let alpha = alpha as u16;
                let inv_alpha = 0xff - alpha;
                let mix = |s: u8, d: u8| ((s as u16 * alpha + d as u16 * inv_alpha + 127) / 255) as u8;
                Rgba {
                    r: mix(src.r, self.r),
                    g: mix(src.g, self.g),
                    b: mix(src.b, self.b),
                    a: (alpha + (self.a as u16 * inv_alpha + 127) / 255) as u8
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct BlittableSurface {
    width: u16,
    height: u16,
    buffer: Vec<Rgba>
}

impl BlittableSurface {
    pub fn filled(width: u16, height: u16, color: Rgba) -> Self {
        Self {
            width,
            height,
            buffer: vec![color; width as usize * height as usize]
        }
    }

    /// Wraps an already decoded pixel buffer. Returns `None` if the buffer length
    /// does not match the requested dimensions.
    pub fn from_pixels(width: u16, height: u16, buffer: Vec<Rgba>) -> Option<Self> {
        if buffer.len() != width as usize * height as usize {
            return None;
        }
        Some(Self { width, height, buffer })
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.get_width() || y >= self.get_height() {
            return None;
        }
        Some(self.buffer[y * self.get_width() + x])
    }
}

impl SizedSurface for BlittableSurface {
    fn get_width(&self) -> usize { self.width as _ }

    fn get_height(&self) -> usize { self.height as _ }
}

impl BufferProvider<Rgba> for BlittableSurface {
    fn get_buffer(&self) -> &[Rgba] {
        &self.buffer
    }
}

impl BufferProviderMut<Rgba> for BlittableSurface {
    fn get_buffer_mut(&mut self) -> &mut [Rgba] {
        &mut self.buffer
    }
}

impl Blittable<Rgba> for BlittableSurface {
    #[inline(always)]
    fn blend_function(&self, dst: &mut Rgba, src: &Rgba) {
        *dst = dst.blend(*src);
    }
}
