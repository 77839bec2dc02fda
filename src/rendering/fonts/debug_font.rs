use std::collections::HashMap;
use maplit::hashmap;
use crate::rendering::blittable::{BufferProviderMut, SizedSurface};

pub const GLYPH_WIDTH: usize = 5;
pub const GLYPH_HEIGHT: usize = 7;

/// One row per byte, the leftmost pixel of a row lives in bit 4.
type GlyphRows = [u8; GLYPH_HEIGHT];

const UNKNOWN_GLYPH: GlyphRows = [0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111];

/// A tiny built-in bitmap font for diagnostics overlays. Letters are upper case only,
/// lower case input is drawn with upper case glyphs.
pub struct DebugFont {
    scale: usize,
    glyphs: HashMap<char, GlyphRows>
}

impl DebugFont {
    pub fn new(scale: usize) -> Self {
        Self {
            scale: scale.max(1),
            glyphs: default_glyphs()
        }
    }

    pub fn glyph_advance(&self) -> usize {
        (GLYPH_WIDTH + 1) * self.scale
    }

    pub fn line_height(&self) -> usize {
        (GLYPH_HEIGHT + 2) * self.scale
    }

    pub fn draw_text<T: Copy>(
        &self,
        destination: &mut (impl BufferProviderMut<T> + SizedSurface),
        x: i32, y: i32,
        text: &str,
        color: T
    ) {
        let (width, height) = (destination.get_width() as i32, destination.get_height() as i32);
        let buffer = destination.get_buffer_mut();
        let scale = self.scale as i32;

        let mut current_x = x;
        let mut current_y = y;
        for chr in text.chars() {
            match chr {
                '\n' => {
                    current_x = x;
                    current_y += self.line_height() as i32;
                    continue;
                }
                ' ' => {
                    current_x += self.glyph_advance() as i32;
                    continue;
                }
                _ => {}
            }

            let rows = self.glyphs
                .get(&chr.to_ascii_uppercase())
                .unwrap_or(&UNKNOWN_GLYPH);

            for (row_idx, row) in rows.iter().enumerate() {
                for column in 0..GLYPH_WIDTH {
                    if row & (0b10000u8 >> column) == 0 {
                        continue;
                    }
                    let px = current_x + column as i32 * scale;
                    let py = current_y + row_idx as i32 * scale;
                    for sy in py..py + scale {
                        for sx in px..px + scale {
                            if (0..width).contains(&sx) && (0..height).contains(&sy) {
                                buffer[(sy * width + sx) as usize] = color;
                            }
                        }
                    }
                }
            }
            current_x += self.glyph_advance() as i32;
        }
    }
}

impl Default for DebugFont {
    fn default() -> Self {
        Self::new(1)
    }
}

fn default_glyphs() -> HashMap<char, GlyphRows> {
    hashmap! {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '?' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100],
        '/' => [0b00000, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000],
        '%' => [0b11000, 0b11001, 0b00010, 0b00100, 0b01000, 0b10011, 0b00011],
        '\'' => [0b01100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000]
    }
}
