use crate::rendering::blittable::{Blittable, BufferProviderMut, SizedSurface};
use crate::rendering::transform::{apply, Transform};

/// Draws a whole surface through an arbitrary [`Transform`], sampling the nearest source
/// pixel for every destination pixel covered by the transformed sprite.
pub struct RotatedBlitter<'a, T: Copy> {
    buffer: &'a mut [T],
    buffer_width: usize,
    buffer_height: usize,
    transform: Transform
}

impl<'a, T: Copy> RotatedBlitter<'a, T> {
    pub fn create(buffer_provider: &'a mut (impl BufferProviderMut<T> + SizedSurface)) -> Self {
        let buffer_width = buffer_provider.get_width();
        let buffer = buffer_provider.get_buffer_mut();
        let buffer_height = buffer.len() / buffer_width;
        Self {
            buffer,
            buffer_width,
            buffer_height,
            transform: Transform::from_identity()
        }
    }

    pub fn with_transform(self, transform: Transform) -> Self {
        Self {
            transform,
            ..self
        }
    }

    pub fn blit(self, drawable: &impl Blittable<T>) {
        let (src_width, src_height) = (drawable.get_width(), drawable.get_height());
        if src_width == 0 || src_height == 0 {
            return;
        }

        let corners = [
            (0.0, 0.0),
            (src_width as f32, 0.0),
            (0.0, src_height as f32),
            (src_width as f32, src_height as f32)
        ].map(|corner| self.transform.transform_point(corner));

        let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
        let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
        for (x, y) in corners {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        let x_start = (min_x.floor() as i32).max(0) as usize;
        let y_start = (min_y.floor() as i32).max(0) as usize;
        let x_end = (max_x.ceil() as i32).clamp(0, self.buffer_width as i32) as usize;
        let y_end = (max_y.ceil() as i32).clamp(0, self.buffer_height as i32) as usize;

        let inverse = self.transform.inverse_matrix();
        let src_buffer = drawable.get_buffer();

        for y in y_start..y_end {
            let row_offset = y * self.buffer_width;
            for x in x_start..x_end {
                let (src_x, src_y) = apply(&inverse, (x as f32 + 0.5, y as f32 + 0.5));
                if src_x < 0.0 || src_y < 0.0 {
                    continue;
                }
                let (src_x, src_y) = (src_x as usize, src_y as usize);
                if src_x >= src_width || src_y >= src_height {
                    continue;
                }
                drawable.blend_function(
                    &mut self.buffer[row_offset + x],
                    &src_buffer[src_y * src_width + src_x]
                );
            }
        }
    }
}
