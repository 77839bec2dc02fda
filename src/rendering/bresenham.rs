use crate::rendering::blittable::{BufferProviderMut, SizedSurface};

fn plot_bresenham_line(
    (x0, y0): (i32, i32),
    (x1, y1): (i32, i32),
    mut plot_func: impl FnMut(i32, i32)
) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let step_x = if x0 < x1 { 1 } else { -1 };
    let step_y = if y0 < y1 { 1 } else { -1 };

    let (mut x, mut y) = (x0, y0);
    let mut error = dx + dy;
    loop {
        plot_func(x, y);
        if x == x1 && y == y1 {
            break;
        }
        let doubled_error = error * 2;
        if doubled_error >= dy {
            error += dy;
            x += step_x;
        }
        if doubled_error <= dx {
            error += dx;
            y += step_y;
        }
    }
}

pub struct LineRasterizer<'a, T: Copy> {
    buffer: &'a mut [T],
    buffer_width: usize,
    from: (i32, i32),
    to: (i32, i32)
}

impl<'a, T: Copy> LineRasterizer<'a, T> {
    pub fn create(buffer_provider: &'a mut (impl BufferProviderMut<T> + SizedSurface)) -> Self {
        let buffer_width = buffer_provider.get_width();
        let buffer = buffer_provider.get_buffer_mut();
        Self {
            buffer,
            buffer_width,
            from: (0, 0),
            to: (0, 0)
        }
    }

    pub fn from(self, from: (i32, i32)) -> Self {
        Self { from, ..self }
    }

    pub fn to(self, to: (i32, i32)) -> Self {
        Self { to, ..self }
    }

    pub fn rasterize(self, color: T) {
        let buffer_width = self.buffer_width as i32;
        let buffer_height = (self.buffer.len() / self.buffer_width) as i32;
        let buffer = self.buffer;
        plot_bresenham_line(self.from, self.to, |x, y| {
            if (0..buffer_width).contains(&x) && (0..buffer_height).contains(&y) {
                buffer[(y * buffer_width + x) as usize] = color;
            }
        });
    }
}
