pub struct Rect {
    pub x_range: std::ops::Range<usize>,
    pub y_range: std::ops::Range<usize>
}
impl Rect {
    pub fn get_width(&self) -> usize {
        self.x_range.end - self.x_range.start
    }
    pub fn get_height(&self) -> usize {
        self.y_range.end - self.y_range.start
    }
}

pub trait SizedSurface {
    fn get_width(&self) -> usize;
    fn get_height(&self) -> usize;
}

pub trait BufferProvider<T> {
    fn get_buffer(&self) -> &[T];
}

pub trait BufferProviderMut<T> {
    fn get_buffer_mut(&mut self) -> &mut [T];
}

pub trait Blittable<T: Copy> : SizedSurface + BufferProvider<T> {
    #[inline(always)]
    fn blend_function(&self, dst: &mut T, src: &T) {
        *dst = *src;
    }

    fn blit_impl(&self, buffer: &mut [T], buffer_width: usize, self_rect: Rect, dst_rect: Rect) {
        let src_buffer = self.get_buffer();
        let src_width = self.get_width();
        let width = self_rect.get_width().min(dst_rect.get_width());
        let height = self_rect.get_height().min(dst_rect.get_height());

        for row in 0..height {
            let src_start = (self_rect.y_range.start + row) * src_width + self_rect.x_range.start;
            let dst_start = (dst_rect.y_range.start + row) * buffer_width + dst_rect.x_range.start;
            let src_row = &src_buffer[src_start..src_start + width];
            let dst_row = &mut buffer[dst_start..dst_start + width];
            for (dst, src) in dst_row.iter_mut().zip(src_row.iter()) {
                self.blend_function(dst, src);
            }
        }
    }
}

/// Clips a `width` x `height` source placed at (`dst_x`, `dst_y`) against the destination.
/// Returns the visible source and destination rectangles, or `None` when nothing is visible.
fn clip_rects(
    width: usize, height: usize,
    dst_x: i32, dst_y: i32,
    buffer_width: usize, buffer_height: usize
) -> Option<(Rect, Rect)> {
    let x0 = dst_x.max(0);
    let y0 = dst_y.max(0);
    let x1 = (dst_x + width as i32).min(buffer_width as i32);
    let y1 = (dst_y + height as i32).min(buffer_height as i32);
    if x1 <= x0 || y1 <= y0 {
        return None;
    }

    let src_rect = Rect {
        x_range: (x0 - dst_x) as usize..(x1 - dst_x) as usize,
        y_range: (y0 - dst_y) as usize..(y1 - dst_y) as usize
    };
    let dst_rect = Rect {
        x_range: x0 as usize..x1 as usize,
        y_range: y0 as usize..y1 as usize
    };
    Some((src_rect, dst_rect))
}

pub struct BlitBuilder<'a, T: Copy, TBlittable: Blittable<T>> {
    drawable: &'a TBlittable,
    buffer: &'a mut [T],
    buffer_width: usize,
    dst_x: i32,
    dst_y: i32
}
impl<'a, T: Copy, TBlittable: Blittable<T>> BlitBuilder<'a, T, TBlittable> {
    pub fn create(
        dest: &'a mut (impl BufferProviderMut<T> + SizedSurface),
        drawable: &'a TBlittable
    ) -> Self {
        let buffer_width = dest.get_width();
        Self {
            drawable,
            buffer: dest.get_buffer_mut(),
            buffer_width,
            dst_x: 0,
            dst_y: 0
        }
    }
    pub fn with_dest_pos(self, dst_x: i32, dst_y: i32) -> Self {
        Self {
            dst_x,
            dst_y,
            ..self
        }
    }
    pub fn blit(&mut self) {
        let buffer_height = self.buffer.len() / self.buffer_width;
        let clipped = clip_rects(
            self.drawable.get_width(),
            self.drawable.get_height(),
            self.dst_x,
            self.dst_y,
            self.buffer_width,
            buffer_height
        );
        if let Some((src_rect, dst_rect)) = clipped {
            self.drawable.blit_impl(self.buffer, self.buffer_width, src_rect, dst_rect);
        }
    }
}
