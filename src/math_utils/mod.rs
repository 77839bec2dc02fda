/// An axis aligned box in screen space, `(x, y)` being its top left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32
}

impl Aabb {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Overlap test with strict inequalities: boxes which only share an edge do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x < other.right() &&
            self.right() > other.x &&
            self.y < other.bottom() &&
            self.bottom() > other.y
    }
}
