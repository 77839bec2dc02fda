use glam::{Mat3A, vec2, vec3a};

/// Placement of a sprite: rotated by `rotation` radians around `pivot` (in sprite-local
/// pixels), then moved so that the sprite's top left corner lands on `translation`.
#[derive(Copy, Clone)]
pub struct Transform {
    translation: (f32, f32),
    rotation: f32,
    pivot: (f32, f32),
    pub(crate) matrix: Mat3A
}

impl Transform {
    pub fn from_identity() -> Transform {
        Self::from_translation(0.0, 0.0)
    }

    pub fn from_translation(x: f32, y: f32) -> Self {
        Self {
            translation: (x, y),
            rotation: 0.0,
            pivot: (0.0, 0.0),
            matrix: Mat3A::from_translation(vec2(x, y))
        }
    }

    pub fn with_rotation(self, rotation: f32) -> Self {
        let mut result = Self { rotation, ..self };
        result.actualize_matrix();
        result
    }

    pub fn with_pivot(self, pivot: (f32, f32)) -> Self {
        let mut result = Self { pivot, ..self };
        result.actualize_matrix();
        result
    }

    fn actualize_matrix(&mut self) {
        let (tx, ty) = self.translation;
        let (px, py) = self.pivot;
        self.matrix =
            Mat3A::from_translation(vec2(tx + px, ty + py)) *
                Mat3A::from_angle(self.rotation) *
                Mat3A::from_translation(vec2(-px, -py));
    }

    pub fn transform_point(&self, (x, y): (f32, f32)) -> (f32, f32) {
        apply(&self.matrix, (x, y))
    }

    /// Matrix mapping destination pixels back into sprite-local coordinates.
    pub(crate) fn inverse_matrix(&self) -> Mat3A {
        self.matrix.inverse()
    }
}

#[inline(always)]
pub(crate) fn apply(matrix: &Mat3A, (x, y): (f32, f32)) -> (f32, f32) {
    let transformed = *matrix * vec3a(x, y, 1.0);
    (transformed.x, transformed.y)
}
