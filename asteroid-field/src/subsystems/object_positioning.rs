use crate::{
    components::*,
    constants::*,
    AsteroidGame
};

impl AsteroidGame {
    /// Moves every asteroid one step, bouncing it off the screen borders, and advances its
    /// rotation phase.
    pub fn step_field(&mut self) {
        let mut stepped = 0;
        for (_, (asteroid, position, velocity, rotation)) in self.ecs_world
            .query_mut::<(&Asteroid, &mut Position, &mut Velocity, &mut Rotation)>() {
            let (width, height) = asteroid.class.size();
            (position.x, velocity.x) = reflect(position.x + velocity.x, velocity.x, WINDOW_WIDTH - width);
            (position.y, velocity.y) = reflect(position.y + velocity.y, velocity.y, WINDOW_HEIGHT - height);
            rotation.angle = (rotation.angle + 1) % MAX_ANGLE;
            stepped += 1;
        }
        self.diagnostics.updated += stepped;
    }
}

/// Mirrors a coordinate which left `0..limit` back inside and flips the matching velocity.
pub fn reflect(coordinate: f32, velocity: f32, limit: f32) -> (f32, f32) {
    if coordinate < 0.0 {
        (-coordinate, -velocity)
    } else if coordinate >= limit {
        (2.0 * limit - coordinate, -velocity)
    } else {
        (coordinate, velocity)
    }
}
