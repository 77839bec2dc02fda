use rand::Rng;
use sprite_blit::utility::StopWatch;
use crate::{
    components::*,
    constants::*,
    AsteroidGame
};

impl AsteroidGame {
    pub fn spawn_ship(&mut self) {
        let position = Position { x: SHIP_START_X, y: SHIP_START_Y };
        let ship_entity = self.ecs_world.spawn((Ship, position));
        self.ship_entity = Some(ship_entity);

        let projectile_entity = self.ecs_world.spawn((
            Projectile { in_flight: false },
            launch_position(&position)
        ));
        self.projectile_entity = Some(projectile_entity);
    }

    pub fn spawn_asteroid(&mut self, class: AsteroidClass, position: Position) {
        let velocity = random_diagonal_velocity(&mut self.rng);
        let rotation = Rotation { angle: self.rng.gen_range(0..MAX_ANGLE) };
        self.ecs_world.spawn((Asteroid { class }, position, velocity, rotation));
    }

    /// Populates the field with `count` large asteroids in the upper half of the screen.
    pub fn generate_field(&mut self, count: usize) {
        let _stop_watch = StopWatch::named("field generation");
        let (width, height) = AsteroidClass::Large.size();
        let max_x = (WINDOW_WIDTH - width) as i32;
        let max_y = ((WINDOW_HEIGHT - height) / 2.0) as i32;
        for _ in 0..count {
            let position = Position {
                x: self.rng.gen_range(0..max_x) as f32,
                y: self.rng.gen_range(0..max_y) as f32
            };
            self.spawn_asteroid(AsteroidClass::Large, position);
        }
        self.diagnostics.generated += count as u64;
        log::info!("{} asteroids generated", count);
    }

    /// Splits a destroyed large asteroid into small ones near `position`, as long as the
    /// small population stays within capacity. Returns how many were spawned.
    pub fn split_asteroid(&mut self, position: Position) -> usize {
        let capacity_left = self.config.small_asteroid_capacity
            .saturating_sub(self.count_asteroids(AsteroidClass::Small));
        let count = SMALL_ASTEROIDS_PER_SPLIT.min(capacity_left);
        for _ in 0..count {
            let jittered = Position {
                x: position.x + self.rng.gen::<f32>() * SPLIT_JITTER,
                y: position.y + self.rng.gen::<f32>() * SPLIT_JITTER
            };
            self.spawn_asteroid(AsteroidClass::Small, jittered);
        }
        self.diagnostics.generated += count as u64;
        if count < SMALL_ASTEROIDS_PER_SPLIT {
            log::debug!("small asteroid capacity reached, {} spawned", count);
        }
        count
    }
}

fn random_diagonal_velocity(rng: &mut impl Rng) -> Velocity {
    let mut unit = || if rng.gen::<bool>() { 1.0 } else { -1.0 };
    Velocity { x: unit(), y: unit() }
}
