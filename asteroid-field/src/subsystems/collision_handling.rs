use crate::{
    components::*,
    AsteroidGame
};

impl AsteroidGame {
    /// Checks the projectile against large asteroids first, then small ones. A parked
    /// projectile collides as well, so ramming an asteroid with the ship destroys it.
    /// The first asteroid hit is destroyed, a large one splits. Returns where the destroyed
    /// asteroid was.
    pub fn update_projectile_collisions(&mut self) -> Option<Position> {
        let projectile_entity = self.projectile_entity?;
        let projectile_box = self.ecs_world
            .query_one_mut::<(&Projectile, &Position)>(projectile_entity)
            .map(|(_, position)| projectile_bounds(position))
            .ok()?;

        let hit = [AsteroidClass::Large, AsteroidClass::Small].into_iter().find_map(|class| {
            self.ecs_world
                .query::<(&Asteroid, &Position)>()
                .iter()
                .find(|(_, (asteroid, position))| {
                    asteroid.class == class && asteroid.class.bounds(position).intersects(&projectile_box)
                })
                .map(|(entity, (asteroid, &position))| (entity, asteroid.class, position))
        });

        let (asteroid_entity, class, position) = hit?;
        // the entity came out of the query above, it is alive
        let _ = self.ecs_world.despawn(asteroid_entity);
        self.reset_projectile();
        if class == AsteroidClass::Large {
            self.split_asteroid(position);
        }
        log::debug!("{:?} asteroid destroyed at ({}, {})", class, position.x, position.y);
        Some(position)
    }

    /// Takes damage once for every asteroid overlapping the ship.
    pub fn update_ship_collisions(&mut self) {
        let Some(ship_position) = self.ship_position() else { return };
        let ship_box = ship_bounds(&ship_position);

        let overlapping = self.ecs_world
            .query::<(&Asteroid, &Position)>()
            .iter()
            .filter(|(_, (asteroid, position))| asteroid.class.bounds(position).intersects(&ship_box))
            .count();
        if overlapping > 0 {
            self.health -= self.config.collision_damage * overlapping as i32;
            log::trace!("ship hit by {} asteroids, health {}", overlapping, self.health);
        }
    }
}
