use sprite_blit::window::{KeyCode, KeyboardState};
use crate::{components::*, constants::*, AsteroidGame};

impl AsteroidGame {
    /// Moves the ship by the held direction keys and fires on Space. The projectile moves
    /// along with the ship. Hitting a window edge snaps it back onto the launch point
    /// without ending its flight.
    pub fn update_player_controls(&mut self, keyboard: &KeyboardState) {
        let held = |keys: [KeyCode; 2]| keys.iter().any(|&key| keyboard.is_key_pressed(key));

        let mut shift = (0.0, 0.0);
        if held([KeyCode::Right, KeyCode::D]) {
            shift.0 += SHIP_HORIZONTAL_SPEED;
        }
        if held([KeyCode::Left, KeyCode::A]) {
            shift.0 -= SHIP_HORIZONTAL_SPEED;
        }
        if held([KeyCode::Down, KeyCode::S]) {
            shift.1 += SHIP_DOWN_SPEED;
        }
        if held([KeyCode::Up, KeyCode::W]) {
            shift.1 -= SHIP_UP_SPEED;
        }

        let mut clamped = false;
        if let Some(ship_entity) = self.ship_entity {
            if let Ok((_, position)) = self.ecs_world.query_one_mut::<(&Ship, &mut Position)>(ship_entity) {
                let moved = Position { x: position.x + shift.0, y: position.y + shift.1 };
                position.x = moved.x.clamp(0.0, WINDOW_WIDTH - SHIP_WIDTH);
                position.y = moved.y.clamp(0.0, WINDOW_HEIGHT - SHIP_HEIGHT);
                clamped = *position != moved;
            }
        }

        // the projectile is dragged along by the ship, in flight too
        if let Some(projectile_entity) = self.projectile_entity {
            let ship_position = self.ship_position();
            if let Ok(position) = self.ecs_world.query_one_mut::<&mut Position>(projectile_entity) {
                match ship_position {
                    Some(ship_position) if clamped => *position = launch_position(&ship_position),
                    _ => {
                        position.x += shift.0;
                        position.y += shift.1;
                    }
                }
            }
        }

        if keyboard.is_key_pressed(KeyCode::Space) {
            let ship_position = self.ship_position();
            if let (Some(projectile_entity), Some(ship_position)) = (self.projectile_entity, ship_position) {
                if let Ok((projectile, position)) = self.ecs_world
                    .query_one_mut::<(&mut Projectile, &mut Position)>(projectile_entity) {
                    if !projectile.in_flight {
                        projectile.in_flight = true;
                        *position = launch_position(&ship_position);
                    }
                }
            }
        }
    }

    /// Flies an in-flight projectile upwards, parks it back on the ship once it leaves the
    /// top of the screen. An idle projectile stays on the ship.
    pub fn update_projectile(&mut self) {
        let Some(ship_position) = self.ship_position() else { return };
        let Some(projectile_entity) = self.projectile_entity else { return };
        if let Ok((projectile, position)) = self.ecs_world
            .query_one_mut::<(&mut Projectile, &mut Position)>(projectile_entity) {
            if projectile.in_flight {
                position.y -= PROJECTILE_SPEED;
                if position.y <= 0.0 {
                    projectile.in_flight = false;
                }
            }
            if !projectile.in_flight {
                *position = launch_position(&ship_position);
            }
        }
    }

    pub fn reset_projectile(&mut self) {
        let Some(ship_position) = self.ship_position() else { return };
        let Some(projectile_entity) = self.projectile_entity else { return };
        if let Ok((projectile, position)) = self.ecs_world
            .query_one_mut::<(&mut Projectile, &mut Position)>(projectile_entity) {
            projectile.in_flight = false;
            *position = launch_position(&ship_position);
        }
    }

    pub fn ship_position(&self) -> Option<Position> {
        let ship_entity = self.ship_entity?;
        self.ecs_world.get::<Position>(ship_entity).ok().map(|position| *position)
    }
}
