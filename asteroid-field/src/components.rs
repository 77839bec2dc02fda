use sprite_blit::math_utils::Aabb;
use crate::constants::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Velocity {
    pub x: f32,
    pub y: f32
}

/// Rotation phase in `0..MAX_ANGLE` steps.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rotation {
    pub angle: u16
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AsteroidClass {
    Large,
    Small
}

impl AsteroidClass {
    pub fn size(self) -> (f32, f32) {
        match self {
            AsteroidClass::Large => (LARGE_ASTEROID_WIDTH, LARGE_ASTEROID_HEIGHT),
            AsteroidClass::Small => (SMALL_ASTEROID_WIDTH, SMALL_ASTEROID_HEIGHT)
        }
    }

    pub fn bounds(self, position: &Position) -> Aabb {
        let (width, height) = self.size();
        Aabb::new(position.x, position.y, width, height)
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Asteroid {
    pub class: AsteroidClass
}

#[derive(Copy, Clone, Debug)]
pub struct Ship;

#[derive(Copy, Clone, Debug)]
pub struct Projectile {
    pub in_flight: bool
}

pub fn ship_bounds(position: &Position) -> Aabb {
    Aabb::new(position.x, position.y, SHIP_WIDTH, SHIP_HEIGHT)
}

pub fn projectile_bounds(position: &Position) -> Aabb {
    Aabb::new(position.x, position.y, PROJECTILE_WIDTH as f32, PROJECTILE_HEIGHT as f32)
}

pub fn launch_position(ship_position: &Position) -> Position {
    Position {
        x: ship_position.x + LAUNCH_OFFSET_X,
        y: ship_position.y + LAUNCH_OFFSET_Y
    }
}
