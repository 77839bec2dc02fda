pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;

pub const SHIP_WIDTH: f32 = 50.0;
pub const SHIP_HEIGHT: f32 = 80.0;
pub const SHIP_START_X: f32 = WINDOW_WIDTH / 2.0 - SHIP_WIDTH / 2.0;
pub const SHIP_START_Y: f32 = WINDOW_HEIGHT - 2.0 * SHIP_HEIGHT;
pub const SHIP_HORIZONTAL_SPEED: f32 = 10.0;
pub const SHIP_DOWN_SPEED: f32 = 10.0;
pub const SHIP_UP_SPEED: f32 = 4.0;

pub const PROJECTILE_WIDTH: u16 = 2;
pub const PROJECTILE_HEIGHT: u16 = 10;
pub const PROJECTILE_SPEED: f32 = 15.0;
// projectile launches from the middle of the ship
pub const LAUNCH_OFFSET_X: f32 = SHIP_WIDTH / 2.0 - 1.5;
pub const LAUNCH_OFFSET_Y: f32 = SHIP_HEIGHT / 2.0;

pub const LARGE_ASTEROID_WIDTH: f32 = 100.0;
pub const LARGE_ASTEROID_HEIGHT: f32 = 80.0;
pub const SMALL_ASTEROID_WIDTH: f32 = 50.0;
pub const SMALL_ASTEROID_HEIGHT: f32 = 40.0;

/// Number of rotation steps in a full turn.
pub const MAX_ANGLE: u16 = 256;
pub const SMALL_ASTEROIDS_PER_SPLIT: usize = 2;
pub const SPLIT_JITTER: f32 = 100.0;

pub const STAR_FIXED_POINT: f32 = 64.0;
pub const STAR_SPREAD_DIVISOR: f32 = 32.0;
pub const STAR_COLOR: (u8, u8, u8) = (0xbb, 0xdd, 0xff);

pub const HEALTH_TEXT_POS: (i32, i32) = (210, 572);
pub const DIAGNOSTICS_TEXT_X: i32 = 30;
pub const DIAGNOSTICS_TEXT_Y: [i32; 4] = [50, 70, 90, 110];
pub const RADAR_POS: (i32, i32) = (0, 10);
pub const HEALTH_PANEL_POS: (i32, i32) = (0, 560);
