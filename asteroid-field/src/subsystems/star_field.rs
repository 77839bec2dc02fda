use rand::Rng;
use sprite_blit::rendering::bresenham::LineRasterizer;
use sprite_blit::rendering::Rgba;
use sprite_blit::window::BlitContext;
use crate::{constants::*, game_mode::GameMode, AsteroidGame};

/// A background streak flying away from a focus point. Coordinates are kept in
/// `STAR_FIXED_POINT` sub-pixel units.
#[derive(Copy, Clone, Debug)]
pub struct Star {
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub brightness: f32
}

impl Star {
    pub fn new(rng: &mut impl Rng) -> Self {
        let to = (
            rng.gen::<f32>() * WINDOW_WIDTH * STAR_FIXED_POINT,
            rng.gen::<f32>() * WINDOW_HEIGHT * STAR_FIXED_POINT
        );
        Self {
            from: to,
            to,
            brightness: rng.gen::<f32>() * 255.0
        }
    }

    /// `focus` is in sub-pixel units as well.
    pub fn update(&mut self, focus: (f32, f32), rng: &mut impl Rng) {
        self.from = self.to;
        self.to.0 += (self.to.0 - focus.0) / STAR_SPREAD_DIVISOR;
        self.to.1 += (self.to.1 - focus.1) / STAR_SPREAD_DIVISOR;
        self.brightness = (self.brightness + 1.0).min(255.0);

        let (x, y) = self.from;
        if x < 0.0 || x > WINDOW_WIDTH * STAR_FIXED_POINT || y < 0.0 || y > WINDOW_HEIGHT * STAR_FIXED_POINT {
            *self = Star::new(rng);
        }
    }

    pub fn color(&self) -> Rgba {
        let shade = |channel: u8| (channel as f32 * self.brightness / 255.0) as u8;
        let (r, g, b) = STAR_COLOR;
        Rgba::opaque(shade(r), shade(g), shade(b))
    }
}

impl AsteroidGame {
    /// The point stars fly away from, in pixels. Modes without one freeze the field.
    pub fn star_focus(&self) -> Option<(f32, f32)> {
        match self.mode {
            GameMode::Playing => self.ship_position().map(|position| (position.x, position.y)),
            GameMode::Start => Some((WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0)),
            GameMode::LevelSelect => Some((WINDOW_WIDTH, WINDOW_HEIGHT / 2.0)),
            GameMode::Paused | GameMode::Over | GameMode::Won => None
        }
    }

    pub fn update_star_field(&mut self) {
        if let Some((x, y)) = self.star_focus() {
            let focus = (x * STAR_FIXED_POINT, y * STAR_FIXED_POINT);
            for star in self.stars.iter_mut() {
                star.update(focus, &mut self.rng);
            }
        }
    }

    pub fn draw_star_field(&self, ctx: &mut BlitContext) {
        let to_pixels = |(x, y): (f32, f32)| ((x / STAR_FIXED_POINT) as i32, (y / STAR_FIXED_POINT) as i32);
        for star in self.stars.iter() {
            LineRasterizer::create(ctx)
                .from(to_pixels(star.from))
                .to(to_pixels(star.to))
                .rasterize(star.color());
        }
    }
}
