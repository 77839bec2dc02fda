use std::f32::consts::TAU;
use sprite_blit::rendering::blittable::{BlitBuilder, SizedSurface};
use sprite_blit::rendering::rotated_rendering::RotatedBlitter;
use sprite_blit::rendering::transform::Transform;
use sprite_blit::rendering::{BlittableSurface, Rgba};
use sprite_blit::window::BlitContext;
use crate::{
    components::*,
    constants::*,
    game_mode::GameMode,
    AsteroidGame
};

const TEXT_COLOR: Rgba = Rgba::WHITE;

impl AsteroidGame {
    pub fn render(&self, ctx: &mut BlitContext) {
        ctx.clear(Rgba::BLACK);
        self.draw_star_field(ctx);

        match self.mode {
            GameMode::Start => {
                let logo = &self.sprites.logo;
                let instructions = &self.sprites.instructions;
                blit_at(ctx, logo, centered_x(logo), WINDOW_HEIGHT as i32 / 2 - logo.get_height() as i32);
                blit_at(
                    ctx,
                    instructions,
                    centered_x(instructions),
                    WINDOW_HEIGHT as i32 / 2 - instructions.get_height() as i32 / 8
                );
            }
            GameMode::LevelSelect => blit_centered(ctx, &self.sprites.levels),
            GameMode::Playing => self.render_round(ctx),
            GameMode::Paused => blit_centered(ctx, &self.sprites.paused),
            GameMode::Over => blit_centered(ctx, &self.sprites.game_over),
            GameMode::Won => blit_centered(ctx, &self.sprites.won)
        }
    }

    fn render_round(&self, ctx: &mut BlitContext) {
        { // diagnostics panel
            let (x, y) = RADAR_POS;
            blit_at(ctx, &self.sprites.radar, x, y);
            let (x, y) = HEALTH_PANEL_POS;
            blit_at(ctx, &self.sprites.health_panel, x, y);

            let (x, y) = HEALTH_TEXT_POS;
            self.font.draw_text(ctx, x, y, &self.health.to_string(), TEXT_COLOR);

            let lines = [
                format!("Asteroids: {}", self.count_asteroids(AsteroidClass::Large)),
                format!("Small asteroids: {}", self.count_asteroids(AsteroidClass::Small)),
                format!("Asteroids generated: {}", self.diagnostics.generated),
                format!("Asteroid updates: {}", self.diagnostics.updated)
            ];
            for (line, y) in lines.iter().zip(DIAGNOSTICS_TEXT_Y) {
                self.font.draw_text(ctx, DIAGNOSTICS_TEXT_X, y, line, TEXT_COLOR);
            }
        }

        { // draw ship
            for (_, (_, position)) in self.ecs_world.query::<(&Ship, &Position)>().iter() {
                blit_at(ctx, &self.sprites.ship, position.x as i32, position.y as i32);
            }
        }

        { // draw asteroids, large ones below small ones
            for class in [AsteroidClass::Large, AsteroidClass::Small] {
                let sprite = match class {
                    AsteroidClass::Large => &self.sprites.asteroid,
                    AsteroidClass::Small => &self.sprites.mini_asteroid
                };
                let pivot = (sprite.get_width() as f32 / 2.0, sprite.get_height() as f32 / 2.0);
                for (_, (_, position, rotation)) in self.ecs_world
                    .query::<(&Asteroid, &Position, &Rotation)>()
                    .iter()
                    .filter(|(_, (asteroid, _, _))| asteroid.class == class) {
                    RotatedBlitter::create(ctx)
                        .with_transform(
                            Transform::from_translation(position.x, position.y)
                                .with_pivot(pivot)
                                .with_rotation(TAU * rotation.angle as f32 / MAX_ANGLE as f32)
                        )
                        .blit(sprite);
                }
            }
        }

        { // draw projectile
            for (_, (_, position)) in self.ecs_world.query::<(&Projectile, &Position)>().iter() {
                blit_at(ctx, &self.sprites.projectile, position.x as i32, position.y as i32);
            }
        }
    }
}

fn blit_at(ctx: &mut BlitContext, sprite: &BlittableSurface, x: i32, y: i32) {
    BlitBuilder::create(ctx, sprite).with_dest_pos(x, y).blit();
}

fn centered_x(sprite: &BlittableSurface) -> i32 {
    WINDOW_WIDTH as i32 / 2 - sprite.get_width() as i32 / 2
}

fn blit_centered(ctx: &mut BlitContext, sprite: &BlittableSurface) {
    let y = WINDOW_HEIGHT as i32 / 2 - sprite.get_height() as i32 / 2;
    blit_at(ctx, sprite, centered_x(sprite), y);
}
