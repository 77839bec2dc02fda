use std::path::PathBuf;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use sprite_blit::{
    rendering::fonts::debug_font::DebugFont,
    window::{BlitContext, ContextHandler, WindowMode}
};
use crate::assets::{AssetError, Sprites};
use crate::components::{Asteroid, AsteroidClass};
use crate::config::{ConfigError, GameConfig};
use crate::game_mode::GameMode;
use crate::subsystems::game_flow::TickOutcome;
use crate::subsystems::star_field::Star;

mod assets;
mod components;
mod config;
mod constants;
mod game_mode;
mod subsystems;
#[cfg(test)]
mod tests;

pub const QUIT_EXIT_CODE: i32 = 1;
pub const FATAL_EXIT_CODE: i32 = 2;

#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Asset(#[from] AssetError)
}

/// Running totals shown on the diagnostics panel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldDiagnostics {
    pub generated: u64,
    pub updated: u64
}

pub struct AsteroidGame {
    pub config: GameConfig,
    pub mode: GameMode,
    pub health: i32,
    pub ship_entity: Option<hecs::Entity>,
    pub projectile_entity: Option<hecs::Entity>,
    pub ecs_world: hecs::World,
    pub rng: ChaCha8Rng,
    pub stars: Vec<Star>,
    pub diagnostics: FieldDiagnostics,
    pub sprites: Sprites,
    pub font: DebugFont
}

impl ContextHandler for AsteroidGame {
    fn get_window_title(&self) -> &'static str { "asteroid field" }

    fn get_window_mode(&self) -> WindowMode { WindowMode::Svga }

    fn init(&mut self, _ctx: &mut BlitContext) {
        log::info!("starting in {:?} mode", self.mode);
    }

    fn update(&mut self, ctx: &mut BlitContext, _dt: f32) {
        if let TickOutcome::Quit = self.tick(ctx.keyboard()) {
            std::process::exit(QUIT_EXIT_CODE);
        }
    }

    fn draw(&mut self, ctx: &mut BlitContext) {
        self.render(ctx);
    }
}

impl AsteroidGame {
    pub fn new(config: GameConfig, sprites: Sprites) -> Self {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy()
        };
        let stars = (0..config.star_count).map(|_| Star::new(&mut rng)).collect();
        Self {
            health: config.starting_health,
            config,
            mode: GameMode::Start,
            ship_entity: None,
            projectile_entity: None,
            ecs_world: hecs::World::new(),
            rng,
            stars,
            diagnostics: FieldDiagnostics::default(),
            sprites,
            font: DebugFont::default()
        }
    }

    pub fn from_config_path(config_path: Option<PathBuf>) -> Result<Self, GameError> {
        let config = GameConfig::load(config_path.as_deref())?;
        let sprites = Sprites::load(&config.assets_root)?;
        Ok(Self::new(config, sprites))
    }

    pub fn count_asteroids(&self, class: AsteroidClass) -> usize {
        self.ecs_world
            .query::<&Asteroid>()
            .iter()
            .filter(|(_, asteroid)| asteroid.class == class)
            .count()
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match AsteroidGame::from_config_path(std::env::args_os().nth(1).map(PathBuf::from)) {
        Ok(game) => sprite_blit::window::start(game),
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(FATAL_EXIT_CODE);
        }
    }
}
