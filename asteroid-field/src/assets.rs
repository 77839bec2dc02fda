use std::path::Path;
use thiserror::Error;
use sprite_blit::format_loaders::png::{self, ImageLoadingError};
use sprite_blit::rendering::{BlittableSurface, Rgba};
use sprite_blit::utility::StopWatch;
use crate::constants::{PROJECTILE_HEIGHT, PROJECTILE_WIDTH};

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("failed to load asset {name}: {source}")]
    Image {
        name: &'static str,
        #[source]
        source: ImageLoadingError
    }
}

pub struct Sprites {
    pub ship: BlittableSurface,
    pub asteroid: BlittableSurface,
    pub mini_asteroid: BlittableSurface,
    pub projectile: BlittableSurface,
    pub logo: BlittableSurface,
    pub instructions: BlittableSurface,
    pub levels: BlittableSurface,
    pub game_over: BlittableSurface,
    pub paused: BlittableSurface,
    pub won: BlittableSurface,
    pub radar: BlittableSurface,
    pub health_panel: BlittableSurface
}

impl Sprites {
    /// Loads every image the game draws. The first missing or broken file aborts the load.
    pub fn load(assets_root: &Path) -> Result<Self, AssetError> {
        let _stop_watch = StopWatch::named("loading sprites");
        let load = |name: &'static str| {
            let path = assets_root.join(name);
            log::debug!("loading {}", path.display());
            png::load_from_path(&path).map_err(|source| AssetError::Image { name, source })
        };

        let sprites = Self {
            ship: load("GameAssets/ship.png")?,
            asteroid: load("GameAssets/asteroid.png")?,
            mini_asteroid: load("GameAssets/miniAsteroid.png")?,
            projectile: BlittableSurface::filled(PROJECTILE_WIDTH, PROJECTILE_HEIGHT, Rgba::WHITE),
            logo: load("GameScreens/gameLogo.png")?,
            instructions: load("GameScreens/gameInstructions.png")?,
            levels: load("GameScreens/gameLevels.png")?,
            game_over: load("GameScreens/gameOver.png")?,
            paused: load("GameScreens/gamePaused.png")?,
            won: load("GameScreens/gameWon.png")?,
            radar: load("GameScreens/gameConcurrencyRadar.png")?,
            health_panel: load("GameScreens/gamePlayerHealth.png")?
        };
        log::info!("sprites loaded from {}", assets_root.display());
        Ok(sprites)
    }

    /// Flat coloured stand-ins with the real sprite dimensions, for headless runs.
    #[cfg(test)]
    pub fn placeholders() -> Self {
        let flat = |w, h| BlittableSurface::filled(w, h, Rgba::opaque(0x80, 0x80, 0x80));
        Self {
            ship: flat(50, 80),
            asteroid: flat(100, 80),
            mini_asteroid: flat(50, 40),
            projectile: BlittableSurface::filled(PROJECTILE_WIDTH, PROJECTILE_HEIGHT, Rgba::WHITE),
            logo: flat(400, 120),
            instructions: flat(400, 200),
            levels: flat(400, 300),
            game_over: flat(300, 100),
            paused: flat(300, 100),
            won: flat(300, 100),
            radar: flat(420, 120),
            health_panel: flat(260, 40)
        }
    }
}
