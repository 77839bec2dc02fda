use sprite_blit::window::KeyboardState;
use crate::{
    components::AsteroidClass,
    game_mode::{GameMode, Level, Transition},
    AsteroidGame,
    FieldDiagnostics
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit
}

impl AsteroidGame {
    /// Runs one logical tick: mode transitions from fresh key presses first, then whatever
    /// the resulting mode simulates.
    pub fn tick(&mut self, keyboard: &KeyboardState) -> TickOutcome {
        let transition = keyboard
            .just_pressed_keys()
            .find_map(|key_code| self.mode.handle_key(key_code));
        if let Some(transition) = transition {
            if let TickOutcome::Quit = self.apply_transition(transition) {
                return TickOutcome::Quit;
            }
        }

        if self.mode == GameMode::Playing {
            self.update_player_controls(keyboard);
            self.update_projectile();
            self.update_projectile_collisions();
            self.update_ship_collisions();
            self.step_field();
            self.check_round_end();
        }

        self.update_star_field();
        TickOutcome::Continue
    }

    pub fn apply_transition(&mut self, transition: Transition) -> TickOutcome {
        match transition {
            Transition::Quit => {
                log::info!("Thanks for playing!");
                return TickOutcome::Quit;
            }
            Transition::StartRound(level) => self.start_new_round(level),
            Transition::To(mode) => self.switch_mode(mode)
        }
        TickOutcome::Continue
    }

    pub fn start_new_round(&mut self, level: Level) {
        let asteroid_count = self.config.asteroids_for(level);
        log::info!("starting {:?} with {} asteroids", level, asteroid_count);

        self.ecs_world.clear();
        self.health = self.config.starting_health;
        self.diagnostics = FieldDiagnostics::default();
        self.spawn_ship();
        self.generate_field(asteroid_count);
        self.switch_mode(GameMode::Playing);
    }

    /// Health running out ends the round first, clearing the field is checked last so a
    /// tick satisfying both is a win.
    pub fn check_round_end(&mut self) {
        if self.health <= 0 {
            self.switch_mode(GameMode::Over);
        }
        if self.count_asteroids(AsteroidClass::Large) == 0 && self.count_asteroids(AsteroidClass::Small) == 0 {
            self.switch_mode(GameMode::Won);
        }
    }

    fn switch_mode(&mut self, mode: GameMode) {
        if self.mode != mode {
            log::info!("{:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }
}
