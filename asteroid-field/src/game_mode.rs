use sprite_blit::window::KeyCode;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameMode {
    Start,
    LevelSelect,
    Playing,
    Paused,
    Over,
    Won
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    One,
    Two,
    Three
}

impl Level {
    pub fn index(self) -> usize {
        match self {
            Level::One => 0,
            Level::Two => 1,
            Level::Three => 2
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    To(GameMode),
    StartRound(Level),
    Quit
}

impl GameMode {
    /// Maps a freshly pressed key to the transition it triggers in this mode, if any.
    pub fn handle_key(self, key_code: KeyCode) -> Option<Transition> {
        if key_code == KeyCode::Q {
            return Some(Transition::Quit);
        }
        match (self, key_code) {
            (GameMode::Start, KeyCode::Space) => Some(Transition::To(GameMode::LevelSelect)),
            (GameMode::LevelSelect, KeyCode::Key1) => Some(Transition::StartRound(Level::One)),
            (GameMode::LevelSelect, KeyCode::Key2) => Some(Transition::StartRound(Level::Two)),
            (GameMode::LevelSelect, KeyCode::Key3) => Some(Transition::StartRound(Level::Three)),
            (GameMode::Playing, KeyCode::P) => Some(Transition::To(GameMode::Paused)),
            (GameMode::Paused, KeyCode::R) => Some(Transition::To(GameMode::Playing)),
            (GameMode::Paused, KeyCode::M) => Some(Transition::To(GameMode::Start)),
            (GameMode::Over, KeyCode::R) => Some(Transition::To(GameMode::LevelSelect)),
            (GameMode::Won, KeyCode::P) => Some(Transition::To(GameMode::Start)),
            _ => None
        }
    }
}
