use std::collections::HashSet;

macro_rules! key_codes {
    ($($key: ident),* $(,)?) => {
        #[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
        pub enum KeyCode {
            $($key),*
        }

        impl TryFrom<orom_miniquad::KeyCode> for KeyCode {
            type Error = ();

            fn try_from(value: orom_miniquad::KeyCode) -> Result<Self, Self::Error> {
                match value {
                    $(orom_miniquad::KeyCode::$key => Ok(KeyCode::$key),)*
                    _ => Err(())
                }
            }
        }
    };
}

key_codes! {
    Space, Apostrophe, Comma, Minus, Period, Slash,
    Key0, Key1, Key2, Key3, Key4, Key5, Key6, Key7, Key8, Key9,
    Semicolon, Equal,
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    LeftBracket, Backslash, RightBracket, GraveAccent, World1, World2,
    Escape, Enter, Tab, Backspace, Insert, Delete,
    Right, Left, Down, Up,
    PageUp, PageDown, Home, End,
    CapsLock, ScrollLock, NumLock, PrintScreen, Pause,
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, F13,
    F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24, F25,
    Kp0, Kp1, Kp2, Kp3, Kp4, Kp5, Kp6, Kp7, Kp8, Kp9,
    KpDecimal, KpDivide, KpMultiply, KpSubtract, KpAdd, KpEnter, KpEqual,
    LeftShift, LeftControl, LeftAlt, LeftSuper,
    RightShift, RightControl, RightAlt, RightSuper,
    Menu
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyMods {
    pub shift: bool,
    pub control: bool,
    pub option: bool,
    pub command: bool,
}

impl From<orom_miniquad::KeyMods> for KeyMods {
    fn from(mods: orom_miniquad::KeyMods) -> Self {
        Self {
            shift: mods.shift,
            control: mods.ctrl,
            option: mods.alt,
            command: mods.logo
        }
    }
}

/// Keyboard state as seen by a single logical tick.
///
/// Held keys are level triggered. Presses are edge triggered: a key shows up in
/// [`KeyboardState::just_pressed_keys`] once per physical press, auto repeat is ignored,
/// and the edge is kept until [`KeyboardState::end_tick`] consumes it.
#[derive(Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
    just_pressed: Vec<KeyCode>
}

impl KeyboardState {
    pub fn press(&mut self, key_code: KeyCode, repeat: bool) {
        self.held.insert(key_code);
        if !repeat && !self.just_pressed.contains(&key_code) {
            self.just_pressed.push(key_code);
        }
    }

    pub fn release(&mut self, key_code: KeyCode) {
        self.held.remove(&key_code);
    }

    pub fn is_key_pressed(&self, key_code: KeyCode) -> bool {
        self.held.contains(&key_code)
    }

    pub fn is_key_just_pressed(&self, key_code: KeyCode) -> bool {
        self.just_pressed.contains(&key_code)
    }

    /// Keys pressed since the previous tick, in the order they went down.
    pub fn just_pressed_keys(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.just_pressed.iter().copied()
    }

    pub fn end_tick(&mut self) {
        self.just_pressed.clear();
    }
}
