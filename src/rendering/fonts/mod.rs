pub mod debug_font;
