pub mod format_loaders;
pub mod math_utils;
pub mod rendering;
pub mod utility;
pub mod window;
