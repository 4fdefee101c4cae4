//! Settings loading from the filesystem.
//!
//! Pure schema parsing lives in `domain::settings`.

mod load_settings;

pub use load_settings::load_settings;
