//! Run configuration: target locales and the derived-locale fallback pair.

mod loader;
mod types;

pub use loader::load_settings;
pub use types::{
    ConfigError,
    DerivedLocale,
    FillSettings,
    ValidationError,
};
