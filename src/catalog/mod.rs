//! The phrase → locale → text lookup table used for direct resolution.

mod loader;
mod types;

pub use types::{
    CatalogError,
    TranslationCatalog,
};
