//! tsfill
//!
//! Fills missing translations in Qt Linguist `.ts` catalogs. Unfinished
//! translation units are resolved against a pre-authored phrase catalog;
//! a derived locale (e.g. `zh_TW`) is filled by transliterating the finished
//! texts of its fallback locale (e.g. `zh_CN`). Finished units are never
//! touched, and untouched units round-trip byte-identically.

pub mod catalog;
pub mod config;
pub mod driver;
pub mod resolve;
pub mod translit;
pub mod ts;
pub mod update;
