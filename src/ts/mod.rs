//! Qt Linguist `.ts` catalog documents.

mod document;
mod types;

pub use document::TsDocument;
pub use types::{
    TranslationUnit,
    TsError,
    UnitState,
};
