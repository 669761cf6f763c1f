//! Shot grammar classification, personality validation, and CSS resolution
//! (spec §4.6).

pub mod classify;
pub mod css;
pub mod validate;

pub use classify::{classify_shot_grammar, ShotGrammarConfidence};
pub use css::{resolve_shot_grammar_css, ShotGrammarCss};
pub use validate::validate_shot_grammar;
