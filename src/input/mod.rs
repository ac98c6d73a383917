//! Stable, host independent input vocabulary.

mod input_enums;
pub use input_enums::*;

mod translate;
pub use translate::*;
