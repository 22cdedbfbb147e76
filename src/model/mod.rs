//! Pure data structures shared by every layer of the picker.

pub mod emoji;
pub mod options;

pub use emoji::*;
pub use options::*;
