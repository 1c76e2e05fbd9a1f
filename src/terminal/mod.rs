pub mod colors;
pub mod preview;

pub use colors::TermColor;
