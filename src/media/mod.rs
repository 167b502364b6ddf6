pub mod classify;
pub mod extract;

pub use classify::{classify, MediaKind};
pub use extract::{AudioExtractor, FfmpegExtractor};
