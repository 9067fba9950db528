mod board;
mod builder;
mod loader;
mod reveal;
mod sampler;
mod types;

pub use board::{Board, BoardError, Coord};
pub use builder::{BoardBuildError, BoardBuilder};
pub use loader::{CategoryLoadError, CategoryLoadFailure, load_category};
pub use reveal::RevealState;
pub use sampler::{SampleError, sample, sample_clues};
pub use types::{Category, CategoryDetail, CategoryId, CategorySummary, Clue, RawClue};
