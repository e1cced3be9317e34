pub mod classifier;
pub mod features;
pub mod library;
pub mod pipeline;
pub mod playlists;
pub mod run_log;
pub mod spotify;

#[cfg(test)]
pub mod testing;

pub use classifier::{Classifier, NoopRefiner};
pub use library::DEFAULT_FETCH_LIMIT;
pub use pipeline::run_pipeline;
pub use run_log::RunLogger;
pub use spotify::SpotifyClient;
