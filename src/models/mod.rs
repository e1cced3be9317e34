pub mod features;
pub mod run_log;
pub mod track;
pub mod vibe;

pub use features::TrackFeatures;
pub use run_log::{LogEntry, RunLog};
pub use track::{ArtistRef, SavedItem, SavedTrack};
pub use vibe::Vibe;
