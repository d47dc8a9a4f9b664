mod episode;
mod show;

pub use episode::{episodes_from_raw, Episode, RawEpisode};
pub use show::{shows_from_results, RawImage, RawShow, SearchResult, Show, ShowId, MISSING_IMAGE_URL};
