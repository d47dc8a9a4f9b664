use serde::Deserialize;
use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;
use std::str::FromStr;

/// Image used for shows the API has no picture for.
pub const MISSING_IMAGE_URL: &str = "https://tinyurl.com/tv-missing";

/// Opaque show identifier as handed out by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ShowId(pub u64);

impl Display for ShowId {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for ShowId {
	type Err = ParseIntError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		s.trim().parse().map(ShowId)
	}
}

/// One entry of `GET /search/shows`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
	pub show: RawShow,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawShow {
	pub id: ShowId,
	pub name: String,
	pub summary: Option<String>,
	pub image: Option<RawImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawImage {
	pub original: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
	pub id: ShowId,
	pub name: String,
	/// May contain markup.
	pub summary: Option<String>,
	pub image: String,
}

impl RawShow {
	pub fn into_show(self, missing_image_url: &str) -> Show {
		let image = match self.image {
			Some(image) => image.original,
			None => missing_image_url.to_owned(),
		};
		Show {
			id: self.id,
			name: self.name,
			summary: self.summary,
			image,
		}
	}
}

/// Normalizes a search response, keeping the API's order.
pub fn shows_from_results(results: Vec<SearchResult>, missing_image_url: &str) -> Vec<Show> {
	results
		.into_iter()
		.map(|result| result.show.into_show(missing_image_url))
		.collect()
}
