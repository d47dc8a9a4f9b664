use crate::models::MISSING_IMAGE_URL;

pub const DEFAULT_BASE_URL: &str = "http://api.tvmaze.com";

/// Settings shared by the requester and the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	pub base_url: String,
	pub missing_image_url: String,
	pub user_agent: String,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			base_url: DEFAULT_BASE_URL.to_owned(),
			missing_image_url: MISSING_IMAGE_URL.to_owned(),
			user_agent: format!("tv-search/{}", env!("CARGO_PKG_VERSION")),
		}
	}
}

impl Config {
	pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
		let mut url = url.into();
		while url.ends_with('/') {
			url.pop();
		}
		self.base_url = url;
		self
	}

	pub fn with_missing_image_url(mut self, url: impl Into<String>) -> Self {
		self.missing_image_url = url.into();
		self
	}
}
