use crate::config::Config;
use crate::error::{GenericError, Result};
use crate::models::{episodes_from_raw, shows_from_results, Episode, RawEpisode, SearchResult, Show, ShowId};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// The network seam. Everything the requester fetches goes through `get`.
#[async_trait]
pub trait Transport: Send + Sync {
	/// GET `url` with the given query parameters and return the body.
	async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String>;
}

pub struct HttpTransport {
	net: Client,
}

impl HttpTransport {
	pub fn new(config: &Config) -> Result<Self> {
		let net = Client::builder().user_agent(&config.user_agent).build()?;
		Ok(HttpTransport { net })
	}

	pub fn with_client(net: Client) -> Self {
		HttpTransport { net }
	}
}

#[async_trait]
impl Transport for HttpTransport {
	async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
		let response = self.net.get(url).query(query).send().await?;

		let status = response.status();
		if status != StatusCode::OK {
			return Err(
				GenericError(format!("Status code was not 200 OK.\nCode: {}", status)).into(),
			);
		}

		let text = response.text().await?;
		Ok(text)
	}
}

pub struct Requester<T: Transport = HttpTransport> {
	transport: T,
	base_url: String,
	missing_image_url: String,
}

impl Requester {
	pub fn new(config: &Config) -> Result<Requester> {
		let transport = HttpTransport::new(config)?;
		Ok(Requester::with_transport(transport, config))
	}
}

impl<T: Transport> Requester<T> {
	pub fn with_transport(transport: T, config: &Config) -> Self {
		Requester {
			transport,
			base_url: config.base_url.trim_end_matches('/').to_owned(),
			missing_image_url: config.missing_image_url.clone(),
		}
	}

	pub fn transport(&self) -> &T {
		&self.transport
	}

	fn construct_search_url(&self) -> String {
		format!("{}/search/shows", self.base_url)
	}

	fn construct_episodes_url(&self, id: ShowId) -> String {
		format!("{}/shows/{}/episodes", self.base_url, id)
	}

	/// Search for shows matching `query`, in the order the API ranks them.
	pub async fn search_shows(&self, query: &str) -> Result<Vec<Show>> {
		let url = self.construct_search_url();
		log::debug!("Searching shows for {:?}", query);
		let text = self.transport.get(&url, &[("q", query)]).await?;
		let results: Vec<SearchResult> = serde_json::from_str(&text)?;
		let shows = shows_from_results(results, &self.missing_image_url);
		log::debug!("Found {} shows for {:?}", shows.len(), query);
		Ok(shows)
	}

	/// Get every episode of a show, in API order.
	pub async fn get_episodes(&self, id: ShowId) -> Result<Vec<Episode>> {
		let url = self.construct_episodes_url(id);
		log::debug!("Fetching episodes for show {}", id);
		let text = self.transport.get(&url, &[]).await?;
		let raw: Vec<RawEpisode> = serde_json::from_str(&text)?;
		let episodes = episodes_from_raw(raw);
		log::debug!("Found {} episodes for show {}", episodes.len(), id);
		Ok(episodes)
	}
}
