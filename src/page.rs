use crate::dom::Container;
use crate::error::{OkOrGeneric, Result};
use crate::models::ShowId;
use crate::render::{self, EPISODES_BUTTON_CLASS, SHOW_CLASS, SHOW_ID_ATTR};
use crate::requester::{Requester, Transport};

pub const RESULTS_CONTAINER_ID: &str = "shows-list";
pub const EPISODES_CONTAINER_ID: &str = "episodes-area";

/// The search page: a results container with show cards and an episode
/// container that stays hidden until a show's episodes are fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
	results: Container,
	episodes: Container,
}

impl Default for Page {
	fn default() -> Self {
		Self::new()
	}
}

impl Page {
	pub fn new() -> Self {
		let mut episodes = Container::new(EPISODES_CONTAINER_ID, "ul");
		episodes.hide();
		Page {
			results: Container::new(RESULTS_CONTAINER_ID, "div"),
			episodes,
		}
	}

	pub fn results(&self) -> &Container {
		&self.results
	}

	pub fn episodes(&self) -> &Container {
		&self.episodes
	}

	/// Search form submission. Returns `false` when the query was blank and
	/// nothing happened.
	pub async fn handle_search<T: Transport>(
		&mut self,
		requester: &Requester<T>,
		query: &str,
	) -> Result<bool> {
		if query.trim().is_empty() {
			log::debug!("Ignoring empty search");
			return Ok(false);
		}

		self.episodes.hide();
		let shows = requester.search_shows(query).await?;
		render::populate_shows(&mut self.results, &shows);
		Ok(true)
	}

	/// Click delegated from the results container. `target` is the path of
	/// the clicked node below the container. Clicks that did not land on an
	/// episodes button are ignored and return `false`.
	pub async fn handle_episodes_click<T: Transport>(
		&mut self,
		requester: &Requester<T>,
		target: &[usize],
	) -> Result<bool> {
		if self.results.closest(target, EPISODES_BUTTON_CLASS).is_none() {
			log::debug!("Ignoring click at {:?}", target);
			return Ok(false);
		}

		let id = self
			.results
			.closest(target, SHOW_CLASS)
			.ok_or_generic("Episodes button is not inside a show card.")?
			.get_attr(SHOW_ID_ATTR)
			.ok_or_generic("Show card has no show id.")?
			.parse::<ShowId>()
			.ok_or_generic("Show card has an invalid show id.")?;

		let episodes = requester.get_episodes(id).await?;
		render::populate_episodes(&mut self.episodes, &episodes);
		Ok(true)
	}

	/// The whole page as an HTML document.
	pub fn to_html(&self) -> String {
		format!(
			"<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>TV Search</title></head>\n<body>\n\
			<form id=\"search-form\"><input id=\"search-query\" type=\"text\"><button>Go!</button></form>\n\
			{}\n{}\n</body>\n</html>\n",
			self.results.to_html(),
			self.episodes.to_html()
		)
	}
}
