use crate::dom::{Container, Element};
use crate::models::{Episode, Show};

pub const SHOW_CLASS: &str = "Show";
pub const EPISODES_BUTTON_CLASS: &str = "episodes-button";
pub const SHOW_ID_ATTR: &str = "data-show-id";

/// Build the card for one show. The id is kept in `data-show-id` so a click
/// inside the card can find its show again.
pub fn show_card(show: &Show) -> Element {
	Element::new("div")
		.class("col-md-6 col-lg-3 Show")
		.attr(SHOW_ID_ATTR, show.id)
		.child(
			Element::new("div")
				.class("card")
				.attr(SHOW_ID_ATTR, show.id)
				.child(
					Element::new("img")
						.class("card-img-top")
						.attr("src", &show.image),
				)
				.child(
					Element::new("div")
						.class("card-body")
						.child(Element::new("h5").class("card-title").text(&show.name))
						.child(
							Element::new("p")
								.class("card-text")
								.markup(show.summary.as_deref().unwrap_or_default()),
						)
						.child(
							Element::new("button")
								.class("btn btn-info episodes-button")
								.text("Episodes"),
						),
				),
		)
}

pub fn populate_shows(container: &mut Container, shows: &[Show]) {
	container.empty();
	for show in shows {
		container.append(show_card(show));
	}
	log::info!("Rendered {} shows into #{}", shows.len(), container.id());
}

/// Formats an episode as `"<name> (season <s>, episode <n>)"`.
///
/// TVMaze only returns numberless specials when `?specials=1` is asked for,
/// which this crate never does. A decoded episode without a number still
/// gets a line, `"<name> (season <s>, special)"`, instead of failing the list.
pub fn episode_line(episode: &Episode) -> String {
	match episode.number {
		Some(number) => format!(
			"{} (season {}, episode {})",
			episode.name, episode.season, number
		),
		None => format!("{} (season {}, special)", episode.name, episode.season),
	}
}

pub fn populate_episodes(container: &mut Container, episodes: &[Episode]) {
	container.empty();
	container.show();
	for episode in episodes {
		container.append(Element::new("li").text(episode_line(episode)));
	}
	log::info!("Rendered {} episodes into #{}", episodes.len(), container.id());
}
