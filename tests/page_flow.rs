use async_trait::async_trait;
use std::sync::Mutex;
use tv_search::error::{GenericError, Result};
use tv_search::render::EPISODES_BUTTON_CLASS;
use tv_search::{Config, Page, Requester, Transport};

/// Answers from a fixed table keyed by path and counts the calls.
struct FakeTvMaze {
	calls: Mutex<Vec<String>>,
}

impl FakeTvMaze {
	fn new() -> Self {
		FakeTvMaze {
			calls: Mutex::new(vec![]),
		}
	}

	fn calls(&self) -> Vec<String> {
		self.calls.lock().unwrap().clone()
	}
}

#[async_trait]
impl Transport for FakeTvMaze {
	async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
		let path = url.trim_start_matches("http://fake.tvmaze");
		let line = match query {
			[] => path.to_owned(),
			[(key, value)] => format!("{}?{}={}", path, key, value),
			_ => return Err(GenericError("Unexpected query".into()).into()),
		};
		self.calls.lock().unwrap().push(line.clone());

		let body = match line.as_str() {
			"/search/shows?q=batman" => {
				r#"[{"score": 0.9, "show": {"id": 1, "name": "Batman", "summary": "<p>Hero</p>", "image": null}}]"#
			}
			"/search/shows?q=nothing" => "[]",
			"/shows/1/episodes" => r#"[{"id": 10, "name": "Pilot", "season": 1, "number": 1}]"#,
			_ => return Err(GenericError(format!("No canned response for {}", line)).into()),
		};
		Ok(body.to_owned())
	}
}

fn requester() -> Requester<FakeTvMaze> {
	let config = Config::default().with_base_url("http://fake.tvmaze/");
	Requester::with_transport(FakeTvMaze::new(), &config)
}

#[tokio::test]
async fn batman_search_then_episodes() {
	let req = requester();
	let mut page = Page::new();

	assert!(page.handle_search(&req, "batman").await.unwrap());
	let cards = page.results().children();
	assert_eq!(cards.len(), 1);
	assert_eq!(cards[0].get_attr("data-show-id"), Some("1"));
	assert!(page
		.results()
		.to_html()
		.contains("src=\"https://tinyurl.com/tv-missing\""));
	assert!(page.episodes().is_hidden());

	let button = page.results().find_all(EPISODES_BUTTON_CLASS).remove(0);
	assert!(page.handle_episodes_click(&req, &button).await.unwrap());
	assert!(!page.episodes().is_hidden());
	assert_eq!(
		page.episodes().to_html(),
		"<ul id=\"episodes-area\"><li>Pilot (season 1, episode 1)</li></ul>"
	);

	assert_eq!(
		req.transport().calls(),
		vec!["/search/shows?q=batman", "/shows/1/episodes"]
	);
}

#[tokio::test]
async fn empty_query_triggers_no_request() {
	let req = requester();
	let mut page = Page::new();
	assert!(!page.handle_search(&req, "").await.unwrap());
	assert!(req.transport().calls().is_empty());
}

#[tokio::test]
async fn empty_result_clears_previous_cards() {
	let req = requester();
	let mut page = Page::new();
	page.handle_search(&req, "batman").await.unwrap();
	page.handle_search(&req, "nothing").await.unwrap();
	assert!(page.results().children().is_empty());
}
