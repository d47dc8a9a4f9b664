use crate::error::Result;
use flexi_logger::{Logger, LoggerHandle};
use scraper::Html;

/// Start logging to stderr. `RUST_LOG` takes precedence over `spec`.
pub fn init_log(spec: &str) -> Result<LoggerHandle> {
	let handle = Logger::try_with_env_or_str(spec)?.start()?;
	Ok(handle)
}

/// Cut the trailing line break off a line read from stdin.
pub fn remove_newline(string: &str) -> &str {
	string.trim_end_matches(|ch: char| ch == '\r' || ch == '\n')
}

/// Text of a markup fragment with entities decoded and whitespace collapsed.
pub fn strip_markup(markup: &str) -> String {
	let fragment = Html::parse_fragment(markup);
	let text = fragment.root_element().text().collect::<String>();
	text.split_whitespace().collect::<Vec<_>>().join(" ")
}
