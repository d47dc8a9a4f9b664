use clap::Parser;
use std::io::{stdin, stdout, Stdout, Write};
use std::path::{Path, PathBuf};
use tv_search::config::DEFAULT_BASE_URL;
use tv_search::error::Result;
use tv_search::models::MISSING_IMAGE_URL;
use tv_search::render::EPISODES_BUTTON_CLASS;
use tv_search::util::{init_log, remove_newline};
use tv_search::{Config, Page, Requester};

#[derive(Parser)]
#[command(name = "tv-search", version, about = "Search TV shows and list their episodes")]
struct Args {
	/// Base URL of the TVMaze API.
	#[arg(long, default_value = DEFAULT_BASE_URL)]
	base_url: String,

	/// Image shown for shows without one.
	#[arg(long, default_value = MISSING_IMAGE_URL)]
	missing_image: String,

	/// Write the rendered page to this file after every update.
	#[arg(long)]
	html: Option<PathBuf>,

	/// Log specification, overridden by RUST_LOG.
	#[arg(long, default_value = "warn")]
	log: String,
}

fn prompt(out: &mut Stdout, text: &str) -> Result<Option<String>> {
	out.write_all(text.as_bytes())?;
	out.flush()?;
	let mut line = String::new();
	if stdin().read_line(&mut line)? == 0 {
		return Ok(None);
	}
	Ok(Some(remove_newline(&line).to_owned()))
}

fn print_shows(out: &mut Stdout, page: &Page) -> Result<()> {
	if page.results().children().is_empty() {
		writeln!(out, "No shows found.")?;
	}
	for (i, card) in page.results().children().iter().enumerate() {
		let name = card.find("card-title").map(|el| el.text_content()).unwrap_or_default();
		let summary = card.find("card-text").map(|el| el.text_content()).unwrap_or_default();
		writeln!(out, "{:>3}. {}", i + 1, name)?;
		if !summary.is_empty() {
			writeln!(out, "     {}", summary)?;
		}
	}
	Ok(())
}

fn print_episodes(out: &mut Stdout, page: &Page) -> Result<()> {
	for item in page.episodes().children() {
		writeln!(out, "  - {}", item.text_content())?;
	}
	Ok(())
}

fn write_page(path: Option<&Path>, page: &Page) -> Result<()> {
	if let Some(path) = path {
		std::fs::write(path, page.to_html())?;
		log::debug!("Wrote page to {}", path.display());
	}
	Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();
	let _logger = init_log(&args.log)?;

	let config = Config::default()
		.with_base_url(args.base_url)
		.with_missing_image_url(args.missing_image);
	let requester = Requester::new(&config)?;
	let mut page = Page::new();
	let mut out = stdout();

	loop {
		let query = match prompt(&mut out, "Search shows: ")? {
			Some(query) => query,
			None => break,
		};
		match page.handle_search(&requester, &query).await {
			Ok(true) => {}
			Ok(false) => continue,
			Err(e) => {
				log::error!("Search for {:?} failed: {}", query, e);
				writeln!(out, "Search failed: {}", e)?;
				continue;
			}
		}
		print_shows(&mut out, &page)?;
		write_page(args.html.as_deref(), &page)?;

		let buttons = page.results().find_all(EPISODES_BUTTON_CLASS);
		if buttons.is_empty() {
			continue;
		}
		let choice = match prompt(&mut out, "Episodes for show # (blank to search again): ")? {
			Some(choice) => choice,
			None => break,
		};
		let choice = choice.trim();
		if choice.is_empty() {
			continue;
		}
		let target = match choice.parse::<usize>().ok().and_then(|n| buttons.get(n.wrapping_sub(1))) {
			Some(target) => target,
			None => {
				writeln!(out, "No show numbered {}.", choice)?;
				continue;
			}
		};
		match page.handle_episodes_click(&requester, target).await {
			Ok(_) => {
				print_episodes(&mut out, &page)?;
				write_page(args.html.as_deref(), &page)?;
			}
			Err(e) => {
				log::error!("Fetching episodes failed: {}", e);
				writeln!(out, "Fetching episodes failed: {}", e)?;
			}
		}
	}
	Ok(())
}
