use serde::Deserialize;

/// One entry of `GET /shows/{id}/episodes`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEpisode {
	pub id: u64,
	pub name: String,
	pub season: u32,
	pub number: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
	pub id: u64,
	pub name: String,
	pub season: u32,
	/// `None` for specials.
	pub number: Option<u32>,
}

impl From<RawEpisode> for Episode {
	fn from(raw: RawEpisode) -> Self {
		Episode {
			id: raw.id,
			name: raw.name,
			season: raw.season,
			number: raw.number,
		}
	}
}

pub fn episodes_from_raw(raw: Vec<RawEpisode>) -> Vec<Episode> {
	raw.into_iter().map(Episode::from).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn maps_pilot() {
		let json = r#"[{"id": 10, "url": "http://x", "name": "Pilot", "season": 1, "number": 1,
			"airdate": "2005-09-13", "summary": "<p>...</p>"}]"#;
		let raw: Vec<RawEpisode> = serde_json::from_str(json).unwrap();
		assert_eq!(
			episodes_from_raw(raw),
			vec![Episode {
				id: 10,
				name: "Pilot".into(),
				season: 1,
				number: Some(1),
			}]
		);
	}

	#[test]
	fn special_has_no_number() {
		let json = r#"[{"id": 11, "name": "Behind the Scenes", "season": 2, "number": null}]"#;
		let raw: Vec<RawEpisode> = serde_json::from_str(json).unwrap();
		assert_eq!(episodes_from_raw(raw)[0].number, None);
	}
}
