//! A minimal document model: element trees rendered into named containers.
//!
//! Containers are written by full replacement (`empty` then `append`), and
//! clicks are resolved by walking a child-index path from the container
//! down to the clicked node.

use crate::util::strip_markup;
use std::fmt::Write;

const VOID_TAGS: &[&str] = &["img", "input", "br", "hr", "meta"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	Element(Element),
	/// Plain text, escaped when serialized.
	Text(String),
	/// Trusted markup, inserted verbatim.
	Markup(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	tag: String,
	attrs: Vec<(String, String)>,
	children: Vec<Node>,
}

impl Element {
	pub fn new(tag: impl Into<String>) -> Self {
		Element {
			tag: tag.into(),
			attrs: vec![],
			children: vec![],
		}
	}

	pub fn attr(mut self, name: impl Into<String>, value: impl ToString) -> Self {
		let name = name.into();
		let value = value.to_string();
		match self.attrs.iter_mut().find(|(n, _)| *n == name) {
			Some((_, v)) => *v = value,
			None => self.attrs.push((name, value)),
		}
		self
	}

	pub fn class(self, classes: &str) -> Self {
		self.attr("class", classes)
	}

	pub fn child(mut self, child: Element) -> Self {
		self.children.push(Node::Element(child));
		self
	}

	pub fn text(mut self, text: impl Into<String>) -> Self {
		self.children.push(Node::Text(text.into()));
		self
	}

	pub fn markup(mut self, markup: impl Into<String>) -> Self {
		self.children.push(Node::Markup(markup.into()));
		self
	}

	pub fn tag(&self) -> &str {
		&self.tag
	}

	pub fn get_attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_str())
	}

	pub fn has_class(&self, class: &str) -> bool {
		self.get_attr("class")
			.map_or(false, |classes| classes.split_whitespace().any(|c| c == class))
	}

	pub fn children(&self) -> &[Node] {
		&self.children
	}

	/// The child at `index`, if it is an element.
	pub fn child_element(&self, index: usize) -> Option<&Element> {
		match self.children.get(index)? {
			Node::Element(el) => Some(el),
			_ => None,
		}
	}

	/// First descendant (depth first, self included) carrying `class`.
	pub fn find(&self, class: &str) -> Option<&Element> {
		if self.has_class(class) {
			return Some(self);
		}
		self.children.iter().find_map(|node| match node {
			Node::Element(el) => el.find(class),
			_ => None,
		})
	}

	/// Text of the subtree. Markup nodes are stripped and their entities decoded.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		for node in &self.children {
			match node {
				Node::Element(el) => out.push_str(&el.text_content()),
				Node::Text(text) => out.push_str(text),
				Node::Markup(markup) => out.push_str(&strip_markup(markup)),
			}
		}
		out
	}

	pub fn to_html(&self) -> String {
		let mut out = String::new();
		self.write_html(&mut out);
		out
	}

	fn write_html(&self, out: &mut String) {
		out.push('<');
		out.push_str(&self.tag);
		for (name, value) in &self.attrs {
			// Writing to a String cannot fail.
			let _ = write!(out, " {}=\"{}\"", name, escape(value));
		}
		out.push('>');
		if VOID_TAGS.contains(&self.tag.as_str()) {
			return;
		}
		for node in &self.children {
			match node {
				Node::Element(el) => el.write_html(out),
				Node::Text(text) => out.push_str(&escape(text)),
				Node::Markup(markup) => out.push_str(markup),
			}
		}
		let _ = write!(out, "</{}>", self.tag);
	}

	fn collect_paths(&self, class: &str, path: &mut Vec<usize>, found: &mut Vec<Vec<usize>>) {
		if self.has_class(class) {
			found.push(path.clone());
		}
		for (i, node) in self.children.iter().enumerate() {
			if let Node::Element(el) = node {
				path.push(i);
				el.collect_paths(class, path, found);
				path.pop();
			}
		}
	}
}

fn escape(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			_ => out.push(ch),
		}
	}
	out
}

/// A named region of the page whose children are replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
	id: String,
	tag: String,
	children: Vec<Element>,
	hidden: bool,
}

impl Container {
	pub fn new(id: impl Into<String>, tag: impl Into<String>) -> Self {
		Container {
			id: id.into(),
			tag: tag.into(),
			children: vec![],
			hidden: false,
		}
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn children(&self) -> &[Element] {
		&self.children
	}

	pub fn empty(&mut self) {
		self.children.clear();
	}

	pub fn append(&mut self, el: Element) {
		self.children.push(el);
	}

	pub fn show(&mut self) {
		self.hidden = false;
	}

	pub fn hide(&mut self) {
		self.hidden = true;
	}

	pub fn is_hidden(&self) -> bool {
		self.hidden
	}

	/// Nearest element carrying `class` on the way from the node at `path`
	/// back up to the container. `path[0]` indexes the container's children,
	/// the rest index node children below it.
	pub fn closest(&self, path: &[usize], class: &str) -> Option<&Element> {
		let (first, rest) = path.split_first()?;
		let mut current = self.children.get(*first)?;
		let mut found = current.has_class(class).then_some(current);
		for &index in rest {
			current = current.child_element(index)?;
			if current.has_class(class) {
				found = Some(current);
			}
		}
		found
	}

	/// Paths of every element carrying `class`, in document order.
	pub fn find_all(&self, class: &str) -> Vec<Vec<usize>> {
		let mut found = vec![];
		for (i, el) in self.children.iter().enumerate() {
			let mut path = vec![i];
			el.collect_paths(class, &mut path, &mut found);
		}
		found
	}

	pub fn to_html(&self) -> String {
		let mut out = format!("<{} id=\"{}\"", self.tag, escape(&self.id));
		if self.hidden {
			out.push_str(" style=\"display: none\"");
		}
		out.push('>');
		for el in &self.children {
			out.push_str(&el.to_html());
		}
		let _ = write!(out, "</{}>", self.tag);
		out
	}
}
