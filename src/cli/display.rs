// src/cli/display.rs

use crate::domain::grouping::GroupedLinks;
use crate::domain::link::LinkRecord;
use crate::util::helper::{format_added_at, format_url};
use derive_builder::Builder;
use std::io::Write;
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

/// URLs longer than this get truncated with an ellipsis for terminal output.
pub const URL_DISPLAY_WIDTH: usize = 60;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct DisplayLink {
    #[builder(default = "0")]
    pub id: i64,

    #[builder(default)]
    pub title: String,

    #[builder(default)]
    pub url: String,

    #[builder(default)]
    pub category: String,

    #[builder(default)]
    pub added_at: String,
}

impl DisplayLink {
    pub fn from_domain(record: &LinkRecord) -> Self {
        DisplayLinkBuilder::default()
            .id(record.id)
            .title(record.title.to_string())
            .url(format_url(&record.url, URL_DISPLAY_WIDTH))
            .category(record.category.to_string())
            .added_at(format_added_at(record.id))
            .build()
            .unwrap()
    }
}

// Implement Default directly instead of deriving it,
// as we already provide defaults in the builder
impl Default for DisplayLink {
    fn default() -> Self {
        Self {
            id: 0,
            title: String::new(),
            url: String::new(),
            category: String::new(),
            added_at: String::new(),
        }
    }
}

/// Display the grouped collection with color formatting.
///
/// Major categories come first, largest on top, each under its own
/// header; whatever is left follows under the catch-all label. The
/// category of a catch-all entry is shown as a tag, since the section
/// header no longer carries it.
pub fn show_grouped(stderr: &mut StandardStream, groups: &GroupedLinks, other_label: &str) {
    if groups.is_empty() {
        eprintln!("No links to display");
        return;
    }

    for group in &groups.major {
        show_section_header(stderr, group.category.as_str(), group.count());
        let links: Vec<DisplayLink> = group.links.iter().map(DisplayLink::from_domain).collect();
        show_links(stderr, &links, false);
    }

    if !groups.other.is_empty() {
        show_section_header(stderr, other_label, groups.other.len());
        let links: Vec<DisplayLink> = groups.other.iter().map(DisplayLink::from_domain).collect();
        show_links(stderr, &links, true);
    }
}

fn show_section_header(stderr: &mut StandardStream, label: &str, count: usize) {
    if let Err(e) = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Cyan))) {
        eprintln!("Error setting color: {}", e);
    }
    if let Err(e) = writeln!(stderr, "{} ({})", label, count) {
        eprintln!("Error writing to stderr: {}", e);
    }
    if let Err(e) = stderr.reset() {
        eprintln!("Error resetting color: {}", e);
    }
}

fn show_links(stderr: &mut StandardStream, links: &[DisplayLink], with_category_tag: bool) {
    let first_col_width = links.len().to_string().len();

    for (i, link) in links.iter().enumerate() {
        // Title (green)
        if let Err(e) = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Green))) {
            eprintln!("Error setting color: {}", e);
        }
        if let Err(e) = write!(stderr, "  {:first_col_width$}. {}", i + 1, link.title) {
            eprintln!("Error writing to stderr: {}", e);
        }

        // ID (white)
        if let Err(e) = stderr.set_color(ColorSpec::new().set_fg(Some(Color::White))) {
            eprintln!("Error setting color: {}", e);
        }
        if let Err(e) = writeln!(stderr, " [{}]", link.id) {
            eprintln!("Error writing to stderr: {}", e);
        }

        // URL (yellow)
        if let Err(e) = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Yellow))) {
            eprintln!("Error setting color: {}", e);
        }
        if let Err(e) = writeln!(stderr, "  {:first_col_width$}  {}", "", link.url) {
            eprintln!("Error writing to stderr: {}", e);
        }

        // Category tag (blue), only where the section header does not say it
        if with_category_tag {
            if let Err(e) = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Blue))) {
                eprintln!("Error setting color: {}", e);
            }
            if let Err(e) = writeln!(stderr, "  {:first_col_width$}  #{}", "", link.category) {
                eprintln!("Error writing to stderr: {}", e);
            }
        }

        if let Err(e) = stderr.reset() {
            eprintln!("Error resetting color: {}", e);
        }
    }
    eprintln!();
}
