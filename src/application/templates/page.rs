// src/application/templates/page.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::grouping::{CategoryGroup, GroupedLinks};
use crate::domain::link::LinkRecord;
use minijinja::Environment;
use serde::Serialize;
use tracing::instrument;

// Class names are kept stable so existing stylesheets keep working.
const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>linkboard</title>
</head>
<body>
<div class="preview-area">
{%- if sections or other %}
{%- for section in sections %}
<div class="category-section">
  <div class="category-header">
    <span class="category-count">{{ section.count }}</span>
    <span class="category-title">{{ section.name }}</span>
  </div>
  <div class="category-items">
  {%- for link in section.links %}
    <div class="preview-item">
      <div class="item-content">
        <a href="{{ link.url }}" target="_blank">{{ link.title }}</a>
      </div>
    </div>
  {%- endfor %}
  </div>
</div>
{%- endfor %}
{%- if other %}
<div class="other-items-section">
  <div class="category-header">
    <span class="category-count">{{ other_count }}</span>
    <span class="category-title">{{ other_label }}</span>
  </div>
  <div class="other-items-grid">
  {%- for link in other %}
    <div class="preview-item">
      <div class="item-content">
        <a href="{{ link.url }}" target="_blank">{{ link.title }}</a>
        <span class="category-tag">#{{ link.category }}</span>
      </div>
    </div>
  {%- endfor %}
  </div>
</div>
{%- endif %}
{%- else %}
<div class="no-items">No links yet</div>
{%- endif %}
</div>
</body>
</html>
"#;

#[derive(Serialize)]
struct LinkContext<'a> {
    title: &'a str,
    url: &'a str,
    category: &'a str,
}

#[derive(Serialize)]
struct SectionContext<'a> {
    name: &'a str,
    count: usize,
    links: Vec<LinkContext<'a>>,
}

#[derive(Serialize)]
struct PageContext<'a> {
    sections: Vec<SectionContext<'a>>,
    other_label: &'a str,
    other_count: usize,
    other: Vec<LinkContext<'a>>,
}

impl<'a> From<&'a LinkRecord> for LinkContext<'a> {
    fn from(record: &'a LinkRecord) -> Self {
        Self {
            title: &record.title,
            url: &record.url,
            category: record.category.as_str(),
        }
    }
}

impl<'a> From<&'a CategoryGroup> for SectionContext<'a> {
    fn from(group: &'a CategoryGroup) -> Self {
        Self {
            name: group.category.as_str(),
            count: group.count(),
            links: group.links.iter().map(LinkContext::from).collect(),
        }
    }
}

/// Renders the grouped collection into a standalone HTML page.
///
/// The template is named `page.html` so minijinja's default auto-escaping
/// applies; titles, urls and category names never reach the markup raw.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl std::fmt::Debug for PageRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRenderer")
            .field("env", &"<Environment>")
            .finish()
    }
}

impl PageRenderer {
    pub fn new() -> ApplicationResult<Self> {
        let mut env = Environment::new();
        env.add_template("page.html", PAGE_TEMPLATE)
            .map_err(|e| ApplicationError::Template(format!("Invalid page template: {}", e)))?;
        Ok(Self { env })
    }

    #[instrument(skip(self, groups), level = "debug")]
    pub fn render(&self, groups: &GroupedLinks, other_label: &str) -> ApplicationResult<String> {
        let template = self
            .env
            .get_template("page.html")
            .map_err(|e| ApplicationError::Template(e.to_string()))?;

        let context = PageContext {
            sections: groups.major.iter().map(SectionContext::from).collect(),
            other_label,
            other_count: groups.other.len(),
            other: groups.other.iter().map(LinkContext::from).collect(),
        };

        template
            .render(&context)
            .map_err(|e| ApplicationError::Template(format!("Failed to render page: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::grouping::DEFAULT_OTHER_LABEL;

    fn record(id: i64, category: &str, title: &str, url: &str) -> LinkRecord {
        LinkRecord::new(id, Category::new(category), title, url).unwrap()
    }

    fn records_of(specs: &[(&str, usize)]) -> Vec<LinkRecord> {
        let mut id = 0;
        let mut records = Vec::new();
        for (category, count) in specs {
            for i in 0..*count {
                id += 1;
                records.push(record(
                    id,
                    category,
                    &format!("{}-{}", category, i),
                    "https://example.com",
                ));
            }
        }
        records
    }

    fn render(records: &[LinkRecord]) -> String {
        let renderer = PageRenderer::new().unwrap();
        renderer
            .render(&GroupedLinks::from_records(records), DEFAULT_OTHER_LABEL)
            .unwrap()
    }

    #[test]
    fn given_major_category_when_render_then_section_markup_present() {
        let html = render(&records_of(&[("dev", 4)]));

        assert!(html.contains(r#"<div class="category-section">"#));
        assert!(html.contains(r#"<span class="category-count">4</span>"#));
        assert!(html.contains(r#"<span class="category-title">dev</span>"#));
        assert!(html.contains(r#"<div class="category-items">"#));
    }

    #[test]
    fn given_minor_categories_when_render_then_other_section_with_tags() {
        let html = render(&[record(1, "misc", "a", "https://a.example")]);

        assert!(html.contains(r#"<div class="other-items-section">"#));
        assert!(html.contains(r#"<div class="other-items-grid">"#));
        assert!(html.contains(r#"<span class="category-tag">#misc</span>"#));
        assert!(html.contains(DEFAULT_OTHER_LABEL));
    }

    #[test]
    fn given_stored_label_when_render_then_label_used() {
        let renderer = PageRenderer::new().unwrap();
        let records = [record(1, "misc", "a", "https://a.example")];
        let html = renderer
            .render(&GroupedLinks::from_records(&records), "My pile")
            .unwrap();

        assert!(html.contains(r#"<span class="category-title">My pile</span>"#));
    }

    #[test]
    fn given_no_records_when_render_then_placeholder() {
        let html = render(&[]);

        assert!(html.contains(r#"<div class="no-items">No links yet</div>"#));
        assert!(!html.contains("category-section"));
        assert!(!html.contains("other-items-section"));
    }

    #[test]
    fn given_all_links_major_when_render_then_no_other_section() {
        let html = render(&records_of(&[("dev", 4)]));
        assert!(!html.contains("other-items-section"));
    }

    #[test]
    fn given_markup_in_title_when_render_then_escaped() {
        let html = render(&[record(
            1,
            "misc",
            "<script>alert('x')</script>",
            "https://a.example",
        )]);

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn given_quote_in_url_when_render_then_attribute_stays_closed() {
        let html = render(&[record(
            1,
            "misc",
            "a",
            r#"https://a.example/?q="><script>"#,
        )]);

        assert!(!html.contains(r#"href="https://a.example/?q=">"#));
        assert!(html.contains("&quot;&gt;") || html.contains("%22"));
    }

    #[test]
    fn given_major_categories_when_render_then_descending_order_in_markup() {
        let html = render(&records_of(&[("small", 4), ("big", 6)]));

        let big = html.find(r#"<span class="category-title">big</span>"#).unwrap();
        let small = html
            .find(r#"<span class="category-title">small</span>"#)
            .unwrap();
        assert!(big < small);
    }

    #[test]
    fn given_links_when_render_then_anchor_count_matches() {
        let html = render(&records_of(&[("dev", 4), ("misc", 2)]));
        assert_eq!(html.matches("<a href=").count(), 6);
    }
}
