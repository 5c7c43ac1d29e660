//! Server-side HTML rendering for the expert pages.
//!
//! Pages are plain HTML with inline CSS. The tag sidebar collapses into a
//! `<details>` filter sheet below the 750px breakpoint, so no script is
//! needed for the mobile panel.

use crate::application::handlers::directory::{
    ExpertDetail, ExpertListing, ExpertSummary, ResolvedTag, TagOption,
};
use crate::config::SiteConfig;

/// Message shown when a tag filter matches nobody.
pub const EMPTY_LISTING_MESSAGE: &str = "No experts found in this category.";

/// Renders the listing page: sidebar of tags plus the grid of expert cards.
pub fn render_listing_page(site: &SiteConfig, listing: &ExpertListing, tags: &[TagOption]) -> String {
    let nav = render_tag_nav(tags);

    let content = if listing.is_empty() {
        format!(
            r#"<div class="empty-state"><p>{}</p></div>"#,
            EMPTY_LISTING_MESSAGE
        )
    } else {
        let cards: String = listing.experts.iter().map(render_card).collect();
        format!(r#"<div class="card-grid">{}</div>"#, cards)
    };

    let body = format!(
        r#"<div class="experts-layout">
<aside class="sidebar">
<details class="filter-sheet"><summary>Filter by category</summary>
{nav}
</details>
<div class="sidebar-static">
{nav}
</div>
</aside>
<section class="experts-content">
<h1>{heading}</h1>
{content}
</section>
</div>"#,
        nav = nav,
        heading = html_escape(&listing.heading),
        content = content,
    );

    layout(site, &listing.heading, &body)
}

/// Renders the detail page for one expert.
pub fn render_detail_page(site: &SiteConfig, detail: &ExpertDetail) -> String {
    let mut sections = String::new();

    push_text_section(&mut sections, "Title", &detail.title);
    push_text_section(&mut sections, "School", &detail.university);
    push_text_section(&mut sections, "Organization Unit", &detail.org_unit);
    if let Some(telephone) = present(&detail.telephone) {
        push_text_section(&mut sections, "Telephone", telephone);
    }
    if let Some(email) = present(&detail.email) {
        let escaped = html_escape(email);
        push_section(
            &mut sections,
            "Email",
            &format!(r#"<a href="mailto:{0}">{0}</a>"#, escaped),
        );
    }
    if let Some(website) = present(&detail.website) {
        push_section(&mut sections, "Website", &external_link(website));
    }
    if let Some(orcid) = present(&detail.orcid) {
        push_text_section(&mut sections, "ORCID", orcid);
    }
    if let Some(intro) = present(&detail.brief_introduction) {
        push_section(
            &mut sections,
            "Introduction",
            &format!(r#"<p class="introduction">{}</p>"#, html_escape(intro)),
        );
    }
    if !detail.tags.is_empty() {
        let tags: String = detail.tags.iter().map(render_resolved_tag).collect();
        sections.push_str(&format!(
            r#"<div class="field"><h2>Research Tags</h2><div class="tag-list">{}</div></div>"#,
            tags
        ));
    }

    let body = format!(
        r#"<div class="detail">
<a class="back-link" href="/experts">&larr; Back</a>
<article class="detail-card">
<h1>{name}</h1>
{sections}
</article>
</div>"#,
        name = html_escape(detail.display_name()),
        sections = sections,
    );

    layout(site, detail.display_name(), &body)
}

/// Renders the page shown for identifiers that do not resolve.
pub fn render_not_found_page(site: &SiteConfig) -> String {
    let body = r#"<div class="detail">
<article class="detail-card">
<h1>Expert Not Found</h1>
<p>The expert profile you are looking for does not exist.</p>
<a class="button" href="/experts">&larr; Back to Experts</a>
</article>
</div>"#;

    layout(site, "Expert Not Found", body)
}

fn render_tag_nav(tags: &[TagOption]) -> String {
    let items: String = tags
        .iter()
        .map(|option| {
            let href = match option.id {
                Some(id) => format!("/experts?tag={}", id),
                None => "/experts".to_string(),
            };
            let class = if option.selected { "tag-link active" } else { "tag-link" };
            format!(
                r#"<a class="{}" href="{}">{}</a>"#,
                class,
                html_escape(&href),
                html_escape(&option.name)
            )
        })
        .collect();

    format!(r#"<nav class="tag-nav"><h2>Categories</h2>{}</nav>"#, items)
}

fn render_card(expert: &ExpertSummary) -> String {
    format!(
        r#"<a class="card" href="/experts/{id}"><h3>{name}</h3><p class="card-title">{title}</p><p class="card-unit">{unit}</p></a>"#,
        id = html_escape(&expert.id),
        name = html_escape(expert.display_name()),
        title = html_escape(&expert.title),
        unit = html_escape(&expert.org_unit),
    )
}

fn render_resolved_tag(tag: &ResolvedTag) -> String {
    let subcategories = if tag.subcategories.is_empty() {
        String::new()
    } else {
        let items: String = tag
            .subcategories
            .iter()
            .map(|sub| format!("<li>{}</li>", html_escape(&sub.name)))
            .collect();
        format!(
            r#"<div class="subcategories"><p>Subcategories:</p><ul>{}</ul></div>"#,
            items
        )
    };

    format!(
        r#"<div class="tag-item"><h3>{}</h3>{}</div>"#,
        html_escape(&tag.name),
        subcategories
    )
}

fn push_text_section(out: &mut String, label: &str, value: &str) {
    if value.trim().is_empty() {
        return;
    }
    push_section(out, label, &format!("<p>{}</p>", html_escape(value)));
}

fn push_section(out: &mut String, label: &str, inner_html: &str) {
    out.push_str(&format!(
        r#"<div class="field"><h2>{}</h2>{}</div>"#,
        label, inner_html
    ));
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Only http(s) URLs become links; anything else is shown as text.
fn external_link(url: &str) -> String {
    let escaped = html_escape(url);
    if url.starts_with("http://") || url.starts_with("https://") {
        format!(
            r#"<p><a href="{0}" target="_blank" rel="noopener noreferrer">{0}</a></p>"#,
            escaped
        )
    } else {
        format!("<p>{}</p>", escaped)
    }
}

fn layout(site: &SiteConfig, title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | {site_name}</title>
    <style>
{css}
    </style>
</head>
<body>
<main class="container">
{body}
</main>
</body>
</html>"#,
        title = html_escape(title),
        site_name = html_escape(&site.name),
        css = PAGE_CSS,
        body = body,
    )
}

/// Escape HTML special characters.
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const PAGE_CSS: &str = r#"
:root {
    --primary-color: #2563eb;
    --primary-soft: #dbeafe;
    --text-color: #111827;
    --muted-color: #4b5563;
    --border-color: #e5e7eb;
    --bg-color: #ffffff;
    --sidebar-bg: #f9fafb;
}
* { box-sizing: border-box; }
body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    color: var(--text-color);
    background: var(--bg-color);
}
.container { max-width: 80rem; margin: 0 auto; padding: 2rem 1rem; }
.experts-layout { display: flex; border: 1px solid var(--border-color); border-radius: 0.5rem; overflow: hidden; }
.sidebar { width: 16rem; background: var(--sidebar-bg); border-right: 1px solid var(--border-color); padding: 1.5rem; }
.tag-nav h2 { font-size: 1.125rem; margin: 0 0 1rem; }
.tag-link { display: block; padding: 0.5rem 0.75rem; border-radius: 0.375rem; color: var(--muted-color); text-decoration: none; font-size: 0.875rem; }
.tag-link:hover { background: var(--border-color); color: var(--text-color); }
.tag-link.active { background: var(--primary-soft); color: var(--primary-color); border-left: 4px solid var(--primary-color); }
.filter-sheet { display: none; }
.experts-content { flex: 1; padding: 2rem; }
.experts-content h1 { font-size: 1.875rem; margin: 0 0 1.5rem; }
.card-grid { display: grid; grid-template-columns: repeat(3, minmax(0, 1fr)); gap: 1.5rem; }
.card { display: block; padding: 1.5rem; border: 1px solid var(--border-color); border-radius: 0.5rem; color: inherit; text-decoration: none; }
.card:hover { box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); }
.card h3 { font-size: 1.125rem; margin: 0 0 0.5rem; }
.card-title { font-size: 0.875rem; color: var(--muted-color); margin: 0 0 0.25rem; }
.card-unit { font-size: 0.75rem; color: var(--muted-color); margin: 0; }
.empty-state { padding: 1.5rem; }
.detail { max-width: 56rem; margin: 0 auto; }
.back-link, .button { display: inline-block; margin-bottom: 1.5rem; color: var(--primary-color); text-decoration: none; }
.detail-card { border: 1px solid var(--border-color); border-radius: 0.5rem; padding: 2rem; }
.field h2 { font-size: 1.125rem; color: var(--muted-color); margin: 1.5rem 0 0.25rem; }
.field a { color: var(--primary-color); word-break: break-all; }
.introduction { white-space: pre-line; line-height: 1.6; }
.tag-item { border-left: 4px solid var(--primary-color); padding-left: 1rem; margin-bottom: 1rem; }
.tag-item h3 { margin: 0 0 0.5rem; font-size: 1rem; }
.subcategories { margin-left: 1rem; font-size: 0.875rem; }
@media (max-width: 1023px) {
    .card-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}
@media (max-width: 749px) {
    .experts-layout { flex-direction: column; }
    .sidebar { width: 100%; border-right: none; border-bottom: 1px solid var(--border-color); }
    .filter-sheet { display: block; }
    .sidebar-static { display: none; }
    .card-grid { grid-template-columns: minmax(0, 1fr); }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::directory::ResolvedSubTag;
    use crate::domain::directory::TagId;

    fn summary(name: &str) -> ExpertSummary {
        ExpertSummary {
            id: "acme-university-0".to_string(),
            full_name: name.to_string(),
            title: "Professor".to_string(),
            org_unit: "Medicine".to_string(),
            university: "Acme University".to_string(),
        }
    }

    fn detail() -> ExpertDetail {
        ExpertDetail {
            id: "acme-university-0".to_string(),
            full_name: "Jane Doe".to_string(),
            title: "Professor".to_string(),
            university: "Acme University".to_string(),
            org_unit: String::new(),
            telephone: None,
            email: Some("jane@acme.edu".to_string()),
            website: Some("javascript:alert(1)".to_string()),
            orcid: None,
            brief_introduction: Some("Line one\nLine two".to_string()),
            tags: vec![ResolvedTag {
                id: TagId::new(2),
                name: "Neuroscience".to_string(),
                subcategories: vec![ResolvedSubTag {
                    id: "2.1".to_string(),
                    name: "Cognitive".to_string(),
                }],
            }],
        }
    }

    fn tags(selected: Option<i64>) -> Vec<TagOption> {
        vec![
            TagOption {
                id: None,
                name: "All Experts".to_string(),
                selected: selected.is_none(),
            },
            TagOption {
                id: Some(TagId::new(1)),
                name: "Oncology".to_string(),
                selected: selected == Some(1),
            },
        ]
    }

    #[test]
    fn html_escape_escapes_special_chars() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape(r#"say "hi" it's"#), "say &quot;hi&quot; it&#39;s");
    }

    #[test]
    fn listing_renders_cards_and_sidebar() {
        let listing = ExpertListing {
            heading: "All Experts".to_string(),
            selected_tag: None,
            experts: vec![summary("Jane Doe")],
        };
        let html = render_listing_page(&SiteConfig::default(), &listing, &tags(None));

        assert!(html.contains("<h1>All Experts</h1>"));
        assert!(html.contains(r#"href="/experts/acme-university-0""#));
        assert!(html.contains(r#"href="/experts?tag=1""#));
        assert!(html.contains(r#"class="tag-link active" href="/experts""#));
        assert!(html.contains("<h2>Categories</h2>"));
        assert!(html.contains("max-width: 749px"));
    }

    #[test]
    fn listing_shows_empty_state() {
        let listing = ExpertListing {
            heading: "Oncology".to_string(),
            selected_tag: Some(TagId::new(1)),
            experts: vec![],
        };
        let html = render_listing_page(&SiteConfig::default(), &listing, &tags(Some(1)));

        assert!(html.contains(EMPTY_LISTING_MESSAGE));
        assert!(html.contains(r#"class="tag-link active" href="/experts?tag=1""#));
        assert!(!html.contains("card-grid\""));
    }

    #[test]
    fn card_shows_name_title_and_unit_only() {
        let html = render_card(&summary("Jane Doe"));
        assert!(html.contains("<h3>Jane Doe</h3>"));
        assert!(html.contains(r#"<p class="card-title">Professor</p>"#));
        assert!(html.contains(r#"<p class="card-unit">Medicine</p>"#));
        assert!(!html.contains("Acme University"));
    }

    #[test]
    fn card_falls_back_to_na_and_escapes() {
        let html = render_card(&summary(""));
        assert!(html.contains("<h3>N/A</h3>"));

        let html = render_card(&summary("<b>Eve</b>"));
        assert!(html.contains("&lt;b&gt;Eve&lt;/b&gt;"));
    }

    #[test]
    fn detail_renders_present_fields_only() {
        let html = render_detail_page(&SiteConfig::default(), &detail());

        assert!(html.contains("<h1>Jane Doe</h1>"));
        assert!(html.contains("<h2>School</h2><p>Acme University</p>"));
        assert!(!html.contains("Organization Unit"));
        assert!(!html.contains("Telephone"));
        assert!(html.contains(r#"href="mailto:jane@acme.edu""#));
        assert!(html.contains("Line one\nLine two"));
        assert!(html.contains("<h3>Neuroscience</h3>"));
        assert!(html.contains("<li>Cognitive</li>"));
        assert!(html.contains(r#"href="/experts""#));
    }

    #[test]
    fn detail_does_not_link_non_http_websites() {
        let html = render_detail_page(&SiteConfig::default(), &detail());
        assert!(!html.contains(r#"href="javascript:"#));
        assert!(html.contains("<p>javascript:alert(1)</p>"));
    }

    #[test]
    fn external_link_opens_in_new_tab() {
        let html = external_link("https://acme.edu/jane");
        assert!(html.contains(r#"target="_blank" rel="noopener noreferrer""#));
    }

    #[test]
    fn not_found_page_links_back() {
        let html = render_not_found_page(&SiteConfig::default());
        assert!(html.contains("Expert Not Found"));
        assert!(html.contains("The expert profile you are looking for does not exist."));
        assert!(html.contains("Back to Experts"));
    }

    #[test]
    fn layout_uses_site_name_in_title() {
        let site = SiteConfig {
            name: "Health Experts".to_string(),
            ..Default::default()
        };
        let html = render_not_found_page(&site);
        assert!(html.contains("<title>Expert Not Found | Health Experts</title>"));
    }
}
