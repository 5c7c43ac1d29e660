//! HTTP handlers for crawler-facing site files.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Redirect},
};
use chrono::{NaiveDate, Utc};

use crate::adapters::http::DirectoryAppState;
use crate::config::SiteConfig;

/// Sitemap entry: site-relative path, change frequency, priority.
const SITEMAP_ENTRIES: &[(&str, &str, &str)] = &[
    ("", "monthly", "1.0"),
    ("/experts", "monthly", "0.8"),
];

/// GET / - The directory is the landing page
pub async fn home() -> Redirect {
    Redirect::to("/experts")
}

/// GET /robots.txt
pub async fn robots_txt(State(state): State<DirectoryAppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_robots(&state.site),
    )
}

/// GET /sitemap.xml
pub async fn sitemap_xml(State(state): State<DirectoryAppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render_sitemap(&state.site, Utc::now().date_naive()),
    )
}

pub fn render_robots(site: &SiteConfig) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /api/\n\nSitemap: {}\nHost: {}\n",
        site.url("/sitemap.xml"),
        site.base_url
    )
}

pub fn render_sitemap(site: &SiteConfig, last_modified: NaiveDate) -> String {
    let urls: String = SITEMAP_ENTRIES
        .iter()
        .map(|(path, frequency, priority)| {
            format!(
                "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>\n",
                xml_escape(&site.url(path)),
                last_modified.format("%Y-%m-%d"),
                frequency,
                priority
            )
        })
        .collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{}</urlset>\n",
        urls
    )
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteConfig {
        SiteConfig {
            base_url: "https://experts.example.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn robots_points_at_sitemap_and_hides_api() {
        let robots = render_robots(&site());
        assert!(robots.starts_with("User-agent: *\nAllow: /\n"));
        assert!(robots.contains("Disallow: /api/"));
        assert!(robots.contains("Sitemap: https://experts.example.com/sitemap.xml"));
        assert!(robots.contains("Host: https://experts.example.com"));
    }

    #[test]
    fn sitemap_lists_home_and_experts() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let sitemap = render_sitemap(&site(), date);

        assert!(sitemap.contains("<loc>https://experts.example.com</loc>"));
        assert!(sitemap.contains("<loc>https://experts.example.com/experts</loc>"));
        assert!(sitemap.contains("<priority>1.0</priority>"));
        assert!(sitemap.contains("<priority>0.8</priority>"));
        assert_eq!(sitemap.matches("<lastmod>2024-03-09</lastmod>").count(), 2);
        assert_eq!(sitemap.matches("<changefreq>monthly</changefreq>").count(), 2);
    }

    #[test]
    fn sitemap_escapes_urls() {
        let site = SiteConfig {
            base_url: "https://example.com/a&b".to_string(),
            ..Default::default()
        };
        let sitemap = render_sitemap(&site, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(sitemap.contains("https://example.com/a&amp;b/experts"));
    }
}
