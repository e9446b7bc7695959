//! Parsed-page handle consumed by the analyzers.
//!
//! The HTML is parsed exactly once and flattened into owned data, so the
//! handle stays `Send` and can cross task boundaries. Analyzers only see
//! the `Document` trait, which lets tests substitute a canned page
//! without touching the network.

use scraper::{Html, Selector};

/// Counts of render-relevant resource tags on a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResourceCounts {
    pub scripts: usize,
    pub images: usize,
    pub stylesheets: usize,
}

impl ResourceCounts {
    pub fn total(&self) -> usize {
        self.scripts + self.images + self.stylesheets
    }
}

/// Capability set the analyzers require from a parsed page.
pub trait Document: Send + Sync {
    /// Text of the first `<title>` element, trimmed.
    fn title(&self) -> Option<&str>;
    /// Content of the first `<meta>` whose `name` or `property` matches.
    fn meta_content(&self, key: &str) -> Option<&str>;
    fn h1_count(&self) -> usize;
    fn h2_count(&self) -> usize;
    fn resource_counts(&self) -> ResourceCounts;
    /// Whether any `<a href="tel:...">` click-to-call link exists.
    fn has_tel_link(&self) -> bool;
    /// All visible text, whitespace-collapsed.
    fn text(&self) -> &str;
    /// Raw page source, for script-signature checks.
    fn raw(&self) -> &str;
}

/// Production document backed by the `scraper` crate.
#[derive(Debug, Clone)]
pub struct PageDocument {
    title: Option<String>,
    metas: Vec<(String, String)>,
    h1_count: usize,
    h2_count: usize,
    resources: ResourceCounts,
    has_tel_link: bool,
    text: String,
    raw: String,
}

fn selector(css: &str) -> Selector {
    // All selectors used here are static and known-valid.
    Selector::parse(css).expect("invalid static selector")
}

impl PageDocument {
    pub fn parse(html: &str) -> Self {
        let dom = Html::parse_document(html);

        let title = dom
            .select(&selector("title"))
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty());

        let metas = dom
            .select(&selector("meta"))
            .filter_map(|el| {
                let key = el
                    .value()
                    .attr("name")
                    .or_else(|| el.value().attr("property"))?;
                let content = el.value().attr("content")?;
                Some((key.to_ascii_lowercase(), content.to_string()))
            })
            .collect();

        let resources = ResourceCounts {
            scripts: dom.select(&selector("script[src]")).count(),
            images: dom.select(&selector("img")).count(),
            stylesheets: dom.select(&selector(r#"link[rel="stylesheet"]"#)).count(),
        };

        let text = dom
            .root_element()
            .text()
            .collect::<Vec<_>>()
            .join(" ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            title,
            metas,
            h1_count: dom.select(&selector("h1")).count(),
            h2_count: dom.select(&selector("h2")).count(),
            resources,
            has_tel_link: dom.select(&selector(r#"a[href^="tel:"]"#)).next().is_some(),
            text,
            raw: html.to_string(),
        }
    }
}

impl Document for PageDocument {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn meta_content(&self, key: &str) -> Option<&str> {
        let key = key.to_ascii_lowercase();
        self.metas
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    fn h1_count(&self) -> usize {
        self.h1_count
    }

    fn h2_count(&self) -> usize {
        self.h2_count
    }

    fn resource_counts(&self) -> ResourceCounts {
        self.resources
    }

    fn has_tel_link(&self) -> bool {
        self.has_tel_link
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn raw(&self) -> &str {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<html><head>
        <title>  City Dental Care | Best Dentist  </title>
        <meta name="description" content="Family dentistry and implants in the city center.">
        <meta property="og:description" content="1,204 Followers, 343 Posts">
        <script src="/app.js"></script>
        <link rel="stylesheet" href="/main.css">
        </head><body>
        <h1>Welcome</h1><h1>Again</h1>
        <h2>Services</h2>
        <img src="/a.png"><img src="/b.png">
        <a href="tel:+15551234567">Call us</a>
        <p>Book an appointment today!</p>
        </body></html>"#;

    #[test]
    fn test_parse_title_trimmed() {
        let doc = PageDocument::parse(SAMPLE);
        assert_eq!(doc.title(), Some("City Dental Care | Best Dentist"));
    }

    #[test]
    fn test_parse_meta_by_name_and_property() {
        let doc = PageDocument::parse(SAMPLE);
        assert_eq!(
            doc.meta_content("description"),
            Some("Family dentistry and implants in the city center.")
        );
        assert_eq!(
            doc.meta_content("og:description"),
            Some("1,204 Followers, 343 Posts")
        );
        assert_eq!(doc.meta_content("og:title"), None);
    }

    #[test]
    fn test_parse_counts() {
        let doc = PageDocument::parse(SAMPLE);
        assert_eq!(doc.h1_count(), 2);
        assert_eq!(doc.h2_count(), 1);
        let res = doc.resource_counts();
        assert_eq!(res.scripts, 1);
        assert_eq!(res.images, 2);
        assert_eq!(res.stylesheets, 1);
        assert_eq!(res.total(), 4);
    }

    #[test]
    fn test_parse_tel_link_and_text() {
        let doc = PageDocument::parse(SAMPLE);
        assert!(doc.has_tel_link());
        assert!(doc.text().contains("Book an appointment today!"));
        assert!(!doc.text().contains("  "));
    }

    #[test]
    fn test_parse_empty_page() {
        let doc = PageDocument::parse("<html><head><title></title></head><body></body></html>");
        assert_eq!(doc.title(), None);
        assert_eq!(doc.h1_count(), 0);
        assert!(!doc.has_tel_link());
    }
}
