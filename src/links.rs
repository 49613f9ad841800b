//! Link generation from the site's `url` and `pathPrefix`.

use crate::config::{MenuEntry, SiteConfig};
use url::{ParseError, Url};

impl SiteConfig {
    /// Returns `path` as a site-relative path under the configured
    /// `pathPrefix`. With a prefix of `/blog`, `/about` becomes
    /// `/blog/about` and `/` becomes `/blog/`.
    pub fn path(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.path_prefix().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Returns the absolute URL for `path`. The path is placed under both the
    /// path of the site `url` and the `pathPrefix`, so a site hosted at
    /// `https://example.org/~jane/` keeps its `~jane` segment.
    pub fn absolute_url(&self, path: &str) -> Result<Url> {
        let mut base = self.url().clone();
        if !base.path().ends_with('/') {
            let dir = format!("{}/", base.path());
            base.set_path(&dir);
        }
        base.join(self.path(path).trim_start_matches('/'))
    }

    /// Pairs each menu entry with its absolute URL, in menu order.
    pub fn menu_urls(&self) -> Result<Vec<(&MenuEntry, Url)>> {
        self.menu()
            .iter()
            .map(|entry| Ok((entry, self.absolute_url(&entry.path)?)))
            .collect()
    }
}

type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod test {
    use super::*;

    fn config(url: &str, prefix: &str) -> SiteConfig {
        SiteConfig::from_str(&format!(
            r#"
url: "{}"
pathPrefix: "{}"
title: "Example"
menu:
  - label: "Articles"
    path: "/"
  - label: "About"
    path: "/pages/about"
author:
  name: "Jane Doe"
  photo: "/photo.png"
  contacts:
    email: "jane@example.org"
"#,
            url, prefix
        ))
        .unwrap()
    }

    fn fixture(url: &str, prefix: &str, path: &str, wanted: &str) -> Result<()> {
        assert_eq!(wanted, config(url, prefix).absolute_url(path)?.as_str());
        Ok(())
    }

    #[test]
    fn test_path_root_prefix() {
        let config = config("https://example.org", "/");
        assert_eq!("/", config.path("/"));
        assert_eq!("/about", config.path("/about"));
        assert_eq!("/about", config.path("about"));
    }

    #[test]
    fn test_path_nested_prefix() {
        let config = config("https://example.org", "/blog/");
        assert_eq!("/blog/", config.path("/"));
        assert_eq!("/blog/about", config.path("/about"));
    }

    #[test]
    fn test_absolute_url_root() -> Result<()> {
        fixture("https://example.org", "/", "/", "https://example.org/")
    }

    #[test]
    fn test_absolute_url_page() -> Result<()> {
        fixture(
            "https://example.org",
            "/",
            "/posts/hello",
            "https://example.org/posts/hello",
        )
    }

    #[test]
    fn test_absolute_url_prefix() -> Result<()> {
        fixture(
            "https://example.org",
            "/blog",
            "/posts/hello",
            "https://example.org/blog/posts/hello",
        )
    }

    #[test]
    fn test_absolute_url_base_path() -> Result<()> {
        fixture(
            "https://example.org/~jane",
            "/blog",
            "/about",
            "https://example.org/~jane/blog/about",
        )
    }

    #[test]
    fn test_absolute_url_redundancies() -> Result<()> {
        fixture(
            "https://example.org",
            "/",
            "/posts/../about",
            "https://example.org/about",
        )
    }

    #[test]
    fn test_menu_urls() -> Result<()> {
        let config = config("https://example.org", "/blog");
        let urls: Vec<(String, String)> = config
            .menu_urls()?
            .into_iter()
            .map(|(entry, url)| (entry.label.clone(), url.to_string()))
            .collect();
        assert_eq!(
            vec![
                (
                    String::from("Articles"),
                    String::from("https://example.org/blog/")
                ),
                (
                    String::from("About"),
                    String::from("https://example.org/blog/pages/about")
                ),
            ],
            urls
        );
        Ok(())
    }
}
