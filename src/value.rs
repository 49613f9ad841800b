//! Converts a [`SiteConfig`] into a template [`Value`] so that a template
//! engine can read the configuration under its configuration-file keys
//! (`.title`, `.postsPerPage`, `.author.contacts.email`, ...).

use crate::config::{Author, MenuEntry, SiteConfig};
use gtmpl_value::Value;
use std::collections::HashMap;

fn string(s: &str) -> Value {
    Value::String(s.to_owned())
}

fn optional(s: Option<&str>) -> Value {
    match s {
        Some(s) => string(s),
        None => Value::Nil,
    }
}

impl From<&MenuEntry> for Value {
    fn from(entry: &MenuEntry) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("label".to_owned(), string(&entry.label));
        m.insert("path".to_owned(), string(&entry.path));
        Value::Object(m)
    }
}

impl From<&Author> for Value {
    fn from(author: &Author) -> Value {
        let mut contacts: HashMap<String, Value> = HashMap::new();
        contacts.insert("email".to_owned(), string(&author.contacts.email));
        contacts.insert("github".to_owned(), string(&author.contacts.handle));

        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("name".to_owned(), string(&author.name));
        m.insert("photo".to_owned(), string(&author.photo));
        m.insert("bio".to_owned(), string(&author.bio));
        m.insert("contacts".to_owned(), Value::Object(contacts));
        Value::Object(m)
    }
}

impl From<&SiteConfig> for Value {
    /// Builds a [`Value::Object`]. Unset optional fields become
    /// [`Value::Nil`] so `{{ if .disqusShortname }}` behaves as expected.
    fn from(config: &SiteConfig) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("url".to_owned(), string(config.url().as_str()));
        m.insert("pathPrefix".to_owned(), string(config.path_prefix()));
        m.insert("title".to_owned(), string(config.title()));
        m.insert("subtitle".to_owned(), string(config.subtitle()));
        m.insert("copyright".to_owned(), string(config.copyright()));
        m.insert(
            "disqusShortname".to_owned(),
            optional(config.disqus_shortname()),
        );
        m.insert(
            "postsPerPage".to_owned(),
            Value::from(config.posts_per_page() as u64),
        );
        m.insert(
            "googleAnalyticsId".to_owned(),
            optional(config.google_analytics_id()),
        );
        m.insert(
            "menu".to_owned(),
            Value::Array(config.menu().iter().map(Value::from).collect()),
        );
        m.insert("author".to_owned(), Value::from(config.author()));
        Value::Object(m)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::Path;

    fn fixture(name: &str) -> SiteConfig {
        SiteConfig::from_file(
            &Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("test-data")
                .join(name),
        )
        .unwrap()
    }

    fn render(template: &str, config: &SiteConfig) -> String {
        gtmpl::template(template, Value::from(config)).unwrap()
    }

    #[test]
    fn test_nested_fields() {
        let config = fixture("quire.yaml");
        assert_eq!(
            "Quynh Nguyen <quynhnguyen895@utexas.edu> qn895",
            render(
                "{{ .author.name }} <{{ .author.contacts.email }}> {{ .author.contacts.github }}",
                &config
            )
        );
    }

    #[test]
    fn test_menu() {
        let config = fixture("quire-20.yaml");
        assert_eq!(
            "Articles=/;About me=/pages/about;Contact me=/pages/contacts;",
            render("{{ range .menu }}{{ .label }}={{ .path }};{{ end }}", &config)
        );
    }

    #[test]
    fn test_comments_toggle() {
        let template = "{{ if .disqusShortname }}on{{ else }}off{{ end }}";
        assert_eq!("off", render(template, &fixture("quire.yaml")));
        assert_eq!("on", render(template, &fixture("quire-20.yaml")));
    }

    #[test]
    fn test_posts_per_page() {
        assert_eq!("10", render("{{ .postsPerPage }}", &fixture("quire-10.yaml")));
    }
}
