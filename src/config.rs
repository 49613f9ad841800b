//! Defines [`SiteConfig`], the record of site metadata read by the static
//! site builder, along with the logic for locating and loading it from disk.
//!
//! A configuration is only ever handed out after it has passed
//! [`crate::validate::validate`], and it exposes no setters, so every
//! [`SiteConfig`] in circulation satisfies the invariants documented there.

use crate::validate::{validate, ValidationError};
use log::{debug, info};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::TryFrom;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use url::Url;

/// The name of the file searched for by [`SiteConfig::from_directory`].
pub const CONFIG_FILE_NAME: &str = "quire.yaml";

/// The number of posts on each index page. Zero is rejected when the value
/// is deserialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(usize);

impl PageSize {
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize(10)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = String;

    fn try_from(n: usize) -> std::result::Result<Self, Self::Error> {
        match n {
            0 => Err(String::from(
                "postsPerPage must be a positive integer, found 0",
            )),
            n => Ok(PageSize(n)),
        }
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> usize {
        size.0
    }
}

/// A navigation link.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MenuEntry {
    pub label: String,
    pub path: String,
}

/// The author's contact details.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Contacts {
    #[serde(default)]
    pub email: String,

    /// The author's account handle. Written as `github` in configuration
    /// files; `handle` is accepted as well.
    #[serde(default, rename = "github", alias = "handle")]
    pub handle: String,
}

/// The data for the author bio block.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Author {
    pub name: String,
    pub photo: String,

    #[serde(default)]
    pub bio: String,

    pub contacts: Contacts,
}

/// The site configuration. Construct one with [`SiteConfig::from_str`],
/// [`SiteConfig::from_reader`], [`SiteConfig::from_file`] or
/// [`SiteConfig::from_directory`]. Deserializing a [`SiteConfig`] directly
/// runs the same validation.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", try_from = "RawSiteConfig")]
pub struct SiteConfig {
    url: Url,
    path_prefix: String,
    title: String,
    subtitle: String,
    copyright: String,

    #[serde(serialize_with = "none_as_empty")]
    disqus_shortname: Option<String>,

    posts_per_page: PageSize,

    #[serde(serialize_with = "none_as_empty")]
    google_analytics_id: Option<String>,

    menu: Vec<MenuEntry>,
    author: Author,
}

/// The schema of a configuration file before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSiteConfig {
    url: Url,

    #[serde(default = "default_path_prefix")]
    path_prefix: String,

    title: String,

    #[serde(default)]
    subtitle: String,

    #[serde(default)]
    copyright: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    disqus_shortname: Option<String>,

    #[serde(default)]
    posts_per_page: PageSize,

    #[serde(default, deserialize_with = "empty_as_none")]
    google_analytics_id: Option<String>,

    #[serde(default)]
    menu: Vec<MenuEntry>,

    author: Author,
}

impl TryFrom<RawSiteConfig> for SiteConfig {
    type Error = ValidationError;

    fn try_from(raw: RawSiteConfig) -> std::result::Result<Self, Self::Error> {
        let config = SiteConfig {
            url: raw.url,
            path_prefix: raw.path_prefix,
            title: raw.title,
            subtitle: raw.subtitle,
            copyright: raw.copyright,
            disqus_shortname: raw.disqus_shortname,
            posts_per_page: raw.posts_per_page,
            google_analytics_id: raw.google_analytics_id,
            menu: raw.menu,
            author: raw.author,
        };
        validate(&config)?;
        Ok(config)
    }
}

fn default_path_prefix() -> String {
    String::from("/")
}

// Blank values mean "disabled"; anything else is kept as written.
fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
}

fn none_as_empty<S>(value: &Option<String>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}

impl SiteConfig {
    /// Parses and validates a configuration from YAML text.
    pub fn from_str(input: &str) -> Result<SiteConfig> {
        let raw: RawSiteConfig =
            serde_yaml::from_str(input).map_err(|err| Error::Parse { path: None, err })?;
        SiteConfig::validated(raw, None)
    }

    /// Parses and validates a configuration from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<SiteConfig> {
        let raw: RawSiteConfig =
            serde_yaml::from_reader(reader).map_err(|err| Error::Parse { path: None, err })?;
        SiteConfig::validated(raw, None)
    }

    /// Loads a configuration file. Errors are annotated with `path`.
    pub fn from_file(path: &Path) -> Result<SiteConfig> {
        let file = File::open(path).map_err(|err| Error::Open {
            path: path.to_owned(),
            err,
        })?;
        let raw: RawSiteConfig = serde_yaml::from_reader(file).map_err(|err| Error::Parse {
            path: Some(path.to_owned()),
            err,
        })?;
        let config = SiteConfig::validated(raw, Some(path))?;
        info!(
            "Loaded configuration for `{}` from `{}`",
            config.title,
            path.display()
        );
        Ok(config)
    }

    /// Looks for [`CONFIG_FILE_NAME`] in `dir` and then in each of its
    /// ancestors, loading the first one found.
    pub fn from_directory(dir: &Path) -> Result<SiteConfig> {
        for candidate in dir.ancestors() {
            let path = candidate.join(CONFIG_FILE_NAME);
            debug!("Looking for configuration at `{}`", path.display());
            if path.is_file() {
                return SiteConfig::from_file(&path);
            }
        }
        Err(Error::NotFound {
            start: dir.to_owned(),
        })
    }

    /// Serializes the configuration back to YAML using the same keys it was
    /// read with.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(Error::Serialize)
    }

    fn validated(raw: RawSiteConfig, path: Option<&Path>) -> Result<SiteConfig> {
        SiteConfig::try_from(raw).map_err(|err| Error::Invalid {
            path: path.map(Path::to_owned),
            err,
        })
    }

    /// The base URL used for absolute links.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The path under which the site is served, e.g. `/` or `/blog`.
    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    /// The comment widget identifier, if comments are enabled.
    pub fn disqus_shortname(&self) -> Option<&str> {
        self.disqus_shortname.as_deref()
    }

    pub fn comments_enabled(&self) -> bool {
        self.disqus_shortname.is_some()
    }

    pub fn posts_per_page(&self) -> usize {
        self.posts_per_page.get()
    }

    pub fn google_analytics_id(&self) -> Option<&str> {
        self.google_analytics_id.as_deref()
    }

    pub fn analytics_enabled(&self) -> bool {
        self.google_analytics_id.is_some()
    }

    /// The navigation menu in display order.
    pub fn menu(&self) -> &[MenuEntry] {
        &self.menu
    }

    pub fn author(&self) -> &Author {
        &self.author
    }
}

type Result<T> = std::result::Result<T, Error>;

/// The error type for loading a [`SiteConfig`].
#[derive(Debug)]
pub enum Error {
    /// Returned when the configuration file can't be opened.
    Open { path: PathBuf, err: io::Error },

    /// Returned when the input isn't YAML or doesn't match the schema (a
    /// required field is missing, a field has the wrong type, or
    /// `postsPerPage` is zero). `path` is `None` for in-memory input.
    Parse {
        path: Option<PathBuf>,
        err: serde_yaml::Error,
    },

    /// Returned when the input matches the schema but breaks one of the
    /// configuration's invariants.
    Invalid {
        path: Option<PathBuf>,
        err: ValidationError,
    },

    /// Returned when [`SiteConfig::from_directory`] reaches the filesystem
    /// root without finding a configuration file.
    NotFound { start: PathBuf },

    /// Returned when the configuration can't be serialized.
    Serialize(serde_yaml::Error),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Open { path, err } => {
                write!(f, "Opening configuration file '{}': {}", path.display(), err)
            }
            Error::Parse { path: Some(path), err } => {
                write!(f, "Parsing configuration file '{}': {}", path.display(), err)
            }
            Error::Parse { path: None, err } => write!(f, "Parsing configuration: {}", err),
            Error::Invalid { path: Some(path), err } => {
                write!(f, "Invalid configuration file '{}': {}", path.display(), err)
            }
            Error::Invalid { path: None, err } => write!(f, "Invalid configuration: {}", err),
            Error::NotFound { start } => write!(
                f,
                "Could not find `{}` in '{}' or any parent directory",
                CONFIG_FILE_NAME,
                start.display()
            ),
            Error::Serialize(err) => write!(f, "Serializing configuration: {}", err),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Open { path: _, err } => Some(err),
            Error::Parse { path: _, err } => Some(err),
            Error::Invalid { path: _, err } => Some(err),
            Error::NotFound { start: _ } => None,
            Error::Serialize(err) => Some(err),
        }
    }
}
