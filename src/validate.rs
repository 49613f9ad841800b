//! Load-time checks for a [`SiteConfig`]. Schema problems (missing fields,
//! wrong types, a zero page size, an unparseable URL) are caught while
//! deserializing; everything that needs more than one field, or more than a
//! type, to check lives here.
//!
//! The invariants are:
//!
//! * `url` uses the `http` or `https` scheme.
//! * `title` and `author.name` are non-empty.
//! * `pathPrefix` and every menu `path` start with `/` and carry no query,
//!   fragment or whitespace.
//! * menu labels are non-empty and menu paths are unique.
//! * `author.photo` is a rooted path or an `http`/`https` URL.
//! * `author.contacts.email`, if present, looks like `local@domain`.

use crate::config::SiteConfig;
use std::collections::HashSet;
use std::fmt;
use url::Url;

/// Checks `config` against the invariants listed in the module docs,
/// returning the first violation.
pub fn validate(config: &SiteConfig) -> Result<(), ValidationError> {
    web_scheme("url", config.url())?;

    non_empty("title", config.title())?;
    rooted("pathPrefix", config.path_prefix())?;

    let mut seen: HashSet<&str> = HashSet::new();
    for entry in config.menu() {
        non_empty("menu.label", &entry.label)?;
        rooted("menu.path", &entry.path)?;
        if !seen.insert(&entry.path) {
            return Err(ValidationError::DuplicateMenuPath(entry.path.clone()));
        }
    }

    let author = config.author();
    non_empty("author.name", &author.name)?;
    non_empty("author.photo", &author.photo)?;
    match Url::parse(&author.photo) {
        Ok(photo) => web_scheme("author.photo", &photo)?,
        Err(_) => rooted("author.photo", &author.photo)?,
    }

    let email = &author.contacts.email;
    if !email.is_empty() && !is_email(email) {
        return Err(ValidationError::InvalidEmail(email.clone()));
    }

    Ok(())
}

fn non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    match value.trim().is_empty() {
        true => Err(ValidationError::EmptyField(field)),
        false => Ok(()),
    }
}

fn web_scheme(field: &'static str, url: &Url) -> Result<(), ValidationError> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ValidationError::UnsupportedScheme {
            field,
            scheme: scheme.to_owned(),
        }),
    }
}

// `?` and `#` would end the path part of every link built on top of it.
fn rooted(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let clean = !value.contains(|c: char| c == '?' || c == '#' || c.is_whitespace());
    match value.starts_with('/') && clean {
        true => Ok(()),
        false => Err(ValidationError::UnrootedPath {
            field,
            value: value.to_owned(),
        }),
    }
}

fn is_email(s: &str) -> bool {
    let mut parts = s.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !s.contains(char::is_whitespace)
        }
        _ => false,
    }
}

/// A violated configuration invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Returned when a required text field is empty or blank.
    EmptyField(&'static str),

    /// Returned when `url` or an absolute `author.photo` isn't an `http` or
    /// `https` URL.
    UnsupportedScheme { field: &'static str, scheme: String },

    /// Returned when a path field doesn't start with `/` or contains a
    /// query, a fragment or whitespace.
    UnrootedPath { field: &'static str, value: String },

    /// Returned when two menu entries share a path.
    DuplicateMenuPath(String),

    /// Returned when the author's email address is malformed.
    InvalidEmail(String),
}

impl fmt::Display for ValidationError {
    /// Implements [`fmt::Display`] for [`ValidationError`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::EmptyField(field) => write!(f, "`{}` must not be empty", field),
            ValidationError::UnsupportedScheme { field, scheme } => write!(
                f,
                "`{}` must be an http or https URL, found scheme `{}`",
                field, scheme
            ),
            ValidationError::UnrootedPath { field, value } => write!(
                f,
                "`{}` must be a path starting with `/` without `?`, `#` or spaces, found `{}`",
                field, value
            ),
            ValidationError::DuplicateMenuPath(path) => {
                write!(f, "more than one `menu` entry has the path `{}`", path)
            }
            ValidationError::InvalidEmail(email) => {
                write!(f, "`author.contacts.email` is not an email address: `{}`", email)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
