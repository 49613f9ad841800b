//! The library code for `quire`, which loads the configuration record read by
//! a static blog builder: the site URL and path prefix, the title and other
//! site metadata, the navigation menu, the pagination size, and the author
//! bio block.
//!
//! Loading happens in two steps:
//!
//! 1. Parsing the YAML file into a [`config::SiteConfig`]. Schema problems
//!    such as a missing field or a zero `postsPerPage` are reported here.
//! 2. Checking the parsed record against the invariants in
//!    [`crate::validate`].
//!
//! A [`config::SiteConfig`] is immutable once loaded. The remaining modules
//! derive things from it for the builder: absolute links ([`crate::links`]),
//! index page layout ([`crate::pagination`]), and a template value
//! ([`crate::value`]).

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod config;
pub mod links;
pub mod pagination;
pub mod validate;
pub mod value;

pub use config::{Author, Contacts, MenuEntry, SiteConfig};
