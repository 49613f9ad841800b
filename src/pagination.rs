//! Splits a list of posts into index pages of `postsPerPage` posts each. The
//! first index page lives at the site root (`{pathPrefix}/`) and the rest at
//! `{pathPrefix}/page/{n}`.

use crate::config::SiteConfig;
use std::ops::Range;

/// The index pages for a given number of posts.
pub struct Pagination<'a> {
    config: &'a SiteConfig,
    total_posts: usize,
}

/// A single index page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    /// The zero-based page number.
    pub index: usize,

    /// The indices of the posts on this page.
    pub posts: Range<usize>,

    /// The site-relative path of this page.
    pub path: String,

    /// The path of the previous page, if any.
    pub prev: Option<String>,

    /// The path of the next page, if any.
    pub next: Option<String>,
}

impl SiteConfig {
    /// Paginates `total_posts` posts using the configured page size.
    pub fn paginate(&self, total_posts: usize) -> Pagination<'_> {
        Pagination {
            config: self,
            total_posts,
        }
    }
}

impl<'a> Pagination<'a> {
    /// The number of index pages. There is always at least one page, even
    /// when there are no posts.
    pub fn page_count(&self) -> usize {
        let page_size = self.config.posts_per_page();
        match self.total_posts % page_size {
            0 => std::cmp::max(1, self.total_posts / page_size),
            _ => self.total_posts / page_size + 1,
        }
    }

    /// The site-relative path of page `index`.
    pub fn page_path(&self, index: usize) -> String {
        match index {
            0 => self.config.path("/"),
            i => self.config.path(&format!("/page/{}", i)),
        }
    }

    /// Iterates over the index pages in order.
    pub fn pages(&self) -> impl Iterator<Item = Page> + '_ {
        let page_size = self.config.posts_per_page();
        let total_pages = self.page_count();
        (0..total_pages).map(move |i| {
            let start = i * page_size;
            Page {
                index: i,
                posts: start..std::cmp::min(start.saturating_add(page_size), self.total_posts),
                path: self.page_path(i),
                prev: match i {
                    0 => None,
                    _ => Some(self.page_path(i - 1)),
                },
                next: match i < total_pages - 1 {
                    false => None,
                    true => Some(self.page_path(i + 1)),
                },
            }
        })
    }
}
