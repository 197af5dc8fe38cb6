//! Pagination module
//!
//! Supports hypermedia-style list endpoints that embed a `{rel, href}`
//! link array in the response body.
//!
//! # Overview
//!
//! A [`Page`] knows two things about the response it wraps: whether it
//! carries any results, and where the next page lives. A [`Pager`] walks
//! pages by following those links until no `next` link remains.

mod pager;
mod types;

pub use pager::{Pager, PagerState};
pub use types::{extract_next_url, linked_next_url, Page, NEXT_REL};
