//! Pagination module
//!
//! Cursor pagination over Increase list endpoints.
//!
//! # Overview
//!
//! A list call returns a [`Page`], an immutable snapshot of one
//! [`ListEnvelope`] together with the request that produced it. Calling
//! [`Page::next_page`] re-issues that request with `cursor` set to the
//! page's `next_cursor` and yields a [`PageState`]:
//!
//! ```text
//! HasPage --next_page()--> HasPage | Exhausted
//! Exhausted --next_page()--> Exhausted (no request)
//! ```
//!
//! [`AutoPager`] layers item-at-a-time iteration on top.

mod page;
mod pager;
mod types;

pub use page::{Page, PageState};
pub use pager::AutoPager;
pub use types::{ListEnvelope, CURSOR_PARAM};
