//! Page wrapper and page state machine

use super::types::{ListEnvelope, CURSOR_PARAM};
use crate::codec::{self, ApiObject};
use crate::error::Result;
use crate::http::{ApiRequest, Transport};
use std::sync::Arc;
use tracing::debug;

/// One page of a list endpoint.
///
/// A page never changes after it is built. Fetching the next page returns
/// a new, independent value.
pub struct Page<T> {
    envelope: ListEnvelope<T>,
    request: ApiRequest,
    transport: Arc<dyn Transport>,
}

impl<T> Page<T>
where
    T: ApiObject + Send,
{
    /// Issue `request` and wrap the decoded envelope
    pub async fn first(transport: Arc<dyn Transport>, request: ApiRequest) -> Result<Self> {
        let body = transport.issue(&request).await?;
        let envelope = codec::decode::<ListEnvelope<T>>(&body)?;
        debug!(
            "Fetched page of {} from {} (has next: {})",
            envelope.data.len(),
            request.path,
            envelope.next_cursor().is_some()
        );
        Ok(Self::new(envelope, request, transport))
    }

    /// Fetch the page after this one.
    ///
    /// Returns [`PageState::Exhausted`] without any I/O when this page has no
    /// cursor. Transport and decode errors propagate unchanged.
    pub async fn next_page(&self) -> Result<PageState<T>> {
        let Some(cursor) = self.envelope.next_cursor() else {
            return Ok(PageState::Exhausted);
        };

        let request = self.request.clone().with_query_param(CURSOR_PARAM, cursor);
        let page = Self::first(Arc::clone(&self.transport), request).await?;
        Ok(PageState::HasPage(page))
    }
}

impl<T> Page<T> {
    /// Wrap an already decoded envelope
    pub fn new(envelope: ListEnvelope<T>, request: ApiRequest, transport: Arc<dyn Transport>) -> Self {
        Self {
            envelope,
            request,
            transport,
        }
    }

    /// Items on this page
    pub fn items(&self) -> &[T] {
        &self.envelope.data
    }

    /// The decoded envelope
    pub fn envelope(&self) -> &ListEnvelope<T> {
        &self.envelope
    }

    /// The request that produced this page
    pub fn request(&self) -> &ApiRequest {
        &self.request
    }

    /// Cursor for the next page, if any
    pub fn next_cursor(&self) -> Option<&str> {
        self.envelope.next_cursor()
    }

    /// True if a further page can be requested
    pub fn has_next_page(&self) -> bool {
        self.next_cursor().is_some()
    }

    /// Consume the page, keeping its items
    pub fn into_items(self) -> Vec<T> {
        self.envelope.data
    }
}

impl<T: Clone> Clone for Page<T> {
    fn clone(&self) -> Self {
        Self {
            envelope: self.envelope.clone(),
            request: self.request.clone(),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Page<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("envelope", &self.envelope)
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

/// Position in a paginated listing
#[derive(Debug, Clone)]
pub enum PageState<T> {
    /// A fetched page, which may or may not have a successor
    HasPage(Page<T>),
    /// Terminal: the previous page had no cursor
    Exhausted,
}

impl<T> PageState<T>
where
    T: ApiObject + Send,
{
    /// Advance to the next state. `Exhausted` stays `Exhausted` and issues
    /// no request.
    pub async fn next_page(&self) -> Result<PageState<T>> {
        match self {
            PageState::HasPage(page) => page.next_page().await,
            PageState::Exhausted => Ok(PageState::Exhausted),
        }
    }
}

impl<T> PageState<T> {
    /// Borrow the page, if any
    pub fn page(&self) -> Option<&Page<T>> {
        match self {
            PageState::HasPage(page) => Some(page),
            PageState::Exhausted => None,
        }
    }

    /// Take the page, if any
    pub fn into_page(self) -> Option<Page<T>> {
        match self {
            PageState::HasPage(page) => Some(page),
            PageState::Exhausted => None,
        }
    }

    /// True once the listing has ended
    pub fn is_exhausted(&self) -> bool {
        matches!(self, PageState::Exhausted)
    }
}

impl<T> From<Page<T>> for PageState<T> {
    fn from(page: Page<T>) -> Self {
        PageState::HasPage(page)
    }
}
