//! Item-level iteration over pages

use super::page::{Page, PageState};
use crate::codec::ApiObject;
use crate::error::{Error, Result};
use futures::Stream;

/// Walks every item of a listing, fetching pages as needed.
///
/// ```rust,ignore
/// let mut pager = client.account_numbers().list_auto_paging(&params).await?;
/// while let Some(number) = pager.next_item().await? {
///     println!("{:?}", number.id);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AutoPager<T> {
    state: PageState<T>,
    /// Index of the next item to hand out on the current page
    index: usize,
    /// Index of the item last handed out
    current: Option<usize>,
}

impl<T> AutoPager<T> {
    /// Start iterating at the first item of `page`
    pub fn new(page: Page<T>) -> Self {
        Self {
            state: PageState::HasPage(page),
            index: 0,
            current: None,
        }
    }

    /// The item last returned by [`next_item`](Self::next_item)
    pub fn current(&self) -> Option<&T> {
        let index = self.current?;
        self.state.page()?.items().get(index)
    }

    /// The page currently being read
    pub fn page(&self) -> Option<&Page<T>> {
        self.state.page()
    }
}

impl<T> AutoPager<T>
where
    T: ApiObject + Send,
{
    /// Advance to the next item, fetching the next page when the current one
    /// is used up. Returns `None` once the listing ends; a fetched page with
    /// no items also ends it.
    pub async fn next_item(&mut self) -> Result<Option<&T>> {
        loop {
            let next_state = match &self.state {
                PageState::Exhausted => {
                    self.current = None;
                    return Ok(None);
                }
                PageState::HasPage(page) if self.index < page.items().len() => {
                    self.current = Some(self.index);
                    self.index += 1;
                    break;
                }
                PageState::HasPage(page) => page.next_page().await?,
            };

            self.state = match next_state {
                PageState::HasPage(page) if page.items().is_empty() => PageState::Exhausted,
                other => other,
            };
            self.index = 0;
            self.current = None;
        }
        Ok(self.current())
    }

    /// Collect every remaining item
    pub async fn collect_all(mut self) -> Result<Vec<T>>
    where
        T: Clone,
    {
        let mut items = Vec::new();
        while let Some(item) = self.next_item().await? {
            items.push(item.clone());
        }
        Ok(items)
    }

    /// Turn the pager into a stream of owned items
    pub fn into_stream(self) -> impl Stream<Item = Result<T>>
    where
        T: Clone,
    {
        futures::stream::try_unfold(self, |mut pager| async move {
            let item = pager.next_item().await?.cloned();
            Ok::<_, Error>(item.map(|item| (item, pager)))
        })
    }
}

impl<T> From<Page<T>> for AutoPager<T> {
    fn from(page: Page<T>) -> Self {
        Self::new(page)
    }
}
