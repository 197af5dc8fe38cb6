//! Link-following pager
//!
//! Drives the two-state pagination protocol: while a next URL is known
//! the pager is `HasNext`; once a page advertises no next link it is
//! `Exhausted` and stops fetching.

use super::types::Page;
use crate::error::Result;
use crate::http::Transport;
use futures::Stream;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, warn};

/// Where the pager is in the walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagerState {
    /// The next fetch goes to this URL
    HasNext(String),
    /// No more pages
    Exhausted,
}

/// Walks a paginated list endpoint page by page
pub struct Pager<P: Page> {
    transport: Arc<dyn Transport>,
    state: PagerState,
    pages_fetched: u64,
    _page: PhantomData<fn() -> P>,
}

impl<P: Page> Pager<P> {
    /// Create a pager starting at `initial_url`
    pub fn new(transport: Arc<dyn Transport>, initial_url: impl Into<String>) -> Self {
        Self {
            transport,
            state: PagerState::HasNext(initial_url.into()),
            pages_fetched: 0,
            _page: PhantomData,
        }
    }

    /// Current state
    pub fn state(&self) -> &PagerState {
        &self.state
    }

    /// Check if every page has been fetched
    pub fn is_exhausted(&self) -> bool {
        self.state == PagerState::Exhausted
    }

    /// Number of pages fetched so far
    pub fn pages_fetched(&self) -> u64 {
        self.pages_fetched
    }

    /// Fetch the next page, or `None` once the pager is exhausted
    ///
    /// A transport error leaves the state untouched, so calling again
    /// re-requests the same URL. A malformed link array exhausts the pager.
    pub async fn next_page(&mut self) -> Result<Option<P>> {
        let url = match &self.state {
            PagerState::HasNext(url) => url.clone(),
            PagerState::Exhausted => return Ok(None),
        };

        debug!(url = %url, page = self.pages_fetched + 1, "Fetching page");
        let raw = self.transport.get(&url).await?;
        let page = P::from_response(raw);
        self.pages_fetched += 1;

        let next = match page.next_page_url() {
            Ok(next) => next,
            Err(e) => {
                self.state = PagerState::Exhausted;
                return Err(e);
            }
        };

        self.state = match next {
            Some(next) if next == url => {
                warn!(url = %url, "Page links to itself as next, stopping");
                PagerState::Exhausted
            }
            Some(next) => PagerState::HasNext(next),
            None => PagerState::Exhausted,
        };

        Ok(Some(page))
    }

    /// Visit pages in order until the handler returns `false`
    ///
    /// Iteration also stops at the first empty page and when no next link
    /// remains. Errors from the transport, decoding or the handler end the
    /// walk and are returned as-is.
    pub async fn each_page<F>(&mut self, mut handler: F) -> Result<()>
    where
        F: FnMut(&P) -> Result<bool>,
    {
        while let Some(page) = self.next_page().await? {
            if page.is_empty()? {
                debug!(pages = self.pages_fetched, "Empty page, stopping");
                break;
            }
            if !handler(&page)? {
                break;
            }
        }
        Ok(())
    }

    /// Turn the pager into a stream of pages
    ///
    /// The stream ends after the last page or right after the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<P>> {
        futures::stream::try_unfold(self, |mut pager| async move {
            let page = pager.next_page().await?;
            Ok(page.map(|page| (page, pager)))
        })
    }
}

impl<P: Page> std::fmt::Debug for Pager<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("state", &self.state)
            .field("pages_fetched", &self.pages_fetched)
            .finish_non_exhaustive()
    }
}
