/// Fixed page size for the wallet transaction history.
pub const PAGE_SIZE: usize = 50;

/// Parameters for the next history fetch.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PageRequest {
    pub offset: usize,
    pub limit: usize,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum PageState {
    Idle,
    Loading,
}

/// Incremental cursor over the remote transaction collection.
///
/// At most one page request may be outstanding per pager; `begin` while a
/// load is in flight (or after exhaustion) is suppressed, not queued. The
/// offset is supplied by the caller on each `begin`, so the cursor always
/// follows the owned sequence length even after local prepends.
///
/// `has_more` is derived, not server-declared: a full page implies more may
/// exist. A collection whose size is an exact multiple of [`PAGE_SIZE`] costs
/// one extra fetch that returns zero items and terminates on the next call.
#[derive(Debug)]
pub struct Pager {
    state: PageState,
    has_more: bool,
}

impl Pager {
    pub fn new() -> Self {
        Self {
            state: PageState::Idle,
            has_more: true,
        }
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.state == PageState::Loading
    }

    /// Begin a page load at `offset`. Returns `None` when a load is already
    /// in flight or the collection is exhausted.
    pub fn begin(&mut self, offset: usize) -> Option<PageRequest> {
        if self.state == PageState::Loading || !self.has_more {
            return None;
        }

        self.state = PageState::Loading;

        Some(PageRequest {
            offset,
            limit: PAGE_SIZE,
        })
    }

    /// Complete the in-flight load with the number of items received.
    pub fn complete(&mut self, received: usize) {
        self.state = PageState::Idle;
        self.has_more = received == PAGE_SIZE;
    }

    /// Fail the in-flight load. `has_more` is unchanged, so the same page can
    /// be retried.
    pub fn fail(&mut self) {
        self.state = PageState::Idle;
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}
