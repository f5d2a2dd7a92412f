//! State machine behind the "load more" listings.
//!
//! A listing starts on page 1 and only ever grows: every `request_more` adds
//! exactly one page, so no page number is requested twice. Each requested page
//! owns a slot that records how its fetch ended. The listing is exhausted as
//! soon as a successfully loaded page came back with fewer than `page_size`
//! items.

/// Outcome of one page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Pending,
    /// The page rendered this many items.
    Loaded(usize),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerState {
    query: String,
    page_size: u32,
    slots: Vec<SlotState>,
    all_loaded: bool,
}

impl PagerState {
    /// `query` is the listing URL without `page` and `page_size`.
    pub fn new(query: impl Into<String>, page_size: u32) -> Self {
        Self {
            query: query.into(),
            page_size: page_size.max(1),
            slots: vec![SlotState::Pending],
            all_loaded: false,
        }
    }

    /// Highest page requested so far.
    pub fn page(&self) -> u32 {
        self.slots.len() as u32
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn all_loaded(&self) -> bool {
        self.all_loaded
    }

    pub fn slot(&self, page: u32) -> Option<SlotState> {
        let index = (page as usize).checked_sub(1)?;
        self.slots.get(index).copied()
    }

    /// Fully qualified URL of `page`.
    pub fn page_url(&self, page: u32) -> String {
        page_url(&self.query, page, self.page_size)
    }

    /// Every requested page with its URL, in page order.
    pub fn pages(&self) -> impl Iterator<Item = (u32, String)> + '_ {
        (1..=self.page()).map(|page| (page, self.page_url(page)))
    }

    /// Requests the next page and returns its number.
    pub fn request_more(&mut self) -> u32 {
        self.slots.push(SlotState::Pending);
        self.recompute();
        self.page()
    }

    /// Records that `page` rendered `count` items. Unknown pages are ignored.
    pub fn record_loaded(&mut self, page: u32, count: usize) {
        self.set_slot(page, SlotState::Loaded(count));
    }

    /// Records that fetching `page` failed. The slot stays failed for good.
    pub fn record_failed(&mut self, page: u32) {
        self.set_slot(page, SlotState::Failed);
    }

    /// Items rendered across every loaded page.
    pub fn rendered_items(&self) -> usize {
        self.slots
            .iter()
            .map(|slot| match slot {
                SlotState::Loaded(count) => *count,
                _ => 0,
            })
            .sum()
    }

    fn set_slot(&mut self, page: u32, state: SlotState) {
        let Some(index) = (page as usize).checked_sub(1) else {
            return;
        };
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = state;
            self.recompute();
        }
    }

    fn recompute(&mut self) {
        let loaded_pages = self
            .slots
            .iter()
            .filter(|slot| matches!(slot, SlotState::Loaded(_)))
            .count();
        let expected = loaded_pages * self.page_size as usize;
        self.all_loaded = self.rendered_items() < expected;
    }
}

/// Appends the pagination parameters to `query`, keeping any filter it
/// already carries.
pub fn page_url(query: &str, page: u32, page_size: u32) -> String {
    let separator = if query.ends_with('?') || query.ends_with('&') {
        ""
    } else if query.contains('?') {
        "&"
    } else {
        "?"
    };
    format!("{query}{separator}page={page}&page_size={page_size}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_parameters_to_bare_and_filtered_queries() {
        assert_eq!(
            page_url("/api/contexts", 1, 100),
            "/api/contexts?page=1&page_size=100"
        );
        assert_eq!(
            page_url("/api/sources?source_kind_id=2", 3, 50),
            "/api/sources?source_kind_id=2&page=3&page_size=50"
        );
        assert_eq!(page_url("/api/x?", 1, 10), "/api/x?page=1&page_size=10");
    }

    #[test]
    fn starts_on_first_page() {
        let pager = PagerState::new("/api/contexts", 100);
        assert_eq!(pager.page(), 1);
        assert!(!pager.all_loaded());
        assert_eq!(pager.slot(1), Some(SlotState::Pending));
        assert_eq!(pager.slot(0), None);
    }

    #[test]
    fn empty_first_page_is_immediately_exhausted() {
        let mut pager = PagerState::new("/api/contexts", 100);
        pager.record_loaded(1, 0);
        assert!(pager.all_loaded());
        assert_eq!(pager.rendered_items(), 0);
    }

    #[test]
    fn short_last_page_ends_the_listing_for_good() {
        let mut pager = PagerState::new("/api/contexts", 100);
        pager.record_loaded(1, 100);
        assert!(!pager.all_loaded());

        assert_eq!(pager.request_more(), 2);
        assert!(!pager.all_loaded());
        pager.record_loaded(2, 100);
        assert!(!pager.all_loaded());

        assert_eq!(pager.request_more(), 3);
        pager.record_loaded(3, 42);
        assert!(pager.all_loaded());
        assert_eq!(pager.rendered_items(), 242);

        pager.request_more();
        assert!(pager.all_loaded());
        pager.record_loaded(4, 0);
        assert!(pager.all_loaded());
    }

    #[test]
    fn full_last_page_keeps_offering_more() {
        let mut pager = PagerState::new("/api/contexts", 100);
        pager.record_loaded(1, 100);
        pager.request_more();
        pager.record_loaded(2, 100);
        assert!(!pager.all_loaded());
    }

    #[test]
    fn never_requests_a_page_twice() {
        let mut pager = PagerState::new("/api/status_lemmata?status_val=staged", 10);
        for _ in 0..4 {
            pager.request_more();
        }
        let urls: Vec<String> = pager.pages().map(|(_, url)| url).collect();
        assert_eq!(urls.len(), 5);
        let mut unique = urls.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), urls.len());
        assert_eq!(
            urls[4],
            "/api/status_lemmata?status_val=staged&page=5&page_size=10"
        );
    }

    #[test]
    fn failed_page_does_not_end_the_listing() {
        let mut pager = PagerState::new("/api/contexts", 100);
        pager.record_loaded(1, 100);
        pager.request_more();
        pager.record_failed(2);
        assert!(!pager.all_loaded());
        assert_eq!(pager.slot(2), Some(SlotState::Failed));

        assert_eq!(pager.request_more(), 3);
        pager.record_loaded(3, 7);
        assert!(pager.all_loaded());
    }

    #[test]
    fn pages_resolving_out_of_order_are_counted_once_each() {
        let mut pager = PagerState::new("/api/contexts", 2);
        pager.request_more();
        pager.request_more();
        pager.record_loaded(3, 1);
        assert!(pager.all_loaded());
        pager.record_loaded(1, 2);
        pager.record_loaded(2, 2);
        assert!(pager.all_loaded());
        assert_eq!(pager.rendered_items(), 5);
    }

    #[test]
    fn unknown_pages_are_ignored() {
        let mut pager = PagerState::new("/api/contexts", 100);
        pager.record_loaded(0, 3);
        pager.record_loaded(9, 3);
        assert_eq!(pager.rendered_items(), 0);
        assert!(!pager.all_loaded());
    }
}
