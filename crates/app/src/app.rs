use core::num::NonZeroUsize;
use std::time::{Duration, Instant};

use pharmstock_core::{DomainError, DomainResult, MedicineId};
use pharmstock_inventory::{Medicine, MedicineDraft, MedicineStore};
use pharmstock_views::{SortKey, SortSpec, filter, paginate, sort, total_pages};

use crate::debounce::Debounce;
use crate::session::EditSession;

/// Records shown per page in the reference deployment.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// How long raw search input must be quiet before the filter sees it.
pub const SEARCH_QUIESCENCE: Duration = Duration::from_millis(300);

/// The application state: the store plus the view parameters and the edit
/// session, with one method per presentation-layer intent.
///
/// Mutation rights are scoped per component: the store owns the records, the
/// session owns the draft lifecycle, and `App` itself owns the view
/// parameters (query, sort, page). Everything the presentation renders is a
/// pure projection recomputed on demand.
#[derive(Debug, Clone)]
pub struct App {
    store: MedicineStore,
    /// The active (already debounced) query the pipeline filters by.
    query: String,
    search_debounce: Debounce,
    sort: SortSpec,
    page: usize,
    page_size: NonZeroUsize,
    session: EditSession,
}

impl App {
    pub fn new(store: MedicineStore) -> Self {
        Self {
            store,
            query: String::new(),
            search_debounce: Debounce::new(SEARCH_QUIESCENCE),
            sort: SortSpec::default(),
            page: 1,
            page_size: NonZeroUsize::new(DEFAULT_PAGE_SIZE)
                .unwrap_or(NonZeroUsize::MIN),
            session: EditSession::default(),
        }
    }

    /// An app over the reference starting catalog.
    pub fn seeded() -> DomainResult<Self> {
        Ok(Self::new(MedicineStore::with_records(crate::seed::catalog()?)))
    }

    /// Override the page size (the reference deployment uses 8).
    pub fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn store(&self) -> &MedicineStore {
        &self.store
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort_spec(&self) -> SortSpec {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    // --- intents -----------------------------------------------------------

    /// Raw search input changed. The value is held by the debounce; call
    /// [`tick`](App::tick) to deliver it once the input has been quiet for
    /// [`SEARCH_QUIESCENCE`].
    pub fn search_changed(&mut self, text: impl Into<String>, now: Instant) {
        self.search_debounce.input(text, now);
    }

    /// Advance the debounce clock, activating a quiescent query if one is
    /// due. Activating a changed query resets the page to 1, since the page
    /// indexes into a collection that just changed shape.
    pub fn tick(&mut self, now: Instant) {
        if let Some(query) = self.search_debounce.poll(now) {
            if query != self.query {
                tracing::debug!(%query, "search query activated");
                self.query = query;
                self.page = 1;
            }
        }
    }

    /// A column header was clicked: toggle direction on the active key,
    /// select a new key ascending. The page is left alone; sorting permutes
    /// the collection without changing its length.
    pub fn sort_column(&mut self, key: SortKey) {
        self.sort.toggle(key);
        tracing::debug!(sort = ?self.sort, "sort criterion changed");
    }

    /// Navigate to `page`. Requests outside `[1, total_pages]` are rejected
    /// (state unchanged, returns `false`), never clamped: navigation
    /// controls are expected to pre-disable.
    pub fn page_requested(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.total_pages() {
            self.page = page;
            true
        } else {
            tracing::debug!(page, total = self.total_pages(), "page request rejected");
            false
        }
    }

    pub fn open_create(&mut self) {
        self.session.open_create();
    }

    /// Open an edit session on the record with the given id.
    ///
    /// The UI should never hold a stale id, but if it does the store is left
    /// alone and `NotFound` is returned.
    pub fn open_edit(&mut self, id: &MedicineId) -> DomainResult<()> {
        let record = self.store.get(id).ok_or_else(DomainError::not_found)?.clone();
        self.session.open_edit(record);
        Ok(())
    }

    /// Delete intent, already confirmed by the presentation layer.
    pub fn delete_confirmed(&mut self, id: &MedicineId) {
        self.store.remove(id);
    }

    pub fn form_submitted(&mut self, draft: MedicineDraft) -> DomainResult<Medicine> {
        self.session.submit(&mut self.store, draft)
    }

    pub fn form_cancelled(&mut self) {
        self.session.cancel();
    }

    // --- projections -------------------------------------------------------

    /// The filtered collection, before ordering and paging.
    pub fn filtered(&self) -> Vec<Medicine> {
        filter(self.store.list(), &self.query)
    }

    /// The records the table shows: filter → sort → paginate.
    pub fn visible(&self) -> Vec<Medicine> {
        let ordered = sort(&self.filtered(), self.sort);
        paginate(&ordered, self.page_size, self.page)
    }

    /// Page count of the filtered collection.
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.page_size)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(MedicineStore::new())
    }
}
