//! Product list controller
//!
//! Owns the product table: filters, pagination, the latest applied rows and
//! the modal editor. Loads are sequenced so that a slow, superseded response
//! never overwrites a newer one.

use crate::confirm::{ConfirmGate, ConfirmTarget};
use crate::notify::NotificationQueue;
use crate::pagination::Pagination;
use crate::product_editor::{ProductEditor, ProductSubmission};
use crate::sequence::{RequestSequence, RequestToken};
use catalog_core::{
    BulkDeleteResult, CatalogApi, ConsoleResult, Product, ProductId, ProductPage, ProductQuery,
};

/// Shown when a list request fails
pub const LOAD_FAILED: &str = "Failed to load products";

// ============================================================================
// Filters
// ============================================================================

/// Tri-state filter on the `active` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl ActiveFilter {
    pub const ALL: [ActiveFilter; 3] = [ActiveFilter::All, ActiveFilter::Active, ActiveFilter::Inactive];

    /// Value of the `active` query parameter, `None` meaning omitted
    pub fn as_query(&self) -> Option<bool> {
        match self {
            ActiveFilter::All => None,
            ActiveFilter::Active => Some(true),
            ActiveFilter::Inactive => Some(false),
        }
    }

    /// Value used by the `<select>` element
    pub fn value(&self) -> &'static str {
        match self {
            ActiveFilter::All => "",
            ActiveFilter::Active => "true",
            ActiveFilter::Inactive => "false",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "true" => ActiveFilter::Active,
            "false" => ActiveFilter::Inactive,
            _ => ActiveFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActiveFilter::All => "All Products",
            ActiveFilter::Active => "Active Only",
            ActiveFilter::Inactive => "Inactive Only",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilters {
    pub search: String,
    pub active: ActiveFilter,
}

// ============================================================================
// View Model
// ============================================================================

/// One rendered table row
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub active: bool,
    pub status_label: &'static str,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            sku: product.sku.clone(),
            name: product.name.clone(),
            description: product.display_description().to_string(),
            price: product.display_price(),
            active: product.active,
            status_label: if product.active { "Active" } else { "Inactive" },
        }
    }
}

/// Everything the product table needs to render
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListView {
    pub rows: Vec<ProductRow>,
    pub page_label: String,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub total: u64,
    /// Set when there is nothing to show
    pub empty_message: Option<&'static str>,
}

/// A list request in flight
#[derive(Debug, Clone, PartialEq)]
pub struct LoadTicket {
    pub token: RequestToken,
    pub query: ProductQuery,
}

/// What happened to a list response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer request was issued; the response was dropped
    Stale,
    Failed,
}

// ============================================================================
// Controller
// ============================================================================

#[derive(Debug, Clone)]
pub struct ProductListController {
    filters: ProductFilters,
    /// Search text typed but not yet applied
    search_input: String,
    pagination: Pagination,
    products: Vec<Product>,
    sequence: RequestSequence,
    loading: bool,
    pub editor: ProductEditor,
}

impl ProductListController {
    pub fn new(page_size: u64) -> Self {
        Self {
            filters: ProductFilters::default(),
            search_input: String::new(),
            pagination: Pagination::new(page_size),
            products: Vec::new(),
            sequence: RequestSequence::new(),
            loading: false,
            editor: ProductEditor::new(),
        }
    }

    /// Filters the current rows were loaded with
    pub fn filters(&self) -> &ProductFilters {
        &self.filters
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Query for the current page and filters
    pub fn query(&self) -> ProductQuery {
        ProductQuery::page(self.pagination.page(), self.pagination.page_size())
            .with_search(self.filters.search.clone())
            .with_active(self.filters.active.as_query())
    }

    // ------------------------------------------------------------------------
    // Filters and paging
    // ------------------------------------------------------------------------

    /// Hold the typed text back until [`Self::commit_search`], so a paging
    /// load in between still queries the filters its page belongs to.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
    }

    /// Debounce elapsed: apply the typed text from the first page
    pub fn commit_search(&mut self) {
        self.filters.search = self.search_input.clone();
        self.pagination.reset();
    }

    pub fn set_active_filter(&mut self, filter: ActiveFilter) {
        self.filters.active = filter;
        self.pagination.reset();
    }

    /// Returns whether a reload is needed
    pub fn previous_page(&mut self) -> bool {
        self.pagination.previous()
    }

    /// Returns whether a reload is needed
    pub fn next_page(&mut self) -> bool {
        self.pagination.next()
    }

    // ------------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------------

    pub fn begin_load(&mut self) -> LoadTicket {
        self.loading = true;
        LoadTicket {
            token: self.sequence.next(),
            query: self.query(),
        }
    }

    /// Apply a list response if it is still the newest request
    pub fn finish_load(
        &mut self,
        ticket: &LoadTicket,
        result: ConsoleResult<ProductPage>,
        notes: &mut NotificationQueue,
    ) -> LoadOutcome {
        if !self.sequence.is_latest(ticket.token) {
            tracing::debug!("Dropping stale product page (skip={})", ticket.query.skip);
            return LoadOutcome::Stale;
        }
        self.loading = false;

        match result {
            Ok(page) => {
                tracing::debug!("Loaded {} of {} products", page.products.len(), page.total);
                self.products = page.products;
                self.pagination.set_total(page.total);
                LoadOutcome::Applied
            }
            Err(e) => {
                tracing::warn!("Product load failed: {}", e);
                notes.error(LOAD_FAILED);
                LoadOutcome::Failed
            }
        }
    }

    pub async fn load<A>(&mut self, api: &A, notes: &mut NotificationQueue) -> LoadOutcome
    where
        A: CatalogApi + ?Sized,
    {
        let ticket = self.begin_load();
        let result = api.list_products(&ticket.query).await;
        self.finish_load(&ticket, result, notes)
    }

    pub fn view(&self) -> ProductListView {
        ProductListView {
            rows: self.products.iter().map(ProductRow::from).collect(),
            page_label: self.pagination.label(),
            previous_enabled: self.pagination.has_previous(),
            next_enabled: self.pagination.has_next(),
            total: self.pagination.total(),
            empty_message: self.products.is_empty().then_some("No products found"),
        }
    }

    // ------------------------------------------------------------------------
    // Editor
    // ------------------------------------------------------------------------

    pub fn open_create(&mut self) {
        self.editor.open_create();
    }

    /// Open the editor with a freshly fetched record
    pub fn finish_open_edit(
        &mut self,
        id: ProductId,
        result: ConsoleResult<Product>,
        notes: &mut NotificationQueue,
    ) -> bool {
        match result {
            Ok(product) => {
                self.editor.open_edit(id, &product);
                true
            }
            Err(e) => {
                tracing::warn!("Fetching product {} failed: {}", id, e);
                notes.error("Failed to load product");
                false
            }
        }
    }

    pub async fn open_edit<A>(&mut self, api: &A, id: ProductId, notes: &mut NotificationQueue) -> bool
    where
        A: CatalogApi + ?Sized,
    {
        let result = api.get_product(id).await;
        self.finish_open_edit(id, result, notes)
    }

    /// Report a create/update result. The modal only closes on success.
    pub fn finish_submit(
        &mut self,
        submission: &ProductSubmission,
        result: ConsoleResult<Product>,
        notes: &mut NotificationQueue,
    ) -> bool {
        match result {
            Ok(_) => {
                notes.success(submission.success_message());
                self.editor.close();
                true
            }
            Err(e) => {
                notes.error(e.user_message("Operation failed"));
                false
            }
        }
    }

    /// Validate, send, and reload on success
    pub async fn submit<A>(&mut self, api: &A, notes: &mut NotificationQueue) -> bool
    where
        A: CatalogApi + ?Sized,
    {
        let submission = match self.editor.submission() {
            Ok(submission) => submission,
            Err(e) => {
                notes.error(e.user_message("Operation failed"));
                return false;
            }
        };
        let result = submission.send(api).await;
        if self.finish_submit(&submission, result, notes) {
            self.load(api, notes).await;
            true
        } else {
            false
        }
    }

    // ------------------------------------------------------------------------
    // Deletion
    // ------------------------------------------------------------------------

    pub fn request_delete(&self, id: ProductId, gate: &mut ConfirmGate) -> ConsoleResult<()> {
        gate.request(ConfirmTarget::DeleteProduct(id))
    }

    pub fn request_delete_all(&self, gate: &mut ConfirmGate) -> ConsoleResult<()> {
        gate.request(ConfirmTarget::DeleteAllProducts)
    }

    /// Returns whether the list should be reloaded
    pub fn finish_delete(&mut self, result: ConsoleResult<()>, notes: &mut NotificationQueue) -> bool {
        match result {
            Ok(()) => {
                notes.success("Product deleted!");
                true
            }
            Err(e) => {
                tracing::warn!("Deleting product failed: {}", e);
                notes.error("Delete failed");
                false
            }
        }
    }

    /// Returns whether the list should be reloaded. Success rewinds to page one.
    pub fn finish_delete_all(
        &mut self,
        result: ConsoleResult<BulkDeleteResult>,
        notes: &mut NotificationQueue,
    ) -> bool {
        match result {
            Ok(outcome) => {
                notes.success(format!("Deleted {} products", outcome.deleted));
                self.pagination.reset();
                true
            }
            Err(e) => {
                tracing::warn!("Bulk delete failed: {}", e);
                notes.error("Bulk delete failed");
                false
            }
        }
    }

    pub async fn delete<A>(&mut self, api: &A, id: ProductId, notes: &mut NotificationQueue) -> bool
    where
        A: CatalogApi + ?Sized,
    {
        let result = api.delete_product(id).await;
        let reload = self.finish_delete(result, notes);
        if reload {
            self.load(api, notes).await;
        }
        reload
    }

    pub async fn delete_all<A>(&mut self, api: &A, notes: &mut NotificationQueue) -> bool
    where
        A: CatalogApi + ?Sized,
    {
        let result = api.delete_all_products().await;
        let reload = self.finish_delete_all(result, notes);
        if reload {
            self.load(api, notes).await;
        }
        reload
    }
}

impl Default for ProductListController {
    fn default() -> Self {
        Self::new(50)
    }
}

// ============================================================================
// Tests
// ============================================================================
