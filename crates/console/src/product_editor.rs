//! Product create/edit modal state

use catalog_core::{CatalogApi, ConsoleError, ConsoleResult, Product, ProductId, ProductPayload};

// ============================================================================
// Form State
// ============================================================================

/// Raw field values as typed by the user
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub sku: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub active: bool,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            sku: String::new(),
            name: String::new(),
            description: String::new(),
            price: String::new(),
            active: true,
        }
    }
}

impl ProductForm {
    /// Populate from an existing product
    pub fn from_product(product: &Product) -> Self {
        Self {
            sku: product.sku.clone(),
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.to_string(),
            active: product.active,
        }
    }

    /// Check required fields and build the request body.
    ///
    /// A blank description is sent as `null`; the price must parse as a
    /// finite decimal.
    pub fn to_payload(&self) -> ConsoleResult<ProductPayload> {
        if self.sku.trim().is_empty() {
            return Err(ConsoleError::validation("SKU is required"));
        }
        if self.name.trim().is_empty() {
            return Err(ConsoleError::validation("Name is required"));
        }

        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| ConsoleError::validation("Price must be a number"))?;

        let description = if self.description.trim().is_empty() {
            None
        } else {
            Some(self.description.clone())
        };

        Ok(ProductPayload {
            sku: self.sku.clone(),
            name: self.name.clone(),
            description,
            price,
            active: self.active,
        })
    }
}

// ============================================================================
// Submission
// ============================================================================

/// A validated form, routed to create or update
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSubmission {
    pub editing_id: Option<ProductId>,
    pub payload: ProductPayload,
}

impl ProductSubmission {
    pub fn is_update(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn success_message(&self) -> &'static str {
        if self.is_update() {
            "Product updated!"
        } else {
            "Product created!"
        }
    }

    /// PUT when editing, POST otherwise
    pub async fn send<A>(&self, api: &A) -> ConsoleResult<Product>
    where
        A: CatalogApi + ?Sized,
    {
        match self.editing_id {
            Some(id) => api.update_product(id, &self.payload).await,
            None => api.create_product(&self.payload).await,
        }
    }
}

// ============================================================================
// Editor
// ============================================================================

/// The product modal. `editing_id` is set only while editing an existing
/// record and is cleared whenever the modal closes.
#[derive(Debug, Clone, Default)]
pub struct ProductEditor {
    open: bool,
    editing_id: Option<ProductId>,
    /// A save request is in flight
    saving: bool,
    pub form: ProductForm,
}

impl ProductEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh form with `active` checked
    pub fn open_create(&mut self) {
        self.editing_id = None;
        self.form = ProductForm::default();
        self.saving = false;
        self.open = true;
    }

    pub fn open_edit(&mut self, id: ProductId, product: &Product) {
        self.editing_id = Some(id);
        self.form = ProductForm::from_product(product);
        self.saving = false;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.editing_id = None;
        self.saving = false;
    }

    pub fn set_saving(&mut self, saving: bool) {
        self.saving = saving;
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn editing_id(&self) -> Option<ProductId> {
        self.editing_id
    }

    pub fn title(&self) -> &'static str {
        if self.editing_id.is_some() {
            "Edit Product"
        } else {
            "Add Product"
        }
    }

    pub fn submission(&self) -> ConsoleResult<ProductSubmission> {
        Ok(ProductSubmission {
            editing_id: self.editing_id,
            payload: self.form.to_payload()?,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
