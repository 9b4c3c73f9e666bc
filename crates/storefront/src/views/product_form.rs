//! The new/edit product form.
//!
//! Submission runs: validate, then either show the first violation inline, or
//! send the payload and report the outcome as a toast.

use std::fmt::Display;

use tracing::{error, info, instrument, warn};

use crate::api::{FetchError, StorefrontApi};
use crate::i18n::{I18nError, Translator};
use crate::model::{Category, Product, ProductCreate, ProductId};
use crate::notifications::Toaster;
use crate::validation::{validate_product_form, ProductFormData, Violation};

pub const PRODUCT_CREATED: &str = "Product created";
pub const PRODUCT_UPDATED: &str = "Product updated";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; the reason is in the form's alert.
    Invalid(Violation),
    Saved(Product),
    /// The request failed after validation; an error toast was raised.
    Failed(FetchError),
    /// An earlier submission is still in flight.
    Busy,
}

pub struct ProductForm {
    api: StorefrontApi,
    toaster: Toaster,
    translator: Translator,
    categories: Vec<Category>,
    editing: Option<ProductId>,
    data: ProductFormData,
    alert: Option<String>,
    submitting: bool,
}

impl ProductForm {
    /// An empty form for a new product.
    pub fn new(
        api: StorefrontApi,
        toaster: Toaster,
        translator: Translator,
        categories: Vec<Category>,
    ) -> Self {
        Self {
            api,
            toaster,
            translator,
            categories,
            editing: None,
            data: ProductFormData::default(),
            alert: None,
            submitting: false,
        }
    }

    /// A form pre-filled from `product`; submitting updates it.
    pub fn edit(
        api: StorefrontApi,
        toaster: Toaster,
        translator: Translator,
        categories: Vec<Category>,
        product: &Product,
    ) -> Self {
        Self {
            editing: Some(product.id),
            data: ProductFormData::from_product(product),
            ..Self::new(api, toaster, translator, categories)
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.data.name = name.into();
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        self.data.price = price.into();
    }

    pub fn set_category(&mut self, category_id: impl Into<String>) {
        self.data.category_id = category_id.into();
    }

    pub fn data(&self) -> &ProductFormData {
        &self.data
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn heading(&self) -> Result<&'static str, I18nError> {
        self.translator.label(if self.is_editing() {
            "edit_product"
        } else {
            "new_product"
        })
    }

    /// The category select's options as `(value, label)`.
    pub fn category_options(&self) -> Vec<(String, String)> {
        self.categories
            .iter()
            .map(|c| (c.id.to_string(), c.name.clone()))
            .collect()
    }

    /// Validates the form and, when it passes, marks it submitting.
    ///
    /// The returned request runs without borrowing the form, so the form can be
    /// rendered (with its submit button disabled) while it is in flight. Hand the
    /// result to [`finish_submit`](Self::finish_submit).
    ///
    /// # Errors
    ///
    /// `Invalid` when a field breaks a rule (the reason becomes the alert), `Busy`
    /// while an earlier submission has not finished.
    pub fn start_submit(&mut self) -> Result<PendingSubmit, SubmitOutcome> {
        if self.submitting {
            return Err(SubmitOutcome::Busy);
        }
        self.alert = None;

        let payload = match validate_product_form(&self.data, &self.categories).into_result() {
            Ok(payload) => payload,
            Err(violation) => {
                warn!(field = violation.field, reason = %violation.reason, "Product form rejected");
                self.alert = Some(violation.reason.clone());
                return Err(SubmitOutcome::Invalid(violation));
            }
        };

        self.submitting = true;
        Ok(PendingSubmit {
            api: self.api.clone(),
            editing: self.editing,
            payload,
        })
    }

    /// Clears the submitting state and reports the result as a toast.
    pub fn finish_submit(&mut self, result: Result<Product, FetchError>) -> SubmitOutcome {
        self.submitting = false;

        match result {
            Ok(product) => {
                info!(id = %product.id, "Product saved");
                self.toaster.success(if self.is_editing() {
                    PRODUCT_UPDATED
                } else {
                    PRODUCT_CREATED
                });
                SubmitOutcome::Saved(product)
            }
            Err(e) => {
                error!(error = %e, "Product submission failed");
                self.toaster.error(UNEXPECTED_ERROR);
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Validates, sends and reports in one go.
    #[instrument(skip(self), fields(editing = ?self.editing))]
    pub async fn submit(&mut self) -> SubmitOutcome {
        let pending = match self.start_submit() {
            Ok(pending) => pending,
            Err(outcome) => return outcome,
        };
        let result = pending.send().await;
        self.finish_submit(result)
    }
}

/// A validated payload on its way to the API.
pub struct PendingSubmit {
    api: StorefrontApi,
    editing: Option<ProductId>,
    payload: ProductCreate,
}

impl PendingSubmit {
    pub fn payload(&self) -> &ProductCreate {
        &self.payload
    }

    /// POSTs a new product or PUTs the edited one.
    pub async fn send(self) -> Result<Product, FetchError> {
        match self.editing {
            Some(id) => self.api.update_product(id, &self.payload).await,
            None => self.api.create_product(&self.payload).await,
        }
    }
}

impl Display for ProductForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.heading().unwrap_or("Product"))?;
        writeln!(f, "Name: {}", self.data.name)?;
        writeln!(f, "Price: {}", self.data.price)?;

        let selected = self
            .categories
            .iter()
            .find(|c| c.id.to_string() == self.data.category_id.trim())
            .map_or("Select...", |c| c.name.as_str());
        writeln!(f, "Category: {selected}")?;

        if let Some(alert) = &self.alert {
            writeln!(f, "! {alert}")?;
        }
        f.write_str(if self.submitting {
            "[Submitting...]"
        } else {
            "[Submit]"
        })
    }
}
