//! Checkout pipeline.
//!
//! Validates the checkout form, simulates payment processing, and turns
//! the staged cart snapshot into a persisted order. The pipeline is a
//! small state machine; the double-submit guard lives in its interior
//! state so two handles to the same pipeline cannot place the same order
//! twice.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::Utc;
use thiserror::Error;

use vikoshiya_core::{
    Email, EmailError, OrderIdGenerator, OrderStatus, PaymentMethod, Phone, PhoneError, Pincode,
    PincodeError,
};

use crate::models::{Address, CartSnapshot, Customer, Order};
use crate::pricing::{self, ShippingPolicy};
use crate::storage::{self, KeyValueStore, StorageError, keys};

/// How long the simulated payment processor takes.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_secs(2);

/// Raw checkout form input, as captured from the shopper.
///
/// Everything is a string at this stage; [`CheckoutPipeline::place_order`]
/// parses and validates field by field.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub apartment: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub payment_method: Option<PaymentMethod>,
    pub notes: Option<String>,
}

/// Why an order could not be placed.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// A required form field was left blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The email field did not parse.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The phone field was not 10 digits.
    #[error("invalid phone: {0}")]
    InvalidPhone(#[from] PhoneError),

    /// The pincode field was not 6 digits.
    #[error("invalid pincode: {0}")]
    InvalidPincode(#[from] PincodeError),

    /// No payment method was selected.
    #[error("no payment method selected")]
    NoPaymentMethod,

    /// There is nothing to order: no staged snapshot and an empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// Another submission is already in flight on this pipeline.
    #[error("an order submission is already in progress")]
    AlreadySubmitting,

    /// A storage read or write failed mid-pipeline.
    #[error("storage failure during checkout: {0}")]
    Storage(#[from] StorageError),
}

/// Where the pipeline currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutState {
    /// Ready to accept a submission.
    #[default]
    Idle,
    /// A submission is in flight; further submissions are rejected.
    Submitting,
    /// The last submission produced an order.
    Completed,
    /// The last submission failed after validation; retrying is allowed.
    Failed,
}

struct PipelineInner {
    state: CheckoutState,
    id_gen: OrderIdGenerator,
}

/// The checkout state machine.
///
/// Shared via `Arc`; all methods take `&self`.
pub struct CheckoutPipeline {
    storage: Arc<dyn KeyValueStore>,
    policy: ShippingPolicy,
    processing_delay: Duration,
    inner: Mutex<PipelineInner>,
}

impl CheckoutPipeline {
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>, policy: ShippingPolicy) -> Self {
        Self::with_processing_delay(storage, policy, DEFAULT_PROCESSING_DELAY)
    }

    #[must_use]
    pub fn with_processing_delay(
        storage: Arc<dyn KeyValueStore>,
        policy: ShippingPolicy,
        processing_delay: Duration,
    ) -> Self {
        Self {
            storage,
            policy,
            processing_delay,
            inner: Mutex::new(PipelineInner {
                state: CheckoutState::Idle,
                id_gen: OrderIdGenerator::new(),
            }),
        }
    }

    /// Current pipeline state.
    #[must_use]
    pub fn state(&self) -> CheckoutState {
        self.lock().state
    }

    /// The persisted order log, oldest first. Fail-soft: absent or
    /// malformed content reads as empty.
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        storage::read_or_default(self.storage.as_ref(), keys::ORDERS)
    }

    /// Validate `form` and place an order for the staged cart snapshot.
    ///
    /// Validation happens before the pipeline enters `Submitting`, so a
    /// rejected form never blocks a concurrent valid submission. After
    /// validation the pipeline sleeps for the configured processing
    /// delay, appends the order to the persisted log, and clears the
    /// cart and the staged snapshot.
    ///
    /// # Errors
    ///
    /// Field errors are reported in form order: each required field is
    /// checked for presence first, then email, phone, and pincode
    /// formats, then payment-method selection. After that,
    /// [`CheckoutError::EmptyCart`] if there is nothing to order,
    /// [`CheckoutError::AlreadySubmitting`] if a submission is in
    /// flight, and [`CheckoutError::Storage`] if persisting the order
    /// fails (the pipeline then rests in `Failed` and may be retried;
    /// the cart is left intact).
    pub async fn place_order(&self, form: &CheckoutForm) -> Result<Order, CheckoutError> {
        let (customer, payment_method, notes) = validate_form(form)?;

        let snapshot = self.staged_snapshot()?;

        {
            let mut inner = self.lock();
            if inner.state == CheckoutState::Submitting {
                return Err(CheckoutError::AlreadySubmitting);
            }
            inner.state = CheckoutState::Submitting;
        }

        tracing::info!(email = %customer.email, %payment_method, "processing order");
        tokio::time::sleep(self.processing_delay).await;

        // Recompute with the chosen payment method so a COD fee lands in
        // the stored totals even though the staged snapshot has none.
        let totals = pricing::compute_totals(&snapshot.items, Some(payment_method), self.policy);

        let now = Utc::now();
        let id = self.lock().id_gen.next(now);
        let order = Order {
            id,
            timestamp: now,
            customer,
            items: snapshot.items,
            totals,
            payment_method,
            notes,
            status: OrderStatus::Pending,
        };

        if let Err(error) = self.append_order(&order) {
            tracing::warn!(%error, "order could not be persisted");
            self.lock().state = CheckoutState::Failed;
            return Err(error);
        }

        // Order is durable; releasing the cart is best-effort.
        if let Err(error) = self.storage.remove(keys::CART) {
            tracing::warn!(%error, "failed to clear cart after checkout");
        }
        if let Err(error) = self.storage.remove(keys::CHECKOUT_DATA) {
            tracing::warn!(%error, "failed to clear checkout data");
        }

        self.lock().state = CheckoutState::Completed;
        tracing::info!(id = %order.id, total = %order.totals.total, "order placed");
        Ok(order)
    }

    /// The staged snapshot, or a fresh one built from the persisted cart
    /// when checkout was reached without an explicit handoff.
    fn staged_snapshot(&self) -> Result<CartSnapshot, CheckoutError> {
        if let Some(raw) = self.storage.get(keys::CHECKOUT_DATA)? {
            match serde_json::from_str::<CartSnapshot>(&raw) {
                Ok(snapshot) if !snapshot.items.is_empty() => return Ok(snapshot),
                Ok(_) => {}
                Err(error) => {
                    tracing::warn!(%error, "ignoring malformed checkout data");
                }
            }
        }

        let items: Vec<crate::models::LineItem> =
            storage::read_or_default(self.storage.as_ref(), keys::CART);
        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let totals = pricing::compute_totals(&items, None, self.policy);
        Ok(CartSnapshot {
            items,
            totals,
            timestamp: Utc::now(),
        })
    }

    fn append_order(&self, order: &Order) -> Result<(), CheckoutError> {
        let mut orders: Vec<Order> = storage::read_or_default(self.storage.as_ref(), keys::ORDERS);
        orders.push(order.clone());
        storage::write_json(self.storage.as_ref(), keys::ORDERS, &orders)?;
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, PipelineInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Field-by-field form validation, in display order.
fn validate_form(
    form: &CheckoutForm,
) -> Result<(Customer, PaymentMethod, Option<String>), CheckoutError> {
    let required: [(&'static str, &str); 8] = [
        ("firstName", &form.first_name),
        ("lastName", &form.last_name),
        ("email", &form.email),
        ("phone", &form.phone),
        ("address", &form.address),
        ("city", &form.city),
        ("state", &form.state),
        ("pincode", &form.pincode),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(CheckoutError::MissingField(name));
        }
    }

    let email = Email::parse(&form.email)?;
    let phone = Phone::parse(&form.phone)?;
    let pincode = Pincode::parse(&form.pincode)?;

    let payment_method = form.payment_method.ok_or(CheckoutError::NoPaymentMethod)?;

    let customer = Customer {
        first_name: form.first_name.trim().to_owned(),
        last_name: form.last_name.trim().to_owned(),
        email,
        phone,
        address: Address {
            street: form.address.trim().to_owned(),
            apartment: form
                .apartment
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned),
            city: form.city.trim().to_owned(),
            state: form.state.trim().to_owned(),
            pincode,
            country: "India".to_owned(),
        },
    };
    let notes = form
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned);

    Ok((customer, payment_method, notes))
}
