//! Checkout and order commands.

use clap::Args;

use vikoshiya_core::PaymentMethod;
use vikoshiya_storefront::cart::CartStore;
use vikoshiya_storefront::checkout::{CheckoutForm, CheckoutPipeline};
use vikoshiya_storefront::error::AppError;

use super::{CommandError, Context};

/// Checkout form fields, one flag per field.
#[derive(Debug, Args)]
pub struct CheckoutArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub email: String,
    /// 10-digit phone number
    #[arg(long)]
    pub phone: String,
    /// Street address line
    #[arg(long)]
    pub address: String,
    /// Apartment / suite line
    #[arg(long)]
    pub apartment: Option<String>,
    #[arg(long)]
    pub city: String,
    #[arg(long)]
    pub state: String,
    /// 6-digit postal PIN code
    #[arg(long)]
    pub pincode: String,
    /// One of: card, upi, cod
    #[arg(long)]
    pub payment_method: PaymentMethod,
    /// Free-form delivery notes
    #[arg(long)]
    pub notes: Option<String>,
}

impl From<CheckoutArgs> for CheckoutForm {
    fn from(args: CheckoutArgs) -> Self {
        Self {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            phone: args.phone,
            address: args.address,
            apartment: args.apartment,
            city: args.city,
            state: args.state,
            pincode: args.pincode,
            payment_method: Some(args.payment_method),
            notes: args.notes,
        }
    }
}

/// Stage the current cart and place an order.
pub async fn place_order(args: CheckoutArgs) -> Result<(), CommandError> {
    let ctx = Context::from_env()?;
    let policy = ctx.config.shipping_policy;

    let cart = CartStore::load(ctx.storage.clone());
    cart.begin_checkout(policy).map_err(AppError::from)?;

    let pipeline =
        CheckoutPipeline::with_processing_delay(ctx.storage, policy, ctx.config.processing_delay);
    let form = CheckoutForm::from(args);

    tracing::info!("Processing payment...");
    let order = pipeline.place_order(&form).await.map_err(AppError::from)?;

    tracing::info!("Order {} placed", order.id);
    tracing::info!(
        "  {} items | Total {} ({})",
        order.totals.item_count,
        order.totals.total,
        order.payment_method
    );
    Ok(())
}

/// List placed orders, oldest first.
pub fn list_orders() -> Result<(), CommandError> {
    let ctx = Context::from_env()?;
    let pipeline = CheckoutPipeline::new(ctx.storage, ctx.config.shipping_policy);

    let orders = pipeline.orders();
    if orders.is_empty() {
        tracing::info!("No orders yet");
        return Ok(());
    }

    for order in orders {
        tracing::info!(
            "{} | {} | {} {} | {} items | {} | {:?}",
            order.id,
            order.timestamp.format("%Y-%m-%d %H:%M"),
            order.customer.first_name,
            order.customer.last_name,
            order.totals.item_count,
            order.totals.total,
            order.status
        );
    }
    Ok(())
}
