//! Core types for the Vikoshiya storefront.

mod contact;
mod email;
mod id;
mod money;
mod status;

pub use contact::{Phone, PhoneError, Pincode, PincodeError};
pub use email::{Email, EmailError};
pub use id::{OrderId, OrderIdGenerator};
pub use money::Money;
pub use status::{OrderStatus, PaymentMethod};
