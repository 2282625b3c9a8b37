//! Paytypes Core
//!
//! Typed payload shapes for the payment API object model. Every resource
//! (charges, customers, invoices, subscriptions, issuing objects, events and
//! the rest) is a plain serde struct that reads and writes the exact wire
//! JSON, including the distinction between a missing key and an explicit
//! `null`.
//!
//! Shared vocabulary lives in a few small modules:
//! - [`object`]: the `object` discriminant ([`Tag`]) and deleted stubs
//! - [`presence`]: optional and nullable field handling ([`MaybeNull`])
//! - [`expandable`]: fields that hold either an id or the full object
//! - [`list`]: paginated list and search envelopes
//! - [`object_union!`]: sum types dispatched on `object`

#[macro_use]
mod macros;

pub mod account;
pub mod api_errors;
pub mod balance;
pub mod bank_account;
pub mod card;
pub mod charge;
pub mod checkout;
pub mod common;
pub mod coupon;
pub mod credit_note;
pub mod customer;
pub mod discount;
pub mod dispute;
pub mod error;
pub mod event;
pub mod expandable;
pub mod file;
pub mod ids;
pub mod invoice;
pub mod issuing;
pub mod list;
pub mod mandate;
pub mod object;
pub mod object_union;
pub mod payment_intent;
pub mod payment_method;
pub mod payout;
pub mod presence;
pub mod price;
pub mod refund;
pub mod setup_intent;
pub mod source;
pub mod subscription;
pub mod tax;
pub mod transfer;

pub use error::{Error, Result};
pub use expandable::Expandable;
pub use list::{List, SearchResult};
pub use object::{DeletedFlag, HasId, Metadata, Object, Tag, Timestamp, decode, decode_str};
pub use presence::MaybeNull;

#[doc(hidden)]
pub mod __private {
    pub use schemars;
    pub use serde;
    pub use serde_json;
}
