//! Client facade.
//!
//! [`Client`] owns everything a call needs: the resolved space, one
//! authenticated transport, and the API and fax domains built on them.
//! Implementation details are split into submodules under `src/client/`.

mod api;
mod core;
mod fax;
mod list;
mod version;

pub use api::{ApiDomain, AvailablePhoneNumbers};
pub use self::core::Client;
pub use fax::FaxDomain;
pub use list::{ResourceContext, ResourceList};
pub use version::{Version, API_VERSION};
