//! Adapter for the Comodo One / Endpoint Manager REST gateway.
//!
//! Three layers: [`DeviceFilters`] builds the `$S` search document,
//! [`normalize`] strips the gateway's assorted response envelopes, and
//! [`Client::execute`] maps an [`OperationRequest`] onto the endpoint table
//! and runs it, paginating exhaustively when asked to return all.

mod client;
mod dispatch;
mod envelope;
mod errors;
mod search;
pub mod types;

pub use self::client::{Client, Credentials};
pub use self::dispatch::{Operation, OperationRequest, Resource};
pub use self::envelope::{normalize, Normalized};
pub use self::errors::Error;
pub use self::search::{parse_id_list, DeviceFilters, SortDirection};
pub use self::types::Region;
