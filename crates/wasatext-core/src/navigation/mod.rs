//! Client-side navigation: fragment to view resolution.
//!
//! The table is a stateless lookup. Navigation events (link activation,
//! back/forward, programmatic redirects) are owned by the front end, which
//! calls [`RouteTable::resolve`] on each of them.

mod canonical;
mod error;
mod table;

pub use canonical::{CANONICAL_ROUTES_VERSION, DEFAULT_VIEW};
pub use error::RouteError;
pub use table::{RouteEntry, RouteTable, RouteTableBuilder, fragment_of};
