//! Resource operations: one method per admin action, layered on
//! [`AdminClient`](crate::client::AdminClient).
//!
//! Each operation builds its payload from the caller's optional inputs and
//! issues exactly one request, apart from the spend aggregation which reuses the
//! team listing.

pub(crate) mod audit;
pub(crate) mod health;
pub(crate) mod keys;
pub(crate) mod teams;
pub(crate) mod users;
