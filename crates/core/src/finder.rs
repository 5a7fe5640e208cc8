//! The representative lookup capability.
//!
//! Remote clients and caching layers both implement [`RepFinder`], so a
//! cache can stand in for the client without callers noticing.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{Error, Lookup};

/// Finds local representatives for an address.
#[async_trait]
pub trait RepFinder: Send + Sync {
    /// Resolve `address` to its representatives and canonical address.
    async fn get_reps(&self, address: &str) -> Result<Lookup, Error>;
}

#[async_trait]
impl<T: RepFinder + ?Sized> RepFinder for Arc<T> {
    async fn get_reps(&self, address: &str) -> Result<Lookup, Error> {
        (**self).get_reps(address).await
    }
}

#[async_trait]
impl<T: RepFinder + ?Sized> RepFinder for Box<T> {
    async fn get_reps(&self, address: &str) -> Result<Lookup, Error> {
        (**self).get_reps(address).await
    }
}
