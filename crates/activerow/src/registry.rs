//! Connection registry.
//!
//! One `Registry` is constructed at startup, given its connection exactly
//! once by the hosting application, and passed into every record operation.
//! There is no lazy auto-connect and no retry: an operation that reaches an
//! unconfigured registry fails with `Error::NoConnectionRegistered`.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use activerow_core::{Connection, Error, Result};

/// Process-wide holder of the single shared connection handle.
///
/// The registry makes no concurrency promise beyond handing the same `Arc`
/// to every caller; mutual exclusion on the underlying socket is the
/// backend's concern.
pub struct Registry {
    slot: RwLock<Option<Arc<dyn Connection>>>,
}

impl Registry {
    /// Create an unconfigured registry.
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// Store the connection handle, overwriting any previous one, and
    /// return it.
    ///
    /// This is the explicit bootstrap step; the hosting application builds
    /// the connection (typically from a `ConnectionConfig`) and registers
    /// it before any record operation runs.
    pub fn register(&self, connection: Arc<dyn Connection>) -> Arc<dyn Connection> {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        let replaced = slot.replace(Arc::clone(&connection)).is_some();
        tracing::info!(replaced, "registered database connection");
        connection
    }

    /// Get the registered connection.
    ///
    /// Fails with `Error::NoConnectionRegistered` if `register` was never
    /// called.
    pub fn connection(&self) -> Result<Arc<dyn Connection>> {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        slot.as_ref()
            .map(Arc::clone)
            .ok_or(Error::NoConnectionRegistered)
    }

    /// Check whether a connection has been registered.
    pub fn is_registered(&self) -> bool {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        slot.is_some()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("registered", &self.is_registered())
            .finish()
    }
}
