//! Process-wide fallback holder of the active [`DeezerApiClient`].
//!
//! Lets deeply nested resource reloads and pagination continuations reach a
//! client without explicit threading. Explicit dependency passing is the
//! preferred style everywhere in this crate; the registry exists for
//! backward compatibility with the `*_global` entry points.

use crate::client::DeezerApiClient;
use crate::error::DeezerClientError;

use deezer_models::ErrorLocation;

use std::panic::Location;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::debug;
use once_cell::sync::Lazy;

static INSTANCE: Lazy<RwLock<Option<DeezerApiClient>>> = Lazy::new(|| RwLock::new(None));

/// Single-slot registry. All operations are associated functions; the slot
/// itself is process-global.
pub struct GlobalApiClient;

impl GlobalApiClient {
    /// Fills the slot if it is empty, replaces the occupant if it has been
    /// closed, and otherwise leaves it alone.
    ///
    /// Check and set happen under one write lock, so two clients racing for
    /// an empty slot cannot both win.
    pub fn init_if_needed(client: &DeezerApiClient) {
        let mut slot = Self::slot_mut();
        match slot.as_ref() {
            None => {
                debug!("registering global Deezer client");
                *slot = Some(client.clone());
            }
            Some(held) if !held.is_active() => {
                debug!("replacing closed global Deezer client");
                *slot = Some(client.clone());
            }
            Some(_) => {}
        }
    }

    pub fn is_initialized() -> bool {
        Self::slot().is_some()
    }

    /// The registered client, or a configuration error naming the missing
    /// initialization.
    #[track_caller]
    pub fn require_instance() -> Result<DeezerApiClient, DeezerClientError> {
        Self::slot()
            .clone()
            .ok_or_else(|| DeezerClientError::Configuration {
                message: "DeezerApiClient not initialized".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Clears the slot. Primarily for test isolation.
    pub fn reset() {
        *Self::slot_mut() = None;
    }

    /// Clears the slot when `predicate` says so.
    pub fn reset_if(predicate: impl FnOnce() -> bool) {
        if predicate() {
            Self::reset();
        }
    }

    fn slot() -> RwLockReadGuard<'static, Option<DeezerApiClient>> {
        INSTANCE.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn slot_mut() -> RwLockWriteGuard<'static, Option<DeezerApiClient>> {
        INSTANCE.write().unwrap_or_else(PoisonError::into_inner)
    }
}
