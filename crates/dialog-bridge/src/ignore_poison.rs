//! Extension trait to ignore mutex poisoning.
//!
//! The bridge's mutexes only hold the installed actor and per-thread string slots,
//! where a panic elsewhere leaves nothing half-written.

use std::sync::{Mutex, MutexGuard};

pub(crate) trait IgnorePoison<T> {
    /// Locks the mutex, taking the guard back from a poisoned lock.
    fn lock_ignore_poison(&self) -> MutexGuard<'_, T>;
}

impl<T> IgnorePoison<T> for Mutex<T> {
    fn lock_ignore_poison(&self) -> MutexGuard<'_, T> {
        self.lock().unwrap_or_else(|e| e.into_inner())
    }
}
