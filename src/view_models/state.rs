//! # Observable State
//!
//! `StateSlot` is a single-writer, multi-reader value holder backed by a
//! `tokio::sync::watch` channel. Readers can take the current value or
//! subscribe and await changes. Only this crate can write.

use crate::error::FetchError;
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

/// Lifecycle of the most recent full fetch
#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Finished,
    Failed(Arc<FetchError>),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, LoadState::Finished)
    }

    /// The error carried by a failed fetch
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            LoadState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadState::Loading => write!(f, "loading"),
            LoadState::Finished => write!(f, "finished"),
            LoadState::Failed(error) => write!(f, "failed: {error}"),
        }
    }
}

/// Observable value with a single writer
#[derive(Debug)]
pub struct StateSlot<T> {
    sender: watch::Sender<T>,
}

impl<T> StateSlot<T> {
    pub fn new(initial: T) -> Self {
        let (sender, _receiver) = watch::channel(initial);
        Self { sender }
    }

    /// Receiver notified on every change after this call
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }

    /// Borrow the current value without cloning
    ///
    /// Holding the guard blocks writers, so keep it short-lived.
    pub fn borrow(&self) -> watch::Ref<'_, T> {
        self.sender.borrow()
    }

    /// Replace the value and notify subscribers
    pub(crate) fn set(&self, value: T) {
        self.sender.send_replace(value);
    }

    /// Modify the value in place; subscribers are notified only when
    /// `modify` returns true
    pub(crate) fn update_if<F>(&self, modify: F) -> bool
    where
        F: FnOnce(&mut T) -> bool,
    {
        self.sender.send_if_modified(modify)
    }
}

impl<T: Clone> StateSlot<T> {
    /// Clone of the current value
    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }
}
