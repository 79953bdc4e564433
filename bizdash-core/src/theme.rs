//! Light/dark theme store
//!
//! A single process-wide [`ThemeStore`] holds the mode for the session and
//! broadcasts every change to its subscribers. Nothing is persisted.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::error::{CoreError, CoreResult};

/// Theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// The other mode
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

static GLOBAL: OnceLock<ThemeStore> = OnceLock::new();

/// Holds the current [`ThemeMode`] and notifies subscribers of changes
#[derive(Debug)]
pub struct ThemeStore {
    tx: watch::Sender<ThemeMode>,
}

impl ThemeStore {
    pub fn new(initial: ThemeMode) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Process-wide store; created with the default mode on first use
    pub fn global() -> &'static ThemeStore {
        GLOBAL.get_or_init(|| ThemeStore::new(ThemeMode::default()))
    }

    /// Seed the process-wide store. Must run before the first [`ThemeStore::global`].
    pub fn init_global(initial: ThemeMode) -> CoreResult<&'static ThemeStore> {
        GLOBAL
            .set(ThemeStore::new(initial))
            .map_err(|_| CoreError::AlreadyInitialized("ThemeStore"))?;
        Ok(Self::global())
    }

    pub fn get(&self) -> ThemeMode {
        *self.tx.borrow()
    }

    /// Flip the mode and broadcast it, returning the new value
    pub fn toggle(&self) -> ThemeMode {
        let mut mode = ThemeMode::default();
        self.tx.send_modify(|current| {
            *current = current.toggle();
            mode = *current;
        });
        log::info!("Theme switched to {}", mode.as_str());
        mode
    }

    /// Set the mode; subscribers are only notified on an actual change
    pub fn set(&self, mode: ThemeMode) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == mode {
                false
            } else {
                *current = mode;
                true
            }
        })
    }

    pub fn subscribe(&self) -> ThemeSubscription {
        ThemeSubscription {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

/// A consumer's view of a [`ThemeStore`]
#[derive(Debug, Clone)]
pub struct ThemeSubscription {
    rx: watch::Receiver<ThemeMode>,
}

impl ThemeSubscription {
    /// Latest mode, without marking it as seen
    pub fn current(&self) -> ThemeMode {
        *self.rx.borrow()
    }

    /// The new mode if it changed since the last call
    pub fn changed(&mut self) -> Option<ThemeMode> {
        match self.rx.has_changed() {
            Ok(true) => Some(*self.rx.borrow_and_update()),
            _ => None,
        }
    }
}
