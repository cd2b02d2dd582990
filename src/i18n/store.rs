// SPDX-License-Identifier: MPL-2.0
//! The single source of truth for the active locale.
//!
//! # Invariants
//!
//! 1. The active locale is always a member of [`SUPPORTED_LOCALES`].
//! 2. The active locale only changes through [`LocaleStore::set_active_locale`]
//!    (or its typed twin [`LocaleStore::select`]).
//! 3. Every change is persisted and then announced to subscribers,
//!    synchronously and in registration order.
//! 4. Selecting a locale from inside a subscriber is rejected.
//!
//! The store is single-threaded: share it with `Rc<LocaleStore>`.

use super::locale::{Locale, DEFAULT_LOCALE, SUPPORTED_LOCALES};
use super::persistence::PreferenceBackend;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Handle returned by [`LocaleStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// What a selection request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleChange {
    /// The active locale changed, was persisted, and subscribers ran.
    Changed { from: Locale, to: Locale },
    /// The requested locale was already active.
    Unchanged,
    /// The code is not in the supported set; nothing happened.
    Unsupported,
    /// Requested from inside a change notification; nothing happened.
    Reentrant,
}

impl LocaleChange {
    #[must_use]
    pub fn is_changed(&self) -> bool {
        matches!(self, LocaleChange::Changed { .. })
    }
}

type Callback = Rc<RefCell<dyn FnMut(&Locale)>>;

pub struct LocaleStore {
    active: Cell<Locale>,
    backend: RefCell<Box<dyn PreferenceBackend>>,
    subscribers: RefCell<Vec<(SubscriptionId, Callback)>>,
    next_id: Cell<u64>,
    notifying: Cell<bool>,
}

impl LocaleStore {
    /// Restores the active locale from `backend`.
    ///
    /// A missing or unrecognized stored code yields [`DEFAULT_LOCALE`], which is
    /// then written back so the next start finds it. A backend that holds
    /// something unreadable is left alone.
    pub fn open(backend: impl PreferenceBackend + 'static) -> Self {
        Self::open_with_fallback(backend, DEFAULT_LOCALE)
    }

    /// Like [`LocaleStore::open`], but a first run (nothing stored) starts on
    /// `first_run` instead of the default locale.
    pub fn open_with_fallback(
        backend: impl PreferenceBackend + 'static,
        first_run: Locale,
    ) -> Self {
        let mut backend: Box<dyn PreferenceBackend> = Box::new(backend);

        let (active, write_back) = match backend.read() {
            Ok(Some(code)) => match Locale::find(&code) {
                Some(locale) => (locale, false),
                None => {
                    tracing::warn!(code, "stored locale is not supported, using default");
                    (DEFAULT_LOCALE, true)
                }
            },
            Ok(None) => (first_run, true),
            Err(error) => {
                tracing::warn!(%error, "stored preferences are unreadable, using default");
                (DEFAULT_LOCALE, false)
            }
        };

        if write_back {
            if let Err(error) = backend.write(active.code()) {
                tracing::warn!(%error, "failed to store initial locale");
            }
        }

        tracing::debug!(locale = active.code(), "locale store opened");
        Self {
            active: Cell::new(active),
            backend: RefCell::new(backend),
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
            notifying: Cell::new(false),
        }
    }

    #[must_use]
    pub fn active_locale(&self) -> Locale {
        self.active.get()
    }

    /// Supported locales in display order. Always the same sequence.
    #[must_use]
    pub fn supported_locales(&self) -> &'static [Locale] {
        &SUPPORTED_LOCALES
    }

    /// Makes the locale with `code` active.
    ///
    /// Unsupported codes are ignored. Never fails.
    pub fn set_active_locale(&self, code: &str) -> LocaleChange {
        if self.notifying.get() {
            tracing::warn!(code, "locale change requested during notification, ignoring");
            return LocaleChange::Reentrant;
        }
        match Locale::find(code) {
            Some(locale) => self.select(locale),
            None => {
                tracing::debug!(code, "ignoring unsupported locale");
                LocaleChange::Unsupported
            }
        }
    }

    /// Makes `locale` active.
    pub fn select(&self, locale: Locale) -> LocaleChange {
        if self.notifying.get() {
            tracing::warn!(
                code = locale.code(),
                "locale change requested during notification, ignoring"
            );
            return LocaleChange::Reentrant;
        }

        let previous = self.active.get();
        if previous == locale {
            return LocaleChange::Unchanged;
        }

        self.active.set(locale);
        if let Err(error) = self.backend.borrow_mut().write(locale.code()) {
            tracing::warn!(code = locale.code(), %error, "failed to persist locale");
        }
        tracing::debug!(from = previous.code(), to = locale.code(), "locale changed");

        self.notify(locale);
        LocaleChange::Changed {
            from: previous,
            to: locale,
        }
    }

    /// Registers `callback` to run after every locale change.
    ///
    /// Registering from inside a notification takes effect from the next change.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Locale) + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let callback: Callback = Rc::new(RefCell::new(callback));
        self.subscribers.borrow_mut().push((id, callback));
        id
    }

    /// Removes a subscriber. Returns `false` if `id` was not registered.
    ///
    /// Removing from inside a notification takes effect from the next change.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    fn notify(&self, locale: Locale) {
        let snapshot: Vec<Callback> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();

        let _guard = NotifyGuard::enter(&self.notifying);
        for callback in snapshot {
            let mut callback = callback.borrow_mut();
            (&mut *callback)(&locale);
        }
    }
}

impl fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleStore")
            .field("active", &self.active.get())
            .field("subscribers", &self.subscriber_count())
            .finish_non_exhaustive()
    }
}

/// Clears the notifying flag even if a subscriber panics.
struct NotifyGuard<'a>(&'a Cell<bool>);

impl<'a> NotifyGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for NotifyGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
