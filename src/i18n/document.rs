// SPDX-License-Identifier: MPL-2.0
//! Document-level language attributes kept in sync with the active locale.

use super::locale::{Direction, Locale};
use super::store::{LocaleStore, SubscriptionId};
use std::cell::Cell;
use std::rc::Rc;

/// Mirror of the `lang` and `dir` attributes of the rendered document.
#[derive(Debug, Clone)]
pub struct DocumentAttributes {
    current: Rc<Cell<Locale>>,
    subscription: SubscriptionId,
}

impl DocumentAttributes {
    /// Starts tracking `store`; the attributes reflect its active locale immediately.
    pub fn attach(store: &LocaleStore) -> Self {
        let current = Rc::new(Cell::new(store.active_locale()));
        let target = Rc::clone(&current);
        let subscription = store.subscribe(move |locale| target.set(*locale));
        Self {
            current,
            subscription,
        }
    }

    /// Stops tracking. The attributes keep their last values.
    pub fn detach(&self, store: &LocaleStore) -> bool {
        store.unsubscribe(self.subscription)
    }

    /// Value of the `lang` attribute.
    #[must_use]
    pub fn lang(&self) -> &'static str {
        self.current.get().code()
    }

    /// Value of the `dir` attribute.
    #[must_use]
    pub fn dir(&self) -> Direction {
        self.current.get().direction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::persistence::MemoryPreference;

    #[test]
    fn attributes_start_from_active_locale() {
        let store = LocaleStore::open(MemoryPreference::with_value("ja"));
        let doc = DocumentAttributes::attach(&store);
        assert_eq!(doc.lang(), "ja");
        assert_eq!(doc.dir(), Direction::LeftToRight);
    }

    #[test]
    fn attributes_follow_changes() {
        let store = LocaleStore::open(MemoryPreference::new());
        let doc = DocumentAttributes::attach(&store);

        store.set_active_locale("ar");
        assert_eq!(doc.lang(), "ar");
        assert_eq!(doc.dir(), Direction::RightToLeft);

        store.set_active_locale("fr");
        assert_eq!(doc.lang(), "fr");
        assert_eq!(doc.dir().as_str(), "ltr");
    }

    #[test]
    fn detached_attributes_stop_updating() {
        let store = LocaleStore::open(MemoryPreference::new());
        let doc = DocumentAttributes::attach(&store);
        assert!(doc.detach(&store));

        store.set_active_locale("de");
        assert_eq!(doc.lang(), "en");
    }
}
