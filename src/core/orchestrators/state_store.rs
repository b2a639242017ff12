use tokio::sync::watch;

/// Single-writer observable value. Readers either poll [`StateStore::get`] or
/// hold a receiver from [`StateStore::subscribe`] and await changes.
pub struct StateStore<T> {
    sender: watch::Sender<T>,
}

impl<T: Clone + PartialEq> StateStore<T> {
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }

    /// Replaces the value. Subscribers are only woken when it actually changes.
    pub fn set(&self, value: T) {
        self.set_with(|| Some(value));
    }

    /// Runs `produce` while holding the store's write lock and stores what it
    /// returns. `None` leaves the value untouched. Returns whether a value was
    /// produced.
    pub fn set_with(&self, produce: impl FnOnce() -> Option<T>) -> bool {
        let mut produced = false;
        self.sender.send_if_modified(|current| match produce() {
            Some(value) => {
                produced = true;
                if *current == value {
                    return false;
                }
                *current = value;
                true
            }
            None => false,
        });
        produced
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_initial_value() {
        let store = StateStore::new(7);
        assert_eq!(store.get(), 7);
    }

    #[test]
    fn test_set_is_visible_to_existing_subscribers() {
        let store = StateStore::new("first".to_string());
        let mut receiver = store.subscribe();

        store.set("second".to_string());

        assert!(receiver.has_changed().unwrap());
        assert_eq!(*receiver.borrow_and_update(), "second");
        assert_eq!(store.get(), "second");
    }

    #[test]
    fn test_setting_same_value_does_not_notify() {
        let store = StateStore::new(1);
        let receiver = store.subscribe();

        store.set(1);

        assert!(!receiver.has_changed().unwrap());
    }

    #[test]
    fn test_late_subscriber_sees_current_value() {
        let store = StateStore::new(1);
        store.set(2);

        let receiver = store.subscribe();

        assert_eq!(*receiver.borrow(), 2);
    }

    #[test]
    fn test_set_with_none_keeps_value_and_does_not_notify() {
        let store = StateStore::new(1);
        let receiver = store.subscribe();

        let produced = store.set_with(|| None);

        assert!(!produced);
        assert_eq!(store.get(), 1);
        assert!(!receiver.has_changed().unwrap());
    }

    #[test]
    fn test_set_with_stores_produced_value() {
        let store = StateStore::new(1);
        let receiver = store.subscribe();

        let produced = store.set_with(|| Some(3));

        assert!(produced);
        assert_eq!(store.get(), 3);
        assert!(receiver.has_changed().unwrap());
    }

    #[test]
    fn test_set_without_subscribers_still_updates_value() {
        let store = StateStore::new(1);

        store.set(5);

        assert_eq!(store.get(), 5);
    }
}
