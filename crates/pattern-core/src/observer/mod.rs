//! Subject / observer registry.
//!
//! A [`Subject`] owns a state snapshot and an ordered list of observer
//! handles. `set_state` writes the snapshot first, then walks the list in
//! registration order and calls `update` on each observer, handing it the
//! subject so it can pull whatever fields it needs.
//!
//! # Identity
//! Every registration gets an [`ObserverId`] from the subject's
//! [`IdGenerator`]. Removal is by that token (or by handle pointer), never by
//! comparing observer contents. Registering the same handle twice is
//! rejected with [`PatternError::DuplicateObserver`].
//!
//! # Failure
//! Notification is fail-fast: the first observer returning an error stops
//! the walk, and the error reaches the `set_state` caller. Observers after it
//! are not notified for that change. Callers that need best-effort delivery
//! should make their observers infallible.

pub mod shop;
pub mod weather;

pub use self::shop::{PriceList, ShopClient};
pub use self::weather::{
    CurrentConditionsDisplay, DisplayElement, Forecast, ForecastDisplay, Measurements,
    StatisticsDisplay,
};

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::domain::{ObserverError, ObserverId, PatternError};
use crate::ports::{IdGenerator, SystemClock, UlidGenerator};

/// Read access to a subject's current snapshot.
pub trait StateSource<S> {
    fn state(&self) -> &S;
}

/// Something that reacts to a subject's state changes.
pub trait Observer<S> {
    /// Pull fresh values from `subject` and react.
    fn update(&mut self, subject: &dyn StateSource<S>) -> Result<(), ObserverError>;
}

/// Shared handle to a registered observer.
pub type ObserverHandle<S> = Rc<RefCell<dyn Observer<S>>>;

struct Registration<S> {
    id: ObserverId,
    observer: ObserverHandle<S>,
}

pub struct Subject<S> {
    state: S,
    observers: Vec<Registration<S>>,
    ids: Box<dyn IdGenerator>,
}

impl<S> Subject<S> {
    pub fn new(initial: S) -> Self {
        Self::with_id_generator(initial, UlidGenerator::new(SystemClock))
    }

    pub fn with_id_generator(initial: S, ids: impl IdGenerator + 'static) -> Self {
        Self {
            state: initial,
            observers: Vec::new(),
            ids: Box::new(ids),
        }
    }

    /// Build a subject and register `observers` in order.
    pub fn with_observers(
        initial: S,
        observers: impl IntoIterator<Item = ObserverHandle<S>>,
    ) -> Result<(Self, Vec<ObserverId>), PatternError> {
        let mut subject = Self::new(initial);
        let ids = observers
            .into_iter()
            .map(|observer| subject.register(observer))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((subject, ids))
    }

    /// Append an observer to the end of the notification order.
    pub fn register(&mut self, observer: ObserverHandle<S>) -> Result<ObserverId, PatternError> {
        if let Some(existing) = self
            .observers
            .iter()
            .find(|r| Rc::ptr_eq(&r.observer, &observer))
        {
            return Err(PatternError::DuplicateObserver(existing.id));
        }
        let id = self.ids.generate_observer_id();
        tracing::debug!(observer = %id, position = self.observers.len(), "observer registered");
        self.observers.push(Registration { id, observer });
        Ok(id)
    }

    /// Wrap `observer` in a handle, register it, and return the subscription.
    pub fn attach<O>(&mut self, observer: O) -> Result<Subscription<O>, PatternError>
    where
        O: Observer<S> + 'static,
    {
        let handle = Rc::new(RefCell::new(observer));
        let id = self.register(handle.clone())?;
        Ok(Subscription { id, handle })
    }

    /// Remove every entry with this id. No-op (false) if absent.
    ///
    /// O(n) in the number of registrations.
    pub fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|r| r.id != id);
        let removed = self.observers.len() != before;
        if removed {
            tracing::debug!(observer = %id, "observer removed");
        }
        removed
    }

    /// Remove by handle identity (pointer equality).
    pub fn remove_handle(&mut self, observer: &ObserverHandle<S>) -> bool {
        let ids: Vec<ObserverId> = self
            .observers
            .iter()
            .filter(|r| Rc::ptr_eq(&r.observer, observer))
            .map(|r| r.id)
            .collect();
        ids.into_iter().fold(false, |acc, id| self.remove(id) || acc)
    }

    /// Replace the snapshot, then notify every observer in order.
    pub fn set_state(&mut self, state: S) -> Result<(), PatternError> {
        self.state = state;
        self.notify()
    }

    /// Mutate the snapshot in place, then notify.
    pub fn modify_state(&mut self, f: impl FnOnce(&mut S)) -> Result<(), PatternError> {
        f(&mut self.state);
        self.notify()
    }

    /// Notify every observer of the current snapshot.
    pub fn notify(&self) -> Result<(), PatternError> {
        for registration in &self.observers {
            let mut observer = registration
                .observer
                .try_borrow_mut()
                .map_err(|_| PatternError::ObserverBusy(registration.id))?;
            tracing::trace!(observer = %registration.id, "notifying observer");
            observer.update(self).map_err(|source| {
                tracing::warn!(observer = %registration.id, error = %source, "observer failed, stopping notification");
                PatternError::ObserverFailed {
                    observer: registration.id,
                    source,
                }
            })?;
        }
        Ok(())
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn is_registered(&self, id: ObserverId) -> bool {
        self.observers.iter().any(|r| r.id == id)
    }

    /// Registration ids in notification order.
    pub fn observer_ids(&self) -> Vec<ObserverId> {
        self.observers.iter().map(|r| r.id).collect()
    }
}

impl<S: Default> Default for Subject<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> StateSource<S> for Subject<S> {
    fn state(&self) -> &S {
        &self.state
    }
}

/// A typed observer handle plus its registration token.
///
/// The token is the observer's only link back to the subject; it is used to
/// unregister and owns nothing.
pub struct Subscription<O> {
    id: ObserverId,
    handle: Rc<RefCell<O>>,
}

impl<O: 'static> Subscription<O> {
    pub fn id(&self) -> ObserverId {
        self.id
    }

    pub fn handle(&self) -> &Rc<RefCell<O>> {
        &self.handle
    }

    pub fn borrow(&self) -> Ref<'_, O> {
        self.handle.borrow()
    }

    /// Unregister from `subject`. Returns false if it was already gone.
    pub fn detach<S>(&self, subject: &mut Subject<S>) -> bool {
        subject.remove(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Reading {
        temp: i32,
    }

    /// Records what it pulled, and appends its name to a shared log.
    struct Recorder {
        name: &'static str,
        seen: Vec<i32>,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Recorder {
        fn new(name: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> Self {
            Self {
                name,
                seen: Vec::new(),
                log: log.clone(),
            }
        }
    }

    impl Observer<Reading> for Recorder {
        fn update(&mut self, subject: &dyn StateSource<Reading>) -> Result<(), ObserverError> {
            self.seen.push(subject.state().temp);
            self.log.borrow_mut().push(self.name);
            Ok(())
        }
    }

    struct Broken;

    impl Observer<Reading> for Broken {
        fn update(&mut self, _subject: &dyn StateSource<Reading>) -> Result<(), ObserverError> {
            Err(ObserverError::new("display offline"))
        }
    }

    fn log() -> Rc<RefCell<Vec<&'static str>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn remove_middle_observer_between_updates() {
        let log = log();
        let mut subject = Subject::new(Reading::default());
        let a = subject.attach(Recorder::new("A", &log)).unwrap();
        let b = subject.attach(Recorder::new("B", &log)).unwrap();
        let c = subject.attach(Recorder::new("C", &log)).unwrap();

        subject.set_state(Reading { temp: 30 }).unwrap();
        assert!(b.detach(&mut subject));
        subject.set_state(Reading { temp: 50 }).unwrap();

        assert_eq!(a.borrow().seen, vec![30, 50]);
        assert_eq!(b.borrow().seen, vec![30]);
        assert_eq!(c.borrow().seen, vec![30, 50]);
        assert_eq!(*log.borrow(), vec!["A", "B", "C", "A", "C"]);
    }

    #[test]
    fn each_observer_sees_the_written_state_once_in_order() {
        let log = log();
        let mut subject = Subject::new(Reading::default());
        let subs: Vec<_> = ["A", "B", "C", "D"]
            .into_iter()
            .map(|name| subject.attach(Recorder::new(name, &log)).unwrap())
            .collect();

        subject.set_state(Reading { temp: 7 }).unwrap();

        for sub in &subs {
            assert_eq!(sub.borrow().seen, vec![7]);
        }
        assert_eq!(*log.borrow(), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let log = log();
        let mut subject = Subject::new(Reading::default());
        let handle: ObserverHandle<Reading> = Rc::new(RefCell::new(Recorder::new("A", &log)));

        let id = subject.register(handle.clone()).unwrap();
        let err = subject.register(handle.clone()).unwrap_err();

        assert!(matches!(err, PatternError::DuplicateObserver(existing) if existing == id));
        assert_eq!(subject.len(), 1);
    }

    #[test]
    fn removed_observer_is_never_notified_again() {
        let log = log();
        let mut subject = Subject::new(Reading::default());
        let handle: ObserverHandle<Reading> = Rc::new(RefCell::new(Recorder::new("A", &log)));
        subject.register(handle.clone()).unwrap();

        assert!(subject.remove_handle(&handle));
        assert!(!subject.remove_handle(&handle));
        subject.set_state(Reading { temp: 1 }).unwrap();

        assert!(log.borrow().is_empty());
        assert!(subject.is_empty());
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let log = log();
        let mut subject = Subject::new(Reading::default());
        let a = subject.attach(Recorder::new("A", &log)).unwrap();
        assert!(a.detach(&mut subject));
        assert!(!a.detach(&mut subject));
        assert!(!subject.is_registered(a.id()));
    }

    #[test]
    fn failing_observer_stops_the_fan_out() {
        let log = log();
        let mut subject = Subject::new(Reading::default());
        let a = subject.attach(Recorder::new("A", &log)).unwrap();
        let broken = subject.attach(Broken).unwrap();
        let c = subject.attach(Recorder::new("C", &log)).unwrap();

        let err = subject.set_state(Reading { temp: 9 }).unwrap_err();

        match err {
            PatternError::ObserverFailed { observer, source } => {
                assert_eq!(observer, broken.id());
                assert_eq!(source.message(), "display offline");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // state was written before anyone was notified
        assert_eq!(subject.state().temp, 9);
        assert_eq!(a.borrow().seen, vec![9]);
        assert!(c.borrow().seen.is_empty());
    }

    #[test]
    fn busy_observer_is_reported() {
        let log = log();
        let mut subject = Subject::new(Reading::default());
        let a = subject.attach(Recorder::new("A", &log)).unwrap();

        let _held = a.handle().borrow_mut();
        let err = subject.set_state(Reading { temp: 3 }).unwrap_err();
        assert!(matches!(err, PatternError::ObserverBusy(id) if id == a.id()));
    }

    #[test]
    fn with_observers_keeps_order() {
        let log = log();
        let handles: Vec<ObserverHandle<Reading>> = ["X", "Y"]
            .into_iter()
            .map(|name| Rc::new(RefCell::new(Recorder::new(name, &log))) as ObserverHandle<Reading>)
            .collect();

        let (mut subject, ids) = Subject::with_observers(Reading::default(), handles).unwrap();
        assert_eq!(subject.observer_ids(), ids);

        subject.modify_state(|r| r.temp += 5).unwrap();
        assert_eq!(*log.borrow(), vec!["X", "Y"]);
        assert_eq!(subject.state().temp, 5);
    }
}
