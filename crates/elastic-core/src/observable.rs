//! Minimal observable value: a current value, a change counter and change
//! subscribers. Derived quantities are recomputed by readers on demand.

use smallvec::SmallVec;
use std::fmt;

type Listener<T> = Box<dyn FnMut(&T)>;

pub struct Observable<T> {
    value: T,
    version: u64,
    listeners: SmallVec<[Listener<T>; 2]>,
}

impl<T: Copy + PartialEq> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            version: 0,
            listeners: SmallVec::new(),
        }
    }

    #[inline]
    pub fn get(&self) -> T {
        self.value
    }

    /// Incremented on every change; lets readers skip recomputation.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Store `value`, notifying subscribers if it differs from the current one.
    /// Returns true on change.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.version = self.version.wrapping_add(1);
        for listener in self.listeners.iter_mut() {
            listener(&self.value);
        }
        true
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) {
        self.listeners.push(Box::new(listener));
    }
}

impl<T: Copy + PartialEq + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("version", &self.version)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn set_notifies_only_on_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut o = Observable::new(1_u32);
        let sink = seen.clone();
        o.subscribe(move |v| sink.borrow_mut().push(*v));

        assert!(!o.set(1));
        assert_eq!(o.version(), 0);
        assert!(o.set(2));
        assert!(o.set(3));
        assert!(!o.set(3));

        assert_eq!(o.get(), 3);
        assert_eq!(o.version(), 2);
        assert_eq!(*seen.borrow(), vec![2, 3]);
    }
}
