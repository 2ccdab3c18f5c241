use std::sync::{Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Locks a mutex, recovering the data if another thread panicked while
/// holding it.
///
/// A panicking threadloop must not take the main thread down with it; the
/// guarded tables stay structurally valid across a panic.
///
/// # Example
/// ```
/// use std::sync::Mutex;
///
/// use hrl::interpreter::evaluator::utils::lock;
///
/// let counter = Mutex::new(1);
/// *lock(&counter) += 1;
/// assert_eq!(*lock(&counter), 2);
/// ```
pub fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Acquires a read guard, recovering from poisoning.
pub fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

/// Acquires a write guard, recovering from poisoning.
pub fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::*;

    #[test]
    fn poisoned_mutex_is_recovered() {
        let shared = Arc::new(Mutex::new(5));
        let clone = Arc::clone(&shared);
        let _ = thread::spawn(move || {
                    let _guard = clone.lock().unwrap();
                    panic!("poison");
                }).join();

        assert!(shared.is_poisoned());
        assert_eq!(*lock(&shared), 5);
    }
}
