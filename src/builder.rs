//! Common builder contract and shared builder handles.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{Error, ErrorContext, Result};

/// A reusable builder: stage values, build any number of outputs, reset.
///
/// `build` borrows the builder immutably, so building never changes what is
/// staged and repeated calls yield independent outputs.
pub trait Builder {
    type Output;

    /// Clear every staged value back to its initial state.
    fn reset(&mut self) -> &mut Self;

    /// Produce a fresh output from the currently staged values.
    fn build(&self) -> Result<Self::Output>;
}

/// Handle to a builder that may be shared between several owners.
pub type Shared<T> = Arc<Mutex<T>>;

/// Wrap a builder into a [`Shared`] handle.
pub fn shared<T>(value: T) -> Shared<T> {
    Arc::new(Mutex::new(value))
}

/// Lock a shared builder for a reset.
///
/// Resets overwrite all staged state, so a poisoned lock is recovered.
/// Recovery only applies to this reset: the mutex itself stays poisoned, and
/// later builds through the same handle keep failing with `Error::Runtime`.
pub(crate) fn lock_for_reset<T>(handle: &Shared<T>) -> MutexGuard<'_, T> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Lock a shared builder for a build; a poisoned lock is an error.
pub(crate) fn lock_for_build<'a, T>(
    handle: &'a Shared<T>,
    source: &str,
) -> Result<MutexGuard<'a, T>> {
    handle.lock().map_err(|_| {
        Error::runtime_with_context(
            "shared builder poisoned",
            ErrorContext::new().with_source(source),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoundBuilder, CoordinateBuilder, GeocoderRequestBuilder};

    fn poison<T: Send + 'static>(handle: &Shared<T>) {
        let handle = handle.clone();
        let joined = std::thread::spawn(move || {
            let _guard = handle.lock().unwrap();
            panic!("poisoning shared builder");
        })
        .join();
        assert!(joined.is_err());
    }

    #[test]
    fn test_reset_recovers_poisoned_collaborator() {
        let coordinates = shared(CoordinateBuilder::new());
        let bounds = shared(BoundBuilder::new(coordinates.clone()));
        let mut builder: GeocoderRequestBuilder =
            GeocoderRequestBuilder::new(coordinates.clone(), bounds);
        builder.set_address("Oslo").set_sensor(false);
        coordinates.lock().unwrap().set_latitude(59.9);

        poison(&coordinates);
        assert!(coordinates.is_poisoned());

        builder.reset();
        assert!(builder.is_reset());
        assert!(lock_for_reset(&coordinates).is_reset());
    }

    #[test]
    fn test_build_reports_poisoned_collaborator() {
        let coordinates = shared(CoordinateBuilder::new());
        let mut bounds = BoundBuilder::new(coordinates.clone());
        bounds.set_south_west(1.0, 2.0, true);

        poison(&coordinates);

        let err = bounds.build().unwrap_err();
        assert!(matches!(err, Error::Runtime { .. }));
        assert_eq!(
            err.context().unwrap().source.as_deref(),
            Some("bound_builder")
        );

        // The reset succeeds but the handle stays poisoned.
        bounds.reset().set_south_west(1.0, 2.0, true);
        assert!(matches!(bounds.build(), Err(Error::Runtime { .. })));
    }
}
