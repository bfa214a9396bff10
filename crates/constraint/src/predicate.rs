//! Arbitrary caller-supplied predicates.
//!
//! Prefer statically inspectable constraints where one exists. A predicate
//! is opaque to schema generators and can only be honoured by a consumer
//! that runs it.
//!
//! What happens when a predicate panics is left to the consumer: it may
//! skip the constraint, reject the value, or let the panic through. See
//! [`PredicateFailurePolicy`](crate::interpretation::PredicateFailurePolicy).

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A check that valid values must pass: `func(value)` returns `true`.
///
/// Predicates have no structural equality. Two predicates are equal when they
/// share the same function (clones of one `Predicate`) and the same name.
///
/// # Examples
///
/// ```
/// use nebula_constraint::Predicate;
///
/// let lower = Predicate::<str>::named("is_lowercase", |s: &str| {
///     s.chars().all(|c| !c.is_uppercase())
/// });
/// assert_eq!(lower.name(), Some("is_lowercase"));
/// assert_eq!(lower.clone(), lower);
/// ```
pub struct Predicate<T: ?Sized> {
    name: Option<Cow<'static, str>>,
    func: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Predicate<T> {
    /// Wraps an anonymous predicate.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            name: None,
            func: Arc::new(func),
        }
    }

    /// Wraps a predicate under a well-known name.
    ///
    /// Consumers may recognise the name and give it special handling, e.g.
    /// mapping `"is_digit"` to a pattern in a generated schema.
    pub fn named<F>(name: impl Into<Cow<'static, str>>, func: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            func: Arc::new(func),
        }
    }

    /// The predicate's name, if it was given one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The wrapped function. Calling it is the consumer's business.
    pub fn func(&self) -> &(dyn Fn(&T) -> bool + Send + Sync) {
        &*self.func
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.func).cast::<()>()
    }
}

impl<T: ?Sized> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            func: Arc::clone(&self.func),
        }
    }
}

impl<T: ?Sized> PartialEq for Predicate<T> {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr() && self.name == other.name
    }
}

impl<T: ?Sized> Eq for Predicate<T> {}

impl<T: ?Sized> Hash for Predicate<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
        self.name.hash(state);
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized> fmt::Display for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("<anonymous>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_are_equal() {
        let p = Predicate::<i32>::new(|v| *v % 2 == 0);
        assert_eq!(p.clone(), p);
    }

    #[test]
    fn distinct_functions_are_not_equal() {
        let a = Predicate::<i32>::new(|v| *v > 0);
        let b = Predicate::<i32>::new(|v| *v > 0);
        assert_ne!(a, b);
    }

    #[test]
    fn func_is_callable_by_consumers() {
        let p = Predicate::<str>::named("is_ascii", |s: &str| s.is_ascii());
        assert!((p.func())("abc"));
        assert!(!(p.func())("été"));
    }

    #[test]
    fn debug_and_display_use_name() {
        let named = Predicate::<str>::named("is_digit", |s: &str| {
            s.chars().all(|c| c.is_ascii_digit())
        });
        assert_eq!(named.to_string(), "is_digit");
        assert_eq!(
            format!("{named:?}"),
            "Predicate { name: Some(\"is_digit\"), .. }"
        );

        let anon = Predicate::<u8>::new(|_| true);
        assert_eq!(anon.to_string(), "<anonymous>");
    }
}
