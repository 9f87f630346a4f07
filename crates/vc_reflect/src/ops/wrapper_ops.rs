use alloc::boxed::Box;
use core::ops::Deref;

use crate::Reflect;

// -----------------------------------------------------------------------------
// Wrapped

/// The value returned by [`Wrapper::wrapped`].
///
/// Wrappers that own their value lend it out, wrappers that only describe a
/// value (e.g. a handle resolved to an identifier) compute it on demand.
pub enum Wrapped<'a> {
    Borrowed(&'a dyn Reflect),
    Owned(Box<dyn Reflect>),
}

impl Deref for Wrapped<'_> {
    type Target = dyn Reflect;

    #[inline]
    fn deref(&self) -> &Self::Target {
        match self {
            Self::Borrowed(value) => *value,
            Self::Owned(value) => &**value,
        }
    }
}

// -----------------------------------------------------------------------------
// Wrapper

/// A trait used to power single value holders via reflection, e.g. `Box<T>`.
///
/// # Example
///
/// ```
/// use vc_reflect::{Reflect, ops::Wrapper};
///
/// let mut boxed = Box::new(1_u16);
/// assert_eq!(boxed.wrapped().downcast_ref::<u16>(), Some(&1));
///
/// boxed.set_wrapped(Box::new(9_u16)).unwrap();
/// assert_eq!(*boxed, 9);
/// ```
pub trait Wrapper: Reflect {
    /// Returns the wrapped value.
    fn wrapped(&self) -> Wrapped<'_>;

    /// Returns the wrapped value mutably, if the wrapper stores it.
    ///
    /// `None` for wrappers whose value is computed; those are only updated
    /// through [`set_wrapped`](Wrapper::set_wrapped).
    #[inline]
    fn wrapped_mut(&mut self) -> Option<&mut dyn Reflect> {
        None
    }

    /// Replaces the wrapped value.
    ///
    /// Gives the value back if its type is not the wrapped type.
    fn set_wrapped(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;
}
