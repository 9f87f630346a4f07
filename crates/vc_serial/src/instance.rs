use core::fmt;

use vc_reflect::Reflect;
use vc_reflect::info::TypeInfo;

// -----------------------------------------------------------------------------
// Instance

/// A read handle to a live value, or nothing.
///
/// Writing an invalid instance yields the empty document without touching
/// anything else.
///
/// # Examples
///
/// ```
/// use vc_serial::Instance;
///
/// let value = 3_u8;
/// assert!(Instance::from(&value).is_valid());
/// assert!(!Instance::from(None::<&u8>).is_valid());
/// ```
#[derive(Clone, Copy, Default)]
pub struct Instance<'a> {
    value: Option<&'a dyn Reflect>,
}

impl<'a> Instance<'a> {
    #[inline]
    pub const fn new(value: &'a dyn Reflect) -> Self {
        Self { value: Some(value) }
    }

    /// Creates a handle that refers to nothing.
    #[inline]
    pub const fn invalid() -> Self {
        Self { value: None }
    }

    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.value.is_some()
    }

    #[inline]
    pub const fn get(&self) -> Option<&'a dyn Reflect> {
        self.value
    }

    /// Returns the [`TypeInfo`] of the referred value.
    #[inline]
    pub fn type_info(&self) -> Option<&'static TypeInfo> {
        self.value.map(Reflect::reflect_type_info)
    }
}

impl<'a, T: Reflect> From<&'a T> for Instance<'a> {
    #[inline]
    fn from(value: &'a T) -> Self {
        Self::new(value)
    }
}

impl<'a, T: Reflect> From<Option<&'a T>> for Instance<'a> {
    #[inline]
    fn from(value: Option<&'a T>) -> Self {
        Self {
            value: value.map(|v| v as &dyn Reflect),
        }
    }
}

impl fmt::Debug for Instance<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => f.debug_tuple("Instance").field(&value).finish(),
            None => f.write_str("Instance(<invalid>)"),
        }
    }
}

// -----------------------------------------------------------------------------
// InstanceMut

/// A write handle to a live value, or nothing.
#[derive(Default)]
pub struct InstanceMut<'a> {
    value: Option<&'a mut dyn Reflect>,
}

impl<'a> InstanceMut<'a> {
    #[inline]
    pub fn new(value: &'a mut dyn Reflect) -> Self {
        Self { value: Some(value) }
    }

    /// Creates a handle that refers to nothing.
    #[inline]
    pub const fn invalid() -> Self {
        Self { value: None }
    }

    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.value.is_some()
    }

    #[inline]
    pub fn into_inner(self) -> Option<&'a mut dyn Reflect> {
        self.value
    }
}

impl<'a, T: Reflect> From<&'a mut T> for InstanceMut<'a> {
    #[inline]
    fn from(value: &'a mut T) -> Self {
        Self::new(value)
    }
}

impl<'a, T: Reflect> From<Option<&'a mut T>> for InstanceMut<'a> {
    #[inline]
    fn from(value: Option<&'a mut T>) -> Self {
        Self {
            value: value.map(|v| v as &mut dyn Reflect),
        }
    }
}

impl fmt::Debug for InstanceMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => f.debug_tuple("InstanceMut").field(&&**value).finish(),
            None => f.write_str("InstanceMut(<invalid>)"),
        }
    }
}
