use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{ReflectKind, TypeInfo};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime reflection in [`vc_reflect`].
///
/// This trait enables dynamic access and modification of data without
/// compile-time type information. The persistence layer walks object graphs
/// exclusively through it.
///
/// # Recommendations
///
/// It's strongly recommended to use [the derive macro for `Reflect`] rather
/// than implementing this trait manually. The derive macro implements this
/// trait along with [`Typed`] and [`Struct`] or [`Enum`].
///
/// # Type Identification
///
/// While `Reflect` supports [`Any`], note that [`Any::type_id`] on
/// `Box<dyn Reflect>` returns the container's type ID, not the inner value's.
/// Use [`Reflect::ty_id`] instead:
///
/// ```rust
/// # use vc_reflect::Reflect;
/// # use core::any::{Any, TypeId};
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());    // Container type ID
/// assert!(x.ty_id() == TypeId::of::<i32>());      // Preferred method
/// ```
///
/// # Type Casting
///
/// Use [`reflect_ref`] and [`reflect_mut`] to access the kind specific
/// interface, and `downcast_ref`, `downcast_mut`, `downcast` or `take` for
/// concrete type conversion:
///
/// ```rust
/// # use vc_reflect::{Reflect, ops::List};
/// let x: Box<dyn Reflect> = vec![1_u8, 2, 3].into_boxed_reflect();
/// assert_eq!(x.reflect_ref().as_list().unwrap().len(), 3);
///
/// let v = x.take::<Vec<u8>>().unwrap();
/// assert_eq!(v, [1, 2, 3]);
/// ```
///
/// [`vc_reflect`]: crate
/// [the derive macro for `Reflect`]: crate::derive::Reflect
/// [`Typed`]: crate::info::Typed
/// [`Struct`]: crate::ops::Struct
/// [`Enum`]: crate::ops::Enum
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
pub trait Reflect: Send + Sync + Any {
    /// Returns the [`TypeInfo`] of the underlying type.
    ///
    /// This is the dynamic dispatch counterpart of [`Typed::type_info`](crate::info::Typed::type_info).
    fn reflect_type_info(&self) -> &'static TypeInfo;

    /// Casts this type to a fully-reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable, fully-reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, fully-reflected value.
    ///
    /// # Example
    ///
    /// ```
    /// use vc_reflect::Reflect;
    ///
    /// let r = 32.into_boxed_reflect();
    /// // Equal to this:
    /// // let r = Box::new(32) as Box<dyn Reflect>;
    /// ```
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Return the [`TypeId`] of underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Performs a type-checked assignment of a reflected value to this value.
    ///
    /// Gives `value` back if its type differs.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let mut vec = Vec::<i32>::new();
    /// vec.set(vec![1_i32, 2, 3].into_boxed_reflect()).unwrap();
    /// assert_eq!(vec, [1, 2, 3]);
    ///
    /// assert!(vec.set(1_u8.into_boxed_reflect()).is_err());
    /// ```
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns a pure enumeration of ["kinds"](ReflectKind) of type.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable enumeration of ["kinds"](ReflectRef) of type.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable enumeration of ["kinds"](ReflectMut) of type.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Returns the textual form of the value, if the type has one.
    ///
    /// Serializers fall back to this for values they cannot otherwise
    /// represent. Atomic types and `Uuid` provide it.
    #[inline]
    fn reflect_to_string(&self) -> Option<String> {
        None
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// assert!(x.is::<i32>());
    /// ```
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let mut x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// let y = x.downcast_mut::<i32>().unwrap();
    /// *y += 2;
    ///
    /// assert_eq!(*y, 12);
    /// ```
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        match <Box<dyn Any>>::downcast::<T>(self) {
            Ok(value) => Ok(value),
            Err(_) => unreachable!("type is already checked"),
        }
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// let x = x.take::<i32>().unwrap();
    /// assert_eq!(x, 10);
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reflect_to_string() {
            Some(text) => write!(f, "{}({text})", self.reflect_type_info().type_path()),
            None => write!(f, "{}", self.reflect_type_info().type_path()),
        }
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements `reflect_type_info`, `set`, `reflect_kind`, `reflect_ref`
/// and `reflect_mut` for the non-atomic kinds.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn reflect_type_info(&self) -> &'static $crate::info::TypeInfo {
            <Self as $crate::info::Typed>::type_info()
        }

        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::info::{FieldFlags, ReflectKind, Typed};
    use crate::ops::{Enum, Struct};

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(default)]
    struct Foo {
        a: i32,
        #[reflect(no_serialize)]
        b: String,
        #[reflect(read_only, rename = "Items")]
        items: Vec<u8>,
        #[reflect(ignore)]
        _cache: (u8, u8),
    }

    #[derive(Reflect, Debug, PartialEq, Clone, Copy)]
    enum Mode {
        Off,
        On = 7,
    }

    #[test]
    fn downcast_and_take() {
        let x: Box<dyn Reflect> = Foo::default().into_boxed_reflect();
        assert!(x.is::<Foo>());
        assert!(x.downcast_ref::<i32>().is_none());

        let x = x.take::<i32>().unwrap_err();
        let foo = x.take::<Foo>().unwrap();
        assert_eq!(foo, Foo::default());
    }

    #[test]
    fn derived_struct_info() {
        let info = Foo::type_info().as_struct().unwrap();
        assert_eq!(info.field_names(), ["a", "b", "Items"]);
        assert!(info.field("b").unwrap().is_no_serialize());
        assert_eq!(info.field("Items").unwrap().flags(), FieldFlags::READ_ONLY);
        assert!(info.field("_cache").is_none());
        assert!(Foo::type_info().construct().unwrap().is::<Foo>());
    }

    #[test]
    fn derived_struct_access() {
        let mut foo = Foo::default();
        assert_eq!(foo.reflect_kind(), ReflectKind::Struct);
        assert_eq!(Struct::field_len(&foo), 3);

        foo.field_mut("a").unwrap().set(Box::new(3_i32)).unwrap();
        foo.field_at_mut(2).unwrap().set(Box::new(vec![1_u8])).unwrap();
        assert_eq!(foo.a, 3);
        assert_eq!(foo.items, [1]);

        let s: &dyn Struct = &foo;
        let names: Vec<&str> = s.iter_fields().map(|(field, _)| field.name()).collect();
        assert_eq!(names, ["a", "b", "Items"]);
    }

    #[test]
    fn derived_enum() {
        let info = Mode::type_info().as_enum().unwrap();
        assert_eq!(info.variants().len(), 2);
        assert_eq!(info.name_of(7), Some("On"));
        assert!(!info.ty().has_default());

        let value = info.from_discriminant(0).unwrap();
        assert_eq!(value.downcast_ref::<Mode>(), Some(&Mode::Off));
        assert_eq!(Mode::On.variant_name(), Some("On"));
        assert_eq!(Mode::On.discriminant(), Some(7));
    }
}
