use alloc::boxed::Box;
use alloc::string::String;

use crate::impls::GenericTypeInfoCell;
use crate::info::{TypeInfo, Typed, WrapperInfo};
use crate::ops::{Wrapped, Wrapper};
use crate::Reflect;

// `Box<T>` has no constructor of its own; `TypeInfo::construct` wraps a
// default `T` instead.
impl<T: Reflect + Typed> Typed for Box<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Wrapper(WrapperInfo::new::<Self, T>(wrap::<T>)))
    }
}

fn wrap<T: Reflect + Typed>(
    value: Box<dyn Reflect>,
) -> Result<Box<dyn Reflect>, Box<dyn Reflect>> {
    let value: Box<T> = value.downcast::<T>()?;
    Ok(Box::new(value))
}

impl<T: Reflect + Typed> Reflect for Box<T> {
    crate::reflection::impl_reflect_cast_fn!(Wrapper);

    #[inline]
    fn reflect_to_string(&self) -> Option<String> {
        T::reflect_to_string(self)
    }
}

impl<T: Reflect + Typed> Wrapper for Box<T> {
    #[inline]
    fn wrapped(&self) -> Wrapped<'_> {
        Wrapped::Borrowed(T::as_reflect(self))
    }

    #[inline]
    fn wrapped_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some(T::as_reflect_mut(self))
    }

    fn set_wrapped(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        **self = value.take::<T>()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::Typed;

    #[test]
    fn box_constructs_through_wrapped_type() {
        let info = <Box<String> as Typed>::type_info();
        assert!(!info.ty().has_default());

        let value = info.construct().unwrap();
        assert_eq!(value.downcast_ref::<Box<String>>().map(|s| s.as_str()), Some(""));
    }

    #[test]
    fn box_wraps_only_its_wrapped_type() {
        let info = <Box<u8> as Typed>::type_info().as_wrapper().unwrap();

        let wrapped = info.wrap(Box::new(5_u8)).unwrap();
        assert_eq!(wrapped.downcast_ref::<Box<u8>>().map(|v| **v), Some(5));

        let rejected = info.wrap(Box::new(5_i8)).unwrap_err();
        assert!(rejected.is::<i8>());
    }

    #[test]
    fn box_wrapper_ops() {
        let mut boxed = Box::new(3_u8);
        let wrapper = boxed.reflect_mut().as_wrapper().unwrap();
        assert!(wrapper.set_wrapped(Box::new(4_u16)).is_err());
        wrapper.wrapped_mut().unwrap().set(Box::new(9_u8)).unwrap();
        assert_eq!(*boxed, 9);
    }
}
