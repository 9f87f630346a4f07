use alloc::boxed::Box;
use alloc::string::{String, ToString};

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{AtomicInfo, AtomicKind, ReflectKind, TypeInfo, Typed};
use crate::ops::{AtomicRef, ReflectMut, ReflectRef};

macro_rules! impl_reflect_atomic {
    ($ty:ty, $kind:ident, |$v:ident| $view:expr) => {
        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    TypeInfo::Atomic(
                        AtomicInfo::new::<Self>(AtomicKind::$kind).with_default::<Self>(),
                    )
                })
            }
        }

        impl Reflect for $ty {
            #[inline]
            fn reflect_type_info(&self) -> &'static TypeInfo {
                <Self as Typed>::type_info()
            }

            fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
                *self = value.take::<Self>()?;
                Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> ReflectKind {
                ReflectKind::Atomic
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                let $v = self;
                ReflectRef::Atomic($view)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Atomic(self)
            }

            #[inline]
            fn reflect_to_string(&self) -> Option<String> {
                Some(self.to_string())
            }
        }
    };
}

impl_reflect_atomic!(bool, Bool, |v| AtomicRef::Bool(*v));
impl_reflect_atomic!(char, Char, |v| AtomicRef::Char(*v));

impl_reflect_atomic!(i8, I8, |v| AtomicRef::Int(i64::from(*v)));
impl_reflect_atomic!(i16, I16, |v| AtomicRef::Int(i64::from(*v)));
impl_reflect_atomic!(i32, I32, |v| AtomicRef::Int(i64::from(*v)));
impl_reflect_atomic!(i64, I64, |v| AtomicRef::Int(*v));
impl_reflect_atomic!(isize, Isize, |v| AtomicRef::Int(*v as i64));

impl_reflect_atomic!(u8, U8, |v| AtomicRef::UInt(u64::from(*v)));
impl_reflect_atomic!(u16, U16, |v| AtomicRef::UInt(u64::from(*v)));
impl_reflect_atomic!(u32, U32, |v| AtomicRef::UInt(u64::from(*v)));
impl_reflect_atomic!(u64, U64, |v| AtomicRef::UInt(*v));
impl_reflect_atomic!(usize, Usize, |v| AtomicRef::UInt(*v as u64));

impl_reflect_atomic!(f32, F32, |v| AtomicRef::Float(f64::from(*v)));
impl_reflect_atomic!(f64, F64, |v| AtomicRef::Float(*v));

impl_reflect_atomic!(String, String, |v| AtomicRef::Str(v.as_str()));

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::Reflect;
    use crate::info::{AtomicKind, Typed};
    use crate::ops::AtomicRef;

    #[test]
    fn atomic_views_are_widened() {
        assert_eq!(7_u8.reflect_ref().as_atomic(), Some(AtomicRef::UInt(7)));
        assert_eq!((-7_i16).reflect_ref().as_atomic(), Some(AtomicRef::Int(-7)));
        assert_eq!(1.5_f32.reflect_ref().as_atomic(), Some(AtomicRef::Float(1.5)));

        let s = "abc".to_string();
        assert_eq!(s.reflect_ref().as_atomic(), Some(AtomicRef::Str("abc")));
    }

    #[test]
    fn atomic_info_and_default() {
        let info = <usize as Typed>::type_info();
        assert_eq!(info.as_atomic().unwrap().kind(), AtomicKind::Usize);

        let value = info.construct().unwrap();
        assert_eq!(value.downcast_ref::<usize>(), Some(&0));
    }

    #[test]
    fn atomic_set_is_type_checked() {
        let mut x = 1_i32;
        x.set(Box::new(5_i32)).unwrap();
        assert_eq!(x, 5);

        let back = x.set(Box::new(5_i64)).unwrap_err();
        assert!(back.is::<i64>());
        assert_eq!(x.reflect_to_string().as_deref(), Some("5"));
    }
}
