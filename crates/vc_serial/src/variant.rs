use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use vc_reflect::Reflect;
use vc_reflect::info::{AtomicKind, TypeInfo};
use vc_reflect::ops::{AtomicRef, Enum, List, Map, ReflectRef, Set, Struct, Wrapped};

use crate::document::Document;
use crate::uuid::UuidRef;

// -----------------------------------------------------------------------------
// Variant

/// The value currency of the [`Writer`](crate::Writer) and the
/// [`Reader`](crate::Reader).
///
/// A live value is classified once with [`Variant::of`], and the writer
/// dispatches on the result. The reader builds the scalar variants from a
/// document with [`Variant::from_document`] and converts them into the
/// target type with [`Variant::convert`].
pub enum Variant<'a> {
    Null,
    Bool(bool),
    Char(char),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(Cow<'a, str>),
    Enum(&'a dyn Enum),
    /// An identifier that may take part in rereferencing.
    Reference(UuidRef),
    Sequential(&'a dyn List),
    Map(&'a dyn Map),
    Set(&'a dyn Set),
    Object(&'a dyn Struct),
    Wrapped(Wrapped<'a>),
    Opaque(&'a dyn Reflect),
}

impl<'a> Variant<'a> {
    /// Classifies a live value.
    pub fn of(value: &'a dyn Reflect) -> Self {
        if let Some(reference) = value.downcast_ref::<UuidRef>() {
            return Self::Reference(*reference);
        }

        match value.reflect_ref() {
            ReflectRef::Atomic(atomic) => match atomic {
                AtomicRef::Bool(v) => Self::Bool(v),
                AtomicRef::Char(v) => Self::Char(v),
                AtomicRef::Int(v) => Self::Int(v),
                AtomicRef::UInt(v) => Self::UInt(v),
                AtomicRef::Float(v) => Self::Float(v),
                AtomicRef::Str(v) => Self::Str(Cow::Borrowed(v)),
            },
            ReflectRef::Enum(v) => Self::Enum(v),
            ReflectRef::Struct(v) => Self::Object(v),
            ReflectRef::List(v) => Self::Sequential(v),
            ReflectRef::Map(v) => Self::Map(v),
            ReflectRef::Set(v) => Self::Set(v),
            ReflectRef::Wrapper(v) => Self::Wrapped(v.wrapped()),
            ReflectRef::Opaque(v) => Self::Opaque(v),
        }
    }

    /// Extracts the scalar held by a document.
    ///
    /// Arrays and objects have no scalar form and yield [`Variant::Null`].
    pub fn from_document(document: &'a Document) -> Self {
        match document {
            Document::Bool(v) => Self::Bool(*v),
            Document::String(v) => Self::Str(Cow::Borrowed(v)),
            Document::Number(v) => {
                if let Some(v) = v.as_i64() {
                    Self::Int(v)
                } else if let Some(v) = v.as_u64() {
                    Self::UInt(v)
                } else {
                    v.as_f64().map_or(Self::Null, Self::Float)
                }
            }
            Document::Null | Document::Array(_) | Document::Object(_) => Self::Null,
        }
    }

    /// Returns `true` for the variants that [`convert`](Self::convert) may accept.
    #[inline]
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Bool(_) | Self::Char(_) | Self::Int(_) | Self::UInt(_) | Self::Float(_) | Self::Str(_)
        )
    }

    /// Converts a scalar into a value of the type described by `info`.
    ///
    /// - Integers convert between widths when the value is in range.
    /// - Floats convert to integers only when integral and in range.
    /// - Strings parse into numbers, booleans, single characters, enum
    ///   variants (by name) and opaque types with a textual form.
    /// - Numbers convert to enum variants by discriminant, and to strings.
    /// - Wrappers convert through their wrapped type.
    ///
    /// Returns `None` if no conversion applies, `Null` never converts.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_reflect::info::Typed;
    /// use vc_serial::Variant;
    ///
    /// let value = Variant::Int(300).convert(u16::type_info()).unwrap();
    /// assert_eq!(value.downcast_ref::<u16>(), Some(&300));
    ///
    /// assert!(Variant::Int(300).convert(u8::type_info()).is_none());
    /// assert!(Variant::Float(1.5).convert(i32::type_info()).is_none());
    /// assert!(Variant::Str("2".into()).convert(u8::type_info()).is_some());
    /// ```
    pub fn convert(&self, info: &'static TypeInfo) -> Option<Box<dyn Reflect>> {
        if !self.is_scalar() {
            return None;
        }

        match info {
            TypeInfo::Atomic(atomic) => self.convert_atomic(atomic.kind()),
            TypeInfo::Enum(info) => match self {
                Self::Str(name) => info.from_name(name),
                Self::Int(v) => info.from_discriminant(u64::try_from(*v).ok()?),
                Self::UInt(v) => info.from_discriminant(*v),
                _ => None,
            },
            TypeInfo::Opaque(info) => match self {
                Self::Str(text) => info.from_str(text),
                _ => None,
            },
            TypeInfo::Wrapper(info) => {
                let inner = self.convert(info.wrapped_info())?;
                info.wrap(inner).ok()
            }
            TypeInfo::Struct(_) | TypeInfo::List(_) | TypeInfo::Map(_) | TypeInfo::Set(_) => None,
        }
    }

    fn convert_atomic(&self, kind: AtomicKind) -> Option<Box<dyn Reflect>> {
        match kind {
            AtomicKind::Bool => self.to_bool().map(boxed),
            AtomicKind::Char => self.to_char().map(boxed),
            AtomicKind::I8 => self.to_integer::<i8>().map(boxed),
            AtomicKind::I16 => self.to_integer::<i16>().map(boxed),
            AtomicKind::I32 => self.to_integer::<i32>().map(boxed),
            AtomicKind::I64 => self.to_integer::<i64>().map(boxed),
            AtomicKind::Isize => self.to_integer::<isize>().map(boxed),
            AtomicKind::U8 => self.to_integer::<u8>().map(boxed),
            AtomicKind::U16 => self.to_integer::<u16>().map(boxed),
            AtomicKind::U32 => self.to_integer::<u32>().map(boxed),
            AtomicKind::U64 => self.to_integer::<u64>().map(boxed),
            AtomicKind::Usize => self.to_integer::<usize>().map(boxed),
            AtomicKind::F32 => self.to_float().map(|v| boxed(v as f32)),
            AtomicKind::F64 => self.to_float().map(boxed),
            AtomicKind::String => self.to_text().map(boxed),
        }
    }

    fn to_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            Self::Int(v) => Some(*v != 0),
            Self::UInt(v) => Some(*v != 0),
            Self::Str(v) => v.trim().parse().ok(),
            _ => None,
        }
    }

    fn to_char(&self) -> Option<char> {
        match self {
            Self::Char(v) => Some(*v),
            Self::Str(v) => {
                let mut chars = v.chars();
                let first = chars.next()?;
                chars.next().is_none().then_some(first)
            }
            _ => None,
        }
    }

    fn to_integer<T: TryFrom<i128> + FromStr>(&self) -> Option<T> {
        let wide = match self {
            Self::Bool(v) => i128::from(*v),
            Self::Int(v) => i128::from(*v),
            Self::UInt(v) => i128::from(*v),
            Self::Float(v) => integral(*v)?,
            Self::Str(v) => return v.trim().parse().ok(),
            _ => return None,
        };
        T::try_from(wide).ok()
    }

    fn to_float(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::UInt(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Str(v) => v.trim().parse().ok(),
            _ => None,
        }
    }

    fn to_text(&self) -> Option<String> {
        match self {
            Self::Bool(v) => Some(v.to_string()),
            Self::Char(v) => Some(v.to_string()),
            Self::Int(v) => Some(v.to_string()),
            Self::UInt(v) => Some(v.to_string()),
            Self::Float(v) => Some(v.to_string()),
            Self::Str(v) => Some(v.to_string()),
            _ => None,
        }
    }
}

#[inline]
fn boxed<T: Reflect>(value: T) -> Box<dyn Reflect> {
    Box::new(value)
}

/// Returns the integer value of `value` if it has no fractional part.
fn integral(value: f64) -> Option<i128> {
    const LIMIT: f64 = 1.7e38;
    (value.is_finite() && value.fract() == 0.0 && value.abs() < LIMIT).then(|| value as i128)
}

impl fmt::Debug for Variant<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::Char(v) => f.debug_tuple("Char").field(v).finish(),
            Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
            Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Self::Str(v) => f.debug_tuple("Str").field(v).finish(),
            Self::Reference(v) => f.debug_tuple("Reference").field(v).finish(),
            Self::Enum(v) => f.debug_tuple("Enum").field(&v.variant_name()).finish(),
            Self::Sequential(v) => write!(f, "Sequential({})", v.reflect_type_info().type_path()),
            Self::Map(v) => write!(f, "Map({})", v.reflect_type_info().type_path()),
            Self::Set(v) => write!(f, "Set({})", v.reflect_type_info().type_path()),
            Self::Object(v) => write!(f, "Object({})", v.reflect_type_info().type_path()),
            Self::Wrapped(v) => write!(f, "Wrapped({})", v.reflect_type_info().type_path()),
            Self::Opaque(v) => write!(f, "Opaque({})", v.reflect_type_info().type_path()),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use serde_json::json;
    use uuid::Uuid;
    use vc_reflect::derive::Reflect;
    use vc_reflect::info::Typed;

    use super::Variant;
    use crate::uuid::{ObjectRef, UuidRef};

    #[derive(Reflect, Debug, PartialEq)]
    enum Filter {
        Point,
        Linear = 4,
    }

    #[test]
    fn classify_live_values() {
        assert!(matches!(Variant::of(&5_u16), Variant::UInt(5)));
        assert!(matches!(Variant::of(&'x'), Variant::Char('x')));
        assert!(matches!(Variant::of(&vec![1_u8]), Variant::Sequential(_)));
        assert!(matches!(Variant::of(&Filter::Linear), Variant::Enum(_)));
        assert!(matches!(Variant::of(&Box::new(1_u8)), Variant::Wrapped(_)));

        let reference = UuidRef::object(Uuid::from_u128(3));
        assert!(matches!(Variant::of(&reference), Variant::Reference(r) if r == reference));
        assert!(matches!(Variant::of(&Uuid::nil()), Variant::Opaque(_)));
        assert!(matches!(Variant::of(&ObjectRef::null()), Variant::Wrapped(_)));
    }

    #[test]
    fn scalars_keep_their_numeric_form() {
        let (int, uint, float) = (json!(-3), json!(u64::MAX), json!(0.25));
        assert!(matches!(Variant::from_document(&int), Variant::Int(-3)));
        assert!(matches!(Variant::from_document(&uint), Variant::UInt(u64::MAX)));
        assert!(matches!(Variant::from_document(&float), Variant::Float(v) if v == 0.25));

        let array = json!([1]);
        assert!(matches!(Variant::from_document(&array), Variant::Null));
    }

    #[test]
    fn integer_conversions_are_range_checked() {
        let get = |variant: Variant<'_>| variant.convert(i8::type_info()).map(|v| v.take::<i8>().unwrap());
        assert_eq!(get(Variant::Int(-128)), Some(-128));
        assert_eq!(get(Variant::Int(128)), None);
        assert_eq!(get(Variant::UInt(7)), Some(7));
        assert_eq!(get(Variant::Float(4.0)), Some(4));
        assert_eq!(get(Variant::Float(4.5)), None);
        assert_eq!(get(Variant::Str(" 12 ".into())), Some(12));
        assert_eq!(get(Variant::Null), None);

        let u = Variant::Int(-1).convert(u32::type_info());
        assert!(u.is_none());
        let f = Variant::UInt(3).convert(f32::type_info()).unwrap();
        assert_eq!(f.take::<f32>().unwrap(), 3.0);
    }

    #[test]
    fn text_conversions() {
        let s = Variant::Float(0.5).convert(String::type_info()).unwrap();
        assert_eq!(s.take::<String>().unwrap(), "0.5");

        let c = Variant::Str("é".into()).convert(char::type_info()).unwrap();
        assert_eq!(c.take::<char>().unwrap(), 'é');
        assert!(Variant::Str("ab".into()).convert(char::type_info()).is_none());

        let b = Variant::Str("true".into()).convert(bool::type_info()).unwrap();
        assert!(b.take::<bool>().unwrap());
    }

    #[test]
    fn enum_and_opaque_conversions() {
        let by_name = Variant::Str("Linear".into()).convert(Filter::type_info()).unwrap();
        assert_eq!(by_name.take::<Filter>().unwrap(), Filter::Linear);

        let by_value = Variant::UInt(0).convert(Filter::type_info()).unwrap();
        assert_eq!(by_value.take::<Filter>().unwrap(), Filter::Point);
        assert!(Variant::Int(2).convert(Filter::type_info()).is_none());
        assert!(Variant::Int(-1).convert(Filter::type_info()).is_none());

        let id = Uuid::from_u128(77);
        let text = Variant::Str(id.to_string().into());
        assert_eq!(text.convert(Uuid::type_info()).unwrap().take::<Uuid>().unwrap(), id);
    }

    #[test]
    fn wrapper_conversions_go_through_the_wrapped_type() {
        let value = Variant::Int(9).convert(<Box<u64> as Typed>::type_info()).unwrap();
        assert_eq!(value.take::<Box<u64>>().unwrap(), Box::new(9));
    }
}
