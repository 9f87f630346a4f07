use alloc::boxed::Box;
use alloc::string::{String, ToString};

use ::uuid::Uuid;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, Typed};

impl Typed for Uuid {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| {
            TypeInfo::Opaque(
                OpaqueInfo::new::<Self>()
                    .with_default::<Self>()
                    .with_from_str(|text| {
                        let id = Uuid::parse_str(text).ok()?;
                        Some(Box::new(id))
                    }),
            )
        })
    }
}

impl Reflect for Uuid {
    crate::reflection::impl_reflect_cast_fn!(Opaque);

    #[inline]
    fn reflect_to_string(&self) -> Option<String> {
        Some(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use ::uuid::Uuid;

    use crate::Reflect;
    use crate::info::Typed;

    #[test]
    fn uuid_textual_form() {
        let id = Uuid::from_u128(0x1234_5678_9abc_def0_1234_5678_9abc_def0);
        let text = id.reflect_to_string().unwrap();
        assert_eq!(text, "12345678-9abc-def0-1234-56789abcdef0");

        let info = <Uuid as Typed>::type_info().as_opaque().unwrap();
        let parsed = info.from_str(&text).unwrap();
        assert_eq!(parsed.downcast_ref::<Uuid>(), Some(&id));
        assert!(info.from_str("not a uuid").is_none());
    }
}
