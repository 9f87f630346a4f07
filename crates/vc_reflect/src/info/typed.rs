use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Automatically implemented by [`#[derive(Reflect)]`](crate::derive::Reflect),
/// allowing access to type information without an instance of the type.
///
/// # Examples
///
/// ```
/// use vc_reflect::{derive::Reflect, info::{Typed, TypeInfo}};
///
/// #[derive(Reflect)]
/// struct A { /* ... */ }
///
/// let info: &'static TypeInfo = <A as Typed>::type_info();
/// assert!(info.is_struct());
/// ```
///
/// # Manually Impl
///
/// Use [`NonGenericTypeInfoCell`] for non-generic types, and
/// [`GenericTypeInfoCell`] when the `static` may be shared by several
/// instantiations:
///
/// ```
/// use vc_reflect::{
///     info::{Typed, TypeInfo, StructInfo, NamedField},
///     impls::NonGenericTypeInfoCell,
/// };
///
/// struct Manual {
///     foo: usize,
/// }
///
/// impl Typed for Manual {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Struct(
///             StructInfo::new::<Self>(&[NamedField::new::<usize>("foo")])
///         ))
///     }
/// }
///
/// assert_eq!(Manual::type_info().as_struct().unwrap().field_len(), 1);
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: 'static {
    /// A static accessor to compile-time type information.
    fn type_info() -> &'static TypeInfo;
}
