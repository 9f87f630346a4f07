use alloc::boxed::Box;
use alloc::collections::VecDeque;

use crate::impls::GenericTypeInfoCell;
use crate::info::{ListInfo, TypeInfo, Typed};
use crate::ops::List;
use crate::Reflect;

impl<T: Reflect + Typed> Typed for VecDeque<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::List(ListInfo::new::<Self, T>().with_default::<Self>())
        })
    }
}

impl<T: Reflect + Typed> Reflect for VecDeque<T> {
    crate::reflection::impl_reflect_cast_fn!(List);
}

impl<T: Reflect + Typed> List for VecDeque<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        VecDeque::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        VecDeque::get_mut(self, index).map(Reflect::as_reflect_mut)
    }

    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        VecDeque::push_back(self, value.take::<T>()?);
        Ok(())
    }

    #[inline]
    fn truncate(&mut self, len: usize) {
        VecDeque::truncate(self, len);
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}
