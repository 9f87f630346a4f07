use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::impls::GenericTypeInfoCell;
use crate::info::{ListInfo, TypeInfo, Typed};
use crate::ops::List;
use crate::Reflect;

impl<T: Reflect + Typed> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::List(ListInfo::new::<Self, T>().with_default::<Self>())
        })
    }
}

impl<T: Reflect + Typed> Reflect for Vec<T> {
    crate::reflection::impl_reflect_cast_fn!(List);
}

impl<T: Reflect + Typed> List for Vec<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(Reflect::as_reflect_mut)
    }

    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        Vec::push(self, value.take::<T>()?);
        Ok(())
    }

    #[inline]
    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len);
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::info::Typed;
    use crate::ops::List;

    #[test]
    fn vec_list_ops() {
        let mut v: Vec<String> = vec!["a".into(), "b".into()];
        let list: &mut dyn List = v.reflect_mut().as_list().unwrap();

        list.get_mut(1).unwrap().set(Box::new(String::from("c"))).unwrap();
        list.push(Box::new(String::from("d"))).unwrap();
        assert!(list.push(Box::new(1_u8)).is_err());
        assert_eq!(list.len(), 3);

        let items: Vec<&str> = list
            .iter()
            .map(|item| item.downcast_ref::<String>().unwrap().as_str())
            .collect();
        assert_eq!(items, ["a", "c", "d"]);

        list.truncate(1);
        assert_eq!(v, ["a"]);
    }

    #[test]
    fn vec_info() {
        let info = <Vec<Vec<u8>> as Typed>::type_info();
        assert!(info.is_sequential_container());
        assert!(info.as_list().unwrap().item_info().is_sequential_container());
        assert!(info.construct().unwrap().is::<Vec<Vec<u8>>>());
    }
}
