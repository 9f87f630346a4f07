//! The path of the property being processed, for log messages.
//!
//! Only tracked with the `debug` feature in Debug mode; otherwise the
//! functions here cost nothing and messages name the leaf alone.

#[cfg(all(debug_assertions, feature = "debug"))]
use alloc::{string::String, vec::Vec};

#[cfg(all(debug_assertions, feature = "debug"))]
std::thread_local! {
    static PROPERTY_PATH: core::cell::RefCell<Vec<&'static str>> =
        const { core::cell::RefCell::new(Vec::new()) };
}

/// Pops the segment it pushed when dropped, so a panicking `f` leaves the
/// path balanced.
#[cfg(all(debug_assertions, feature = "debug"))]
struct SegmentGuard;

#[cfg(all(debug_assertions, feature = "debug"))]
impl SegmentGuard {
    fn push(segment: &'static str) -> Self {
        PROPERTY_PATH.with_borrow_mut(|path| path.push(segment));
        SegmentGuard
    }
}

#[cfg(all(debug_assertions, feature = "debug"))]
impl Drop for SegmentGuard {
    fn drop(&mut self) {
        PROPERTY_PATH.with_borrow_mut(|path| {
            path.pop();
        });
    }
}

/// Runs `f` with `segment` pushed onto the property path.
#[inline]
pub(crate) fn scoped<R>(segment: &'static str, f: impl FnOnce() -> R) -> R {
    #[cfg(all(debug_assertions, feature = "debug"))]
    let _guard = SegmentGuard::push(segment);

    #[cfg(not(all(debug_assertions, feature = "debug")))]
    let _ = segment;

    f()
}

/// Returns the dotted property path, or `fallback` if it is not tracked.
#[cfg(all(debug_assertions, feature = "debug"))]
pub(crate) fn current_or(fallback: &str) -> String {
    PROPERTY_PATH.with_borrow(|path| {
        if path.is_empty() {
            fallback.into()
        } else {
            path.join(".")
        }
    })
}

#[cfg(not(all(debug_assertions, feature = "debug")))]
#[inline]
pub(crate) fn current_or(fallback: &str) -> alloc::string::String {
    fallback.into()
}

#[cfg(all(test, debug_assertions, feature = "debug"))]
mod tests {
    use super::{current_or, scoped};

    #[test]
    fn nested_segments_are_joined() {
        assert_eq!(current_or("root"), "root");
        let inner = scoped("light", || scoped("color", || current_or("x")));
        assert_eq!(inner, "light.color");
        assert_eq!(current_or("root"), "root");
    }

    #[test]
    fn unwinding_pops_the_segment() {
        let result = std::panic::catch_unwind(|| {
            scoped("mesh", || scoped::<()>("lods", || panic!("decoder bug")));
        });
        assert!(result.is_err());
        assert_eq!(current_or("root"), "root");
    }
}
