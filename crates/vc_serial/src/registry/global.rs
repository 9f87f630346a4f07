use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use vc_reflect::Reflect;

use super::CodecRegistry;
use crate::context::SerializationContext;
use crate::document::Document;
use crate::error::LifecycleError;

// -----------------------------------------------------------------------------
// RegistryState

enum RegistryState {
    Uninitialized,
    Initialized(CodecRegistry),
    Shutdown,
}

static REGISTRY: RwLock<RegistryState> = RwLock::new(RegistryState::Uninitialized);

fn read() -> RwLockReadGuard<'static, RegistryState> {
    REGISTRY.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, RegistryState> {
    REGISTRY.write().unwrap_or_else(PoisonError::into_inner)
}

// -----------------------------------------------------------------------------
// Lifecycle

/// Builds the process-wide registry with the built-in codecs.
///
/// A registry that was shut down may be initialized again.
pub fn try_initialize() -> Result<(), LifecycleError> {
    let mut state = write();
    if let RegistryState::Initialized(_) = *state {
        return Err(LifecycleError::AlreadyInitialized);
    }
    *state = RegistryState::Initialized(CodecRegistry::with_builtins());
    Ok(())
}

/// Tears down the process-wide registry, dropping every codec.
pub fn try_shutdown() -> Result<(), LifecycleError> {
    let mut state = write();
    if !matches!(*state, RegistryState::Initialized(_)) {
        return Err(LifecycleError::NotInitialized);
    }
    *state = RegistryState::Shutdown;
    Ok(())
}

/// Builds the process-wide registry with the built-in codecs.
///
/// # Panics
///
/// If the registry is already initialized.
pub fn initialize() {
    if let Err(err) = try_initialize() {
        panic!("`vc_serial::registry::initialize` failed: {err}");
    }
}

/// Tears down the process-wide registry.
///
/// # Panics
///
/// If the registry is not initialized.
pub fn shutdown() {
    if let Err(err) = try_shutdown() {
        panic!("`vc_serial::registry::shutdown` failed: {err}");
    }
}

pub fn is_initialized() -> bool {
    matches!(*read(), RegistryState::Initialized(_))
}

// -----------------------------------------------------------------------------
// Access

/// Runs `f` with the process-wide registry.
pub fn try_with_registry<R>(f: impl FnOnce(&CodecRegistry) -> R) -> Result<R, LifecycleError> {
    match &*read() {
        RegistryState::Initialized(registry) => Ok(f(registry)),
        RegistryState::Uninitialized | RegistryState::Shutdown => {
            Err(LifecycleError::NotInitialized)
        }
    }
}

/// Runs `f` with the process-wide registry.
///
/// # Panics
///
/// If the registry is not initialized.
pub fn with_registry<R>(f: impl FnOnce(&CodecRegistry) -> R) -> R {
    match try_with_registry(f) {
        Ok(output) => output,
        Err(err) => panic!("the process-wide codec registry is unavailable: {err}"),
    }
}

/// Runs `f` with mutable access to the process-wide registry.
///
/// Registration is meant for the startup phase; the lock only keeps the
/// registry sound if it happens later.
///
/// # Panics
///
/// If the registry is not initialized.
pub fn with_registry_mut<R>(f: impl FnOnce(&mut CodecRegistry) -> R) -> R {
    match &mut *write() {
        RegistryState::Initialized(registry) => f(registry),
        RegistryState::Uninitialized | RegistryState::Shutdown => {
            panic!(
                "the process-wide codec registry is unavailable: {}",
                LifecycleError::NotInitialized
            )
        }
    }
}

/// Registers an encoder and a decoder for `T` in the process-wide registry.
///
/// See [`CodecRegistry::register`].
///
/// # Panics
///
/// If the registry is not initialized.
pub fn register_codec<T: Reflect>(
    encode: impl Fn(&T, &SerializationContext) -> Document + Send + Sync + 'static,
    decode: impl Fn(&Document) -> Option<T> + Send + Sync + 'static,
) -> bool {
    with_registry_mut(|registry| registry.register::<T>(encode, decode))
}

// Every test of the crate that needs the process-wide registry lives here,
// since the lifecycle is shared by the whole test binary.
#[cfg(test)]
mod tests {
    use serde_json::json;
    use uuid::Uuid;
    use vc_reflect::derive::Reflect;

    use super::*;
    use crate::{deserialize, serialize};

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(default)]
    struct Marker {
        id: Uuid,
        level: u8,
    }

    #[test]
    fn process_wide_lifecycle() {
        assert!(!is_initialized());
        assert_eq!(try_shutdown(), Err(LifecycleError::NotInitialized));
        assert_eq!(try_with_registry(|_| ()), Err(LifecycleError::NotInitialized));

        initialize();
        assert!(is_initialized());
        assert_eq!(try_initialize(), Err(LifecycleError::AlreadyInitialized));
        assert!(with_registry(|registry| registry.contains::<Uuid>()));

        // Built-in codecs and first-registration-wins.
        assert!(!register_codec::<Uuid>(|_, _| json!(0), |_| None));
        assert!(register_codec::<u8>(|v, _| json!(format!("L{v}")), |doc| {
            doc.as_str()?.strip_prefix('L')?.parse().ok()
        }));

        let marker = Marker {
            id: Uuid::from_u128(1),
            level: 3,
        };
        let document = serialize(&marker);
        assert_eq!(
            document,
            json!({ "id": "00000000-0000-0000-0000-000000000001", "level": "L3" })
        );

        let mut copy = Marker::default();
        deserialize(&mut copy, &document);
        assert_eq!(copy, marker);

        shutdown();
        assert!(!is_initialized());
        assert_eq!(try_shutdown(), Err(LifecycleError::NotInitialized));

        // A new cycle starts from the built-in codecs only.
        initialize();
        assert_eq!(serialize(&marker)["level"], json!(3));
        shutdown();
    }
}
