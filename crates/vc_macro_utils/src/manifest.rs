use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Name of the facade crate that re-exports every `vc_*` crate as a module.
const FACADE_NAME: &str = "vc_persist";
const MEMBER_PREFIX: &str = "vc_";

/// The invoking crate's `Cargo.toml`, used to find how it reaches another
/// crate of this workspace.
///
/// # Example
///
/// ```rust
/// # use vc_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("vc_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. A direct entry in `[dependencies]` resolves to `::name`.
/// 2. Otherwise, for `vc_xxx`, a dependency on `vc_persist` resolves to `::vc_persist::xxx`.
/// 3. The same two steps in `[dev-dependencies]`.
/// 4. Otherwise `::name`.
///
/// A crate that derives on its own types should declare
/// `extern crate self as name;` so that rule 4 also holds inside it.
#[derive(Debug)]
pub struct Manifest {
    document: Document<Box<str>>,
    modified: Option<SystemTime>,
}

impl Manifest {
    fn locate() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        Some(path)
    }

    fn load(path: &PathBuf) -> Self {
        let modified = fs::metadata(path).and_then(|m| m.modified()).ok();
        let text = fs::read_to_string(path)
            .unwrap_or_else(|err| panic!("unable to read `{}`: {err}", path.display()));
        let document = Document::parse(text.into_boxed_str())
            .unwrap_or_else(|err| panic!("unable to parse `{}`: {err}", path.display()));
        Self { document, modified }
    }

    fn parse_path(text: &str) -> syn::Path {
        syn::parse_str(text).unwrap_or_else(|_| panic!("`{text}` is not a valid path"))
    }

    fn lookup(table: &Table, name: &str) -> Option<syn::Path> {
        if table.contains_key(name) {
            return Some(Self::parse_path(&format!("::{name}")));
        }
        let module = name.strip_prefix(MEMBER_PREFIX)?;
        if table.contains_key(FACADE_NAME) {
            return Some(Self::parse_path(&format!("::{FACADE_NAME}::{module}")));
        }
        None
    }

    /// Returns the path of the crate `name` as seen from the invoking crate.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .filter_map(|key| match self.document.get(key) {
                Some(Item::Table(table)) => Some(table),
                _ => None,
            })
            .find_map(|table| Self::lookup(table, name))
            .unwrap_or_else(|| Self::parse_path(&format!("::{name}")))
    }

    /// Runs `func` on the invoking crate's manifest.
    ///
    /// Manifests are cached per path and reloaded when the file changes.
    /// Outside of cargo, an empty manifest is used.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static CACHE: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(path) = Self::locate() else {
            let empty = Manifest {
                document: Document::parse(Box::<str>::default()).unwrap_or_else(|_| unreachable!()),
                modified: None,
            };
            return func(&empty);
        };

        let modified = fs::metadata(&path).and_then(|m| m.modified()).ok();
        {
            let cache = CACHE.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = cache.get(&path)
                && manifest.modified.is_some()
                && manifest.modified == modified
            {
                return func(manifest);
            }
        }

        let manifest = Self::load(&path);
        let result = func(&manifest);
        CACHE
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);
        result
    }
}
