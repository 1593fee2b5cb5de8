// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Native library loading and symbol lookup.

use crate::bridge::error::BridgeError;
use libloading::{Library, Symbol};
use log::debug;
use std::ffi::CString;
use std::path::{Path, PathBuf};

/// Soname of the C runtime preloaded on glibc systems.
#[cfg(all(target_os = "linux", target_env = "gnu"))]
pub const C_RUNTIME: &str = "libc.so.6";

/// A loaded native library.
///
/// The handle stays open for as long as this value lives; nothing in the crate
/// unloads it early.
#[derive(Debug)]
pub struct NativeLibrary {
    /// The underlying library handle
    library: Library,
    /// Path the library was loaded from
    path: PathBuf,
}

impl NativeLibrary {
    /// Load a native library from a path.
    ///
    /// A path with a directory component is opened as given; a bare file name is
    /// left to the dynamic loader's search rules.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BridgeError> {
        let path = path.as_ref();

        // SAFETY: loading runs the library's initialisers; the library is trusted
        // to be the mutual-information routine the caller configured.
        let library = unsafe { Library::new(path) }.map_err(|source| BridgeError::LibraryLoad {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded native library '{}'", path.display());

        Ok(Self {
            library,
            path: path.to_path_buf(),
        })
    }

    /// Make the C runtime resolvable by the dynamic loader.
    ///
    /// Loads `libc.so.6` on glibc Linux and returns its handle; on every other
    /// platform the runtime is already resolvable and this returns `Ok(None)`.
    pub fn load_c_runtime() -> Result<Option<Self>, BridgeError> {
        #[cfg(all(target_os = "linux", target_env = "gnu"))]
        {
            let runtime = Self::load(C_RUNTIME)?;
            debug!("preloaded C runtime '{}'", C_RUNTIME);
            Ok(Some(runtime))
        }
        #[cfg(not(all(target_os = "linux", target_env = "gnu")))]
        {
            Ok(None)
        }
    }

    /// Get a symbol from the library.
    ///
    /// # Safety
    ///
    /// The type `F` must match the actual type of the exported symbol.
    pub unsafe fn get_function<F>(&self, name: &str) -> Result<Symbol<'_, F>, BridgeError> {
        let c_name = CString::new(name).map_err(|_| BridgeError::SymbolResolution {
            symbol: name.to_string(),
            library: self.path.clone(),
            source: None,
        })?;

        // SAFETY: forwarded to the caller.
        unsafe { self.library.get(c_name.as_bytes_with_nul()) }.map_err(|source| {
            BridgeError::SymbolResolution {
                symbol: name.to_string(),
                library: self.path.clone(),
                source: Some(source),
            }
        })
    }

    /// Get the path of this library.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
