// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::path::{Path, PathBuf};

/// Base name of the native library, without platform prefix or extension.
pub const DEFAULT_LIBRARY_NAME: &str = "mi";

/// Exported symbol of the mutual-information routine.
pub const DEFAULT_SYMBOL: &str = "st_mi";

/// Initialization options for [`MiBridge::load`](crate::MiBridge::load).
///
/// The defaults reproduce the conventional layout: `libmi.so` (or the platform
/// equivalent) in the current working directory, exporting `st_mi`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Path of the shared library
    pub library_path: PathBuf,
    /// Name of the exported routine
    pub symbol: String,
    /// Make the C runtime resolvable before loading the library
    pub preload_c_runtime: bool,
    /// Serialize native calls through a lock
    pub serialize_calls: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self::new(Path::new(".").join(platform_lib_name(DEFAULT_LIBRARY_NAME)))
    }
}

impl BridgeConfig {
    /// Creates a configuration for the library at `library_path` with default options.
    pub fn new(library_path: impl Into<PathBuf>) -> Self {
        Self {
            library_path: library_path.into(),
            symbol: DEFAULT_SYMBOL.to_string(),
            preload_c_runtime: true,
            serialize_calls: true,
        }
    }

    /// Overrides the exported symbol name.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Enables or disables the C runtime preload step.
    pub fn with_c_runtime_preload(mut self, enabled: bool) -> Self {
        self.preload_c_runtime = enabled;
        self
    }

    /// Enables or disables call serialization.
    ///
    /// Disable only when the native routine is known to be reentrant.
    pub fn with_serialized_calls(mut self, enabled: bool) -> Self {
        self.serialize_calls = enabled;
        self
    }
}

/// Get the platform-specific library filename.
pub fn platform_lib_name(name: &str) -> String {
    #[cfg(target_os = "windows")]
    {
        format!("{}.dll", name)
    }
    #[cfg(target_os = "macos")]
    {
        format!("lib{}.dylib", name)
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        format!("lib{}.so", name)
    }
}
