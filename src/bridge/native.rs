// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::bridge::config::BridgeConfig;
use crate::bridge::error::BridgeError;
use crate::bridge::library::NativeLibrary;
use crate::bridge::marshal::SamplePair;
use crate::bridge::traits::MutualInformationRoutine;
use libloading::Symbol;
use log::debug;
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Native signature: `float st_mi(int *x, int *y, int n)`.
pub type StMiFn = unsafe extern "C" fn(*mut i32, *mut i32, i32) -> f32;

/// The bound native routine together with the library that exports it.
///
/// Binding happens once in [`NativeRoutine::bind`]; afterwards the routine is
/// read-only. The function pointer is only valid while `library` is loaded,
/// which holds for the lifetime of this value.
pub struct NativeRoutine {
    function: StMiFn,
    symbol: String,
    call_lock: Option<Mutex<()>>,
    library: NativeLibrary,
    c_runtime: Option<NativeLibrary>,
}

impl NativeRoutine {
    /// Preload the C runtime (if configured), load the library and bind the symbol.
    pub fn bind(config: &BridgeConfig) -> Result<Self, BridgeError> {
        let c_runtime = if config.preload_c_runtime {
            NativeLibrary::load_c_runtime()?
        } else {
            None
        };

        let library = NativeLibrary::load(&config.library_path)?;

        // A null export decodes as `None` through the niche in `Option<fn>`.
        // SAFETY: `StMiFn` is the documented signature of the exported routine.
        let function = {
            let symbol: Symbol<'_, Option<StMiFn>> =
                unsafe { library.get_function(&config.symbol)? };
            *symbol
        };
        let function = function.ok_or_else(|| BridgeError::SymbolResolution {
            symbol: config.symbol.clone(),
            library: library.path().to_path_buf(),
            source: None,
        })?;
        debug!(
            "bound '{}' from '{}' (serialized calls: {})",
            config.symbol,
            library.path().display(),
            config.serialize_calls
        );

        Ok(Self {
            function,
            symbol: config.symbol.clone(),
            call_lock: config.serialize_calls.then(|| Mutex::new(())),
            library,
            c_runtime,
        })
    }

    /// The library the routine was bound from.
    pub fn library(&self) -> &NativeLibrary {
        &self.library
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Whether native calls are serialized.
    pub fn serializes_calls(&self) -> bool {
        self.call_lock.is_some()
    }

    /// Whether the C runtime was preloaded during binding.
    pub fn preloaded_c_runtime(&self) -> bool {
        self.c_runtime.is_some()
    }
}

impl MutualInformationRoutine for NativeRoutine {
    fn invoke(&self, samples: &mut SamplePair) -> f32 {
        // The lock guards no data, so a poisoned lock is still usable.
        let _guard = self
            .call_lock
            .as_ref()
            .map(|lock| lock.lock().unwrap_or_else(PoisonError::into_inner));
        let (x, y, n) = samples.native_args();
        // SAFETY: `function` stays valid while `self.library` is loaded, and
        // `SamplePair` guarantees both buffers hold exactly `n` elements.
        unsafe { (self.function)(x, y, n) }
    }
}

impl fmt::Debug for NativeRoutine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeRoutine")
            .field("symbol", &self.symbol)
            .field("library", &self.library.path())
            .field("serialize_calls", &self.serializes_calls())
            .field("c_runtime", &self.preloaded_c_runtime())
            .finish()
    }
}
