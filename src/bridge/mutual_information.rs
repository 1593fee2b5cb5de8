// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::bridge::config::BridgeConfig;
use crate::bridge::error::BridgeError;
use crate::bridge::marshal::SamplePair;
use crate::bridge::native::NativeRoutine;
use crate::bridge::traits::{GlobalValue, MutualInformationRoutine};
use log::{trace, warn};
use ndarray::ArrayView1;
use once_cell::sync::OnceCell;

/// An initialised bridge to a mutual-information routine.
///
/// Construct once with [`MiBridge::load`] and share by reference; the bridge is
/// read-only after construction. Tests substitute the routine through
/// [`MiBridge::with_routine`].
#[derive(Debug)]
pub struct MiBridge<R = NativeRoutine> {
    routine: R,
}

impl MiBridge<NativeRoutine> {
    /// Load the native library described by `config` and bind its routine.
    ///
    /// Fails with [`BridgeError::LibraryLoad`] or [`BridgeError::SymbolResolution`].
    pub fn load(config: &BridgeConfig) -> Result<Self, BridgeError> {
        NativeRoutine::bind(config).map(Self::with_routine)
    }

    /// Load from the default location, `./libmi.so` or its platform equivalent.
    pub fn load_default() -> Result<Self, BridgeError> {
        Self::load(&BridgeConfig::default())
    }
}

impl<R: MutualInformationRoutine> MiBridge<R> {
    pub fn with_routine(routine: R) -> Self {
        Self { routine }
    }

    pub fn routine(&self) -> &R {
        &self.routine
    }

    /// Mutual information between two paired integer sequences.
    ///
    /// Inputs are validated before the routine runs: a length mismatch, empty
    /// input or a value outside `i32` is returned as an error and the routine is
    /// not called. The routine's `f32` result is widened to `f64` unchanged.
    pub fn st_mi<X, Y>(&self, x: &[X], y: &[Y]) -> Result<f64, BridgeError>
    where
        X: Copy + TryInto<i32>,
        Y: Copy + TryInto<i32>,
    {
        let mut samples = SamplePair::marshal(x, y)?;
        Ok(self.call(&mut samples))
    }

    /// [`st_mi`](Self::st_mi) over `ndarray` views.
    pub fn st_mi_array(
        &self,
        x: ArrayView1<'_, i32>,
        y: ArrayView1<'_, i32>,
    ) -> Result<f64, BridgeError> {
        let mut samples = SamplePair::from_views(x, y)?;
        Ok(self.call(&mut samples))
    }

    fn call(&self, samples: &mut SamplePair) -> f64 {
        trace!("invoking mutual-information routine with n = {}", samples.n());
        let mi = self.routine.invoke(samples);
        if !mi.is_finite() {
            warn!(
                "mutual-information routine returned non-finite value {} for n = {}",
                mi,
                samples.n()
            );
        }
        f64::from(mi)
    }
}

/// Factory for mutual-information estimators backed by a bridge.
pub struct MutualInformation;

impl MutualInformation {
    /// Creates an estimator over `x` and `y` evaluated by `bridge`'s routine.
    ///
    /// The samples are validated and marshalled here, so all input errors are
    /// reported at construction.
    pub fn new_native<'a, R, X, Y>(
        bridge: &'a MiBridge<R>,
        x: &[X],
        y: &[Y],
    ) -> Result<NativeMutualInformation<'a, R>, BridgeError>
    where
        R: MutualInformationRoutine,
        X: Copy + TryInto<i32>,
        Y: Copy + TryInto<i32>,
    {
        Ok(NativeMutualInformation {
            bridge,
            samples: SamplePair::marshal(x, y)?,
        })
    }
}

/// Mutual information of a fixed sample pair, computed by a bridge's routine.
pub struct NativeMutualInformation<'a, R = NativeRoutine> {
    bridge: &'a MiBridge<R>,
    samples: SamplePair,
}

impl<R> NativeMutualInformation<'_, R> {
    pub fn samples(&self) -> &SamplePair {
        &self.samples
    }
}

impl<R: MutualInformationRoutine> GlobalValue for NativeMutualInformation<'_, R> {
    /// Each evaluation hands the routine a fresh copy of the buffers.
    fn global_value(&self) -> f64 {
        let mut samples = self.samples.clone();
        self.bridge.call(&mut samples)
    }
}

static DEFAULT_BRIDGE: OnceCell<MiBridge> = OnceCell::new();

/// The process-wide bridge over the default library location.
///
/// Initialised on first success; a failed load is not cached and is retried
/// on the next call.
pub fn default_bridge() -> Result<&'static MiBridge, BridgeError> {
    DEFAULT_BRIDGE.get_or_try_init(MiBridge::<NativeRoutine>::load_default)
}

/// Mutual information between `x` and `y` using the process-wide default bridge.
pub fn st_mi(x: &[i32], y: &[i32]) -> Result<f64, BridgeError> {
    default_bridge()?.st_mi(x, y)
}
