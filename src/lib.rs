// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # mi-bridge
//!
//! Thin binding to a pre-compiled native library exporting a mutual-information
//! routine over two paired integer sample sequences.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mi_bridge::{BridgeConfig, MiBridge};
//!
//! let bridge = MiBridge::load(&BridgeConfig::new("./libmi.so"))?;
//! let mi = bridge.st_mi(&[0, 1, 1, 0], &[0, 1, 0, 0])?;
//! println!("I(X;Y) = {mi}");
//! # Ok::<(), mi_bridge::BridgeError>(())
//! ```
//!
//! Or, using the default library location (`./libmi.so` on Linux) and a lazily
//! initialised process-wide bridge:
//!
//! ```no_run
//! let mi = mi_bridge::st_mi(&[0, 1, 1, 0], &[0, 1, 0, 0])?;
//! # Ok::<(), mi_bridge::BridgeError>(())
//! ```
//!
//! ## Native Contract
//!
//! The library must export
//!
//! ```c
//! float st_mi(int *x, int *y, int n);
//! ```
//!
//! The estimator itself (binning, logarithm base, degenerate inputs) belongs to
//! the native side. This crate validates and marshals inputs, makes exactly one
//! call, and widens the `float` result to `f64` without touching its value.
//!
//! ## Architecture
//!
//! 1. **Public API Layer**: [`MiBridge`], the [`MutualInformation`] factory and the
//!    free [`st_mi`] function
//! 2. **Marshalling**: [`SamplePair`] validates lengths and element ranges
//! 3. **Native Layer**: [`NativeLibrary`] and [`NativeRoutine`] behind the
//!    [`MutualInformationRoutine`] seam, which test doubles implement as well
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger itself.

pub mod bridge;

pub use bridge::{
    BridgeConfig, BridgeError, GlobalValue, MiBridge, MutualInformation,
    MutualInformationRoutine, NativeLibrary, NativeMutualInformation, NativeRoutine, SamplePair,
    Sequence, default_bridge, st_mi,
};
