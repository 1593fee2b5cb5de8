// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Bridge module: groups loading, marshalling and the public call surface.

pub mod config;
pub mod error;
pub mod library;
pub mod marshal;
pub mod mutual_information;
pub mod native;
pub mod traits;

pub use config::BridgeConfig;
pub use error::{BridgeError, Sequence};
pub use library::NativeLibrary;
pub use marshal::SamplePair;
pub use mutual_information::{
    MiBridge, MutualInformation, NativeMutualInformation, default_bridge, st_mi,
};
pub use native::{NativeRoutine, StMiFn};
pub use traits::{GlobalValue, MutualInformationRoutine};
