// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for loading the native library and calling into it.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which of the two paired sample sequences an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequence {
    X,
    Y,
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sequence::X => f.write_str("x"),
            Sequence::Y => f.write_str("y"),
        }
    }
}

/// All failures the bridge can report.
///
/// Initialization failures (`LibraryLoad`, `SymbolResolution`) surface from
/// [`MiBridge::load`](crate::MiBridge::load); input failures surface from every
/// call before the native routine is reached. Faults inside the native routine
/// itself are not observable here.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BridgeError {
    #[error("failed to load native library '{}': {source}", path.display())]
    LibraryLoad {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[error("symbol '{symbol}' could not be bound in '{}'", library.display())]
    SymbolResolution {
        symbol: String,
        library: PathBuf,
        #[source]
        source: Option<libloading::Error>,
    },

    #[error("sample sequences differ in length: x has {x_len} elements, y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("sample sequences are empty")]
    EmptyInput,

    #[error("{len} samples exceed the 32-bit length parameter of the native routine")]
    LengthOverflow { len: usize },

    #[error("element {index} of {sequence} does not fit in a 32-bit signed integer")]
    ValueOutOfRange { sequence: Sequence, index: usize },
}

impl BridgeError {
    /// True for errors raised while loading the library or binding its symbol.
    pub fn is_initialization(&self) -> bool {
        matches!(
            self,
            BridgeError::LibraryLoad { .. } | BridgeError::SymbolResolution { .. }
        )
    }
}
