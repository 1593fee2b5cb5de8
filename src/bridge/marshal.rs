// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::bridge::error::{BridgeError, Sequence};
use ndarray::ArrayView1;

/// Two paired sample sequences copied into the native layout.
///
/// Construction is the only place inputs are validated: once a `SamplePair`
/// exists, both buffers hold exactly `n` elements and `n` fits the native
/// `int` length parameter. The caller's data is copied, never borrowed, so the
/// native routine cannot write through to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePair {
    x: Vec<i32>,
    y: Vec<i32>,
    n: i32,
}

impl SamplePair {
    /// Validate and copy two sequences.
    ///
    /// Checks run in this order: equal length, non-empty, length fits `i32`,
    /// every element fits `i32`. Elements keep their original order.
    pub fn marshal<X, Y>(x: &[X], y: &[Y]) -> Result<Self, BridgeError>
    where
        X: Copy + TryInto<i32>,
        Y: Copy + TryInto<i32>,
    {
        if x.len() != y.len() {
            return Err(BridgeError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.is_empty() {
            return Err(BridgeError::EmptyInput);
        }
        let n = i32::try_from(x.len()).map_err(|_| BridgeError::LengthOverflow { len: x.len() })?;

        Ok(Self {
            x: to_native(x, Sequence::X)?,
            y: to_native(y, Sequence::Y)?,
            n,
        })
    }

    /// Validate and copy two `ndarray` views; non-contiguous views are gathered first.
    pub fn from_views(x: ArrayView1<'_, i32>, y: ArrayView1<'_, i32>) -> Result<Self, BridgeError> {
        match (x.as_slice(), y.as_slice()) {
            (Some(xs), Some(ys)) => Self::marshal(xs, ys),
            _ => Self::marshal(&x.to_vec(), &y.to_vec()),
        }
    }

    /// Native array of the first sequence.
    pub fn x(&self) -> &[i32] {
        &self.x
    }

    /// Native array of the second sequence.
    pub fn y(&self) -> &[i32] {
        &self.y
    }

    /// Shared length passed to the native routine.
    pub fn n(&self) -> i32 {
        self.n
    }

    /// Number of paired samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false; an empty pair cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Raw arguments in native calling order: `(x_array, y_array, n)`.
    ///
    /// The pointers are valid for `n` elements each while `self` is borrowed.
    pub fn native_args(&mut self) -> (*mut i32, *mut i32, i32) {
        (self.x.as_mut_ptr(), self.y.as_mut_ptr(), self.n)
    }
}

fn to_native<T>(values: &[T], sequence: Sequence) -> Result<Vec<i32>, BridgeError>
where
    T: Copy + TryInto<i32>,
{
    values
        .iter()
        .enumerate()
        .map(|(index, &v)| {
            v.try_into()
                .map_err(|_| BridgeError::ValueOutOfRange { sequence, index })
        })
        .collect()
}
