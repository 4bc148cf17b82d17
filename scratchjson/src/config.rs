// SPDX-License-Identifier: Apache-2.0

//! Compile-time parser configuration.

/// Configuration for the scratch stacks used during a parse.
///
/// Implement this on a marker type to tune the first allocation made by each
/// [`ScratchStack`](crate::ScratchStack):
///
/// ```
/// use scratchjson::{Parser, ScratchConfig};
///
/// struct Tiny;
/// impl ScratchConfig for Tiny {
///     const INITIAL_CAPACITY: usize = 16;
/// }
///
/// let value = Parser::<Tiny>::with_config(b"[1, 2, 3]").parse().unwrap();
/// assert_eq!(value.get_array_size(), 3);
/// ```
pub trait ScratchConfig {
    /// Capacity in bytes of the first allocation. Values below 2 are raised to 2.
    const INITIAL_CAPACITY: usize;
}

/// 256 byte initial scratch capacity.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConfig;

impl ScratchConfig for DefaultConfig {
    const INITIAL_CAPACITY: usize = 256;
}
