// SPDX-License-Identifier: Apache-2.0

//! A recursive-descent JSON parser that builds an owned [`Value`] tree.
//!
//! Variable-length content (string bytes, array elements, object members) is
//! staged on a per-parse [`ScratchStack`] and compacted into exactly sized
//! heap storage once the closing delimiter is seen.
//!
//! ```
//! use scratchjson::{parse_str, ValueType};
//!
//! let value = parse_str(r#"{"name": "value", "list": [1, 2, 3]}"#).unwrap();
//! assert_eq!(value.get_type(), ValueType::Object);
//! assert_eq!(value.get_object_key(0), b"name");
//! assert_eq!(value.get_object_value(1).get_array_size(), 3);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod config;
pub use config::{DefaultConfig, ScratchConfig};

mod parse_error;
pub use parse_error::ParseError;

mod slice_input_buffer;

mod scratch_stack;
pub use scratch_stack::ScratchStack;

mod number_parser;

mod value;
pub use value::{Member, Value, ValueType};

mod parser;
pub use parser::{parse, parse_str, Parser};
