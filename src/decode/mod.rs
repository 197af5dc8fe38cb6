//! Response decoding module
//!
//! # Overview
//!
//! Every extract operation in this crate goes through the same two steps:
//! hold on to the raw response body as received from the transport, then
//! deserialize it into a caller-chosen shape. [`RawResponse`] is the
//! holder; [`extract_into`] is the single generic decode function.

mod decoders;
mod types;

pub use decoders::{extract_into, extract_value};
pub use types::RawResponse;
