//! Ring buffers and history buffers for tracking past state.
//!
//! Three pieces build on each other:
//!
//! - [`RingCore`] tracks which slots in a fixed-capacity array are live,
//!   with no storage of its own.
//! - [`HistoryBuffer`] pairs `RingCore` with a `[T; N]` array, so pushing
//!   past capacity overwrites the oldest value.
//! - [`RandomAccessCursor`] is a random-access position into a
//!   `HistoryBuffer`, with cleared/past-the-end/valid states and signed
//!   arithmetic between cursors.
//!
//! [`IdRing`] is a sibling container: a runtime-sized ring of bare 64-bit
//! IDs meant to sit beside a caller-maintained parallel array, with ordered
//! (`lower_bound`) and unordered (`find_unordered`) search.
//!
//! # Example
//!
//! ```
//! use ring_history::HistoryBuffer;
//!
//! let mut history: HistoryBuffer<u32, 4> = HistoryBuffer::new();
//! for v in [1, 2, 3, 4, 5] {
//!     history.push_back(v);
//! }
//! assert_eq!(*history.front().unwrap(), 2); // 1 was overwritten
//! assert_eq!(*history.back().unwrap(), 5);
//! ```

mod cursor;
mod error;
#[cfg(feature = "ffi")]
pub mod ffi;
mod history_buffer;
mod id_ring;
mod ring_core;

pub use cursor::{Iter, RandomAccessCursor};
pub use error::RingError;
pub use history_buffer::HistoryBuffer;
pub use id_ring::{IdRing, IdRingHit};
pub use ring_core::RingCore;
