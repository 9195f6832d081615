// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use thiserror::Error;

/// Errors returned by the fallible operations of a [`MinHeap`](crate::MinHeap).
///
/// All of them signal a misuse by the caller. The heap is left untouched when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// A heap was requested with a negative capacity.
    #[error("capacity must be non-negative, got {capacity}")]
    InvalidArgument { capacity: isize },
    /// An item was inserted into a heap that already holds `capacity` items.
    #[error("cannot insert into a full heap (capacity {capacity})")]
    CapacityExceeded { capacity: usize },
    /// The minimum of an empty heap was requested.
    #[error("cannot retrieve the minimum of an empty heap")]
    EmptyContainer,
}
