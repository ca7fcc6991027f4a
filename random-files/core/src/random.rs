// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::ops::{Range, RangeInclusive};

/// Source of every random draw the program makes.
/// Passed explicitly so runs can be scripted or seeded.
pub trait Random {
    fn usize(&mut self, range: Range<usize>) -> usize;
    fn u32(&mut self, range: RangeInclusive<u32>) -> u32;
}

impl<T: Random + ?Sized> Random for &mut T {
    fn usize(&mut self, range: Range<usize>) -> usize {
        (**self).usize(range)
    }
    fn u32(&mut self, range: RangeInclusive<u32>) -> u32 {
        (**self).u32(range)
    }
}
