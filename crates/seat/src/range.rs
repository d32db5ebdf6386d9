use crate::*;

/// Largest allowed `end - start` for one batch of codes.
pub const MAX_SEAT_SPAN: u32 = 50;

/// An inclusive, validated range of seat numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatRange {
    start: u32,
    end: u32,
}

impl SeatRange {
    pub fn new(start: u32, end: u32) -> Result<Self, SeatError> {
        if start < 1 {
            return Err(SeatError::StartBelowOne(start));
        }
        if start > end {
            return Err(SeatError::Reversed { start, end });
        }
        if end - start > MAX_SEAT_SPAN {
            return Err(SeatError::TooMany {
                requested: end - start + 1,
                max: MAX_SEAT_SPAN + 1,
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }
}
