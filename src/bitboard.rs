//! Extension trait for treating a raw `u64` as a set of squares.

/// Convenience methods on `u64` bitboards.
pub trait BitboardExt {
    /// Index of the least-significant set bit, 0-63.
    ///
    /// Callers must ensure the bitboard is non-empty; an empty board returns
    /// 64, which is not a valid `Square` index and will fail downstream
    /// `TryFrom` conversions.
    fn lsb(&self) -> u8;

    /// Number of set bits.
    fn popcount(&self) -> u32;
}

impl BitboardExt for u64 {
    #[inline(always)]
    fn lsb(&self) -> u8 {
        self.trailing_zeros() as u8
    }

    #[inline(always)]
    fn popcount(&self) -> u32 {
        self.count_ones()
    }
}
