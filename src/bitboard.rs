//! A fixed-size cell set packed into an unsigned integer.
//!
//! `BitBoard<T, N>` stores one bit per cell of an `N×N` grid inside `T`. It is
//! used for ship occupancy, the no-touch exclusion zone around placed ships,
//! and each strategy's record of cells it has already fired at.

use core::ops::{BitAnd, BitOr, BitOrAssign, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::Coordinate;

/// A set of cells on an `N×N` grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const BOARD_BITS: usize = N * N;

    /// Fails to compile when the grid does not fit into `T`.
    const FITS: () = assert!(N * N <= mem::size_of::<T>() * 8, "N*N exceeds T::BITS");

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    #[inline]
    fn index(coord: Coordinate) -> Option<usize> {
        let (r, c) = (coord.row as usize, coord.col as usize);
        (r < N && c < N).then_some(r * N + c)
    }

    /// Create an empty set.
    #[inline]
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS;
        BitBoard { bits: T::zero() }
    }

    /// Returns the number of cells in the set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test; coordinates off the grid are never members.
    pub fn contains(&self, coord: Coordinate) -> bool {
        match Self::index(coord) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Add `coord`. Returns `false` (and does nothing) when it is off the grid.
    pub fn insert(&mut self, coord: Coordinate) -> bool {
        match Self::index(coord) {
            Some(idx) => {
                self.bits = self.bits | (T::one() << idx);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, coord: Coordinate) {
        if let Some(idx) = Self::index(coord) {
            self.bits = self.bits & !(T::one() << idx);
        }
    }

    /// Clears every cell.
    #[inline]
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    /// The set grown by one cell in all eight directions.
    pub fn dilate(&self) -> Self {
        let mut grown = *self;
        for cell in self.iter() {
            for n in cell.surrounding() {
                grown.insert(n);
            }
        }
        grown
    }

    #[inline]
    pub fn into_raw(self) -> T {
        self.bits
    }

    /// Creates a set from the raw integer, masking out bits beyond the grid.
    #[inline]
    pub fn from_raw(raw: T) -> Self {
        BitBoard {
            bits: raw & Self::mask(),
        }
    }

    /// Iterator over the members in row-major order.
    #[inline]
    pub fn iter(&self) -> Cells<T, N> {
        Cells {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> FromIterator<Coordinate> for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Coordinates off the grid are dropped.
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut board = Self::new();
        for coord in iter {
            board.insert(coord);
        }
        board
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if self.contains(Coordinate::new(r as u8, c as u8)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the members of a bitboard.
#[derive(Clone, Copy)]
pub struct Cells<T, const N: usize> {
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for Cells<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some(Coordinate::new((idx / N) as u8, (idx % N) as u8));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.bits & rhs.bits)
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.bits | rhs.bits)
    }
}

impl<T, const N: usize> BitOrAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}

/// Complement within the grid.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_raw(!self.bits)
    }
}
