//! Common types for Battleship: coordinates, cell states, shot results and errors.

use core::fmt;

use crate::config::BOARD_SIZE;

/// A grid position. Rows display as letters `A..J`, columns as digits `0..9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: u8,
    pub col: u8,
}

impl Coordinate {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns `true` when both components lie on the board.
    pub const fn is_valid(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Step by (`dr`, `dc`), returning `None` when the result leaves the board.
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if row < 0 || col < 0 {
            return None;
        }
        let next = Self::new(row as u8, col as u8);
        next.is_valid().then_some(next)
    }

    /// The up to four in-bounds orthogonal neighbours, ordered up, down, left, right.
    pub fn orthogonal_neighbors(self) -> impl Iterator<Item = Coordinate> {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dr, dc)| self.offset(dr, dc))
    }

    /// The up to eight in-bounds neighbours, including diagonals.
    pub fn surrounding(self) -> impl Iterator<Item = Coordinate> {
        (-1i8..=1)
            .flat_map(|dr| (-1i8..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(move |(dr, dc)| self.offset(dr, dc))
    }

    /// Chebyshev distance between two coordinates.
    pub fn chebyshev(&self, other: &Coordinate) -> u8 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Iterate all board coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coordinate::new(row, col)))
    }

    /// Two-byte transport form `[row, col]`.
    pub const fn to_wire(self) -> [u8; 2] {
        [self.row, self.col]
    }

    pub fn from_wire(bytes: [u8; 2]) -> Result<Self, WireError> {
        let coord = Self::new(bytes[0], bytes[1]);
        if coord.is_valid() {
            Ok(coord)
        } else {
            Err(WireError::CoordinateOutOfRange { row: bytes[0], col: bytes[1] })
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}{}", (b'A' + self.row) as char, self.col)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// State of a single grid cell. `Miss` and `Hit` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    ShipPresent,
    Miss,
    Hit,
}

impl CellState {
    /// Returns `true` once the cell has been fired at.
    pub fn is_attacked(self) -> bool {
        matches!(self, CellState::Miss | CellState::Hit)
    }
}

/// Outcome of a shot. The discriminants are the transport codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ShotResult {
    Miss = 0,
    Hit = 1,
    Sunk = 2,
    Invalid = 3,
    Win = 4,
}

impl ShotResult {
    /// Transport code of this result.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns `true` for every outcome that struck a ship.
    pub fn is_hit(self) -> bool {
        matches!(self, ShotResult::Hit | ShotResult::Sunk | ShotResult::Win)
    }
}

impl TryFrom<u8> for ShotResult {
    type Error = WireError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ShotResult::Miss),
            1 => Ok(ShotResult::Hit),
            2 => Ok(ShotResult::Sunk),
            3 => Ok(ShotResult::Invalid),
            4 => Ok(ShotResult::Win),
            other => Err(WireError::UnknownResultCode(other)),
        }
    }
}

impl fmt::Display for ShotResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ShotResult::Miss => "miss",
            ShotResult::Hit => "hit",
            ShotResult::Sunk => "sunk",
            ShotResult::Invalid => "invalid",
            ShotResult::Win => "win",
        };
        f.write_str(s)
    }
}

#[cfg(feature = "std")]
impl serde::Serialize for ShotResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

#[cfg(feature = "std")]
impl<'de> serde::Deserialize<'de> for ShotResult {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = <u8 as serde::Deserialize>::deserialize(deserializer)?;
        ShotResult::try_from(code).map_err(serde::de::Error::custom)
    }
}

/// Errors returned by Board placement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Some cell of the ship falls outside the grid.
    OutOfBounds,
    /// Some cell of the ship is not empty.
    Overlaps,
    /// The ship would touch another ship, diagonals included.
    TooClose,
    /// Random fleet placement hit its restart ceiling.
    FleetPlacementFailed { restarts: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::Overlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::TooClose => write!(f, "Ship placement touches another ship"),
            BoardError::FleetPlacementFailed { restarts } => {
                write!(f, "Unable to place fleet after {} restarts", restarts)
            }
        }
    }
}

/// Defects reported by a targeting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyError {
    /// No unattacked coordinate remains.
    Exhausted,
    /// The strategy was told that one of its own shots was invalid.
    InvalidShotReported(Coordinate),
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyError::Exhausted => write!(f, "No valid targets remain"),
            StrategyError::InvalidShotReported(c) => {
                write!(f, "Strategy chose an already attacked cell at {}", c)
            }
        }
    }
}

/// Errors decoding transport values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    CoordinateOutOfRange { row: u8, col: u8 },
    UnknownResultCode(u8),
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireError::CoordinateOutOfRange { row, col } => {
                write!(f, "Coordinate out of range: row={}, col={}", row, col)
            }
            WireError::UnknownResultCode(code) => write!(f, "Unknown shot result code {}", code),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for StrategyError {}
#[cfg(feature = "std")]
impl std::error::Error for WireError {}
