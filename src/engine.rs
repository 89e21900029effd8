use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// A direction to slide/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Every direction, in the order move generation tries them. Search
    /// tie-breaks resolve toward the earliest entry of this array.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        })
    }
}

/// Running score; grows by the value of each merged tile.
pub type Score = u64;

/// One row or column, one byte-wide exponent per cell, cell 0 in the low
/// byte. The byte lanes are what make merge arithmetic a matter of 0xFF
/// masks and 8-bit shifts.
pub type Line = u64;

/// The four rows or four columns of a board.
pub type Lines = [Line; 4];

/// Packed 4x4 board with an 8-bit exponent per cell (0 = empty, `e` = tile
/// `2^e`), split across two words: cell `i` owns nibble `i` of `lo` and
/// nibble `i` of `hi`, which concatenate to the exponent. Cells run
/// row-major, four per 16-bit row segment, row 0 at the bottom of the
/// displayed grid. A cell is empty iff both of its nibbles are zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    lo: u64,
    hi: u64,
}

impl Board {
    /// A constant empty board (all zeros).
    pub const EMPTY: Board = Board { lo: 0, hi: 0 };

    /// Construct a `Board` from its raw packed words. This encoding is the
    /// crate's only wire format.
    #[inline]
    pub fn from_raw(lo: u64, hi: u64) -> Self {
        Board { lo, hi }
    }

    /// The raw packed words `(lo, hi)`.
    #[inline]
    pub fn raw(self) -> (u64, u64) {
        (self.lo, self.hi)
    }

    /// The exponent stored at `cell` (0..16, row-major).
    #[inline]
    pub fn exponent(self, cell: usize) -> u8 {
        debug_assert!(cell < 16);
        let lo = (self.lo >> (cell * 4)) & 0xF;
        let hi = (self.hi >> (cell * 4)) & 0xF;
        (lo | hi << 4) as u8
    }

    /// The largest exponent on the board (0 when empty).
    pub fn highest_exponent(self) -> u8 {
        (0..16).map(|cell| self.exponent(cell)).max().unwrap_or(0)
    }

    /// Count the empty cells.
    ///
    /// ```
    /// use minimax_2048::engine::Board;
    ///
    /// assert_eq!(Board::from_raw(0x11, 0).count_empty(), 14);
    /// // A tile living only in the high word still occupies its cell.
    /// assert_eq!(Board::from_raw(0, 0x1).count_empty(), 15);
    /// ```
    pub fn count_empty(self) -> u64 {
        let mut occupied = self.lo | self.hi;
        occupied |= occupied >> 1;
        occupied |= occupied >> 2;
        occupied &= 0x1111_1111_1111_1111;
        16 - u64::from(occupied.count_ones())
    }

    /// The four rows as byte-lane lines, row 0 first.
    pub fn rows(self) -> Lines {
        std::array::from_fn(|i| {
            interleave(
                (self.lo >> (16 * i)) & 0xFFFF,
                (self.hi >> (16 * i)) & 0xFFFF,
            )
        })
    }

    /// The four columns as byte-lane lines, column 0 first; lane `j` of a
    /// column line holds row `j`.
    pub fn columns(self) -> Lines {
        std::array::from_fn(|i| {
            gather_column(
                (self.lo >> (4 * i)) & 0x000F_000F_000F_000F,
                (self.hi >> (4 * i)) & 0x000F_000F_000F_000F,
            )
        })
    }

    /// Rebuild a board from row lines; exact inverse of [`Board::rows`].
    pub fn from_rows(lines: Lines) -> Board {
        let mut lo = 0;
        let mut hi = 0;
        for (i, &line) in lines.iter().enumerate() {
            let (line_lo, line_hi) = split(line);
            lo |= line_lo << (16 * i);
            hi |= line_hi << (16 * i);
        }
        Board { lo, hi }
    }

    /// Rebuild a board from column lines; exact inverse of
    /// [`Board::columns`].
    pub fn from_columns(lines: Lines) -> Board {
        let mut lo = 0;
        let mut hi = 0;
        for (i, &line) in lines.iter().enumerate() {
            let (col_lo, col_hi) = scatter_column(line);
            lo |= col_lo << (4 * i);
            hi |= col_hi << (4 * i);
        }
        Board { lo, hi }
    }

    /// Slide and merge every line toward `direction`, returning the new
    /// board and the score gained by merges. The move is legal iff the
    /// returned board differs from `self`.
    ///
    /// ```
    /// use minimax_2048::engine::{Board, Move};
    ///
    /// // Two adjacent 2-tiles in row 0 merge into a 4.
    /// let board = Board::from_raw(0x11, 0);
    /// let (shifted, gained) = board.shift(Move::Left);
    /// assert_eq!(shifted, Board::from_raw(0x2, 0));
    /// assert_eq!(gained, 4);
    /// ```
    pub fn shift(self, direction: Move) -> (Board, Score) {
        let mut lines = match direction {
            Move::Left | Move::Right => self.rows(),
            Move::Up | Move::Down => self.columns(),
        };
        // Merging always works toward lane 0 (Down/Left); the other two
        // directions reverse in and back out.
        let toward_far_edge = matches!(direction, Move::Up | Move::Right);
        if toward_far_edge {
            for line in &mut lines {
                *line = reverse_line(*line);
            }
        }
        let mut gained = 0;
        for line in &mut lines {
            let (merged, delta) = merge_line(*line);
            *line = merged;
            gained += delta;
        }
        if toward_far_edge {
            for line in &mut lines {
                *line = reverse_line(*line);
            }
        }
        let board = match direction {
            Move::Left | Move::Right => Board::from_rows(lines),
            Move::Up | Move::Down => Board::from_columns(lines),
        };
        (board, gained)
    }

    /// Write `exponent` into the `ordinal`-th empty cell in fixed scan
    /// order 0..16. Callers must keep `ordinal` below
    /// [`Board::count_empty`]; a violated precondition is a no-op in
    /// release builds.
    ///
    /// ```
    /// use minimax_2048::engine::Board;
    ///
    /// // Cells 0 and 2 are occupied, so empty ordinal 0 is cell 1.
    /// let board = Board::from_raw(0x101, 0);
    /// assert_eq!(board.place_tile(0, 3), Board::from_raw(0x131, 0));
    /// assert_eq!(board.place_tile(1, 3), Board::from_raw(0x3101, 0));
    /// ```
    pub fn place_tile(self, ordinal: u64, exponent: u8) -> Board {
        debug_assert!(
            ordinal < self.count_empty(),
            "placement ordinal {ordinal} out of range"
        );
        let mut remaining = ordinal;
        for cell in 0..16 {
            if (self.lo | self.hi) & (0xF << (cell * 4)) != 0 {
                continue;
            }
            if remaining == 0 {
                return Board {
                    lo: self.lo | (u64::from(exponent & 0xF) << (cell * 4)),
                    hi: self.hi | (u64::from(exponent >> 4) << (cell * 4)),
                };
            }
            remaining -= 1;
        }
        self
    }

    /// Insert a random 2 (90%) or 4 (10%) tile into a random empty cell,
    /// using the provided RNG. Play-out convenience; search never spawns
    /// randomly.
    ///
    /// ```
    /// use minimax_2048::engine::Board;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(123);
    /// let board = Board::EMPTY.with_random_tile(&mut rng).with_random_tile(&mut rng);
    /// assert_eq!(board.count_empty(), 14);
    /// ```
    pub fn with_random_tile<R: Rng + ?Sized>(self, rng: &mut R) -> Board {
        let empty = self.count_empty();
        if empty == 0 {
            return self;
        }
        let ordinal = rng.gen_range(0..empty);
        let exponent = if rng.gen_range(0..10) < 9 { 1 } else { 2 };
        self.place_tile(ordinal, exponent)
    }

    /// True if no direction changes the board. Note an empty board counts
    /// as over: without a tile, nothing can slide.
    pub fn is_game_over(self) -> bool {
        Move::ALL
            .iter()
            .all(|&direction| self.shift(direction).0 == self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({:#018x}, {:#018x})", self.lo, self.hi)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Row 3 renders on top, matching the on-screen orientation.
        for row in (0..4).rev() {
            for col in 0..4 {
                write!(f, "{:>8}", tile_label(self.exponent(row * 4 + col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Human-readable tile value for an exponent; exponents past the u64 range
/// print as powers.
pub fn tile_label(exponent: u8) -> String {
    match exponent {
        0 => String::from("."),
        e if e < 64 => (1u64 << e).to_string(),
        e => format!("2^{e}"),
    }
}

/// Failure to parse a board literal.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("expected `LOW:HIGH` hex word pair")]
    MissingSeparator,
    #[error("bad hex word `{0}`")]
    BadWord(String),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse `LOW:HIGH` hex words, with or without `0x` prefixes.
    ///
    /// ```
    /// use minimax_2048::engine::Board;
    ///
    /// let board: Board = "0x1001:0x0".parse().unwrap();
    /// assert_eq!(board, Board::from_raw(0x1001, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lo, hi) = s
            .split_once(':')
            .ok_or(ParseBoardError::MissingSeparator)?;
        Ok(Board::from_raw(parse_word(lo)?, parse_word(hi)?))
    }
}

fn parse_word(word: &str) -> Result<u64, ParseBoardError> {
    let trimmed = word.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    u64::from_str_radix(digits, 16).map_err(|_| ParseBoardError::BadWord(trimmed.to_string()))
}

/// Reverse the four byte lanes of a line (`[a,b,c,d]` to `[d,c,b,a]`).
/// Involution; used to point Up/Right moves at the lane-0 merge logic.
#[inline]
pub fn reverse_line(line: Line) -> Line {
    ((line & 0xFF) << 24)
        | ((line & 0xFF00) << 8)
        | ((line & 0xFF_0000) >> 8)
        | ((line & 0xFF00_0000) >> 24)
}

/// Slide and merge one line toward lane 0, returning the new line and the
/// score gained. Each lane merges at most once per call; a mismatched
/// occupied lane blocks any merge behind it.
pub fn merge_line(mut line: Line) -> (Line, Score) {
    if line == 0 {
        return (0, 0);
    }
    let mut gained: Score = 0;
    // Dropping leading empty lanes is itself part of the slide; the scans
    // below shrink by the same amount.
    let mut empty_shifts = 0u32;
    while line & 0xFF == 0 {
        line >>= 8;
        empty_shifts += 1;
    }
    // Lane 3 is never a target: nothing slides toward the far edge. A line
    // carrying junk above its four lanes can overshoot three shifts; the
    // saturation skips the scan instead of underflowing.
    for target in 0..3u32.saturating_sub(empty_shifts) {
        let target_mask: u64 = 0xFF << (target * 8);
        let mut probe_mask: u64 = 0xFF00 << (target * 8);
        let mut probe_shift = 8;
        if line & target_mask == 0 {
            // Pull the first occupied lane down into the target.
            for _ in 0..(3 - target - empty_shifts) {
                if line & probe_mask != 0 {
                    line |= (line & probe_mask) >> probe_shift;
                    line &= !probe_mask;
                    break;
                }
                probe_mask <<= 8;
                probe_shift += 8;
            }
        }
        if line & target_mask != 0 {
            // The probe picks up where the pull left off; every lane it
            // already emptied reads as zero and is skipped over.
            for _ in 0..(3 - target - empty_shifts) {
                if line & probe_mask == 0 {
                    probe_mask <<= 8;
                    probe_shift += 8;
                } else if (line & probe_mask) >> probe_shift == line & target_mask {
                    line &= !probe_mask;
                    line += 1 << (target * 8);
                    gained += 1 << ((line & target_mask) >> (target * 8));
                    break;
                } else {
                    break;
                }
            }
        }
    }
    (line, gained)
}

/// A direction that changes the board, with the position and score it
/// leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerMove {
    pub direction: Move,
    pub board: Board,
    pub score: Score,
}

/// One spawn outcome: the board with a new tile, score unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSpawn {
    pub board: Board,
    pub score: Score,
}

/// Every legal move from a position, in canonical [`Move::ALL`] order.
/// Empty when the position is lost.
pub fn player_moves(board: Board, score: Score) -> Vec<PlayerMove> {
    let mut moves = Vec::with_capacity(4);
    for direction in Move::ALL {
        let (shifted, gained) = board.shift(direction);
        if shifted != board {
            moves.push(PlayerMove {
                direction,
                board: shifted,
                score: score + gained,
            });
        }
    }
    moves
}

/// Every possible spawn from a position: for each empty-cell ordinal in
/// scan order, a 2-tile then a 4-tile. Exactly `2 * count_empty` entries.
pub fn tile_spawns(board: Board, score: Score) -> Vec<TileSpawn> {
    let empty = board.count_empty();
    let mut spawns = Vec::with_capacity(2 * empty as usize);
    for ordinal in 0..empty {
        spawns.push(TileSpawn {
            board: board.place_tile(ordinal, 1),
            score,
        });
        spawns.push(TileSpawn {
            board: board.place_tile(ordinal, 2),
            score,
        });
    }
    spawns
}

// Lift one 16-bit row segment of each word into a byte-lane line:
// nibble j of `lo` and nibble j of `hi` become the low and high half of
// lane j.
fn interleave(lo: u64, hi: u64) -> Line {
    (lo & 0xF)
        | ((hi & 0xF) << 4)
        | ((lo & 0xF0) << 4)
        | ((hi & 0xF0) << 8)
        | ((lo & 0xF00) << 8)
        | ((hi & 0xF00) << 12)
        | ((lo & 0xF000) << 12)
        | ((hi & 0xF000) << 16)
}

// Exact inverse of `interleave`.
fn split(line: Line) -> (u64, u64) {
    let lo = (line & 0xF)
        | ((line & 0xF00) >> 4)
        | ((line & 0xF_0000) >> 8)
        | ((line & 0xF00_0000) >> 12);
    let hi = ((line & 0xF0) >> 4)
        | ((line & 0xF000) >> 8)
        | ((line & 0xF0_0000) >> 12)
        | ((line & 0xF000_0000) >> 16);
    (lo, hi)
}

// Lift one column (nibbles at bits 0, 16, 32, 48 of each masked word) into
// a byte-lane line, lane j holding row j.
fn gather_column(lo: u64, hi: u64) -> Line {
    (lo & 0xF)
        | ((hi & 0xF) << 4)
        | ((lo & 0xF_0000) >> 8)
        | ((hi & 0xF_0000) >> 4)
        | ((lo & 0xF_0000_0000) >> 16)
        | ((hi & 0xF_0000_0000) >> 12)
        | ((lo & 0xF_0000_0000_0000) >> 24)
        | ((hi & 0xF_0000_0000_0000) >> 20)
}

// Exact inverse of `gather_column`.
fn scatter_column(line: Line) -> (u64, u64) {
    let lo = (line & 0xF)
        | ((line & 0xF00) << 8)
        | ((line & 0xF_0000) << 16)
        | ((line & 0xF00_0000) << 24);
    let hi = ((line & 0xF0) >> 4)
        | ((line & 0xF000) << 4)
        | ((line & 0xF0_0000) << 12)
        | ((line & 0xF000_0000) << 20);
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board_of(cells: [u8; 16]) -> Board {
        let mut lo = 0u64;
        let mut hi = 0u64;
        for (i, &e) in cells.iter().enumerate() {
            lo |= u64::from(e & 0xF) << (i * 4);
            hi |= u64::from(e >> 4) << (i * 4);
        }
        Board::from_raw(lo, hi)
    }

    // Full board, no two equal neighbors in any row or column.
    fn stuck_board() -> Board {
        board_of([1, 2, 1, 2, 2, 1, 2, 1, 1, 2, 1, 2, 2, 1, 2, 1])
    }

    #[test]
    fn extracts_rows() {
        let board = Board::from_raw(0x4321, 0x1000);
        let rows = board.rows();
        // Cell 3 combines nibble 4 (lo) with nibble 1 (hi) into 0x14.
        assert_eq!(rows, [0x1403_0201, 0, 0, 0]);
    }

    #[test]
    fn extracts_columns() {
        let board = Board::from_raw(0x4321, 0x1000);
        assert_eq!(board.columns(), [0x01, 0x02, 0x03, 0x14]);

        // Column lines index by row: cell 4 is row 1 of column 0.
        let board = Board::from_raw(0x10001, 0);
        assert_eq!(board.columns(), [0x0101, 0, 0, 0]);
    }

    #[test]
    fn row_round_trip() {
        for &(lo, hi) in &[
            (0x1001, 0x0),
            (0x0EDC_BA98_7654_F321, 0x0),
            (0x1991221001, 0x1),
            (0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210),
        ] {
            let board = Board::from_raw(lo, hi);
            assert_eq!(Board::from_rows(board.rows()), board);
        }
    }

    #[test]
    fn column_round_trip() {
        for &(lo, hi) in &[
            (0x1001, 0x0),
            (0x0EDC_BA98_7654_F321, 0x0),
            (0x1991221001, 0x1),
            (0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210),
        ] {
            let board = Board::from_raw(lo, hi);
            assert_eq!(Board::from_columns(board.columns()), board);
        }
    }

    #[test]
    fn reverses_lines() {
        assert_eq!(reverse_line(0x0403_0201), 0x0102_0304);
        for &line in &[0x0, 0xAABB_CCDD, 0x0101, 0x1400_0003] {
            assert_eq!(reverse_line(reverse_line(line)), line);
        }
    }

    #[test]
    fn merges_pairs() {
        assert_eq!(merge_line(0), (0, 0));
        // [1,1,0,0] -> [2,0,0,0], gaining 2^2.
        assert_eq!(merge_line(0x0101), (0x02, 4));
        // [1,1,1,1] merges both pairs in one pass.
        assert_eq!(merge_line(0x0101_0101), (0x0202, 8));
        // [2,0,2,0] merges across the gap.
        assert_eq!(merge_line(0x0002_0002), (0x03, 8));
        // Byte lanes, not nibbles: exponent 0x14 merges to 0x15.
        assert_eq!(merge_line(0x1414), (0x15, 1 << 0x15));
    }

    #[test]
    fn merges_at_most_once_per_lane() {
        // [1,1,1,0] -> [2,1,0,0]: the fresh 2 does not chain.
        assert_eq!(merge_line(0x0001_0101), (0x0102, 4));
        // [1,2,2,1] -> [1,3,1,0]: inner pair merges, ends stay put.
        assert_eq!(merge_line(0x0102_0201), (0x0001_0301, 8));
    }

    #[test]
    fn merge_blocked_by_mismatch() {
        assert_eq!(merge_line(0x0201_0201), (0x0201_0201, 0));
        // [1,2,1,1]: the 2 shields lane 0 from the matching far lanes.
        assert_eq!(merge_line(0x0101_0201), (0x0002_0201, 4));
    }

    #[test]
    fn slides_leading_empties() {
        assert_eq!(merge_line(0x0500_0000), (0x05, 0));
        // [0,1,1,0] slides then merges.
        assert_eq!(merge_line(0x0001_0100), (0x02, 4));
        assert_eq!(merge_line(0x0101_0000), (0x02, 4));
    }

    #[test]
    fn shifts_in_all_directions() {
        // Two 2-tiles adjacent in row 0.
        let board = Board::from_raw(0x11, 0);
        assert_eq!(board.shift(Move::Left), (Board::from_raw(0x2, 0), 4));
        assert_eq!(board.shift(Move::Right), (Board::from_raw(0x2000, 0), 4));

        // Same pair stacked in column 0.
        let board = Board::from_raw(0x10001, 0);
        assert_eq!(board.shift(Move::Down), (Board::from_raw(0x2, 0), 4));
        assert_eq!(board.shift(Move::Up), (Board::from_raw(0x2 << 48, 0), 4));
    }

    #[test]
    fn shift_reports_no_change() {
        // Tiles already packed at the bottom edge: Down does nothing.
        let board = Board::from_raw(0x11, 0);
        let (shifted, gained) = board.shift(Move::Down);
        assert_eq!(shifted, board);
        assert_eq!(gained, 0);
    }

    #[test]
    fn shift_mid_game_position() {
        // Rows [1,0,0,1] and [6,8,2,1]: only the outer pair merges.
        let board = Board::from_raw(0x1286_1001, 0);
        assert_eq!(
            board.shift(Move::Left),
            (Board::from_raw(0x1286_0002, 0), 4)
        );
    }

    #[test]
    fn counts_empty_cells() {
        assert_eq!(Board::EMPTY.count_empty(), 16);
        assert_eq!(Board::from_raw(0x11, 0).count_empty(), 14);
        assert_eq!(Board::from_raw(0x1111_0000_1111_0000, 0).count_empty(), 8);
        // Both nibbles must be zero for a cell to count as empty.
        assert_eq!(Board::from_raw(0, 0x1).count_empty(), 15);
    }

    #[test]
    fn places_tiles_by_empty_ordinal() {
        assert_eq!(Board::EMPTY.place_tile(0, 1), Board::from_raw(0x1, 0));
        assert_eq!(Board::EMPTY.place_tile(3, 2), Board::from_raw(0x2000, 0));

        // Occupied cells are skipped while counting ordinals.
        let board = Board::from_raw(0x101, 0);
        assert_eq!(board.place_tile(0, 3), Board::from_raw(0x131, 0));
        assert_eq!(board.place_tile(1, 3), Board::from_raw(0x3101, 0));
    }

    #[test]
    fn places_wide_exponents_across_words() {
        let board = Board::EMPTY.place_tile(0, 0x15);
        assert_eq!(board, Board::from_raw(0x5, 0x1));
        assert_eq!(board.exponent(0), 0x15);
    }

    #[test]
    fn reads_exponents() {
        let board = Board::from_raw(0x21, 0x10);
        assert_eq!(board.exponent(0), 1);
        assert_eq!(board.exponent(1), 0x12);
        assert_eq!(board.highest_exponent(), 0x12);
        assert_eq!(Board::EMPTY.highest_exponent(), 0);
    }

    #[test]
    fn generates_player_moves() {
        assert!(player_moves(Board::EMPTY, 0).is_empty());

        let moves = player_moves(Board::from_raw(0x11, 0), 10);
        let directions: Vec<Move> = moves.iter().map(|m| m.direction).collect();
        assert_eq!(directions, [Move::Up, Move::Left, Move::Right]);
        // Score only grows, and only through merges.
        assert_eq!(
            moves.iter().map(|m| m.score).collect::<Vec<_>>(),
            [10, 14, 14]
        );
        assert_eq!(moves[1].board, Board::from_raw(0x2, 0));
    }

    #[test]
    fn stuck_board_has_no_moves() {
        let board = stuck_board();
        assert_eq!(board.count_empty(), 0);
        assert!(player_moves(board, 0).is_empty());
        assert!(board.is_game_over());
    }

    #[test]
    fn generates_tile_spawns() {
        assert_eq!(tile_spawns(Board::EMPTY, 0).len(), 32);
        assert!(tile_spawns(stuck_board(), 0).is_empty());

        let spawns = tile_spawns(Board::from_raw(0x1, 0), 7);
        assert_eq!(spawns.len(), 30);
        // Per ordinal: a 2-tile then a 4-tile, score untouched.
        assert_eq!(spawns[0].board, Board::from_raw(0x11, 0));
        assert_eq!(spawns[1].board, Board::from_raw(0x21, 0));
        assert!(spawns.iter().all(|s| s.score == 7));
    }

    #[test]
    fn random_tiles_fill_the_board() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut board = Board::EMPTY;
        for _ in 0..16 {
            board = board.with_random_tile(&mut rng);
        }
        assert_eq!(board.count_empty(), 0);
        assert_eq!(board.with_random_tile(&mut rng), board);
    }

    #[test]
    fn parses_board_literals() {
        assert_eq!("0x1001:0x0".parse(), Ok(Board::from_raw(0x1001, 0)));
        assert_eq!("1991221001:1".parse(), Ok(Board::from_raw(0x1991221001, 1)));
        assert_eq!(
            "1001".parse::<Board>(),
            Err(ParseBoardError::MissingSeparator)
        );
        assert_eq!(
            "12:zz".parse::<Board>(),
            Err(ParseBoardError::BadWord(String::from("zz")))
        );
    }

    #[test]
    fn empty_board_counts_as_over() {
        assert!(Board::EMPTY.is_game_over());
        assert!(!Board::from_raw(0x11, 0).is_game_over());
    }
}
