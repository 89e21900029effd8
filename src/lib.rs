//! minimax-2048: a worst-case move searcher for extended-range 2048
//!
//! This crate provides:
//! - A two-word packed `Board` whose 8-bit exponents reach far past the
//!   classic nibble ceiling (`engine` module)
//! - Byte-lane line mechanics: rows and columns lift into one-byte-per-cell
//!   lines, slide/merge toward lane 0, and pack back
//! - A strict minimax policy (`search` module) that treats tile spawns as
//!   an adversary, with sequential and rayon-parallel modes that return
//!   bit-identical outcomes
//!
//! Quick start:
//! ```
//! use minimax_2048::engine::Board;
//! use minimax_2048::search::{Minimax, SearchMode};
//!
//! let board = Board::from_raw(0x1001, 0);
//! let minimax = Minimax::new(SearchMode::Parallel);
//! let outcome = minimax.search(board, 0, 4);
//! assert!(outcome.direction.is_some());
//!
//! // Playing the chosen move is the caller's job; search never mutates.
//! let (after, gained) = board.shift(outcome.direction.unwrap());
//! assert_ne!(after, board);
//! assert!(gained <= 4);
//! ```
pub mod engine;
pub mod search;
