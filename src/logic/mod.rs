//! Scores board logic: status classification and view assembly.

mod board;
mod roster;
mod status;

pub use board::{
    admin_matches, assemble_board, filter_by_sport, live_matches, schedule, Board, SportFilter,
};
pub use roster::roster;
pub use status::{annotate, classify, effective_status};
