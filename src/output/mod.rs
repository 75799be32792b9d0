//! Terminal output formatting
//!
//! Share cards and path formatting, plus colored printing for the CLI.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_result, print_daily_info, print_puzzle_reports, print_solve_result,
};
pub use formatters::{format_path, plural_moves, share_text};
