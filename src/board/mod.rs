mod entry;
mod load;
mod sample;

pub use entry::{Board, Category, CompanyLanes, Entry, UNAFFILIATED};
pub use load::{load_board, parse_board};
pub use sample::sample_board;
