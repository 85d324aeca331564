pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod rust_std;
