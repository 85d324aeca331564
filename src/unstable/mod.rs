pub mod heapsort;
pub mod quicksort;
pub mod rust_std;
pub mod selection;
