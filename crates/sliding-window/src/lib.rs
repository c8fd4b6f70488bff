//! Fixed-Capacity Sliding Window
//!
//! Provides a bounded FIFO window with oldest-out eviction, the memory
//! primitive behind all temporal feature state. Pushes are O(1) and the
//! window never allocates after construction.

mod window;

pub use window::SlidingWindow;
