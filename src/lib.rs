pub mod waiter;

pub use waiter::{wait_random, wait_random_default, DEFAULT_MAX_DELAY};
