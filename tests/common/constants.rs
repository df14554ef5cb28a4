//! Shared constants for end-to-end tests

pub const REQUEST_TIMEOUT_SECS: u64 = 5;
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;

pub const ISBN_1: &str = "9099099090";
pub const ISBN_2: &str = "1001002003";
pub const ISBN_3: &str = "9780306406157";
pub const UNUSED_ISBN: &str = "0000000000";

pub const AUTHOR_1: &str = "J.K. Rowling";
pub const AUTHOR_2: &str = "Dante Alighieri";
