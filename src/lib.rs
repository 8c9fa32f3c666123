//! Status-bar feeders: each binary polls one source and prints one line per
//! interval on stdout.

pub mod config;
pub mod feed;
pub mod logger;
pub mod sensors;
pub mod util;
