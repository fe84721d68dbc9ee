use std::sync::LazyLock;
use std::time::Instant;

/// The envelope and box catalogue packed when no request is given
pub mod demo;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
