//! Library surface of the billing CLI: logging setup shared with tests.

pub mod logging;
