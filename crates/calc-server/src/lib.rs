//! Line-delimited JSON-RPC 2.0 front end for `calc-core`.
//!
//! One request per line on stdin, one response per line on stdout. Malformed
//! calculation requests are answered with an invalid-params error; domain
//! errors come back inside a normal result.

pub mod methods;
pub mod protocol;
pub mod server;

pub use server::{handle_line, run_server, run_stdio, DEFAULT_SERVER_NAME};
