//! Networking: the accept loop and the per-connection session driver.

mod connection;
mod gateway;

pub use connection::Connection;
pub use gateway::Gateway;
