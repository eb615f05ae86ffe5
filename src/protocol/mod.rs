pub mod error;
pub mod rpc;

#[cfg(test)]
mod tests;

pub use error::{Result, XdrpcError};
pub use rpc::CrossDomainRpc;
