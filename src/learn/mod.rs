//! Reports over a spaced-repetition learning database

pub mod burden;
pub mod config;
pub mod daily;
pub mod models;
pub mod pending;
pub mod report;
pub mod storage;
pub mod summary;

#[cfg(test)]
mod testutil;

pub use burden::*;
pub use config::*;
pub use daily::*;
pub use models::*;
pub use pending::*;
pub use report::*;
pub use storage::*;
pub use summary::*;
