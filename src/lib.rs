pub mod client;
pub mod config;
pub mod mcp;
pub mod models;

#[cfg(test)]
mod config_test;
#[cfg(test)]
pub(crate) mod test_support;
