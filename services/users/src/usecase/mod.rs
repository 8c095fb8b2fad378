pub mod caller;
pub mod processor;
pub mod provider;
