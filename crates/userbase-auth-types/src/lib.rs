//! Auth types shared across Userbase services.
//!
//! Authentication happens upstream; services only read the identity the gateway injects.

pub mod identity;
