//! sea-orm entities owned by the users service.

pub mod users;
