//! Wire contracts shared between the admin frontend and the REST API.

pub mod domain;
pub mod system;
