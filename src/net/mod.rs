//! Backend HTTP layer: the request bridge and the wire types it carries.

pub mod api;
pub mod types;
