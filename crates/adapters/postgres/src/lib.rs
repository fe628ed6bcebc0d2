//! loja-adapter-postgres - adaptador PostgreSQL

mod connection;

pub use connection::*;
