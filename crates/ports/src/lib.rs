//! loja-ports - camada de traits abstratos
//!
//! Define as interfaces abstratas da infraestrutura

mod repository;

pub use repository::*;
