//! Camada de domínio

pub mod entities;
pub mod repositories;
pub mod value_objects;
