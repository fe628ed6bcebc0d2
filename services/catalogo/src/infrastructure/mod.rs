//! Camada de infraestrutura

pub mod persistence;
