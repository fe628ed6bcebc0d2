//! Objetos de valor do domínio

mod ids;

pub use ids::ProdutoId;
