//! Entidades do domínio

mod produto;

pub use produto::Produto;
