//! Interfaces de repositório

mod produto_repository;

pub use produto_repository::ProdutoRepository;
