//! Entidade Produto

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ProdutoId;

/// Entidade Produto
///
/// Registro persistido de um produto do catálogo. A identidade é atribuída
/// pela camada de persistência no insert; `id` fica `None` até lá. Nenhuma
/// validação de conteúdo é feita nesta camada.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Produto {
    /// ID do produto (None até a persistência atribuir)
    pub id: Option<ProdutoId>,
    /// Nome do produto
    pub nome: String,
    /// Preço unitário
    pub preco: Decimal,
    /// Quantidade em estoque
    pub quantidade: i32,
}

impl Produto {
    /// Cria um produto ainda sem identidade
    pub fn new(nome: impl Into<String>, preco: Decimal, quantidade: i32) -> Self {
        Self {
            id: None,
            nome: nome.into(),
            preco,
            quantidade,
        }
    }
}
