//! Conversão de linhas do banco para objetos de domínio

use crate::domain::entities::Produto;
use crate::domain::value_objects::ProdutoId;

use super::rows::ProdutoRow;

/// Converte ProdutoRow em Produto
pub fn produto_from_row(row: ProdutoRow) -> Produto {
    Produto {
        id: Some(ProdutoId(row.id)),
        nome: row.nome,
        preco: row.preco,
        quantidade: row.quantidade,
    }
}
