//! DTO de Produto

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Produto;
use crate::domain::value_objects::ProdutoId;

/// Cópia da entidade voltada para a borda do serviço, desacoplada da
/// representação de armazenamento.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProdutoDto {
    pub id: Option<i64>,
    pub nome: String,
    pub preco: Decimal,
    pub quantidade: i32,
}

// Conversões estruturais campo a campo, sem transformação de negócio.

impl From<Produto> for ProdutoDto {
    fn from(produto: Produto) -> Self {
        Self {
            id: produto.id.map(|id| id.0),
            nome: produto.nome,
            preco: produto.preco,
            quantidade: produto.quantidade,
        }
    }
}

impl From<ProdutoDto> for Produto {
    fn from(dto: ProdutoDto) -> Self {
        Self {
            id: dto.id.map(ProdutoId),
            nome: dto.nome,
            preco: dto.preco,
            quantidade: dto.quantidade,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversao_estrutural() {
        let produto = Produto {
            id: Some(ProdutoId(1)),
            nome: "Caneta".to_string(),
            preco: Decimal::new(25, 1),
            quantidade: 10,
        };

        let dto = ProdutoDto::from(produto.clone());
        assert_eq!(dto.id, Some(1));
        assert_eq!(dto.nome, produto.nome);
        assert_eq!(dto.preco, produto.preco);
        assert_eq!(dto.quantidade, produto.quantidade);

        let de_volta = Produto::from(dto);
        assert_eq!(de_volta, produto);
    }
}
