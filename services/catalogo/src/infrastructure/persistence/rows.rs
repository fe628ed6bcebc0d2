//! Estruturas de mapeamento das linhas do banco

use rust_decimal::Decimal;
use sqlx::FromRow;

/// Linha da tabela produtos
#[derive(Debug, FromRow)]
pub struct ProdutoRow {
    pub id: i64,
    pub nome: String,
    pub preco: Decimal,
    pub quantidade: i32,
}
