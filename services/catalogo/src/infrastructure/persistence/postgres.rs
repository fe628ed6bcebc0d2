//! Implementação PostgreSQL do repositório

use async_trait::async_trait;
use errors::{AppError, AppResult};
use ports::Repository;
use sqlx::PgPool;

use crate::domain::entities::Produto;
use crate::domain::repositories::ProdutoRepository;
use crate::domain::value_objects::ProdutoId;

use super::converters::produto_from_row;
use super::rows::ProdutoRow;

pub struct PostgresProdutoRepository {
    pool: PgPool,
}

impl PostgresProdutoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Produto, ProdutoId> for PostgresProdutoRepository {
    async fn find_all(&self) -> AppResult<Vec<Produto>> {
        let rows = sqlx::query_as::<_, ProdutoRow>(
            r#"
            SELECT id, nome, preco, quantidade
            FROM produtos
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Falha ao listar produtos: {}", e)))?;

        Ok(rows.into_iter().map(produto_from_row).collect())
    }

    async fn find_by_id(&self, id: &ProdutoId) -> AppResult<Option<Produto>> {
        let row = sqlx::query_as::<_, ProdutoRow>(
            r#"
            SELECT id, nome, preco, quantidade
            FROM produtos
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Falha ao buscar produto: {}", e)))?;

        Ok(row.map(produto_from_row))
    }

    async fn save(&self, produto: &Produto) -> AppResult<Produto> {
        // Sem id: insert com identidade atribuída pelo banco.
        // Com id: atualiza ou insere naquela identidade (upsert).
        let result = match produto.id {
            None => {
                sqlx::query_as::<_, ProdutoRow>(
                    r#"
                    INSERT INTO produtos (nome, preco, quantidade)
                    VALUES ($1, $2, $3)
                    RETURNING id, nome, preco, quantidade
                    "#,
                )
                .bind(&produto.nome)
                .bind(produto.preco)
                .bind(produto.quantidade)
                .fetch_one(&self.pool)
                .await
            }
            Some(id) => {
                sqlx::query_as::<_, ProdutoRow>(
                    r#"
                    INSERT INTO produtos (id, nome, preco, quantidade)
                    VALUES ($1, $2, $3, $4)
                    ON CONFLICT (id) DO UPDATE
                        SET nome = EXCLUDED.nome,
                            preco = EXCLUDED.preco,
                            quantidade = EXCLUDED.quantidade
                    RETURNING id, nome, preco, quantidade
                    "#,
                )
                .bind(id.0)
                .bind(&produto.nome)
                .bind(produto.preco)
                .bind(produto.quantidade)
                .fetch_one(&self.pool)
                .await
            }
        };

        let row = result.map_err(|e| AppError::database(format!("Falha ao salvar produto: {}", e)))?;

        Ok(produto_from_row(row))
    }

    async fn delete_by_id(&self, id: &ProdutoId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM produtos WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Falha ao deletar produto: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Produto com id: {} não encontrado",
                id
            )));
        }

        Ok(())
    }
}

impl ProdutoRepository for PostgresProdutoRepository {}
