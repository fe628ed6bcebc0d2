//! Serviço de produtos

use std::sync::Arc;

use errors::{AppError, AppResult};
use tracing::info;

use crate::application::dto::ProdutoDto;
use crate::domain::entities::Produto;
use crate::domain::repositories::ProdutoRepository;
use crate::domain::value_objects::ProdutoId;

/// Serviço CRUD de produtos
///
/// Sem estado além do handle do repositório; cada chamada executa de forma
/// síncrona até o fim, sem retry, timeout ou concorrência interna.
pub struct ProdutoService {
    produto_repo: Arc<dyn ProdutoRepository>,
}

impl ProdutoService {
    pub fn new(produto_repo: Arc<dyn ProdutoRepository>) -> Self {
        Self { produto_repo }
    }

    /// Retorna a lista de produtos, na ordem definida pelo repositório
    pub async fn obter_todos(&self) -> AppResult<Vec<ProdutoDto>> {
        let produtos = self.produto_repo.find_all().await?;

        Ok(produtos.into_iter().map(ProdutoDto::from).collect())
    }

    /// Retorna o produto encontrado pelo seu id
    ///
    /// A ausência nunca é devolvida como `Ok(None)`: um id desconhecido é
    /// sempre sinalizado como erro NotFound.
    pub async fn obter_por_id(&self, id: ProdutoId) -> AppResult<Option<ProdutoDto>> {
        let Some(produto) = self.produto_repo.find_by_id(&id).await? else {
            return Err(AppError::not_found(format!(
                "Produto com id: {} não encontrado",
                id
            )));
        };

        Ok(Some(ProdutoDto::from(produto)))
    }

    /// Adiciona um produto
    ///
    /// Qualquer id vindo do chamador é descartado: o insert sempre atribui
    /// uma identidade nova, copiada de volta para o DTO retornado.
    pub async fn adicionar(&self, mut dto: ProdutoDto) -> AppResult<ProdutoDto> {
        info!("Adicionando produto: {}", dto.nome);

        // Remove o id para garantir o cadastro com identidade nova
        dto.id = None;

        let produto = Produto::from(dto.clone());
        let salvo = self.produto_repo.save(&produto).await?;

        dto.id = salvo.id.map(|id| id.0);

        info!("Produto adicionado com id: {:?}", dto.id);
        Ok(dto)
    }

    /// Deleta o produto pelo id
    pub async fn deletar(&self, id: ProdutoId) -> AppResult<()> {
        info!("Deletando produto: {}", id);

        // Verifica se o produto existe antes de deletar
        let produto = self.produto_repo.find_by_id(&id).await?;
        if produto.is_none() {
            return Err(AppError::not_found(format!(
                "Não foi possível deletar o produto com o id: {} - Produto não existe!",
                id
            )));
        }

        self.produto_repo.delete_by_id(&id).await
    }

    /// Atualiza um produto
    ///
    /// O id recebido sobrescreve o que o DTO carregava. A persistência tem
    /// semântica de upsert: um id inexistente cria a linha em silêncio, sem
    /// verificação prévia de existência (assimetria deliberada em relação a
    /// `deletar`).
    pub async fn atualizar(&self, id: ProdutoId, mut dto: ProdutoDto) -> AppResult<ProdutoDto> {
        info!("Atualizando produto: {}", id);

        // Passa o id recebido para o DTO
        dto.id = Some(id.0);

        let produto = Produto::from(dto.clone());
        self.produto_repo.save(&produto).await?;

        Ok(dto)
    }
}
