//! Definição do trait Repository

use async_trait::async_trait;
use errors::AppResult;

/// Repository básico
///
/// Contrato de persistência por entidade: a implementação concreta (SQL,
/// pool de conexões, transações) vive nos adaptadores.
#[async_trait]
pub trait Repository<T, ID>: Send + Sync {
    /// Lista todas as entidades, na ordem definida pelo repositório
    async fn find_all(&self) -> AppResult<Vec<T>>;

    /// Busca por ID
    async fn find_by_id(&self, id: &ID) -> AppResult<Option<T>>;

    /// Persiste a entidade e a devolve com a identidade atribuída
    ///
    /// Insere quando a entidade ainda não tem ID; com ID presente, atualiza
    /// ou insere naquela identidade (semântica de upsert).
    async fn save(&self, entity: &T) -> AppResult<T>;

    /// Remove por ID
    async fn delete_by_id(&self, id: &ID) -> AppResult<()>;
}
