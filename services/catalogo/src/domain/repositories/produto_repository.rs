//! Interface do repositório de produtos

use ports::Repository;

use crate::domain::entities::Produto;
use crate::domain::value_objects::ProdutoId;

/// Repositório de produtos
///
/// Herda o contrato genérico de persistência: `find_all`, `find_by_id`,
/// `save` (insert sem ID, upsert com ID) e `delete_by_id`. As garantias de
/// consistência sob concorrência são inteiramente do mecanismo de
/// armazenamento subjacente.
pub trait ProdutoRepository: Repository<Produto, ProdutoId> {}
