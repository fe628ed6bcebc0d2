//! IDs fortemente tipados

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// ID de produto
///
/// Identidade inteira atribuída pelo banco no insert; imutável depois de
/// atribuída.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From,
)]
#[display("{_0}")]
pub struct ProdutoId(pub i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let id = ProdutoId(42);
        assert_eq!(id.to_string(), "42");
    }
}
