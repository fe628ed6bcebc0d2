//! loja-bootstrap - raiz de composição dos serviços
//!
//! Inicializa telemetria e recursos de infraestrutura a partir da
//! configuração. A camada de transporte (HTTP/gRPC) pertence à aplicação
//! que embute os serviços e fica fora deste repositório.

mod infrastructure;
mod retry;
mod runtime;

pub use infrastructure::*;
pub use retry::*;
pub use runtime::*;
