//! Serviço de catálogo de produtos
//!
//! Camada de serviço CRUD sobre a entidade Produto. A camada de transporte
//! (HTTP/gRPC) pertence à aplicação que embute este serviço.

pub mod application;
pub mod domain;
pub mod infrastructure;
