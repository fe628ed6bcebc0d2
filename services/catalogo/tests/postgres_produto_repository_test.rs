//! Testes de integração do repositório PostgreSQL
//!
//! `#[sqlx::test]` provisiona um banco por teste e aplica as migrações do
//! diretório `migrations/` deste crate.

use rust_decimal::Decimal;
use sqlx::PgPool;

use catalogo::domain::entities::Produto;
use catalogo::domain::value_objects::ProdutoId;
use catalogo::infrastructure::persistence::PostgresProdutoRepository;
use errors::AppError;
use ports::Repository;

fn caneta() -> Produto {
    Produto::new("Caneta", Decimal::new(25, 1), 10)
}

#[sqlx::test]
async fn test_save_atribui_identidade(pool: PgPool) {
    let repo = PostgresProdutoRepository::new(pool);

    let salvo = repo.save(&caneta()).await.unwrap();
    let id = salvo.id.expect("o insert deve atribuir um id");

    let encontrado = repo.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(encontrado.nome, "Caneta");
    assert_eq!(encontrado.preco, Decimal::new(25, 1));
    assert_eq!(encontrado.quantidade, 10);
}

#[sqlx::test]
async fn test_save_com_id_faz_upsert(pool: PgPool) {
    let repo = PostgresProdutoRepository::new(pool);

    let salvo = repo.save(&caneta()).await.unwrap();
    let id = salvo.id.unwrap();

    // Atualização da mesma linha
    let mut alterado = salvo.clone();
    alterado.nome = "Caneta Azul".to_string();
    alterado.preco = Decimal::new(30, 1);
    let atualizado = repo.save(&alterado).await.unwrap();
    assert_eq!(atualizado.id, Some(id));

    let encontrado = repo.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(encontrado.nome, "Caneta Azul");
    assert_eq!(encontrado.preco, Decimal::new(30, 1));

    // Id inexistente cria a linha (semântica de upsert)
    let novo = Produto {
        id: Some(ProdutoId(9999)),
        nome: "Borracha".to_string(),
        preco: Decimal::new(5, 1),
        quantidade: 1,
    };
    let criado = repo.save(&novo).await.unwrap();
    assert_eq!(criado.id, Some(ProdutoId(9999)));
    assert!(repo.find_by_id(&ProdutoId(9999)).await.unwrap().is_some());
}

#[sqlx::test]
async fn test_find_by_id_inexistente(pool: PgPool) {
    let repo = PostgresProdutoRepository::new(pool);

    let encontrado = repo.find_by_id(&ProdutoId(42)).await.unwrap();
    assert!(encontrado.is_none());
}

#[sqlx::test]
async fn test_find_all_ordena_por_id(pool: PgPool) {
    let repo = PostgresProdutoRepository::new(pool);

    assert!(repo.find_all().await.unwrap().is_empty());

    repo.save(&caneta()).await.unwrap();
    repo.save(&Produto::new("Lapis", Decimal::new(10, 1), 3))
        .await
        .unwrap();

    let todos = repo.find_all().await.unwrap();
    assert_eq!(todos.len(), 2);
    assert!(todos[0].id < todos[1].id);
    assert_eq!(todos[0].nome, "Caneta");
    assert_eq!(todos[1].nome, "Lapis");
}

#[sqlx::test]
async fn test_delete_by_id(pool: PgPool) {
    let repo = PostgresProdutoRepository::new(pool);

    let salvo = repo.save(&caneta()).await.unwrap();
    let id = salvo.id.unwrap();

    repo.delete_by_id(&id).await.unwrap();
    assert!(repo.find_by_id(&id).await.unwrap().is_none());

    // Deletar um id ausente é responsabilidade do repositório sinalizar
    let err = repo.delete_by_id(&id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
