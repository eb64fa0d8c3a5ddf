mod common;

use api::gql::build_schema;
use async_graphql::Variables;
use common::*;
use serde_json::json;

#[tokio::test]
async fn test_categorias_query_ordered_by_id() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let cat_id = create_test_categoria(&app_state, "Rust").await;

    let response = execute_graphql(&schema, "{ categorias { cat_id cat_titulo } }", None).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    let categorias = data["categorias"].as_array().unwrap();
    assert_ordered_by(categorias, "cat_id");
    assert!(categorias.iter().any(|c| c["cat_id"] == cat_id));
}

#[tokio::test]
async fn test_categorias_query_by_id() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let cat_id = create_test_categoria(&app_state, "Bases de datos").await;

    let vars = Variables::from_json(json!({ "id": cat_id }));
    let response = execute_graphql(
        &schema,
        "query C($id: Int) { categorias(id: $id) { cat_id cat_titulo } }",
        Some(vars),
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    let categorias = data["categorias"].as_array().unwrap();
    assert_eq!(categorias.len(), 1);
    assert_eq!(categorias[0]["cat_titulo"], "Bases de datos");
}

#[tokio::test]
async fn test_crear_categoria() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state);

    let mutation = r#"
        mutation {
            crearCategoria(categoria: { cat_titulo: "GraphQL" }) {
                cat_id
                cat_titulo
            }
        }
    "#;

    let response = execute_graphql(&schema, mutation, None).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    assert!(data["crearCategoria"]["cat_id"].as_i64().unwrap() > 0);
    assert_eq!(data["crearCategoria"]["cat_titulo"], "GraphQL");
}

#[tokio::test]
async fn test_crear_categoria_without_titulo_fails_generically() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state);

    let response = execute_graphql(
        &schema,
        "mutation { crearCategoria(categoria: {}) { cat_id } }",
        None,
    )
    .await;

    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, "Failed to create categoria");
}
