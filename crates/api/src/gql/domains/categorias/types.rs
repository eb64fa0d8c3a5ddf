use async_graphql::{InputObject, SimpleObject};

#[derive(SimpleObject, Clone, Debug)]
#[graphql(rename_fields = "snake_case")]
pub struct Categoria {
    pub cat_id: i32,
    pub cat_titulo: String,
}

impl From<infra::models::CategoriaRow> for Categoria {
    fn from(row: infra::models::CategoriaRow) -> Self {
        Self {
            cat_id: row.cat_id,
            cat_titulo: row.cat_titulo,
        }
    }
}

#[derive(InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct CategoriaInput {
    pub cat_titulo: Option<String>,
}
