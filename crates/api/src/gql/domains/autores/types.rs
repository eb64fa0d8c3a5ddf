use async_graphql::{InputObject, SimpleObject};

#[derive(SimpleObject, Clone, Debug)]
#[graphql(rename_fields = "snake_case")]
pub struct Autor {
    pub aut_id: i32,
    pub aut_usuario: String,
    pub aut_nombre: String,
}

impl From<infra::models::AutorRow> for Autor {
    fn from(row: infra::models::AutorRow) -> Self {
        Self {
            aut_id: row.aut_id,
            aut_usuario: row.aut_usuario,
            aut_nombre: row.aut_nombre,
        }
    }
}

#[derive(InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct AutorInput {
    pub aut_usuario: Option<String>,
    pub aut_nombre: Option<String>,
}

impl From<AutorInput> for infra::repos::CreateAutor {
    fn from(input: AutorInput) -> Self {
        Self {
            aut_usuario: input.aut_usuario,
            aut_nombre: input.aut_nombre,
        }
    }
}
