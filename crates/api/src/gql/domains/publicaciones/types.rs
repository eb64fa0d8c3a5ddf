use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject};

use crate::gql::domains::autores::types::Autor;
use crate::gql::domains::categorias::types::Categoria;
use crate::gql::domains::comentarios::types::Comentario;
use crate::gql::error::GqlError;
use crate::gql::loaders::{AutorLoader, CategoriaLoader};
use crate::state::AppState;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct Publicacion {
    pub pub_id: i32,
    pub cat_id: i32,
    pub aut_id: i32,
    pub pub_titulo: String,
    pub pub_descripcion: Option<String>,
}

impl From<infra::models::PublicacionRow> for Publicacion {
    fn from(row: infra::models::PublicacionRow) -> Self {
        Self {
            pub_id: row.pub_id,
            cat_id: row.cat_id,
            aut_id: row.aut_id,
            pub_titulo: row.pub_titulo,
            pub_descripcion: row.pub_descripcion,
        }
    }
}

#[ComplexObject]
impl Publicacion {
    async fn autor(&self, ctx: &Context<'_>) -> Result<Option<Autor>> {
        let loader = ctx.data::<DataLoader<AutorLoader>>()?;
        let row = loader.load_one(self.aut_id).await.map_err(GqlError::from)?;
        Ok(row.map(Autor::from))
    }

    async fn categoria(&self, ctx: &Context<'_>) -> Result<Option<Categoria>> {
        let loader = ctx.data::<DataLoader<CategoriaLoader>>()?;
        let row = loader.load_one(self.cat_id).await.map_err(GqlError::from)?;
        Ok(row.map(Categoria::from))
    }

    /// Comments on this publication, oldest first.
    async fn comentarios(&self, ctx: &Context<'_>) -> Result<Vec<Comentario>> {
        let state = ctx.data::<AppState>()?;
        let rows = infra::repos::comentarios::list_by_publicacion(&state.db, self.pub_id)
            .await
            .map_err(GqlError::from)?;
        Ok(rows.into_iter().map(Comentario::from).collect())
    }
}

#[derive(InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct PublicacionInput {
    pub cat_id: Option<i32>,
    pub aut_id: Option<i32>,
    pub pub_titulo: Option<String>,
    pub pub_descripcion: Option<String>,
}

impl From<PublicacionInput> for infra::repos::CreatePublicacion {
    fn from(input: PublicacionInput) -> Self {
        Self {
            cat_id: input.cat_id,
            aut_id: input.aut_id,
            pub_titulo: input.pub_titulo,
            pub_descripcion: input.pub_descripcion,
        }
    }
}
