use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject};

use crate::gql::domains::autores::types::Autor;
use crate::gql::domains::publicaciones::types::Publicacion;
use crate::gql::error::GqlError;
use crate::gql::loaders::{AutorLoader, PublicacionLoader};
use crate::state::AppState;
use infra::repos::reacciones;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct Comentario {
    pub com_id: i32,
    pub pub_id: i32,
    pub aut_id: i32,
    pub com_descripcion: String,
}

impl From<infra::models::ComentarioRow> for Comentario {
    fn from(row: infra::models::ComentarioRow) -> Self {
        Self {
            com_id: row.com_id,
            pub_id: row.pub_id,
            aut_id: row.aut_id,
            com_descripcion: row.com_descripcion,
        }
    }
}

#[ComplexObject]
impl Comentario {
    async fn autor(&self, ctx: &Context<'_>) -> Result<Option<Autor>> {
        let loader = ctx.data::<DataLoader<AutorLoader>>()?;
        let row = loader.load_one(self.aut_id).await.map_err(GqlError::from)?;
        Ok(row.map(Autor::from))
    }

    async fn publicacion(&self, ctx: &Context<'_>) -> Result<Option<Publicacion>> {
        let loader = ctx.data::<DataLoader<PublicacionLoader>>()?;
        let row = loader.load_one(self.pub_id).await.map_err(GqlError::from)?;
        Ok(row.map(Publicacion::from))
    }

    async fn reacciones(&self, ctx: &Context<'_>) -> Result<Vec<Reaccion>> {
        let state = ctx.data::<AppState>()?;
        let rows = reacciones::list_by_comentario(&state.db, self.com_id)
            .await
            .map_err(GqlError::from)?;
        Ok(rows.into_iter().map(Reaccion::from).collect())
    }

    /// Number of reactions on this comment that are likes.
    async fn numero_likes(&self, ctx: &Context<'_>) -> Result<i32> {
        let state = ctx.data::<AppState>()?;
        let total = reacciones::count_likes(&state.db, self.com_id)
            .await
            .map_err(GqlError::from)?;
        Ok(total)
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(rename_fields = "snake_case")]
pub struct Reaccion {
    pub rea_id: i32,
    pub com_id: i32,
    pub rea_like: bool,
}

impl From<infra::models::ReaccionRow> for Reaccion {
    fn from(row: infra::models::ReaccionRow) -> Self {
        Self {
            rea_id: row.rea_id,
            com_id: row.com_id,
            rea_like: row.rea_like,
        }
    }
}

/// Shared input of the three comment mutations. `com_id` is ignored on
/// creation and required for update and delete.
#[derive(InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct ComentarioInput {
    pub com_id: Option<i32>,
    pub pub_id: Option<i32>,
    pub aut_id: Option<i32>,
    pub com_descripcion: Option<String>,
}
