use async_graphql::{Context, Object, Result};

use crate::gql::error::{GqlError, ResultExt};
use crate::state::AppState;
use infra::repos::{categorias, CreateCategoria};

use super::types::{Categoria, CategoriaInput};

#[derive(Default)]
pub struct CategoriaQuery;

#[Object]
impl CategoriaQuery {
    /// All categories ordered by id, or just the one matching `id`.
    async fn categorias(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Vec<Categoria>> {
        let state = ctx.data::<AppState>()?;

        let rows = match id {
            Some(id) => categorias::get_by_id(&state.db, id)
                .await
                .map_err(GqlError::from)?
                .into_iter()
                .collect(),
            None => categorias::list(&state.db).await.map_err(GqlError::from)?,
        };

        Ok(rows.into_iter().map(Categoria::from).collect())
    }
}

#[derive(Default)]
pub struct CategoriaMutation;

#[Object]
impl CategoriaMutation {
    async fn crear_categoria(
        &self,
        ctx: &Context<'_>,
        categoria: Option<CategoriaInput>,
    ) -> Result<Option<Categoria>> {
        let Some(input) = categoria else {
            return Ok(None);
        };

        let state = ctx.data::<AppState>()?;
        let data = CreateCategoria {
            cat_titulo: input.cat_titulo,
        };
        let row = categorias::create(&state.db, data)
            .await
            .or_fail("create categoria")?;

        tracing::info!(cat_id = row.cat_id, "Created categoria");
        Ok(Some(row.into()))
    }
}
