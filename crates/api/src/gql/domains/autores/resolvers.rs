use async_graphql::{Context, Object, Result};

use crate::gql::error::{GqlError, ResultExt};
use crate::state::AppState;
use infra::repos::autores;

use super::types::{Autor, AutorInput};

#[derive(Default)]
pub struct AutorQuery;

#[Object]
impl AutorQuery {
    /// All authors ordered by id, or just the one matching `id`.
    async fn autores(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Vec<Autor>> {
        let state = ctx.data::<AppState>()?;

        let rows = match id {
            Some(id) => autores::get_by_id(&state.db, id)
                .await
                .map_err(GqlError::from)?
                .into_iter()
                .collect(),
            None => autores::list(&state.db).await.map_err(GqlError::from)?,
        };

        Ok(rows.into_iter().map(Autor::from).collect())
    }
}

#[derive(Default)]
pub struct AutorMutation;

#[Object]
impl AutorMutation {
    async fn crear_autor(
        &self,
        ctx: &Context<'_>,
        autor: Option<AutorInput>,
    ) -> Result<Option<Autor>> {
        let Some(input) = autor else {
            return Ok(None);
        };

        let state = ctx.data::<AppState>()?;
        let row = autores::create(&state.db, input.into())
            .await
            .or_fail("create autor")?;

        tracing::info!(aut_id = row.aut_id, "Created autor");
        Ok(Some(row.into()))
    }
}
