use async_graphql::{Context, Object, Result};

use crate::gql::error::{GqlError, ResultExt};
use crate::state::AppState;
use infra::repos::publicaciones;

use super::types::{Publicacion, PublicacionInput};

#[derive(Default)]
pub struct PublicacionQuery;

#[Object]
impl PublicacionQuery {
    /// All publications ordered by id, or just the one matching `id`.
    async fn publicaciones(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Vec<Publicacion>> {
        let state = ctx.data::<AppState>()?;

        let rows = match id {
            Some(id) => publicaciones::get_by_id(&state.db, id)
                .await
                .map_err(GqlError::from)?
                .into_iter()
                .collect(),
            None => publicaciones::list(&state.db)
                .await
                .map_err(GqlError::from)?,
        };

        Ok(rows.into_iter().map(Publicacion::from).collect())
    }
}

#[derive(Default)]
pub struct PublicacionMutation;

#[Object]
impl PublicacionMutation {
    async fn crear_publicacion(
        &self,
        ctx: &Context<'_>,
        publicacion: Option<PublicacionInput>,
    ) -> Result<Option<Publicacion>> {
        let Some(input) = publicacion else {
            return Ok(None);
        };

        let state = ctx.data::<AppState>()?;
        let row = publicaciones::create(&state.db, input.into())
            .await
            .or_fail("create publicacion")?;

        tracing::info!(pub_id = row.pub_id, "Created publicacion");
        Ok(Some(row.into()))
    }
}
