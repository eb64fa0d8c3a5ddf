use async_graphql::{Context, Object, Result};

use crate::gql::error::{GqlError, ResultExt};
use crate::state::AppState;
use infra::repos::{comentarios, CreateComentario, UpdateComentario};

use super::service;
use super::types::{Comentario, ComentarioInput};

#[derive(Default)]
pub struct ComentarioQuery;

#[Object]
impl ComentarioQuery {
    /// All comments ordered by id, or just the one matching `id`.
    async fn comentarios(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Vec<Comentario>> {
        let state = ctx.data::<AppState>()?;

        let rows = match id {
            Some(id) => comentarios::get_by_id(&state.db, id)
                .await
                .map_err(GqlError::from)?
                .into_iter()
                .collect(),
            None => comentarios::list(&state.db).await.map_err(GqlError::from)?,
        };

        Ok(rows.into_iter().map(Comentario::from).collect())
    }
}

#[derive(Default)]
pub struct ComentarioMutation;

#[Object]
impl ComentarioMutation {
    async fn crear_comentario(
        &self,
        ctx: &Context<'_>,
        comentario: Option<ComentarioInput>,
    ) -> Result<Option<Comentario>> {
        let Some(input) = comentario else {
            return Ok(None);
        };

        let state = ctx.data::<AppState>()?;
        let data = CreateComentario {
            pub_id: input.pub_id,
            aut_id: input.aut_id,
            com_descripcion: input.com_descripcion,
        };
        let row = comentarios::create(&state.db, data)
            .await
            .or_fail("create comentario")?;

        tracing::info!(com_id = row.com_id, pub_id = row.pub_id, "Created comentario");
        Ok(Some(row.into()))
    }

    /// Overwrites `pub_id`, `aut_id` and `com_descripcion` of the comment
    /// `com_id`. Returns null when `com_id` is missing; an unknown `com_id`
    /// fails like any other database error.
    async fn actualizar_comentario(
        &self,
        ctx: &Context<'_>,
        comentario: Option<ComentarioInput>,
    ) -> Result<Option<Comentario>> {
        let Some((com_id, input)) = with_com_id(comentario) else {
            tracing::error!("com_id is missing in the input");
            return Ok(None);
        };

        let state = ctx.data::<AppState>()?;
        let data = UpdateComentario {
            pub_id: input.pub_id,
            aut_id: input.aut_id,
            com_descripcion: input.com_descripcion,
        };
        let row = comentarios::update(&state.db, com_id, data)
            .await
            .and_then(|row| row.ok_or(sqlx::Error::RowNotFound))
            .or_fail("update comentario")?;

        tracing::info!(com_id, "Updated comentario");
        Ok(Some(row.into()))
    }

    /// Deletes the comment `com_id` and all of its reactions, returning the
    /// deleted comment. Returns null when `com_id` is missing.
    async fn eliminar_comentario(
        &self,
        ctx: &Context<'_>,
        comentario: Option<ComentarioInput>,
    ) -> Result<Option<Comentario>> {
        let Some((com_id, _)) = with_com_id(comentario) else {
            tracing::error!("com_id is missing in the input");
            return Ok(None);
        };

        let state = ctx.data::<AppState>()?;
        let row = service::delete_comentario(&state.db, com_id)
            .await
            .or_fail("delete comentario")?;

        Ok(Some(row.into()))
    }
}

fn with_com_id(comentario: Option<ComentarioInput>) -> Option<(i32, ComentarioInput)> {
    let input = comentario?;
    let com_id = input.com_id?;
    Some((com_id, input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(com_id: Option<i32>) -> ComentarioInput {
        ComentarioInput {
            com_id,
            pub_id: Some(1),
            aut_id: Some(2),
            com_descripcion: Some("hola".to_string()),
        }
    }

    #[test]
    fn test_with_com_id_requires_input_and_id() {
        assert!(with_com_id(None).is_none());
        assert!(with_com_id(Some(input(None))).is_none());

        let (com_id, rest) = with_com_id(Some(input(Some(5)))).unwrap();
        assert_eq!(com_id, 5);
        assert_eq!(rest.com_descripcion.as_deref(), Some("hola"));
    }
}
