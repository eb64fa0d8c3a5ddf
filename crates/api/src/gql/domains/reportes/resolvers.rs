use async_graphql::{Context, Object, Result};

use crate::gql::error::GqlError;
use crate::state::AppState;
use infra::repos::reports;

use super::types::{
    AutorEstadistica, AutorPublicacion, CategoriaResumen, ComentarioLikes, PublicacionComentario,
    PublicacionNumeroComentarios,
};

#[derive(Default)]
pub struct ReporteQuery;

#[Object]
impl ReporteQuery {
    /// Every publication paired with each of its comments and the commenter.
    async fn publicaciones_con_comentarios(
        &self,
        ctx: &Context<'_>,
    ) -> Result<Vec<PublicacionComentario>> {
        let state = ctx.data::<AppState>()?;
        let rows = reports::publicaciones_con_comentarios(&state.db)
            .await
            .map_err(GqlError::from)?;
        Ok(rows.into_iter().map(PublicacionComentario::from).collect())
    }

    async fn autores_con_publicaciones(&self, ctx: &Context<'_>) -> Result<Vec<AutorPublicacion>> {
        let state = ctx.data::<AppState>()?;
        let rows = reports::autores_con_publicaciones(&state.db)
            .await
            .map_err(GqlError::from)?;
        Ok(rows.into_iter().map(AutorPublicacion::from).collect())
    }

    async fn comentarios_por_publicacion(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "pub_id")] pub_id: i32,
    ) -> Result<Vec<PublicacionComentario>> {
        let state = ctx.data::<AppState>()?;
        let rows = reports::comentarios_por_publicacion(&state.db, pub_id)
            .await
            .map_err(GqlError::from)?;
        Ok(rows.into_iter().map(PublicacionComentario::from).collect())
    }

    async fn publicaciones_con_numero_comentarios(
        &self,
        ctx: &Context<'_>,
    ) -> Result<Vec<PublicacionNumeroComentarios>> {
        let state = ctx.data::<AppState>()?;
        let rows = reports::publicaciones_con_numero_comentarios(&state.db)
            .await
            .map_err(GqlError::from)?;
        Ok(rows
            .into_iter()
            .map(PublicacionNumeroComentarios::from)
            .collect())
    }

    /// Like count of each comment on one publication.
    async fn publicacion_comentarios_likes(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "pub_id")] pub_id: i32,
    ) -> Result<Vec<ComentarioLikes>> {
        let state = ctx.data::<AppState>()?;
        let rows = reports::publicacion_comentarios_likes(&state.db, pub_id)
            .await
            .map_err(GqlError::from)?;
        Ok(rows.into_iter().map(ComentarioLikes::from).collect())
    }

    async fn categorias_publicaciones_completas(
        &self,
        ctx: &Context<'_>,
    ) -> Result<Vec<CategoriaResumen>> {
        let state = ctx.data::<AppState>()?;
        let rows = reports::categorias_publicaciones_completas(&state.db)
            .await
            .map_err(GqlError::from)?;
        Ok(rows.into_iter().map(CategoriaResumen::from).collect())
    }

    /// Publications and likes received per author and category.
    async fn autores_estadisticas(&self, ctx: &Context<'_>) -> Result<Vec<AutorEstadistica>> {
        let state = ctx.data::<AppState>()?;
        let rows = reports::autores_estadisticas(&state.db)
            .await
            .map_err(GqlError::from)?;
        Ok(rows.into_iter().map(AutorEstadistica::from).collect())
    }
}
