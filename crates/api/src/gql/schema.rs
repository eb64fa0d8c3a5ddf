use async_graphql::dataloader::DataLoader;
use async_graphql::{EmptySubscription, Schema};

use super::loaders::{AutorLoader, CategoriaLoader, PublicacionLoader};
use super::{MutationRoot, QueryRoot};
use crate::state::AppState;

pub type BlogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema and inject shared state (AppState) into the context.
pub fn build_schema(state: AppState) -> BlogSchema {
    let autor_loader = DataLoader::new(AutorLoader::new(state.db.clone()), tokio::spawn);
    let categoria_loader = DataLoader::new(CategoriaLoader::new(state.db.clone()), tokio::spawn);
    let publicacion_loader =
        DataLoader::new(PublicacionLoader::new(state.db.clone()), tokio::spawn);

    let introspection_enabled = state.config().gql_introspection;

    let mut builder = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state) // available in resolvers via ctx.data::<AppState>()
    .data(autor_loader)
    .data(categoria_loader)
    .data(publicacion_loader)
    .limit_depth(10)
    .limit_complexity(200);

    if !introspection_enabled {
        builder = builder.disable_introspection();
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use sqlx::postgres::PgPoolOptions;

    use super::*;
    use crate::config::AppConfig;

    /// Schema backed by a pool that never connects; only usable for
    /// resolvers that return before touching the database.
    fn offline_schema() -> BlogSchema {
        let config = AppConfig::default();
        let pool = PgPoolOptions::new()
            .connect_lazy(&config.database_url)
            .expect("valid database url");
        build_schema(AppState::new(pool, config))
    }

    #[tokio::test]
    async fn test_sdl_exposes_column_named_fields() {
        let sdl = offline_schema().sdl();

        for expected in [
            "type Autor",
            "aut_usuario: String!",
            "type Categoria",
            "cat_titulo: String!",
            "type Publicacion",
            "pub_descripcion: String",
            "type Comentario",
            "com_descripcion: String!",
            "numeroLikes: Int!",
            "type Reaccion",
            "rea_like: Boolean!",
            "input ComentarioInput",
            "com_id: Int",
        ] {
            assert!(sdl.contains(expected), "SDL should contain `{expected}`");
        }
    }

    #[tokio::test]
    async fn test_sdl_exposes_all_root_fields() {
        let sdl = offline_schema().sdl();

        for field in [
            "autores(id: Int): [Autor!]!",
            "categorias(id: Int): [Categoria!]!",
            "publicaciones(id: Int): [Publicacion!]!",
            "comentarios(id: Int): [Comentario!]!",
            "publicacionesConComentarios:",
            "autoresConPublicaciones:",
            "comentariosPorPublicacion(pub_id: Int!):",
            "publicacionesConNumeroComentarios:",
            "publicacionComentariosLikes(pub_id: Int!):",
            "categoriasPublicacionesCompletas:",
            "autoresEstadisticas:",
            "crearComentario(comentario: ComentarioInput): Comentario",
            "actualizarComentario(comentario: ComentarioInput): Comentario",
            "eliminarComentario(comentario: ComentarioInput): Comentario",
            "crearPublicacion(publicacion: PublicacionInput): Publicacion",
            "crearAutor(autor: AutorInput): Autor",
            "crearCategoria(categoria: CategoriaInput): Categoria",
        ] {
            assert!(sdl.contains(field), "SDL should contain `{field}`");
        }
    }

    #[tokio::test]
    async fn test_mutations_without_input_return_null() {
        let schema = offline_schema();

        let response = schema
            .execute(
                r#"
                mutation {
                    crearComentario { com_id }
                    actualizarComentario { com_id }
                    eliminarComentario { com_id }
                    crearPublicacion { pub_id }
                    crearAutor { aut_id }
                    crearCategoria { cat_id }
                }
                "#,
            )
            .await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        for field in [
            "crearComentario",
            "actualizarComentario",
            "eliminarComentario",
            "crearPublicacion",
            "crearAutor",
            "crearCategoria",
        ] {
            assert!(data[field].is_null(), "{field} should be null");
        }
    }

    #[tokio::test]
    async fn test_comment_mutations_without_com_id_return_null() {
        let schema = offline_schema();

        let response = schema
            .execute(
                r#"
                mutation {
                    actualizarComentario(comentario: { pub_id: 1, aut_id: 1, com_descripcion: "x" }) {
                        com_id
                    }
                    eliminarComentario(comentario: { com_descripcion: "x" }) {
                        com_id
                    }
                }
                "#,
            )
            .await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert!(data["actualizarComentario"].is_null());
        assert!(data["eliminarComentario"].is_null());
    }
}
