//! Flat rows returned by the reporting queries. Columns coming from the
//! right-hand side of a LEFT JOIN are nullable.

use async_graphql::SimpleObject;

use infra::models::{
    AutorEstadisticaRow, AutorPublicacionRow, CategoriaResumenRow, ComentarioLikesRow,
    PublicacionComentarioRow, PublicacionNumeroComentariosRow,
};

#[derive(SimpleObject, Clone, Debug)]
#[graphql(rename_fields = "snake_case")]
pub struct PublicacionComentario {
    pub pub_id: i32,
    pub pub_titulo: String,
    pub aut_usuario: Option<String>,
    pub com_descripcion: Option<String>,
}

impl From<PublicacionComentarioRow> for PublicacionComentario {
    fn from(row: PublicacionComentarioRow) -> Self {
        Self {
            pub_id: row.pub_id,
            pub_titulo: row.pub_titulo,
            aut_usuario: row.aut_usuario,
            com_descripcion: row.com_descripcion,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(rename_fields = "snake_case")]
pub struct AutorPublicacion {
    pub aut_usuario: String,
    pub aut_nombre: String,
    pub pub_titulo: Option<String>,
    pub pub_descripcion: Option<String>,
}

impl From<AutorPublicacionRow> for AutorPublicacion {
    fn from(row: AutorPublicacionRow) -> Self {
        Self {
            aut_usuario: row.aut_usuario,
            aut_nombre: row.aut_nombre,
            pub_titulo: row.pub_titulo,
            pub_descripcion: row.pub_descripcion,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(rename_fields = "snake_case")]
pub struct PublicacionNumeroComentarios {
    pub pub_titulo: String,
    pub numero_comentarios: i32,
}

impl From<PublicacionNumeroComentariosRow> for PublicacionNumeroComentarios {
    fn from(row: PublicacionNumeroComentariosRow) -> Self {
        Self {
            pub_titulo: row.pub_titulo,
            numero_comentarios: row.numero_comentarios,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(rename_fields = "snake_case")]
pub struct ComentarioLikes {
    pub pub_titulo: String,
    pub com_descripcion: Option<String>,
    pub numero_likes: i32,
}

impl From<ComentarioLikesRow> for ComentarioLikes {
    fn from(row: ComentarioLikesRow) -> Self {
        Self {
            pub_titulo: row.pub_titulo,
            com_descripcion: row.com_descripcion,
            numero_likes: row.numero_likes,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(rename_fields = "snake_case")]
pub struct CategoriaResumen {
    pub categoria: String,
    pub pub_titulo: Option<String>,
    pub com_descripcion: Option<String>,
    pub numero_likes: i32,
    pub numero_autores_comentarios: i32,
}

impl From<CategoriaResumenRow> for CategoriaResumen {
    fn from(row: CategoriaResumenRow) -> Self {
        Self {
            categoria: row.categoria,
            pub_titulo: row.pub_titulo,
            com_descripcion: row.com_descripcion,
            numero_likes: row.numero_likes,
            numero_autores_comentarios: row.numero_autores_comentarios,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(rename_fields = "snake_case")]
pub struct AutorEstadistica {
    pub aut_nombre: String,
    pub categoria: Option<String>,
    pub numero_publicaciones: i32,
    pub numero_likes: i32,
}

impl From<AutorEstadisticaRow> for AutorEstadistica {
    fn from(row: AutorEstadisticaRow) -> Self {
        Self {
            aut_nombre: row.aut_nombre,
            categoria: row.categoria,
            numero_publicaciones: row.numero_publicaciones,
            numero_likes: row.numero_likes,
        }
    }
}
