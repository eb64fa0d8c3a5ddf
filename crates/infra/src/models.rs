use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AutorRow {
    pub aut_id: i32,
    pub aut_usuario: String,
    pub aut_nombre: String,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CategoriaRow {
    pub cat_id: i32,
    pub cat_titulo: String,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PublicacionRow {
    pub pub_id: i32,
    pub cat_id: i32,
    pub aut_id: i32,
    pub pub_titulo: String,
    pub pub_descripcion: Option<String>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ComentarioRow {
    pub com_id: i32,
    pub pub_id: i32,
    pub aut_id: i32,
    pub com_descripcion: String,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ReaccionRow {
    pub rea_id: i32,
    pub com_id: i32,
    pub rea_like: bool,
}

// Every joined column is nullable: the reports are built from LEFT JOINs.

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PublicacionComentarioRow {
    pub pub_id: i32,
    pub pub_titulo: String,
    pub aut_usuario: Option<String>,
    pub com_descripcion: Option<String>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AutorPublicacionRow {
    pub aut_usuario: String,
    pub aut_nombre: String,
    pub pub_titulo: Option<String>,
    pub pub_descripcion: Option<String>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PublicacionNumeroComentariosRow {
    pub pub_titulo: String,
    pub numero_comentarios: i32,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ComentarioLikesRow {
    pub pub_titulo: String,
    pub com_descripcion: Option<String>,
    pub numero_likes: i32,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CategoriaResumenRow {
    pub categoria: String,
    pub pub_titulo: Option<String>,
    pub com_descripcion: Option<String>,
    pub numero_likes: i32,
    pub numero_autores_comentarios: i32,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AutorEstadisticaRow {
    pub aut_nombre: String,
    pub categoria: Option<String>,
    pub numero_publicaciones: i32,
    pub numero_likes: i32,
}
