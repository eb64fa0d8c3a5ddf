use async_graphql::MergedObject;

use crate::gql::domains::autores::AutorQuery;
use crate::gql::domains::categorias::CategoriaQuery;
use crate::gql::domains::comentarios::ComentarioQuery;
use crate::gql::domains::publicaciones::PublicacionQuery;
use crate::gql::domains::reportes::ReporteQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    AutorQuery,
    CategoriaQuery,
    ComentarioQuery,
    PublicacionQuery,
    ReporteQuery,
);
