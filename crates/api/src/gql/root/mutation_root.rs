use async_graphql::MergedObject;

use crate::gql::domains::autores::AutorMutation;
use crate::gql::domains::categorias::CategoriaMutation;
use crate::gql::domains::comentarios::ComentarioMutation;
use crate::gql::domains::publicaciones::PublicacionMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    AutorMutation,
    CategoriaMutation,
    ComentarioMutation,
    PublicacionMutation,
);
