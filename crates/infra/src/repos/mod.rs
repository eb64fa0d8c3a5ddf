pub mod autores;
pub mod categorias;
pub mod comentarios;
pub mod publicaciones;
pub mod reacciones;
pub mod reports;

pub use autores::CreateAutor;
pub use categorias::CreateCategoria;
pub use comentarios::{CreateComentario, UpdateComentario};
pub use publicaciones::CreatePublicacion;
