// Each domain contains: mod.rs, resolvers.rs, types.rs

pub mod autores;
pub mod categorias;
pub mod comentarios;
pub mod publicaciones;
pub mod reportes;
