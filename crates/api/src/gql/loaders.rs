use async_graphql::dataloader::Loader;
use infra::{
    db::Db,
    models::{AutorRow, CategoriaRow, PublicacionRow},
    repos::{autores, categorias, publicaciones},
};
use std::{collections::HashMap, future::Future, sync::Arc};

// AutorLoader - batch load authors by aut_id
#[derive(Clone)]
pub struct AutorLoader {
    pool: Db,
}

impl AutorLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<i32> for AutorLoader {
    type Value = AutorRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[i32],
    ) -> impl Future<Output = std::result::Result<HashMap<i32, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<i32> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = autores::list_by_ids(&pool, &ids).await.map_err(Arc::new)?;

            Ok(rows.into_iter().map(|r| (r.aut_id, r)).collect())
        }
    }
}

// CategoriaLoader - batch load categories by cat_id
#[derive(Clone)]
pub struct CategoriaLoader {
    pool: Db,
}

impl CategoriaLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<i32> for CategoriaLoader {
    type Value = CategoriaRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[i32],
    ) -> impl Future<Output = std::result::Result<HashMap<i32, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<i32> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = categorias::list_by_ids(&pool, &ids)
                .await
                .map_err(Arc::new)?;

            Ok(rows.into_iter().map(|r| (r.cat_id, r)).collect())
        }
    }
}

// PublicacionLoader - batch load publications by pub_id
#[derive(Clone)]
pub struct PublicacionLoader {
    pool: Db,
}

impl PublicacionLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<i32> for PublicacionLoader {
    type Value = PublicacionRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[i32],
    ) -> impl Future<Output = std::result::Result<HashMap<i32, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<i32> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = publicaciones::list_by_ids(&pool, &ids)
                .await
                .map_err(Arc::new)?;

            Ok(rows.into_iter().map(|r| (r.pub_id, r)).collect())
        }
    }
}
