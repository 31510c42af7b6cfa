use async_trait::async_trait;
use crate::core::library::CatalogResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, fails if its id is already taken
    async fn create(&self, entity: &Entity) -> CatalogResult<usize>;

    // get an entity
    async fn get(&self, id: &str) -> CatalogResult<Entity>;

    // delete an entity
    async fn delete(&self, id: &str) -> CatalogResult<usize>;

    // all entities in iteration order
    async fn all(&self) -> CatalogResult<Vec<Entity>>;
}
