pub mod product;
pub mod inventory;
pub mod loader;
pub mod search;

pub use product::{Product, RemoteProduct};
pub use inventory::{Catalog, CatalogStatus, InventoryError};
pub use loader::{CatalogError, CatalogLoader, CatalogSource};
