use std::sync::Arc;

use stockroom_catalog::{CatalogLoader, CatalogSource};
use stockroom_order::RequisitionManager;
use stockroom_shared::models::events::RequisitionSavedEvent;
use tokio::sync::{broadcast, RwLock};

use crate::shell::Tab;

#[derive(Clone)]
pub struct AppState {
    pub requisition: Arc<RwLock<RequisitionManager>>,
    pub active_tab: Arc<RwLock<Tab>>,
    pub events_tx: broadcast::Sender<RequisitionSavedEvent>,
}

impl AppState {
    pub fn new(manager: RequisitionManager) -> Self {
        let (events_tx, _) = broadcast::channel(100);
        Self {
            requisition: Arc::new(RwLock::new(manager)),
            active_tab: Arc::new(RwLock::new(Tab::default())),
            events_tx,
        }
    }

    /// Fetch the catalog and install it. The session lock is only taken once
    /// the fetch has resolved.
    pub async fn load_catalog(&self, loader: &CatalogLoader, source: &dyn CatalogSource) {
        let catalog = loader.load(source).await;
        self.requisition.write().await.install_catalog(catalog);
    }
}
