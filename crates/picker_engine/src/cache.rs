use engine_logging::{engine_info, engine_warn};
use picker_core::{Ability, Catalog, CatalogItem, Category, Details, Media};
use serde::{Deserialize, Serialize};

use crate::{KeyValueStore, PersistError};

pub const CATALOG_KEY: &str = "agents_full";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CachedAgent {
    id: String,
    name: String,
    role: String,
    icon: String,
    portrait: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    abilities: Vec<CachedAbility>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CachedAbility {
    slot: String,
    name: String,
    description: String,
    icon: Option<String>,
}

/// The catalog as last fetched, kept under [`CATALOG_KEY`].
#[derive(Debug, Clone)]
pub struct CatalogCache {
    store: KeyValueStore,
}

impl CatalogCache {
    pub fn new(store: KeyValueStore) -> Self {
        Self { store }
    }

    /// Cached items, or `None` when nothing usable is stored.
    ///
    /// Read and parse failures are logged and treated as an empty cache.
    pub fn load(&self) -> Option<Vec<CatalogItem>> {
        let text = match self.store.get(CATALOG_KEY) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(err) => {
                engine_warn!("Failed to read cached catalog from {:?}: {}", self.store.dir(), err);
                return None;
            }
        };

        let cached: Vec<CachedAgent> = match serde_json::from_str(&text) {
            Ok(cached) => cached,
            Err(err) => {
                engine_warn!("Discarding corrupt cached catalog: {}", err);
                return None;
            }
        };

        let items: Option<Vec<CatalogItem>> = cached.into_iter().map(from_cached).collect();
        match items {
            Some(items) => {
                engine_info!("Loaded {} cached agents", items.len());
                Some(items)
            }
            None => {
                engine_warn!("Discarding cached catalog with unknown roles");
                None
            }
        }
    }

    pub fn save(&self, catalog: &Catalog) -> Result<(), PersistError> {
        let cached: Vec<CachedAgent> = catalog.items().iter().map(to_cached).collect();
        let content = serde_json::to_string(&cached)?;
        self.store.set(CATALOG_KEY, &content)?;
        Ok(())
    }
}

fn to_cached(item: &CatalogItem) -> CachedAgent {
    CachedAgent {
        id: item.id.clone(),
        name: item.display_name.clone(),
        role: item.category.as_str().to_string(),
        icon: item.media.icon.clone(),
        portrait: item.media.portrait.clone(),
        description: item.details.description.clone(),
        abilities: item
            .details
            .abilities
            .iter()
            .map(|ability| CachedAbility {
                slot: ability.slot.clone(),
                name: ability.name.clone(),
                description: ability.description.clone(),
                icon: ability.icon.clone(),
            })
            .collect(),
    }
}

fn from_cached(cached: CachedAgent) -> Option<CatalogItem> {
    Some(CatalogItem {
        category: Category::parse(&cached.role)?,
        id: cached.id,
        display_name: cached.name,
        media: Media {
            icon: cached.icon,
            portrait: cached.portrait,
        },
        details: Details {
            description: cached.description,
            abilities: cached
                .abilities
                .into_iter()
                .map(|ability| Ability {
                    slot: ability.slot,
                    name: ability.name,
                    description: ability.description,
                    icon: ability.icon,
                })
                .collect(),
        },
    })
}
