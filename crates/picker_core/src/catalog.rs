use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use url::Url;

/// Agent role. The remote data knows exactly these four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Duelist,
    Controller,
    Sentinel,
    Initiator,
}

impl Category {
    /// Display order used by the role tabs.
    pub const ALL: [Category; 4] = [
        Category::Sentinel,
        Category::Initiator,
        Category::Controller,
        Category::Duelist,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Duelist => "duelist",
            Category::Controller => "controller",
            Category::Sentinel => "sentinel",
            Category::Initiator => "initiator",
        }
    }

    /// Case-insensitive parse of a role display name.
    pub fn parse(raw: &str) -> Option<Self> {
        let lowered = raw.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == lowered)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub icon: String,
    pub portrait: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ability {
    pub slot: String,
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Details {
    pub description: String,
    pub abilities: Vec<Ability>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: String,
    pub display_name: String,
    pub category: Category,
    pub media: Media,
    pub details: Details,
}

impl CatalogItem {
    fn is_well_formed(&self) -> bool {
        !self.id.trim().is_empty()
            && !self.display_name.trim().is_empty()
            && is_resolvable(&self.media.icon)
    }
}

/// Ordered, immutable list of selectable items.
///
/// Cloning shares the backing slice; a new fetch builds a new `Catalog`
/// instead of editing this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Arc<[CatalogItem]>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a catalog from trusted items, rejecting the whole list if any
    /// item is malformed or an id repeats.
    pub fn from_items(items: Vec<CatalogItem>) -> Option<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !item.is_well_formed() || !seen.insert(item.id.as_str()) {
                return None;
            }
        }
        Some(Self {
            items: Arc::from(items),
        })
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.id.as_str())
    }
}

/// One agent as it arrived from the remote source, before any validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AgentRecord {
    pub uuid: Option<String>,
    pub display_name: Option<String>,
    pub role: Option<String>,
    pub display_icon: Option<String>,
    pub display_icon_small: Option<String>,
    pub full_portrait: Option<String>,
    pub bust_portrait: Option<String>,
    pub description: Option<String>,
    pub abilities: Vec<AbilityRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AbilityRecord {
    pub slot: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub display_icon: Option<String>,
}

impl AgentRecord {
    /// Converts the record into a catalog item, or `None` when it lacks a
    /// name, a usable icon, an id, or a known role.
    pub fn validate(self) -> Option<CatalogItem> {
        let display_name = non_empty(self.display_name)?;
        let icon = non_empty(self.display_icon)
            .or_else(|| non_empty(self.display_icon_small))
            .filter(|icon| is_resolvable(icon))?;
        let id = non_empty(self.uuid).or_else(|| {
            let derived = normalize_name(&display_name);
            (!derived.is_empty()).then_some(derived)
        })?;
        let category = self.role.as_deref().and_then(Category::parse)?;
        let portrait = non_empty(self.full_portrait)
            .or_else(|| non_empty(self.bust_portrait))
            .unwrap_or_else(|| icon.clone());

        let abilities = self
            .abilities
            .into_iter()
            .map(|ability| Ability {
                slot: ability.slot.unwrap_or_default(),
                name: ability.display_name.unwrap_or_default(),
                description: ability.description.unwrap_or_default(),
                icon: non_empty(ability.display_icon),
            })
            .collect();

        Some(CatalogItem {
            id,
            display_name,
            category,
            media: Media { icon, portrait },
            details: Details {
                description: self.description.unwrap_or_default(),
                abilities,
            },
        })
    }
}

/// Startup catalog: the cached list when it is structurally sound, otherwise empty.
pub fn load(cached: Option<Vec<CatalogItem>>) -> Catalog {
    cached.and_then(Catalog::from_items).unwrap_or_default()
}

/// Validates a fetched payload into a replacement catalog.
///
/// Records that fail validation are dropped one by one; later duplicates of
/// an id are dropped too. `None` when nothing survives.
pub fn validate_payload(fetched: Option<Vec<AgentRecord>>) -> Option<Catalog> {
    let records = fetched?;
    let mut seen = HashSet::new();
    let items: Vec<CatalogItem> = records
        .into_iter()
        .filter_map(AgentRecord::validate)
        .filter(|item| seen.insert(item.id.clone()))
        .collect();

    if items.is_empty() {
        return None;
    }
    Catalog::from_items(items)
}

/// Combines a fetch result with the current catalog: a non-empty validated
/// payload replaces `current` wholesale, anything else leaves it as is.
pub fn merge(current: &Catalog, fetched: Option<Vec<AgentRecord>>) -> Catalog {
    validate_payload(fetched).unwrap_or_else(|| current.clone())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

fn is_resolvable(reference: &str) -> bool {
    Url::parse(reference.trim()).is_ok()
}
