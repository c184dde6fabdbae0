use picker_core::{AbilityRecord, AgentRecord};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("payload is malformed: {0}")]
    Malformed(String),
    #[error("payload has no `data` list")]
    MissingData,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireAgent {
    uuid: Option<String>,
    display_name: Option<String>,
    role: Option<WireRole>,
    display_icon: Option<String>,
    display_icon_small: Option<String>,
    full_portrait: Option<String>,
    bust_portrait: Option<String>,
    description: Option<String>,
    abilities: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRole {
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireAbility {
    slot: Option<String>,
    display_name: Option<String>,
    description: Option<String>,
    display_icon: Option<String>,
}

/// Decode an agents response body: `{ "data": [ {...}, ... ] }`.
///
/// The envelope must be well formed. Entries that do not fit the record
/// shape are skipped individually; validation proper happens in the core.
pub fn decode_agents(bytes: &[u8]) -> Result<Vec<AgentRecord>, DecodeError> {
    let envelope: Envelope =
        serde_json::from_slice(bytes).map_err(|err| DecodeError::Malformed(err.to_string()))?;
    let entries = envelope.data.ok_or(DecodeError::MissingData)?;

    Ok(entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<WireAgent>(entry).ok())
        .map(into_record)
        .collect())
}

fn into_record(wire: WireAgent) -> AgentRecord {
    let abilities = wire
        .abilities
        .unwrap_or_default()
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<WireAbility>(entry).ok())
        .map(|ability| AbilityRecord {
            slot: ability.slot,
            display_name: ability.display_name,
            description: ability.description,
            display_icon: ability.display_icon,
        })
        .collect();

    AgentRecord {
        uuid: wire.uuid,
        display_name: wire.display_name,
        role: wire.role.and_then(|role| role.display_name),
        display_icon: wire.display_icon,
        display_icon_small: wire.display_icon_small,
        full_portrait: wire.full_portrait,
        bust_portrait: wire.bust_portrait,
        description: wire.description,
        abilities,
    }
}
