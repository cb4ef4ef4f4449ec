//! Canonical binary encoding of histories and states.
//!
//! Both use bincode's default options: varint integers and no trailing
//! bytes accepted, so every value has exactly one valid encoding.

use bincode::Options;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};

use crate::error::{ErrorSeverity, GameError};
use crate::event::GameEvent;
use crate::state::GameState;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("failed to encode {what}: {source}")]
    Encode {
        what: &'static str,
        #[source]
        source: bincode::Error,
    },

    #[error("failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: bincode::Error,
    },
}

impl GameError for CodecError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            CodecError::Encode { .. } => ErrorSeverity::Internal,
            CodecError::Decode { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            CodecError::Encode { .. } => "CODEC_ENCODE",
            CodecError::Decode { .. } => "CODEC_DECODE",
        }
    }
}

fn options() -> impl Options {
    bincode::DefaultOptions::new()
}

fn encode<T: Serialize + ?Sized>(what: &'static str, value: &T) -> Result<Vec<u8>, CodecError> {
    options()
        .serialize(value)
        .map_err(|source| CodecError::Encode { what, source })
}

fn decode<T: DeserializeOwned>(what: &'static str, bytes: &[u8]) -> Result<T, CodecError> {
    options()
        .deserialize(bytes)
        .map_err(|source| CodecError::Decode { what, source })
}

pub fn encode_history(history: &[GameEvent]) -> Result<Vec<u8>, CodecError> {
    encode("history", history)
}

pub fn decode_history(bytes: &[u8]) -> Result<Vec<GameEvent>, CodecError> {
    decode("history", bytes)
}

pub fn encode_state(state: &GameState) -> Result<Vec<u8>, CodecError> {
    encode("state", state)
}

pub fn decode_state(bytes: &[u8]) -> Result<GameState, CodecError> {
    decode("state", bytes)
}

/// SHA-256 over the canonical state encoding. Equal roots mean
/// byte-identical states.
pub fn state_root(state: &GameState) -> Result<[u8; 32], CodecError> {
    let bytes = encode_state(state)?;
    Ok(Sha256::digest(&bytes).into())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::state::{EntityId, Position};
    use crate::test_support::{ALICE, BOB, TestBoard};

    fn entity_id() -> impl Strategy<Value = EntityId> {
        (0u32..64).prop_map(EntityId)
    }

    fn position() -> impl Strategy<Value = Position> {
        (-2i32..16, -2i32..16).prop_map(|(x, y)| Position::new(x, y))
    }

    fn event() -> impl Strategy<Value = GameEvent> {
        prop_oneof![
            (entity_id(), prop::collection::vec(position(), 0..6))
                .prop_map(|(entity_id, path)| GameEvent::EntityMoved { entity_id, path }),
            (entity_id(), entity_id(), "[a-z]{1,8}", "[a-z_]{1,12}", position()).prop_map(
                |(entity_id, summoner_id, owner, character_id, position)| {
                    GameEvent::SoldierSummoned {
                        entity_id,
                        summoner_id,
                        owner: owner.into(),
                        character_id: character_id.into(),
                        position,
                    }
                }
            ),
            (entity_id(), "[a-z_]{1,12}", position()).prop_map(|(caster_id, skill_id, target)| {
                GameEvent::SkillCast {
                    caster_id,
                    skill_id: skill_id.into(),
                    target,
                }
            }),
            entity_id().prop_map(|entity_id| GameEvent::EndTurn { entity_id }),
            (entity_id(), entity_id(), any::<u32>()).prop_map(|(source_id, target_id, amount)| {
                GameEvent::DealDamage {
                    source_id,
                    target_id,
                    amount,
                }
            }),
            (entity_id(), entity_id())
                .prop_map(|(source_id, target_id)| GameEvent::EntityDied { source_id, target_id }),
            (entity_id(), entity_id(), any::<u32>()).prop_map(|(source_id, target_id, amount)| {
                GameEvent::Heal {
                    source_id,
                    target_id,
                    amount,
                }
            }),
        ]
    }

    proptest! {
        #[test]
        fn history_round_trips(history in prop::collection::vec(event(), 0..48)) {
            let bytes = encode_history(&history).unwrap();
            prop_assert_eq!(decode_history(&bytes).unwrap(), history);
        }
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        let mut bytes = encode_history(&[GameEvent::EndTurn {
            entity_id: EntityId(1),
        }])
        .unwrap();
        bytes.push(0);

        let error = decode_history(&bytes).unwrap_err();
        assert_eq!(error.error_code(), "CODEC_DECODE");
        assert!(error.severity().is_internal());
    }

    #[test]
    fn state_round_trips_with_identical_root() {
        let state = TestBoard::new()
            .general(ALICE, 7, (2, 5))
            .general(BOB, 5, (8, 5))
            .obstacles([(5, 5)])
            .build();

        let decoded = decode_state(&encode_state(&state).unwrap()).unwrap();
        assert_eq!(decoded, state);
        assert_eq!(state_root(&decoded).unwrap(), state_root(&state).unwrap());
    }
}
