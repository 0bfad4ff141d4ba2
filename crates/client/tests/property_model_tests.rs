//! Property-based tests for model decoding and path encoding.
//!
//! # Invariants
//! - Unrecognized enum strings decode to `Unknown` instead of failing.
//! - `succeeded()` holds only for inactive, successful commands.
//! - A `null` item list decodes as empty.
//! - Encoded path segments never contain `/` and decode back to the input.

use cm_client::endpoints::encode_path_segment;
use cm_client::models::{HealthSummary, RoleState, ServiceState};
use cm_client::{BulkCommandList, Command, CommandList};
use percent_encoding::percent_decode_str;
use proptest::prelude::*;

const KNOWN_SERVICE_STATES: &[&str] = &[
    "HISTORY_NOT_AVAILABLE",
    "STARTING",
    "STARTED",
    "STOPPING",
    "STOPPED",
];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn command_flags_survive_decoding(id: u64, active: bool, success: bool) {
        let json = serde_json::json!({
            "id": id,
            "name": "Restart",
            "active": active,
            "success": success
        });
        let command: Command = serde_json::from_value(json).unwrap();

        prop_assert_eq!(command.id, id);
        prop_assert_eq!(command.is_terminal(), !active);
        prop_assert_eq!(command.succeeded(), !active && success);
    }

    #[test]
    fn unknown_states_fall_back(state in "[A-Z_]{1,24}") {
        prop_assume!(!KNOWN_SERVICE_STATES.contains(&state.as_str()) && state != "BUSY");
        let value = serde_json::Value::String(state);

        let service: ServiceState = serde_json::from_value(value.clone()).unwrap();
        let role: RoleState = serde_json::from_value(value).unwrap();

        prop_assert_eq!(service, ServiceState::Unknown);
        prop_assert_eq!(role, RoleState::Unknown);
    }

    #[test]
    fn known_service_states_display_as_wire_name(index in 0..KNOWN_SERVICE_STATES.len()) {
        let name = KNOWN_SERVICE_STATES[index];
        let state: ServiceState = serde_json::from_value(serde_json::json!(name)).unwrap();
        prop_assert_eq!(state.to_string(), name);
    }

    #[test]
    fn bulk_items_and_errors_are_preserved(
        ids in prop::collection::vec(any::<u64>(), 0..8),
        errors in prop::collection::vec("[a-zA-Z' ]{1,30}", 0..4),
    ) {
        let items: Vec<_> = ids
            .iter()
            .map(|id| serde_json::json!({"id": id, "active": true}))
            .collect();
        let json = serde_json::json!({"items": items, "errors": errors});

        let bulk: BulkCommandList = serde_json::from_value(json).unwrap();

        let decoded: Vec<u64> = bulk.commands().iter().map(|c| c.id).collect();
        prop_assert_eq!(decoded, ids);
        prop_assert_eq!(bulk.has_errors(), !errors.is_empty());
        prop_assert_eq!(bulk.errors, errors);
    }

    #[test]
    fn path_segments_never_split(segment in "\\PC{0,40}") {
        let encoded = encode_path_segment(&segment);

        prop_assert!(!encoded.contains('/'));
        prop_assert!(!encoded.contains('?'));
        prop_assert!(!encoded.contains('#'));
        let decoded = percent_decode_str(&encoded).decode_utf8().unwrap();
        prop_assert_eq!(decoded.as_ref(), segment.as_str());
    }
}

#[test]
fn null_lists_decode_empty() {
    let commands: CommandList = serde_json::from_str(r#"{"items": null}"#).unwrap();
    assert!(commands.items.is_empty());

    let health: HealthSummary = serde_json::from_str(r#""SOMETHING_NEW""#).unwrap();
    assert_eq!(health, HealthSummary::Unknown);
}
