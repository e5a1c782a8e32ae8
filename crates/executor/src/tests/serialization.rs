//! Serialization tests for Command and Output.
//!
//! Commands arrive as JSON from callers, so the wire shape matters: variant
//! names are external tags, ids are bare integers and member kinds are
//! snake_case strings.

use serde_json::json;

use crate::{Command, Distribution, MemberId, MemberKind, MemberInfo, Output, ProjectId};

/// Helper to test round-trip serialization of a Command.
fn command_round_trip(cmd: Command) {
    let json = serde_json::to_string(&cmd).expect("Failed to serialize command");
    let restored: Command = serde_json::from_str(&json).expect("Failed to deserialize command");
    assert_eq!(cmd, restored, "Command round-trip failed for: {}", json);
}

// =============================================================================
// Command Shape
// =============================================================================

#[test]
fn test_add_member_from_json() {
    let cmd: Command = serde_json::from_value(json!({
        "AddMember": { "kind": "integrated", "name": "Prof. Ana Silva" }
    }))
    .unwrap();
    assert_eq!(
        cmd,
        Command::AddMember {
            kind: MemberKind::Integrated,
            name: "Prof. Ana Silva".into()
        }
    );
}

#[test]
fn test_associate_ids_are_plain_numbers() {
    let cmd = Command::Associate {
        member: MemberId::new(2),
        project: ProjectId::new(7),
    };
    assert_eq!(
        serde_json::to_value(&cmd).unwrap(),
        json!({ "Associate": { "member": 2, "project": 7 } })
    );
}

#[test]
fn test_unit_variant_is_bare_string() {
    assert_eq!(serde_json::to_value(Command::ListMembers).unwrap(), json!("ListMembers"));
}

#[test]
fn test_unknown_field_rejected() {
    let result: Result<Command, _> = serde_json::from_value(json!({
        "RemoveMember": { "member": 1, "cascade": true }
    }));
    assert!(result.is_err());
}

#[test]
fn test_unknown_kind_rejected() {
    let result: Result<Command, _> = serde_json::from_value(json!({
        "AddMember": { "kind": "emeritus", "name": "X" }
    }));
    assert!(result.is_err());
}

#[test]
fn test_every_command_round_trips() {
    let m = MemberId::new(1);
    let p = ProjectId::new(1);
    for cmd in [
        Command::AddMember {
            kind: MemberKind::Visiting,
            name: "John".into(),
        },
        Command::ListMembers,
        Command::GetMember { member: m },
        Command::RenameMember {
            member: m,
            name: "Jon".into(),
        },
        Command::RemoveMember { member: m },
        Command::AddProject {
            title: "Energy".into(),
            funding: 50_000.5,
        },
        Command::ListProjects,
        Command::GetProject { project: p },
        Command::SetProjectTitle {
            project: p,
            title: "Data".into(),
        },
        Command::SetProjectFunding {
            project: p,
            funding: 0.0,
        },
        Command::RemoveProject { project: p },
        Command::Associate { member: m, project: p },
        Command::Disassociate { member: m, project: p },
        Command::DistributeFunding { project: p },
    ] {
        command_round_trip(cmd);
    }
}

// =============================================================================
// Output Shape
// =============================================================================

#[test]
fn test_member_output_omits_balance_for_collaborator() {
    let out = Output::Member(MemberInfo {
        id: MemberId::new(3),
        name: "Eng. Carlos Lopes".into(),
        kind: MemberKind::Collaborator,
        balance: None,
        projects: vec![],
    });
    assert_eq!(
        serde_json::to_value(&out).unwrap(),
        json!({ "Member": {
            "id": 3, "name": "Eng. Carlos Lopes", "kind": "collaborator", "projects": []
        }})
    );
}

#[test]
fn test_distribution_output_shape() {
    let out = Output::Distribution(Some(Distribution::Distributed {
        recipients: 2,
        share: 25_000.0,
        total: 50_000.0,
    }));
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["Distribution"]["outcome"], "distributed");
    assert_eq!(json["Distribution"]["recipients"], 2);

    let missing = serde_json::to_value(Output::Distribution(None)).unwrap();
    assert_eq!(missing, json!({ "Distribution": null }));
}
