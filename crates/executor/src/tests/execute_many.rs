//! Tests for the execute_many batch execution method.

use crate::{Command, Error, Executor, MemberId, MemberKind, Output, ProjectId};

#[test]
fn test_execute_many_empty() {
    let executor = Executor::default();
    let results = executor.execute_many(vec![]);
    assert!(results.is_empty());
}

#[test]
fn test_execute_many_preserves_order() {
    let executor = Executor::default();
    let results = executor.execute_many(vec![
        Command::AddMember {
            kind: MemberKind::Integrated,
            name: "Ana".into(),
        },
        Command::AddProject {
            title: "Energy".into(),
            funding: 100.0,
        },
        Command::Associate {
            member: MemberId::new(1),
            project: ProjectId::new(1),
        },
        Command::DistributeFunding {
            project: ProjectId::new(1),
        },
        Command::GetMember {
            member: MemberId::new(1),
        },
    ]);

    assert_eq!(results.len(), 5);
    assert!(matches!(results[0], Ok(Output::Member(_))));
    assert!(matches!(results[1], Ok(Output::Project(_))));
    assert_eq!(results[2], Ok(Output::Bool(true)));
    assert!(matches!(results[3], Ok(Output::Distribution(Some(_)))));
    match &results[4] {
        Ok(Output::MaybeMember(Some(m))) => assert_eq!(m.balance, Some(100.0)),
        other => panic!("Expected MaybeMember(Some), got {:?}", other),
    }
}

#[test]
fn test_execute_many_continues_after_error() {
    let executor = Executor::default();
    let results = executor.execute_many(vec![
        Command::AddProject {
            title: "".into(),
            funding: 1.0,
        },
        Command::AddProject {
            title: "Data".into(),
            funding: 1.0,
        },
    ]);

    assert!(matches!(results[0], Err(Error::InvalidArgument { .. })));
    match &results[1] {
        Ok(Output::Project(p)) => {
            assert_eq!(p.id, ProjectId::new(1), "failed insert must not consume an id")
        }
        other => panic!("Expected Project output, got {:?}", other),
    }
}
