//! End-to-end scenarios through the public `uniag` facade.
//!
//! Each test drives an [`Executor`] with [`Command`]s only, the way the
//! console shell does, and checks what a caller can observe.

use uniag::{
    Command, Distribution, Error, Executor, MemberId, MemberInfo, MemberKind, Output, ProjectId,
    ProjectInfo, SharedRegistry,
};

fn add_member(executor: &Executor, kind: MemberKind, name: &str) -> MemberId {
    match executor
        .execute(Command::AddMember {
            kind,
            name: name.into(),
        })
        .unwrap()
    {
        Output::Member(m) => m.id,
        other => panic!("unexpected output: {:?}", other),
    }
}

fn add_project(executor: &Executor, title: &str, funding: f64) -> ProjectId {
    match executor
        .execute(Command::AddProject {
            title: title.into(),
            funding,
        })
        .unwrap()
    {
        Output::Project(p) => p.id,
        other => panic!("unexpected output: {:?}", other),
    }
}

fn associate(executor: &Executor, member: MemberId, project: ProjectId) -> bool {
    executor.execute(Command::Associate { member, project }).unwrap() == Output::Bool(true)
}

fn members(executor: &Executor) -> Vec<MemberInfo> {
    match executor.execute(Command::ListMembers).unwrap() {
        Output::Members(list) => list,
        other => panic!("unexpected output: {:?}", other),
    }
}

fn projects(executor: &Executor) -> Vec<ProjectInfo> {
    match executor.execute(Command::ListProjects).unwrap() {
        Output::Projects(list) => list,
        other => panic!("unexpected output: {:?}", other),
    }
}

#[test]
fn energy_project_split_between_two_integrated_researchers() {
    let executor = Executor::default();
    let ana = add_member(&executor, MemberKind::Integrated, "Prof. Ana Silva");
    let rui = add_member(&executor, MemberKind::Integrated, "Dr. Rui Costa");
    let energy = add_project(&executor, "Sistema Inteligente de Gestão de Energia", 50_000.0);

    assert!(associate(&executor, ana, energy));
    assert!(associate(&executor, rui, energy));

    let outcome = executor
        .execute(Command::DistributeFunding { project: energy })
        .unwrap();
    assert_eq!(
        outcome,
        Output::Distribution(Some(Distribution::Distributed {
            recipients: 2,
            share: 25_000.0,
            total: 50_000.0,
        }))
    );

    let balances: Vec<Option<f64>> = members(&executor).iter().map(|m| m.balance).collect();
    assert_eq!(balances, [Some(25_000.0), Some(25_000.0)]);

    // Funding is not drained by a distribution
    assert_eq!(projects(&executor)[0].funding, 50_000.0);
}

#[test]
fn mixed_project_only_pays_integrated_researchers() {
    let executor = Executor::default();
    let ana = add_member(&executor, MemberKind::Integrated, "Ana");
    let carlos = add_member(&executor, MemberKind::Collaborator, "Carlos");
    let john = add_member(&executor, MemberKind::Visiting, "John");
    let data = add_project(&executor, "Big Data", 75_000.0);
    for m in [ana, carlos, john] {
        assert!(associate(&executor, m, data));
    }

    executor
        .execute(Command::DistributeFunding { project: data })
        .unwrap();

    let listed = members(&executor);
    assert_eq!(listed[0].balance, Some(75_000.0));
    assert_eq!(listed[1].balance, None);
    assert_eq!(listed[2].balance, None);
}

#[test]
fn project_without_integrated_researchers_changes_nothing() {
    let executor = Executor::default();
    let carlos = add_member(&executor, MemberKind::Collaborator, "Carlos");
    let p = add_project(&executor, "Outreach", 1_000.0);
    associate(&executor, carlos, p);

    let outcome = executor
        .execute(Command::DistributeFunding { project: p })
        .unwrap();
    assert_eq!(
        outcome,
        Output::Distribution(Some(Distribution::NoEligibleRecipients))
    );
}

#[test]
fn removing_a_member_detaches_it_from_every_project() {
    let executor = Executor::default();
    let ana = add_member(&executor, MemberKind::Integrated, "Ana");
    let rui = add_member(&executor, MemberKind::Integrated, "Rui");
    let p1 = add_project(&executor, "One", 10.0);
    let p2 = add_project(&executor, "Two", 20.0);
    for p in [p1, p2] {
        associate(&executor, ana, p);
        associate(&executor, rui, p);
    }

    let removed = executor
        .execute(Command::RemoveMember { member: ana })
        .unwrap();
    assert_eq!(removed, Output::Bool(true));

    for p in projects(&executor) {
        assert_eq!(p.participants, [rui], "project {} still lists ana", p.id);
    }
    assert!(executor.registry().read(|r| r.check_consistency().is_ok()));
}

#[test]
fn removing_a_project_detaches_it_from_every_member() {
    let executor = Executor::default();
    let ana = add_member(&executor, MemberKind::Integrated, "Ana");
    let p1 = add_project(&executor, "One", 10.0);
    let p2 = add_project(&executor, "Two", 20.0);
    associate(&executor, ana, p1);
    associate(&executor, ana, p2);

    executor
        .execute(Command::RemoveProject { project: p1 })
        .unwrap();

    assert_eq!(members(&executor)[0].projects, [p2]);
    let detail = executor
        .execute(Command::GetProject { project: p1 })
        .unwrap();
    assert_eq!(detail, Output::MaybeProject(None));
}

#[test]
fn rejected_input_is_an_error_and_leaves_no_trace() {
    let executor = Executor::default();
    let err = executor
        .execute(Command::AddProject {
            title: "Energy".into(),
            funding: -1.0,
        })
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));

    assert!(executor
        .execute(Command::AddMember {
            kind: MemberKind::Visiting,
            name: "   ".into(),
        })
        .is_err());

    assert!(members(&executor).is_empty());
    assert!(projects(&executor).is_empty());
    assert_eq!(add_project(&executor, "Energy", 1.0), ProjectId::new(1));
}

#[test]
fn batch_and_shared_handle_see_the_same_registry() {
    let registry = SharedRegistry::new();
    let executor = Executor::new(registry.clone());

    let results = executor.execute_many(vec![
        Command::AddMember {
            kind: MemberKind::Integrated,
            name: "Ana".into(),
        },
        Command::AddProject {
            title: "".into(),
            funding: 1.0,
        },
        Command::AddProject {
            title: "Energy".into(),
            funding: 100.0,
        },
        Command::Associate {
            member: MemberId::new(1),
            project: ProjectId::new(1),
        },
    ]);
    assert_eq!(results.len(), 4);
    assert!(results[1].is_err());
    assert_eq!(results[3], Ok(Output::Bool(true)));

    let project = registry.find_project(ProjectId::new(1)).unwrap();
    assert_eq!(project.participants(), &[MemberId::new(1)]);
}

#[test]
fn outputs_serialize_to_stable_json() {
    let executor = Executor::default();
    let ana = add_member(&executor, MemberKind::Integrated, "Ana");
    let json = serde_json::to_value(executor.execute(Command::GetMember { member: ana }).unwrap())
        .unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "MaybeMember": {
                "id": 1,
                "name": "Ana",
                "kind": "integrated",
                "balance": 0.0,
                "projects": []
            }
        })
    );
}

#[test]
fn saturated_balance_survives_json_round_trip() {
    let executor = Executor::default();
    let ana = add_member(&executor, MemberKind::Integrated, "Ana");
    let moonshot = add_project(&executor, "Moonshot", f64::MAX);
    associate(&executor, ana, moonshot);
    for _ in 0..2 {
        executor
            .execute(Command::DistributeFunding { project: moonshot })
            .unwrap();
    }

    let output = executor.execute(Command::GetMember { member: ana }).unwrap();
    let json = serde_json::to_string(&output).unwrap();
    assert!(!json.contains("null"), "balance lost in {}", json);
    match serde_json::from_str::<Output>(&json).unwrap() {
        Output::MaybeMember(Some(m)) => {
            let balance = m.balance.unwrap();
            assert!(balance.is_finite() && balance > 1e308);
        }
        other => panic!("unexpected output: {:?}", other),
    }
}
