//! Sample data loaded at start-up unless `--empty` or
//! `seed_sample_data = false`.

use tracing::info;
use uniag_core::Result;
use uniag_executor::{MemberKind, Registry};

/// Populate `registry` with four members and two projects, linking the two
/// integrated researchers to the first project.
pub fn seed_sample_data(registry: &mut Registry) -> Result<()> {
    let ana = registry
        .add_member(MemberKind::Integrated, "Prof. Ana Silva")?
        .id();
    let rui = registry
        .add_member(MemberKind::Integrated, "Dr. Rui Costa")?
        .id();
    registry.add_member(MemberKind::Collaborator, "Eng. Carlos Lopes")?;
    registry.add_member(MemberKind::Visiting, "Prof. John Doe")?;

    let energy = registry
        .add_project("Sistema Inteligente de Gestão de Energia", 50_000.0)?
        .id();
    registry.add_project("Análise de Big Data em Redes Sociais", 75_000.0)?;

    registry.associate(ana, energy);
    registry.associate(rui, energy);

    info!(
        target: "uniag::cli",
        members = registry.member_count(),
        projects = registry.project_count(),
        "sample data loaded"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uniag_executor::{MemberId, ProjectId};

    #[test]
    fn test_sample_data_shape() {
        let mut registry = Registry::new();
        seed_sample_data(&mut registry).unwrap();

        assert_eq!(registry.member_count(), 4);
        assert_eq!(registry.project_count(), 2);

        let names: Vec<&str> = registry.list_members().map(|m| m.name()).collect();
        assert_eq!(
            names,
            ["Prof. Ana Silva", "Dr. Rui Costa", "Eng. Carlos Lopes", "Prof. John Doe"]
        );

        let energy = registry.find_project(ProjectId::new(1)).unwrap();
        assert_eq!(energy.funding(), 50_000.0);
        assert_eq!(energy.participants(), &[MemberId::new(1), MemberId::new(2)]);
        assert!(registry
            .find_project(ProjectId::new(2))
            .unwrap()
            .participants()
            .is_empty());
        assert!(registry.check_consistency().is_ok());
    }

    #[test]
    fn test_sample_distribution() {
        let mut registry = Registry::new();
        seed_sample_data(&mut registry).unwrap();
        registry.distribute_funding(ProjectId::new(1));
        assert_eq!(
            registry.find_member(MemberId::new(1)).unwrap().balance(),
            Some(25_000.0)
        );
        assert_eq!(
            registry.find_member(MemberId::new(3)).unwrap().balance(),
            None
        );
    }
}
