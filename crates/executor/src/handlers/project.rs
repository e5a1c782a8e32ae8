//! Project command handlers.

use uniag_core::ProjectId;
use uniag_engine::SharedRegistry;

use crate::types::{ProjectDetail, ProjectInfo};
use crate::{Output, Result};

/// Handle AddProject command.
pub fn add_project(r: &SharedRegistry, title: String, funding: f64) -> Result<Output> {
    let project = r.add_project(title, funding)?;
    Ok(Output::Project(ProjectInfo::from(&project)))
}

/// Handle ListProjects command.
pub fn list_projects(r: &SharedRegistry) -> Result<Output> {
    let projects: Vec<ProjectInfo> =
        r.read(|reg| reg.list_projects().map(ProjectInfo::from).collect());
    Ok(Output::Projects(projects))
}

/// Handle GetProject command.
pub fn get_project(r: &SharedRegistry, project: ProjectId) -> Result<Output> {
    let detail = r
        .project_with_participants(project)
        .map(|(p, members)| ProjectDetail::new(&p, &members));
    Ok(Output::MaybeProject(detail))
}

/// Handle SetProjectTitle command.
pub fn set_project_title(r: &SharedRegistry, project: ProjectId, title: String) -> Result<Output> {
    Ok(Output::Bool(r.set_project_title(project, title)?))
}

/// Handle SetProjectFunding command.
pub fn set_project_funding(r: &SharedRegistry, project: ProjectId, funding: f64) -> Result<Output> {
    Ok(Output::Bool(r.set_project_funding(project, funding)?))
}

/// Handle RemoveProject command.
pub fn remove_project(r: &SharedRegistry, project: ProjectId) -> Result<Output> {
    Ok(Output::Bool(r.remove_project(project)))
}
