//! The Executor - single entry point to the registry.
//!
//! The Executor is a dispatcher that routes commands to the handler for
//! their entity and returns the matching [`Output`].

use tracing::debug;
use uniag_engine::SharedRegistry;

use crate::handlers::{association, member, project};
use crate::{Command, Output, Result};

/// The command executor.
///
/// The Executor holds a [`SharedRegistry`] handle and no state of its own.
/// Cloning an executor yields another handle to the same registry.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads.
///
/// # Example
///
/// ```ignore
/// use uniag_executor::{Command, Executor, MemberKind};
///
/// let executor = Executor::default();
///
/// // Single command execution
/// executor.execute(Command::AddProject {
///     title: "Energy".into(),
///     funding: 50_000.0,
/// })?;
///
/// // Batch execution
/// let results = executor.execute_many(vec![
///     Command::ListMembers,
///     Command::ListProjects,
/// ]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Executor {
    registry: SharedRegistry,
}

impl Executor {
    /// Create a new executor over a registry handle.
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }

    /// Execute a single command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        debug!(target: "uniag::exec", command = cmd.name(), write = cmd.is_write(), "execute");
        let r = &self.registry;
        let result = match cmd {
            // Member commands
            Command::AddMember { kind, name } => member::add_member(r, kind, name),
            Command::ListMembers => member::list_members(r),
            Command::GetMember { member } => member::get_member(r, member),
            Command::RenameMember { member, name } => member::rename_member(r, member, name),
            Command::RemoveMember { member } => member::remove_member(r, member),

            // Project commands
            Command::AddProject { title, funding } => project::add_project(r, title, funding),
            Command::ListProjects => project::list_projects(r),
            Command::GetProject { project } => project::get_project(r, project),
            Command::SetProjectTitle { project, title } => {
                project::set_project_title(r, project, title)
            }
            Command::SetProjectFunding { project, funding } => {
                project::set_project_funding(r, project, funding)
            }
            Command::RemoveProject { project } => project::remove_project(r, project),

            // Association and funding commands
            Command::Associate { member, project } => association::associate(r, member, project),
            Command::Disassociate { member, project } => {
                association::disassociate(r, member, project)
            }
            Command::DistributeFunding { project } => association::distribute_funding(r, project),
        };
        if let Err(ref e) = result {
            debug!(target: "uniag::exec", error = %e, "command rejected");
        }
        result
    }

    /// Execute multiple commands sequentially.
    ///
    /// Returns one result per command, in order. A failing command does not
    /// stop the batch.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// The registry this executor operates on.
    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }
}
