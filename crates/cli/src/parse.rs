//! ArgMatches → Command conversion.
//!
//! Translates clap's parsed arguments into an executor [`Command`]. Shell
//! meta-commands (`help`, `quit`) are recognised before clap sees the line.

use std::str::FromStr;

use clap::ArgMatches;
use uniag_executor::{Command, MemberId, MemberKind, ProjectId};

/// Pipe-mode meta-commands.
#[derive(Debug, PartialEq, Eq)]
pub enum MetaCommand {
    Help,
    Quit,
}

/// Check for meta-commands before delegating to clap.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    match line.split_whitespace().next()? {
        "quit" | "exit" => Some(MetaCommand::Quit),
        "help" => Some(MetaCommand::Help),
        _ => None,
    }
}

/// Convert clap ArgMatches into a Command.
pub fn matches_to_command(matches: &ArgMatches) -> Result<Command, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "member" => parse_member(sub_matches),
        "project" => parse_project(sub_matches),
        "associate" => Ok(Command::Associate {
            member: member_id(sub_matches, "member")?,
            project: project_id(sub_matches, "project")?,
        }),
        "disassociate" => Ok(Command::Disassociate {
            member: member_id(sub_matches, "member")?,
            project: project_id(sub_matches, "project")?,
        }),
        "distribute" => Ok(Command::DistributeFunding {
            project: project_id(sub_matches, "project")?,
        }),
        other => Err(format!("Unknown command: {}", other)),
    }
}

// =========================================================================
// Argument helpers
// =========================================================================

fn raw_id(matches: &ArgMatches, name: &str) -> Result<u64, String> {
    matches
        .get_one::<u64>(name)
        .copied()
        .ok_or_else(|| format!("Missing <{}>", name))
}

fn member_id(matches: &ArgMatches, name: &str) -> Result<MemberId, String> {
    raw_id(matches, name).map(MemberId::new)
}

fn project_id(matches: &ArgMatches, name: &str) -> Result<ProjectId, String> {
    raw_id(matches, name).map(ProjectId::new)
}

/// Variadic words joined back with single spaces.
fn words(matches: &ArgMatches, name: &str) -> Result<String, String> {
    let parts: Vec<&str> = matches
        .get_many::<String>(name)
        .ok_or_else(|| format!("Missing <{}>", name))?
        .map(String::as_str)
        .collect();
    Ok(parts.join(" "))
}

fn funding(matches: &ArgMatches) -> Result<f64, String> {
    matches
        .get_one::<f64>("funding")
        .copied()
        .ok_or_else(|| "Missing <funding>".to_string())
}

// =========================================================================
// Members
// =========================================================================

fn parse_member(matches: &ArgMatches) -> Result<Command, String> {
    let (sub, m) = matches
        .subcommand()
        .ok_or_else(|| "Missing member subcommand".to_string())?;

    match sub {
        "add" => {
            let kind_text = m
                .get_one::<String>("kind")
                .ok_or_else(|| "Missing <kind>".to_string())?;
            let kind = MemberKind::from_str(kind_text).map_err(|e| e.reason().to_string())?;
            Ok(Command::AddMember {
                kind,
                name: words(m, "name")?,
            })
        }
        "list" => Ok(Command::ListMembers),
        "show" => Ok(Command::GetMember {
            member: member_id(m, "id")?,
        }),
        "rename" => Ok(Command::RenameMember {
            member: member_id(m, "id")?,
            name: words(m, "name")?,
        }),
        "remove" => Ok(Command::RemoveMember {
            member: member_id(m, "id")?,
        }),
        other => Err(format!("Unknown member subcommand: {}", other)),
    }
}

// =========================================================================
// Projects
// =========================================================================

fn parse_project(matches: &ArgMatches) -> Result<Command, String> {
    let (sub, m) = matches
        .subcommand()
        .ok_or_else(|| "Missing project subcommand".to_string())?;

    match sub {
        "add" => Ok(Command::AddProject {
            title: m
                .get_one::<String>("title")
                .cloned()
                .ok_or_else(|| "Missing <title>".to_string())?,
            funding: funding(m)?,
        }),
        "list" => Ok(Command::ListProjects),
        "show" => Ok(Command::GetProject {
            project: project_id(m, "id")?,
        }),
        "title" => Ok(Command::SetProjectTitle {
            project: project_id(m, "id")?,
            title: words(m, "title")?,
        }),
        "funding" => Ok(Command::SetProjectFunding {
            project: project_id(m, "id")?,
            funding: funding(m)?,
        }),
        "remove" => Ok(Command::RemoveProject {
            project: project_id(m, "id")?,
        }),
        other => Err(format!("Unknown project subcommand: {}", other)),
    }
}
