//! Clap command tree definition.
//!
//! Builds the `clap::Command` tree used by shell mode (directly) and pipe
//! mode (via `try_get_matches_from` on a multicall root).

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("uniag")
        .about("Registry of research-unit members and funded projects")
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Config file (default: ./uniag.toml when present)")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .conflicts_with("raw")
                .global(true),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Raw output mode (tab-separated fields, no labels)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("empty")
                .long("empty")
                .help("Start with an empty registry instead of the sample data")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(build_member())
        .subcommand(build_project())
        .subcommand(build_associate())
        .subcommand(build_disassociate())
        .subcommand(build_distribute())
}

/// Build a command tree for pipe mode (no global flags).
pub fn build_repl_cmd() -> Command {
    Command::new("repl")
        .multicall(true)
        .subcommand_required(true)
        .subcommand(build_member())
        .subcommand(build_project())
        .subcommand(build_associate())
        .subcommand(build_disassociate())
        .subcommand(build_distribute())
}

fn id_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .required(true)
        .value_parser(value_parser!(u64))
        .help(help)
}

fn words_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .required(true)
        .num_args(1..)
        .help(help)
}

fn funding_arg() -> Arg {
    Arg::new("funding")
        .required(true)
        .allow_negative_numbers(true)
        .value_parser(value_parser!(f64))
        .help("Funding amount")
}

// =========================================================================
// Members
// =========================================================================

fn build_member() -> Command {
    Command::new("member")
        .about("Member operations")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Register a member")
                .arg(
                    Arg::new("kind")
                        .required(true)
                        .help("integrated | collaborator | visiting (or 1 | 2 | 3)"),
                )
                .arg(words_arg("name", "Member name")),
        )
        .subcommand(Command::new("list").about("List all members"))
        .subcommand(
            Command::new("show")
                .about("Show one member")
                .arg(id_arg("id", "Member id")),
        )
        .subcommand(
            Command::new("rename")
                .about("Change a member's name")
                .arg(id_arg("id", "Member id"))
                .arg(words_arg("name", "New name")),
        )
        .subcommand(
            Command::new("remove")
                .about("Remove a member and its associations")
                .arg(id_arg("id", "Member id")),
        )
}

// =========================================================================
// Projects
// =========================================================================

fn build_project() -> Command {
    Command::new("project")
        .about("Project operations")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Register a project")
                .arg(Arg::new("title").required(true).help("Project title (quote it)"))
                .arg(funding_arg()),
        )
        .subcommand(Command::new("list").about("List all projects"))
        .subcommand(
            Command::new("show")
                .about("Show a project with its participants")
                .arg(id_arg("id", "Project id")),
        )
        .subcommand(
            Command::new("title")
                .about("Change a project's title")
                .arg(id_arg("id", "Project id"))
                .arg(words_arg("title", "New title")),
        )
        .subcommand(
            Command::new("funding")
                .about("Change a project's funding")
                .arg(id_arg("id", "Project id"))
                .arg(funding_arg()),
        )
        .subcommand(
            Command::new("remove")
                .about("Remove a project and its associations")
                .arg(id_arg("id", "Project id")),
        )
}

// =========================================================================
// Associations and funding
// =========================================================================

fn build_associate() -> Command {
    Command::new("associate")
        .about("Link a member to a project")
        .arg(id_arg("member", "Member id"))
        .arg(id_arg("project", "Project id"))
}

fn build_disassociate() -> Command {
    Command::new("disassociate")
        .about("Unlink a member from a project")
        .arg(id_arg("member", "Member id"))
        .arg(id_arg("project", "Project id"))
}

fn build_distribute() -> Command {
    Command::new("distribute")
        .about("Split a project's funding among its integrated researchers")
        .arg(id_arg("project", "Project id"))
}
