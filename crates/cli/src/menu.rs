//! Interactive numeric menu with rustyline.
//!
//! Options 1-11 mirror the registry operations; 0 exits. Every action goes
//! through the [`Executor`] so the menu and pipe mode share one code path.
//! Input comes from a [`Prompt`] so sessions can be scripted in tests.

use std::io::{self, Write};

use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};
use uniag_executor::{Command, Distribution, Executor, MemberId, MemberKind, Output, ProjectId};

use crate::format::{Formatter, OutputMode};

/// Source of user answers.
pub trait Prompt {
    /// Next line of input, or `None` once input is exhausted.
    fn ask(&mut self, prompt: &str) -> Option<String>;
}

/// Line editor on the terminal.
pub struct EditorPrompt {
    editor: DefaultEditor,
}

impl EditorPrompt {
    pub fn new() -> rustyline::Result<Self> {
        let config = Config::builder().history_ignore_space(true).build();
        Ok(Self {
            editor: DefaultEditor::with_config(config)?,
        })
    }
}

impl Prompt for EditorPrompt {
    fn ask(&mut self, prompt: &str) -> Option<String> {
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => return Some(line),
                // Ctrl-C: ask again
                Err(ReadlineError::Interrupted) => continue,
                Err(_) => return None,
            }
        }
    }
}

/// Run the menu on the terminal until the user picks 0 or closes input.
///
/// The menu always prints human-readable text, whatever output mode the
/// rest of the shell uses.
pub fn run_menu(executor: &Executor, currency: &str) -> anyhow::Result<()> {
    let mut prompt = EditorPrompt::new()?;
    let fmt = menu_formatter(currency);
    let stdout = io::stdout();
    run_session(&mut prompt, &mut stdout.lock(), executor, &fmt)?;
    Ok(())
}

fn menu_formatter(currency: &str) -> Formatter {
    Formatter::new(OutputMode::Human, currency)
}

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Exit,
    Action(u8),
    Unknown,
}

fn parse_choice(line: &str) -> Option<Choice> {
    let n: i64 = line.trim().parse().ok()?;
    Some(match n {
        0 => Choice::Exit,
        1..=11 => Choice::Action(n as u8),
        _ => Choice::Unknown,
    })
}

/// Menu loop over any prompt and writer.
pub fn run_session<P: Prompt, W: Write>(
    prompt: &mut P,
    out: &mut W,
    executor: &Executor,
    fmt: &Formatter,
) -> io::Result<()> {
    writeln!(out, "Welcome to the UNIAG management system!")?;
    loop {
        print_menu(out)?;
        out.flush()?;
        let Some(line) = prompt.ask("Choose an option: ") else {
            break;
        };
        match parse_choice(&line) {
            None => {
                writeln!(out, "Error: invalid input. Please enter a number.")?;
                continue;
            }
            Some(Choice::Exit) => {
                writeln!(out, "\nLeaving the system. Goodbye!")?;
                break;
            }
            Some(Choice::Unknown) => writeln!(out, "Invalid option. Try again.")?,
            Some(Choice::Action(n)) => {
                let mut menu = Menu {
                    prompt: &mut *prompt,
                    out: &mut *out,
                    executor,
                    fmt,
                };
                menu.dispatch(n)?;
            }
        }
        if prompt
            .ask("\nPress ENTER to return to the menu...")
            .is_none()
        {
            break;
        }
    }
    Ok(())
}

fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n===== MAIN MENU =====")?;
    writeln!(out, "--- Create ---")?;
    writeln!(out, "1. Register new member")?;
    writeln!(out, "2. Register new project")?;
    writeln!(out, "3. Associate member with project")?;
    writeln!(out, "4. Distribute project funding")?;
    writeln!(out, "\n--- Read ---")?;
    writeln!(out, "5. List all members")?;
    writeln!(out, "6. List all projects")?;
    writeln!(out, "7. Show project details")?;
    writeln!(out, "\n--- Update ---")?;
    writeln!(out, "8. Rename member")?;
    writeln!(out, "9. Edit project")?;
    writeln!(out, "\n--- Delete ---")?;
    writeln!(out, "10. Remove member")?;
    writeln!(out, "11. Remove project")?;
    writeln!(out, "\n---------------------")?;
    writeln!(out, "0. Exit")
}

struct Menu<'a, P, W> {
    prompt: &'a mut P,
    out: &'a mut W,
    executor: &'a Executor,
    fmt: &'a Formatter,
}

impl<P: Prompt, W: Write> Menu<'_, P, W> {
    fn dispatch(&mut self, option: u8) -> io::Result<()> {
        match option {
            1 => self.register_member(),
            2 => self.register_project(),
            3 => self.associate(),
            4 => self.distribute(),
            5 => self.list_members(),
            6 => self.list_projects(),
            7 => self.show_project(),
            8 => self.rename_member(),
            9 => self.edit_project(),
            10 => self.remove_member(),
            11 => self.remove_project(),
            _ => writeln!(self.out, "Invalid option. Try again."),
        }
    }

    fn ask(&mut self, text: &str) -> String {
        self.out.flush().ok();
        self.prompt.ask(text).unwrap_or_default()
    }

    fn ask_id(&mut self, text: &str) -> io::Result<Option<u64>> {
        let answer = self.ask(text);
        match answer.trim().parse::<u64>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(self.out, "Error: invalid id.")?;
                Ok(None)
            }
        }
    }

    fn run(&mut self, command: Command) -> io::Result<Option<Output>> {
        match self.executor.execute(command) {
            Ok(output) => Ok(Some(output)),
            Err(e) => {
                writeln!(self.out, "{}", self.fmt.error(&e))?;
                Ok(None)
            }
        }
    }

    fn heading(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "\n--- {} ---", title)
    }

    // ==================== Create ====================

    fn register_member(&mut self) -> io::Result<()> {
        self.heading("1. Register new member")?;
        let name = self.ask("Member name: ");
        let kind_text = self.ask("Type? (1-Integrated, 2-Collaborator, 3-Visiting): ");
        let Ok(kind) = kind_text.parse::<MemberKind>() else {
            return writeln!(self.out, "Invalid member type.");
        };
        if let Some(Output::Member(m)) = self.run(Command::AddMember { kind, name })? {
            writeln!(self.out, "Member registered successfully! Generated ID: {}", m.id)?;
        }
        Ok(())
    }

    fn register_project(&mut self) -> io::Result<()> {
        self.heading("2. Register new project")?;
        let title = self.ask("Project title: ");
        let funding_text = self.ask("Project funding: ");
        let Some(funding) = parse_amount(&funding_text) else {
            return writeln!(self.out, "Invalid funding value.");
        };
        if let Some(Output::Project(p)) = self.run(Command::AddProject { title, funding })? {
            writeln!(self.out, "Project registered successfully! Generated ID: {}", p.id)?;
        }
        Ok(())
    }

    fn associate(&mut self) -> io::Result<()> {
        self.heading("3. Associate member with project")?;
        let Some(member) = self.ask_id("Member ID: ")? else {
            return Ok(());
        };
        let Some(project) = self.ask_id("Project ID: ")? else {
            return Ok(());
        };
        let command = Command::Associate {
            member: MemberId::new(member),
            project: ProjectId::new(project),
        };
        match self.run(command)? {
            Some(Output::Bool(true)) => writeln!(self.out, "Association completed successfully!"),
            _ => writeln!(
                self.out,
                "Association failed. Check that both IDs exist and are not already linked."
            ),
        }
    }

    fn distribute(&mut self) -> io::Result<()> {
        self.heading("4. Distribute project funding")?;
        let Some(project) = self.ask_id("Project ID: ")? else {
            return Ok(());
        };
        let command = Command::DistributeFunding {
            project: ProjectId::new(project),
        };
        match self.run(command)? {
            Some(Output::Distribution(Some(outcome))) => {
                let line = self.fmt.distribution(&outcome);
                writeln!(self.out, "{}", line)?;
                if let Distribution::Distributed { .. } = outcome {
                    writeln!(self.out, "Balances updated.")?;
                }
                Ok(())
            }
            _ => writeln!(self.out, "Project with ID {} not found.", project),
        }
    }

    // ==================== Read ====================

    fn list_members(&mut self) -> io::Result<()> {
        self.heading("Members")?;
        match self.run(Command::ListMembers)? {
            Some(Output::Members(members)) if members.is_empty() => {
                writeln!(self.out, "No members registered.")
            }
            Some(Output::Members(members)) => {
                for m in &members {
                    writeln!(self.out, "{}", self.fmt.member_line(m))?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn list_projects(&mut self) -> io::Result<()> {
        self.heading("Projects")?;
        match self.run(Command::ListProjects)? {
            Some(Output::Projects(projects)) if projects.is_empty() => {
                writeln!(self.out, "No projects registered.")
            }
            Some(Output::Projects(projects)) => {
                for p in &projects {
                    writeln!(self.out, "{}", self.fmt.project_line(p))?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn show_project(&mut self) -> io::Result<()> {
        self.heading("7. Show project details")?;
        let Some(project) = self.ask_id("Project ID: ")? else {
            return Ok(());
        };
        let command = Command::GetProject {
            project: ProjectId::new(project),
        };
        match self.run(command)? {
            Some(Output::MaybeProject(Some(detail))) => {
                writeln!(self.out, "{}", self.fmt.project_detail(&detail))
            }
            _ => writeln!(self.out, "Project with ID {} not found.", project),
        }
    }

    // ==================== Update ====================

    fn rename_member(&mut self) -> io::Result<()> {
        self.heading("8. Rename member")?;
        let Some(id) = self.ask_id("ID of the member to edit: ")? else {
            return Ok(());
        };
        let member = MemberId::new(id);
        if !matches!(
            self.run(Command::GetMember { member })?,
            Some(Output::MaybeMember(Some(_)))
        ) {
            return writeln!(self.out, "Member not found.");
        }
        let name = self.ask("New name: ");
        if let Some(Output::Bool(true)) = self.run(Command::RenameMember { member, name })? {
            writeln!(self.out, "Member name updated successfully.")?;
        }
        Ok(())
    }

    fn edit_project(&mut self) -> io::Result<()> {
        self.heading("9. Edit project")?;
        let Some(id) = self.ask_id("ID of the project to edit: ")? else {
            return Ok(());
        };
        let project = ProjectId::new(id);
        if !matches!(
            self.run(Command::GetProject { project })?,
            Some(Output::MaybeProject(Some(_)))
        ) {
            return writeln!(self.out, "Project not found.");
        }

        let mut changed = false;

        let title = self.ask("New title (leave blank to keep the current one): ");
        if !title.trim().is_empty() {
            changed |= matches!(
                self.run(Command::SetProjectTitle { project, title })?,
                Some(Output::Bool(true))
            );
        }

        let funding_text = self.ask("New funding (enter a negative value to keep the current one): ");
        match parse_amount(&funding_text) {
            Some(funding) if funding >= 0.0 => {
                changed |= matches!(
                    self.run(Command::SetProjectFunding { project, funding })?,
                    Some(Output::Bool(true))
                );
            }
            Some(_) => {}
            None => writeln!(self.out, "Invalid input. Funding was not changed.")?,
        }

        if changed {
            writeln!(self.out, "Project updated.")
        } else {
            writeln!(self.out, "Project left unchanged.")
        }
    }

    // ==================== Delete ====================

    fn remove_member(&mut self) -> io::Result<()> {
        self.heading("10. Remove member")?;
        let Some(id) = self.ask_id("ID of the member to remove: ")? else {
            return Ok(());
        };
        let command = Command::RemoveMember {
            member: MemberId::new(id),
        };
        match self.run(command)? {
            Some(Output::Bool(true)) => writeln!(
                self.out,
                "Member with ID {} and all of its associations were removed.",
                id
            ),
            _ => writeln!(self.out, "Removal failed. Member with ID {} not found.", id),
        }
    }

    fn remove_project(&mut self) -> io::Result<()> {
        self.heading("11. Remove project")?;
        let Some(id) = self.ask_id("ID of the project to remove: ")? else {
            return Ok(());
        };
        let command = Command::RemoveProject {
            project: ProjectId::new(id),
        };
        match self.run(command)? {
            Some(Output::Bool(true)) => writeln!(
                self.out,
                "Project with ID {} and all of its associations were removed.",
                id
            ),
            _ => writeln!(self.out, "Removal failed. Project with ID {} not found.", id),
        }
    }
}

/// Parse an amount typed by a person; accepts `1500.5` and `1500,5`.
fn parse_amount(text: &str) -> Option<f64> {
    text.trim().replace(',', ".").parse().ok()
}
