//! Pipe mode: read commands line by line and execute each.
//!
//! Lines are tokenised with `shlex` (so titles can be quoted) and parsed with
//! the multicall tree from [`build_repl_cmd`]. Blank lines and `#` comments
//! are skipped. A failing line is reported and the script continues.

use std::io::{self, BufRead, Write};

use uniag_executor::Executor;

use crate::commands::build_repl_cmd;
use crate::format::Formatter;
use crate::parse::{check_meta_command, matches_to_command, MetaCommand};

/// What happened to one input line.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Done,
    Failed,
    Quit,
}

/// Run in pipe mode on stdin. Returns the process exit code.
pub fn run_pipe(executor: &Executor, fmt: &Formatter) -> i32 {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    match run_script(
        stdin.lock(),
        executor,
        fmt,
        &mut stdout.lock(),
        &mut stderr.lock(),
    ) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("(error) {}", e);
            1
        }
    }
}

/// Execute every line of `input`. Returns 1 if any line failed, else 0.
pub fn run_script<R: BufRead, O: Write, E: Write>(
    input: R,
    executor: &Executor,
    fmt: &Formatter,
    out: &mut O,
    err: &mut E,
) -> io::Result<i32> {
    let mut exit_code = 0;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match run_line(trimmed, executor, fmt, out, err)? {
            Step::Done => {}
            Step::Failed => exit_code = 1,
            Step::Quit => break,
        }
    }

    Ok(exit_code)
}

fn run_line<O: Write, E: Write>(
    line: &str,
    executor: &Executor,
    fmt: &Formatter,
    out: &mut O,
    err: &mut E,
) -> io::Result<Step> {
    if let Some(meta) = check_meta_command(line) {
        return match meta {
            MetaCommand::Quit => Ok(Step::Quit),
            MetaCommand::Help => {
                writeln!(out, "{}", build_repl_cmd().render_help())?;
                Ok(Step::Done)
            }
        };
    }

    let tokens = match shlex::split(line) {
        Some(t) if !t.is_empty() => t,
        Some(_) => return Ok(Step::Done),
        None => {
            writeln!(err, "(error) Invalid quoting: {}", line)?;
            return Ok(Step::Failed);
        }
    };

    let matches = match build_repl_cmd().try_get_matches_from(tokens) {
        Ok(m) => m,
        Err(e) => {
            write!(err, "{}", e)?;
            return Ok(Step::Failed);
        }
    };

    let command = match matches_to_command(&matches) {
        Ok(c) => c,
        Err(e) => {
            writeln!(err, "(error) {}", e)?;
            return Ok(Step::Failed);
        }
    };

    if execute_and_print(executor, command, fmt, out, err)? {
        Ok(Step::Done)
    } else {
        Ok(Step::Failed)
    }
}

/// Execute one command and print its result. Returns true on success.
pub fn execute_and_print<O: Write, E: Write>(
    executor: &Executor,
    command: uniag_executor::Command,
    fmt: &Formatter,
    out: &mut O,
    err: &mut E,
) -> io::Result<bool> {
    match executor.execute(command) {
        Ok(output) => {
            let formatted = fmt.output(&output);
            if !formatted.is_empty() {
                writeln!(out, "{}", formatted)?;
            }
            Ok(true)
        }
        Err(e) => {
            writeln!(err, "{}", fmt.error(&e))?;
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::OutputMode;

    fn run(script: &str, mode: OutputMode) -> (i32, String, String) {
        let executor = Executor::default();
        let fmt = Formatter::new(mode, "€");
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run_script(script.as_bytes(), &executor, &fmt, &mut out, &mut err).unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_energy_scenario_script() {
        let script = "\
# two integrated researchers share a project
member add integrated Ana
member add integrated Rui
project add Energy 50000
associate 1 1
associate 2 1
distribute 1
member list
";
        let (code, out, err) = run(script, OutputMode::Human);
        assert_eq!(code, 0, "stderr: {}", err);
        assert!(out.contains(
            "Distributed 50 000,00 € among 2 integrated researcher(s): 25 000,00 € each"
        ));
        assert!(out.contains(
            "1) ID: 1 | Name: Ana | Type: Integrated Researcher | Balance: 25 000,00 €"
        ));
        assert!(out.contains(
            "2) ID: 2 | Name: Rui | Type: Integrated Researcher | Balance: 25 000,00 €"
        ));
    }

    #[test]
    fn test_failed_line_sets_exit_code_and_continues() {
        let script = "project add \"\" 10\nproject add Data 10\nproject list\n";
        let (code, out, err) = run(script, OutputMode::Raw);
        assert_eq!(code, 1);
        assert!(err.contains("invalid argument"));
        assert_eq!(out, "1\n1\tData\t10.00\t0\n");
    }

    #[test]
    fn test_unknown_command_is_failure() {
        let (code, _, err) = run("teleport 1\n", OutputMode::Human);
        assert_eq!(code, 1);
        assert!(!err.is_empty());
    }

    #[test]
    fn test_bad_quoting_is_failure() {
        let (code, _, err) = run("member add integrated \"Ana\n", OutputMode::Human);
        assert_eq!(code, 1);
        assert!(err.contains("Invalid quoting"));
    }

    #[test]
    fn test_quit_stops_script() {
        let script = "member add 2 Carlos\nquit\nmember add 2 Never\n";
        let (code, out, _) = run(script, OutputMode::Raw);
        assert_eq!(code, 0);
        assert_eq!(out, "1\n");
    }

    #[test]
    fn test_misses_are_not_failures() {
        let script = "member show 9\nassociate 1 1\ndistribute 3\n";
        let (code, out, _) = run(script, OutputMode::Human);
        assert_eq!(code, 0);
        assert_eq!(out, "(nil)\n(boolean) false\n(nil)\n");
    }

    #[test]
    fn test_json_mode_output_parses() {
        let (code, out, _) = run("project add Energy 1.5\n", OutputMode::Json);
        assert_eq!(code, 0);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["Project"]["title"], "Energy");
        assert_eq!(value["Project"]["funding"], 1.5);
    }
}
