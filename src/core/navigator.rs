// src/core/navigator.rs

//! The interactive loop: show a level, read a number, descend, run or go back.
//!
//! Each nested directory is one recursive call of [`Navigator::menu_loop`], so going
//! back simply returns to the caller's loop, which renders its level again.

use crate::{
    cli::{
        prompt::{PromptError, Prompter},
        render::{self, MenuRow},
    },
    core::{arguments, color::Palette, menu, metadata, paths},
    models::{LaunchOutcome, MenuEntry},
    system::executor::{self, ExecutionError, Launcher},
};
use std::{
    io::{self, Write},
    path::{MAIN_SEPARATOR, Path},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error("Could not write to the terminal: {0}")]
    Output(#[from] io::Error),
}

/// What a line typed at the `>` prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Selection {
    /// Empty line or `0`.
    Leave,
    NotANumber,
    OutOfRange,
    /// Zero-based position in the rendered list.
    Entry(usize),
}

pub(crate) fn parse_selection(input: &str, count: usize) -> Selection {
    let input = input.trim();
    if input.is_empty() {
        return Selection::Leave;
    }
    if !input.chars().all(|c| c.is_ascii_digit()) {
        return Selection::NotANumber;
    }
    // All digits but too large for usize is still just a number nobody listed.
    match input.parse::<usize>() {
        Ok(0) => Selection::Leave,
        Ok(n) if n <= count => Selection::Entry(n - 1),
        _ => Selection::OutOfRange,
    }
}

/// Drives the menu over a prompter, a launcher and an output stream.
#[derive(Debug)]
pub struct Navigator<P, L, W> {
    prompter: P,
    launcher: L,
    out: W,
    palette: Palette,
    show_banner: bool,
}

impl<P: Prompter, L: Launcher, W: Write> Navigator<P, L, W> {
    /// A navigator that writes to `out` and shows the banner.
    pub fn new(prompter: P, launcher: L, out: W, palette: Palette) -> Self {
        Self {
            prompter,
            launcher,
            out,
            palette,
            show_banner: true,
        }
    }

    /// Turns the banner above the top-level menu on or off.
    pub fn with_banner(mut self, show_banner: bool) -> Self {
        self.show_banner = show_banner;
        self
    }

    /// Runs the menu rooted at `root` until the user leaves it or interrupts.
    ///
    /// Both endings print the farewell and return `Ok`. Only a broken terminal is an error.
    pub fn run(&mut self, root: &Path) -> Result<(), NavigationError> {
        match self.menu_loop(root, true) {
            Ok(()) => {}
            Err(NavigationError::Prompt(PromptError::Interrupted)) => {
                log::debug!("Interrupted at a prompt, leaving.");
                writeln!(self.out)?;
            }
            Err(e) => return Err(e),
        }
        render::render_farewell(&mut self.out, self.palette)?;
        self.out.flush()?;
        Ok(())
    }

    fn menu_loop(&mut self, dir: &Path, is_top_level: bool) -> Result<(), NavigationError> {
        log::debug!("Entering menu '{}' (top level: {})", dir.display(), is_top_level);
        if is_top_level && self.show_banner {
            render::render_banner(&mut self.out, self.palette)?;
        }

        loop {
            // 1. List the level again; scripts may have changed since the last render.
            let entries = self.enumerate(dir)?;
            let rows: Vec<MenuRow> = entries.iter().map(row_for).collect();
            render::render_menu(&mut self.out, &rows, is_top_level, self.palette)?;
            self.out.flush()?;

            // 2. Read and dispatch one selection.
            let input = self.prompter.read_selection()?;
            match parse_selection(&input, entries.len()) {
                Selection::Leave => return Ok(()),
                Selection::NotANumber => self.notice(t!("menu.error.not_a_number"))?,
                Selection::OutOfRange => self.notice(t!("menu.error.invalid_choice"))?,
                Selection::Entry(index) => {
                    let Some(entry) = entries.get(index) else {
                        self.notice(t!("menu.error.invalid_choice"))?;
                        continue;
                    };
                    if entry.is_directory() {
                        self.menu_loop(&entry.path, false)?;
                    } else {
                        self.run_script(entry)?;
                    }
                }
            }
        }
    }

    /// Fresh listing of `dir`. An unreadable directory shows as empty, with a notice.
    fn enumerate(&mut self, dir: &Path) -> Result<Vec<MenuEntry>, NavigationError> {
        match menu::list_entries(dir) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                let message = format!(
                    t!("menu.error.unreadable_dir"),
                    path = paths::display_path(dir),
                    error = e
                );
                self.notice(&message)?;
                Ok(Vec::new())
            }
        }
    }

    fn run_script(&mut self, entry: &MenuEntry) -> Result<(), NavigationError> {
        // 1. Markers and argument values. A ^C here runs nothing.
        let script = metadata::read_metadata(&entry.path);
        let args = arguments::collect_for_specs(&script.argument_specs, &mut self.prompter)?;
        self.out.flush()?;

        // 2. Launch and report how it ended. Exit codes are not judged.

        match executor::execute(
            &entry.path,
            &args,
            script.requires_elevation,
            &mut self.launcher,
        ) {
            Ok(LaunchOutcome::Completed { code }) => {
                log::debug!("'{}' finished with code {:?}", entry.name, code);
            }
            Ok(LaunchOutcome::Interrupted) => {
                writeln!(self.out)?;
                self.notice(t!("menu.notice.interrupted"))?;
            }
            Err(ExecutionError::Spawn { command, source })
            | Err(ExecutionError::Wait { command, source }) => {
                let message = format!(
                    t!("menu.notice.launch_failed"),
                    command = command,
                    error = source
                );
                self.notice(&message)?;
            }
        }

        // 3. Let the user read the script's output before the menu comes back.
        self.out.flush()?;
        self.prompter.acknowledge()?;
        Ok(())
    }

    fn notice(&mut self, message: &str) -> Result<(), NavigationError> {
        render::render_notice(&mut self.out, message, self.palette)?;
        Ok(())
    }
}

fn row_for(entry: &MenuEntry) -> MenuRow {
    if entry.is_directory() {
        MenuRow {
            text: format!("{}{}", entry.name, MAIN_SEPARATOR),
            is_directory: true,
        }
    } else {
        MenuRow {
            text: metadata::get_label(&entry.path),
            is_directory: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cli::prompt::testing::ScriptedPrompter, models::Invocation};

    #[derive(Debug)]
    struct RecordingLauncher {
        invocations: Vec<Invocation>,
        outcome: Option<LaunchOutcome>,
    }

    impl RecordingLauncher {
        fn completing() -> Self {
            Self {
                invocations: Vec::new(),
                outcome: Some(LaunchOutcome::Completed { code: Some(0) }),
            }
        }

        fn with_outcome(outcome: Option<LaunchOutcome>) -> Self {
            Self {
                invocations: Vec::new(),
                outcome,
            }
        }
    }

    impl Launcher for RecordingLauncher {
        fn launch(&mut self, invocation: &Invocation) -> Result<LaunchOutcome, ExecutionError> {
            self.invocations.push(invocation.clone());
            self.outcome.ok_or_else(|| ExecutionError::Spawn {
                command: invocation.display(),
                source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            })
        }
    }

    fn navigate(
        root: &Path,
        answers: &[Option<&str>],
        launcher: RecordingLauncher,
    ) -> (String, ScriptedPrompter, RecordingLauncher) {
        let mut navigator = Navigator::new(
            ScriptedPrompter::new(answers),
            launcher,
            Vec::new(),
            Palette::plain(),
        )
        .with_banner(false);
        navigator.run(root).unwrap();
        let Navigator {
            prompter,
            launcher,
            out,
            ..
        } = navigator;
        (String::from_utf8(out).unwrap(), prompter, launcher)
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("", 3), Selection::Leave);
        assert_eq!(parse_selection("  ", 3), Selection::Leave);
        assert_eq!(parse_selection("0", 3), Selection::Leave);
        assert_eq!(parse_selection("abc", 3), Selection::NotANumber);
        assert_eq!(parse_selection("-1", 3), Selection::NotANumber);
        assert_eq!(parse_selection("1.5", 3), Selection::NotANumber);
        assert_eq!(parse_selection("1", 3), Selection::Entry(0));
        assert_eq!(parse_selection(" 3 ", 3), Selection::Entry(2));
        assert_eq!(parse_selection("4", 3), Selection::OutOfRange);
        assert_eq!(parse_selection("99", 3), Selection::OutOfRange);
        assert_eq!(
            parse_selection("99999999999999999999999999", 3),
            Selection::OutOfRange
        );
    }

    #[cfg(unix)]
    mod filesystem {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::{TempDir, tempdir};

        fn executable(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
            let path = dir.join(name);
            fs::write(&path, content).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        /// `backup.sh` (label, elevation, one argument) plus `tools/`, listed in that order.
        fn backup_tree() -> (TempDir, std::path::PathBuf) {
            let dir = tempdir().unwrap();
            fs::create_dir(dir.path().join("tools")).unwrap();
            let script = executable(
                dir.path(),
                "backup.sh",
                "#!/bin/sh\n# LABEL:Run Backup\n# SUDO:true\n# ARG: dest \"Destination\" \"/tmp\"\n",
            );
            (dir, script)
        }

        #[test]
        fn test_backup_scenario() {
            let (dir, script) = backup_tree();
            let (output, prompter, launcher) = navigate(
                dir.path(),
                &[Some("1"), Some(""), Some(""), Some("0")],
                RecordingLauncher::completing(),
            );

            assert!(output.starts_with("\n  [1]  Run Backup\n  [2]  tools/\n\n  [0]  Exit\n"));
            assert_eq!(
                prompter.argument_prompts,
                vec![("Destination".to_string(), "/tmp".to_string())]
            );
            assert_eq!(prompter.acknowledgements, 1);
            assert_eq!(launcher.invocations.len(), 1);
            assert_eq!(
                launcher.invocations[0].display(),
                format!("sudo -E {} /tmp", script.display())
            );
            assert!(output.ends_with("  Goodbye.\n"));
        }

        #[test]
        fn test_empty_line_leaves_the_top_level() {
            let (dir, _) = backup_tree();
            let (output, prompter, launcher) =
                navigate(dir.path(), &[Some("")], RecordingLauncher::completing());

            assert_eq!(prompter.selections_read, 1);
            assert!(launcher.invocations.is_empty());
            assert!(output.ends_with("  [0]  Exit\n  Goodbye.\n"));
        }

        #[test]
        fn test_zero_in_a_submenu_goes_back_one_level() {
            let (dir, _) = backup_tree();
            let (output, prompter, _) = navigate(
                dir.path(),
                &[Some("2"), Some("0"), Some("")],
                RecordingLauncher::completing(),
            );

            assert_eq!(prompter.selections_read, 3);
            assert_eq!(output.matches("[0]  Back").count(), 1);
            assert_eq!(output.matches("[0]  Exit").count(), 2);
            assert_eq!(output.matches("Goodbye.").count(), 1);
        }

        #[test]
        fn test_empty_line_in_a_submenu_goes_back_one_level() {
            let (dir, _) = backup_tree();
            fs::create_dir(dir.path().join("tools").join("deeper")).unwrap();
            let (output, prompter, _) = navigate(
                dir.path(),
                &[Some("2"), Some("1"), Some(""), Some(""), Some("0")],
                RecordingLauncher::completing(),
            );

            assert_eq!(prompter.remaining(), 0);
            assert_eq!(output.matches("[0]  Back").count(), 3);
            assert_eq!(output.matches("[0]  Exit").count(), 2);
        }

        #[test]
        fn test_text_input_keeps_the_same_level() {
            let (dir, _) = backup_tree();
            let (output, _, launcher) = navigate(
                dir.path(),
                &[Some("abc"), Some("0")],
                RecordingLauncher::completing(),
            );

            let (first, second) = output.split_once("  * Please enter a number\n").unwrap();
            assert_eq!(first, second.trim_end_matches("  Goodbye.\n"));
            assert!(launcher.invocations.is_empty());
        }

        #[test]
        fn test_out_of_range_reports_and_rerenders() {
            let dir = tempdir().unwrap();
            for name in ["a.sh", "b.sh", "c.sh"] {
                executable(dir.path(), name, "#!/bin/sh\n");
            }
            let (output, _, launcher) = navigate(
                dir.path(),
                &[Some("99"), Some("0")],
                RecordingLauncher::completing(),
            );

            assert!(output.contains("  * Invalid choice\n"));
            assert_eq!(output.matches("  [3]  c.sh\n").count(), 2);
            assert!(!output.contains("[4]"));
            assert!(launcher.invocations.is_empty());
        }

        #[test]
        fn test_interrupt_in_a_submenu_ends_the_session() {
            let (dir, _) = backup_tree();
            let (output, prompter, _) =
                navigate(dir.path(), &[Some("2"), None], RecordingLauncher::completing());

            assert_eq!(prompter.selections_read, 2);
            assert!(output.ends_with("\n\n  Goodbye.\n"));
            assert_eq!(output.matches("[0]  Exit").count(), 1);
        }

        #[test]
        fn test_interrupt_during_argument_prompt_runs_nothing() {
            let (dir, _) = backup_tree();
            let (output, prompter, launcher) =
                navigate(dir.path(), &[Some("1"), None], RecordingLauncher::completing());

            assert_eq!(prompter.argument_prompts.len(), 1);
            assert!(launcher.invocations.is_empty());
            assert!(output.ends_with("Goodbye.\n"));
        }

        #[test]
        fn test_script_without_arguments_runs_directly() {
            let dir = tempdir().unwrap();
            let script = executable(dir.path(), "hello.sh", "#!/bin/sh\necho hi\n");
            let (output, prompter, launcher) = navigate(
                dir.path(),
                &[Some("1"), Some(""), Some("")],
                RecordingLauncher::completing(),
            );

            assert!(output.contains("  [1]  hello.sh\n"));
            assert!(prompter.argument_prompts.is_empty());
            assert_eq!(launcher.invocations.len(), 1);
            assert_eq!(launcher.invocations[0].program, script.as_os_str());
            assert!(launcher.invocations[0].args.is_empty());
        }

        #[test]
        fn test_interrupted_script_is_reported_and_menu_continues() {
            let (dir, _) = backup_tree();
            let (output, prompter, _) = navigate(
                dir.path(),
                &[Some("1"), Some("/srv"), Some(""), Some("0")],
                RecordingLauncher::with_outcome(Some(LaunchOutcome::Interrupted)),
            );

            assert!(output.contains("  * Script interrupted\n"));
            assert_eq!(prompter.acknowledgements, 1);
            assert_eq!(output.matches("[1]  Run Backup").count(), 2);
        }

        #[test]
        fn test_spawn_failure_is_a_notice() {
            let (dir, _) = backup_tree();
            let (output, _, launcher) = navigate(
                dir.path(),
                &[Some("1"), Some(""), Some(""), Some("0")],
                RecordingLauncher::with_outcome(None),
            );

            assert_eq!(launcher.invocations.len(), 1);
            assert!(output.contains("  * Could not launch 'sudo -E "));
            assert!(output.ends_with("Goodbye.\n"));
        }

        #[test]
        fn test_returning_from_a_submenu_rerenders_the_parent() {
            let dir = tempdir().unwrap();
            fs::create_dir(dir.path().join("sub")).unwrap();
            let (output, _, _) = navigate(
                dir.path(),
                &[Some("1"), Some("0"), Some("0")],
                RecordingLauncher::completing(),
            );
            assert_eq!(output.matches("  [1]  sub/\n").count(), 2);
        }

        #[test]
        fn test_unreadable_root_shows_an_empty_menu() {
            let dir = tempdir().unwrap();
            let missing = dir.path().join("gone");
            let (output, _, _) =
                navigate(&missing, &[Some("1"), Some("")], RecordingLauncher::completing());

            assert!(output.contains("  * Could not read '"));
            assert!(output.contains("  * Invalid choice\n"));
        }
    }
}
