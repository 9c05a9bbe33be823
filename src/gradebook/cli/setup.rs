use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "gradebook", bin_name = "gradebook", version)]
#[command(about = "Interactive student roster and grade book", long_about = None)]
pub struct Cli {
    /// Roster file to use instead of the configured one
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    ViewAll,
    AddGrade,
    Statistics,
    Quit,
}

impl MenuChoice {
    /// Returns all choices in display order
    pub fn all() -> &'static [MenuChoice] {
        &[
            MenuChoice::Add,
            MenuChoice::Remove,
            MenuChoice::ViewAll,
            MenuChoice::AddGrade,
            MenuChoice::Statistics,
            MenuChoice::Quit,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            MenuChoice::Add => "1",
            MenuChoice::Remove => "2",
            MenuChoice::ViewAll => "3",
            MenuChoice::AddGrade => "4",
            MenuChoice::Statistics => "5",
            MenuChoice::Quit => "6",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add a Student",
            MenuChoice::Remove => "Remove a Student",
            MenuChoice::ViewAll => "View All Students",
            MenuChoice::AddGrade => "Add Grade to Student",
            MenuChoice::Statistics => "View Statistics",
            MenuChoice::Quit => "Quit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        MenuChoice::all()
            .iter()
            .find(|choice| choice.key() == s)
            .copied()
            .ok_or_else(|| format!("Invalid option: {}", s))
    }
}

/// The menu text shown before every action.
pub fn menu_text() -> String {
    let rule = "-".repeat(23);
    let mut output = String::new();
    output.push_str("\nGradebook\n");
    output.push_str(&format!("{rule}\n"));
    for choice in MenuChoice::all() {
        output.push_str(&format!("{} - {}\n", choice.key(), choice.label()));
    }
    output.push_str(&format!("{rule}\n"));
    output.push_str("Choose an option: ");
    output
}
