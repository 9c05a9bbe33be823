use super::print::{print_error, print_info, print_messages, print_statistics, print_students};
use super::prompt::Prompter;
use super::setup::{menu_text, Cli, MenuChoice};
use clap::Parser;
use gradebook::api::{CmdResult, GradebookApi};
use gradebook::config::GradebookConfig;
use gradebook::error::Result;
use gradebook::store::fs::FileStore;
use log::{debug, info};
use std::io::BufRead;
use std::path::PathBuf;

struct AppContext {
    api: GradebookApi<FileStore>,
}

/// Whether the menu loop keeps going after an action.
enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .init();

    let ctx = init_context(&cli)?;
    let mut prompter = Prompter::stdin();
    menu_loop(ctx, &mut prompter)
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut config = GradebookConfig::load(&cwd)?;
    if let Some(file) = &cli.file {
        config = config.with_store_file(file);
    }
    debug!("using store {}", config.store_file.display());

    let store = FileStore::new(&config.store_file);
    store.ensure_exists()?;

    Ok(AppContext {
        api: GradebookApi::with_config(store, &config),
    })
}

fn menu_loop<R: BufRead>(mut ctx: AppContext, prompter: &mut Prompter<R>) -> Result<()> {
    loop {
        let Some(input) = prompter.ask(&menu_text())? else {
            info!("input closed, leaving");
            println!();
            return Ok(());
        };

        let flow = match input.parse::<MenuChoice>() {
            Ok(MenuChoice::Add) => handle_add(&mut ctx, prompter)?,
            Ok(MenuChoice::Remove) => handle_remove(&mut ctx, prompter)?,
            Ok(MenuChoice::ViewAll) => handle_view(&ctx),
            Ok(MenuChoice::AddGrade) => handle_add_grade(&mut ctx, prompter)?,
            Ok(MenuChoice::Statistics) => handle_statistics(&ctx),
            Ok(MenuChoice::Quit) => {
                print_info("Thank you for using Gradebook!");
                Flow::Quit
            }
            Err(_) => {
                print_info("Invalid option. Please choose 1-6.");
                Flow::Continue
            }
        };

        if let Flow::Quit = flow {
            return Ok(());
        }
    }
}

/// Prints the outcome of an API call; failures are reported, not propagated.
fn report(result: Result<CmdResult>) {
    match result {
        Ok(result) => print_messages(&result.messages),
        Err(e) => print_error(&e),
    }
}

/// Prints the roster. Returns `false` (after telling the user) when there is
/// nothing to select from.
fn show_roster(ctx: &AppContext, empty_message: &str) -> bool {
    let listing = match ctx.api.list_students() {
        Ok(listing) => listing,
        Err(e) => {
            print_error(&e);
            return false;
        }
    };
    if listing.listed_students.is_empty() {
        print_info(empty_message);
        return false;
    }
    print_students(&listing.listed_students);
    print_messages(&listing.messages);
    true
}

fn handle_add<R: BufRead>(ctx: &mut AppContext, prompter: &mut Prompter<R>) -> Result<Flow> {
    let Some(name) = prompter.ask("Enter student name: ")? else {
        return Ok(Flow::Quit);
    };
    let Some(email) = prompter.ask("Enter student email: ")? else {
        return Ok(Flow::Quit);
    };
    report(ctx.api.add_student(&name, &email));
    Ok(Flow::Continue)
}

fn handle_remove<R: BufRead>(ctx: &mut AppContext, prompter: &mut Prompter<R>) -> Result<Flow> {
    if !show_roster(ctx, "No students to remove.") {
        return Ok(Flow::Continue);
    }
    let Some(choice) = prompter.ask("\nEnter the number of the student to remove: ")? else {
        return Ok(Flow::Quit);
    };
    report(ctx.api.remove_student(&choice));
    Ok(Flow::Continue)
}

fn handle_view(ctx: &AppContext) -> Flow {
    show_roster(ctx, "No students in the system.");
    Flow::Continue
}

fn handle_add_grade<R: BufRead>(
    ctx: &mut AppContext,
    prompter: &mut Prompter<R>,
) -> Result<Flow> {
    if !show_roster(ctx, "No students in the system.") {
        return Ok(Flow::Continue);
    }
    let Some(choice) = prompter.ask("\nEnter the number of the student: ")? else {
        return Ok(Flow::Quit);
    };
    let selected = match ctx.api.select_student(&choice) {
        Ok(selected) => selected,
        Err(e) => {
            print_error(&e);
            return Ok(Flow::Continue);
        }
    };

    let prompt = format!("Enter grade for {} (0-100): ", selected.student.name);
    let Some(grade) = prompter.ask(&prompt)? else {
        return Ok(Flow::Quit);
    };
    report(ctx.api.add_grade(&choice, &grade));
    Ok(Flow::Continue)
}

fn handle_statistics(ctx: &AppContext) -> Flow {
    match ctx.api.statistics() {
        Ok(result) => {
            if let Some(stats) = &result.statistics {
                print_statistics(stats);
            }
            print_messages(&result.messages);
        }
        Err(e) => print_error(&e),
    }
    Flow::Continue
}
