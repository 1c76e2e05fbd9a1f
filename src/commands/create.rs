use crate::cli::{parse_create, AnchorSpec};
use crate::commands::{build_plan, make_rng};
use crate::config::Settings;
use crate::error::{GraphError, Result};
use crate::git::executor::ensure_clean_target;
use crate::git::{execute_plan, init_repository, resolve_identity, GitCli};
use crate::pattern::Plan;
use crate::terminal::preview::render_plan;
use crate::utils;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::warn;

pub fn create_repository(
    word: &str,
    args: &[String],
    yes: bool,
    seed: Option<u64>,
    settings: &Settings,
) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    create_with_input(word, args, yes, seed, settings, &mut input)
}

/// `answers` feeds the confirmation prompt.
fn create_with_input(
    word: &str,
    args: &[String],
    yes: bool,
    seed: Option<u64>,
    settings: &Settings,
    answers: &mut impl BufRead,
) -> Result<()> {
    let args = parse_create(word, args)?;
    let path = args
        .path
        .as_deref()
        .ok_or_else(|| GraphError::InvalidInput("create requires a path".to_string()))?;
    let root = utils::get_absolute_path(path)?;
    ensure_clean_target(&root)?;

    let mut rng = make_rng(seed, settings);
    let plan = build_plan(&args, &mut rng)?;

    println!("Creating repository for \"{}\" at {}", plan.word, root.display());
    if args.anchor == AnchorSpec::CurrentYear {
        println!(
            "Using automatic date: {} (pattern centred in the current year)",
            plan.anchor
        );
    }
    println!("Intensity: {} ({})", args.level, plan.intensity.name());
    println!("Preview of commits to be created:");
    println!("{}", "-".repeat(50));
    render_plan(&mut io::stdout().lock(), &plan)?;
    println!("{}", "-".repeat(50));
    println!("Total commits: {}", plan.total());
    println!("Repository path: {}", root.display());
    println!("\nIMPORTANT: pushing this repository will modify your contribution graph!");
    println!("{} commits will be added to your public profile", plan.total());
    println!("To undo: delete the repository or rewrite its history");
    println!("Consider a private repository while experimenting\n");

    if !yes && !confirm(answers, &mut io::stdout(), "Do you want to proceed? (y/N): ")? {
        println!("Operation cancelled.");
        return Ok(());
    }

    let git = GitCli::new(settings.git_program.clone());
    let identity = resolve_identity(&git, settings)?;
    if !identity.email_looks_valid() {
        warn!(email = %identity.email, "author email looks invalid; commits may not be attributed");
    }

    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = interrupted.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        println!("\nCtrl+C detected, stopping after the current commit...");
        flag.store(true, Ordering::SeqCst);
    }) {
        warn!(error = %e, "could not install Ctrl+C handler");
    }

    init_repository(&git, &root, &plan.word, &identity)?;

    let created = execute_plan(&git, &root, &plan, &interrupted, |done, total| {
        if done % 10 == 0 || done == total {
            print!(".");
            let _ = io::stdout().flush();
        }
    })?;
    println!();

    print_summary(&plan, created, &root);
    Ok(())
}

fn confirm(input: &mut impl BufRead, out: &mut impl Write, prompt: &str) -> io::Result<bool> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn print_summary(plan: &Plan, created: usize, root: &Path) {
    println!("\nRepository created successfully!");
    println!("Location: {}", root.display());
    println!("Commits: {} for \"{}\"", created, plan.word);
    println!("Intensity: {}", plan.intensity.name());
    println!("Date range: {} to {}", plan.anchor, plan.end_date);
    println!("\nNext steps:");
    println!("  cd {}", root.display());
    println!("  # Public repository (affects your contribution graph):");
    println!("  git remote add origin https://github.com/<you>/<repo>.git");
    println!("  git push -u origin main");
    println!("  # Private repository (safe experimentation):");
    println!("  gh repo create <repo> --private --source=. --push");
}
