use crate::cli::{parse_dry_run, AnchorSpec};
use crate::commands::{build_plan, make_rng};
use crate::config::Settings;
use crate::error::Result;
use crate::export::{save_heatmap, save_plan};
use crate::terminal::preview::render_plan;
use crate::utils;
use std::io;

pub fn dry_run(
    word: &str,
    args: &[String],
    json: Option<&str>,
    png: Option<&str>,
    seed: Option<u64>,
    settings: &Settings,
) -> Result<()> {
    let args = parse_dry_run(word, args)?;
    let mut rng = make_rng(seed, settings);
    let plan = build_plan(&args, &mut rng)?;

    if args.anchor == AnchorSpec::CurrentYear {
        println!(
            "Using automatic date: {} (pattern centred in the current year)",
            plan.anchor
        );
    }

    let stdout = io::stdout();
    render_plan(&mut stdout.lock(), &plan)?;

    if let Some(path) = json {
        save_plan(&plan, &utils::get_absolute_path(path)?)?;
    }
    if let Some(path) = png {
        save_heatmap(&plan, &utils::get_absolute_path(path)?)?;
    }

    println!("\nDry run completed. {} commits would be created.", plan.total());
    Ok(())
}
