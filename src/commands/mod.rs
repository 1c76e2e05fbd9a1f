pub mod create;
pub mod dry_run;
pub mod info;

use crate::cli::{Cli, PlanArgs};
use crate::config::Settings;
use crate::error::Result;
use crate::pattern::{build_matrix, plan, Plan};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

pub fn run(cli: Cli, settings: &Settings) -> Result<()> {
    match cli {
        Cli::Create {
            word,
            args,
            yes,
            seed,
        } => create::create_repository(&word, &args, yes, seed, settings),
        Cli::DryRun {
            word,
            args,
            json,
            png,
            seed,
        } => dry_run::dry_run(&word, &args, json.as_deref(), png.as_deref(), seed, settings),
        Cli::NextAnchorWeekday => info::next_anchor_weekday(),
        Cli::CheckConfig => info::check_config(settings),
    }
}

/// Seeded when a seed is given on the command line or in the environment.
pub fn make_rng(seed: Option<u64>, settings: &Settings) -> ChaCha8Rng {
    match seed.or(settings.seed) {
        Some(seed) => {
            debug!(seed, "using seeded rng");
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Matrix first so glyph and width errors surface before any date math.
pub fn build_plan(args: &PlanArgs, rng: &mut ChaCha8Rng) -> Result<Plan> {
    let matrix = build_matrix(&args.word)?;
    let anchor = args.anchor.resolve(matrix.word());
    plan(&matrix, anchor, args.intensity, rng)
}
