use crate::git::command::commit_command_line;
use crate::pattern::Plan;
use crate::terminal::colors::{shade_color, shade_for_count};
use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetForegroundColor};
use std::io::{self, Write};

/// Commands shown in the dry-run details before the remainder is summarised.
pub const SAMPLE_COMMANDS: usize = 5;

const CELL: &str = "██";
const BLANK: &str = "  ";

/// Draw the planned graph, one cell per day, shaded by commit count.
pub fn render_grid<W: Write>(out: &mut W, plan: &Plan) -> io::Result<()> {
    let grid = plan.grid_counts();
    let rule = "─".repeat(plan.weeks * 2 + 2);

    writeln!(
        out,
        "\nVisual preview for \"{}\" with {}:",
        plan.word,
        plan.intensity.name()
    )?;
    writeln!(out, "{}", rule)?;
    for line in &grid {
        queue!(out, Print("│"))?;
        for count in line {
            if *count == 0 {
                queue!(out, Print(BLANK))?;
            } else {
                let color = shade_color(shade_for_count(*count)).to_ansi();
                queue!(out, SetForegroundColor(color), Print(CELL), ResetColor)?;
            }
        }
        queue!(out, Print("│\n"))?;
    }
    writeln!(out, "{}", rule)?;
    writeln!(out, "Dimensions: {} rows × {} columns", grid.len(), plan.weeks)?;
    out.flush()
}

pub fn render_legend<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nIntensity Legend:")?;
    for (shade, label) in [
        (1, "1-3 commits/day"),
        (2, "4-6 commits/day"),
        (3, "7-11 commits/day"),
        (4, "12+ commits/day"),
    ] {
        queue!(
            out,
            SetForegroundColor(shade_color(shade).to_ansi()),
            Print(CELL),
            ResetColor,
            Print(format!(" {}\n", label))
        )?;
    }
    out.flush()
}

/// Anchor, range, totals and the first few git commands.
pub fn render_details<W: Write>(out: &mut W, plan: &Plan) -> io::Result<()> {
    if plan.was_autocorrected() {
        writeln!(
            out,
            "Date auto-corrected: {} → {} (previous Sunday)",
            plan.requested_anchor, plan.anchor
        )?;
    }
    writeln!(out, "\nCommit Details:")?;
    writeln!(
        out,
        "Intensity level: {} ({})",
        plan.intensity.level(),
        plan.intensity.name()
    )?;
    writeln!(
        out,
        "Date range: {} to {} ({} weeks)",
        plan.anchor, plan.end_date, plan.weeks
    )?;
    writeln!(out, "Total commits: {}", plan.total())?;
    writeln!(out, "Sample commands (showing first {}):", SAMPLE_COMMANDS)?;
    for descriptor in plan.descriptors.iter().take(SAMPLE_COMMANDS) {
        writeln!(out, "{}", commit_command_line(descriptor))?;
    }
    if plan.total() > SAMPLE_COMMANDS {
        writeln!(out, "... and {} more commits", plan.total() - SAMPLE_COMMANDS)?;
    }
    Ok(())
}

/// Everything a dry run prints about the plan.
pub fn render_plan<W: Write>(out: &mut W, plan: &Plan) -> io::Result<()> {
    render_grid(out, plan)?;
    render_legend(out)?;
    render_details(out, plan)
}
