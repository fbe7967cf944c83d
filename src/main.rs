use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use family_planner::cli::{
    handle_export_command, handle_health_command, handle_init_command,
    handle_milestones_command, handle_project_command, handle_summary_command,
    handle_tips_command, resolve_output, ExportFormat, PlanContext, ProjectionArgs,
};
use family_planner::config::{PlannerPaths, Settings};
use family_planner::display::report::format_rate;

#[derive(Parser)]
#[command(
    name = "planner",
    author = "Kaylee Beyene",
    version,
    about = "Family budget planner: allocation, savings projection and financial health",
    long_about = "Family Planner turns a household budget (income, expense categories, \
                  savings, goals and debts) into a monthly allocation summary, a \
                  month-by-month savings projection with milestones, and a set of \
                  financial health ratios with advice."
)]
struct Cli {
    /// Plan file to use (.yaml, .yml or .json) instead of the default one
    #[arg(short, long, global = true, env = "FAMILY_PLANNER_PLAN")]
    plan: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default household plan
    Init {
        /// Overwrite an existing plan with the defaults
        #[arg(long)]
        force: bool,
    },

    /// Show the monthly allocation summary
    #[command(alias = "allocation")]
    Summary {
        /// Also list category items and goal contributions
        #[arg(short, long)]
        detail: bool,

        /// Render the allocation as a plain table
        #[arg(long)]
        table: bool,
    },

    /// Project savings month by month
    #[command(alias = "projection")]
    Project {
        #[command(flatten)]
        projection: ProjectionArgs,

        /// First projected month (YYYY-MM) for calendar labels
        #[arg(short, long)]
        start: Option<String>,
    },

    /// Show when each milestone is first reached
    Milestones {
        #[command(flatten)]
        projection: ProjectionArgs,
    },

    /// Show financial health ratios and advice
    Health {
        #[command(flatten)]
        projection: ProjectionArgs,
    },

    /// Show money-management tips
    Tips,

    /// Export the evaluation of the plan to a file
    Export {
        /// Output file path (default: a file in the exports directory)
        output: Option<PathBuf>,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[command(flatten)]
        projection: ProjectionArgs,

        /// First projected month (YYYY-MM) for CSV labels
        #[arg(short, long)]
        start: Option<String>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let paths = PlannerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let plan = cli.plan.as_deref();

    match cli.command {
        Some(Commands::Init { force }) => {
            let path = handle_init_command(&paths, &settings, plan, force)?;
            println!("Default household plan written to: {}", path.display());
            println!();
            println!("Edit the file to describe your household, then run:");
            println!("  planner summary    monthly allocation");
            println!("  planner project    savings projection");
            println!("  planner health     financial health and advice");
        }
        Some(Commands::Summary { detail, table }) => {
            let mut context = PlanContext::load(&paths, &settings, plan)?;
            handle_summary_command(&mut context, detail, table)?;
        }
        Some(Commands::Project { projection, start }) => {
            let mut context = PlanContext::load(&paths, &settings, plan)?;
            handle_project_command(&mut context, &projection, start.as_deref())?;
        }
        Some(Commands::Milestones { projection }) => {
            let mut context = PlanContext::load(&paths, &settings, plan)?;
            handle_milestones_command(&mut context, &projection)?;
        }
        Some(Commands::Health { projection }) => {
            let mut context = PlanContext::load(&paths, &settings, plan)?;
            handle_health_command(&mut context, &projection)?;
        }
        Some(Commands::Tips) => handle_tips_command()?,
        Some(Commands::Export {
            output,
            format,
            projection,
            start,
            pretty,
        }) => {
            let mut context = PlanContext::load(&paths, &settings, plan)?;
            let output = resolve_output(&paths, output.as_deref(), format);
            handle_export_command(
                &mut context,
                &projection,
                &output,
                format,
                start.as_deref(),
                pretty,
            )?;
        }
        Some(Commands::Config) => {
            println!("Family Planner Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Plan file:        {}", paths.plan_file().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Horizon:          {} months", settings.horizon_months);
            println!(
                "  Income growth:    {} / month",
                format_rate(settings.monthly_growth_rate)
            );
            println!(
                "  Projection start: {}",
                settings.projection_start.as_deref().unwrap_or("(not set)")
            );
            println!("  Initialized:      {}", paths.is_initialized());
        }
        None => {
            println!("Family Planner - household budgeting and savings projection");
            println!();
            println!("Run 'planner --help' for usage information.");
            println!("Run 'planner init' to create the default household plan.");
        }
    }

    Ok(())
}
