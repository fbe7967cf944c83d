//! Plan loading and initialization
//!
//! Resolves which plan file to use, loads it, applies projection overrides
//! and validates the result before anything is evaluated.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::Args;
use tracing::{debug, info};

use crate::config::settings::parse_month;
use crate::config::{PlannerPaths, Settings};
use crate::error::{PlannerError, PlannerResult};
use crate::models::{PlanInputs, ProjectionParams};
use crate::services::{evaluate, PlanEvaluation};
use crate::storage::{read_plan, write_plan_atomic};

/// Projection overrides shared by the projection-aware commands
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectionArgs {
    /// Projection horizon in months (1-36)
    #[arg(long)]
    pub horizon: Option<u32>,

    /// Monthly income growth as a fraction (0.05 = 5%)
    #[arg(long)]
    pub growth: Option<f64>,
}

impl ProjectionArgs {
    /// Resolve the projection parameters
    ///
    /// Flags win over the plan file. A plan whose projection block is left at
    /// the defaults takes the projection from the settings instead.
    pub fn resolve(&self, plan: ProjectionParams, settings: &Settings) -> ProjectionParams {
        let base = if plan == ProjectionParams::default() {
            settings.projection()
        } else {
            plan
        };

        ProjectionParams::new(
            self.horizon.unwrap_or(base.horizon_months),
            self.growth.unwrap_or(base.monthly_growth_rate),
        )
    }
}

/// A loaded plan with the settings it is evaluated under
#[derive(Debug, Clone)]
pub struct PlanContext {
    pub settings: Settings,
    pub plan_path: PathBuf,
    pub inputs: PlanInputs,
}

impl PlanContext {
    /// Load the plan file (the explicit path, or the default one)
    pub fn load(
        paths: &PlannerPaths,
        settings: &Settings,
        plan_path: Option<&Path>,
    ) -> PlannerResult<Self> {
        let plan_path = plan_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| paths.plan_file());
        let inputs = read_plan(&plan_path)?;

        Ok(Self {
            settings: settings.clone(),
            plan_path,
            inputs,
        })
    }

    /// Currency symbol for display
    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    /// Apply projection overrides, validate and run one evaluation pass
    pub fn evaluate(&mut self, overrides: &ProjectionArgs) -> PlannerResult<PlanEvaluation> {
        self.inputs.projection = overrides.resolve(self.inputs.projection, &self.settings);
        debug!(
            horizon = self.inputs.projection.horizon_months,
            growth = self.inputs.projection.monthly_growth_rate,
            "resolved projection parameters"
        );

        self.inputs.validate()?;
        evaluate(&self.inputs)
    }

    /// First projected month: the flag, else the configured start, else none
    pub fn start_month(&self, flag: Option<&str>) -> PlannerResult<Option<NaiveDate>> {
        match flag {
            Some(month) => parse_month(month).map(Some),
            None => self.settings.projection_start_date(),
        }
    }
}

/// Write the default household plan and the settings file
pub fn handle_init_command(
    paths: &PlannerPaths,
    settings: &Settings,
    plan_path: Option<&Path>,
    force: bool,
) -> PlannerResult<PathBuf> {
    let plan_path = plan_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| paths.plan_file());

    if plan_path.exists() && !force {
        return Err(PlannerError::Config(format!(
            "Plan file already exists: {} (use --force to reset it to the defaults)",
            plan_path.display()
        )));
    }

    paths.ensure_directories()?;
    write_plan_atomic(&plan_path, &PlanInputs::household_defaults())?;
    settings.save(paths)?;

    info!(path = %plan_path.display(), force, "initialized plan file");
    Ok(plan_path)
}
