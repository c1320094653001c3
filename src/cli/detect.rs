//! Detect command implementation.
//!
//! Runs detection against the working directory, writes the build plan on
//! a pass and maps the outcome onto the detect exit codes.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{load_config, DetectConfig, OutputFormat};
use crate::detection::{self, BuildPlan, DetectOutcome};
use crate::error::{DetectError, Result};
use crate::ui::UserInterface;

use super::args::Cli;
use super::command::{Command, CommandResult, EXIT_FAIL};

/// The detect command implementation.
pub struct DetectCommand {
    working_dir: PathBuf,
    config: DetectConfig,
    plan_destination: Option<PathBuf>,
}

impl DetectCommand {
    /// Create a new detect command.
    pub fn new(working_dir: &Path, config: DetectConfig, plan_destination: Option<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config,
            plan_destination,
        }
    }

    /// Build the command from parsed arguments.
    ///
    /// Config is layered as defaults, then the `--config` file, then flags
    /// and their environment variables.
    pub fn from_cli(cli: &Cli, working_dir: &Path) -> Result<Self> {
        let config = load_config(cli.config.as_deref())?
            .with_overrides(cli.pin_file_resolution, cli.format);

        Ok(Self::new(
            working_dir,
            config,
            cli.plan_destination().map(Path::to_path_buf),
        ))
    }

    /// Get the working directory.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Get the effective configuration.
    pub fn config(&self) -> &DetectConfig {
        &self.config
    }

    fn render(&self, plan: &BuildPlan) -> Result<String> {
        match self.config.output_format {
            OutputFormat::Toml => plan.to_toml(),
            OutputFormat::Json => plan.to_json(),
        }
    }

    fn write_plan(&self, rendered: &str, ui: &mut dyn UserInterface) -> Result<()> {
        match &self.plan_destination {
            Some(path) => {
                fs::write(path, rendered).map_err(|source| DetectError::PlanWriteFailed {
                    path: path.clone(),
                    source,
                })?;
                ui.success(&format!("Build plan written to {}", path.display()));
            }
            None => print!("{}", rendered),
        }
        Ok(())
    }
}

impl Command for DetectCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        tracing::debug!(
            "Detecting in {} with {:?}",
            self.working_dir.display(),
            self.config
        );

        match detection::detect(&self.working_dir, &self.config, ui)? {
            DetectOutcome::Pass(plan) => {
                let rendered = self.render(&plan)?;
                self.write_plan(&rendered, ui)?;
                Ok(CommandResult::success())
            }
            DetectOutcome::Fail(reason) => {
                ui.skipped(&reason);
                Ok(CommandResult::failure(EXIT_FAIL))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PinFileResolution;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    fn config_in(resolution: PinFileResolution) -> DetectConfig {
        DetectConfig {
            pin_file_resolution: resolution,
            ..Default::default()
        }
    }

    #[test]
    fn missing_gemfile_exits_with_fail_code() {
        let temp = TempDir::new().unwrap();
        let plan = temp.path().join("plan.toml");
        let mut ui = MockUI::new();

        let cmd = DetectCommand::new(
            temp.path(),
            config_in(PinFileResolution::WorkingDir),
            Some(plan.clone()),
        );
        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 100);
        assert_eq!(ui.skips(), ["Gemfile is not present"]);
        assert!(!plan.exists());
    }

    #[test]
    fn writes_toml_plan_on_pass() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Gemfile"), "ruby \"3.2.1\"\n").unwrap();
        let plan = temp.path().join("plan.toml");
        let mut ui = MockUI::new();

        let cmd = DetectCommand::new(
            temp.path(),
            config_in(PinFileResolution::WorkingDir),
            Some(plan.clone()),
        );
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        let written: BuildPlan = toml::from_str(&fs::read_to_string(&plan).unwrap()).unwrap();
        let mri = written.requirement("mri").unwrap();
        assert_eq!(mri.metadata.version, "3.2.1");
        assert_eq!(mri.metadata.version_source.as_deref(), Some("Gemfile"));
        assert_eq!(ui.successes().len(), 1);
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn writes_json_plan_when_configured() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Gemfile"), "").unwrap();
        fs::write(temp.path().join(".ruby-version"), "3.1.0\n").unwrap();
        let plan = temp.path().join("plan.json");
        let mut ui = MockUI::new();

        let config = DetectConfig {
            pin_file_resolution: PinFileResolution::WorkingDir,
            output_format: OutputFormat::Json,
        };
        DetectCommand::new(temp.path(), config, Some(plan.clone()))
            .execute(&mut ui)
            .unwrap();

        let written: BuildPlan =
            serde_json::from_str(&fs::read_to_string(&plan).unwrap()).unwrap();
        let mri = written.requirement("mri").unwrap();
        assert_eq!(mri.metadata.version, "3.1.0");
        assert_eq!(mri.metadata.version_source.as_deref(), Some(".ruby-version"));
    }

    #[test]
    fn unwritable_plan_destination_is_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Gemfile"), "").unwrap();
        let plan = temp.path().join("missing-dir").join("plan.toml");
        let mut ui = MockUI::new();

        let cmd = DetectCommand::new(
            temp.path(),
            config_in(PinFileResolution::WorkingDir),
            Some(plan),
        );
        let result = cmd.execute(&mut ui);

        assert!(matches!(result, Err(DetectError::PlanWriteFailed { .. })));
    }

    #[test]
    fn from_cli_layers_flags_over_config_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("detect.yml");
        fs::write(&config_path, "pin_file_resolution: working-dir\noutput_format: json\n").unwrap();

        let cli = Cli::parse_from([
            "bundle-detect",
            "--config",
            config_path.to_str().unwrap(),
            "--format",
            "toml",
        ]);
        let cmd = DetectCommand::from_cli(&cli, temp.path()).unwrap();

        assert_eq!(cmd.config().pin_file_resolution, PinFileResolution::WorkingDir);
        assert_eq!(cmd.config().output_format, OutputFormat::Toml);
        assert_eq!(cmd.working_dir(), temp.path());
    }

    #[test]
    fn from_cli_missing_config_file_is_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");

        let cli = Cli::parse_from(["bundle-detect", "--config", missing.to_str().unwrap()]);
        let result = DetectCommand::from_cli(&cli, temp.path());

        assert!(matches!(result, Err(DetectError::ConfigNotFound { .. })));
    }
}
