//! Integration tests for the detection API.

use std::fs;
use std::path::Path;

use bundle_detect::config::{DetectConfig, PinFileResolution};
use bundle_detect::detection::{
    detect, DetectOutcome, Detector, GemfileParser, Metadata, RubyVersionParser, VersionParser,
};
use bundle_detect::ui::MockUI;
use bundle_detect::{DetectError, Result};
use tempfile::TempDir;

fn working_dir_config() -> DetectConfig {
    DetectConfig {
        pin_file_resolution: PinFileResolution::WorkingDir,
        ..Default::default()
    }
}

fn mri(outcome: &DetectOutcome) -> Metadata {
    outcome
        .plan()
        .expect("detection should pass")
        .requirement("mri")
        .expect("mri requirement")
        .metadata
        .clone()
}

#[test]
fn gemfile_ruby_directive_sets_mri_version() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("Gemfile"),
        "source 'https://rubygems.org'\n\nruby \"3.2.1\"\n\ngem 'rails', '~> 7.1'\n",
    )
    .unwrap();
    fs::write(temp.path().join(".ruby-version"), "2.7.8\n").unwrap();
    let mut ui = MockUI::new();

    let outcome = detect(temp.path(), &working_dir_config(), &mut ui).unwrap();

    let plan = outcome.plan().unwrap();
    assert_eq!(plan.requires[2].name, "mri");
    assert_eq!(
        plan.requires[2].metadata,
        Metadata {
            version: "3.2.1".to_string(),
            version_source: Some("Gemfile".to_string()),
            build: true,
            launch: true,
        }
    );
    assert!(ui.is_silent());
}

#[test]
fn pin_file_version_is_trimmed() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Gemfile"), "gem 'sinatra'\n").unwrap();
    fs::write(temp.path().join(".ruby-version"), "3.1.0\n").unwrap();
    let mut ui = MockUI::new();

    let outcome = detect(temp.path(), &working_dir_config(), &mut ui).unwrap();

    let metadata = mri(&outcome);
    assert_eq!(metadata.version, "3.1.0");
    assert_eq!(metadata.version_source.as_deref(), Some(".ruby-version"));
}

#[test]
fn malformed_pin_file_is_unconstrained_without_warning() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Gemfile"), "").unwrap();
    fs::write(temp.path().join(".ruby-version"), "system\n").unwrap();
    let mut ui = MockUI::new();

    let outcome = detect(temp.path(), &working_dir_config(), &mut ui).unwrap();

    assert_eq!(mri(&outcome).version, "");
    assert!(ui.warnings().is_empty());
}

#[test]
fn missing_pin_file_warns_once() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Gemfile"), "").unwrap();
    let mut ui = MockUI::new();

    let outcome = detect(temp.path(), &working_dir_config(), &mut ui).unwrap();

    let metadata = mri(&outcome);
    assert_eq!(metadata.version, "");
    assert_eq!(metadata.version_source, None);
    assert_eq!(ui.warnings().len(), 1);
    assert!(ui.warnings()[0].contains(".ruby-version"));
}

#[test]
fn missing_gemfile_fails() {
    let temp = TempDir::new().unwrap();
    let mut ui = MockUI::new();

    let outcome = detect(temp.path(), &working_dir_config(), &mut ui).unwrap();

    assert_eq!(outcome, DetectOutcome::Fail("Gemfile is not present".into()));
    assert!(ui.is_silent());
}

#[test]
fn unreadable_gemfile_is_error() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("Gemfile")).unwrap();
    let mut ui = MockUI::new();

    let result = detect(temp.path(), &working_dir_config(), &mut ui);

    assert!(matches!(result, Err(DetectError::ReadFailed { .. })));
}

/// A parser for a Gemfile variant that pins the interpreter in a comment.
struct CommentPinParser;

impl VersionParser for CommentPinParser {
    fn parse_version(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).map_err(|e| DetectError::from_read(path, e))?;
        Ok(content
            .lines()
            .find_map(|l| l.strip_prefix("# ruby: "))
            .unwrap_or_default()
            .trim()
            .to_string())
    }
}

#[test]
fn detector_accepts_custom_parsers() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Gemfile"), "# ruby: 3.0.6\ngem 'rack'\n").unwrap();
    let mut ui = MockUI::new();

    let outcome = Detector::new(CommentPinParser, RubyVersionParser::new())
        .detect(temp.path(), &mut ui)
        .unwrap();

    assert_eq!(mri(&outcome).version, "3.0.6");
}

#[test]
fn detector_accepts_boxed_parsers() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Gemfile"), "ruby '3.3.1'\n").unwrap();
    let gemfile: Box<dyn VersionParser> = Box::new(GemfileParser::new());
    let pin: Box<dyn VersionParser> = Box::new(RubyVersionParser::new());

    let outcome = Detector::new(gemfile, pin)
        .detect(temp.path(), &mut MockUI::new())
        .unwrap();

    assert_eq!(mri(&outcome).version, "3.3.1");
}
