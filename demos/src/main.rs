// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `parsescope`: replay pointer actions against a region document.
//!
//! Loads a JSON region document, applies each action in order, and prints every
//! rendered derivation path and selection change.
//!
//! Run:
//! - `cargo run -p parsescope_demos -- demos/documents/program.json hover:100,10 click:60,5`
//! - `RUST_LOG=parsescope=trace cargo run -p parsescope_demos -- demos/documents/program.json hover:5,5`

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use kurbo::Point;
use parsescope::{
    Diagnostics, DocumentSpec, OutputArea, PathFormat, Visualizer, VizConfig, VizError,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Replay hover and click actions against a parse-tree region document.
#[derive(Parser, Debug)]
#[command(name = "parsescope", version)]
#[command(about = "Explore a parse tree rendered as nested regions")]
struct Args {
    /// Region document (JSON).
    document: PathBuf,

    /// Visualizer configuration (JSON).
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Render paths as HTML instead of indented text.
    #[arg(long)]
    html: bool,

    /// Actions to replay, in order: `hover:X,Y` or `click:X,Y`.
    #[arg(value_parser = parse_action)]
    actions: Vec<Action>,
}

#[derive(Copy, Clone, Debug)]
enum Action {
    Hover(Point),
    Click(Point),
}

fn parse_action(s: &str) -> Result<Action, String> {
    let (kind, coords) = s
        .split_once(':')
        .ok_or_else(|| format!("expected `hover:X,Y` or `click:X,Y`, got `{s}`"))?;
    let (x, y) = coords
        .split_once(',')
        .ok_or_else(|| format!("expected coordinates `X,Y`, got `{coords}`"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x `{x}`: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y `{y}`: {e}"))?;
    let pt = Point::new(x, y);
    match kind {
        "hover" => Ok(Action::Hover(pt)),
        "click" => Ok(Action::Click(pt)),
        other => Err(format!("unknown action `{other}`")),
    }
}

/// Prints each rendered path to stdout.
#[derive(Debug, Default)]
struct StdoutPanel;

impl OutputArea for StdoutPanel {
    fn replace(&mut self, content: &str) {
        println!("{content}");
    }
}

/// Prints alerts to stderr.
#[derive(Debug, Default)]
struct StderrAlerts {
    raised: usize,
}

impl Diagnostics for StderrAlerts {
    fn alert(&mut self, message: &str) {
        self.raised += 1;
        eprintln!("parsescope: {message}");
    }
}

fn load_config(args: &Args) -> Result<VizConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            VizConfig::from_json(&json).with_context(|| format!("in {}", path.display()))?
        }
        None => VizConfig::default(),
    };
    if args.html {
        config.format = PathFormat::Html;
    }
    Ok(config)
}

fn run(args: &Args, alerts: &mut StderrAlerts) -> Result<ExitCode> {
    let config = load_config(args)?;
    let json = fs::read_to_string(&args.document)
        .with_context(|| format!("reading document {}", args.document.display()))?;
    let doc = DocumentSpec::from_json(&json)
        .with_context(|| format!("in {}", args.document.display()))?;
    let tree = doc.build();
    info!(regions = tree.len(), document = %args.document.display(), "document loaded");

    let mut viz = match Visualizer::new(tree, &config, StdoutPanel, alerts) {
        Ok(viz) => viz,
        // Already reported through the alert channel.
        Err(VizError::NoRegions) if alerts.raised > 0 => return Ok(ExitCode::FAILURE),
        Err(err) => bail!(err),
    };
    info!(root = ?viz.root_rule(), "root rule discovered");

    for action in &args.actions {
        match *action {
            Action::Hover(pt) => {
                if viz.pointer_move(pt).is_none() && viz.hovered().is_none() {
                    println!("(no region at {}, {})", pt.x, pt.y);
                }
            }
            Action::Click(pt) => {
                let out = viz.click(pt);
                if !out.default_prevented {
                    println!("(click at {}, {} hit nothing)", pt.x, pt.y);
                    continue;
                }
                if let Some(region) = out.selected {
                    let rule = viz.tree().rule_name(region).unwrap_or("?");
                    let bounds = viz.tree().bounds(region).unwrap_or_default();
                    println!("selected {rule} at {bounds:?}");
                }
                let damage = viz.take_damage();
                if let Some(rect) = damage.union_rect() {
                    info!(?rect, "repaint");
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    run(&args, &mut StderrAlerts::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const DOCUMENT: &str = include_str!("../documents/program.json");

    fn args_for(document: &Path, rest: &[&str]) -> Args {
        let mut argv = vec!["parsescope", document.to_str().unwrap()];
        argv.extend_from_slice(rest);
        Args::parse_from(argv)
    }

    #[test]
    fn parses_actions() {
        assert!(matches!(
            parse_action("hover:10,5"),
            Ok(Action::Hover(p)) if p == Point::new(10.0, 5.0)
        ));
        assert!(matches!(
            parse_action("click: 1.5 , 2"),
            Ok(Action::Click(p)) if p == Point::new(1.5, 2.0)
        ));
    }

    #[test]
    fn rejects_malformed_actions() {
        assert!(parse_action("hover").is_err());
        assert!(parse_action("hover:1").is_err());
        assert!(parse_action("drag:1,2").is_err());
        assert!(parse_action("click:x,2").is_err());
    }

    #[test]
    fn html_flag_overrides_config_format() {
        let args = Args::parse_from(["parsescope", "doc.json", "--html", "hover:1,2"]);
        let config = load_config(&args).unwrap();
        assert_eq!(config.format, PathFormat::Html);
        assert_eq!(args.actions.len(), 1);
    }

    #[test]
    fn empty_document_fails_with_one_alert() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        fs::write(&path, "{}").unwrap();
        let mut alerts = StderrAlerts::default();
        let code = run(&args_for(&path, &["hover:1,1"]), &mut alerts).unwrap();
        assert_eq!(code, ExitCode::FAILURE);
        assert_eq!(alerts.raised, 1);
    }

    #[test]
    fn replays_actions_on_a_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("program.json");
        fs::write(&path, DOCUMENT).unwrap();
        let mut alerts = StderrAlerts::default();
        let args = args_for(&path, &["hover:100,10", "click:60,5", "click:900,900"]);
        let code = run(&args, &mut alerts).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(alerts.raised, 0);
    }

    #[test]
    fn config_file_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = dir.path().join("cfg.json");
        fs::write(&cfg, r#"{ "root": "top_level", "indent_unit": ".." }"#).unwrap();
        let args = Args::parse_from(["parsescope", "doc.json", "--config", cfg.to_str().unwrap()]);
        let config = load_config(&args).unwrap();
        assert_eq!(config.indent_unit(), "..");
    }

    #[test]
    fn unreadable_inputs_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let mut alerts = StderrAlerts::default();
        assert!(run(&args_for(&missing, &[]), &mut alerts).is_err());

        let bad = dir.path().join("bad.json");
        fs::write(&bad, r#"{ "regions": 3 }"#).unwrap();
        assert!(run(&args_for(&bad, &[]), &mut alerts).is_err());

        let cfg = dir.path().join("cfg.json");
        fs::write(&cfg, r#"{ "colour": "red" }"#).unwrap();
        let args = Args::parse_from(["parsescope", "doc.json", "--config", cfg.to_str().unwrap()]);
        assert!(load_config(&args).is_err());
        assert_eq!(alerts.raised, 0);
    }
}
