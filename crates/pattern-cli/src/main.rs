mod config;
mod demos;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::demos::{DemoKind, Report};

/// Walk through the decorator, strategy, observer and factory demos.
#[derive(Debug, Parser)]
#[command(name = "pattern-kit", version, about)]
struct Cli {
    /// Which demo to run
    #[arg(long, value_enum, default_value_t = DemoKind::All)]
    demo: DemoKind,

    /// JSON file overriding the built-in demo inputs
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print reports as JSON
    #[arg(long)]
    json: bool,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render(reports: &[Report], json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(reports).context("failed to encode reports");
    }
    let mut out = String::new();
    for report in reports {
        out.push_str(&format!("== {} ==\n", report.demo));
        for line in &report.lines {
            out.push_str(line);
            out.push('\n');
        }
    }
    Ok(out)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = config::load(cli.config.as_deref())?;
    tracing::debug!(demo = ?cli.demo, "running demos");
    let reports = demos::run(cli.demo, &config)?;

    print!("{}", render(&reports, cli.json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[rstest]
    #[case(&["pattern-kit"], DemoKind::All)]
    #[case(&["pattern-kit", "--demo", "observer"], DemoKind::Observer)]
    #[case(&["pattern-kit", "--demo", "factory", "--json"], DemoKind::Factory)]
    fn parses_demo_selection(#[case] args: &[&str], #[case] expected: DemoKind) {
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.demo, expected);
    }

    #[test]
    fn rejects_unknown_demo() {
        assert!(Cli::try_parse_from(["pattern-kit", "--demo", "singleton"]).is_err());
    }

    #[test]
    fn text_output_has_one_section_per_report() {
        let reports = vec![
            Report {
                demo: "decorator",
                lines: vec!["Espresso $1.99".into()],
            },
            Report {
                demo: "factory",
                lines: vec![],
            },
        ];
        assert_eq!(
            render(&reports, false).unwrap(),
            "== decorator ==\nEspresso $1.99\n== factory ==\n"
        );
    }

    #[test]
    fn json_output_is_an_array() {
        let reports = demos::run(DemoKind::Factory, &config::DemoConfig::default()).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&render(&reports, true).unwrap()).unwrap();
        assert_eq!(value[0]["demo"], "factory");
    }
}
