//! Simulate command implementation
//!
//! Loads a sample file, runs the configured walk, and renders the
//! summary in the requested format.

use std::path::Path;

use tracing::info;

use walk_core::Point;
use walk_inputs::csv_source;
use walk_sim::{run_simulation, SampleStream, SimulationSpec, WalkSummary};

use crate::config::SimulatorConfig;
use crate::{CliError, Result};

/// Run the simulate command
pub fn run(
    input: Option<&Path>,
    dimension: u8,
    target: Option<&str>,
    format: &str,
    config: &SimulatorConfig,
) -> Result<()> {
    let spec = build_spec(dimension, target, config)?;
    let input = input.unwrap_or(&config.input);

    if !input.exists() {
        return Err(CliError::FileNotFound(input.display().to_string()));
    }

    info!("Starting simulation...");
    info!("  Input: {}", input.display());
    info!("  Dimension: {}", spec.dimension());

    let samples = csv_source::read_samples(input)?;
    info!("  Samples loaded: {}", samples.len());

    let mut stream = SampleStream::from_values(samples);
    let summary = run_simulation(&spec, &mut stream)?;

    render(&summary, format)?;

    info!("Simulation complete");
    Ok(())
}

/// Resolves the CLI arguments into an explicit simulation spec.
fn build_spec(
    dimension: u8,
    target: Option<&str>,
    config: &SimulatorConfig,
) -> Result<SimulationSpec> {
    match dimension {
        1 => {
            if target.is_some() {
                return Err(CliError::InvalidArgument(
                    "targets apply to 2D and 3D walks only".to_string(),
                ));
            }
            Ok(SimulationSpec::Line)
        }
        2 => {
            let coords = match target {
                Some(raw) => parse_coords::<2>(raw)?,
                None => config.plane_target,
            };
            Ok(SimulationSpec::Plane {
                target: Point::new(coords),
            })
        }
        3 => {
            let coords = match target {
                Some(raw) => parse_coords::<3>(raw)?,
                None => config.space_target,
            };
            Ok(SimulationSpec::Space {
                target: Point::new(coords),
            })
        }
        other => Err(CliError::InvalidArgument(format!(
            "unsupported dimension {}. Supported: 1, 2, 3",
            other
        ))),
    }
}

/// Parses "250,300"-style coordinate lists of an exact length.
fn parse_coords<const N: usize>(raw: &str) -> Result<[i64; N]> {
    let parts: Vec<i64> = raw
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| CliError::InvalidArgument(format!("bad coordinate: {:?}", part)))
        })
        .collect::<Result<_>>()?;

    parts.try_into().map_err(|parts: Vec<i64>| {
        CliError::InvalidArgument(format!(
            "expected {} coordinates, got {}",
            N,
            parts.len()
        ))
    })
}

fn render(summary: &WalkSummary, format: &str) -> Result<()> {
    match format {
        "table" => render_table(summary),
        "json" => {
            println!("{}", serde_json::to_string_pretty(summary)?);
        }
        "csv" => render_csv(summary),
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json, csv",
                other
            )));
        }
    }
    Ok(())
}

fn render_table(summary: &WalkSummary) {
    println!("\n┌──────────────────────────────┬──────────────────────────┐");
    row("Dimension", &summary.dimension.to_string());
    row("Steps taken", &summary.steps.to_string());
    row("Termination", &summary.termination.to_string());
    row("Final position", &fmt_coords(&summary.final_position));
    if let Some(target) = &summary.target {
        row("Target", &fmt_coords(target));
    }
    if let Some(distance) = summary.distance_to_target {
        row("Distance to target", &format!("{:.4}", distance));
    }
    row("Elapsed (s)", &format!("{:.6}", summary.elapsed_seconds));
    println!("├──────────────────────────────┼──────────────────────────┤");
    for (jump, probability) in summary.jump_return_probabilities.iter().enumerate().skip(1) {
        row(
            &format!("Return probability, jump {}", jump + 1),
            &format!("{:.2}%", probability * 100.0),
        );
    }
    println!("└──────────────────────────────┴──────────────────────────┘");
}

fn row(label: &str, value: &str) {
    println!("│ {:<28} │ {:>24} │", label, value);
}

fn render_csv(summary: &WalkSummary) {
    let axes = ["x", "y", "z"];
    let header: Vec<&str> = axes.iter().take(summary.dimension.axes()).copied().collect();
    println!("step,{}", header.join(","));

    for (step, position) in summary.trajectory.iter().enumerate() {
        let coords: Vec<String> = position.iter().map(|c| c.to_string()).collect();
        println!("{},{}", step, coords.join(","));
    }
}

fn fmt_coords(coords: &[i64]) -> String {
    let parts: Vec<String> = coords.iter().map(|c| c.to_string()).collect();
    format!("({})", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use walk_core::Dimension;

    #[test]
    fn test_build_spec_defaults_from_config() {
        let config = SimulatorConfig::default();

        let spec = build_spec(2, None, &config).unwrap();
        assert_eq!(
            spec,
            SimulationSpec::Plane {
                target: Point::new([250, 300])
            }
        );

        let spec = build_spec(3, None, &config).unwrap();
        assert_eq!(spec.dimension(), Dimension::Three);
    }

    #[test]
    fn test_build_spec_parses_cli_target() {
        let config = SimulatorConfig::default();
        let spec = build_spec(2, Some("7, -3"), &config).unwrap();
        assert_eq!(
            spec,
            SimulationSpec::Plane {
                target: Point::new([7, -3])
            }
        );
    }

    #[test]
    fn test_build_spec_rejects_target_for_line() {
        let config = SimulatorConfig::default();
        let err = build_spec(1, Some("1,2"), &config).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[test]
    fn test_build_spec_rejects_bad_dimension() {
        let config = SimulatorConfig::default();
        assert!(build_spec(0, None, &config).is_err());
        assert!(build_spec(4, None, &config).is_err());
    }

    #[test]
    fn test_parse_coords_length_mismatch() {
        let err = parse_coords::<3>("1,2").unwrap_err();
        assert!(err.to_string().contains("expected 3 coordinates"));
    }

    #[test]
    fn test_fmt_coords() {
        assert_eq!(fmt_coords(&[45, 23, 17]), "(45, 23, 17)");
    }
}
