//! Probabilities command implementation
//!
//! Prints the static 4-jump return-probability table.

use walk_sim::jump_return_probabilities;

use crate::{CliError, Result};

/// Run the probabilities command
pub fn run(format: &str) -> Result<()> {
    let probabilities = jump_return_probabilities();

    match format {
        "table" => {
            println!("\n┌──────┬─────────────┐");
            println!("│ Jump │ Probability │");
            println!("├──────┼─────────────┤");
            for (jump, probability) in probabilities.iter().enumerate() {
                println!("│ {:>4} │ {:>10.2}% │", jump + 1, probability * 100.0);
            }
            println!("└──────┴─────────────┘");
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&probabilities)?);
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            )));
        }
    }

    Ok(())
}
