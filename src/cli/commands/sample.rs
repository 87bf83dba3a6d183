use anyhow::Result;

use tally::{ run_sample, CountReport, PropertyKind, TallyConfig };

use crate::cli::OutputFormat;

/// Sample run: count palindromic identifiers among the configured people
pub fn execute(config: &TallyConfig, output_format: OutputFormat) -> Result<()> {
    let count = run_sample(config)?;

    match output_format {
        OutputFormat::Text => println!("{}", count),
        OutputFormat::Json => {
            let report = CountReport::new(PropertyKind::PalindromeId, config.people.len(), count);
            println!("{}", report.to_json()?);
        }
    }
    Ok(())
}
