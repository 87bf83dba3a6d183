use anyhow::{ Context, Result };

use tally::{ count_values, CountReport, PropertyKind, TallyConfig };

use crate::cli::{ ui, OutputFormat };

/// Count command: check the given values against one named property
pub fn execute(
    config: &TallyConfig,
    property_str: &str,
    values: &[String],
    output_format: OutputFormat
) -> Result<()> {
    let kind: PropertyKind = property_str.parse()?;

    let report = count_values(kind, values, config).with_context(||
        format!("Failed to count values for property '{}'", kind)
    )?;

    print_report(&report, output_format)
}

pub fn print_report(report: &CountReport, output_format: OutputFormat) -> Result<()> {
    match output_format {
        OutputFormat::Text => {
            println!("{}", report.matching);
            ui::print_detail(
                &format!("{} of {} values have property {}", report.matching, report.total, report.property)
            );
        }
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}
