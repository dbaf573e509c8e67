//! Data-quality command implementation

use crate::{pipeline::League, Result};

use super::common::print_json;

/// Handle the quality command
pub fn handle_quality(league: &League, as_json: bool) -> Result<()> {
    let report = league.data_quality();

    if as_json {
        print_json(report)?;
    } else if report.is_empty() {
        println!("No data-quality issues"); // tarpaulin::skip
    } else {
        for issue in report.issues() {
            println!("{issue}"); // tarpaulin::skip
        }
    }

    Ok(())
}
