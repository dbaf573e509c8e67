//! Transfer history command implementation

use std::fmt::Write;

use crate::{
    cli::types::{ManagerId, PlayerCode},
    pipeline::League,
    roster::{TransferOutcome, TransferRecord},
    Result,
};

use super::common::print_json;

/// Handle the transfers command
pub fn handle_transfers(league: &League, manager: ManagerId, as_json: bool) -> Result<()> {
    let history = league.transfer_history(&manager)?;

    if as_json {
        print_json(history)?;
    } else {
        print!("{}", render_transfers(history)); // tarpaulin::skip
    }

    Ok(())
}

fn code(code: Option<PlayerCode>) -> String {
    code.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn render_transfers(history: &[TransferRecord]) -> String {
    let mut out = String::new();
    for record in history {
        let outcome = match &record.outcome {
            TransferOutcome::Applied { slots } => {
                let slots: Vec<String> = slots.iter().map(u8::to_string).collect();
                format!("applied to slot {}", slots.join(", "))
            }
            TransferOutcome::Dropped { reason } => format!("dropped: {reason}"),
            TransferOutcome::Ignored => "ignored".to_string(),
        };
        let _ = writeln!(
            out,
            "{} {:<10} out {:>8} in {:>8}  {}",
            record.timestamp.format("%Y-%m-%d %H:%M"),
            record.kind,
            code(record.code_out),
            code(record.code_in),
            outcome,
        );
    }
    out
}
