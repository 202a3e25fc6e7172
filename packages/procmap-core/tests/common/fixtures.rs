//! Event log fixtures

use std::io::Write;
use tempfile::NamedTempFile;

pub const HEADER: &str = "case_id,timestamp,activity";

/// Two cases: c1 does A then B a minute later, c2 only does A
pub fn fixture_worked_scenario() -> String {
    format!(
        "{HEADER}\n\
         c1,2024-01-01T00:00:00Z,A\n\
         c1,2024-01-01T00:01:00Z,B\n\
         c2,2024-01-01T00:00:00Z,A\n"
    )
}

/// Order-to-cash style log, `cases` cases with interleaved rows
pub fn fixture_order_log(cases: usize) -> String {
    let steps = ["Create Order", "Check Credit", "Ship", "Invoice", "Close"];
    let mut out = format!("{HEADER}\n");
    for step in 0..steps.len() {
        for case in 0..cases {
            // Every third case stops after "Check Credit"
            if case % 3 == 2 && step > 1 {
                continue;
            }
            let minutes = step * 10 + case % 7;
            out.push_str(&format!(
                "order-{case},2024-05-01T{:02}:{:02}:00Z,{}\n",
                minutes / 60,
                minutes % 60,
                steps[step]
            ));
        }
    }
    out
}

/// Write `contents` to a temporary .csv file kept alive by the handle
pub fn fixture_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write fixture");
    file.flush().expect("flush fixture");
    file
}
