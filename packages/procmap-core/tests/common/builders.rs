//! Test data builders

/// Builder for CSV event logs
#[derive(Debug, Default)]
pub struct LogBuilder {
    rows: Vec<String>,
}

impl LogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Well-formed row; `secs` is seconds after 2024-01-01T00:00:00Z
    pub fn event(mut self, case: &str, secs: u32, activity: &str) -> Self {
        let (h, m, s) = (secs / 3600, (secs / 60) % 60, secs % 60);
        self.rows
            .push(format!("{case},2024-01-01T{h:02}:{m:02}:{s:02}Z,{activity}"));
        self
    }

    /// Verbatim row, malformed or not
    pub fn raw(mut self, row: &str) -> Self {
        self.rows.push(row.to_string());
        self
    }

    pub fn build(self) -> String {
        let mut out = String::from(super::HEADER);
        out.push('\n');
        for row in self.rows {
            out.push_str(&row);
            out.push('\n');
        }
        out
    }
}
