use graphcheck_core::config::ReportMode;
use graphcheck_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse report mode from string
pub fn parse_report_mode(s: &str) -> std::result::Result<ReportMode, String> {
    s.parse::<ReportMode>().map_err(|e| e.to_string())
}
