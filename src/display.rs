//! Terminal rendering of interaction reports

use std::io::{self, Write};

use crate::workflow::messages::{APP_INTRO, APP_TITLE};
use crate::workflow::{InteractionReport, NoticeLevel};

/// Title and introduction shown before the first interaction
pub fn render_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{APP_TITLE}")?;
    writeln!(out, "{}", "=".repeat(APP_TITLE.len()))?;
    writeln!(out, "{APP_INTRO}")?;
    writeln!(out)
}

/// Write each notice on its own labelled line
pub fn render_text<W: Write>(report: &InteractionReport, out: &mut W) -> io::Result<()> {
    for notice in &report.notices {
        match notice.level {
            NoticeLevel::Info => writeln!(out, "[info] {}", notice.text)?,
            NoticeLevel::Success => writeln!(out, "[ok] {}", notice.text)?,
            NoticeLevel::Warning => writeln!(out, "[warn] {}", notice.text)?,
            NoticeLevel::Error => writeln!(out, "[error] {}", notice.text)?,
            NoticeLevel::Heading => writeln!(out, "\n#### {}", notice.text)?,
            NoticeLevel::Content => writeln!(out, "\nOptimised Content:\n{}", notice.text)?,
        }
    }
    Ok(())
}

/// Write the whole report as pretty-printed JSON
pub fn render_json<W: Write>(report: &InteractionReport, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::{InteractionState, Notice};

    fn sample_report() -> InteractionReport {
        let mut report = InteractionReport::new("boil an egg");
        report.notices = vec![
            Notice::info("Fetching"),
            Notice::success("Existing Featured Snippet from Google UK: 6 minutes"),
            Notice::heading("Generate Optimised Content to Beat This Snippet:"),
            Notice::content("Boil for 6 to 7 minutes."),
        ];
        report.snippet = Some("6 minutes".into());
        report.content = Some("Boil for 6 to 7 minutes.".into());
        report.states.push(InteractionState::Done);
        report
    }

    #[test]
    fn text_rendering_labels_each_notice() {
        let mut out = Vec::new();
        render_text(&sample_report(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("[info] Fetching\n"));
        assert!(text.contains("[ok] Existing Featured Snippet from Google UK: 6 minutes"));
        assert!(text.contains("#### Generate Optimised Content to Beat This Snippet:"));
        assert!(text.contains("Optimised Content:\nBoil for 6 to 7 minutes."));
    }

    #[test]
    fn json_rendering_round_trips_key_fields() {
        let mut out = Vec::new();
        render_json(&sample_report(), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["keyword"], "boil an egg");
        assert_eq!(value["content"], "Boil for 6 to 7 minutes.");
        assert_eq!(value["states"][1], "done");
        assert_eq!(value["notices"][3]["level"], "content");
    }

    #[test]
    fn banner_contains_title() {
        let mut out = Vec::new();
        render_banner(&mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with(APP_TITLE));
    }
}
