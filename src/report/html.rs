use crate::fetch::ArchiveUrls;
use crate::pipeline::{ClassificationResult, Decision, UsefulnessClassifier};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::io::{self, Write};

const BASE_HEADERS: [&str; 3] = ["Cover Image", "Useful?", "Identifier"];

const STYLE: &str = r#"            body { font-family: sans-serif; }
            th { text-align: left; }
            td { padding: 4px; }
            .useful { font-weight: bold; }
            .not-useful { color: gray }
            .error { color: red }"#;

/// Column set of a report, fixed for the whole run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLayout {
    diagnostics_header: Option<String>,
}

impl ReportLayout {
    pub fn new(diagnostics_header: Option<&str>) -> Self {
        Self {
            diagnostics_header: diagnostics_header.map(str::to_string),
        }
    }

    pub fn for_classifier(classifier: &dyn UsefulnessClassifier) -> Self {
        Self::new(classifier.diagnostics_header())
    }

    pub fn headers(&self) -> Vec<&str> {
        let mut headers: Vec<&str> = BASE_HEADERS.to_vec();
        if let Some(ref header) = self.diagnostics_header {
            headers.push(header.as_str());
        }
        headers
    }

    pub fn column_count(&self) -> usize {
        BASE_HEADERS.len() + usize::from(self.diagnostics_header.is_some())
    }

    pub fn has_diagnostics(&self) -> bool {
        self.diagnostics_header.is_some()
    }
}

/// Collects results in arrival order
#[derive(Debug)]
pub struct ReportBuilder {
    layout: ReportLayout,
    rows: Vec<ClassificationResult>,
}

impl ReportBuilder {
    pub fn new(layout: ReportLayout) -> Self {
        Self {
            layout,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, result: ClassificationResult) {
        self.rows.push(result);
    }

    pub fn build(self) -> Report {
        Report {
            layout: self.layout,
            rows: self.rows,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Report {
    layout: ReportLayout,
    rows: Vec<ClassificationResult>,
}

impl Report {
    pub fn layout(&self) -> &ReportLayout {
        &self.layout
    }

    pub fn rows(&self) -> &[ClassificationResult] {
        &self.rows
    }

    pub fn count(&self, decision: Decision) -> usize {
        self.rows.iter().filter(|r| r.decision == decision).count()
    }
}

/// Renders a finished report as a standalone HTML page
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    urls: ArchiveUrls,
    title: String,
}

impl HtmlRenderer {
    pub fn new(urls: ArchiveUrls, title: &str) -> Self {
        Self {
            urls,
            title: title.to_string(),
        }
    }

    /// Table cells for one row; always `layout.column_count()` of them
    pub fn row_cells(&self, layout: &ReportLayout, result: &ClassificationResult) -> Vec<String> {
        let identifier = &result.identifier;
        let mut cells = vec![
            format!(
                r#"<img src="{}" alt="">"#,
                encode_double_quoted_attribute(&self.urls.image_url(identifier))
            ),
            badge(result.decision).to_string(),
            format!(
                r#"<a href="{}">{}</a>"#,
                encode_double_quoted_attribute(&self.urls.details_url(identifier)),
                encode_text(identifier.as_str())
            ),
        ];

        if layout.has_diagnostics() {
            let diagnostics = if result.diagnostics.is_empty() {
                String::new()
            } else {
                format!("({})", result.diagnostics.join(", "))
            };
            cells.push(diagnostics);
        }

        cells
    }

    pub fn write<W: Write>(&self, report: &Report, out: &mut W) -> io::Result<()> {
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html>")?;
        writeln!(out, "    <head>")?;
        writeln!(out, "        <title>{}</title>", encode_text(&self.title))?;
        writeln!(out, "        <style>\n{}\n        </style>", STYLE)?;
        writeln!(out, "    </head>")?;
        writeln!(out, "    <body>")?;
        writeln!(out, "        <table>")?;

        writeln!(out, "            <tr>")?;
        for header in report.layout().headers() {
            writeln!(out, "                <th>{}</th>", encode_text(header))?;
        }
        writeln!(out, "            </tr>")?;

        for result in report.rows() {
            writeln!(out, "<tr>")?;
            for cell in self.row_cells(report.layout(), result) {
                writeln!(out, "<td>{}</td>", cell)?;
            }
            writeln!(out, "</tr>")?;
        }

        writeln!(out, "        </table>")?;
        writeln!(out, "    </body>")?;
        writeln!(out, "</html>")?;
        out.flush()
    }

    pub fn render(&self, report: &Report) -> io::Result<String> {
        let mut out = Vec::new();
        self.write(report, &mut out)?;
        String::from_utf8(out).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

fn badge(decision: Decision) -> &'static str {
    match decision {
        Decision::Useful => r#"<span class="useful">USEFUL</span>"#,
        Decision::NotUseful => r#"<span class="not-useful">not useful</span>"#,
        Decision::PlaceholderNotFound => r#"<span class="not-useful">not useful</span>"#,
        Decision::FetchError => r#"<span class="error">error reading</span>"#,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{Classification, Identifier};

    fn sample_rows() -> Vec<ClassificationResult> {
        vec![
            ClassificationResult::classified(
                Identifier::from("art"),
                Classification {
                    useful: true,
                    score: 40.0,
                    diagnostics: vec!["40.00".into(), "3.10".into(), "2.00".into()],
                },
            ),
            ClassificationResult::fetch_error(Identifier::from("broken")),
            ClassificationResult::placeholder(Identifier::from("gone")),
        ]
    }

    fn build(layout: ReportLayout) -> Report {
        let mut builder = ReportBuilder::new(layout);
        for row in sample_rows() {
            builder.push(row);
        }
        builder.build()
    }

    #[test]
    fn test_rows_are_rectangular() {
        let renderer = HtmlRenderer::new(ArchiveUrls::default(), "Cover Analyzer");
        for layout in [ReportLayout::new(None), ReportLayout::new(Some("Std Deviation (R, G, B)"))] {
            let report = build(layout.clone());
            for row in report.rows() {
                assert_eq!(renderer.row_cells(&layout, row).len(), layout.column_count());
            }
            assert_eq!(layout.headers().len(), layout.column_count());
        }
    }

    #[test]
    fn test_error_row_keeps_identifier_link_and_empty_diagnostics() {
        let renderer = HtmlRenderer::new(ArchiveUrls::default(), "Cover Analyzer");
        let layout = ReportLayout::new(Some("Std Deviation (R, G, B)"));
        let cells = renderer.row_cells(&layout, &ClassificationResult::fetch_error(Identifier::from("broken")));

        assert_eq!(cells[1], r#"<span class="error">error reading</span>"#);
        assert_eq!(cells[2], r#"<a href="https://archive.org/details/broken">broken</a>"#);
        assert_eq!(cells[3], "");
    }

    #[test]
    fn test_html_document_structure() {
        let renderer = HtmlRenderer::new(ArchiveUrls::default(), "Cover Analyzer");
        let report = build(ReportLayout::new(Some("Std Deviation (R, G, B)")));
        let html = renderer.render(&report).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Cover Analyzer</title>"));
        assert!(html.contains(".error { color: red }"));
        assert!(html.contains(r#"<img src="https://archive.org/services/img/art" alt="">"#));
        assert!(html.contains("<td>(40.00, 3.10, 2.00)</td>"));
        assert_eq!(html.matches("<tr>").count(), 4);
        assert!(html.find("art").unwrap() < html.find("broken").unwrap());
        assert!(html.find("broken").unwrap() < html.find("gone").unwrap());
    }

    #[test]
    fn test_identifier_is_escaped() {
        let renderer = HtmlRenderer::new(ArchiveUrls::default(), "Cover Analyzer");
        let layout = ReportLayout::new(None);
        let cells = renderer.row_cells(&layout, &ClassificationResult::fetch_error(Identifier::from("<b>x\"")));
        assert!(cells[2].contains("&lt;b&gt;"));
        assert!(cells[2].contains("&quot;"));
        assert!(!cells[2].contains("<b>"));
    }

    #[test]
    fn test_placeholder_row_renders_as_not_useful() {
        let renderer = HtmlRenderer::new(ArchiveUrls::default(), "Cover Analyzer");
        let layout = ReportLayout::new(None);
        let cells = renderer.row_cells(&layout, &ClassificationResult::placeholder(Identifier::from("gone")));

        assert_eq!(cells[1], r#"<span class="not-useful">not useful</span>"#);
        assert_eq!(cells[2], r#"<a href="https://archive.org/details/gone">gone</a>"#);
    }
}
