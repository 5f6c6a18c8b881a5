use crate::data::decode_image;
use crate::error::CoverError;
use crate::logging::ItemSpan;
use crate::pipeline::{
    Classification, ClassificationResult, Decision, Fetched, Identifier, IdentifierReader,
    ImageSource, Progress, UsefulnessClassifier,
};
use crate::report::{Report, ReportBuilder, ReportLayout, TitlePageList};
use crate::Result;
use std::io::{BufRead, Write};

/// What a successfully fetched item turned into
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    Placeholder,
    Classified(Classification),
}

/// Sequential fetch, decode, classify and record loop.
///
/// Items are handled strictly one after the other. A failure on one item
/// becomes a `FetchError` row and never reaches the next item.
pub struct Driver<'a> {
    source: &'a dyn ImageSource,
    classifier: &'a dyn UsefulnessClassifier,
}

impl<'a> Driver<'a> {
    pub fn new(source: &'a dyn ImageSource, classifier: &'a dyn UsefulnessClassifier) -> Self {
        Self { source, classifier }
    }

    /// Fetch, then either short-circuit on the placeholder or decode and classify
    pub fn evaluate(&self, identifier: &Identifier) -> std::result::Result<Evaluation, CoverError> {
        let bytes = match self.source.fetch(identifier)? {
            Fetched::Placeholder => return Ok(Evaluation::Placeholder),
            Fetched::Image(bytes) => bytes,
        };

        let grid = decode_image(&bytes)?;
        drop(bytes);

        let classification = self
            .classifier
            .classify(&grid)
            .map_err(|e| CoverError::Classify(format!("{:#}", e)))?;
        Ok(Evaluation::Classified(classification))
    }

    /// Process every identifier from `input` and return the finished report.
    ///
    /// Only input read errors and side-channel write errors abort the run.
    pub fn run<R, P, T>(
        &self,
        input: R,
        progress: &mut Progress<P>,
        mut title_pages: Option<&mut TitlePageList<T>>,
    ) -> Result<Report>
    where
        R: BufRead,
        P: Write,
        T: Write,
    {
        let mut report = ReportBuilder::new(ReportLayout::for_classifier(self.classifier));

        for (index, identifier) in IdentifierReader::new(input).enumerate() {
            let identifier = identifier?;
            progress.item()?;

            let span = ItemSpan::new(index, identifier.as_str());
            let evaluation = span.span().in_scope(|| self.evaluate(&identifier));
            let result = match evaluation {
                Ok(Evaluation::Placeholder) => ClassificationResult::placeholder(identifier),
                Ok(Evaluation::Classified(classification)) => {
                    ClassificationResult::classified(identifier, classification)
                }
                Err(error) => {
                    span.record_failure(&error);
                    progress.error(&identifier, &error)?;
                    ClassificationResult::fetch_error(identifier)
                }
            };

            if result.decision == Decision::NotUseful
                && self.classifier.records_title_pages()
            {
                if let Some(list) = title_pages.as_deref_mut() {
                    list.record(&result.identifier)?;
                }
            }

            span.finish(result.decision, result.score);
            report.push(result);
        }

        Ok(report.build())
    }
}
