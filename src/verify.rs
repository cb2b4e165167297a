// src/verify.rs
use tracing::{info, instrument, warn};

use crate::fetch::CsvSource;
use crate::process::lookup::{lookup, Lookup, Query, Record};
use crate::process::parse::parse_csv;
use crate::render::{render, searching, Display};

/// How one submission settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found(Record),
    NotFound(Query),
    EmptyQuery,
    EmptyDataset,
    NetworkFailure,
}

impl Outcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    pub fn record(&self) -> Option<&Record> {
        match self {
            Outcome::Found(r) => Some(r),
            _ => None,
        }
    }
}

/// The result region. Each call replaces whatever was shown before.
pub trait ResultSink {
    fn show(&mut self, display: &Display);
}

impl<F: FnMut(&Display)> ResultSink for F {
    fn show(&mut self, display: &Display) {
        self(display)
    }
}

/// Run one submission: normalize `input`, fetch once, parse, scan, and
/// finish with a single final write to `sink`.
#[instrument(level = "info", skip_all)]
pub async fn verify<S, K>(source: &S, sink: &mut K, input: &str) -> Outcome
where
    S: CsvSource + ?Sized,
    K: ResultSink + ?Sized,
{
    let query = Query::normalize(input);
    if query.is_empty() {
        let outcome = Outcome::EmptyQuery;
        sink.show(&render(&outcome));
        return outcome;
    }

    sink.show(&searching());
    let outcome = settle(source, query).await;
    info!(outcome = outcome_id(&outcome), "verification settled");
    sink.show(&render(&outcome));
    outcome
}

async fn settle<S: CsvSource + ?Sized>(source: &S, query: Query) -> Outcome {
    let text = match source.fetch_text().await {
        Ok(text) => text,
        Err(err) => {
            warn!("fetching verification data failed: {}", err);
            return Outcome::NetworkFailure;
        }
    };

    let table = parse_csv(&text);
    if !table.has_data() {
        return Outcome::EmptyDataset;
    }

    match lookup(&table, &query) {
        Lookup::Found(record) => Outcome::Found(record),
        Lookup::NotFound => Outcome::NotFound(query),
    }
}

fn outcome_id(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Found(_) => "found",
        Outcome::NotFound(_) => "not_found",
        Outcome::EmptyQuery => "empty_query",
        Outcome::EmptyDataset => "empty_dataset",
        Outcome::NetworkFailure => "network_failure",
    }
}

/// Owns a source and runs submissions against it one after another.
pub struct Verifier<S> {
    source: S,
}

impl<S: CsvSource> Verifier<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn submit<K: ResultSink + ?Sized>(&self, sink: &mut K, input: &str) -> Outcome {
        verify(&self.source, sink, input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, VerifyError};
    use crate::render::{DisplayKind, MSG_EMPTY_DATASET, MSG_EMPTY_QUERY, MSG_NETWORK};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeSource {
        body: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl FakeSource {
        fn ok(body: &'static str) -> Self {
            Self {
                body: Some(body),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                body: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CsvSource for FakeSource {
        async fn fetch_text(&self) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.body
                .map(str::to_string)
                .ok_or_else(|| VerifyError::Network("HTTP error: 500".into()))
        }
    }

    #[derive(Default)]
    struct Recorder(Vec<Display>);

    impl ResultSink for Recorder {
        fn show(&mut self, display: &Display) {
            self.0.push(display.clone());
        }
    }

    const SHEET: &str = "ID,Name,Degree,Concentration,Year\n\
                         AB1,Alice,BSc,CS,2020\n\
                         XS9,<script>x</script>,MA,Art & Design,2019\n";

    #[tokio::test]
    async fn found_writes_searching_then_success() {
        let source = FakeSource::ok(SHEET);
        let mut sink = Recorder::default();

        let outcome = verify(&source, &mut sink, "  ab1 ").await;
        assert!(outcome.is_found());
        assert_eq!(outcome.record().map(|r| r.name.as_str()), Some("Alice"));
        assert_eq!(source.calls(), 1);
        assert_eq!(sink.0.len(), 2);
        assert_eq!(sink.0[0].kind, DisplayKind::Info);
        assert_eq!(sink.0[1].kind, DisplayKind::Success);
    }

    #[tokio::test]
    async fn empty_query_skips_fetch() {
        let source = FakeSource::ok(SHEET);
        let mut sink = Recorder::default();

        assert_eq!(verify(&source, &mut sink, "   ").await, Outcome::EmptyQuery);
        assert_eq!(source.calls(), 0);
        assert_eq!(sink.0.len(), 1);
        assert_eq!(sink.0[0].html, MSG_EMPTY_QUERY);
    }

    #[tokio::test]
    async fn network_failure_renders_proxy_hint() {
        let source = FakeSource::failing();
        let mut sink = Recorder::default();

        assert_eq!(verify(&source, &mut sink, "AB1").await, Outcome::NetworkFailure);
        assert_eq!(sink.0.last().map(|d| d.html.as_str()), Some(MSG_NETWORK));
    }

    #[tokio::test]
    async fn header_only_sheet_is_empty_dataset() {
        for body in ["ID,Name\n", "", "\n\n"] {
            let source = FakeSource::ok(body);
            let mut sink = Recorder::default();
            assert_eq!(verify(&source, &mut sink, "AB1").await, Outcome::EmptyDataset);
            assert_eq!(sink.0.last().map(|d| d.html.as_str()), Some(MSG_EMPTY_DATASET));
        }
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let source = FakeSource::ok(SHEET);
        let mut sink = Recorder::default();

        let outcome = verify(&source, &mut sink, "zz").await;
        assert_eq!(outcome, Outcome::NotFound(Query::normalize("ZZ")));
        assert_eq!(
            sink.0.last().map(|d| d.html.as_str()),
            Some("❌ No record found for ID: ZZ")
        );
    }

    #[tokio::test]
    async fn sheet_markup_never_reaches_output_raw() {
        let source = FakeSource::ok(SHEET);
        let mut sink = Recorder::default();

        verify(&source, &mut sink, "xs9").await;
        let html = &sink.0[1].html;
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(html.contains("Art &amp; Design"));
    }

    #[tokio::test]
    async fn each_submission_fetches_again() {
        let verifier = Verifier::new(FakeSource::ok(SHEET));
        let mut last = None;
        let mut sink = |d: &Display| last = Some(d.clone());

        verifier.submit(&mut sink, "ab1").await;
        verifier.submit(&mut sink, "zz").await;
        assert_eq!(verifier.source().calls(), 2);
        assert_eq!(last.map(|d| d.kind), Some(DisplayKind::Error));
    }
}
