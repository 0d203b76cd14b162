//! Integration tests for accession lookup and document projection.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use proptest::prelude::*;
use serde_json::{Value, json};

use pv_annotation::{
    AnnotationError, AnnotationSource, CatalogSelection, EbiProteinsClient, NotFoundReason,
    ProteinDocument, Result, fetch_annotation, search_catalog, select_accession,
};
use pv_model::{AnnotationFeature, NOT_AVAILABLE};

/// In-memory source keyed by accession; unknown accessions answer 404.
struct StubSource {
    documents: HashMap<&'static str, Value>,
}

impl StubSource {
    fn with(accession: &'static str, document: Value) -> Self {
        Self {
            documents: HashMap::from([(accession, document)]),
        }
    }
}

impl AnnotationSource for StubSource {
    fn fetch(&self, accession: &str) -> Result<ProteinDocument> {
        self.documents
            .get(accession)
            .cloned()
            .map(ProteinDocument::new)
            .ok_or_else(|| AnnotationError::not_found(accession, NotFoundReason::Status(404)))
    }
}

fn hemoglobin_document() -> Value {
    json!({
        "accession": "P69905",
        "protein": {"recommendedName": {"fullName": {"value": "Hemoglobin subunit alpha"}}},
        "organism": {"scientificName": "Homo sapiens"},
        "sequence": {"length": 142},
        "comments": [{"text": [{"value": "Involved in oxygen transport."}]}],
        "features": [{"type": "Chain", "begin": 1, "end": 141}]
    })
}

#[test]
fn hemoglobin_single_chain_feature() {
    let source = StubSource::with("P69905", hemoglobin_document());
    let annotation = fetch_annotation(&source, "P69905").unwrap();

    assert_eq!(annotation.accession, "P69905");
    assert_eq!(annotation.table.len(), 1);
    assert_eq!(
        annotation.table.features,
        vec![AnnotationFeature {
            kind: "Chain".to_string(),
            start: 1,
            end: 141,
        }]
    );
    insta::assert_json_snapshot!(annotation.summary, @r#"
    {
      "protein_name": "Hemoglobin subunit alpha",
      "organism": "Homo sapiens",
      "sequence_length": "142",
      "function": "Involved in oxygen transport."
    }
    "#);
}

#[test]
fn unknown_accession_is_not_found() {
    let source = StubSource::with("P69905", hemoglobin_document());
    let err = fetch_annotation(&source, "P00000").unwrap_err();
    assert!(matches!(
        err,
        AnnotationError::NotFound {
            reason: NotFoundReason::Status(404),
            ..
        }
    ));
    assert_eq!(
        err.user_message(),
        "No data found for the given Uniprot Accession ID."
    );
}

#[test]
fn blank_accession_never_reaches_source() {
    struct Unreachable;
    impl AnnotationSource for Unreachable {
        fn fetch(&self, _accession: &str) -> Result<ProteinDocument> {
            panic!("source must not be called for a blank accession");
        }
    }
    let err = fetch_annotation(&Unreachable, "   ").unwrap_err();
    assert!(matches!(
        err,
        AnnotationError::NotFound {
            reason: NotFoundReason::EmptyAccession,
            ..
        }
    ));
}

#[test]
fn missing_positions_default_to_zero() {
    let source = StubSource::with(
        "Q12345",
        json!({"features": [{"type": "Domain"}, {"begin": "5", "end": "9"}]}),
    );
    let annotation = fetch_annotation(&source, "Q12345").unwrap();
    let rows: Vec<(&str, i64, i64)> = annotation
        .table
        .features
        .iter()
        .map(|f| (f.kind.as_str(), f.start, f.end))
        .collect();
    assert_eq!(rows, vec![("Domain", 0, 0), (NOT_AVAILABLE, 5, 9)]);
    assert_eq!(annotation.summary.protein_name, NOT_AVAILABLE);
}

#[test]
fn hemoglobin_search_lists_globins() {
    let names: Vec<&str> = search_catalog("hemoglobin").iter().map(|e| e.name).collect();
    assert_eq!(
        names,
        vec![
            "Hemoglobin subunit alpha",
            "Hemoglobin subunit beta",
            "Hemoglobin subunit delta"
        ]
    );
}

#[test]
fn kinase_search_selects_first_match() {
    match select_accession("kinase", None) {
        CatalogSelection::Selected(entry) => assert_eq!(entry.id, "P49760"),
        other => panic!("unexpected selection: {other:?}"),
    }
}

#[test]
fn nonsense_search_has_no_results() {
    assert_eq!(
        select_accession("zzzz-not-a-protein", None),
        CatalogSelection::NoResults
    );
}

// --- HTTP client against a local one-shot server ---

/// Serve a single connection with `response`, holding it for `delay` first.
fn serve_once(response: String, delay: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            thread::sleep(delay);
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{addr}/proteins")
}

fn http_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\n\
         Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

fn local_client(endpoint: &str, timeout: Duration) -> EbiProteinsClient {
    let client = reqwest::blocking::Client::builder()
        .no_proxy()
        .timeout(timeout)
        .build()
        .unwrap();
    EbiProteinsClient::with_client(client, endpoint).unwrap()
}

#[test]
fn http_ok_yields_document() {
    let body = hemoglobin_document().to_string();
    let endpoint = serve_once(http_response("200 OK", &body), Duration::ZERO);
    let client = local_client(&endpoint, Duration::from_secs(10));
    let annotation = fetch_annotation(&client, "P69905").unwrap();
    assert_eq!(annotation.table.len(), 1);
    assert_eq!(annotation.summary.organism, "Homo sapiens");
}

#[test]
fn http_404_is_not_found() {
    let endpoint = serve_once(http_response("404 Not Found", ""), Duration::ZERO);
    let client = local_client(&endpoint, Duration::from_secs(10));
    let err = client.fetch("P00000").unwrap_err();
    assert!(matches!(
        err,
        AnnotationError::NotFound {
            reason: NotFoundReason::Status(404),
            ..
        }
    ));
}

#[test]
fn http_invalid_json_is_not_found() {
    let endpoint = serve_once(http_response("200 OK", "<html>"), Duration::ZERO);
    let client = local_client(&endpoint, Duration::from_secs(10));
    let err = client.fetch("P69905").unwrap_err();
    assert!(matches!(
        err,
        AnnotationError::NotFound {
            reason: NotFoundReason::InvalidBody(_),
            ..
        }
    ));
}

#[test]
fn http_timeout_is_not_found() {
    let endpoint = serve_once(http_response("200 OK", "{}"), Duration::from_secs(5));
    let client = local_client(&endpoint, Duration::from_millis(500));
    let err = client.fetch("P69905").unwrap_err();
    assert!(matches!(
        err,
        AnnotationError::NotFound {
            reason: NotFoundReason::Timeout,
            ..
        }
    ));
}

proptest! {
    #[test]
    fn search_ignores_case(term in "(hemo|kinase|protein|chain)") {
        let lower: Vec<&str> = search_catalog(&term.to_lowercase()).iter().map(|e| e.id).collect();
        let upper: Vec<&str> = search_catalog(&term.to_uppercase()).iter().map(|e| e.id).collect();
        prop_assert!(!lower.is_empty());
        prop_assert_eq!(lower, upper);
    }
}
