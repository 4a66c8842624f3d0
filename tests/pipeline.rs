//! End-to-end runs against a stub resolver: no network, real image bytes,
//! real PDF output.

use proxyprint::{
    CardResolver, Diagnostic, LayoutConfig, Placement, PipelineConfig, PipelineError,
    ProxyPipeline, ResolveError, RunReport,
};
use proxyprint_scryfall::StatusCode;
use std::path::PathBuf;

static PNG_FACE: &[u8] = include_bytes!("fixtures/card.png");
static JPEG_FACE: &[u8] = include_bytes!("fixtures/card.jpg");

/// Serves fixture bytes by name; "Lost to Time" is the soft miss and
/// "Delver of Secrets" is double-faced.
struct StubResolver;

impl CardResolver for StubResolver {
    fn resolve(&self, name: &str) -> Result<Vec<Vec<u8>>, ResolveError> {
        match name {
            "Lost to Time" => Ok(Vec::new()),
            "Delver of Secrets" => Ok(vec![JPEG_FACE.to_vec(), JPEG_FACE.to_vec()]),
            "Corrupted Scan" => Ok(vec![b"garbage bytes".to_vec()]),
            _ => Ok(vec![PNG_FACE.to_vec()]),
        }
    }
}

/// Every lookup fails hard, as if the service were down.
struct DeadResolver;

impl CardResolver for DeadResolver {
    fn resolve(&self, name: &str) -> Result<Vec<Vec<u8>>, ResolveError> {
        Err(ResolveError::Http {
            name: name.to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        })
    }
}

/// Fails the first `failures` lookups, then recovers.
struct FlakyResolver {
    failures: u32,
    seen: std::sync::atomic::AtomicU32,
}

impl CardResolver for FlakyResolver {
    fn resolve(&self, name: &str) -> Result<Vec<Vec<u8>>, ResolveError> {
        let n = self
            .seen
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        if n < self.failures {
            Err(ResolveError::Http {
                name: name.to_string(),
                status: StatusCode::SERVICE_UNAVAILABLE,
            })
        } else {
            Ok(vec![PNG_FACE.to_vec()])
        }
    }
}

fn run(decklist: &str, config: PipelineConfig) -> (Result<RunReport, PipelineError>, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pdf");
    let result = ProxyPipeline::new(config).generate_to_file(decklist, &StubResolver, &path);
    let bytes = std::fs::read(&path).unwrap_or_default();
    // Keep the bytes check here so every test covers "file is a PDF".
    if result.is_ok() {
        assert!(bytes.starts_with(b"%PDF-1.7"));
    }
    (result, path)
}

#[test]
fn seven_cards_fit_one_page() {
    let (result, _) = run("4 Lightning Bolt\n3x Mountain", PipelineConfig::default());
    let report = result.unwrap();
    assert_eq!(report.requested, 7);
    assert_eq!(report.placed, 7);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.pages, 1);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn tenth_card_spills_to_a_second_page() {
    let decklist = "9 Mountain\n1 Island";
    let (result, _) = run(decklist, PipelineConfig::default());
    let report = result.unwrap();
    assert_eq!(report.placed, 10);
    assert_eq!(report.pages, 2);
}

#[test]
fn unresolved_card_is_skipped_not_fatal() {
    let decklist = "2 Mountain\n1 Lost to Time\n1 Island";
    let (result, _) = run(decklist, PipelineConfig::default());
    let report = result.unwrap();
    assert_eq!(report.requested, 4);
    assert_eq!(report.placed, 3);
    assert_eq!(report.skipped, 1);
    assert!(report.diagnostics.contains(&Diagnostic::CardNotFound {
        name: "Lost to Time".to_string()
    }));
}

#[test]
fn double_faced_card_takes_two_cells() {
    let decklist = "8 Mountain\n1 Delver of Secrets";
    let (result, _) = run(decklist, PipelineConfig::default());
    let report = result.unwrap();
    // 8 singles + 2 faces overflow the 3x3 grid onto a second page.
    assert_eq!(report.placed, 10);
    assert_eq!(report.pages, 2);
}

#[test]
fn undecodable_face_drops_only_that_face() {
    let decklist = "1 Corrupted Scan\n2 Mountain";
    let (result, _) = run(decklist, PipelineConfig::default());
    let report = result.unwrap();
    assert_eq!(report.placed, 2);
    assert!(
        report
            .diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::FaceUndecodable { name, .. } if name == "Corrupted Scan"))
    );
}

#[test]
fn set_annotations_strip_end_to_end() {
    let (result, _) = run("4 Lightning Bolt (LEA) 161", PipelineConfig::default());
    let report = result.unwrap();
    assert_eq!(report.placed, 4);
    assert!(report.diagnostics.contains(&Diagnostic::AnnotationStripped {
        line: 1,
        annotation: "(LEA) 161".to_string()
    }));
}

#[test]
fn centered_placement_produces_a_document() {
    let config = PipelineConfig {
        layout: LayoutConfig {
            placement: Placement::Centered,
            ..LayoutConfig::default()
        },
        ..PipelineConfig::default()
    };
    let (result, _) = run("9 Mountain", config);
    assert_eq!(result.unwrap().pages, 1);
}

#[test]
fn bad_geometry_fails_before_any_lookup() {
    let config = PipelineConfig {
        layout: LayoutConfig {
            scale: 1.0,
            placement: Placement::Centered,
            ..LayoutConfig::default()
        },
        ..PipelineConfig::default()
    };
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pdf");
    let result = ProxyPipeline::new(config).generate_to_file("1 Mountain", &DeadResolver, &path);
    assert!(matches!(result, Err(PipelineError::Layout(_))));
    // Rejected before drawing: no file at all.
    assert!(!path.exists());
}

#[test]
fn strict_mode_aborts_on_first_hard_failure() {
    let config = PipelineConfig {
        strict_lookup: true,
        ..PipelineConfig::default()
    };
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pdf");
    let result = ProxyPipeline::new(config).generate_to_file("4 Mountain", &DeadResolver, &path);
    assert!(matches!(result, Err(PipelineError::Resolve(_))));
}

#[test]
fn lenient_mode_gives_up_after_a_lookup_storm() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pdf");
    let result = ProxyPipeline::new(PipelineConfig::default()).generate_to_file(
        "8 Mountain",
        &DeadResolver,
        &path,
    );
    assert!(matches!(
        result,
        Err(PipelineError::LookupStorm { count: 5, .. })
    ));
}

#[test]
fn scattered_failures_stay_lenient() {
    let resolver = FlakyResolver {
        failures: 2,
        seen: std::sync::atomic::AtomicU32::new(0),
    };
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pdf");
    let report = ProxyPipeline::new(PipelineConfig::default())
        .generate_to_file("5 Mountain", &resolver, &path)
        .unwrap();
    assert_eq!(report.placed, 3);
    assert_eq!(report.skipped, 2);
    assert_eq!(
        report
            .diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::LookupFailed { .. }))
            .count(),
        2
    );
}
