//! End-to-end import runs over in-memory workbooks, covering the example
//! scenarios the engine is expected to reproduce exactly.

use pretty_assertions::assert_eq;
use takeoff_core::{
    CellValue, EstimateImporter, ImporterSettings, Sheet, SheetKind, Workbook,
};

fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

fn num(n: f64) -> CellValue {
    CellValue::Number(n)
}

fn measurement_sheet(name: &str, items: &[(&str, f64, f64, f64, f64)]) -> Sheet {
    let mut rows = vec![vec![
        text("Item No"),
        text("Particulars"),
        text("Nos"),
        text("Length"),
        text("Breadth"),
        text("Height"),
        text("Unit"),
    ]];
    for (i, (description, nos, length, breadth, height)) in items.iter().enumerate() {
        rows.push(vec![
            num((i + 1) as f64),
            text(description),
            num(*nos),
            num(*length),
            num(*breadth),
            num(*height),
            text("Cum"),
        ]);
    }
    rows.push(vec![CellValue::Empty, text("Grand Total")]);
    Sheet::from_rows(name, rows)
}

fn abstract_sheet(name: &str, items: &[(&str, f64, f64)]) -> Sheet {
    let mut rows = vec![vec![
        text("SSR Code"),
        text("Description"),
        text("Unit"),
        text("Quantity"),
        text("Rate"),
        text("Amount"),
    ]];
    for (i, (description, quantity, rate)) in items.iter().enumerate() {
        rows.push(vec![
            text(&format!("SSR-{}", i + 1)),
            text(description),
            text("Cum"),
            num(*quantity),
            num(*rate),
            CellValue::Empty,
        ]);
    }
    Sheet::from_rows(name, rows)
}

#[test]
fn suffixed_sheet_pair_imports_end_to_end() {
    let workbook = Workbook::from_sheets(vec![
        measurement_sheet(
            "GF1_MES",
            &[
                ("Cement concrete 1:2:4 work for foundation trenches", 1.0, 45.0, 8.0, 0.15),
                ("Brick work in cement mortar superstructure", 4.0, 10.0, 0.23, 3.0),
            ],
        ),
        abstract_sheet(
            "GF1_ABS",
            &[
                ("Cement concrete work in foundation", 54.0, 4500.0),
                ("Brick work in cement mortar", 27.6, 6200.0),
            ],
        ),
    ])
    .unwrap();

    let result = EstimateImporter::with_defaults().import_workbook(&workbook);

    assert_eq!(result.pairings.len(), 1);
    let pairing = &result.pairings[0];
    assert_eq!(pairing.part_name, "GF1");
    assert_eq!(pairing.measurement_sheet, "GF1_MES");
    assert_eq!(pairing.abstract_sheet, "GF1_ABS");
    assert_eq!(pairing.confidence, 1.0);

    let part = &result.parts[0];
    assert_eq!(part.measurements.len(), 2);
    assert_eq!(part.abstracts.len(), 2);
    assert_eq!(part.linkages.len(), 2);

    // 1 × 45 × 8 × 0.15 = 54 Cum.
    assert!((part.measurements[0].total - 54.0).abs() < 1e-6);
    // The "Grand Total" row is excluded, not imported.
    assert!(part
        .measurements
        .iter()
        .all(|m| !m.description.to_lowercase().contains("total")));

    assert_eq!(result.report.measurements_imported, 2);
    assert_eq!(result.report.abstracts_imported, 2);
    assert_eq!(result.report.linkages_created, 2);
    assert_eq!(result.report.unlinked_abstracts, 0);
    assert!(result.report.rows_skipped >= 1);
}

#[test]
fn linkage_confidence_stays_in_bounds_and_sorted() {
    let workbook = Workbook::from_sheets(vec![
        measurement_sheet(
            "Roof_MES",
            &[
                ("Plaster work in cement mortar to ceiling", 2.0, 12.0, 4.0, 0.0),
                ("Plaster work in cement mortar 1:4 to walls", 6.0, 10.0, 3.0, 0.0),
                ("Painting two coats", 1.0, 50.0, 0.0, 0.0),
            ],
        ),
        abstract_sheet("Roof_ABS", &[("Plaster work in cement mortar", 100.0, 320.0)]),
    ])
    .unwrap();

    let result = EstimateImporter::with_defaults().import_workbook(&workbook);
    let linkages = &result.parts[0].linkages;
    assert_eq!(linkages.len(), 1);

    let linkage = &linkages[0];
    assert!(linkage.confidence > 0.3 && linkage.confidence <= 1.0);
    assert_eq!(linkage.confidence, linkage.matched_measurements[0].similarity);
    for pair in linkage.matched_measurements.windows(2) {
        assert!(pair[0].similarity >= pair[1].similarity);
    }
    let expected: f64 = linkage.matched_measurements.iter().map(|m| m.total).sum();
    assert!((linkage.total_quantity - expected).abs() < 1e-6);
}

#[test]
fn unrecognizable_workbook_is_not_an_error() {
    let workbook = Workbook::from_sheets(vec![
        Sheet::from_rows("Notes", vec![vec![text("site visit photos")]]),
        Sheet::from_rows("Contacts", vec![vec![text("engineer"), text("phone")]]),
    ])
    .unwrap();

    let result = EstimateImporter::with_defaults().import_workbook(&workbook);

    assert_eq!(result.pairings.len(), 0);
    assert_eq!(result.parts.len(), 0);
    assert_eq!(result.other_sheets.len(), 2);
    for c in &result.classifications {
        assert_eq!(c.kind, SheetKind::Other);
        assert_eq!(c.confidence, 0.0);
    }
    assert_eq!(result.report.linkages_created, 0);
    assert_eq!(result.report.sheets_processed, 2);
}

#[test]
fn general_abstract_and_reports_are_kept_as_other_sheets() {
    let workbook = Workbook::from_sheets(vec![
        Sheet::from_rows("General Abstract", vec![vec![text("Project summary")]]),
        measurement_sheet("First Floor_MES", &[("Earthwork in excavation", 1.0, 20.0, 10.0, 1.5)]),
        abstract_sheet("First Floor_ABS", &[("Earthwork in excavation", 300.0, 180.0)]),
        Sheet::from_rows("Technical Report", vec![vec![text("Soil bearing capacity")]]),
    ])
    .unwrap();

    let result = EstimateImporter::with_defaults().import_workbook(&workbook);

    assert_eq!(result.pairings.len(), 1);
    assert_eq!(result.pairings[0].part_name, "First Floor");
    assert!(result.other_sheets.contains(&"General Abstract".to_string()));
    assert!(result.other_sheets.contains(&"Technical Report".to_string()));

    let kinds: Vec<SheetKind> = result.classifications.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SheetKind::GeneralAbstract,
            SheetKind::Measurement,
            SheetKind::Abstract,
            SheetKind::TechnicalReport,
        ]
    );
}

#[test]
fn headerless_sheet_degrades_with_warning_but_still_contributes() {
    // No recognizable header row: detection falls back to the configured
    // default and whatever parses from there is kept.
    let sheet = Sheet::from_rows(
        "Store_MES",
        vec![
            vec![text("Store shed workings")],
            vec![text("(unstructured notes)")],
            vec![
                text("Item No"),
                text("Particulars"),
                text("Nos"),
                text("Length"),
                text("Breadth"),
                text("Height"),
            ],
            vec![num(1.0), text("Random rubble masonry"), num(2.0), num(6.0), num(0.45), num(1.0)],
        ],
    );
    // Header at row 2 is found by keyword count; pair it with an abstract
    // sheet whose header cannot be detected.
    let odd_abstract = Sheet::from_rows(
        "Store_ABS",
        vec![
            vec![text("Store shed cost summary")],
            vec![text("(prepared by site office)")],
            vec![text("Work"), text("Per"), text("Qnty"), text("Price")],
            vec![text("Random rubble masonry"), text("Cum"), num(5.4), num(2100.0)],
        ],
    );
    let workbook = Workbook::from_sheets(vec![sheet, odd_abstract]).unwrap();

    let settings = ImporterSettings::new().with_default_header_row(2);
    let result = EstimateImporter::new(settings).import_workbook(&workbook);

    assert_eq!(result.pairings.len(), 1);
    let part = &result.parts[0];
    // The measurement side parsed fully.
    assert_eq!(part.measurements.len(), 1);
    assert!((part.measurements[0].total - 5.4).abs() < 1e-6);
    // The abstract side fell back and a warning was recorded.
    assert!(result
        .report
        .warnings
        .iter()
        .any(|w| w.contains("Store_ABS")));
}

#[test]
fn progress_milestones_reach_completion() {
    use std::sync::{Arc, Mutex};

    let milestones: Arc<Mutex<Vec<(u8, String)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&milestones);
    let settings = ImporterSettings::new()
        .on_progress(move |pct, msg| sink.lock().unwrap().push((pct, msg.to_string())));

    let workbook = Workbook::from_sheets(vec![
        measurement_sheet("GF1_MES", &[("Earthwork in excavation", 1.0, 20.0, 10.0, 1.5)]),
        abstract_sheet("GF1_ABS", &[("Earthwork in excavation", 300.0, 180.0)]),
    ])
    .unwrap();

    EstimateImporter::new(settings).import_workbook(&workbook);

    let seen = milestones.lock().unwrap();
    assert_eq!(seen.first().map(|(p, _)| *p), Some(40));
    assert_eq!(seen.last().map(|(p, _)| *p), Some(100));
    assert!(seen.iter().any(|(_, m)| m.contains("GF1")));
    let percents: Vec<u8> = seen.iter().map(|(p, _)| *p).collect();
    let mut sorted = percents.clone();
    sorted.sort_unstable();
    assert_eq!(percents, sorted);
}

#[test]
fn result_round_trips_through_json() {
    let workbook = Workbook::from_sheets(vec![
        measurement_sheet("GF1_MES", &[("Earthwork in excavation", 1.0, 20.0, 10.0, 1.5)]),
        abstract_sheet("GF1_ABS", &[("Earthwork in excavation", 300.0, 180.0)]),
    ])
    .unwrap();
    let result = EstimateImporter::with_defaults().import_workbook(&workbook);

    let json = result.to_json();
    let parsed: takeoff_core::ImportResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.pairings, result.pairings);
    assert_eq!(parsed.parts, result.parts);
}
