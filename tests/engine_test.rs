//! Integration tests for document-level execution.

use std::io::Write;

use relayout::engine::{collect_document, reconstruct_document, reconstruct_streaming};
use relayout::{
    pages_from_file, pages_from_str, reconstruct_pages, CancellationToken, EngineOptions, Error,
    PageInput, PageSelection, RawToken, Relayout, Transform,
};

fn create_sample_pages(count: usize) -> Vec<PageInput> {
    (0..count)
        .map(|i| {
            let mut page = PageInput::letter();
            page.push(
                RawToken::new(format!("Header{}", i), Transform::scaled_at(9.0, 72.0, 760.0))
                    .with_width(45.0),
            );
            for line in 0..10 {
                let y = 650.0 - line as f32 * 16.0;
                page.push(
                    RawToken::new("Label", Transform::scaled_at(11.0, 72.0, y)).with_width(28.0),
                );
                page.push(
                    RawToken::new(format!("{}", i * 100 + line), Transform::scaled_at(11.0, 320.0, y))
                        .with_width(18.0),
                );
            }
            page.push(
                RawToken::new(format!("{}", i + 1), Transform::scaled_at(9.0, 300.0, 30.0))
                    .with_width(6.0),
            );
            page
        })
        .collect()
}

#[test]
fn test_parallel_matches_sequential() {
    let pages = create_sample_pages(16);
    let cancel = CancellationToken::new();

    let parallel = reconstruct_document(&pages, &EngineOptions::new(), &cancel).unwrap();
    let sequential =
        reconstruct_document(&pages, &EngineOptions::new().sequential(), &cancel).unwrap();
    let pooled = reconstruct_document(
        &pages,
        &EngineOptions::new().with_max_threads(Some(2)),
        &cancel,
    )
    .unwrap();

    assert_eq!(parallel, sequential);
    assert_eq!(parallel, pooled);
}

#[test]
fn test_pages_keep_their_own_content() {
    let doc = reconstruct_pages(&create_sample_pages(6)).unwrap();

    assert_eq!(doc.page_count(), 6);
    for (i, page) in doc.pages.iter().enumerate() {
        assert_eq!(page.header_blocks[0].plain_text(), format!("Header{}", i));
        assert_eq!(page.footer_blocks[0].plain_text(), format!("{}", i + 1));
        assert_eq!(page.body_blocks.len(), 10);
        assert!(page.body_blocks.iter().all(|b| b.is_grid_row()));
    }
}

#[test]
fn test_page_selection_from_string() {
    let selection = PageSelection::parse("2-3").unwrap();
    let result = Relayout::new()
        .with_pages(selection)
        .run(&create_sample_pages(5))
        .unwrap();

    let indices: Vec<usize> = result.document.pages.iter().map(|p| p.index).collect();
    assert_eq!(indices, vec![1, 2]);
}

#[test]
fn test_streaming_collects_in_page_order() {
    let rx = reconstruct_streaming(
        create_sample_pages(10),
        &EngineOptions::new().with_max_threads(Some(4)),
        &CancellationToken::new(),
    )
    .unwrap();

    let mut arrived = Vec::new();
    let doc = collect_document(rx, |r| arrived.push(r.index)).unwrap();

    arrived.sort();
    assert_eq!(arrived, (0..10).collect::<Vec<_>>());
    assert_eq!(
        doc.pages.iter().map(|p| p.index).collect::<Vec<_>>(),
        (0..10).collect::<Vec<_>>()
    );
}

#[test]
fn test_streaming_sequential() {
    let rx = reconstruct_streaming(
        create_sample_pages(3),
        &EngineOptions::new().sequential(),
        &CancellationToken::new(),
    )
    .unwrap();

    let order: Vec<usize> = rx.iter().map(|r| r.index).collect();
    assert_eq!(order, vec![0, 1, 2]);
}

#[test]
fn test_cancelled_streaming_reports_every_page() {
    let cancel = CancellationToken::new();
    cancel.cancel();

    let rx = reconstruct_streaming(create_sample_pages(4), &EngineOptions::new(), &cancel)
        .unwrap();
    let results: Vec<_> = rx.iter().collect();

    assert_eq!(results.len(), 4);
    assert!(results
        .iter()
        .all(|r| matches!(r.result, Err(Error::Cancelled { page }) if page == r.index)));
}

#[test]
fn test_collect_document_reports_lowest_failing_page() {
    let cancel = CancellationToken::new();
    cancel.cancel();

    let rx = reconstruct_streaming(create_sample_pages(4), &EngineOptions::new(), &cancel)
        .unwrap();
    let err = collect_document(rx, |_| {}).unwrap_err();
    assert!(matches!(err, Error::Cancelled { page: 0 }));
}

#[test]
fn test_json_contract_round_trip() {
    let json = r#"[
        {
            "pageWidth": 600,
            "pageHeight": 792,
            "tokens": [
                { "text": "Q1", "transform": [12, 0, 0, 12, 50, 700], "width": 40 },
                { "text": "Q2", "transform": [12, 0, 0, 12, 300, 700], "width": 40 },
                { "text": "Q3", "transform": [12, 0, 0, 12, 550, 700], "width": 40 }
            ]
        }
    ]"#;
    let pages = pages_from_str(json).unwrap();
    let result = Relayout::new().run(&pages).unwrap();
    let out: serde_json::Value =
        serde_json::from_str(&result.to_json(relayout::JsonFormat::Compact).unwrap()).unwrap();

    let block = &out["pages"][0]["bodyBlocks"][0];
    assert_eq!(block["kind"], "gridRow");
    assert_eq!(block["cells"].as_array().map(Vec::len), Some(3));
    assert!(out["pages"][0]["headerBlocks"].as_array().unwrap().is_empty());
}

#[test]
fn test_pages_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "pageWidth": 612, "pageHeight": 792, "tokens": [
            {{ "text": "solo", "transform": [10, 0, 0, 10, 72, 400] }}
        ] }}"#
    )
    .unwrap();

    let pages = pages_from_file(file.path()).unwrap();
    assert_eq!(pages.len(), 1);

    let doc = relayout::reconstruct_file(file.path()).unwrap();
    assert_eq!(doc.plain_text(), "solo");
}
