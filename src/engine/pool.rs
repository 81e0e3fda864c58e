//! Page-parallel execution.
//!
//! Pages share nothing, so each one is a single task on a rayon pool and the
//! document is put back together by page index once the workers are done.

use std::thread;

use crossbeam_channel::{unbounded, Receiver};
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::layout::LayoutEngine;
use crate::model::{Document, Page, PageInput};

use super::{CancellationToken, EngineOptions};

/// Outcome of one page, as delivered by [`reconstruct_streaming`].
#[derive(Debug)]
pub struct PageResult {
    /// Zero-based index of the page in the input
    pub index: usize,
    /// The page, or why it could not be built
    pub result: Result<Page>,
}

/// Reconstruct the selected pages and return them in input order.
///
/// The first failing page (lowest index) decides the error.
pub fn reconstruct_document(
    inputs: &[PageInput],
    options: &EngineOptions,
    cancel: &CancellationToken,
) -> Result<Document> {
    let engine = LayoutEngine::with_config(options.layout.clone())?;

    let selected: Vec<(usize, &PageInput)> = inputs
        .iter()
        .enumerate()
        .filter(|(i, _)| options.pages.includes_index(*i))
        .collect();

    log::debug!(
        "reconstructing {} of {} pages ({})",
        selected.len(),
        inputs.len(),
        if options.parallel { "parallel" } else { "sequential" }
    );

    let pages: Vec<Page> = if options.parallel {
        // Keep every outcome in index order so the lowest failing page wins
        let work = || {
            selected
                .par_iter()
                .map(|(index, input)| engine.reconstruct_cancellable(input, *index, cancel))
                .collect::<Vec<_>>()
        };
        let results = match build_pool(options.max_threads)? {
            Some(pool) => pool.install(work),
            None => work(),
        };
        results.into_iter().collect::<Result<Vec<_>>>()?
    } else {
        selected
            .iter()
            .map(|(index, input)| engine.reconstruct_cancellable(input, *index, cancel))
            .collect::<Result<Vec<_>>>()?
    };

    Ok(Document::from_pages(pages))
}

/// Reconstruct the selected pages in the background.
///
/// Each page is sent as soon as its worker finishes, so results arrive in
/// completion order; the channel closes after the last page.
pub fn reconstruct_streaming(
    inputs: Vec<PageInput>,
    options: &EngineOptions,
    cancel: &CancellationToken,
) -> Result<Receiver<PageResult>> {
    let engine = LayoutEngine::with_config(options.layout.clone())?;
    let pool = if options.parallel {
        build_pool(options.max_threads)?
    } else {
        None
    };

    let selected: Vec<(usize, PageInput)> = inputs
        .into_iter()
        .enumerate()
        .filter(|(i, _)| options.pages.includes_index(*i))
        .collect();

    let parallel = options.parallel;
    let cancel = cancel.clone();
    let (tx, rx) = unbounded::<PageResult>();

    thread::Builder::new()
        .name("relayout-pages".to_string())
        .spawn(move || {
            let work = move || {
                if parallel {
                    selected
                        .into_par_iter()
                        .for_each_with(tx, |tx, (index, input)| {
                            let result = engine.reconstruct_cancellable(&input, index, &cancel);
                            // Receiver gone: the caller is no longer interested
                            let _ = tx.send(PageResult { index, result });
                        });
                } else {
                    for (index, input) in selected {
                        let result = engine.reconstruct_cancellable(&input, index, &cancel);
                        if tx.send(PageResult { index, result }).is_err() {
                            break;
                        }
                    }
                }
            };
            match pool {
                Some(pool) => pool.install(work),
                None => work(),
            }
        })?;

    Ok(rx)
}

/// Drain a streaming receiver into a document ordered by page index.
///
/// `on_page` is called once per received page, in arrival order.
pub fn collect_document<F>(rx: Receiver<PageResult>, mut on_page: F) -> Result<Document>
where
    F: FnMut(&PageResult),
{
    let mut pages = Vec::new();
    let mut first_error: Option<(usize, Error)> = None;

    for page_result in rx {
        on_page(&page_result);
        match page_result.result {
            Ok(page) => pages.push(page),
            Err(err) => {
                let replace = first_error
                    .as_ref()
                    .map_or(true, |(index, _)| page_result.index < *index);
                if replace {
                    first_error = Some((page_result.index, err));
                }
            }
        }
    }

    match first_error {
        Some((_, err)) => Err(err),
        None => Ok(Document::from_pages(pages)),
    }
}

fn build_pool(max_threads: Option<usize>) -> Result<Option<rayon::ThreadPool>> {
    match max_threads {
        Some(num_threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .thread_name(|i| format!("relayout-worker-{}", i))
                .build()?;
            Ok(Some(pool))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PageSelection;
    use crate::model::{RawToken, Transform};

    fn page_with(text: &str) -> PageInput {
        PageInput::letter()
            .with_token(RawToken::new(text, Transform::scaled_at(12.0, 72.0, 400.0)))
    }

    #[test]
    fn test_document_order_matches_input() {
        let inputs: Vec<PageInput> = (0..12).map(|i| page_with(&format!("p{}", i))).collect();
        let doc = reconstruct_document(
            &inputs,
            &EngineOptions::new().with_max_threads(Some(3)),
            &CancellationToken::new(),
        )
        .unwrap();

        assert_eq!(doc.page_count(), 12);
        for (i, page) in doc.pages.iter().enumerate() {
            assert_eq!(page.index, i);
            assert_eq!(page.plain_text(), format!("p{}", i));
        }
    }

    #[test]
    fn test_page_selection_keeps_input_indices() {
        let inputs: Vec<PageInput> = (0..5).map(|i| page_with(&format!("p{}", i))).collect();
        let options = EngineOptions::new().with_pages(PageSelection::Pages(vec![2, 5]));
        let doc = reconstruct_document(&inputs, &options, &CancellationToken::new()).unwrap();

        let indices: Vec<usize> = doc.pages.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![1, 4]);
    }

    #[test]
    fn test_invalid_config_rejected_up_front() {
        let options = EngineOptions::new()
            .with_layout(crate::layout::LayoutConfig::new().with_indent_scale(-1.0));
        let err = reconstruct_document(&[], &options, &CancellationToken::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_streaming_delivers_every_page() {
        let inputs: Vec<PageInput> = (0..8).map(|i| page_with(&format!("p{}", i))).collect();
        let rx = reconstruct_streaming(inputs, &EngineOptions::new(), &CancellationToken::new())
            .unwrap();

        let mut seen = 0;
        let doc = collect_document(rx, |_| seen += 1).unwrap();
        assert_eq!(seen, 8);
        assert_eq!(doc.page_count(), 8);
        assert!(doc.pages.windows(2).all(|w| w[0].index < w[1].index));
    }

    #[test]
    fn test_cancelled_document() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let inputs = vec![page_with("a"), page_with("b")];
        let err = reconstruct_document(&inputs, &EngineOptions::new().sequential(), &cancel)
            .unwrap_err();
        assert!(matches!(err, Error::Cancelled { page: 0 }));
    }

    #[test]
    fn test_cancelled_parallel_document_reports_first_page() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let inputs: Vec<PageInput> = (0..256).map(|i| page_with(&format!("p{}", i))).collect();
        let options = EngineOptions::new().with_max_threads(Some(8));

        for _ in 0..50 {
            let err = reconstruct_document(&inputs, &options, &cancel).unwrap_err();
            assert!(matches!(err, Error::Cancelled { page: 0 }));
        }
    }
}
