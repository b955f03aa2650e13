//! Benchmarks for span normalization and render-plan construction
//!
//! Run with: cargo bench normalize

use spangrid::config::EngineConfig;
use spangrid::grid::visible_rows;
use spangrid::model::{Cell, CellPosition, Page, Span, Store};
use spangrid::render::render_store;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// Square page with a merged block every fourth cell along the diagonal
fn test_page(size: usize) -> Page {
    let mut page = Page::new("@bench");
    for r in 0..size {
        page.rows.push(
            (0..size)
                .map(|c| Cell::with_value(format!("r{}c{}", r, c)))
                .collect(),
        );
    }
    let mut d = 0;
    while d + 1 < size {
        page.cell_at_mut(CellPosition::new(d, d)).unwrap().span = Some(Span::new(2, 2));
        for covered in [(d + 1, d), (d, d + 1), (d + 1, d + 1)] {
            let cell = page
                .cell_at_mut(CellPosition::new(covered.0, covered.1))
                .unwrap();
            cell.value.clear();
            cell.span = Some(Span::COVERED);
        }
        d += 4;
    }
    page
}

#[divan::bench(args = [8, 32, 128])]
fn normalize_page(bencher: divan::Bencher, size: usize) {
    let page = test_page(size);
    bencher.bench_local(|| divan::black_box(visible_rows(&page)));
}

#[divan::bench(args = [8, 32, 128])]
fn render_plan(bencher: divan::Bencher, size: usize) {
    let store = Store::from_pages(vec![test_page(size)]);
    let config = EngineConfig::default();
    bencher.bench_local(|| divan::black_box(render_store(&store, &config)));
}
