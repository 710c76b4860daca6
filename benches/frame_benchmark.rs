//! Frame composition benchmarks.
//!
//! Measures the per-refresh cost: viewport reconciliation plus building
//! the full escape-sequence frame, and the row tab-expansion that feeds
//! it.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ni::{Editor, Key, Row};

fn compose_empty_frame(c: &mut Criterion) {
    c.bench_function("compose_frame_empty_80x24", |b| {
        let mut editor = Editor::new(24, 80);
        b.iter(|| black_box(editor.render_frame().len()));
    });
}

fn compose_full_frame(c: &mut Criterion) {
    c.bench_function("compose_frame_full_80x24", |b| {
        let mut editor = Editor::new(24, 80);
        for i in 0..500 {
            editor
                .buffer_mut()
                .append_row(format!("line {i}:\tindented content with some width").as_bytes());
        }
        // Park the viewport mid-file so every screen row has content.
        for _ in 0..100 {
            editor.process_key(Key::Char(b'j'));
        }
        b.iter(|| black_box(editor.render_frame().len()));
    });
}

fn row_tab_expansion(c: &mut Criterion) {
    c.bench_function("row_render_with_tabs", |b| {
        let content = b"\tfn main() {\n\t\tprintln!(\"hi\");\t// trailing".to_vec();
        b.iter(|| black_box(Row::new(&content).render_len()));
    });
}

fn cursor_column_mapping(c: &mut Criterion) {
    c.bench_function("cx_to_rx_long_row", |b| {
        let row = Row::new(&b"\t".repeat(64));
        b.iter(|| black_box(row.cx_to_rx(black_box(64))));
    });
}

criterion_group!(
    benches,
    compose_empty_frame,
    compose_full_frame,
    row_tab_expansion,
    cursor_column_mapping
);
criterion_main!(benches);
