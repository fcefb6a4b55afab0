use criterion::{Criterion, black_box, criterion_group, criterion_main};
use snippet_highlight::BlockScanner;

fn mixed_document(block_count: usize) -> String {
    let mut out = String::with_capacity(block_count * 112);
    for i in 0..block_count {
        out.push_str("<div class=\"row\">static markup between blocks</div>\n");
        out.push_str(&format!("<?php echo render_row({i}); ?>\n"));
    }
    out
}

fn plain_document(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 64);
    for i in 0..line_count {
        out.push_str(&format!(
            "{i:06} the quick brown fox jumps over the lazy dog, no markers here\n"
        ));
    }
    out
}

fn bench_scan_mixed_document(c: &mut Criterion) {
    let scanner = BlockScanner::new();
    let text = mixed_document(5_000);
    c.bench_function("scan/5k_blocks", |b| {
        b.iter(|| black_box(scanner.scan(black_box(&text))).len())
    });
}

fn bench_scan_plain_document(c: &mut Criterion) {
    let scanner = BlockScanner::new();
    let text = plain_document(50_000);
    c.bench_function("scan/50k_lines_no_markers", |b| {
        b.iter(|| black_box(scanner.scan(black_box(&text))).len())
    });
}

criterion_group!(
    benches,
    bench_scan_mixed_document,
    bench_scan_plain_document
);
criterion_main!(benches);
