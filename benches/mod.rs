use criterion::{criterion_group, criterion_main};


criterion_group!(
    benches,
    dispatch::bench_tokenize,
    dispatch::bench_dec,
    dispatch::bench_process_command,
    dispatch::bench_console_input
);
criterion_main!(benches);
