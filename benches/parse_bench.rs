use criterion::{black_box, criterion_group, criterion_main, Criterion};
use datebits::prelude::*;

fn rfc2822_inputs() -> Vec<&'static str> {
    vec![
        "Tue, 26 Jan 2016 13:48:02 GMT",
        "Tue, 26 Jan 2016 15:48:02 +0200",
        "December 17, 1995 03:24:00",
        "December 17, 1995",
    ]
}

fn parse_rfc2822_ok(inputs: &[&str]) {
    for input in inputs {
        let res = parse_from_rfc2822(input);
        assert!(res.is_ok());
    }
}

fn iso8601_inputs() -> Vec<&'static str> {
    vec![
        "2016-01-19T16:07:37+00:00",
        "2016-01-19T08:07:37Z",
        "2016-01-19T16:07:37.250+0800",
        "2016-01-19",
    ]
}

fn parse_iso8601_ok(inputs: &[&str]) {
    for input in inputs {
        let res = parse_from_iso8601(input);
        assert!(res.is_ok());
    }
}

fn invalid_inputs() -> Vec<&'static str> {
    vec!["not a date", "", "2016-01-19T08:07:37", "Tue, 32 Jan 2016 13:48:02 GMT"]
}

fn parse_invalid(inputs: &[&str]) {
    for input in inputs {
        assert!(parse_from_rfc2822(input).is_err());
        assert!(parse_from_iso8601(input).is_err());
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("parse_rfc2822_ok", |b| b.iter(|| parse_rfc2822_ok(black_box(&rfc2822_inputs()))));
    c.bench_function("parse_iso8601_ok", |b| b.iter(|| parse_iso8601_ok(black_box(&iso8601_inputs()))));
    c.bench_function("parse_invalid", |b| b.iter(|| parse_invalid(black_box(&invalid_inputs()))));

    let start = parse_from_iso8601("2016-01-19T10:00:00Z").unwrap();
    let end = parse_from_iso8601("2016-01-19T15:20:10.453Z").unwrap();
    c.bench_function("format_time_span", |b| {
        b.iter(|| format_time_span(black_box(&start), black_box(&end)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
