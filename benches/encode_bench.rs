use criterion::{black_box, criterion_group, criterion_main, Criterion};
use csv_writer_rs::{encode, encode_value, Dialect, Row};
use serde_json::{json, Value};

fn get_users() -> Value {
    let users: Vec<Value> = (0..500)
        .map(|i| {
            json!({
                "id": i,
                "username": format!("user{}", i),
                "full_name": format!("User Number {}", i),
                "email": format!("user{}@example.com", i),
                "bio": "Likes \"quoted\" text, commas,\nand newlines",
                "active": i % 2 == 0,
                "score": i as f64 * 1.5
            })
        })
        .collect();
    Value::Array(users)
}

fn get_plain_rows() -> Vec<Row> {
    (0..500)
        .map(|i| Row::from(vec![i.to_string(), format!("name{}", i), "plain".to_string()]))
        .collect()
}

fn benchmark_encode_rows(c: &mut Criterion) {
    let rows = get_plain_rows();
    let dialect = Dialect::default();

    c.bench_function("encode_plain_rows", |b| {
        b.iter(|| encode(black_box(&rows), black_box(&dialect)).unwrap())
    });
}

fn benchmark_encode_records(c: &mut Criterion) {
    let data = get_users();
    let dialect = Dialect::new().crlf();

    c.bench_function("encode_quoted_records", |b| {
        b.iter(|| encode_value(black_box(&data), black_box(&dialect)).unwrap())
    });
}

criterion_group!(benches, benchmark_encode_rows, benchmark_encode_records);
criterion_main!(benches);
