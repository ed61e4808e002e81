use csv_writer_rs::{encode, encode_records, encode_value, write_to, Dialect, EncodeError, Row};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct Product {
    sku: String,
    name: String,
    price: f64,
}

fn main() -> Result<(), EncodeError> {
    env_logger::init();

    println!("=== Rows to CSV Examples ===\n");

    // Example 1: Sequences of strings
    println!("1. Simple rows:");
    let rows = vec![Row::from(["id", "name"]), Row::from(["1", "Alice"])];
    println!("{}", encode(&rows, &Dialect::default())?);

    // Example 2: Fields that need quoting
    println!("2. Quoting special characters:");
    let rows = vec![Row::from([
        "New York",
        "a,b",
        "say \"hi\"",
        "line1\nline2",
        "\\.",
    ])];
    println!("{}", encode(&rows, &Dialect::default())?);

    // Example 3: Objects, field names are dropped
    println!("3. Array of objects:");
    let data = json!([
        {"id": 1, "name": "Widget", "in_stock": true},
        {"id": 2, "name": "Gadget", "in_stock": false}
    ]);
    println!("{}", encode_value(&data, &Dialect::default())?);

    // Example 4: Pipe delimiter with CRLF line endings
    println!("4. Pipe delimiter, CRLF:");
    let dialect = Dialect::new().with_delimiter('|').crlf();
    println!("{}", encode_value(&json!([["a", "b|c", "d"]]), &dialect)?);

    // Example 5: Serde records
    println!("5. Serde records:");
    let products = vec![
        Product {
            sku: "W-1".to_string(),
            name: "Widget".to_string(),
            price: 9.99,
        },
        Product {
            sku: "G-2".to_string(),
            name: "Deluxe Gadget".to_string(),
            price: 14.5,
        },
    ];
    println!("{}", encode_records(&products, &Dialect::default())?);

    // Example 6: Writing to a sink
    println!("6. Writing to stdout:");
    let rows = vec![Row::from(["written", "directly"])];
    write_to(std::io::stdout().lock(), &rows, &Dialect::default())?;

    // Example 7: Invalid delimiter
    println!("\n7. Invalid delimiter:");
    match encode(&rows, &Dialect::new().with_delimiter('"')) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("error: {}", e),
    }

    Ok(())
}
