use super::*;

#[test]
fn product_deserializes_minimal_payload() {
    let product: Product = serde_json::from_str(
        r#"{"id":1,"title":"A","price":9.99,"description":"short"}"#,
    )
    .expect("well-formed product");
    assert_eq!(product.id, 1);
    assert_eq!(product.title, "A");
    assert!((product.price - 9.99).abs() < f64::EPSILON);
    assert_eq!(product.description, "short");
}

#[test]
fn product_ignores_unknown_upstream_fields() {
    let product: Product = serde_json::from_str(
        r#"{
            "id": 7,
            "title": "Backpack",
            "price": 109.95,
            "description": "Fits 15 inch laptops",
            "category": "men's clothing",
            "image": "https://example.invalid/img.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#,
    )
    .expect("extra fields must not break deserialization");
    assert_eq!(product.id, 7);
    assert_eq!(product.title, "Backpack");
}

#[test]
fn product_with_integer_price_deserializes() {
    let product: Product =
        serde_json::from_str(r#"{"id":2,"title":"B","price":10,"description":""}"#)
            .expect("integer prices are valid JSON numbers");
    assert!((product.price - 10.0).abs() < f64::EPSILON);
}

#[test]
fn product_missing_field_is_rejected() {
    let result: Result<Product, _> =
        serde_json::from_str(r#"{"id":3,"title":"C","price":1.0}"#);
    assert!(result.is_err());
}
