use super::*;

fn product(id: i64, name: &str, price: f64, rating: f64, popularity: i64) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        rating,
        popularity,
        image_url: None,
        category: None,
    }
}

fn ids(products: &[Product]) -> Vec<i64> {
    products.iter().map(|p| p.id).collect()
}

#[test]
fn sorts_by_price_ascending() {
    let mut products = vec![
        product(1, "A", 29.99, 4.0, 100),
        product(2, "B", 9.99, 4.0, 100),
        product(3, "C", 19.99, 4.0, 100),
    ];
    sort_products(&mut products, SortField::Price, SortOrder::Asc);
    assert_eq!(ids(&products), vec![2, 3, 1]);
}

#[test]
fn name_sort_is_case_insensitive() {
    let mut products = vec![
        product(1, "zebra stand", 1.0, 4.0, 1),
        product(2, "Apple Dock", 1.0, 4.0, 1),
        product(3, "monitor ARM", 1.0, 4.0, 1),
    ];
    sort_products(&mut products, SortField::Name, SortOrder::Asc);
    assert_eq!(ids(&products), vec![2, 3, 1]);
}

#[test]
fn name_sort_is_stable_for_equal_keys() {
    // Same name in mixed case: incoming order must be preserved.
    let mut products = vec![
        product(10, "USB Hub", 1.0, 4.0, 1),
        product(11, "usb hub", 2.0, 4.0, 1),
        product(12, "USB HUB", 3.0, 4.0, 1),
        product(5, "Adapter", 4.0, 4.0, 1),
    ];
    sort_products(&mut products, SortField::Name, SortOrder::Asc);
    assert_eq!(ids(&products), vec![5, 10, 11, 12]);
}

#[test]
fn descending_is_exact_reverse_of_ascending() {
    let base = vec![
        product(1, "Mouse", 29.99, 4.2, 800),
        product(2, "Keyboard", 89.99, 4.7, 1200),
        product(3, "Mousepad", 9.99, 4.2, 300),
        product(4, "Cable", 9.99, 4.0, 600),
    ];
    for field in [
        SortField::Id,
        SortField::Name,
        SortField::Price,
        SortField::Rating,
        SortField::Popularity,
    ] {
        let mut asc = base.clone();
        sort_products(&mut asc, field, SortOrder::Asc);
        let mut desc = base.clone();
        sort_products(&mut desc, field, SortOrder::Desc);
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(
            ids(&desc),
            ids(&reversed),
            "desc should mirror asc for {field:?}"
        );
    }
}

#[test]
fn nan_ratings_sort_after_finite_values() {
    let mut products = vec![
        product(1, "A", 1.0, f64::NAN, 1),
        product(2, "B", 1.0, 4.5, 1),
        product(3, "C", 1.0, 0.5, 1),
    ];
    sort_products(&mut products, SortField::Rating, SortOrder::Asc);
    assert_eq!(ids(&products), vec![3, 2, 1]);
}

#[test]
fn empty_slice_is_a_no_op() {
    let mut products: Vec<Product> = Vec::new();
    sort_products(&mut products, SortField::Price, SortOrder::Desc);
    assert!(products.is_empty());
}

#[test]
fn wire_values_round_trip_through_from_str() {
    for (raw, field) in [
        ("id", SortField::Id),
        ("name", SortField::Name),
        ("price", SortField::Price),
        ("rating", SortField::Rating),
        ("popularity", SortField::Popularity),
    ] {
        assert_eq!(raw.parse::<SortField>().unwrap(), field);
        assert_eq!(field.as_str(), raw);
    }
    assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
    assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
    assert_eq!("merge".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Merge);
    assert_eq!("quick".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Quick);
}

#[test]
fn unknown_wire_values_are_rejected() {
    assert!(matches!(
        "bubble".parse::<SortAlgorithm>(),
        Err(SortParseError::Algorithm(_))
    ));
    assert!(matches!(
        "sideways".parse::<SortOrder>(),
        Err(SortParseError::Order(_))
    ));
    assert!(matches!(
        "weight".parse::<SortField>(),
        Err(SortParseError::Field(_))
    ));
}
