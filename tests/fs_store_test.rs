use std::fs;
use stockpad::model::Product;
use stockpad::store::fs::FileStore;
use stockpad::store::DataStore;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::in_dir(dir.path(), "products.csv");
    (dir, store)
}

fn product(id: u32, name: &str, category: &str, price: f64, quantity: u32) -> Product {
    Product::new(id, name.to_string(), category.to_string(), price, quantity).unwrap()
}

#[test]
fn test_save_then_load_preserves_fields_and_order() {
    let (_dir, mut store) = setup();
    let products = vec![
        product(5, "Sprocket", "Hardware", 0.1, 0),
        product(2, "Gadget", "", 19.95, 50),
        product(9, "Ünïcode Wïdget", "Électronique", 1234.5678, 7),
    ];

    store.save(&products).unwrap();
    let report = store.load().unwrap();

    assert_eq!(report.products, products);
    assert!(report.skipped.is_empty());
}

#[test]
fn test_loading_twice_is_identical() {
    let (_dir, mut store) = setup();
    store
        .save(&[product(1, "Widget", "Hardware", 9.99, 100)])
        .unwrap();

    let first = store.load().unwrap();
    let second = store.load().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_atomic_write_leaves_no_artifacts() {
    let (dir, mut store) = setup();
    store
        .save(&[product(1, "Widget", "Hardware", 9.99, 100)])
        .unwrap();
    store.save(&[]).unwrap();

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["products.csv".to_string()]);

    let on_disk = fs::read_to_string(store.path()).unwrap();
    assert_eq!(on_disk, "id,name,category,price,quantity\n");
}

#[test]
fn test_hand_written_file_with_bad_lines() {
    let (_dir, store) = setup();
    fs::write(
        store.path(),
        "id,name,category,price,quantity\r\n1,A,Cat,5.0,10\r\ngarbage-line\r\n\r\n2,B,Cat,7.5,3\r\n",
    )
    .unwrap();

    let report = store.load().unwrap();
    let ids: Vec<u32> = report.products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line, "garbage-line");
}

#[test]
fn test_location_names_the_file() {
    let (dir, store) = setup();
    assert!(store.location().starts_with(&dir.path().display().to_string()));
    assert!(store.location().ends_with("products.csv"));
}
