use inventory::{Catalog, InventoryError, LoadStats, command::{Command, execute}};

const HEADER: &str = "Uniq Id,Product Name,Brand Name,Asin,Category,\
                      Upc Ean Code,List Price,Selling Price,Quantity,Model Number";

fn csv(rows: &[&str]) -> String {
    let mut s = String::from(HEADER);
    for row in rows {
        s.push('\n');
        s.push_str(row);
    }
    s.push('\n');
    s
}

#[test]
fn end_to_end_lookup() {
    let source = csv(&[
        r#"id1,"DB Longboards CoreFlex Crossbow 41"" Bamboo Fiberglass Longboard Complete",,,"Sports & Outdoors | Outdoor Recreation | Skateboarding","",,$237.68,,"""#,
        r#"id2,"Electronic Snap Circuits Mini Kits Classpack, FM Radio",,,Toys & Games | Learning & Education | Science Kits & Toys,,,$99.95,,55324"#,
    ]);

    let mut catalog = Catalog::new();
    let stats = catalog.load_csv(source.as_bytes()).unwrap();
    assert_eq!(stats, LoadStats { loaded: 2, skipped: 0 });

    let p = catalog.find_product("id1").unwrap();
    assert_eq!(p.uniq_id(), "id1");
    assert_eq!(
        p.name(),
        "DB Longboards CoreFlex Crossbow 41 Bamboo Fiberglass Longboard Complete"
    );
    assert_eq!(p.manufacturer(), "");
    assert_eq!(p.price(), "$237.68");
    assert_eq!(
        p.categories(),
        ["Sports & Outdoors", "Outdoor Recreation", "Skateboarding"]
    );

    let p = catalog.find_product("id2").unwrap();
    assert_eq!(p.name(), "Electronic Snap Circuits Mini Kits Classpack, FM Radio");
    assert_eq!(p.price(), "$99.95");

    assert!(catalog.find_product("id3").is_none());
}

#[test]
fn category_groups() {
    let source = csv(&[
        "r1,One,,,A | B,,,$1",
        "r2,Two,,,B,,,$2",
        "r3,Three,,,A,,,$3",
    ]);

    let mut catalog = Catalog::new();
    catalog.load_csv(source.as_bytes()).unwrap();

    assert!(catalog.category_exists("A"));
    assert_eq!(catalog.list_by_category("A").len(), 2);
    assert!(catalog.category_exists("B"));
    assert_eq!(catalog.list_by_category("B").len(), 2);
    assert!(!catalog.category_exists("C"));
    assert!(catalog.list_by_category("C").is_empty());

    let names: Vec<&str> = catalog.list_by_category("A").iter().map(|p| p.name()).collect();
    assert_eq!(names, ["One", "Three"]);
}

#[test]
fn short_and_blank_lines_are_skipped() {
    let source = csv(&["too,short", "", "ok,Fine,,,,,,$5", "also,short,,,"]);

    let mut catalog = Catalog::new();
    let stats = catalog.load_csv(source.as_bytes()).unwrap();

    assert_eq!(stats, LoadStats { loaded: 1, skipped: 2 });
    assert_eq!(catalog.len(), 1);
    // an empty category column files the product under NA
    assert_eq!(catalog.list_by_category("NA").len(), 1);
}

#[test]
fn empty_source_has_no_header() {
    let mut catalog = Catalog::new();
    let err = catalog.load_csv(&b""[..]).unwrap_err();
    assert!(matches!(err, InventoryError::MissingHeader));

    // a header alone is a valid, empty export
    let stats = catalog.load_csv(HEADER.as_bytes()).unwrap();
    assert_eq!(stats, LoadStats::default());
    assert!(catalog.is_empty());
}

#[test]
fn missing_file() {
    let mut catalog = Catalog::new();
    let err = catalog
        .load_csv_file("this/file/does/not/exist.csv")
        .unwrap_err();
    assert!(matches!(err, InventoryError::Open { .. }));
    assert!(err.to_string().contains("exist.csv"));
}

#[test]
fn many_products_survive_growth() {
    let rows: Vec<String> = (0..1000)
        .map(|i| format!("id{i},Product {i},,,Group {} | All,,,${i}.00", i % 7))
        .collect();
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();

    let mut catalog = Catalog::new();
    catalog.load_csv(csv(&rows).as_bytes()).unwrap();

    assert_eq!(catalog.indexed_len(), 1000);
    for i in 0..1000 {
        let p = catalog.find_product(&format!("id{i}")).unwrap();
        assert_eq!(p.name(), format!("Product {i}"));
    }
    assert_eq!(catalog.list_by_category("All").len(), 1000);
    assert_eq!(catalog.category_count(), 8);
}

#[test]
fn commands_against_loaded_catalog() {
    let source = csv(&["id1,Mouse,Logi,,Electronics,,,$29.99"]);
    let mut catalog = Catalog::new();
    catalog.load_csv(source.as_bytes()).unwrap();

    let mut out = Vec::new();
    execute(&catalog, &Command::parse("listInventory Electronics"), &mut out).unwrap();
    execute(&catalog, &Command::parse("listInventory Nope"), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("UNIQUE I.D.: id1 | PRODUCT NAME: Mouse\nTOTAL: 1 PRODUCTS\n"));
    assert!(out.ends_with("INVALID\n"));
}
