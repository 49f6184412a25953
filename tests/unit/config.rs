use super::*;

#[test]
fn empty_document_uses_defaults() {
    let config = StorefrontConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(config, StorefrontConfig::default());
    assert_eq!(config.default_category, CategoryId::Tshirt);
    assert_eq!(config.preview_settings(), PreviewSettings::default());
    assert_eq!(config.logo_limits(), LogoLimits::default());
    assert_eq!(config.load_catalog().unwrap().len(), 8);
}

#[test]
fn partial_preview_section_keeps_other_defaults() {
    let json = r#"{ "default_category": "polo", "preview": { "canvas_width": 320 } }"#;
    let config = StorefrontConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(config.default_category, CategoryId::Polo);
    assert_eq!(config.preview.canvas_width, 320);
    assert_eq!(config.preview.canvas_height, 640);
    assert_eq!(config.preview.logo_max_height_px, 120);
}

#[test]
fn zero_sizes_are_rejected() {
    for json in [
        r#"{ "preview": { "canvas_height": 0 } }"#,
        r#"{ "preview": { "reference_garment_height_px": 0 } }"#,
    ] {
        let err = StorefrontConfig::from_reader(json.as_bytes()).unwrap_err();
        assert!(err.to_string().starts_with("validation error:"), "{err}");
    }
}

#[test]
fn oversized_canvas_is_rejected() {
    let json = r#"{ "preview": { "canvas_width": 4294967295, "canvas_height": 4294967295 } }"#;
    let err = StorefrontConfig::from_reader(json.as_bytes()).unwrap_err();
    assert!(err.to_string().starts_with("validation error:"), "{err}");

    let at_limit = format!(r#"{{ "preview": {{ "canvas_width": {MAX_CANVAS_DIM} }} }}"#);
    assert!(StorefrontConfig::from_reader(at_limit.as_bytes()).is_ok());

    let over = format!(
        r#"{{ "preview": {{ "canvas_height": {} }} }}"#,
        MAX_CANVAS_DIM + 1
    );
    assert!(StorefrontConfig::from_reader(over.as_bytes()).is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = StorefrontConfig::from_reader("{ nope".as_bytes()).unwrap_err();
    assert!(err.to_string().starts_with("serialization error:"));
}

#[test]
fn catalog_path_resolves_next_to_config() {
    let dir = std::env::temp_dir().join(format!("basicolor_config_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("products.json"),
        r#"[{ "id": 7, "name": "Tee", "price": { "amount_minor": 100, "currency": "VND" },
              "category": "tshirt", "color": "black" }]"#,
    )
    .unwrap();
    std::fs::write(
        dir.join("store.json"),
        r#"{ "catalog_path": "products.json" }"#,
    )
    .unwrap();

    let config = StorefrontConfig::from_path(&dir.join("store.json")).unwrap();
    assert_eq!(
        config.catalog_path.as_deref(),
        Some(dir.join("products.json").as_path())
    );
    let catalog = config.load_catalog().unwrap();
    assert_eq!(catalog.len(), 1);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_config_file_reports_path() {
    let err = StorefrontConfig::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(err.to_string().contains("open config JSON"));
}
