use file_preview_core::config::OutputFormat;
use file_preview_core::file_kind::Category;
use file_preview_core::report::{Classification, render};
use pretty_assertions::assert_eq;

#[test]
fn plain_output_puts_category_first() {
    let item = Classification::of("scan.webp");
    assert_eq!(item.category, Category::Image);
    assert_eq!(render(&item, OutputFormat::Plain).unwrap(), "image\tscan.webp");
}

#[test]
fn json_output_round_trips() {
    let item = Classification::of("");
    let line = render(&item, OutputFormat::Json).unwrap();
    assert_eq!(line, r#"{"input":"","category":"unknown"}"#);

    let back: Classification = serde_json::from_str(&line).unwrap();
    assert_eq!(back, item);
}

#[test]
fn category_text_matches_serde_name() {
    for category in Category::ALL {
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, format!("\"{category}\""));
        assert_eq!(category.as_str().parse::<Category>().ok(), Some(category));
    }
}

#[test]
fn json_output_stays_on_one_line_for_control_characters() {
    let item = Classification::of("odd\tname\nscan.png");
    let line = render(&item, OutputFormat::Json).unwrap();

    assert!(!line.contains('\n') && !line.contains('\t'));
    assert_eq!(line, r#"{"input":"odd\tname\nscan.png","category":"image"}"#);
}
