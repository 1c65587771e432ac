// End-to-end matrix expansion from YAML documents

use matrix_service::{ActionKind, Combination, MatrixPreview, MatrixResult};

fn preview_one(source: &str) -> MatrixResult {
    let mut results = MatrixPreview::preview(source).unwrap();
    assert_eq!(results.len(), 1);
    results.remove(0)
}

fn combo(pairs: &[(&str, &str)]) -> Combination {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn kinds(result: &MatrixResult) -> Vec<ActionKind> {
    result.actions.iter().map(|a| a.kind).collect()
}

const BASE: &str = r#"
jobs:
  zoo:
    strategy:
      matrix:
        fruit: [apple, pear]
        animal: [cat, dog]
"#;

fn with_directives(directives: &str) -> String {
    format!("{}{}", BASE, directives)
}

#[test]
fn test_plain_cross_product() {
    let result = preview_one(BASE);

    assert_eq!(result.combinations.len(), 4);
    for expected in [
        combo(&[("fruit", "apple"), ("animal", "cat")]),
        combo(&[("fruit", "apple"), ("animal", "dog")]),
        combo(&[("fruit", "pear"), ("animal", "cat")]),
        combo(&[("fruit", "pear"), ("animal", "dog")]),
    ] {
        assert!(result.combinations.contains(&expected));
    }
    assert!(result.actions.is_empty());
}

#[test]
fn test_exclude_single_combination() {
    let result = preview_one(&with_directives(
        r#"        exclude:
          - fruit: apple
            animal: cat
"#,
    ));

    assert_eq!(result.combinations.len(), 3);
    assert!(!result
        .combinations
        .contains(&combo(&[("fruit", "apple"), ("animal", "cat")])));
    assert_eq!(kinds(&result), vec![ActionKind::Remove]);
}

#[test]
fn test_include_new_dimension_everywhere() {
    let result = preview_one(&with_directives(
        r#"        include:
          - color: green
"#,
    ));

    assert_eq!(result.combinations.len(), 4);
    assert!(result.combinations.iter().all(|c| c["color"] == "green"));
    assert_eq!(kinds(&result), vec![ActionKind::Edit; 4]);
}

#[test]
fn test_include_extends_matching_rows_only() {
    let result = preview_one(&with_directives(
        r#"        include:
          - fruit: apple
            shape: circle
"#,
    ));

    assert_eq!(result.combinations.len(), 4);
    for combination in &result.combinations {
        if combination["fruit"] == "apple" {
            assert_eq!(combination["shape"], "circle");
        } else {
            assert!(!combination.contains_key("shape"));
        }
    }
    assert_eq!(kinds(&result), vec![ActionKind::Edit; 2]);
}

#[test]
fn test_include_unknown_value_adds_row() {
    let result = preview_one(&with_directives(
        r#"        include:
          - fruit: banana
"#,
    ));

    assert_eq!(result.combinations.len(), 5);
    assert_eq!(result.combinations[4], combo(&[("fruit", "banana")]));
    assert_eq!(kinds(&result), vec![ActionKind::Add]);
}

#[test]
fn test_github_style_include_with_extra_fields() {
    let source = r#"
jobs:
  test:
    strategy:
      matrix:
        os: [windows-latest, ubuntu-latest]
        node: [14, 16]
        include:
          - os: windows-latest
            node: 16
            npm: 6
          - os: macos-latest
            node: 18
"#;
    let result = preview_one(source);

    assert_eq!(result.combinations.len(), 5);
    let with_npm: Vec<_> = result
        .combinations
        .iter()
        .filter(|c| c.contains_key("npm"))
        .collect();
    assert_eq!(with_npm.len(), 1);
    assert_eq!(with_npm[0]["os"], "windows-latest");
    assert_eq!(with_npm[0]["node"], "16");
    assert_eq!(
        result.combinations[4],
        combo(&[("os", "macos-latest"), ("node", "18")])
    );
}

#[test]
fn test_reparse_is_byte_identical() {
    let source = with_directives(
        r#"        include:
          - color: green
        exclude:
          - animal: dog
"#,
    );

    let first = serde_json::to_string(&MatrixPreview::preview(&source).unwrap()).unwrap();
    let second = serde_json::to_string(&MatrixPreview::preview(&source).unwrap()).unwrap();
    assert_eq!(first, second);
}
