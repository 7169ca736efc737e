use lower_js::ast::stmt::Stmt;
use lower_js::error::LowerErrorType;
use lower_js::lower_json;
use lower_js::LowerJsonError;
use lower_js::LowerOptions;
use lower_js::SourceType;

// import x from "m";
const IMPORT_PROGRAM: &str = r#"{
  "name": "Program",
  "loc": [0, 18],
  "children": [
    {
      "name": "ImportDeclaration",
      "loc": [0, 18],
      "children": [
        { "name": "KeywordImport", "value": "import", "loc": [0, 6] },
        {
          "name": "ImportClause",
          "loc": [7, 8],
          "children": [
            {
              "name": "ImportedDefaultBinding",
              "loc": [7, 8],
              "children": [
                {
                  "name": "BindingIdentifier",
                  "loc": [7, 8],
                  "children": [{ "name": "IdentifierName", "value": "x", "loc": [7, 8] }]
                }
              ]
            }
          ]
        },
        {
          "name": "FromClause",
          "loc": [9, 17],
          "children": [
            { "name": "KeywordFrom", "value": "from", "loc": [9, 13] },
            { "name": "StringLiteral", "value": "\"m\"", "loc": [14, 17] }
          ]
        },
        { "name": "Semicolon", "value": ";", "loc": [17, 18] }
      ]
    }
  ]
}"#;

#[test]
fn import_program_is_a_module() {
  let program = lower_json(IMPORT_PROGRAM, LowerOptions::default()).unwrap();
  assert_eq!(program.stx.source_type, SourceType::Module);
  assert_eq!(program.loc.1, 18);
  let Stmt::Import(import) = &program.stx.body[0] else {
    panic!("expected an import, got {:?}", program.stx.body[0]);
  };
  assert_eq!(import.stx.source.stx.value, "m");
  assert_eq!(import.stx.source.loc.0, 14);

  let value = serde_json::to_value(&program).unwrap();
  assert_eq!(value["type"], "Program");
  assert_eq!(value["sourceType"], "module");
  assert_eq!(value["start"], 0);
  assert_eq!(value["end"], 18);
  assert_eq!(value["body"][0]["specifiers"][0]["specifier"]["type"], "ImportDefaultSpecifier");
}

#[test]
fn tokens_can_be_omitted() {
  let program = lower_json(IMPORT_PROGRAM, LowerOptions {
    tokens: false,
    ..LowerOptions::default()
  })
  .unwrap();
  let value = serde_json::to_value(&program).unwrap();
  let import = value["body"][0].as_object().unwrap();
  assert!(!import.keys().any(|k| k.ends_with("Token")), "{import:?}");
}

#[test]
fn invalid_json_is_reported_separately() {
  let err = lower_json("{\"name\": ", LowerOptions::default()).unwrap_err();
  assert!(matches!(err, LowerJsonError::Json(_)), "{err:?}");

  let err = lower_json(r#"{"name": "NotARealRule"}"#, LowerOptions::default()).unwrap_err();
  assert!(matches!(err, LowerJsonError::Json(_)), "{err:?}");
}

#[test]
fn non_program_root_is_malformed() {
  let err = lower_json(
    r#"{"name": "IdentifierName", "value": "x", "loc": [0, 1]}"#,
    LowerOptions::default(),
  )
  .unwrap_err();
  let LowerJsonError::Lower(err) = err else {
    panic!("expected a lowering error, got {err:?}");
  };
  assert!(matches!(err.typ, LowerErrorType::MalformedCst(_)));
  assert!(err.to_string().contains("Program"), "{err}");
}
