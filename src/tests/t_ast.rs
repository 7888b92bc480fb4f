use indoc::indoc;
use serde_json::json;

use super::build::*;
use super::{DeclKind, Node, NodeKind};

#[test]
fn test_parses_esprima_document() {
    let text = indoc! {r#"
        {
          "type": "Program",
          "body": [
            {
              "type": "ExpressionStatement",
              "expression": {
                "type": "Literal",
                "value": "use strict",
                "raw": "'use strict'"
              },
              "loc": {"start": {"line": 1, "column": 0}, "end": {"line": 1, "column": 13}}
            },
            {
              "type": "VariableDeclaration",
              "declarations": [
                {
                  "type": "VariableDeclarator",
                  "id": {"type": "Identifier", "name": "x"},
                  "init": {"type": "Literal", "value": 0, "raw": "0"}
                }
              ],
              "kind": "var"
            },
            {"type": "EmptyStatement"}
          ],
          "sourceType": "script",
          "loc": {"start": {"line": 1, "column": 0}, "end": {"line": 3, "column": 0}}
        }
    "#};

    let tree: Node = serde_json::from_str(text).expect("esprima output should parse");
    let NodeKind::Program { body } = &tree.kind else {
        panic!("expected a program");
    };
    assert_eq!(body.len(), 3);
    assert!(matches!(body[2].kind, NodeKind::EmptyStatement));

    let NodeKind::VariableDeclaration { declarations, kind } = &body[1].kind else {
        panic!("expected a variable declaration");
    };
    assert_eq!(*kind, DeclKind::Var);
    assert_eq!(declarations.len(), 1);

    let span = tree.loc.expect("program should carry its span");
    assert_eq!(span.start.line, 1);
    assert_eq!(span.end.line, 3);
    assert!(body[1].loc.is_none());
}

#[test]
fn test_serializes_with_type_tag() {
    let tree = at(expr_stmt(lit("use strict")), span(1, 0, 1, 13));
    let value = serde_json::to_value(&tree).expect("tree should serialize");
    assert_eq!(value["type"], "ExpressionStatement");
    assert_eq!(value["expression"]["type"], "Literal");
    assert_eq!(value["expression"]["value"], "use strict");
    assert_eq!(value["loc"]["start"]["column"], json!(0));
    // absent spans are omitted rather than serialized as null
    assert_eq!(value["expression"].get("loc"), None);
}

#[test]
fn test_unknown_node_type_is_rejected() {
    let result = serde_json::from_str::<Node>(r#"{"type": "ImportDeclaration", "specifiers": []}"#);
    assert!(result.is_err());
}

#[test]
fn test_block_owners() {
    let mut tree = program(vec![empty()]);
    assert_eq!(tree.block().map(|block| block.len()), Some(1));
    assert!(tree.block_mut().is_some());

    let mut case = switch_case(None, vec![empty(), empty()]);
    assert_eq!(case.block().map(|block| block.len()), Some(2));
    assert!(case.block_mut().is_some());

    let mut leaf = ident("x");
    assert!(leaf.block().is_none());
    assert!(leaf.block_mut().is_none());
}

#[test]
fn test_function_body_accessor() {
    let mut decl = func_decl("f", vec![], vec![ret(None)]);
    assert_eq!(decl.function_body_mut().map(|body| body.len()), Some(1));

    // an arrow with an expression body owns no statement sequence
    let mut arrow = Node::new(NodeKind::ArrowFunctionExpression {
        params: vec![],
        body: Box::new(ident("x")),
    });
    assert!(arrow.function_body_mut().is_none());

    let mut stmt = expr_stmt(lit(1));
    assert!(stmt.function_body_mut().is_none());
}

#[test]
fn test_pure_expression_gate() {
    assert!(this_expr().kind.is_pure_expression());
    assert!(lit(5).kind.is_pure_expression());
    assert!(ident("x").kind.is_pure_expression());

    assert!(!call("f", vec![]).kind.is_pure_expression());
    assert!(!binary("+", lit(1), lit(2)).kind.is_pure_expression());
    assert!(!member(ident("a"), "b").kind.is_pure_expression());
}

#[test]
fn test_pure_expression_text() {
    assert_eq!(this_expr().kind.pure_expr_text().as_deref(), Some("this"));
    assert_eq!(lit("hello").kind.pure_expr_text().as_deref(), Some("hello"));
    assert_eq!(lit(0).kind.pure_expr_text().as_deref(), Some("0"));
    assert_eq!(lit(true).kind.pure_expr_text().as_deref(), Some("true"));
    assert_eq!(ident("undefined").kind.pure_expr_text().as_deref(), Some("undefined"));
    assert_eq!(call("f", vec![]).kind.pure_expr_text(), None);
}
