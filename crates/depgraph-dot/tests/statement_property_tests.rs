use depgraph_dot::{classify, parse_attribute_list, tokenize, Statement};
use proptest::prelude::*;

fn id_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_:.]{0,12}"
}

/// Printable values that may contain every separator the scanner must respect.
fn quoted_value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,;=\\[\\]{}>-]{0,20}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        failure_persistence: None,
        ..ProptestConfig::default()
    })]

    #[test]
    fn statements_come_back_in_source_order(ids in prop::collection::vec(id_strategy(), 0..16)) {
        let mut body = String::from("strict digraph \"\" {\tnode [label=\"\\N\"];");
        for id in &ids {
            body.push_str(&format!("\t\"{id}\"\t[label=\"{id}\", shape=box];"));
        }
        body.push('}');

        let stmts: Vec<&str> = tokenize(&body).expect("tokenize").collect();
        prop_assert_eq!(stmts.len(), ids.len() + 1);

        let classified: Vec<Statement> = stmts
            .iter()
            .skip(1)
            .map(|s| classify(s).expect("classify"))
            .collect();
        for (statement, id) in classified.iter().zip(&ids) {
            match statement {
                Statement::Node(decl) => {
                    prop_assert_eq!(&decl.id, id);
                    prop_assert_eq!(decl.attributes.get("label"), Some(id.as_str()));
                }
                other => prop_assert!(false, "expected node, got {:?}", other),
            }
        }
    }

    #[test]
    fn quoted_values_survive_separators(value in quoted_value_strategy(), other in id_strategy()) {
        let list = format!("[tooltip=\"{value}\", shape={other}]");
        let attrs = parse_attribute_list(&list).expect("parse");
        prop_assert_eq!(attrs.get("tooltip"), Some(value.as_str()));
        prop_assert_eq!(attrs.get("shape"), Some(other.as_str()));
    }

    #[test]
    fn edges_keep_their_endpoints(source in id_strategy(), target in id_strategy(), dashed in any::<bool>()) {
        let text = if dashed {
            format!("\"{source}\" -> \"{target}\" [style=dashed]")
        } else {
            format!("{source} -> {target}")
        };
        match classify(&text).expect("classify") {
            Statement::Edge(decl) => {
                prop_assert_eq!(decl.source, source);
                prop_assert_eq!(decl.target, target);
                prop_assert_eq!(decl.attributes.get("style").is_some(), dashed);
            }
            other => prop_assert!(false, "expected edge, got {:?}", other),
        }
    }
}
