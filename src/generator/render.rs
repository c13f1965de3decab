//! Placeholder substitution for repository and contract templates
//!
//! Templates are plain text with a fixed set of `Dummy*` tokens. Rendering
//! scans the template once from left to right and replaces the longest token
//! found at each position, so tokens sharing a prefix (`DummyModel`,
//! `DummyModelNamespace`) never interfere and the order of the replacement
//! table is irrelevant. Inserted values are not scanned again.

use super::names::NameBundle;

/// Repository class name
pub const CLASS: &str = "DummyClass";
/// Contract class name
pub const CONTRACT: &str = "DummyContract";
/// Fully qualified contract name
pub const CONTRACT_NAMESPACE: &str = "DummyRepositoryContractNamespace";
/// Fully qualified model name
pub const MODEL_NAMESPACE: &str = "DummyModelNamespace";
/// Model class name
pub const MODEL: &str = "DummyModel";
/// Namespace of the repository
pub const REPOSITORY_BASE_NAMESPACE: &str = "DummyRepositoryBaseNamespace";
/// Namespace of the contract
pub const CONTRACT_BASE_NAMESPACE: &str = "DummyRepositoryContractBaseNamespace";

/// Every token any template may carry
pub const PLACEHOLDERS: &[&str] = &[
    CLASS,
    CONTRACT,
    CONTRACT_NAMESPACE,
    MODEL_NAMESPACE,
    MODEL,
    REPOSITORY_BASE_NAMESPACE,
    CONTRACT_BASE_NAMESPACE,
];

/// Render the repository template
pub fn render_repository(stub: &str, names: &NameBundle) -> String {
    substitute(
        stub,
        &[
            (CLASS, names.repository_class_name.as_str()),
            (CONTRACT, names.contract_class_name.as_str()),
            (CONTRACT_NAMESPACE, names.contract_fqn.as_str()),
            (MODEL_NAMESPACE, names.model_fqn.as_str()),
            (MODEL, names.class_name.as_str()),
            (REPOSITORY_BASE_NAMESPACE, names.repository_base_namespace.as_str()),
        ],
    )
}

/// Render the repository contract template
pub fn render_contract(stub: &str, names: &NameBundle) -> String {
    substitute(
        stub,
        &[
            (CONTRACT, names.contract_class_name.as_str()),
            (CONTRACT_BASE_NAMESPACE, names.contract_base_namespace.as_str()),
        ],
    )
}

/// Known placeholder tokens still present in `text`
pub fn remaining_placeholders(text: &str) -> Vec<&'static str> {
    PLACEHOLDERS
        .iter()
        .copied()
        .filter(|token| text.contains(token))
        .collect()
}

/// Replace every occurrence of each token in a single pass
fn substitute(stub: &str, replacements: &[(&str, &str)]) -> String {
    let mut table = replacements.to_vec();
    table.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut rendered = String::with_capacity(stub.len());
    let mut rest = stub;

    while let Some(ch) = rest.chars().next() {
        match table.iter().find(|(token, _)| rest.starts_with(token)) {
            Some((token, value)) => {
                rendered.push_str(value);
                rest = &rest[token.len()..];
            }
            None => {
                rendered.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::generator::inflector::EnglishPluralizer;
    use crate::generator::names::derive_names;
    use crate::templates::{CONTRACT_STUB, REPOSITORY_STUB};

    fn bundle() -> NameBundle {
        derive_names("TestModel", &GeneratorConfig::default(), &EnglishPluralizer).unwrap()
    }

    #[test]
    fn test_render_repository_default_stub() {
        let rendered = render_repository(REPOSITORY_STUB, &bundle());

        assert!(rendered.contains("namespace App\\Repositories;"));
        assert!(rendered.contains("use App\\Models\\TestModel;"));
        assert!(rendered.contains("use App\\Repositories\\Contracts\\TestModelsRepositoryContract;"));
        assert!(rendered.contains(
            "class TestModelsRepository extends AbstractEloquentRepository implements TestModelsRepositoryContract"
        ));
        assert!(rendered.contains("public function __construct(TestModel $model)"));
        assert!(remaining_placeholders(&rendered).is_empty());
    }

    #[test]
    fn test_render_contract_default_stub() {
        let rendered = render_contract(CONTRACT_STUB, &bundle());

        assert!(rendered.contains("namespace App\\Repositories\\Contracts;"));
        assert!(rendered.contains(
            "interface TestModelsRepositoryContract extends AbstractEloquentRepositoryContract"
        ));
        assert!(remaining_placeholders(&rendered).is_empty());
    }

    #[test]
    fn test_replaces_all_occurrences() {
        let rendered = render_repository("DummyClass DummyClass DummyClass", &bundle());
        assert_eq!(
            rendered,
            "TestModelsRepository TestModelsRepository TestModelsRepository"
        );
    }

    #[test]
    fn test_prefix_tokens_do_not_interfere() {
        let rendered = render_repository("DummyModelNamespace|DummyModel", &bundle());
        assert_eq!(rendered, "App\\Models\\TestModel|TestModel");
    }

    #[test]
    fn test_order_of_table_is_irrelevant() {
        let stub = "DummyModel DummyModelNamespace DummyContract DummyRepositoryContractNamespace";
        let names = bundle();
        let forward = substitute(
            stub,
            &[
                (MODEL, names.class_name.as_str()),
                (MODEL_NAMESPACE, names.model_fqn.as_str()),
                (CONTRACT, names.contract_class_name.as_str()),
                (CONTRACT_NAMESPACE, names.contract_fqn.as_str()),
            ],
        );
        let backward = substitute(
            stub,
            &[
                (CONTRACT_NAMESPACE, names.contract_fqn.as_str()),
                (CONTRACT, names.contract_class_name.as_str()),
                (MODEL_NAMESPACE, names.model_fqn.as_str()),
                (MODEL, names.class_name.as_str()),
            ],
        );
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_inserted_values_are_not_rescanned() {
        let mut names = bundle();
        names.class_name = "DummyClass".to_string();
        let rendered = render_repository("DummyModel", &names);
        assert_eq!(rendered, "DummyClass");
    }

    #[test]
    fn test_contract_ignores_repository_tokens() {
        let rendered = render_contract("DummyClass DummyContract", &bundle());
        assert_eq!(rendered, "DummyClass TestModelsRepositoryContract");
    }

    #[test]
    fn test_non_ascii_text_is_preserved() {
        let rendered = render_contract("// Größe ✓ DummyContract", &bundle());
        assert_eq!(rendered, "// Größe ✓ TestModelsRepositoryContract");
    }

    #[test]
    fn test_remaining_placeholders_reports_tokens() {
        let left = remaining_placeholders("class DummyClass implements Foo");
        assert_eq!(left, vec![CLASS]);
        assert!(remaining_placeholders("class UsersRepository").is_empty());
    }
}
