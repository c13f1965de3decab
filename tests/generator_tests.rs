//! End-to-end tests of the generator library against a real file system

mod common;

use repogen::config::GeneratorConfig;
use repogen::error::RepogenError;
use repogen::generator::RepositoryCreator;
use repogen::generator::registry::{InMemoryTypeRegistry, SourceTreeRegistry};
use repogen::generator::render::remaining_placeholders;
use repogen::templates::EmbeddedTemplates;

use common::{TestWorkspace, list_files};

fn registry_with_models(models: &[&str]) -> InMemoryTypeRegistry {
    models
        .iter()
        .map(|model| format!("App\\Models\\{model}"))
        .collect()
}

#[test]
fn test_create_writes_both_files() {
    let workspace = TestWorkspace::new();
    let config = GeneratorConfig::default();
    let registry = registry_with_models(&["TestModel"]);
    let creator = RepositoryCreator::new(&config, &registry, &EmbeddedTemplates);

    let result = creator.create("test_model", &workspace.path).unwrap();

    assert_eq!(
        result.repository_path,
        workspace.path.join("Repositories/TestModelsRepository.php")
    );
    assert_eq!(
        result.contract_path,
        workspace
            .path
            .join("Repositories/Contracts/TestModelsRepositoryContract.php")
    );

    let repository = workspace.read_file("Repositories/TestModelsRepository.php");
    assert!(repository.contains("use App\\Models\\TestModel;"));
    assert!(repository.contains("public function __construct(TestModel $model)"));
    assert!(remaining_placeholders(&repository).is_empty());

    let contract = workspace.read_file("Repositories/Contracts/TestModelsRepositoryContract.php");
    assert!(contract.contains("interface TestModelsRepositoryContract"));
    assert!(remaining_placeholders(&contract).is_empty());
}

#[test]
fn test_missing_model_leaves_tree_untouched() {
    let workspace = TestWorkspace::new();
    workspace.write_file("Models/User.php", "<?php\n");
    let before = list_files(&workspace.path);

    let config = GeneratorConfig::default();
    let registry = registry_with_models(&["User"]);
    let creator = RepositoryCreator::new(&config, &registry, &EmbeddedTemplates);

    let err = creator.create("foo_model", &workspace.path).unwrap_err();

    assert!(matches!(err, RepogenError::ModelNotFound { ref name } if name == "App\\Models\\FooModel"));
    assert_eq!(list_files(&workspace.path), before);
    assert!(!workspace.file_exists("Repositories"));
}

#[test]
fn test_existing_repository_is_not_overwritten() {
    let workspace = TestWorkspace::new();
    let config = GeneratorConfig::default();
    let registry = registry_with_models(&["User"]);
    let creator = RepositoryCreator::new(&config, &registry, &EmbeddedTemplates);
    creator.create("user", &workspace.path).unwrap();

    workspace.write_file("Repositories/UsersRepository.php", "<?php // edited\n");
    let registry = registry_with_models(&["User"]).with("App\\Repositories\\UsersRepository");
    let creator = RepositoryCreator::new(&config, &registry, &EmbeddedTemplates);

    let err = creator.create("user", &workspace.path).unwrap_err();

    assert_eq!(err.to_string(), "App\\Repositories\\UsersRepository already exists.");
    assert_eq!(
        workspace.read_file("Repositories/UsersRepository.php"),
        "<?php // edited\n"
    );
}

#[test]
fn test_existing_contract_alone_blocks_generation() {
    let workspace = TestWorkspace::new();
    let config = GeneratorConfig::default();
    let registry =
        registry_with_models(&["User"]).with("App\\Repositories\\Contracts\\UsersRepositoryContract");
    let creator = RepositoryCreator::new(&config, &registry, &EmbeddedTemplates);

    let err = creator.create("user", &workspace.path).unwrap_err();

    assert!(matches!(err, RepogenError::AlreadyExists { ref name } if name.ends_with("UsersRepositoryContract")));
    assert!(list_files(&workspace.path).is_empty());
}

#[test]
fn test_source_tree_registry_sees_generated_files() {
    let workspace = TestWorkspace::new();
    workspace.create_model("Invoice");
    let app = workspace.path.join("app");

    let config = GeneratorConfig::default();
    let registry = SourceTreeRegistry::new(&app, config.base_application_namespace.clone());
    let creator = RepositoryCreator::new(&config, &registry, &EmbeddedTemplates);

    creator.create("invoice", &app).unwrap();
    let err = creator.create("invoice", &app).unwrap_err();

    assert!(matches!(err, RepogenError::AlreadyExists { .. }));
    assert_eq!(
        list_files(&app),
        vec![
            std::path::PathBuf::from("Models/Invoice.php"),
            std::path::PathBuf::from("Repositories/Contracts/InvoicesRepositoryContract.php"),
            std::path::PathBuf::from("Repositories/InvoicesRepository.php"),
        ]
    );
}

#[test]
fn test_custom_layout_and_namespaces() {
    let workspace = TestWorkspace::new();
    let config = GeneratorConfig {
        base_application_namespace: "Acme".to_string(),
        model_base_path: "Domain/Entities".to_string(),
        repositories_base_path: "Infrastructure/Persistence".to_string(),
        repositories_base_namespace: "Infrastructure\\Persistence".to_string(),
        repository_contract_base_path: "Domain/Repositories".to_string(),
        repository_contract_base_namespace: "Domain\\Repositories".to_string(),
        pluralize: false,
    };
    let registry = InMemoryTypeRegistry::new().with("Acme\\Domain\\Entities\\Order");
    let creator = RepositoryCreator::new(&config, &registry, &EmbeddedTemplates);

    let result = creator.create("order", &workspace.path).unwrap();

    assert!(result.repository_path.ends_with("Infrastructure/Persistence/OrderRepository.php"));
    assert!(result.contract_path.ends_with("Domain/Repositories/OrderRepositoryContract.php"));

    let repository = workspace.read_file("Infrastructure/Persistence/OrderRepository.php");
    assert!(repository.contains("namespace Acme\\Infrastructure\\Persistence;"));
    assert!(repository.contains("use Acme\\Domain\\Entities\\Order;"));
    assert!(repository.contains("use Acme\\Domain\\Repositories\\OrderRepositoryContract;"));
}

#[test]
fn test_paths_outside_namespace_layout_are_not_overwritten() {
    let workspace = TestWorkspace::new();
    workspace.create_model("User");
    let app = workspace.path.join("app");
    let config = GeneratorConfig {
        repositories_base_path: "Data".to_string(),
        repository_contract_base_path: "Data/Contracts".to_string(),
        ..GeneratorConfig::default()
    };
    let registry = SourceTreeRegistry::new(&app, config.base_application_namespace.clone());
    let creator = RepositoryCreator::new(&config, &registry, &EmbeddedTemplates);

    creator.create("user", &app).unwrap();
    workspace.write_file("app/Data/UsersRepository.php", "<?php // hand edited\n");
    let before = list_files(&app);

    let err = creator.create("user", &app).unwrap_err();

    assert!(matches!(err, RepogenError::AlreadyExists { .. }));
    assert_eq!(
        workspace.read_file("app/Data/UsersRepository.php"),
        "<?php // hand edited\n"
    );
    assert_eq!(list_files(&app), before);
}

#[test]
fn test_acronym_model_name_resolves() {
    let workspace = TestWorkspace::new();
    workspace.create_model("APIKey");
    let app = workspace.path.join("app");
    let config = GeneratorConfig::default();
    let registry = SourceTreeRegistry::new(&app, config.base_application_namespace.clone());
    let creator = RepositoryCreator::new(&config, &registry, &EmbeddedTemplates);

    let result = creator.create("APIKey", &app).unwrap();

    assert!(result.repository_path.ends_with("Repositories/APIKeysRepository.php"));
    let repository = workspace.read_file("app/Repositories/APIKeysRepository.php");
    assert!(repository.contains("use App\\Models\\APIKey;"));
    assert!(repository.contains("public function __construct(APIKey $model)"));
}

#[test]
fn test_us_noun_is_pluralized() {
    let workspace = TestWorkspace::new();
    let config = GeneratorConfig::default();
    let registry = registry_with_models(&["SalaryBonus"]);
    let creator = RepositoryCreator::new(&config, &registry, &EmbeddedTemplates);

    let result = creator.create("salary_bonus", &workspace.path).unwrap();

    assert!(result.repository_path.ends_with("SalaryBonusesRepository.php"));
    assert!(result.contract_path.ends_with("SalaryBonusesRepositoryContract.php"));
}
