//! CRUD scaffold generator
//!
//! Decides which stubs a stack needs, renders them with the table's
//! replacements and places each result under the directory its namespace
//! maps to.

use super::replacements::{qualify, Replacements};
use crate::templates::StubRegistry;
use crate::Stack;
use anyhow::Result;
use crudgen::config::CrudConfig;
use std::path::{Path, PathBuf};

/// One stub rendered for one stack
struct Target {
    stub: &'static str,
    namespace: String,
    file_name: String,
    description: String,
}

/// CRUD scaffold generator
pub struct ScaffoldGenerator<'a> {
    config: &'a CrudConfig,
    stack: Stack,
    replacements: Replacements,
    templates: StubRegistry,
}

impl<'a> ScaffoldGenerator<'a> {
    /// Create a generator for one table
    #[must_use]
    pub const fn new(
        config: &'a CrudConfig,
        stack: Stack,
        replacements: Replacements,
        templates: StubRegistry,
    ) -> Self {
        Self {
            config,
            stack,
            replacements,
            templates,
        }
    }

    /// Render every file the stack needs
    ///
    /// Paths are relative to the project root. Nothing is written.
    ///
    /// # Errors
    ///
    /// Returns an error if a stub fails to render
    pub fn generate(&self) -> Result<Vec<GeneratedFile>> {
        let context = self.replacements.to_value();

        self.targets()
            .into_iter()
            .map(|target| {
                let content = self.templates.render(target.stub, &context)?;
                Ok(GeneratedFile {
                    path: namespace_path(&self.config.app_path, &target.namespace)
                        .join(target.file_name),
                    content,
                    description: target.description,
                })
            })
            .collect()
    }

    fn targets(&self) -> Vec<Target> {
        let model = &self.replacements.model_name;
        let config = self.config;

        let model_target = Target {
            stub: "Model",
            namespace: config.model.namespace.clone(),
            file_name: format!("{model}.php"),
            description: format!("Eloquent model for {model}"),
        };
        let request_target = Target {
            stub: "Request",
            namespace: config.request.namespace.clone(),
            file_name: format!("{model}Request.php"),
            description: format!("Form request for {model}"),
        };

        match self.stack {
            Stack::Bootstrap | Stack::Tailwind => vec![
                model_target,
                Target {
                    stub: "Controller",
                    namespace: config.controller.namespace.clone(),
                    file_name: format!("{model}Controller.php"),
                    description: format!("Resource controller for {model}"),
                },
                request_target,
            ],
            Stack::Livewire => vec![
                model_target,
                Target {
                    stub: "LivewireForm",
                    namespace: qualify(&config.livewire.namespace, "Forms"),
                    file_name: format!("{model}Form.php"),
                    description: format!("Livewire form for {model}"),
                },
            ],
            Stack::Api => vec![
                model_target,
                Target {
                    stub: "ApiController",
                    namespace: config.controller.api_namespace.clone(),
                    file_name: format!("{model}Controller.php"),
                    description: format!("API controller for {model}"),
                },
                request_target,
                Target {
                    stub: "Resource",
                    namespace: config.resources.namespace.clone(),
                    file_name: format!("{model}Resource.php"),
                    description: format!("JSON resource for {model}"),
                },
            ],
        }
    }
}

/// Directory a namespace lives in
///
/// A leading `App` segment maps to `app_path`; every other segment becomes
/// a directory of the same name.
///
/// ```
/// use crudgen_cli_lib::scaffold::namespace_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     namespace_path(Path::new("app"), r"App\Http\Controllers"),
///     PathBuf::from("app/Http/Controllers")
/// );
/// ```
#[must_use]
pub fn namespace_path(app_path: &Path, namespace: &str) -> PathBuf {
    let mut segments = namespace
        .split('\\')
        .filter(|segment| !segment.is_empty())
        .peekable();

    let mut path = if segments.peek() == Some(&"App") {
        segments.next();
        app_path.to_path_buf()
    } else {
        PathBuf::new()
    };
    path.extend(segments);
    path
}

/// A generated file
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Relative path from project root
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// File description for user feedback
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crudgen::testing::shop_snapshot;
    use crudgen::{infer_relationships, Introspector};

    fn generate(config: &CrudConfig, table: &str, stack: Stack) -> Vec<GeneratedFile> {
        let snapshot = shop_snapshot();
        let mut introspector = Introspector::new(&snapshot);
        let relations =
            infer_relationships(&mut introspector, table, &config.model.namespace).unwrap();
        let columns = introspector.columns(table).unwrap().to_vec();
        let replacements = Replacements::build(config, table, &columns, &relations, None);

        ScaffoldGenerator::new(config, stack, replacements, StubRegistry::new().unwrap())
            .generate()
            .unwrap()
    }

    fn paths(files: &[GeneratedFile]) -> Vec<PathBuf> {
        files.iter().map(|file| file.path.clone()).collect()
    }

    #[test]
    fn test_bootstrap_files() {
        let files = generate(&CrudConfig::default(), "orders", Stack::Bootstrap);
        assert_eq!(
            paths(&files),
            vec![
                PathBuf::from("app/Models/Order.php"),
                PathBuf::from("app/Http/Controllers/OrderController.php"),
                PathBuf::from("app/Http/Requests/OrderRequest.php"),
            ]
        );
    }

    #[test]
    fn test_tailwind_matches_bootstrap() {
        let config = CrudConfig::default();
        assert_eq!(
            paths(&generate(&config, "orders", Stack::Tailwind)),
            paths(&generate(&config, "orders", Stack::Bootstrap))
        );
    }

    #[test]
    fn test_livewire_files() {
        let files = generate(&CrudConfig::default(), "line_items", Stack::Livewire);
        assert_eq!(
            paths(&files),
            vec![
                PathBuf::from("app/Models/LineItem.php"),
                PathBuf::from("app/Livewire/Forms/LineItemForm.php"),
            ]
        );
        assert!(files[1]
            .content
            .contains(r"namespace App\Livewire\Forms;"));
        assert!(files[1].content.contains("public ?LineItem $lineItemModel;"));
    }

    #[test]
    fn test_api_files() {
        let files = generate(&CrudConfig::default(), "customers", Stack::Api);
        assert_eq!(
            paths(&files),
            vec![
                PathBuf::from("app/Models/Customer.php"),
                PathBuf::from("app/Http/Controllers/Api/CustomerController.php"),
                PathBuf::from("app/Http/Requests/CustomerRequest.php"),
                PathBuf::from("app/Http/Resources/CustomerResource.php"),
            ]
        );
        let controller = &files[1].content;
        assert!(controller.contains(r"namespace App\Http\Controllers\Api;"));
        assert!(controller.contains(r"use App\Http\Resources\CustomerResource;"));
        assert!(controller.contains("return CustomerResource::collection($customers);"));
    }

    #[test]
    fn test_model_content() {
        let files = generate(&CrudConfig::default(), "orders", Stack::Bootstrap);
        let model = &files[0].content;

        assert!(model.contains(r"namespace App\Models;"));
        assert!(model.contains(r"use Illuminate\Database\Eloquent\SoftDeletes;"));
        assert!(model.contains("class Order extends Model"));
        assert!(model.contains("protected $fillable = ['customer_id', 'reference'];"));
        assert!(model.contains(" * @property Customer $customer"));
        assert!(model.contains(r"return $this->belongsTo('App\Models\Customer', 'customer_id', 'id');"));
        assert!(model.contains(r"return $this->hasMany('App\Models\LineItem', 'order_id', 'id');"));
    }

    #[test]
    fn test_controller_content() {
        let files = generate(&CrudConfig::default(), "line_items", Stack::Bootstrap);
        let controller = &files[1].content;

        assert!(controller.contains(r"use App\Models\LineItem;"));
        assert!(controller.contains(r"use App\Http\Requests\LineItemRequest;"));
        assert!(controller.contains("return view('line-item.index', compact('lineItems'))"));
        assert!(controller.contains("Redirect::route('line-items.index')"));
        assert!(controller.contains("'Line Item created successfully.'"));
    }

    #[test]
    fn test_custom_namespaces_move_files() {
        let mut config = CrudConfig::default();
        config.model.namespace = r"Domain\Shop".to_string();
        config.app_path = PathBuf::from("src");

        let files = generate(&config, "customers", Stack::Bootstrap);
        assert_eq!(files[0].path, PathBuf::from("Domain/Shop/Customer.php"));
        assert_eq!(
            files[1].path,
            PathBuf::from("src/Http/Controllers/CustomerController.php")
        );
        assert!(files[1].content.contains(r"use Domain\Shop\Customer;"));
    }

    #[test]
    fn test_namespace_path() {
        let app = Path::new("app");
        assert_eq!(namespace_path(app, r"App\Models"), PathBuf::from("app/Models"));
        assert_eq!(namespace_path(app, "App"), PathBuf::from("app"));
        assert_eq!(namespace_path(app, r"Modules\Billing"), PathBuf::from("Modules/Billing"));
        assert_eq!(namespace_path(app, r"\App\Models\"), PathBuf::from("app/Models"));
    }
}
