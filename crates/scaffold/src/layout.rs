//! Canonical project layout
//!
//! The directory and file lists are fixed: a layered ML project with staged
//! data folders, a `src` tree split into components and pipeline stages,
//! tests, and top-level setup files. Order is the creation order.

use std::path::PathBuf;

/// Default name of the generated package directory
pub const DEFAULT_PROJECT_NAME: &str = "wine_quality_ml";

/// Directories created under the package directory, creation order
///
/// The empty entry is the package directory itself.
const PACKAGE_DIRS: &[&str] = &[
    "",
    "config",
    "data/01_raw",
    "data/02_interim",
    "data/03_processed",
    "data/04_external",
    "docs",
    "logs",
    "models/evaluation",
    "notebooks",
    "reports/figures",
    "tests",
    "src/data",
    "src/features",
    "src/models",
    "src/evaluation",
    "src/utils",
    "src/components",
    "src/pipeline",
    "src/constants",
    "src/config",
];

/// Files created under the package directory, creation order
const PACKAGE_FILES: &[&str] = &[
    // Config files
    "config/config.yaml",
    "config/model_config.yaml",
    "config/logging_config.yaml",
    // Documentation
    "docs/README.md",
    "README.md",
    // Source code files
    "src/__init__.py",
    "src/data/__init__.py",
    "src/data/make_dataset.py",
    "src/data/data_validation.py",
    "src/features/__init__.py",
    "src/features/build_features.py",
    "src/models/__init__.py",
    "src/models/train_model.py",
    "src/models/predict_model.py",
    "src/visualization/__init__.py",
    "src/visualization/visualize.py",
    "src/utils/__init__.py",
    "src/utils/utils.py",
    "src/evaluation/__init__.py",
    "src/evaluation/evaluate_model.py",
    // Test files
    "tests/__init__.py",
    "tests/test_data.py",
    "tests/test_features.py",
    "tests/test_models.py",
];

/// Files created beside the package directory, creation order
const BASE_FILES: &[&str] = &["setup.py", "requirements.txt", ".gitignore"];

/// Files created under the package directory after the setup files
const PACKAGE_FILES_TAIL: &[&str] = &[
    // Components
    "src/components/__init__.py",
    "src/components/data_ingestion.py",
    "src/components/data_validation.py",
    "src/components/data_transformation.py",
    "src/components/model_trainer.py",
    "src/components/model_evaluation.py",
    // Pipeline
    "src/pipeline/__init__.py",
    "src/pipeline/stage_01_data_ingestion.py",
    "src/pipeline/stage_02_data_validation.py",
    "src/pipeline/stage_03_data_transformation.py",
    "src/pipeline/stage_04_model_trainer.py",
    "src/pipeline/stage_05_model_evaluation.py",
    // Constants
    "src/constants/__init__.py",
    "src/constants/constants.py",
    // Config
    "src/config/__init__.py",
    "src/config/configuration.py",
    // params.yaml
    "params.yaml",
];

/// The project skeleton rooted at a base directory
///
/// The package directory (`<base>/<project_name>`) holds the layered tree;
/// the setup files (`setup.py`, `requirements.txt`, `.gitignore`) sit in
/// the base directory beside it.
#[derive(Debug, Clone)]
pub struct Layout {
    base: PathBuf,
    project_name: String,
}

impl Layout {
    /// A layout rooted at `base` using the default project name
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            project_name: DEFAULT_PROJECT_NAME.to_string(),
        }
    }

    /// The name of the package directory
    #[must_use]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// The package directory (`<base>/<project_name>`)
    #[must_use]
    pub fn package_dir(&self) -> PathBuf {
        self.base.join(&self.project_name)
    }

    /// All directories to create, in creation order
    #[must_use]
    pub fn directories(&self) -> Vec<PathBuf> {
        let package = self.package_dir();
        PACKAGE_DIRS.iter().map(|rel| package.join(rel)).collect()
    }

    /// All files to create, in creation order
    #[must_use]
    pub fn files(&self) -> Vec<PathBuf> {
        let package = self.package_dir();
        PACKAGE_FILES
            .iter()
            .map(|rel| package.join(rel))
            .chain(BASE_FILES.iter().map(|rel| self.base.join(rel)))
            .chain(PACKAGE_FILES_TAIL.iter().map(|rel| package.join(rel)))
            .collect()
    }
}
