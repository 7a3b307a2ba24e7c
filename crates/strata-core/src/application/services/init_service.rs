//! Init Service - applies the catalog's file sets to a project directory.
//!
//! Installing dependencies and running a build are left to the caller.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::{
        ports::FileSetCatalog,
        services::materialize_service::{MaterializeOptions, MaterializeReport, MaterializeService},
    },
    domain::{RelativePath, ServiceName},
    error::{StrataError, StrataResult},
};

/// Outcome of an initializer operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    /// Per-file outcomes, including the effective root.
    pub files: MaterializeReport,
    /// Whether the ignore list was created or extended.
    pub ignore_list_written: bool,
}

impl InitReport {
    pub fn root(&self) -> &Path {
        self.files.root()
    }
}

/// Project initializer.
pub struct InitService {
    materializer: MaterializeService,
    catalog: Box<dyn FileSetCatalog>,
}

impl InitService {
    pub fn new(materializer: MaterializeService, catalog: Box<dyn FileSetCatalog>) -> Self {
        Self {
            materializer,
            catalog,
        }
    }

    /// Write the project skeleton, then make sure the ignore list mentions
    /// generated folders.
    #[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
    pub fn init(
        &self,
        dir: impl AsRef<Path>,
        options: &MaterializeOptions,
    ) -> StrataResult<InitReport> {
        info!("Configuring project");

        let files = self
            .materializer
            .materialize(dir, &self.catalog.project(), options)?;

        let ignore_file =
            RelativePath::try_new(self.catalog.ignore_file()).map_err(StrataError::Domain)?;
        let tokens = self.catalog.ignore_tokens();
        let ignore_list_written =
            self.materializer
                .merge_ignore_list(files.root(), &ignore_file, tokens.as_slice())?;

        info!(root = %files.root().display(), "Project initialized");
        Ok(InitReport {
            files,
            ignore_list_written,
        })
    }

    /// Add simulator support; editor and package manifests are patched.
    #[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
    pub fn add_simulator(
        &self,
        dir: impl AsRef<Path>,
        options: &MaterializeOptions,
    ) -> StrataResult<InitReport> {
        info!("Adding simulator support");

        let files = self
            .materializer
            .materialize(dir, &self.catalog.simulator(), options)?;

        info!("Simulator support added");
        Ok(InitReport {
            files,
            ignore_list_written: false,
        })
    }

    /// Add a custom service definition stub named `name`.
    #[instrument(skip_all, fields(dir = %dir.as_ref().display(), name = %name))]
    pub fn add_service(
        &self,
        dir: impl AsRef<Path>,
        name: &str,
        options: &MaterializeOptions,
    ) -> StrataResult<InitReport> {
        let name = ServiceName::parse(name)?;
        info!(id = %name.id(), "Adding service");

        let files = self
            .materializer
            .materialize(dir, &self.catalog.service(&name), options)?;

        info!(id = %name.id(), "Service added");
        Ok(InitReport {
            files,
            ignore_list_written: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::{EntryOutcome, ports::MockFilesystem},
        domain::{DomainError, FileSet},
    };
    use serde_json::json;
    use std::path::PathBuf;

    struct StubCatalog;

    impl FileSetCatalog for StubCatalog {
        fn project(&self) -> FileSet {
            FileSet::new("project").with_text("README.md", "# app\n")
        }

        fn simulator(&self) -> FileSet {
            FileSet::new("simulator")
                .with_patch("package.json", json!({"scripts": {"watch:sim": "w"}}))
        }

        fn service(&self, name: &ServiceName) -> FileSet {
            FileSet::new("service").with_text(format!("services/{}.md", name.id()).as_str(), "# s\n")
        }

        fn ignore_file(&self) -> &str {
            ".gitignore"
        }

        fn ignore_tokens(&self) -> Vec<String> {
            vec!["node_modules".into(), ".devicescript".into()]
        }
    }

    fn init_service(fs: MockFilesystem) -> InitService {
        InitService::new(MaterializeService::new(Box::new(fs)), Box::new(StubCatalog))
    }

    // =========================================================================
    // init
    // =========================================================================

    #[test]
    fn init_writes_skeleton_and_ignore_list() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().returning(|_| false);
        fs.expect_read_file()
            .withf(|p| p == Path::new("/p/.gitignore"))
            .returning(|_| Ok(None));
        fs.expect_write_file()
            .withf(|p, c| p == Path::new("/p/README.md") && c == "# app\n")
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|p, c| p == Path::new("/p/.gitignore") && c == "node_modules\n.devicescript")
            .times(1)
            .returning(|_, _| Ok(()));

        let report = init_service(fs)
            .init("/p", &MaterializeOptions::default())
            .unwrap();

        assert_eq!(report.root(), Path::new("/p"));
        assert!(report.ignore_list_written);
        assert_eq!(report.files.outcome_of("README.md"), Some(EntryOutcome::Created));
    }

    #[test]
    fn init_extends_existing_ignore_list() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().returning(|_| true);
        fs.expect_read_file()
            .returning(|_| Ok(Some("target\nnode_modules".into())));
        fs.expect_write_file()
            .withf(|p, c| {
                p == Path::new("/p/.gitignore") && c == "target\nnode_modules\n.devicescript/"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let report = init_service(fs)
            .init("/p", &MaterializeOptions::default())
            .unwrap();

        assert!(report.ignore_list_written);
        assert_eq!(report.files.outcome_of("README.md"), Some(EntryOutcome::Skipped));
    }

    // =========================================================================
    // add_simulator / add_service
    // =========================================================================

    #[test]
    fn add_simulator_patches_manifest() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_read_file()
            .returning(|_| Ok(Some(r#"{"scripts": {"build": "b"}}"#.into())));
        fs.expect_write_file()
            .withf(|p, c| {
                p == Path::new("/p/package.json")
                    && c == "{\n    \"scripts\": {\n        \"build\": \"b\",\n        \"watch:sim\": \"w\"\n    }\n}\n"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let report = init_service(fs)
            .add_simulator("/p", &MaterializeOptions::default())
            .unwrap();

        assert!(!report.ignore_list_written);
        assert_eq!(report.files.outcome_of("package.json"), Some(EntryOutcome::Merged));
    }

    #[test]
    fn add_service_uses_derived_id() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().returning(|_| false);
        fs.expect_write_file()
            .withf(|p, _| p == PathBuf::from("/p/services/lightlevel.md"))
            .times(1)
            .returning(|_, _| Ok(()));

        let report = init_service(fs)
            .add_service("/p", "Light Level", &MaterializeOptions::default())
            .unwrap();

        assert_eq!(
            report.files.outcome_of("services/lightlevel.md"),
            Some(EntryOutcome::Created)
        );
    }

    #[test]
    fn add_service_requires_name() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let err = init_service(fs)
            .add_service("/p", "  ", &MaterializeOptions::default())
            .unwrap_err();

        assert!(matches!(
            err,
            StrataError::Domain(DomainError::InvalidServiceName { .. })
        ));
    }
}
