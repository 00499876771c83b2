use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

const RESOURCES_FILE_NAME: &str = "compiled.gresources";
const RESOURCES_DIR: &str = "resources";
const RESOURCES_XML: &str = include_str!("resources/resources.gresource.xml.in");

// ===== APPLICATION METADATA =====

struct ApplicationMetadata {
    name: String,
    version: String,
    id: String,
    title: String,
    prefix: String,
    catalog_url: String,
    order_uri: String,
}

impl ApplicationMetadata {
    fn extract_from_cargo() -> Result<Self> {
        let manifest = std::fs::read_to_string("Cargo.toml").context("Failed to read Cargo.toml")?;
        let document: toml::Value = toml::from_str(&manifest).context("Failed to parse Cargo.toml")?;

        let package = document.get("package").context("Cargo.toml has no [package] table")?;
        let metadata = package.get("metadata").context("Cargo.toml has no [package.metadata] table")?;

        Ok(Self {
            name: Self::string_field(package, "name")?,
            version: Self::string_field(package, "version")?,
            id: Self::string_field(metadata, "id")?,
            title: Self::string_field(metadata, "title")?,
            prefix: Self::string_field(metadata, "prefix")?,
            catalog_url: Self::string_field(metadata, "catalog-url")?,
            order_uri: Self::string_field(metadata, "order-uri")?,
        })
    }

    fn string_field(table: &toml::Value, key: &str) -> Result<String> {
        table
            .get(key)
            .and_then(toml::Value::as_str)
            .map(str::to_owned)
            .with_context(|| format!("Cargo.toml is missing the `{key}` field"))
    }
}

// ===== RESOURCE COMPILER =====

struct ResourceCompiler<'a> {
    app_prefix: &'a str,
    output_dir: &'a Path,
}

impl<'a> ResourceCompiler<'a> {
    fn new(app_prefix: &'a str, output_dir: &'a Path) -> Self {
        Self { app_prefix, output_dir }
    }

    fn compile_resources(self) -> Result<PathBuf> {
        let final_xml = replace_exactly(RESOURCES_XML, "@APP_PREFIX@", self.app_prefix, 1)?;
        let resources_xml_file = self.output_dir.join("resources.gresource.xml");
        std::fs::write(&resources_xml_file, final_xml)?;

        glib_build_tools::compile_resources(
            &[RESOURCES_DIR],
            resources_xml_file.to_str().context("Invalid XML path")?,
            RESOURCES_FILE_NAME,
        );

        Ok(self.output_dir.join(RESOURCES_FILE_NAME))
    }
}

fn replace_exactly(input: &str, pattern: &str, value: &str, expected: usize) -> Result<String> {
    let occurrences = input.matches(pattern).count();
    if occurrences != expected {
        bail!("Expected {expected} occurrence(s) of `{pattern}`, found {occurrences}");
    }
    Ok(input.replace(pattern, value))
}

// ===== CARGO ENVIRONMENT VARIABLES =====

struct CargoEnvironmentVariables;

impl CargoEnvironmentVariables {
    fn emit_application_metadata(metadata: &ApplicationMetadata, resources_path: &Path) {
        println!("cargo:rustc-env=APP_NAME={}", metadata.name);
        println!("cargo:rustc-env=APP_VERSION={}", metadata.version);
        println!("cargo:rustc-env=APP_ID={}", metadata.id);
        println!("cargo:rustc-env=APP_TITLE={}", metadata.title);
        println!("cargo:rustc-env=APP_PREFIX={}", metadata.prefix);
        println!("cargo:rustc-env=APP_CATALOG_URL={}", metadata.catalog_url);
        println!("cargo:rustc-env=APP_ORDER_URI={}", metadata.order_uri);
        println!("cargo:rustc-env=APP_RESOURCES={}", resources_path.display());
    }
}

// ===== BUILD ENVIRONMENT =====

struct BuildEnvironment;

impl BuildEnvironment {
    fn setup_cargo_configuration() {
        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed=resources");
        println!("cargo:rerun-if-changed=Cargo.toml");
    }
}

// ===== MAIN =====

fn main() -> Result<()> {
    BuildEnvironment::setup_cargo_configuration();

    let metadata = ApplicationMetadata::extract_from_cargo()?;
    let output_dir = PathBuf::from(std::env::var("OUT_DIR").context("OUT_DIR is not set")?);

    let resources_path = ResourceCompiler::new(&metadata.prefix, &output_dir).compile_resources()?;
    CargoEnvironmentVariables::emit_application_metadata(&metadata, &resources_path);

    Ok(())
}
