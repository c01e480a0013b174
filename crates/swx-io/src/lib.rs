//! Material-database loading for the wave solver.
//!
//! The database is a JSON document of named materials, each tagged as
//! `elastic` (Lamé parameterization) or `anisotropic` (21 Voigt
//! coefficients):
//!
//! ```json
//! {
//!   "materials": [
//!     { "name": "granite", "type": "elastic",
//!       "density": 2700.0, "lambda": 3.2e10, "mu": 3.2e10 }
//!   ]
//! }
//! ```

pub mod error;

pub use error::{IoError, Result};

use std::path::Path;

use serde::Deserialize;
use swx_model::{AnisotropicMaterial, ElasticMaterial};

/// One material definition, tagged by kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MaterialRecord {
    Elastic(ElasticMaterial),
    Anisotropic(AnisotropicMaterial),
}

impl MaterialRecord {
    pub fn kind(&self) -> &'static str {
        match self {
            MaterialRecord::Elastic(_) => "elastic",
            MaterialRecord::Anisotropic(_) => "anisotropic",
        }
    }

    /// View the record in the anisotropic basis, embedding elastic entries.
    pub fn as_anisotropic(&self) -> AnisotropicMaterial {
        match self {
            MaterialRecord::Elastic(m) => (*m).into(),
            MaterialRecord::Anisotropic(m) => *m,
        }
    }
}

/// A named entry of the material database.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedMaterial {
    pub name: String,
    #[serde(flatten)]
    pub record: MaterialRecord,
}

#[derive(Debug, Clone, Deserialize)]
struct MaterialFile {
    materials: Vec<NamedMaterial>,
}

/// Parse a material database from JSON text.
pub fn parse_materials(text: &str) -> Result<Vec<NamedMaterial>> {
    let file: MaterialFile = serde_json::from_str(text)?;
    if file.materials.is_empty() {
        return Err(IoError::InvalidData(
            "material database is empty".to_string(),
        ));
    }
    Ok(file.materials)
}

/// Load a material database from a JSON file.
pub fn load_materials<P: AsRef<Path>>(path: P) -> Result<Vec<NamedMaterial>> {
    let text = std::fs::read_to_string(path)?;
    parse_materials(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
    {
      "materials": [
        { "name": "granite", "type": "elastic",
          "density": 2700.0, "lambda": 3.2e10, "mu": 3.2e10 },
        { "name": "shale", "type": "anisotropic",
          "density": 2450.0,
          "c11": 3.1e10, "c12": 0.8e10, "c13": 0.6e10,
          "c14": 0.0, "c15": 0.0, "c16": 0.0,
          "c22": 3.1e10, "c23": 0.6e10,
          "c24": 0.0, "c25": 0.0, "c26": 0.0,
          "c33": 2.2e10,
          "c34": 0.0, "c35": 0.0, "c36": 0.0,
          "c44": 0.5e10, "c45": 0.0, "c46": 0.0,
          "c55": 0.5e10, "c56": 0.0,
          "c66": 1.15e10 }
      ]
    }
    "#;

    #[test]
    fn parses_both_record_kinds() {
        let materials = parse_materials(SAMPLE).expect("Failed to parse database");
        assert_eq!(materials.len(), 2);

        assert_eq!(materials[0].name, "granite");
        assert_eq!(materials[0].record.kind(), "elastic");
        let granite = materials[0].record.as_anisotropic();
        assert_eq!(granite.density, 2700.0);
        assert_eq!(granite.c11, 9.6e10);

        assert_eq!(materials[1].record.kind(), "anisotropic");
        let shale = materials[1].record.as_anisotropic();
        assert_eq!(shale.c33, 2.2e10);
        assert_eq!(shale.c45, 0.0);
    }

    #[test]
    fn rejects_unknown_material_kind() {
        let text = r#"{ "materials": [
            { "name": "x", "type": "viscoelastic", "density": 1.0 } ] }"#;
        assert!(matches!(parse_materials(text), Err(IoError::Json(_))));
    }

    #[test]
    fn rejects_empty_database() {
        let result = parse_materials(r#"{ "materials": [] }"#);
        assert!(matches!(result, Err(IoError::InvalidData(_))));
    }

    #[test]
    fn rejects_missing_coefficients() {
        let text = r#"{ "materials": [
            { "name": "x", "type": "anisotropic", "density": 1.0, "c11": 2.0 } ] }"#;
        assert!(matches!(parse_materials(text), Err(IoError::Json(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(SAMPLE.as_bytes()).expect("Failed to write");

        let materials = load_materials(file.path()).expect("Failed to load database");
        assert_eq!(materials.len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            load_materials("/nonexistent/materials.json"),
            Err(IoError::Io(_))
        ));
    }
}
