use anyhow::{Context, Result};
use calforge_schemas::{
    file_formats::{CompoundFile, PureLiquidFile, SolventFile},
    material::{Compound, PureLiquid, Solvent},
};
use std::{collections::HashMap, fs, path::Path};

/// A container for all the materials loaded from YAML files.
/// This represents the complete catalog available to a preparation run.
pub struct Catalog {
    pub solvents: HashMap<String, Solvent>,
    pub compounds: HashMap<String, Compound>,
    pub liquids: HashMap<String, PureLiquid>,
}

impl Catalog {
    /// Loads all materials from the specified base directory.
    pub fn load(base_path: &str) -> Result<Self> {
        println!("Loading materials catalog from '{}'...", base_path);

        let solvents = load_yaml_files_into_map(
            Path::new(base_path).join("solvents"),
            |file: SolventFile| file.solvents,
            |item: &Solvent| item.name.clone(),
        )?;
        let compounds = load_yaml_files_into_map(
            Path::new(base_path).join("compounds"),
            |file: CompoundFile| file.compounds,
            |item: &Compound| item.name.clone(),
        )?;
        let liquids = load_yaml_files_into_map(
            Path::new(base_path).join("liquids"),
            |file: PureLiquidFile| file.liquids,
            |item: &PureLiquid| item.name.clone(),
        )?;

        println!(
            "Catalog loaded: {} solvents, {} compounds, {} pure liquids.",
            solvents.len(),
            compounds.len(),
            liquids.len()
        );
        Ok(Self {
            solvents,
            compounds,
            liquids,
        })
    }

    pub fn solvent(&self, name: &str) -> Result<&Solvent> {
        self.solvents
            .get(name)
            .with_context(|| format!("Solvent '{}' not found in catalog", name))
    }

    pub fn compound(&self, name: &str) -> Result<&Compound> {
        self.compounds
            .get(name)
            .with_context(|| format!("Compound '{}' not found in catalog", name))
    }

    pub fn liquid(&self, name: &str) -> Result<&PureLiquid> {
        self.liquids
            .get(name)
            .with_context(|| format!("Pure liquid '{}' not found in catalog", name))
    }
}

/// Generic helper to load all YAML files in a directory into a HashMap.
fn load_yaml_files_into_map<P, F, E, T, K>(
    dir_path: P,
    extract_vec: E,
    get_key: K,
) -> Result<HashMap<String, T>>
where
    P: AsRef<Path>,
    F: for<'de> serde::Deserialize<'de>, // The file wrapper struct (e.g., SolventFile)
    E: Fn(F) -> Vec<T>,                  // A closure to extract the Vec<T> from the wrapper
    K: Fn(&T) -> String,                 // A closure to get the key for the map from an item T
{
    let mut map = HashMap::new();
    for entry in fs::read_dir(dir_path.as_ref())
        .with_context(|| format!("Failed to read directory: {:?}", dir_path.as_ref()))?
    {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().map_or(false, |s| s == "yaml" || s == "yml") {
            let content = fs::read_to_string(&path)?;
            let file_wrapper: F = serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML from {:?}", path))?;

            for item in extract_vec(file_wrapper) {
                map.insert(get_key(&item), item);
            }
        }
    }
    Ok(map)
}
