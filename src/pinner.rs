//! # Version Pinning
//!
//! Every downstream repository declares the ballerina-lang version it
//! builds against in its `gradle.properties`. Before building, those
//! declarations are rewritten to the version of the lang checkout being
//! built, so the whole stack resolves the freshly published lang
//! artifacts instead of a released one.
//!
//! Only the lang-version keys change; every other entry round-trips
//! untouched. A repository without a properties file is fatal.

use std::path::Path;

use crate::defaults;
use crate::error::Result;
use crate::manifest::ModulesByLevel;
use crate::properties::Properties;

/// Read the version declared by the lang checkout itself.
fn lang_version(workdir: &Path) -> Result<String> {
    let properties = Properties::load(
        &workdir
            .join(defaults::LANG_REPO)
            .join(defaults::PROPERTIES_FILE),
    )?;
    Ok(properties
        .get(defaults::LANG_VERSION_KEY)
        .unwrap_or_default()
        .to_string())
}

fn pin_file(path: &Path, version: &str, inject_heap_size: bool) -> Result<()> {
    let mut properties = Properties::load(path)?;
    properties.set_all_containing(defaults::LANG_VERSION_PIN, version);
    if inject_heap_size {
        properties.set(defaults::HEAP_SIZE_KEY, defaults::HEAP_SIZE_VALUE);
    }
    properties.save(path)
}

/// Pin the lang version across every module and the distribution.
pub fn pin_lang_version(modules: &ModulesByLevel, workdir: &Path) -> Result<()> {
    let version = lang_version(workdir)?;
    println!("Lang Version: {}", version);

    for module in modules.values().flatten() {
        pin_file(
            &workdir.join(&module.name).join(defaults::PROPERTIES_FILE),
            &version,
            module.name == defaults::C2C_MODULE,
        )?;
    }

    pin_file(
        &workdir
            .join(defaults::DIST_REPO)
            .join(defaults::PROPERTIES_FILE),
        &version,
        false,
    )
}
