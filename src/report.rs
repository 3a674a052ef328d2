//! # Failure Reporting
//!
//! The only structured artifact a failed run leaves behind: the names of
//! the repositories that failed to build, one per line, in
//! `failed_modules.txt` under the working directory. Previous content is
//! overwritten, and each name is echoed to the console as it is recorded.

use std::fs;
use std::path::Path;

use crate::defaults;
use crate::error::Result;

/// Persist and echo the failed-module names.
pub fn write_failed_modules(workdir: &Path, failed: &[String]) -> Result<()> {
    let mut content = String::new();
    for name in failed {
        content.push_str(name);
        content.push('\n');
        println!("Build failed for {}", name);
    }
    fs::write(workdir.join(defaults::FAILED_MODULES_FILE), content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_one_name_per_line() {
        let temp_dir = TempDir::new().unwrap();
        let failed = vec![
            "module-ballerina-io".to_string(),
            "module-ballerina-log".to_string(),
        ];

        write_failed_modules(temp_dir.path(), &failed).unwrap();

        let content =
            fs::read_to_string(temp_dir.path().join(defaults::FAILED_MODULES_FILE)).unwrap();
        assert_eq!(content, "module-ballerina-io\nmodule-ballerina-log\n");
    }

    #[test]
    fn test_overwrites_previous_report() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(defaults::FAILED_MODULES_FILE);
        fs::write(&path, "stale-module\n").unwrap();

        write_failed_modules(temp_dir.path(), &["module-ballerina-io".to_string()]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "module-ballerina-io\n");
    }

    #[test]
    fn test_empty_failure_list_writes_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        write_failed_modules(temp_dir.path(), &[]).unwrap();
        let content =
            fs::read_to_string(temp_dir.path().join(defaults::FAILED_MODULES_FILE)).unwrap();
        assert!(content.is_empty());
    }
}
