//! Keeps `tests/unit` mirroring `src` one file per module

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Entry points and module wiring carry no tests of their own
    fn is_structural(relative: &str) -> bool {
        let file_name = relative.rsplit('/').next().unwrap_or(relative);
        matches!(file_name, "main.rs" | "lib.rs" | "mod.rs")
    }

    fn collect_rust_files(dir: &Path, base: &Path, files: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                collect_rust_files(&path, base, files)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                let relative = path
                    .strip_prefix(base)
                    .map_err(|_prefix| io::Error::other("path outside base directory"))?;
                files.insert(relative.to_string_lossy().replace('\\', "/"));
            }
        }
        Ok(())
    }

    fn module_files(root: &str) -> BTreeSet<String> {
        let base = Path::new(root);
        let mut files = BTreeSet::new();
        collect_rust_files(base, base, &mut files).unwrap();
        files.retain(|relative| !is_structural(relative));
        files
    }

    #[test]
    fn test_every_source_module_has_unit_tests() {
        let tests = module_files("tests/unit");
        let missing: Vec<_> = module_files("src")
            .into_iter()
            .filter(|relative| !tests.contains(relative))
            .map(|relative| format!("  - src/{relative} -> tests/unit/{relative}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source modules without unit tests:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_a_source_module() {
        let sources = module_files("src");
        let orphaned: Vec<_> = module_files("tests/unit")
            .into_iter()
            .filter(|relative| !sources.contains(relative))
            .map(|relative| format!("  - tests/unit/{relative}"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source module:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_unit_files_contain_tests() {
        let base = Path::new("tests/unit");
        let empty: Vec<_> = module_files("tests/unit")
            .into_iter()
            .filter(|relative| {
                fs::read_to_string(base.join(relative))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .collect();

        assert!(
            empty.is_empty(),
            "Unit test files without #[test] functions:\n{}",
            empty.join("\n")
        );
    }
}
