//! Keeps `tests/unit` a mirror of `src` and every test file non-empty

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SOURCE_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";

    /// Relative paths of every `.rs` file below `root`
    fn rust_files(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut files = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path
                        .strip_prefix(root)
                        .map_err(io::Error::other)?;
                    files.insert(relative.to_string_lossy().replace('\\', "/"));
                }
            }
        }
        Ok(files)
    }

    fn is_structural(relative: &str) -> bool {
        relative == "lib.rs" || relative == "main.rs" || relative.ends_with("mod.rs")
    }

    fn report(title: &str, entries: &[String]) -> String {
        format!("{title}:\n  - {}", entries.join("\n  - "))
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let sources = rust_files(Path::new(SOURCE_ROOT)).expect("src readable");
        let units = rust_files(Path::new(UNIT_ROOT)).expect("tests/unit readable");

        let missing: Vec<String> = sources
            .iter()
            .filter(|relative| !is_structural(relative) && !units.contains(*relative))
            .map(|relative| format!("src/{relative} -> {UNIT_ROOT}/{relative}"))
            .collect();
        assert!(
            missing.is_empty(),
            "{}",
            report("Source files without unit tests", &missing)
        );
    }

    #[test]
    fn test_every_unit_file_has_a_source() {
        let sources = rust_files(Path::new(SOURCE_ROOT)).expect("src readable");
        let units = rust_files(Path::new(UNIT_ROOT)).expect("tests/unit readable");

        let orphaned: Vec<String> = units
            .iter()
            .filter(|relative| !is_structural(relative) && !sources.contains(*relative))
            .map(|relative| format!("{UNIT_ROOT}/{relative}"))
            .collect();
        assert!(
            orphaned.is_empty(),
            "{}",
            report("Unit test files without a source file", &orphaned)
        );
    }

    #[test]
    fn test_unit_files_are_declared() {
        let root = Path::new(UNIT_ROOT);
        let units = rust_files(root).expect("tests/unit readable");

        let mut undeclared = Vec::new();
        for relative in units.iter().filter(|relative| !is_structural(relative)) {
            let path = Path::new(relative);
            let (Some(parent), Some(stem)) = (path.parent(), path.file_stem()) else {
                continue;
            };
            let module_file = root.join(parent).join("mod.rs");
            let declarations = fs::read_to_string(&module_file).unwrap_or_default();
            let declaration = format!("mod {};", stem.to_string_lossy());
            if !declarations.lines().any(|line| line.trim() == declaration) {
                undeclared.push(format!("{UNIT_ROOT}/{relative}"));
            }
        }
        assert!(
            undeclared.is_empty(),
            "{}",
            report("Unit test files never compiled", &undeclared)
        );
    }

    #[test]
    fn test_every_test_file_has_tests() {
        let root = Path::new("tests");
        let files = rust_files(root).expect("tests readable");

        let empty: Vec<String> = files
            .iter()
            .filter(|relative| !relative.ends_with("mod.rs"))
            .filter(|relative| {
                fs::read_to_string(root.join(relative))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|relative| format!("tests/{relative}"))
            .collect();
        assert!(
            empty.is_empty(),
            "{}",
            report("Test files without #[test] functions", &empty)
        );
    }
}
