use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

pub struct TestProject {
    pub dir: TempDir,
    pub binary_path: String,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let binary_path = env!("CARGO_BIN_EXE_lockmeta").to_string();

        Self { dir, binary_path }
    }

    /// Create a project directory holding an installed snapshot
    pub fn create_project(&self, name: &str, snapshot: &str) -> PathBuf {
        let project_path = self.dir.path().join(name);
        fs::create_dir_all(&project_path).expect("Failed to create project dir");
        fs::write(project_path.join("installed.toml"), snapshot).expect("Failed to write snapshot");

        project_path
    }

    pub fn write_config(&self, project: &str, content: &str) {
        let config_path = self.dir.path().join(project).join("lockmeta.toml");
        fs::write(config_path, content).expect("Failed to write config");
    }

    pub fn run(&self, project: &str, args: &[&str]) -> Output {
        let project_path = self.dir.path().join(project);

        Command::new(&self.binary_path)
            .args(args)
            .current_dir(project_path)
            .output()
            .expect("Failed to run lockmeta")
    }
}
