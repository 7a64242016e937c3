//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a secretbridge command bound to this test's preferences file.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("secretbridge").expect("failed to find secretbridge binary");
        cmd.env("SECRETBRIDGE_CONFIG", self.config_path());
        cmd.env_remove("SECRETBRIDGE_LOG");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `secretbridge hydrate <path> --shape <shape>`.
    pub fn hydrate(&self, path: &str, shape: &str) -> Output {
        self.cmd()
            .args(["hydrate", path, "--shape", shape])
            .output()
            .expect("failed to run secretbridge hydrate")
    }

    /// Shortcut for `secretbridge hydrate <path> --shape <shape> --strict`.
    pub fn hydrate_strict(&self, path: &str, shape: &str) -> Output {
        self.cmd()
            .args(["hydrate", path, "--shape", shape, "--strict"])
            .output()
            .expect("failed to run secretbridge hydrate --strict")
    }

    /// Shortcut for `secretbridge hydrate --shape <shape>` reading stdin.
    pub fn hydrate_stdin(&self, input: &str, shape: &str) -> Output {
        self.cmd()
            .args(["hydrate", "-", "--shape", shape])
            .write_stdin(input)
            .output()
            .expect("failed to run secretbridge hydrate -")
    }

    /// Shortcut for `secretbridge prefs show`.
    pub fn prefs_show(&self) -> Output {
        self.cmd()
            .args(["prefs", "show"])
            .output()
            .expect("failed to run secretbridge prefs show")
    }

    /// Shortcut for `secretbridge prefs show --json`.
    pub fn prefs_show_json(&self) -> Output {
        self.cmd()
            .args(["prefs", "show", "--json"])
            .output()
            .expect("failed to run secretbridge prefs show --json")
    }

    /// Shortcut for `secretbridge prefs get`.
    pub fn prefs_get(&self, path: &str) -> Output {
        self.cmd()
            .args(["prefs", "get", path])
            .output()
            .expect("failed to run secretbridge prefs get")
    }

    /// Shortcut for `secretbridge prefs set`.
    pub fn prefs_set(&self, path: &str, value: &str) -> Output {
        self.cmd()
            .args(["prefs", "set", path, value])
            .output()
            .expect("failed to run secretbridge prefs set")
    }
}
