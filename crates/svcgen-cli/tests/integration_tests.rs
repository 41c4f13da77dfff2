//! Integration tests for svcgen-cli.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `svcgen` with a hermetic environment rooted at `dir`.
fn svcgen(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo_bin_cmd!("svcgen");
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("HOME", dir)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    svcgen(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("SERVICE_NAME"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    svcgen(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_name_exits_one_and_touches_nothing() {
    let temp = TempDir::new().unwrap();

    svcgen(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please provide a service name"));

    assert!(entries(temp.path()).is_empty());
}

#[test]
fn test_dry_run_lists_commands_and_creates_nothing() {
    let temp = TempDir::new().unwrap();

    svcgen(temp.path())
        .args(["orders", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("npm list -g @nestjs/cli"))
        .stdout(predicate::str::contains("nest new orders -p npm --skip-git"))
        .stdout(predicate::str::contains("nest generate module orders"))
        .stdout(predicate::str::contains("nest generate service orders"))
        .stdout(predicate::str::contains("nest generate controller orders"))
        .stdout(predicate::str::contains("src/**/*.spec.ts"));

    assert!(entries(temp.path()).is_empty());
}

#[test]
fn test_dry_run_json_is_an_array_of_lines() {
    let temp = TempDir::new().unwrap();

    let out = svcgen(temp.path())
        .args(["orders", "--dry-run", "--output-format", "json"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let lines: Vec<String> = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(lines.len(), 7);
}

#[test]
fn test_show_config_prints_defaults() {
    let temp = TempDir::new().unwrap();

    svcgen(temp.path())
        .arg("--show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[toolchain]"))
        .stdout(predicate::str::contains("cli_package = \"@nestjs/cli\""))
        .stdout(predicate::str::contains("suffix = \".spec.ts\""));
}

#[test]
fn test_environment_overrides_config() {
    let temp = TempDir::new().unwrap();

    svcgen(temp.path())
        .arg("--show-config")
        .env("SVCGEN_TOOLCHAIN__PACKAGE_MANAGER", "pnpm")
        .assert()
        .success()
        .stdout(predicate::str::contains("package_manager = \"pnpm\""));
}

#[test]
fn test_missing_config_file_exits_four() {
    let temp = TempDir::new().unwrap();

    svcgen(temp.path())
        .args(["orders", "--config", "nope.toml"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));

    assert!(entries(temp.path()).is_empty());
}

#[test]
fn test_existing_project_directory_exits_two() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("orders")).unwrap();

    svcgen(temp.path())
        .arg("orders")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_flag_like_and_shell_unsafe_names_exit_two() {
    let temp = TempDir::new().unwrap();

    for name in ["-p", "--help", "a&calc", "x|y", "%PATH%"] {
        svcgen(temp.path())
            .args(["--", name])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Invalid service name"));
    }

    assert!(entries(temp.path()).is_empty());
}

#[test]
fn test_quiet_and_verbose_conflict() {
    let temp = TempDir::new().unwrap();

    svcgen(temp.path())
        .args(["orders", "--quiet", "--verbose"])
        .assert()
        .code(2);
}

/// Runs against a shell stand-in for the NestJS CLI.
#[cfg(unix)]
mod with_fake_nest {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    const EXPECTED_ORDERS_CONTROLLER: &str = "import { Controller, Get } from '@nestjs/common';

@Controller('orders')
export class OrdersController {
@Get()
getOrder() {
    return 'Hello orders Service';
}
}";

    /// Mimics `nest new` and `nest generate`, and exits 3 for any generator
    /// listed in `$FAIL_SCHEMATIC`.
    const FAKE_NEST: &str = r#"#!/bin/sh
set -e
case "$1" in
  new)
    mkdir -p "$2/src" "$2/test"
    echo '{}' > "$2/package.json"
    echo 'bootstrap()' > "$2/src/main.ts"
    echo 'describe()' > "$2/src/app.controller.spec.ts"
    echo 'e2e' > "$2/test/app.e2e-spec.ts"
    ;;
  generate)
    if [ "$2" = "$FAIL_SCHEMATIC" ]; then exit 3; fi
    mkdir -p "src/$3"
    echo 'generated' > "src/$3/$3.$2.ts"
    if [ "$2" != module ]; then echo 'describe()' > "src/$3/$3.$2.spec.ts"; fi
    ;;
esac
"#;

    /// Workspace with a fake `nest` and a config pointing at it. `npm` is
    /// `true`, so the CLI always looks installed.
    fn workspace() -> (TempDir, std::path::PathBuf) {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        fs::create_dir(&bin).unwrap();

        let nest = bin.join("nest");
        fs::write(&nest, FAKE_NEST).unwrap();
        fs::set_permissions(&nest, fs::Permissions::from_mode(0o755)).unwrap();

        let config = bin.join("svcgen.toml");
        fs::write(
            &config,
            format!(
                "[toolchain]\nnpm = \"true\"\nnest = \"{}\"\n",
                nest.display()
            ),
        )
        .unwrap();

        (temp, config)
    }

    #[test]
    fn test_full_run_writes_controller_and_removes_generated_stubs() {
        let (temp, config) = workspace();

        svcgen(temp.path())
            .arg("orders")
            .arg("--config")
            .arg(&config)
            .assert()
            .success()
            .stdout(predicate::str::contains("Creating NestJS project orders..."))
            .stdout(predicate::str::contains(
                "Generating module, service, and controller for orders...",
            ))
            .stdout(predicate::str::contains("Removing test files..."))
            .stdout(predicate::str::contains("\nService orders created successfully\n"))
            .stdout(predicate::str::contains("\u{2713}").not());

        let project = temp.path().join("orders");
        assert_eq!(
            fs::read_to_string(project.join("src/orders/orders.controller.ts")).unwrap(),
            EXPECTED_ORDERS_CONTROLLER
        );
        assert!(project.join("src/app.controller.spec.ts").exists());
        assert!(!project.join("src/orders/orders.controller.spec.ts").exists());
        assert!(!project.join("src/orders/orders.service.spec.ts").exists());
        assert!(project.join("src/orders/orders.service.ts").exists());
        assert!(project.join("src/main.ts").exists());
        assert!(project.join("test/app.e2e-spec.ts").exists());
    }

    #[test]
    fn test_json_report() {
        let (temp, config) = workspace();

        let out = svcgen(temp.path())
            .arg("orderService")
            .arg("--config")
            .arg(&config)
            .args(["--output-format", "json"])
            .output()
            .unwrap();

        assert!(out.status.success());
        let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
        assert_eq!(report["service"], "orderService");
        assert_eq!(report["tool_installed"], false);
        assert_eq!(report["removed_stubs"].as_array().unwrap().len(), 2);

        let controller = temp
            .path()
            .join("orderService/src/orderService/orderService.controller.ts");
        assert!(
            fs::read_to_string(controller)
                .unwrap()
                .contains("export class OrderServiceController {")
        );
    }

    #[test]
    fn test_generator_failure_stops_the_run() {
        let (temp, config) = workspace();

        svcgen(temp.path())
            .arg("orders")
            .arg("--config")
            .arg(&config)
            .env("FAIL_SCHEMATIC", "service")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("generate-service"))
            .stderr(predicate::str::contains("exit code 3"));

        let project = temp.path().join("orders");
        assert!(project.join("src/orders/orders.module.ts").exists());
        assert!(!project.join("src/orders/orders.controller.ts").exists());
        // Nothing was cleaned up either.
        assert!(project.join("src/app.controller.spec.ts").exists());
    }

    #[test]
    fn test_cleanup_can_be_disabled_from_environment() {
        let (temp, config) = workspace();

        svcgen(temp.path())
            .arg("orders")
            .arg("--config")
            .arg(&config)
            .env("SVCGEN_CLEANUP__ENABLED", "false")
            .assert()
            .success();

        assert!(
            temp.path()
                .join("orders/src/orders/orders.service.spec.ts")
                .exists()
        );
    }

    #[test]
    fn test_missing_generator_binary_exits_one() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("svcgen.toml");
        fs::write(
            &config,
            "[toolchain]\nnpm = \"true\"\nnest = \"svcgen-no-such-binary\"\n",
        )
        .unwrap();

        svcgen(temp.path())
            .arg("orders")
            .arg("--config")
            .arg(&config)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("svcgen-no-such-binary"));
    }
}
