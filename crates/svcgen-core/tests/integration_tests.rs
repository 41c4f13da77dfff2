//! Integration tests for svcgen-core, wired to the in-memory adapters.

use std::path::PathBuf;

use svcgen_adapters::{MemoryFilesystem, RecordingExecutor};
use svcgen_core::{
    application::{ApplicationError, ExitOutcome},
    prelude::*,
};

const EXPECTED_ORDERS_CONTROLLER: &str = "import { Controller, Get } from '@nestjs/common';

@Controller('orders')
export class OrdersController {
@Get()
getOrder() {
    return 'Hello orders Service';
}
}";

/// Executor that behaves like the NestJS CLI on a memory filesystem:
/// `nest new` lays down the skeleton and `nest generate` adds the triad.
struct FakeNest {
    recorder: RecordingExecutor,
    fs: MemoryFilesystem,
}

impl CommandExecutor for FakeNest {
    fn run(&self, command: &CommandSpec) -> ScaffoldResult<ExitOutcome> {
        let outcome = self.recorder.run(command)?;
        if !outcome.is_success() || command.program != "nest" {
            return Ok(outcome);
        }

        let args: Vec<&str> = command.args.iter().map(String::as_str).collect();
        match args.as_slice() {
            ["new", name, ..] => {
                let root = command.cwd.join(name);
                for (file, content) in [
                    ("package.json", "{}"),
                    ("src/main.ts", "bootstrap()"),
                    ("src/app.controller.ts", "app"),
                    ("src/app.controller.spec.ts", "describe()"),
                    ("src/common/guards/auth.guard.spec.ts", "describe()"),
                    ("test/app.e2e-spec.ts", "e2e"),
                ] {
                    seed(&self.fs, root.join(file), content);
                }
            }
            ["generate", schematic, name] => {
                let dir = command.cwd.join("src").join(name);
                seed(
                    &self.fs,
                    dir.join(format!("{name}.{schematic}.ts")),
                    "generated",
                );
                if *schematic != "module" {
                    seed(
                        &self.fs,
                        dir.join(format!("{name}.{schematic}.spec.ts")),
                        "describe()",
                    );
                }
            }
            _ => {}
        }
        Ok(outcome)
    }
}

fn seed(fs: &MemoryFilesystem, path: PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs.create_dir_all(parent).unwrap();
    }
    fs.write_file(&path, content).unwrap();
}

fn setup(recorder: RecordingExecutor) -> (ScaffoldService, MemoryFilesystem) {
    let fs = MemoryFilesystem::new();
    let executor = FakeNest {
        recorder,
        fs: fs.clone(),
    };
    let service = ScaffoldService::new(Box::new(executor), Box::new(fs.clone()), Toolchain::default());
    (service, fs)
}

fn orders() -> ServiceName {
    ServiceName::parse("orders").unwrap()
}

#[test]
fn full_run_replaces_controller_with_template() {
    let (service, fs) = setup(RecordingExecutor::new());

    let report = service.scaffold(&orders(), "/work").unwrap();

    assert_eq!(
        fs.read_file("/work/orders/src/orders/orders.controller.ts")
            .as_deref(),
        Some(EXPECTED_ORDERS_CONTROLLER)
    );
    assert_eq!(
        report.controller_path,
        PathBuf::from("/work/orders/src/orders/orders.controller.ts")
    );
}

#[test]
fn full_run_removes_generated_stubs_one_level_below_src() {
    let (service, fs) = setup(RecordingExecutor::new());

    let report = service.scaffold(&orders(), "/work").unwrap();

    assert_eq!(
        report.removed_stubs,
        vec![
            PathBuf::from("src/orders/orders.controller.spec.ts"),
            PathBuf::from("src/orders/orders.service.spec.ts"),
        ]
    );
    for kept in [
        "/work/orders/package.json",
        "/work/orders/src/main.ts",
        "/work/orders/src/app.controller.ts",
        "/work/orders/src/app.controller.spec.ts",
        "/work/orders/src/common/guards/auth.guard.spec.ts",
        "/work/orders/src/orders/orders.module.ts",
        "/work/orders/src/orders/orders.service.ts",
        "/work/orders/test/app.e2e-spec.ts",
    ] {
        assert!(fs.read_file(kept).is_some(), "{kept} should be untouched");
    }
}

#[test]
fn camel_case_name_gets_capitalized_class() {
    let (service, fs) = setup(RecordingExecutor::new());
    let name = ServiceName::parse("orderService").unwrap();

    service.scaffold(&name, "/work").unwrap();

    let content = fs
        .read_file("/work/orderService/src/orderService/orderService.controller.ts")
        .unwrap();
    assert!(content.contains("export class OrderServiceController {"));
    assert!(content.contains("@Controller('orderService')"));
}

#[test]
fn missing_tool_is_installed_first() {
    let recorder = RecordingExecutor::new().fail_on("npm list", 1);
    let (service, _fs) = setup(recorder.clone());

    let report = service.scaffold(&orders(), "/work").unwrap();

    let lines = recorder.lines();
    assert_eq!(lines[0], "npm list -g @nestjs/cli");
    assert_eq!(lines[1], "npm install -g @nestjs/cli");
    assert!(report.tool_installed);
}

#[test]
fn generator_failure_aborts_remaining_pipeline() {
    let recorder = RecordingExecutor::new().fail_on("nest generate module", 1);
    let (service, fs) = setup(recorder.clone());

    let err = service.scaffold(&orders(), "/work").unwrap_err();

    assert!(matches!(
        err,
        ScaffoldError::Application(ApplicationError::CommandFailed {
            step: Step::GenerateModule,
            ..
        })
    ));
    assert_eq!(recorder.lines().last().unwrap(), "nest generate module orders");
    assert_eq!(recorder.calls().len(), 3);
    // Partially scaffolded tree is left as is.
    assert!(fs.read_file("/work/orders/src/app.controller.spec.ts").is_some());
    assert!(
        fs.read_file("/work/orders/src/orders/orders.controller.ts")
            .is_none()
    );
}

#[test]
fn create_failure_runs_no_generators() {
    let recorder = RecordingExecutor::new().fail_on("nest new", 1);
    let (service, fs) = setup(recorder.clone());

    assert!(service.scaffold(&orders(), "/work").is_err());
    assert!(!recorder.lines().iter().any(|l| l.contains("generate")));
    assert!(fs.list_all().is_empty());
}

#[test]
fn existing_project_directory_is_rejected_untouched() {
    let recorder = RecordingExecutor::new();
    let (service, fs) = setup(recorder.clone());
    seed(&fs, PathBuf::from("/work/orders/keep.txt"), "mine");

    let err = service.scaffold(&orders(), "/work").unwrap_err();

    assert!(matches!(
        err,
        ScaffoldError::Application(ApplicationError::ProjectExists { .. })
    ));
    assert!(recorder.calls().is_empty());
    assert_eq!(fs.read_file("/work/orders/keep.txt").as_deref(), Some("mine"));
}

#[test]
fn stub_that_cannot_be_removed_is_reported() {
    let recorder = RecordingExecutor::new();
    let fs = MemoryFilesystem::new().with_read_only("/work/orders/src/orders/orders.service.spec.ts");
    let executor = FakeNest {
        recorder,
        fs: fs.clone(),
    };
    let service = ScaffoldService::new(Box::new(executor), Box::new(fs.clone()), Toolchain::default());

    let report = service.scaffold(&orders(), "/work").unwrap();

    assert_eq!(
        report.failed_removals,
        vec![PathBuf::from("src/orders/orders.service.spec.ts")]
    );
    assert_eq!(
        report.removed_stubs,
        vec![PathBuf::from("src/orders/orders.controller.spec.ts")]
    );
}
