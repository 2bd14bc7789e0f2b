//! Every static rejection is reported once, with its catalog message.
//!
//! Each file under `tests/ui/fail` is built as a binary of a scratch crate
//! that depends on this one. The compiler's JSON diagnostics are compared with
//! [`Contract::message`] directly, so the check holds across toolchains that
//! lay out spans and notes differently.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;

use delegates::Contract;
use serde_json::Value;

type TestResult = Result<(), Box<dyn Error>>;

macro_rules! rejects {
    ($($case:ident => $contract:ident $(, $fragment:literal)?;)*) => {
        const CASES: &[&str] = &[$(stringify!($case)),*];

        $(
            #[test]
            fn $case() -> TestResult {
                assert_rejected(stringify!($case), Contract::$contract, &[$($fragment)?])
            }
        )*
    };
}

rejects! {
    invalid_signature => InvalidSignature;
    higher_ranked_signature => InvalidSignature, "named lifetime";
    invalid_behavior => InvalidBehavior;
    optional_with_return => BehaviorConflictsWithReturn;
    forwarding_returns_value => ForwardingReturnsValue;
    forwarding_mutable_reference => MutableForwardingArgument;
    forwarding_nested_cell => MutableForwardingArgument;
    forwarding_cell_field => MutableForwardingArgument, "read_only!";
    not_a_functor => NotAFunctor;
    closure_argument_mismatch => IncompatibleTarget, "fn(u64) -> u64";
    closure_return_mismatch => IncompatibleTarget, "fn(u32) -> u32";
    fn_item_mismatch => IncompatibleTarget, "fn(i16) -> i16";
    method_mismatch => IncompatibleTarget, "fn(u16) -> u32";
    method_takes_mut_receiver => IncompatibleTarget;
    inline_too_large => InlineTargetTooLarge;
    method_not_zero_sized => MethodNotZeroSized;
}

fn scratch() -> Result<&'static Path, Box<dyn Error>> {
    static ROOT: OnceLock<Result<PathBuf, String>> = OnceLock::new();
    match ROOT.get_or_init(|| prepare().map_err(|err| err.to_string())) {
        Ok(root) => Ok(root),
        Err(err) => Err(err.clone().into()),
    }
}

/// Writes the scratch crate with one binary per case.
fn prepare() -> Result<PathBuf, Box<dyn Error>> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let root = Path::new(env!("CARGO_TARGET_TMPDIR")).join("contracts");
    fs::create_dir_all(&root)?;

    let mut manifest = format!(
        r#"[package]
name = "delegates-contracts"
version = "0.0.0"
edition = "2021"
publish = false

[workspace]

[dependencies]
delegates = {{ path = {dir:?} }}
zerocopy = {{ version = "0.8", features = ["derive"] }}
"#,
        dir = manifest_dir,
    );
    for case in CASES {
        let source = manifest_dir.join("tests/ui/fail").join(format!("{case}.rs"));
        manifest.push_str(&format!("\n[[bin]]\nname = {case:?}\npath = {source:?}\n"));
    }
    fs::write(root.join("Cargo.toml"), manifest)?;

    // Same versions as the crate under test, so the scratch build stays offline.
    let lock = manifest_dir.join("Cargo.lock");
    if lock.exists() {
        fs::copy(lock, root.join("Cargo.lock"))?;
    }

    Ok(root)
}

/// Error-level diagnostics the compiler raised for `case`.
fn errors(case: &str) -> Result<Vec<Value>, Box<dyn Error>> {
    let root = scratch()?;
    let cargo = std::env::var_os("CARGO").unwrap_or_else(|| "cargo".into());
    let output = Command::new(cargo)
        .args(["build", "--quiet", "--offline", "--message-format=json", "--bin", case])
        .arg("--manifest-path")
        .arg(root.join("Cargo.toml"))
        .env("CARGO_TARGET_DIR", root.join("target"))
        .env_remove("RUSTFLAGS")
        .output()?;

    assert!(!output.status.success(), "{case} compiled, but it must be rejected");

    let stdout = String::from_utf8(output.stdout)?;
    let errors = stdout
        .lines()
        .filter_map(|line| serde_json::from_str::<Value>(line).ok())
        .filter(|record| record["reason"] == "compiler-message" && record["target"]["name"] == case)
        .map(|record| record["message"].clone())
        .filter(|message| message["level"] == "error")
        .filter(|message| {
            !message["message"]
                .as_str()
                .is_some_and(|text| text.starts_with("aborting due to"))
        })
        .collect::<Vec<_>>();

    assert!(
        !errors.is_empty(),
        "{case} failed without a compiler error:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(errors)
}

fn assert_rejected(case: &str, contract: Contract, fragments: &[&str]) -> TestResult {
    let errors = errors(case)?;
    let rendered: Vec<&str> = errors
        .iter()
        .map(|error| error["rendered"].as_str().unwrap_or_default())
        .collect();

    match contract {
        // Const assertions: the catalog text is the panic payload inside the
        // evaluation error, not the headline.
        Contract::InlineTargetTooLarge | Contract::MethodNotZeroSized => {
            let hits = rendered.iter().filter(|text| text.contains(contract.message())).count();
            assert_eq!(hits, 1, "{case}: {rendered:#?}");
            assert!(rendered[0].contains(contract.message()), "{case}: {rendered:#?}");
        }
        _ => {
            assert_eq!(errors.len(), 1, "{case}: {rendered:#?}");
            assert_eq!(errors[0]["message"], contract.message(), "{case}: {rendered:#?}");
        }
    }

    for fragment in fragments {
        assert!(rendered[0].contains(fragment), "{case}: missing {fragment:?} in {}", rendered[0]);
    }
    Ok(())
}
