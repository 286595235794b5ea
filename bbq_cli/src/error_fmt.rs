//! Human-readable error descriptions and structured JSON error formatting.

use bbq_core::BuildError;

/// Map an `eyre::Report` to a human-readable explanation with likely
/// causes and a fix hint.
pub fn humanize(err: &eyre::Report) -> String {
    if let Some(be) = err.downcast_ref::<BuildError>() {
        return match be {
            BuildError::MissingCut => {
                "What happened: No cut of meat was specified.\nHow to fix: Pass --cut (e.g. --cut brisket).".to_string()
            }
            BuildError::MissingEquipment => {
                "What happened: No smoker equipment was specified.\nHow to fix: Pass --equipment (e.g. --equipment offset).".to_string()
            }
            BuildError::MissingTarget => {
                "What happened: No target temperature was specified.\nHow to fix: Pass --target-f (e.g. --target-f 203).".to_string()
            }
            BuildError::InvalidConfig(msg) => format!(
                "What happened: Invalid session configuration ({msg}).\nHow to fix: Adjust the offending flag and rerun."
            ),
        };
    }

    format!(
        "What happened: {err}.\nHow to fix: Re-run with --log-level=debug or set RUST_LOG for more detail."
    )
}

/// Render an `eyre::Report` as a single JSON line for `--json` mode.
pub fn format_error_json(err: &eyre::Report) -> String {
    let kind = if let Some(be) = err.downcast_ref::<BuildError>() {
        match be {
            BuildError::MissingCut => "missing_cut",
            BuildError::MissingEquipment => "missing_equipment",
            BuildError::MissingTarget => "missing_target",
            BuildError::InvalidConfig(_) => "invalid_config",
        }
    } else {
        "error"
    };
    serde_json::json!({
        "error": kind,
        "message": err.to_string(),
    })
    .to_string()
}

pub fn exit_code_for_error(err: &eyre::Report) -> i32 {
    if err.downcast_ref::<BuildError>().is_some() {
        2
    } else {
        1
    }
}
