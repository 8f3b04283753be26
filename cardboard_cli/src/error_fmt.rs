//! Human-readable error descriptions and structured JSON error formatting.

use cardboard_core::error::{BuildError, TriggerError};

/// Map an eyre::Report to a human-readable explanation with likely causes and fix hints.
pub fn humanize(err: &eyre::Report) -> String {
    // Typed matches first
    if let Some(be) = err.downcast_ref::<BuildError>() {
        return match be {
            BuildError::InvalidConfig(msg) => format!(
                "What happened: Invalid configuration ({msg}).\nLikely causes: Out-of-range values in the [magnet] or [trigger] section.\nHow to fix: Edit the config file, then rerun `cardboard self-check`."
            ),
            BuildError::InvalidKey(key) => format!(
                "What happened: {key:?} is not a usable trigger key.\nLikely causes: Empty or whitespace-only key name in the config or trace.\nHow to fix: Use a key name such as \"space\", \"enter\", or \"a\"."
            ),
        };
    }

    if let Some(te) = err.downcast_ref::<TriggerError>() {
        return match te {
            TriggerError::Config(msg) => format!(
                "What happened: Configuration rejected ({msg}).\nLikely causes: A value outside its allowed range.\nHow to fix: Fix the named key in the TOML and rerun."
            ),
            TriggerError::Input(msg) => format!(
                "What happened: Invalid input ({msg}).\nLikely causes: A bad command-line value or a malformed trace row.\nHow to fix: Check the value named above and rerun."
            ),
        };
    }

    if let Some(te) = err.downcast_ref::<toml::de::Error>() {
        return format!(
            "What happened: Config file is not valid TOML.\nLikely causes: Syntax error or a value of the wrong type.\nHow to fix: Fix the file at the location below.\n{te}"
        );
    }

    // String-based heuristics for errors coming from file loading
    let msg = err.to_string();
    let lower = msg.to_ascii_lowercase();

    if lower.contains("trace csv must have headers") {
        return format!(
            "Invalid headers in trace CSV. Expected '{}'.",
            cardboard_config::TRACE_HEADERS.join(",")
        );
    }

    if lower.contains("open trace csv") || lower.contains("read config") {
        return format!(
            "What happened: Could not open an input file.\nLikely causes: Wrong path or missing read permission.\nHow to fix: Check the path and rerun. Original: {msg}"
        );
    }

    if lower.contains("invalid csv row") {
        return format!(
            "What happened: The trace has a malformed row.\nLikely causes: Non-numeric value, negative dt, or timestamps out of order.\nHow to fix: Fix the row named here: {msg}"
        );
    }

    // Generic fallback
    let mut cause = String::new();
    if let Some(src) = err.source() {
        cause = format!(" Cause: {src}");
    }
    format!(
        "Something went wrong.{cause}\nHow to fix: Re-run with --log-level=debug for details. Original: {msg}"
    )
}

/// Stable exit codes: 3 for configuration problems, 4 for bad input, 1 otherwise.
pub fn exit_code_for_error(err: &eyre::Report) -> i32 {
    if err.downcast_ref::<BuildError>().is_some() || err.downcast_ref::<toml::de::Error>().is_some()
    {
        return 3;
    }
    match err.downcast_ref::<TriggerError>() {
        Some(TriggerError::Config(_)) => 3,
        Some(TriggerError::Input(_)) => 4,
        None => 1,
    }
}

fn reason_name(err: &eyre::Report) -> &'static str {
    if let Some(be) = err.downcast_ref::<BuildError>() {
        return match be {
            BuildError::InvalidConfig(_) => "InvalidConfig",
            BuildError::InvalidKey(_) => "InvalidKey",
        };
    }
    match err.downcast_ref::<TriggerError>() {
        Some(TriggerError::Config(_)) => "InvalidConfig",
        Some(TriggerError::Input(_)) => "InvalidInput",
        None if err.downcast_ref::<toml::de::Error>().is_some() => "ConfigParse",
        None => "Error",
    }
}

/// Structured JSON for errors when --json is enabled.
pub fn format_error_json(err: &eyre::Report) -> String {
    serde_json::json!({
        "reason": reason_name(err),
        "exit_code": exit_code_for_error(err),
        "message": humanize(err),
    })
    .to_string()
}
