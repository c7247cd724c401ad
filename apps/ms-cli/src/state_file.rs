//! Loading a [`MotionState`] from a YAML or JSON file.

use std::path::Path;

use ms_solver::MotionState;

use crate::error::CliResult;
use crate::inputs;

/// Load a state file; `.json` is parsed as JSON, anything else as YAML.
pub fn load_state(path: &Path) -> CliResult<MotionState> {
    let text = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let state = if is_json {
        parse_json(&text)?
    } else {
        parse_yaml(&text)?
    };
    tracing::debug!(path = %path.display(), ?state, "loaded motion state");
    Ok(state)
}

pub fn parse_yaml(text: &str) -> CliResult<MotionState> {
    Ok(serde_yaml::from_str(text)?)
}

pub fn parse_json(text: &str) -> CliResult<MotionState> {
    Ok(serde_json::from_str(text)?)
}

/// Reject NaN and infinities in any field.
pub fn check_finite(state: &MotionState) -> CliResult<()> {
    inputs::check_finite(&[
        ("time", state.time),
        ("initial_coordinate", state.initial_coordinate),
        ("initial_velocity", state.initial_velocity),
        ("velocity", state.velocity),
        ("acceleration", state.acceleration),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn yaml_state_with_missing_fields() {
        let state = parse_yaml("time: 10.0\ninitial_velocity: 5.0\nacceleration: 2.0\n").unwrap();
        assert_eq!(state.initial_coordinate, 0.0);
        assert_eq!(state.displacement().unwrap(), 150.0);
    }

    #[test]
    fn json_state() {
        let state = parse_json(r#"{"time": 2.0, "initial_velocity": 1.0, "acceleration": 1.0}"#)
            .unwrap();
        assert_eq!(state.displacement().unwrap(), 4.0);
    }

    #[test]
    fn bad_yaml_is_reported() {
        let err = parse_yaml("time: [not, a, number]").unwrap_err();
        assert!(matches!(err, CliError::Yaml(_)));
    }

    #[test]
    fn non_finite_field_rejected() {
        let state = MotionState::new().with_acceleration(f64::INFINITY);
        let err = check_finite(&state).unwrap_err();
        assert!(err.to_string().contains("acceleration"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_state(Path::new("/nonexistent/motion-state.yaml")).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
