//! Launch argument declarations and validation

use crate::{
    config::{ArmType, BaseType, CameraModel, EndEffector, FtSensor, LaserModel, WristModel},
    error::{LaunchError, Result},
};
use once_cell::sync::Lazy;
use std::collections::HashMap;

const BOOL_CHOICES: &[&str] = &["True", "False"];

/// Value domain of a declared argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    /// One of a fixed set of strings
    Choice(&'static [&'static str]),
    /// `true`/`false` in any case, stored as `True`/`False`
    Bool,
    /// Free-form string
    Text,
}

/// Declared launch argument with metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentDeclaration {
    pub name: &'static str,
    pub default: &'static str,
    pub description: &'static str,
    pub kind: ArgumentKind,
}

impl ArgumentDeclaration {
    const fn choice(
        name: &'static str,
        default: &'static str,
        description: &'static str,
        choices: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            default,
            description,
            kind: ArgumentKind::Choice(choices),
        }
    }

    /// Choices advertised for this argument, empty for free-form text
    pub fn choices(&self) -> &'static [&'static str] {
        match self.kind {
            ArgumentKind::Choice(choices) => choices,
            ArgumentKind::Bool => BOOL_CHOICES,
            ArgumentKind::Text => &[],
        }
    }

    pub fn choice_strings(&self) -> Vec<String> {
        self.choices().iter().map(|s| s.to_string()).collect()
    }

    pub fn validate(&self, value: &str) -> Result<()> {
        match self.kind {
            ArgumentKind::Choice(choices) => {
                if choices.contains(&value) {
                    Ok(())
                } else {
                    Err(LaunchError::InvalidChoice {
                        argument: self.name.to_string(),
                        value: value.to_string(),
                        choices: self.choice_strings(),
                    })
                }
            }
            ArgumentKind::Bool => parse_bool(self.name, value).map(|_| ()),
            ArgumentKind::Text => Ok(()),
        }
    }

    /// Validate `value` and return the form forwarded to subsystems
    pub fn canonicalize(&self, value: &str) -> Result<String> {
        match self.kind {
            ArgumentKind::Bool => Ok(bool_str(parse_bool(self.name, value)?).to_string()),
            _ => self.validate(value).map(|_| value.to_string()),
        }
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Parse a boolean launch argument value; surrounding whitespace is rejected
pub fn parse_bool(argument: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(LaunchError::InvalidBool {
            argument: argument.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Hardware arguments shared by every TIAGo Dual launch description
pub const HARDWARE_ARGUMENTS: &[ArgumentDeclaration] = &[
    ArgumentDeclaration::choice("base_type", "pmb2", "Base type", BaseType::CHOICES),
    ArgumentDeclaration::choice(
        "arm_type_right",
        "tiago-arm",
        "Type of the right arm",
        ArmType::CHOICES,
    ),
    ArgumentDeclaration::choice(
        "arm_type_left",
        "tiago-arm",
        "Type of the left arm",
        ArmType::CHOICES,
    ),
    ArgumentDeclaration::choice(
        "end_effector_right",
        "pal-gripper",
        "End effector model of the right arm",
        EndEffector::CHOICES,
    ),
    ArgumentDeclaration::choice(
        "end_effector_left",
        "pal-gripper",
        "End effector model of the left arm",
        EndEffector::CHOICES,
    ),
    ArgumentDeclaration::choice(
        "ft_sensor_right",
        "schunk-ft",
        "FT sensor model of the right wrist",
        FtSensor::CHOICES,
    ),
    ArgumentDeclaration::choice(
        "ft_sensor_left",
        "schunk-ft",
        "FT sensor model of the left wrist",
        FtSensor::CHOICES,
    ),
    ArgumentDeclaration::choice(
        "wrist_model_right",
        "wrist-2010",
        "Wrist model of the right arm",
        WristModel::CHOICES,
    ),
    ArgumentDeclaration::choice(
        "wrist_model_left",
        "wrist-2010",
        "Wrist model of the left arm",
        WristModel::CHOICES,
    ),
    ArgumentDeclaration::choice(
        "camera_model",
        "orbbec-astra",
        "Head camera model",
        CameraModel::CHOICES,
    ),
    ArgumentDeclaration::choice(
        "laser_model",
        "sick-571",
        "Base laser model",
        LaserModel::CHOICES,
    ),
    ArgumentDeclaration {
        name: "has_screen",
        default: "False",
        description: "Specify if the robot has a screen",
        kind: ArgumentKind::Bool,
    },
];

pub const USE_SIM_TIME: ArgumentDeclaration = ArgumentDeclaration {
    name: "use_sim_time",
    default: "False",
    description: "Use simulation time",
    kind: ArgumentKind::Bool,
};

pub const NAMESPACE: ArgumentDeclaration = ArgumentDeclaration {
    name: "namespace",
    default: "",
    description: "Define namespace of the robot",
    kind: ArgumentKind::Text,
};

/// Complete robot schema: hardware arguments, sim time and namespace
pub static ROBOT_ARGUMENTS: Lazy<Vec<ArgumentDeclaration>> = Lazy::new(|| {
    HARDWARE_ARGUMENTS
        .iter()
        .copied()
        .chain([USE_SIM_TIME, NAMESPACE])
        .collect()
});

/// Resolve declared arguments in declaration order.
///
/// Priority: 1) provided value, 2) declared default. Every value is
/// validated against its declaration; the first invalid one aborts.
/// Booleans are returned as `True`/`False`.
pub fn resolve_arguments<'a, I>(
    declarations: I,
    provided: &HashMap<String, String>,
) -> Result<Vec<(String, String)>>
where
    I: IntoIterator<Item = &'a ArgumentDeclaration>,
{
    declarations
        .into_iter()
        .map(|decl| {
            let value = provided
                .get(decl.name)
                .map(String::as_str)
                .unwrap_or(decl.default);
            Ok((decl.name.to_string(), decl.canonicalize(value)?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(name: &str) -> ArgumentDeclaration {
        *ROBOT_ARGUMENTS
            .iter()
            .find(|decl| decl.name == name)
            .unwrap()
    }

    #[test]
    fn test_schema_order() {
        let names: Vec<_> = ROBOT_ARGUMENTS.iter().map(|decl| decl.name).collect();
        assert_eq!(names.len(), 14);
        assert_eq!(names[0], "base_type");
        assert_eq!(names[1], "arm_type_right");
        assert_eq!(names[12], "use_sim_time");
        assert_eq!(names[13], "namespace");
    }

    #[test]
    fn test_defaults_are_valid() {
        for decl in ROBOT_ARGUMENTS.iter() {
            assert!(
                decl.validate(decl.default).is_ok(),
                "default of {} should validate",
                decl.name
            );
        }
    }

    #[test]
    fn test_validate_choice() {
        let decl = find("end_effector_left");
        assert!(decl.validate("pal-hey5").is_ok());
        assert!(decl.validate("custom").is_ok());

        let err = decl.validate("robotiq").unwrap_err();
        assert!(err.to_string().contains("robotiq"));
        assert!(err.to_string().contains("pal-gripper"));
    }

    #[test]
    fn test_validate_choice_is_case_sensitive() {
        assert!(find("base_type").validate("PMB2").is_err());
    }

    #[test]
    fn test_validate_bool() {
        let decl = find("use_sim_time");
        assert!(decl.validate("True").is_ok());
        assert!(decl.validate("false").is_ok());
        assert!(decl.validate("FALSE").is_ok());
        assert!(decl.validate("1").is_err());
        assert!(decl.validate(" true ").is_err());
        assert!(decl.validate("FALSE\n").is_err());
        assert_eq!(decl.choices(), &["True", "False"]);
    }

    #[test]
    fn test_validate_text() {
        let decl = find("namespace");
        assert!(decl.validate("").is_ok());
        assert!(decl.validate("/any/thing").is_ok());
        assert!(decl.choices().is_empty());
    }

    #[test]
    fn test_resolve_uses_provided_then_default() {
        let mut provided = HashMap::new();
        provided.insert("camera_model".to_string(), "asus-xtion".to_string());

        let resolved = resolve_arguments(ROBOT_ARGUMENTS.iter(), &provided).unwrap();
        let camera = resolved.iter().find(|(k, _)| k == "camera_model").unwrap();
        assert_eq!(camera.1, "asus-xtion");
        let laser = resolved.iter().find(|(k, _)| k == "laser_model").unwrap();
        assert_eq!(laser.1, "sick-571");
    }

    #[test]
    fn test_resolve_canonicalizes_booleans() {
        let mut provided = HashMap::new();
        provided.insert("has_screen".to_string(), "tRuE".to_string());

        let resolved = resolve_arguments(ROBOT_ARGUMENTS.iter(), &provided).unwrap();
        let has_screen = resolved.iter().find(|(k, _)| k == "has_screen").unwrap();
        assert_eq!(has_screen.1, "True");
        let use_sim_time = resolved.iter().find(|(k, _)| k == "use_sim_time").unwrap();
        assert_eq!(use_sim_time.1, "False");
    }

    #[test]
    fn test_resolve_rejects_invalid() {
        let mut provided = HashMap::new();
        provided.insert("arm_type_right".to_string(), "ur5".to_string());

        let result = resolve_arguments(ROBOT_ARGUMENTS.iter(), &provided);
        assert!(matches!(
            result,
            Err(LaunchError::InvalidChoice { ref argument, .. }) if argument == "arm_type_right"
        ));
    }
}
