//! Typed robot hardware configuration

use crate::{
    arguments::{parse_bool, resolve_arguments, ROBOT_ARGUMENTS},
    error::{LaunchError, Result},
};
use std::{collections::HashMap, fmt, str::FromStr};

/// Enumerated launch argument domain with its accepted spellings
pub trait LaunchChoice: FromStr<Err = String> {
    const CHOICES: &'static [&'static str];
}

/// Declares an enumerated launch argument domain.
macro_rules! launch_choice {
    (
        $(#[$meta:meta])*
        $name:ident (default $default:ident) {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const CHOICES: &'static [&'static str] = &[$($text),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl LaunchChoice for $name {
            const CHOICES: &'static [&'static str] = $name::CHOICES;
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err(other.to_string()),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

launch_choice! {
    /// Arm mounted on one side of the torso
    ArmType (default TiagoArm) {
        NoArm => "no-arm",
        TiagoArm => "tiago-arm",
        Sea => "sea",
    }
}

launch_choice! {
    EndEffector (default PalGripper) {
        PalGripper => "pal-gripper",
        PalHey5 => "pal-hey5",
        Custom => "custom",
        NoEndEffector => "no-end-effector",
    }
}

launch_choice! {
    /// Force/torque sensor between wrist and end effector
    FtSensor (default SchunkFt) {
        SchunkFt => "schunk-ft",
        NoFtSensor => "no-ft-sensor",
    }
}

launch_choice! {
    WristModel (default Wrist2010) {
        Wrist2010 => "wrist-2010",
        Wrist2017 => "wrist-2017",
    }
}

launch_choice! {
    CameraModel (default OrbbecAstra) {
        NoCamera => "no-camera",
        OrbbecAstra => "orbbec-astra",
        OrbbecAstraPro => "orbbec-astra-pro",
        AsusXtion => "asus-xtion",
    }
}

launch_choice! {
    LaserModel (default Sick571) {
        NoLaser => "no-laser",
        Sick571 => "sick-571",
        Sick561 => "sick-561",
        Sick551 => "sick-551",
        Hokuyo => "hokuyo",
    }
}

launch_choice! {
    /// Mobile base
    BaseType (default Pmb2) {
        Pmb2 => "pmb2",
        OmniBase => "omni_base",
    }
}

/// Fully validated launch configuration of the robot.
///
/// Built once from the raw `name:=value` arguments and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LaunchConfiguration {
    pub arm_type_right: ArmType,
    pub arm_type_left: ArmType,
    pub end_effector_right: EndEffector,
    pub end_effector_left: EndEffector,
    pub ft_sensor_right: FtSensor,
    pub ft_sensor_left: FtSensor,
    pub wrist_model_right: WristModel,
    pub wrist_model_left: WristModel,
    pub camera_model: CameraModel,
    pub laser_model: LaserModel,
    pub base_type: BaseType,
    pub has_screen: bool,
    pub namespace: String,
    pub use_sim_time: bool,
}

impl LaunchConfiguration {
    /// Resolve and validate raw arguments against the robot schema.
    ///
    /// Missing arguments take their declared default. Arguments outside the
    /// schema are ignored.
    pub fn from_args(args: &HashMap<String, String>) -> Result<Self> {
        let resolved: HashMap<String, String> = resolve_arguments(ROBOT_ARGUMENTS.iter(), args)?
            .into_iter()
            .collect();

        let get = |name: &str| lookup(&resolved, name);

        Ok(Self {
            arm_type_right: parse_choice("arm_type_right", get("arm_type_right")?)?,
            arm_type_left: parse_choice("arm_type_left", get("arm_type_left")?)?,
            end_effector_right: parse_choice("end_effector_right", get("end_effector_right")?)?,
            end_effector_left: parse_choice("end_effector_left", get("end_effector_left")?)?,
            ft_sensor_right: parse_choice("ft_sensor_right", get("ft_sensor_right")?)?,
            ft_sensor_left: parse_choice("ft_sensor_left", get("ft_sensor_left")?)?,
            wrist_model_right: parse_choice("wrist_model_right", get("wrist_model_right")?)?,
            wrist_model_left: parse_choice("wrist_model_left", get("wrist_model_left")?)?,
            camera_model: parse_choice("camera_model", get("camera_model")?)?,
            laser_model: parse_choice("laser_model", get("laser_model")?)?,
            base_type: parse_choice("base_type", get("base_type")?)?,
            has_screen: parse_bool("has_screen", get("has_screen")?)?,
            namespace: get("namespace")?.to_string(),
            use_sim_time: parse_bool("use_sim_time", get("use_sim_time")?)?,
        })
    }
}

fn lookup<'a>(resolved: &'a HashMap<String, String>, name: &str) -> Result<&'a str> {
    resolved
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| LaunchError::UndefinedConfiguration(name.to_string()))
}

fn parse_choice<T: LaunchChoice>(argument: &str, value: &str) -> Result<T> {
    value.parse().map_err(|value| LaunchError::InvalidChoice {
        argument: argument.to_string(),
        value,
        choices: T::CHOICES.iter().map(|s| s.to_string()).collect(),
    })
}
