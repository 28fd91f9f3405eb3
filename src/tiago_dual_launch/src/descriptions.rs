//! Built-in launch descriptions and the catalog of external subsystems

use crate::{
    actions::{Action, IncludeAction, MotionConfigAction, NodeAction},
    arguments::{ArgumentDeclaration, HARDWARE_ARGUMENTS, NAMESPACE, USE_SIM_TIME},
    substitution::Substitution,
};
use once_cell::sync::Lazy;

pub const BRINGUP_PACKAGE: &str = "tiago_dual_bringup";
pub const DESCRIPTION_PACKAGE: &str = "tiago_dual_description";

pub const PLAY_MOTION2_CONFIG: &str = "play_motion2_config";

const ARM_ARGUMENTS: &[&str] = &[
    "arm_type_right",
    "arm_type_left",
    "end_effector_right",
    "end_effector_left",
    "ft_sensor_right",
    "ft_sensor_left",
];

const ROBOT_STATE_ARGUMENTS: &[&str] = &[
    "arm_type_right",
    "arm_type_left",
    "end_effector_right",
    "end_effector_left",
    "ft_sensor_right",
    "ft_sensor_left",
    "wrist_model_right",
    "wrist_model_left",
    "laser_model",
    "camera_model",
    "base_type",
    "has_screen",
    "namespace",
    "use_sim_time",
];

/// Launch description composed by this crate
#[derive(Debug, Clone)]
pub struct LaunchDescription {
    pub package: &'static str,
    pub file: &'static str,
    pub arguments: Vec<ArgumentDeclaration>,
    pub actions: Vec<Action>,
}

impl LaunchDescription {
    /// `<package>/launch/<file>`
    pub fn id(&self) -> String {
        format!("{}/launch/{}", self.package, self.file)
    }

    pub fn declares(&self, name: &str) -> bool {
        self.arguments.iter().any(|decl| decl.name == name)
    }
}

/// Launch description of a subsystem this crate does not compose itself
#[derive(Debug, Clone)]
pub struct ExternalSubsystem {
    pub package: &'static str,
    pub file: &'static str,
    pub accepts: &'static [&'static str],
}

impl ExternalSubsystem {
    pub fn accepts(&self, name: &str) -> bool {
        self.accepts.contains(&name)
    }
}

fn robot_arguments(extra: &[ArgumentDeclaration]) -> Vec<ArgumentDeclaration> {
    HARDWARE_ARGUMENTS
        .iter()
        .chain(extra)
        .copied()
        .collect()
}

fn robot_state_publisher() -> Action {
    Action::Include(
        IncludeAction::new(DESCRIPTION_PACKAGE, "robot_state_publisher.launch.py")
            .forward(ROBOT_STATE_ARGUMENTS),
    )
}

fn bringup() -> LaunchDescription {
    LaunchDescription {
        package: BRINGUP_PACKAGE,
        file: "tiago_dual_bringup.launch.py",
        arguments: robot_arguments(&[USE_SIM_TIME, NAMESPACE]),
        actions: vec![
            Action::Include(
                IncludeAction::new(
                    "tiago_dual_controller_configuration",
                    "default_controllers.launch.py",
                )
                .forward(ARM_ARGUMENTS),
            ),
            Action::Include(
                IncludeAction::new(BRINGUP_PACKAGE, "tiago_dual_play_motion2.launch.py")
                    .forward(ARM_ARGUMENTS)
                    .forward(&["use_sim_time"]),
            ),
            Action::Include(IncludeAction::new(BRINGUP_PACKAGE, "twist_mux.launch.py")),
            robot_state_publisher(),
        ],
    }
}

fn play_motion2() -> LaunchDescription {
    LaunchDescription {
        package: BRINGUP_PACKAGE,
        file: "tiago_dual_play_motion2.launch.py",
        arguments: robot_arguments(&[USE_SIM_TIME]),
        actions: vec![
            Action::MotionConfig(MotionConfigAction::new(PLAY_MOTION2_CONFIG)),
            Action::Include(
                IncludeAction::new("play_motion2", "play_motion2.launch.py")
                    .forward(&["use_sim_time", PLAY_MOTION2_CONFIG]),
            ),
        ],
    }
}

fn show() -> LaunchDescription {
    let rviz_config = Substitution::PathJoin(vec![
        Substitution::FindPackageShare(DESCRIPTION_PACKAGE.to_string()),
        Substitution::text("config"),
        Substitution::text("show.rviz"),
    ]);

    LaunchDescription {
        package: DESCRIPTION_PACKAGE,
        file: "show.launch.py",
        arguments: robot_arguments(&[USE_SIM_TIME, NAMESPACE]),
        actions: vec![
            robot_state_publisher(),
            Action::Node(
                NodeAction::new("joint_state_publisher_gui", "joint_state_publisher_gui")
                    .name("joint_state_publisher_gui")
                    .output("screen"),
            ),
            Action::Node(
                NodeAction::new("rviz2", "rviz2")
                    .name("rviz2")
                    .output("screen")
                    .argument(vec![Substitution::text("-d")])
                    .argument(vec![rviz_config])
                    .parameter("use_sim_time", vec![Substitution::var("use_sim_time")]),
            ),
        ],
    }
}

static DESCRIPTIONS: Lazy<Vec<LaunchDescription>> =
    Lazy::new(|| vec![bringup(), play_motion2(), show()]);

static SUBSYSTEMS: &[ExternalSubsystem] = &[
    ExternalSubsystem {
        package: "tiago_dual_controller_configuration",
        file: "default_controllers.launch.py",
        accepts: ARM_ARGUMENTS,
    },
    ExternalSubsystem {
        package: "play_motion2",
        file: "play_motion2.launch.py",
        accepts: &["use_sim_time", PLAY_MOTION2_CONFIG],
    },
    ExternalSubsystem {
        package: BRINGUP_PACKAGE,
        file: "twist_mux.launch.py",
        accepts: &[],
    },
    ExternalSubsystem {
        package: DESCRIPTION_PACKAGE,
        file: "robot_state_publisher.launch.py",
        accepts: ROBOT_STATE_ARGUMENTS,
    },
];

pub fn descriptions() -> &'static [LaunchDescription] {
    &DESCRIPTIONS
}

pub fn find_description(package: &str, file: &str) -> Option<&'static LaunchDescription> {
    DESCRIPTIONS
        .iter()
        .find(|desc| desc.package == package && desc.file == file)
}

pub fn find_subsystem(package: &str, file: &str) -> Option<&'static ExternalSubsystem> {
    SUBSYSTEMS
        .iter()
        .find(|sub| sub.package == package && sub.file == file)
}
