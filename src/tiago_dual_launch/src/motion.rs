//! Motion configuration selection for play_motion2

use crate::{
    config::{ArmType, EndEffector, FtSensor, LaunchConfiguration},
    error::Result,
    params::{merge_param_files, write_merged},
};
use std::path::{Path, PathBuf};

pub const MOTIONS_PACKAGE: &str = "tiago_dual_bringup";
pub const BASE_MOTIONS_FILE: &str = "tiago_motions_general.yaml";
pub const LEFT_ARM_MOTIONS_FILE: &str = "tiago_motions_general_arm_left.yaml";
pub const RIGHT_ARM_MOTIONS_FILE: &str = "tiago_motions_general_arm_right.yaml";

/// Hardware suffix `<right>_<left>` identifying a motion file variant.
///
/// A side without arm is `no-arm`. Otherwise it is the end effector,
/// followed by `-<sensor>` when a force/torque sensor is mounted.
pub fn hw_suffix(
    arm_right: ArmType,
    arm_left: ArmType,
    end_effector_right: EndEffector,
    end_effector_left: EndEffector,
    ft_sensor_right: FtSensor,
    ft_sensor_left: FtSensor,
) -> String {
    format!(
        "{}_{}",
        side_suffix(arm_right, end_effector_right, ft_sensor_right),
        side_suffix(arm_left, end_effector_left, ft_sensor_left)
    )
}

fn side_suffix(arm: ArmType, end_effector: EndEffector, ft_sensor: FtSensor) -> String {
    match (arm, ft_sensor) {
        (ArmType::NoArm, _) => ArmType::NoArm.to_string(),
        (_, FtSensor::NoFtSensor) => end_effector.to_string(),
        (_, sensor) => format!("{}-{}", end_effector, sensor),
    }
}

/// Base motion file for the mounted arms.
///
/// When both arms are missing the left-arm check runs last and the
/// right-arm file is returned.
pub fn base_motions_file(arm_right: ArmType, arm_left: ArmType) -> &'static str {
    let mut file = BASE_MOTIONS_FILE;
    if arm_right == ArmType::NoArm {
        file = LEFT_ARM_MOTIONS_FILE;
    }
    if arm_left == ArmType::NoArm {
        file = RIGHT_ARM_MOTIONS_FILE;
    }
    file
}

pub fn specific_motions_file(hw_suffix: &str) -> String {
    format!("tiago_motions_{}.yaml", hw_suffix)
}

/// The pair of motion files merged for a configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotionFiles {
    pub hw_suffix: String,
    pub base: PathBuf,
    pub specific: PathBuf,
}

impl MotionFiles {
    /// Select the motion files under `motions_dir` for a configuration
    pub fn select(config: &LaunchConfiguration, motions_dir: &Path) -> Self {
        let hw_suffix = hw_suffix(
            config.arm_type_right,
            config.arm_type_left,
            config.end_effector_right,
            config.end_effector_left,
            config.ft_sensor_right,
            config.ft_sensor_left,
        );

        if config.arm_type_right == ArmType::NoArm && config.arm_type_left == ArmType::NoArm {
            log::warn!(
                "Both arms are set to no-arm; using {} as base motions",
                RIGHT_ARM_MOTIONS_FILE
            );
        }

        Self {
            base: motions_dir.join(base_motions_file(
                config.arm_type_right,
                config.arm_type_left,
            )),
            specific: motions_dir.join(specific_motions_file(&hw_suffix)),
            hw_suffix,
        }
    }

    /// Merge base and specific files into one document written to `output_dir`
    pub fn merge(&self, output_dir: &Path) -> Result<MergedMotions> {
        log::info!(
            "Merging motions {} + {}",
            self.base.display(),
            self.specific.display()
        );
        let merged = merge_param_files(&[&self.base, &self.specific])?;
        let (path, content) = write_merged(&merged, output_dir, "tiago_dual_motions_")?;
        Ok(MergedMotions { path, content })
    }
}

/// Merged motion configuration on disk
#[derive(Debug, Clone)]
pub struct MergedMotions {
    pub path: PathBuf,
    pub content: String,
}
