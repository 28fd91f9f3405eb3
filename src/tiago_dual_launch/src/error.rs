//! Error types for tiago_dual_launch

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Invalid value '{value}' for argument '{argument}'. Valid choices are: [{}]", .choices.join(", "))]
    InvalidChoice {
        argument: String,
        value: String,
        choices: Vec<String>,
    },

    #[error("Invalid value '{value}' for boolean argument '{argument}' (expected true or false)")]
    InvalidBool { argument: String, value: String },

    #[error("Unknown launch description '{file}' in package '{package}'")]
    UnknownDescription { package: String, file: String },

    #[error("Unknown subsystem '{file}' in package '{package}'")]
    UnknownSubsystem { package: String, file: String },

    #[error("Subsystem '{target}' does not accept argument '{argument}'")]
    UnexpectedArgument { target: String, argument: String },

    #[error("Undefined launch configuration: '{0}'. Did you forget to declare it?")]
    UndefinedConfiguration(String),

    #[error("Package '{0}' not found. Ensure the package is installed and sourced.")]
    PackageNotFound(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("YAML error in {path}: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LaunchError>;
