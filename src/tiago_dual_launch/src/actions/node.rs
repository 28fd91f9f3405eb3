//! Node action implementation

use crate::substitution::Substitution;

/// Node action representing a ROS 2 node started directly
#[derive(Debug, Clone, PartialEq)]
pub struct NodeAction {
    pub package: String,
    pub executable: String,
    pub name: Option<String>,
    pub output: Option<String>,
    pub arguments: Vec<Vec<Substitution>>,
    pub parameters: Vec<Parameter>,
}

/// Inline node parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub value: Vec<Substitution>,
}

impl NodeAction {
    pub fn new(package: &str, executable: &str) -> Self {
        Self {
            package: package.to_string(),
            executable: executable.to_string(),
            name: None,
            output: None,
            arguments: Vec::new(),
            parameters: Vec::new(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn output(mut self, output: &str) -> Self {
        self.output = Some(output.to_string());
        self
    }

    pub fn argument(mut self, value: Vec<Substitution>) -> Self {
        self.arguments.push(value);
        self
    }

    pub fn parameter(mut self, name: &str, value: Vec<Substitution>) -> Self {
        self.parameters.push(Parameter {
            name: name.to_string(),
            value,
        });
        self
    }
}
