//! tiago_dual_launch library
//!
//! Composes the launch of a TIAGo Dual robot: validates the hardware launch
//! arguments, derives the play_motion2 motion file and records the
//! sub-launches and nodes to start.

pub mod actions;
pub mod arguments;
pub mod config;
pub mod descriptions;
pub mod error;
pub mod motion;
pub mod package;
pub mod params;
pub mod record;
pub mod substitution;

use actions::{Action, IncludeAction};
use arguments::resolve_arguments;
use descriptions::{find_description, find_subsystem, LaunchDescription};
use error::{LaunchError, Result};
use package::PackageLocator;
use record::{LaunchRecord, RecordGenerator};
use std::collections::HashMap;
use std::path::PathBuf;
use substitution::LaunchContext;

/// Where packages are looked up and generated files are written
#[derive(Debug, Clone)]
pub struct ComposerOptions {
    pub locator: PackageLocator,
    pub output_dir: PathBuf,
}

impl Default for ComposerOptions {
    fn default() -> Self {
        Self {
            locator: PackageLocator::from_env(Vec::new()),
            output_dir: std::env::temp_dir(),
        }
    }
}

/// Walks launch descriptions and records what they start
pub struct LaunchComposer {
    context: LaunchContext,
    record: LaunchRecord,
}

impl LaunchComposer {
    pub fn new(cli_args: HashMap<String, String>, options: ComposerOptions) -> Self {
        let mut context = LaunchContext::new(options.locator, options.output_dir);
        // Apply CLI args as initial configurations
        for (k, v) in cli_args {
            context.set_configuration(k, v);
        }

        Self {
            context,
            record: LaunchRecord::new(String::new()),
        }
    }

    /// Compose a top-level description.
    ///
    /// All declared arguments are validated before any action runs.
    pub fn compose(&mut self, description: &LaunchDescription) -> Result<()> {
        self.record.description = description.id();

        let mut undeclared: Vec<_> = self
            .context
            .configurations()
            .keys()
            .filter(|name| !description.declares(name))
            .cloned()
            .collect();
        undeclared.sort();
        for name in undeclared {
            log::warn!("Argument '{}' is not declared by {}, ignoring", name, description.id());
        }

        self.record.arguments = self.traverse_description(description)?;
        Ok(())
    }

    fn traverse_description(
        &mut self,
        description: &LaunchDescription,
    ) -> Result<Vec<(String, String)>> {
        self.context.set_current_description(description.id());

        let resolved = resolve_arguments(&description.arguments, self.context.configurations())?;
        for (name, value) in &resolved {
            self.context.set_configuration(name.clone(), value.clone());
        }

        for action in &description.actions {
            self.traverse_action(action)?;
        }
        Ok(resolved)
    }

    fn traverse_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Include(include) => self.process_include(include),
            Action::Node(node) => {
                let record = RecordGenerator::generate_node_record(node, &self.context)?;
                log::debug!("Node: {}/{}", record.package, record.executable);
                self.record.node.push(record);
                Ok(())
            }
            Action::MotionConfig(motion) => {
                let merged = motion.apply(&mut self.context)?;
                let path = merged.path.display().to_string();
                log::info!("Motion configuration: {}", path);
                self.record.derived.push((motion.target.clone(), path.clone()));
                self.record.file_data.insert(path, merged.content);
                Ok(())
            }
        }
    }

    fn process_include(&mut self, include: &IncludeAction) -> Result<()> {
        if let Some(target) = find_description(&include.package, &include.file) {
            return self.process_scoped_include(include, target);
        }

        let subsystem = find_subsystem(&include.package, &include.file).ok_or_else(|| {
            LaunchError::UnknownSubsystem {
                package: include.package.clone(),
                file: include.file.clone(),
            }
        })?;

        let record = RecordGenerator::generate_include_record(include, subsystem, &self.context)?;
        log::info!("Including {}", include.target());
        self.record.include.push(record);
        Ok(())
    }

    fn process_scoped_include(
        &mut self,
        include: &IncludeAction,
        target: &LaunchDescription,
    ) -> Result<()> {
        if let Some((name, _)) = include.args.iter().find(|(name, _)| !target.declares(name)) {
            return Err(LaunchError::UnexpectedArgument {
                target: include.target(),
                argument: name.clone(),
            });
        }

        log::info!("Including launch description: {}", target.id());

        // Start with current context and apply include args; nothing leaks back
        let mut include_context = self.context.clone();
        for (name, value) in include.resolve_args(&self.context)? {
            include_context.set_configuration(name, value);
        }

        let mut included = LaunchComposer {
            context: include_context,
            record: LaunchRecord::new(target.id()),
        };
        included.traverse_description(target)?;

        self.record.extend(included.record);
        Ok(())
    }

    pub fn into_record(self) -> LaunchRecord {
        self.record
    }
}

/// Compose a built-in launch description and return its record
pub fn compose_launch(
    package: &str,
    file: &str,
    cli_args: HashMap<String, String>,
    options: ComposerOptions,
) -> Result<LaunchRecord> {
    let description =
        find_description(package, file).ok_or_else(|| LaunchError::UnknownDescription {
            package: package.to_string(),
            file: file.to_string(),
        })?;

    let mut composer = LaunchComposer::new(cli_args, options);
    composer.compose(description)?;
    Ok(composer.into_record())
}
