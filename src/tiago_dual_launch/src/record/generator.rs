//! Record generation for includes and nodes

use crate::actions::{IncludeAction, NodeAction};
use crate::descriptions::ExternalSubsystem;
use crate::error::{LaunchError, Result};
use crate::record::types::{IncludeRecord, NodeRecord};
use crate::substitution::{resolve_substitutions, LaunchContext};

pub struct RecordGenerator;

impl RecordGenerator {
    /// Resolve an include of an external subsystem.
    ///
    /// Every forwarded argument must be accepted by the subsystem.
    pub fn generate_include_record(
        include: &IncludeAction,
        subsystem: &ExternalSubsystem,
        context: &LaunchContext,
    ) -> Result<IncludeRecord> {
        if let Some((name, _)) = include.args.iter().find(|(name, _)| !subsystem.accepts(name)) {
            return Err(LaunchError::UnexpectedArgument {
                target: include.target(),
                argument: name.clone(),
            });
        }

        let args = include.resolve_args(context)?;

        let path = match context.locator().find_share(&include.package) {
            Some(share) => Some(share.join("launch").join(&include.file)),
            None => {
                log::debug!(
                    "Package {} not installed, leaving launch path unresolved",
                    include.package
                );
                None
            }
        };

        Ok(IncludeRecord {
            package: include.package.clone(),
            file: include.file.clone(),
            path: path.map(|p| p.display().to_string()),
            scope: context.current_description().unwrap_or_default().to_string(),
            args,
        })
    }

    pub fn generate_node_record(node: &NodeAction, context: &LaunchContext) -> Result<NodeRecord> {
        let args = node
            .arguments
            .iter()
            .map(|arg| resolve_substitutions(arg, context))
            .collect::<Result<Vec<_>>>()?;

        let params = node
            .parameters
            .iter()
            .map(|p| Ok((p.name.clone(), resolve_substitutions(&p.value, context)?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(NodeRecord {
            package: node.package.clone(),
            executable: node.executable.clone(),
            name: node.name.clone(),
            output: node.output.clone(),
            args,
            params,
        })
    }
}
