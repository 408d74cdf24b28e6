//! Configuration merging and precedence handling.
//!
//! This module implements merging of configuration layers, with
//! field-by-field merging for the nested directive grammar.

use crate::config::schema::Config;

/// Merges configuration layers according to precedence rules.
///
/// # Examples
///
/// ```
/// use sudomap::config::{Config, ConfigMerger};
///
/// let low = Config { max_depth: Some(8), ..Default::default() };
/// let high = Config { max_depth: Some(2), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.max_depth, Some(2));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Directive grammar: field-by-field merge, so a layer may override
    ///   one prefix while inheriting the other
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.max_depth.is_some() {
            target.max_depth = source.max_depth;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.root_prefix.is_some() {
            target.root_prefix.clone_from(&source.root_prefix);
        }

        if let Some(ref source_directives) = source.directives {
            match &mut target.directives {
                Some(target_directives) => {
                    if source_directives.include.is_some() {
                        target_directives
                            .include
                            .clone_from(&source_directives.include);
                    }
                    if source_directives.includedir.is_some() {
                        target_directives
                            .includedir
                            .clone_from(&source_directives.includedir);
                    }
                }
                None => target.directives = Some(source_directives.clone()),
            }
        }
    }
}
