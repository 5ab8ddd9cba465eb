//! High-level operations.
//!
//! This module contains the implementation of jdtpath commands on top of
//! the resolver: loading a workspace with its configuration, resolving a
//! project classpath and listing what a workspace knows about.

pub mod classpath;
pub mod list;
pub mod session;

pub use classpath::{format_classpath, resolve_classpath, ClasspathRequest, OutputFormat};
pub use list::{format_projects, format_runtimes, list_projects, list_runtimes, ProjectInfo, RuntimeInfo};
pub use session::{configure_session, open_workspace, resolve_options, OpenWorkspace};
