//! uv environment setup
//!
//! - `doctor`: precheck that uv is installed and recent enough
//! - `init`: `uv init`, `uv venv`, and the optional `uv add`
//! - `runner`: the [`CommandRunner`] seam over `std::process::Command`
//! - `workdir`: scoped working-directory switch

mod doctor;
mod init;
mod runner;
mod workdir;

pub use doctor::{check_uv, parse_version, version_satisfies, ToolReport, UV, UV_INSTALL_URL};
pub use init::{init_project, InitReport, PackageInstall};
pub use runner::{command_line, CommandOutput, CommandRunner, SystemRunner};
pub use workdir::WorkingDir;
