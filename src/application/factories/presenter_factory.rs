use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Where rendered output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// `--output` given means a file, otherwise stdout
    pub fn from_output(output: Option<PathBuf>) -> Self {
        match output {
            Some(path) => PresenterType::File(path),
            None => PresenterType::Stdout,
        }
    }

    /// Colour only makes sense on an interactive stdout
    pub fn supports_color(&self) -> bool {
        match self {
            PresenterType::Stdout => std::io::stdout().is_terminal(),
            PresenterType::File(_) => false,
        }
    }
}

/// Factory for creating output presenters
///
/// Picks the infrastructure adapter for a [`PresenterType`]; lives in the
/// application layer so the CLI never names adapters directly.
pub struct PresenterFactory;

impl PresenterFactory {
    /// # Examples
    /// ```
    /// use dashboard_sync::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}
