use std::path::{Path, PathBuf};

use clap::Parser;

pub const DEFAULT_TEMPLATE: &str = "index.html";
pub const DEFAULT_FIXTURES: &str = "jogos.json";

/// Renders the fixtures of a JSON file into an HTML page, in place.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[clap(author, version, about, long_about=None)]
pub struct RenderJob {
    /// The HTML page to fill, rewritten in place. It must contain the comment
    /// `<!-- Aqui os jogos serão listados diretamente, sem JavaScript -->`
    /// (or the one a previous run left behind) followed by a `</div>`.
    #[clap(short, long, value_parser, default_value = DEFAULT_TEMPLATE)]
    pub template: PathBuf,
    /// JSON file shaped like `{"jogos": [{"data", "horario", "jogo", "ondepassa"}]}`.
    #[clap(short = 'f', long, value_parser, default_value = DEFAULT_FIXTURES)]
    pub fixtures: PathBuf,
}

impl RenderJob {
    pub fn new<T: Into<PathBuf>, F: Into<PathBuf>>(template: T, fixtures: F) -> Self {
        Self {
            template: template.into(),
            fixtures: fixtures.into(),
        }
    }
    pub fn output_path(&self) -> &Path {
        &self.template
    }
}

impl Default for RenderJob {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE, DEFAULT_FIXTURES)
    }
}
