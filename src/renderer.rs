use std::path::PathBuf;

use cf_fs::{FileSystem, FileSystemImpl, NaiveFS};

use crate::common::{MyResult, MyResultTrait};
use crate::config::RenderJob;
use crate::fixture::FixtureList;
use crate::fragment::render_fixtures;
use crate::splice::splice;

pub const SUCCESS_MESSAGE: &str = "HTML gerado com sucesso!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub fixtures: usize,
    pub output: PathBuf,
}

/// Pure part of the pipeline: fixtures rendered and spliced into `template`.
pub fn render_document(template: &str, fixtures: &FixtureList) -> MyResult<String> {
    let fragments = render_fixtures(&fixtures.fixtures)?;
    splice(template, &fragments).my_result()
}

/// Runs [RenderJob]s against a [FileSystem]. Nothing is written unless the
/// whole document rendered.
#[derive(Debug, Default)]
pub struct Renderer<F: FileSystem = FileSystemImpl> {
    fs: F,
}

impl<F: FileSystem> Renderer<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }
    pub fn fs(&self) -> &F {
        &self.fs
    }
    pub fn into_inner(self) -> F {
        self.fs
    }

    pub fn run(&mut self, job: &RenderJob) -> MyResult<RenderReport> {
        let template = self.fs.read_to_string(&job.template)?;
        log::info!("Read template {:?} ({} bytes)", job.template, template.len());
        let fixtures: FixtureList = self.fs.read_to_string(&job.fixtures)?.parse()?;
        if fixtures.is_empty() {
            log::warn!("No fixtures in {:?}, the list will be emptied", job.fixtures);
        } else {
            log::info!("Read {} fixture(s) from {:?}", fixtures.len(), job.fixtures);
        }

        let document = render_document(&template, &fixtures)?;

        let output = job.output_path();
        self.fs.write(output, &document)?;
        log::info!("Wrote {:?} ({} bytes)", output, document.len());
        Ok(RenderReport {
            fixtures: fixtures.len(),
            output: output.to_path_buf(),
        })
    }
}

/// Runs `job` directly against the OS filesystem.
pub fn render_files(job: &RenderJob) -> MyResult<RenderReport> {
    Renderer::new(NaiveFS).run(job)
}
