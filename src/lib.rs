//! Fills the fixture list of a static HTML page from `jogos.json`.
//!
//! ```no_run
//! use jogos_render::{render_files, RenderJob};
//!
//! let report = render_files(&RenderJob::default()).expect("render index.html");
//! println!("{} fixture(s) -> {:?}", report.fixtures, report.output);
//! ```

mod common;
mod config;
mod fixture;
mod fragment;
mod renderer;
mod splice;

pub use common::{AnyErr, FailureKind, MyResult, MyResultTrait};
pub use config::{RenderJob, DEFAULT_FIXTURES, DEFAULT_TEMPLATE};
pub use fixture::{Fixture, FixtureList};
pub use fragment::{render_fixture, render_fixtures, FRAGMENT_TEMPLATE};
pub use renderer::{render_document, render_files, RenderReport, Renderer, SUCCESS_MESSAGE};
pub use splice::{locate, splice, Region, SpliceError, CLOSING_TAG, GENERATED_MARKER, MARKER};
