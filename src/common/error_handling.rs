use std::error::Error;

pub type AnyErr = Box<dyn Error>;
pub type MyResult<T> = Result<T, AnyErr>;
pub trait MyResultTrait<T> {
    fn my_result(self) -> MyResult<T>;
}
impl<T, Err: Into<AnyErr>> MyResultTrait<T> for Result<T, Err> {
    fn my_result(self) -> MyResult<T> {
        self.map_err(|e| e.into())
    }
}

/// Coarse classification of anything the pipeline can fail with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Missing, unreadable or unwritable file.
    Io,
    /// The fixture file is not valid JSON.
    Parse,
    /// Valid JSON, but a fixture lacks a field or has the wrong type.
    Data,
    /// The template has no usable insertion point.
    Marker,
    Other,
}

impl FailureKind {
    pub fn of(err: &(dyn Error + 'static)) -> Self {
        if err.is::<std::io::Error>() {
            return Self::Io;
        }
        if let Some(json) = err.downcast_ref::<serde_json::Error>() {
            return match json.classify() {
                serde_json::error::Category::Io => Self::Io,
                serde_json::error::Category::Data => Self::Data,
                serde_json::error::Category::Syntax | serde_json::error::Category::Eof => Self::Parse,
            };
        }
        if err.is::<crate::splice::SpliceError>() {
            return Self::Marker;
        }
        Self::Other
    }
}
