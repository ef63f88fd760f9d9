use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufReader, Read, Write},
    path::{Path, PathBuf},
};

use enum_dispatch::enum_dispatch;
use simple_error::simple_error;

use crate::memfs_tracer::{Trace, Tracer};

/// Whole-file access. Every call opens, fully reads or writes, and releases
/// the file before returning.
#[enum_dispatch]
pub trait FileSystem {
    fn read_to_string(&mut self, path: &Path) -> io::Result<String>;
    /// Creates `path` or truncates it, then writes `content`.
    fn write(&mut self, path: &Path, content: &str) -> io::Result<()>;
}

#[enum_dispatch(FileSystem)]
#[derive(Debug)]
pub enum FileSystemImpl {
    /// Paths go straight to the OS, relative to the working directory.
    NaiveFS,
    /// A quasi-virtual filesystem that stores everything in a HashMap.
    ///
    /// Lets tests run the whole pipeline without touching the disk.
    MemFS,
}

impl Default for FileSystemImpl {
    fn default() -> Self {
        Self::NaiveFS(NaiveFS)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveFS;

impl FileSystem for NaiveFS {
    fn read_to_string(&mut self, path: &Path) -> io::Result<String> {
        let mut content = String::new();
        BufReader::new(File::open(path)?).read_to_string(&mut content)?;
        Ok(content)
    }

    fn write(&mut self, path: &Path, content: &str) -> io::Result<()> {
        let mut f = File::create(path)?;
        f.write_all(content.as_bytes())?;
        f.flush()
    }
}

#[derive(Debug, Default)]
pub struct MemFS {
    bucket: HashMap<PathBuf, String>,
    fs_tracer: Tracer,
}

impl MemFS {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn with_tracer(fs_tracer: Tracer) -> Self {
        Self {
            bucket: Default::default(),
            fs_tracer,
        }
    }
    /// Seeds a file without going through the tracer.
    pub fn insert<P, S>(&mut self, path: P, content: S) -> Option<String>
    where
        P: Into<PathBuf>,
        S: Into<String>,
    {
        self.bucket.insert(path.into(), content.into())
    }
    pub fn get<P: AsRef<Path>>(&self, path: P) -> Option<&str> {
        self.bucket.get(path.as_ref()).map(String::as_str)
    }
    pub fn tracer(&self) -> &Tracer {
        &self.fs_tracer
    }
}

impl FileSystem for MemFS {
    fn read_to_string(&mut self, path: &Path) -> io::Result<String> {
        match self.bucket.get(path) {
            Some(content) => {
                self.fs_tracer.on_read(path);
                Ok(content.clone())
            }
            None => {
                self.fs_tracer.on_read_nonexist(path);
                Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    simple_error!("Path {:?} not found in provided MemFS", path),
                ))
            }
        }
    }

    fn write(&mut self, path: &Path, content: &str) -> io::Result<()> {
        let last = self.bucket.insert(path.to_path_buf(), content.to_string());
        self.fs_tracer.on_write(path, last.as_deref());
        Ok(())
    }
}
