use cf_fs::*;
use std::io::ErrorKind;
use std::path::Path;

#[test]
fn memfs_read_back() {
    let mut fs = MemFS::new();
    fs.insert("index.html", "<div></div>");
    assert_eq!(
        fs.read_to_string(Path::new("index.html"))
            .expect("seeded file should be readable"),
        "<div></div>"
    );
}

#[test]
fn memfs_missing_is_not_found() {
    let mut fs = MemFS::with_tracer(Tracer::recording());
    let err = fs
        .read_to_string(Path::new("nope.json"))
        .expect_err("unseeded path must not resolve");
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(
        fs.tracer().events(),
        &[TraceEvent::ReadNonexist("nope.json".into())]
    );
}

#[test]
fn memfs_traces_overwrite() {
    let mut fs = MemFS::with_tracer(Tracer::recording());
    fs.write(Path::new("out.html"), "first").expect("write");
    fs.write(Path::new("out.html"), "second").expect("write");
    assert_eq!(fs.get("out.html"), Some("second"));
    assert_eq!(
        fs.tracer().events(),
        &[
            TraceEvent::Write { path: "out.html".into(), overwrote: false },
            TraceEvent::Write { path: "out.html".into(), overwrote: true },
        ]
    );
    assert_eq!(fs.tracer().writes(), 2);
}

#[test]
fn noop_tracer_records_nothing() {
    let mut fs = MemFS::new();
    fs.write(Path::new("a"), "b").expect("write");
    assert!(fs.tracer().events().is_empty());
}

#[test]
fn naive_fs_round_trip() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let path = dir.path().join("index.html");
    let mut fs: FileSystemImpl = NaiveFS.into();
    fs.write(&path, "olá 🗓️").expect("write to tempdir");
    assert_eq!(fs.read_to_string(&path).expect("read back"), "olá 🗓️");
    // truncates on rewrite
    fs.write(&path, "x").expect("rewrite");
    assert_eq!(fs.read_to_string(&path).expect("read back"), "x");
}

#[test]
fn naive_fs_missing_file() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let err = NaiveFS
        .read_to_string(&dir.path().join("jogos.json"))
        .expect_err("missing file");
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
