use clap::Parser;
use jogos_render::{render_files, FailureKind, MyResult, RenderJob, SUCCESS_MESSAGE};

fn main_result() -> MyResult<()> {
    let job = RenderJob::parse();
    let report = render_files(&job)?;
    log::debug!("{report:?}");
    println!("{SUCCESS_MESSAGE}");
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = main_result() {
        log::debug!("failure kind: {:?}", FailureKind::of(&*err));
        // not through `log`: RUST_LOG=off must not hide why the run failed
        eprintln!("Failed to render fixtures: {err}");
        std::process::exit(1);
    }
}
