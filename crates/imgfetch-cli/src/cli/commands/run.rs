//! `imgfetch run <input>` – run the batched fetch-and-persist pipeline.

use anyhow::Result;
use imgfetch_core::config::FetchConfig;
use imgfetch_core::engine::FetchEngine;
use imgfetch_core::sink::DirSink;
use imgfetch_core::source::FileSource;
use std::path::Path;
use std::sync::Arc;

pub async fn run_fetch(cfg: &FetchConfig, input: &Path, dest: &Path) -> Result<()> {
    let engine = FetchEngine::new(cfg)?;
    let source = FileSource::new(input, cfg.batch_size);
    let sink = Arc::new(DirSink::create(dest)?);

    let summary = engine.run(source, sink).await;
    println!("{summary}");
    Ok(())
}
