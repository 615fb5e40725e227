use crate::domain::values::metric::Metric;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "readnext", about = "Article recommendation service")]
pub struct Cli {
    /// Corpus file: one `id;c1,c2,...` row per article
    #[arg(long)]
    pub corpus: PathBuf,

    /// Address to serve on
    #[arg(long, default_value = "127.0.0.1:8888")]
    pub addr: SocketAddr,

    /// Distance metric (cosine, euclidean, dot)
    #[arg(long, default_value = "cosine")]
    pub metric: Metric,
}
