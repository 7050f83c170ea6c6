use anyhow::Result;
use clap::Command;
use zen_posture::{cli, pipeline};

fn main() -> Result<()> {
    env_logger::init();

    let matches = Command::new("zen_posture")
        .version(env!("CARGO_PKG_VERSION"))
        .about("자세 데이터 확인 → 학습 → TF.js 내보내기 → 모델 확인")
        .arg(cli::data_arg())
        .arg(cli::model_arg())
        .arg(cli::export_dir_arg())
        .arg(cli::shard_bytes_arg())
        .args(cli::train_args())
        .get_matches();

    let config = cli::train_config(&matches)?;
    pipeline::run_all(
        &cli::pipeline_paths(&matches),
        &config,
        &cli::export_config(&matches),
    )
}
