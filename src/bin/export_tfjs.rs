//! 학습된 모델을 TF.js layers-model 디렉토리로 내보내기

use anyhow::Result;
use clap::Command;
use zen_posture::{cli, pipeline};

fn main() -> Result<()> {
    env_logger::init();

    let matches = Command::new("export_tfjs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("safetensors 모델을 TF.js layers-model 로 변환")
        .arg(cli::model_arg())
        .arg(cli::export_dir_arg())
        .arg(cli::shard_bytes_arg())
        .get_matches();

    pipeline::run_export(
        cli::model_path(&matches),
        cli::export_dir(&matches),
        &cli::export_config(&matches),
    )?;
    Ok(())
}
