//! 랜드마크 CSV 로 자세 점수 모델 학습

use anyhow::Result;
use clap::Command;
use zen_posture::{cli, pipeline};

fn main() -> Result<()> {
    env_logger::init();

    let matches = Command::new("train_posture")
        .version(env!("CARGO_PKG_VERSION"))
        .about("자세 점수 회귀 모델 학습")
        .arg(cli::data_arg())
        .arg(cli::model_arg())
        .args(cli::train_args())
        .get_matches();

    let config = cli::train_config(&matches)?;
    pipeline::run_train(cli::data_path(&matches), cli::model_path(&matches), &config)?;
    Ok(())
}
