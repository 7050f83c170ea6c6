//! 구간별 대표 샘플로 저장된 모델 확인

use anyhow::Result;
use clap::Command;
use zen_posture::{cli, pipeline};

fn main() -> Result<()> {
    env_logger::init();

    let matches = Command::new("test_model")
        .version(env!("CARGO_PKG_VERSION"))
        .about("좋음/보통/나쁨 구간의 첫 샘플을 채점")
        .arg(cli::data_arg())
        .arg(cli::model_arg())
        .get_matches();

    pipeline::run_test_model(cli::data_path(&matches), cli::model_path(&matches))?;
    Ok(())
}
