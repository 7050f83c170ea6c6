//! 데이터 분포와 특징 통계 확인

use anyhow::Result;
use clap::Command;
use zen_posture::{cli, pipeline};

fn main() -> Result<()> {
    env_logger::init();

    let matches = Command::new("inspect_data")
        .version(env!("CARGO_PKG_VERSION"))
        .about("자세 데이터 분포와 특징 통계 출력")
        .arg(cli::data_arg())
        .get_matches();

    pipeline::run_inspect(cli::data_path(&matches))?;
    Ok(())
}
