use clap::Command;
use std::path::PathBuf;
use zen_posture::cli;
use zen_posture::pipeline::PipelinePaths;
use zen_posture::TrainConfig;

fn 명령() -> Command {
    Command::new("zen_posture")
        .arg(cli::data_arg())
        .arg(cli::model_arg())
        .arg(cli::export_dir_arg())
        .arg(cli::shard_bytes_arg())
        .args(cli::train_args())
}

#[test]
fn 인자없이_기본값_테스트() {
    let matches = 명령().try_get_matches_from(["zen_posture"]).unwrap();

    assert_eq!(cli::pipeline_paths(&matches), PipelinePaths::default());
    assert_eq!(cli::train_config(&matches).unwrap(), TrainConfig::default());
    assert_eq!(cli::export_config(&matches).shard_bytes, 4 * 1024 * 1024);
}

#[test]
fn 명령줄_덮어쓰기_테스트() {
    let matches = 명령()
        .try_get_matches_from([
            "zen_posture",
            "--data",
            "a.csv",
            "-o",
            "web_model",
            "--epochs",
            "3",
            "--batch-size",
            "4",
            "--learning-rate",
            "0.01",
            "--seed",
            "7",
            "--no-progress",
            "--shard-bytes",
            "1000",
        ])
        .unwrap();

    let paths = cli::pipeline_paths(&matches);
    assert_eq!(paths.data, PathBuf::from("a.csv"));
    assert_eq!(paths.model, PathBuf::from("model.safetensors"));
    assert_eq!(paths.export_dir, PathBuf::from("web_model"));

    let config = cli::train_config(&matches).unwrap();
    assert_eq!(config.epochs, 3);
    assert_eq!(config.batch_size, 4);
    assert_eq!(config.optimizer.learning_rate, 0.01);
    assert_eq!(config.seed, 7);
    assert!(!config.show_progress);
    assert_eq!(config.test_ratio, 0.2, "지정하지 않은 항목은 기본값");

    assert_eq!(cli::export_config(&matches).shard_bytes, 1000);
}

#[test]
fn 구성파일_후_덮어쓰기_테스트() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("train.json");
    std::fs::write(&path, r#"{ "epochs": 50, "seed": 1, "optimizer": { "learning_rate": 0.005 } }"#)
        .unwrap();

    let matches = 명령()
        .try_get_matches_from(["zen_posture", "--config", path.to_str().unwrap(), "--seed", "9"])
        .unwrap();
    let config = cli::train_config(&matches).unwrap();

    assert_eq!(config.epochs, 50);
    assert_eq!(config.optimizer.learning_rate, 0.005);
    assert_eq!(config.seed, 9, "명령줄이 구성 파일보다 우선");
    assert_eq!(config.batch_size, 8);
}

#[test]
fn 잘못된_구성파일_에러_테스트() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("train.json");
    std::fs::write(&path, "{ epochs: ").unwrap();

    let matches = 명령()
        .try_get_matches_from(["zen_posture", "--config", path.to_str().unwrap()])
        .unwrap();
    assert!(cli::train_config(&matches).is_err());
}
