use super::합성_데이터셋;
use crate::core::dataset::{train_test_split, Dataset};
use crate::core::training::config::TrainConfig;
use crate::core::training::trainer::PostureTrainer;

fn 빠른_구성(epochs: usize) -> TrainConfig {
    TrainConfig::default().with_epochs(epochs).with_progress(false)
}

#[test]
fn 학습_기본동작_테스트() {
    let dataset = 합성_데이터셋(60);
    assert_eq!(dataset.len(), 60);

    let trainer = PostureTrainer::new(빠른_구성(30));
    let outcome = trainer.fit(&dataset).expect("학습 성공");

    assert_eq!(outcome.history.len(), 30);
    assert_eq!(outcome.split.test_len(), 12);
    assert_eq!(outcome.split.train_len(), 48);
    assert_eq!(outcome.predictions.len(), 12);
    assert_eq!(outcome.metrics.samples, 12);
    assert!(outcome.metrics.mse.is_finite());
    assert!(outcome.metrics.rmse.is_finite());

    let first = outcome.history.first().unwrap();
    let last = outcome.history.last().unwrap();
    println!("첫 에포크 손실 {:.4} → 마지막 {:.4}", first.train_loss, last.train_loss);
    assert!(last.train_loss < first.train_loss, "학습 손실이 줄어야 함");
}

#[test]
fn 분할_재현성_테스트() {
    let dataset = 합성_데이터셋(25);
    let trainer = PostureTrainer::new(빠른_구성(1));

    let a = trainer.fit(&dataset).unwrap();
    let b = trainer.fit(&dataset).unwrap();
    assert_eq!(a.split, b.split);
    assert_eq!(a.split, train_test_split(25, 0.2, 42));
}

#[test]
fn 데이터_부족_에러_테스트() {
    let dataset = 합성_데이터셋(4);
    let trainer = PostureTrainer::new(빠른_구성(1));
    let err = trainer.fit(&dataset).err().expect("샘플 4 개는 부족");
    assert!(err.to_string().contains("학습 데이터 부족"));

    assert!(trainer.fit(&Dataset::default()).is_err());
}

#[test]
fn 검증_분할_비면_에러_테스트() {
    let dataset = 합성_데이터셋(10);
    let trainer = PostureTrainer::new(빠른_구성(1).with_test_ratio(0.0));
    assert!(trainer.fit(&dataset).is_err());
}

#[test]
fn 예측값_모델과_일치_테스트() {
    let dataset = 합성_데이터셋(20);
    let trainer = PostureTrainer::new(빠른_구성(2));
    let outcome = trainer.fit(&dataset).unwrap();

    let features: Vec<_> = outcome
        .split
        .test_indices
        .iter()
        .map(|&i| dataset.samples[i].features)
        .collect();
    let again = outcome.model.predict(&features, trainer.device()).unwrap();

    for (a, b) in outcome.predictions.iter().zip(again.iter()) {
        assert!((a - *b as f64).abs() < 1e-4);
    }
}
