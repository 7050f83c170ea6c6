use crate::core::optimizers::{AdamConfig, OptimizerConfig};

#[test]
fn 옵티마이저구성_기본값_테스트() {
    let config = OptimizerConfig::default();

    assert_eq!(config.adam.beta1, 0.9, "Adam beta1 기본값");
    assert_eq!(config.adam.beta2, 0.999, "Adam beta2 기본값");
    assert_eq!(config.adam.epsilon, 1e-7, "Keras Adam epsilon 기본값");
    assert_eq!(config.learning_rate, 0.001, "학습률 기본값");
    assert_eq!(config.weight_decay, 0.0, "가중치 감소 기본값");

    println!("✅ 옵티마이저 구성 기본값 테스트 통과");
}

#[test]
fn 옵티마이저구성_new_테스트() {
    assert_eq!(OptimizerConfig::new(), OptimizerConfig::default(), "new()와 default() 동일성");
}

#[test]
fn 옵티마이저구성_빌더_테스트() {
    let adam = AdamConfig {
        beta1: 0.8,
        beta2: 0.99,
        epsilon: 1e-6,
    };
    let config = OptimizerConfig::new()
        .with_adam_config(adam.clone())
        .with_learning_rate(0.01)
        .with_weight_decay(0.001);

    assert_eq!(config.adam, adam);
    assert_eq!(config.learning_rate, 0.01);
    assert_eq!(config.weight_decay, 0.001);

    println!("✅ 옵티마이저 구성 빌더 테스트 통과");
}

#[test]
fn AdamW_파라미터_변환_테스트() {
    let params = OptimizerConfig::default().with_learning_rate(0.005).to_adamw_params();

    assert_eq!(params.lr, 0.005);
    assert_eq!(params.beta1, 0.9);
    assert_eq!(params.beta2, 0.999);
    assert_eq!(params.eps, 1e-7);
    assert_eq!(params.weight_decay, 0.0, "가중치 감소 0 이면 순수 Adam");

    println!("✅ AdamW 파라미터 변환 테스트 통과");
}

#[test]
fn JSON_부분구성_기본값_테스트() {
    let config: OptimizerConfig =
        serde_json::from_str(r#"{ "learning_rate": 0.02, "adam": { "beta1": 0.5 } }"#).unwrap();

    assert_eq!(config.learning_rate, 0.02);
    assert_eq!(config.adam.beta1, 0.5);
    assert_eq!(config.adam.beta2, 0.999, "빠진 항목은 기본값");
    assert_eq!(config.weight_decay, 0.0);
}
