use std::time::Duration;

use framework::firehose::config::FirehoseConfig;
use serde::Deserialize;

use crate::delivery::DeliveryLoopConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub firehose: FirehoseConfig,
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl AppConfig {
    pub fn delivery_loop(&self) -> DeliveryLoopConfig {
        DeliveryLoopConfig {
            iterations: self.iterations,
            delay: Duration::from_millis(self.delay_ms),
        }
    }
}

fn default_iterations() -> u32 {
    DeliveryLoopConfig::default().iterations
}

fn default_delay_ms() -> u64 {
    u64::try_from(DeliveryLoopConfig::default().delay.as_millis()).unwrap_or(200)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use framework::json::from_json;

    use super::AppConfig;

    #[test]
    fn delivery_loop_defaults() {
        let config: AppConfig = from_json(r#"{"firehose": {"stream": "calvinfo"}}"#).unwrap();
        let delivery_loop = config.delivery_loop();
        assert_eq!(delivery_loop.iterations, 100);
        assert_eq!(delivery_loop.delay, Duration::from_millis(200));
    }

    #[test]
    fn delivery_loop() {
        let config: AppConfig =
            from_json(r#"{"firehose": {"stream": "calvinfo"}, "iterations": 3, "delay_ms": 50}"#).unwrap();
        let delivery_loop = config.delivery_loop();
        assert_eq!(delivery_loop.iterations, 3);
        assert_eq!(delivery_loop.delay, Duration::from_millis(50));
    }

    #[test]
    fn bundled_config() {
        let json = include_str!("../assets/conf.json");
        let config: AppConfig = from_json(json).unwrap();
        assert_eq!(config.firehose.stream, "calvinfo");
        assert_eq!(config.firehose.timeout(), Some(Duration::from_secs(5)));
    }
}
