use anyhow::anyhow;
use chrono_tz::Tz;
use std::{env, path::PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    pub time_zone: Tz,
    pub report_output: PathBuf,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let time_zone_name = env::var("APP_TIMEZONE").unwrap_or_else(|_| "UTC".to_string());
        let report_output =
            env::var("REPORT_OUTPUT").unwrap_or_else(|_| "./attendance_report.json".to_string());

        Self::from_values(&time_zone_name, &report_output)
    }

    fn from_values(time_zone_name: &str, report_output: &str) -> anyhow::Result<Self> {
        let time_zone: Tz = time_zone_name
            .parse()
            .map_err(|_| anyhow!("Invalid APP_TIMEZONE value: {}", time_zone_name))?;

        Ok(Config {
            time_zone,
            report_output: PathBuf::from(report_output),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_values() {
        let config = Config::from_values("Asia/Seoul", "./out.json").unwrap();
        assert_eq!(config.time_zone, chrono_tz::Asia::Seoul);
        assert_eq!(config.report_output, PathBuf::from("./out.json"));
    }

    #[test]
    fn test_config_rejects_unknown_time_zone() {
        let err = Config::from_values("Mars/Olympus_Mons", "./out.json").unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus_Mons"));
    }
}
