use attendance_aggregator::{config::Config, read_records, time, AttendanceReport, Window};
use std::{env, io::Write, path::PathBuf, str::FromStr};

use anyhow::{anyhow, Context, Error};
use chrono::NaiveDate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: attendance-report <records.json> [day|week|month] [YYYY-MM-DD]";

fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "attendance_aggregator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    let args: Vec<String> = env::args().collect();
    let file_path = args.get(1).ok_or_else(|| anyhow!(USAGE))?;
    let kind = args.get(2).map(String::as_str).unwrap_or("week");

    // read the clock once so every figure in the report agrees
    let now = time::local_now(&config.time_zone);
    let anchor = match args.get(3) {
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .with_context(|| format!("anchor date was not YYYY-MM-DD: {value}"))?,
        None => now.date(),
    };
    let window =
        Window::parse(kind, anchor).ok_or_else(|| anyhow!("unknown window {kind:?}\n{USAGE}"))?;

    let path = PathBuf::from_str(file_path)?;
    let records = read_records(&path)?;
    let report = AttendanceReport::build(&records, window, now);

    tracing::info!(
        records = records.len(),
        start = %report.window.start,
        end = %report.window.end,
        time_zone = %config.time_zone,
        output = %config.report_output.display(),
        "writing attendance report"
    );

    let mut file = std::fs::File::create(&config.report_output).with_context(|| {
        format!(
            "Failed to create report file: {}",
            config.report_output.display()
        )
    })?;
    file.write_all(serde_json::to_string_pretty(&report)?.as_bytes())?;

    Ok(())
}
