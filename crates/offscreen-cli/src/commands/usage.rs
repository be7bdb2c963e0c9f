use chrono::Utc;
use clap::{Subcommand, ValueEnum};
use offscreen_core::format::format_minutes;
use offscreen_core::{TimeRange, UsageSimulator};

#[derive(Clone, Copy, ValueEnum)]
pub enum RangeArg {
    Daily,
    Weekly,
    Monthly,
}

impl From<RangeArg> for TimeRange {
    fn from(value: RangeArg) -> Self {
        match value {
            RangeArg::Daily => TimeRange::Daily,
            RangeArg::Weekly => TimeRange::Weekly,
            RangeArg::Monthly => TimeRange::Monthly,
        }
    }
}

#[derive(Subcommand)]
pub enum UsageAction {
    /// Usage totals and chart buckets for a time range
    Summary {
        #[arg(long, value_enum, default_value = "weekly")]
        range: RangeArg,
        /// Override the date-derived seed (for reproducible output)
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// Top apps by time spent
    Apps {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
}

fn simulator(seed: Option<u64>) -> UsageSimulator {
    match seed {
        Some(seed) => UsageSimulator::new(seed),
        None => UsageSimulator::for_date(Utc::now().date_naive()),
    }
}

pub fn run(action: UsageAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        UsageAction::Summary { range, seed, json } => {
            let summary = simulator(seed).summary(range.into());
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
                return Ok(());
            }
            println!("Total: {:.1}h", summary.total_hours);
            let arrow = if summary.is_increase { "up" } else { "down" };
            println!("{}% {arrow} vs. previous period", summary.percent_change);
            for bucket in &summary.buckets {
                println!("  {:<8} {:.1}h", bucket.label, bucket.hours);
            }
        }
        UsageAction::Apps { seed, json } => {
            let summary = simulator(seed).summary(TimeRange::Daily);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary.top_apps)?);
                return Ok(());
            }
            for app in &summary.top_apps {
                println!("{:<12} {}", app.name, format_minutes(app.minutes, true));
            }
        }
    }
    Ok(())
}
