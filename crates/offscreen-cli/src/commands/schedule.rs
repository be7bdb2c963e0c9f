use chrono::{Local, NaiveTime, Weekday};
use clap::Subcommand;
use offscreen_core::storage::Database;
use offscreen_core::FocusSchedule;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Add a focus-mode window
    Add {
        /// Schedule name, e.g. "Work Focus"
        name: String,
        /// Window start, HH:MM
        #[arg(long)]
        start: String,
        /// Window end, HH:MM (an end at or before the start spans midnight)
        #[arg(long)]
        end: String,
        /// Comma-separated weekdays, e.g. "mon,tue,wed,thu,fri"
        #[arg(long, default_value = "mon,tue,wed,thu,fri")]
        days: String,
    },
    /// List schedules
    List {
        #[arg(long)]
        json: bool,
    },
    /// Enable a schedule by id
    Enable { id: Uuid },
    /// Disable a schedule by id
    Disable { id: Uuid },
    /// Remove a schedule by id
    Remove { id: Uuid },
    /// Show schedules active right now
    Active,
}

fn parse_time(value: &str) -> Result<NaiveTime, Box<dyn std::error::Error>> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| format!("invalid time '{value}', expected HH:MM").into())
}

fn parse_days(value: &str) -> Result<Vec<Weekday>, Box<dyn std::error::Error>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|day| {
            day.parse::<Weekday>()
                .map_err(|_| format!("invalid weekday '{day}'").into())
        })
        .collect()
}

fn set_enabled(
    db: &Database,
    schedules: &mut [FocusSchedule],
    id: Uuid,
    enabled: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let schedule = schedules
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or_else(|| format!("no schedule with id {id}"))?;
    schedule.enabled = enabled;
    println!("{}", serde_json::to_string_pretty(&schedule)?);
    db.save_focus_schedules(schedules)?;
    Ok(())
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut schedules = db.focus_schedules()?;

    match action {
        ScheduleAction::Add {
            name,
            start,
            end,
            days,
        } => {
            let schedule =
                FocusSchedule::new(name, parse_time(&start)?, parse_time(&end)?, parse_days(&days)?)?;
            println!("{}", serde_json::to_string_pretty(&schedule)?);
            schedules.push(schedule);
            db.save_focus_schedules(&schedules)?;
        }
        ScheduleAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&schedules)?);
            } else {
                for s in &schedules {
                    let state = if s.enabled { "on " } else { "off" };
                    println!(
                        "{}  [{}] {}  {}-{}",
                        s.id,
                        state,
                        s.name,
                        s.start.format("%H:%M"),
                        s.end.format("%H:%M")
                    );
                }
            }
        }
        ScheduleAction::Enable { id } => set_enabled(&db, &mut schedules, id, true)?,
        ScheduleAction::Disable { id } => set_enabled(&db, &mut schedules, id, false)?,
        ScheduleAction::Remove { id } => {
            let before = schedules.len();
            schedules.retain(|s| s.id != id);
            if schedules.len() == before {
                return Err(format!("no schedule with id {id}").into());
            }
            db.save_focus_schedules(&schedules)?;
            println!("Schedule removed: {id}");
        }
        ScheduleAction::Active => {
            let now = Local::now().naive_local();
            let active: Vec<&FocusSchedule> =
                schedules.iter().filter(|s| s.active_at(now)).collect();
            println!("{}", serde_json::to_string_pretty(&active)?);
        }
    }
    Ok(())
}
