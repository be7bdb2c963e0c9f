use clap::Subcommand;
use offscreen_core::goals::{GOAL_COLORS, GOAL_ICONS};
use offscreen_core::storage::Database;
use offscreen_core::Goal;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum GoalAction {
    /// Add a screen-time goal
    Add {
        /// Goal name, e.g. "Reduce Instagram Usage"
        name: String,
        /// Hours part of the daily limit
        #[arg(long, default_value = "0")]
        hours: u64,
        /// Minutes part of the daily limit
        #[arg(long, default_value = "0")]
        minutes: u64,
        #[arg(long)]
        icon: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// List goals
    List {
        #[arg(long)]
        json: bool,
    },
    /// Remove a goal by id
    Remove { id: Uuid },
    /// Record minutes spent against a goal
    Track { id: Uuid, minutes: u64 },
    /// Show progress for every goal
    Progress,
}

pub fn run(action: GoalAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut goals = db.goals()?;

    match action {
        GoalAction::Add {
            name,
            hours,
            minutes,
            icon,
            color,
        } => {
            let target = hours * 60 + minutes;
            let icon = icon.unwrap_or_else(|| GOAL_ICONS[0].to_string());
            let color = color.unwrap_or_else(|| GOAL_COLORS[0].to_string());
            let goal = Goal::new(name, target, icon, color)?;
            println!("{}", serde_json::to_string_pretty(&goal)?);
            goals.push(goal);
            db.save_goals(&goals)?;
        }
        GoalAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&goals)?);
            } else {
                for goal in &goals {
                    println!("{}  {} ({}m limit)", goal.id, goal.name, goal.target_minutes);
                }
            }
        }
        GoalAction::Remove { id } => {
            let before = goals.len();
            goals.retain(|g| g.id != id);
            if goals.len() == before {
                return Err(format!("no goal with id {id}").into());
            }
            db.save_goals(&goals)?;
            println!("Goal removed: {id}");
        }
        GoalAction::Track { id, minutes } => {
            let goal = goals
                .iter_mut()
                .find(|g| g.id == id)
                .ok_or_else(|| format!("no goal with id {id}"))?;
            goal.current_minutes += minutes;
            println!("{}", serde_json::to_string_pretty(&goal)?);
            db.save_goals(&goals)?;
        }
        GoalAction::Progress => {
            for goal in &goals {
                let marker = if goal.is_exceeded() { " (exceeded)" } else { "" };
                println!(
                    "{:<30} {:>3}%  {}/{}m{}",
                    goal.name,
                    goal.progress_pct(),
                    goal.current_minutes,
                    goal.target_minutes,
                    marker
                );
            }
        }
    }
    Ok(())
}
