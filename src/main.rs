use clap::{Parser, Subcommand};
use dotenv::dotenv;
use serde_json::{json, Value};
use startup_sage::adk::agent::SageAgent;
use startup_sage::adk::model::openai::OpenAIModel;
use startup_sage::adk::model::Model;
use startup_sage::sage::condition::{try_evaluate, ALL_OPERATORS};
use startup_sage::sage::context::Context;
use startup_sage::sage::events::{log_agent_interaction, log_user_action};
use startup_sage::sage::formulas::calculate_model;
use startup_sage::sage::gamification::{check_badge_eligibility, total_points};
use startup_sage::sage::loader::TableLoader;
use startup_sage::sage::settings::Settings;
use startup_sage::sage::types::Question;
use startup_sage::sage::wizard::{
    calculate_quality_score, quality_feedback, questions_for_project_type, validate_metrics,
    WizardSession,
};
use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

type CliResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Id used in event logs
    #[arg(long, default_value = "local")]
    user: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the questionnaire
    Questions {
        /// Only the questions that apply to this project type
        #[arg(short, long)]
        project_type: Option<String>,
    },
    /// Answer the questionnaire interactively and print the report
    Wizard {
        /// Also ask Sage for one recommendation
        #[arg(long)]
        advise: bool,
    },
    /// Metrics, score, warnings and badges for a YAML answers file
    Report {
        #[arg(short, long)]
        answers: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Ask Sage for one recommendation
    Advise {
        #[arg(short, long)]
        answers: PathBuf,
    },
    /// Evaluate a single condition
    Check {
        /// e.g. "churn_rate > 20"
        #[arg(short, long)]
        condition: String,

        /// YAML answers file used as the context
        #[arg(short, long)]
        answers: Option<PathBuf>,

        /// Extra bindings as key=value
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },
}

fn init_logging(settings: &Settings) {
    let env = env_logger::Env::default().default_filter_or(settings.log_level.as_str());
    env_logger::Builder::from_env(env).init();
}

fn read_answers(path: &Path) -> CliResult<Context> {
    let content = std::fs::read_to_string(path)?;
    let answers: Context = serde_yaml::from_str(&content)?;
    log::debug!("Loaded {} answers from {}", answers.len(), path.display());
    Ok(answers)
}

/// `key=value` where the value is JSON when it parses and text otherwise
fn parse_binding(raw: &str) -> CliResult<(String, Value)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {:?}", raw))?;
    let value = serde_json::from_str(value.trim()).unwrap_or_else(|_| json!(value.trim()));
    Ok((key.trim().to_string(), value))
}

fn print_questions(questions: &[&Question]) {
    for (i, q) in questions.iter().enumerate() {
        let branch = if q.branch.is_empty() {
            String::new()
        } else {
            format!(" [{}]", q.branch.join(", "))
        };
        println!("{:>2}. {} ({:?}){}", i + 1, q.text, q.question_type, branch);
    }
}

fn report(settings: &Settings, answers: &Context, user_actions: &Context, as_json: bool) -> CliResult<()> {
    let loader = TableLoader::new();
    let rules = loader.rules(settings.rules_file.as_deref())?;
    let badges = loader.badges(settings.badges_file.as_deref())?;

    let drivers = answers.normalized();
    let metrics = calculate_model(&drivers);
    let metric_ctx = metrics.to_context();
    let combined = Context::merged(&drivers, &metric_ctx);
    let score = calculate_quality_score(&combined);
    let warnings = validate_metrics(&rules, &metric_ctx, &drivers);
    let earned = check_badge_eligibility(&badges, &combined, user_actions);

    if as_json {
        let out = json!({
            "metrics": metrics,
            "score": score,
            "feedback": quality_feedback(score),
            "warnings": warnings,
            "badges": earned,
            "points": total_points(&earned.matches),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Financial model");
    for (name, value) in metrics.iter() {
        println!("  {:<10} {:>12.2}", name, value);
    }

    println!("\nQuality score: {}/100", score);
    println!("  {}", quality_feedback(score));

    if !warnings.matches.is_empty() {
        println!("\nWarnings");
        for rule in &warnings.matches {
            println!("  [{}] {}: {}", rule.severity, rule.name, rule.message);
        }
    }

    if !earned.matches.is_empty() {
        println!("\nBadges ({} pts)", total_points(&earned.matches));
        for badge in &earned.matches {
            println!("  {} {}: {}", badge.icon, badge.name, badge.description);
        }
    }

    for failure in warnings.failures.iter().chain(earned.failures.iter()) {
        log::warn!("Skipped {}: {}", failure.id, failure.reason);
    }

    Ok(())
}

async fn advise(settings: &Settings, user: &str, answers: &Context) -> CliResult<()> {
    let openai = OpenAIModel::new(settings.model_name.clone())?;
    log::info!("Using model: {}", openai.model_name());
    let model: Arc<dyn Model> = Arc::new(openai);

    let mut agent = SageAgent::new(model, settings);
    let metrics = agent.calculate_model(answers);
    let advice = agent.suggest_changes(answers, &metrics).await;

    let request = "suggest_changes";
    agent.log_conversation(request, &advice, Some(metrics));
    log_agent_interaction(user, request, &advice, Some(serde_json::to_value(metrics)?));

    println!("\nSage says: {}", advice);
    Ok(())
}

#[tokio::main]
async fn main() -> CliResult<()> {
    dotenv().ok();
    let settings = Settings::from_env()?;
    init_logging(&settings);

    let args = Args::parse();

    match args.command {
        Commands::Questions { project_type } => {
            let questions = TableLoader::new().questions(settings.questions_file.as_deref())?;
            let selected: Vec<&Question> = match project_type.as_deref() {
                Some(pt) => questions_for_project_type(&questions, pt),
                None => questions.iter().collect(),
            };
            print_questions(&selected);
        }
        Commands::Wizard { advise: with_advice } => {
            let questions = TableLoader::new().questions(settings.questions_file.as_deref())?;
            let stdin = io::stdin();
            let answers = WizardSession::new(questions, stdin.lock(), io::stdout()).run()?;
            log_user_action(&args.user, "wizard_completed", Some(answers.to_json()));

            let mut user_actions = Context::empty();
            user_actions.insert("wizard_completed", true);
            if with_advice {
                user_actions.insert("advice_requested", true);
            }

            println!();
            report(&settings, &answers, &user_actions, false)?;
            if with_advice {
                advise(&settings, &args.user, &answers).await?;
            }
        }
        Commands::Report { answers, json } => {
            let answers = read_answers(&answers)?;
            report(&settings, &answers, &Context::empty(), json)?;
        }
        Commands::Advise { answers } => {
            let answers = read_answers(&answers)?;
            log_user_action(&args.user, "advice_requested", None);
            advise(&settings, &args.user, &answers).await?;
        }
        Commands::Check {
            condition,
            answers,
            set,
        } => {
            let mut context = match answers {
                Some(path) => read_answers(&path)?.normalized(),
                None => Context::empty(),
            };
            for raw in &set {
                let (key, value) = parse_binding(raw)?;
                context.insert(key, value);
            }

            let holds = try_evaluate(&condition, &context, ALL_OPERATORS)?;
            println!("{}", holds);
        }
    }

    Ok(())
}
