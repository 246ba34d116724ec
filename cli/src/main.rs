use clap::{Parser, Subcommand};
use reqwest::StatusCode;
use stages::{DraftError, ProvisionalStage, ProvisionalStageRace, StageRace, StageRaceId, sort_by_earliest_date};


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status} for {operation}")]
    ServerError { operation: &'static str, status: StatusCode },
    #[error("invalid stage race: {0}")]
    Draft(#[from] DraftError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "stage-races-cli", about = "Stage race API CLI")]
struct Cli {
    #[arg(long, env = "STAGE_RACES_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the host is up.
    Ping,
    /// List stage races ordered by their first stage.
    List,
    /// Create a stage race.
    Create {
        #[arg(long)]
        name: String,
        /// Stage as `NAME@YYYY-MM-DD`; repeat for each stage.
        #[arg(long = "stage", value_parser = parse_stage_arg, required = true)]
        stages: Vec<ProvisionalStage>,
    },
    /// Delete a stage race by id.
    Delete { id: StageRaceId },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let base_url = cli.base_url.trim_end_matches('/').to_owned();
    let client = reqwest::Client::new();

    match cli.command {
        Command::Ping => run_ping(&client, &base_url).await,
        Command::List => run_list(&client, &base_url).await,
        Command::Create { name, stages } => run_create(&client, &base_url, &name, stages).await,
        Command::Delete { id } => run_delete(&client, &base_url, id).await,
    }
}

fn parse_stage_arg(raw: &str) -> Result<ProvisionalStage, String> {
    let (name, date) = raw
        .rsplit_once('@')
        .ok_or_else(|| format!("expected NAME@YYYY-MM-DD, got {raw:?}"))?;
    ProvisionalStage::new(name, date).map_err(|err| err.to_string())
}

fn format_row(race: &StageRace) -> String {
    format!(
        "{:>4}  {:<10}  {:<8}  {}",
        race.id,
        race.display_date(),
        race.duration_label(),
        race.name
    )
}

fn check(operation: &'static str, resp: reqwest::Response) -> Result<reqwest::Response, CliError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(CliError::ServerError { operation, status })
    }
}

async fn run_ping(client: &reqwest::Client, base_url: &str) -> Result<(), CliError> {
    let resp = client.get(format!("{base_url}/healthz")).send().await?;
    check("health check", resp)?;
    println!("ok");
    Ok(())
}

async fn run_list(client: &reqwest::Client, base_url: &str) -> Result<(), CliError> {
    let resp = client.get(format!("{base_url}/api/stage-races")).send().await?;
    let races = check("list", resp)?.json::<Vec<StageRace>>().await?;
    if races.is_empty() {
        println!("No stage races");
        return Ok(());
    }
    for race in sort_by_earliest_date(&races) {
        println!("{}", format_row(&race));
    }
    Ok(())
}

async fn run_create(
    client: &reqwest::Client,
    base_url: &str,
    name: &str,
    stages: Vec<ProvisionalStage>,
) -> Result<(), CliError> {
    let draft = ProvisionalStageRace::new(name, stages)?;
    let resp = client
        .post(format!("{base_url}/api/stage-races"))
        .json(&draft)
        .send()
        .await?;
    let created = check("create", resp)?.json::<StageRace>().await?;
    println!("{}", serde_json::to_string_pretty(&created)?);
    Ok(())
}

async fn run_delete(client: &reqwest::Client, base_url: &str, id: StageRaceId) -> Result<(), CliError> {
    let resp = client
        .delete(format!("{base_url}/api/stage-races/{id}"))
        .send()
        .await?;
    check("delete", resp)?;
    eprintln!("deleted stage race {id}");
    Ok(())
}
