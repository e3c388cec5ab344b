use crate::demo::{run_demo, run_score, DemoArgs, ScoreArgs};
use crate::server;
use career_compass::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Career Compass",
    about = "Run the Full Stack Java career readiness assessment service or score attempts offline",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Walk a scripted candidate through the assessment and print the recommendation
    Demo(DemoArgs),
    /// Score a recorded attempt from a `question_id,option_index` CSV
    Score(ScoreArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Demo(args) => run_demo(args),
        Command::Score(args) => run_score(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::Profile;

    #[test]
    fn serve_is_the_default() {
        let cli = Cli::try_parse_from(["career-compass-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn demo_accepts_profile() {
        let cli = Cli::try_parse_from(["career-compass-api", "demo", "--profile", "developing"])
            .expect("parses");
        match cli.command {
            Some(Command::Demo(args)) => {
                assert_eq!(args.profile, Profile::Developing);
                assert!(!args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn score_requires_answers() {
        assert!(Cli::try_parse_from(["career-compass-api", "score"]).is_err());
    }
}
