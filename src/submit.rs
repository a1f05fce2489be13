use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{debug, info, LevelFilter};
use proof_submitter::{
    utils::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PROOF_PATH},
    ProofSubmitter, ServerEndpoint, SubmitterConfig,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Submit a proof to a vOPRF evaluation server", long_about = None)]
struct Cli {
    /// Host of the evaluation server
    #[arg(long, default_value = DEFAULT_HOST)]
    address: String,
    /// Port of the evaluation server
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,
    /// Proof file produced by the prover
    #[arg(long, env = "PROOF_PATH", default_value = DEFAULT_PROOF_PATH)]
    proof: PathBuf,
}

impl Cli {
    fn into_config(self) -> SubmitterConfig {
        SubmitterConfig {
            endpoint: ServerEndpoint::new(self.address, self.port),
            proof_path: self.proof,
        }
    }
}

fn init_logging() {
    let log_level = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info".to_string())
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Info);

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    debug!("Logging initialized with level: {}", log_level);
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), anyhow::Error> {
    init_logging();

    let config = Cli::parse().into_config();
    let submitter = ProofSubmitter::new(config)?;
    info!(
        "Submitting {} to {}",
        submitter.get_proof_path().display(),
        submitter.get_url()
    );

    let response = submitter
        .run()
        .await
        .with_context(|| format!("failed to submit proof to {}", submitter.get_url()))?;

    println!("Response: {}", response);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url_for(args: &[&str]) -> String {
        let config = Cli::try_parse_from(args).unwrap().into_config();
        config.endpoint.url().unwrap().to_string()
    }

    #[test]
    fn defaults_to_local_server() {
        assert_eq!(
            url_for(&["submit"]),
            "http://localhost:8080/api/v1/evaluate"
        );
    }

    #[test]
    fn address_and_port_flags() {
        assert_eq!(
            url_for(&["submit", "--address", "10.0.0.5", "--port", "9090"]),
            "http://10.0.0.5:9090/api/v1/evaluate"
        );
    }

    #[test]
    fn proof_flag_sets_path() {
        let cli = Cli::try_parse_from(["submit", "--proof", "../zk/oprf_commitment/target/proof"])
            .unwrap();
        assert_eq!(
            cli.into_config().proof_path,
            PathBuf::from("../zk/oprf_commitment/target/proof")
        );
    }

    #[test]
    fn rejects_out_of_range_port() {
        assert!(Cli::try_parse_from(["submit", "--port", "70000"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
