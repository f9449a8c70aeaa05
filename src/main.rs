use std::env;
use std::io;

use coffee_machine::csv::read_requests;
use coffee_machine::{MachineConfig, Session};
use tokio_stream::wrappers::ReceiverStream;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse().unwrap()))
        .with_writer(std::io::stderr)
        .init();

    let path = env::args()
        .nth(1)
        .expect("usage: coffee-machine <requests.csv>");

    if !path.ends_with(".csv") {
        warn!(path, "input file seems to not be a csv file");
    }

    let config = MachineConfig::from_env();
    let mut session = Session::from_config(&config).expect("invalid machine configuration");

    let requests = read_requests(path.clone()).expect("failed to open csv file");
    let (request_sender, request_receiver) = tokio::sync::mpsc::channel(16);

    tokio::spawn(async move {
        for result in requests {
            match result {
                Ok(request) => {
                    if request_sender.send(request).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("{e}");
                }
            }
        }
    });

    let stdout = io::stdout();
    session
        .run(ReceiverStream::new(request_receiver), &mut stdout.lock())
        .await
        .expect("failed to write to stdout");
}
