use env_logger::Env;
use mailhunt::{configuration::get_configuration, startup::run};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = get_configuration().expect("Failed to read configuration.");

    let session = tokio::spawn(run(settings));

    tokio::select! {
        result = session => {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => log::error!("Unexpected error: {:?}", e),
                Err(e) => log::error!("Session task failed: {:?}", e),
            }
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n[!] Process interrupted by user");
            std::process::exit(0);
        }
    }
}
