use clap::Parser;
use orgchart::cli::{execute_command, output, Cli};
use orgchart::exitcode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let code = match execute_command(&cli) {
        Ok(()) => exitcode::OK,
        Err(e) => {
            output::error(&e);
            e.exit_code()
        }
    };
    std::process::exit(code);
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgchart::cli::{Commands, Order};

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_show_command() {
        let cli = Cli::parse_from([
            "orgchart", "-dd", "show", "CEO", "-e", "CEO:CTO", "-e", "CTO:VP_SW", "-o", "reverse",
        ]);
        assert_eq!(cli.debug, 2);
        match cli.command {
            Some(Commands::Show {
                root,
                edges,
                order,
                tree,
            }) => {
                assert_eq!(root, "CEO");
                assert_eq!(edges, vec!["CEO:CTO", "CTO:VP_SW"]);
                assert_eq!(order, Order::Reverse);
                assert!(!tree);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
