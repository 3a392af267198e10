use behavioral_patterns::{ChainConfig, Client, Dispatch};
use colored::Colorize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

// =============================================================================
// Chain of Responsibility demo
// =============================================================================

const OVERRIDE_CHAIN: &str = r#"
[[handlers]]
name = "ConcreteHandlerC"
marker = "C"

[[handlers]]
name = "ConcreteHandlerA"
marker = "A"

[[handlers]]
name = "LateHandlerA"
marker = "A"
"#;

fn print_dispatch(request: &str, dispatch: &Dispatch) {
    let response = if dispatch.is_handled() {
        dispatch.response.green()
    } else {
        dispatch.response.yellow()
    };
    println!(
        "{} {:<3} -> {} {}",
        "send".bold(),
        request,
        response,
        format!("({} hop(s))", dispatch.hops).dimmed()
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!("=== Default chain: A -> B -> C ===");
    let client = Client::new();
    info!(chain = ?client.chain(), "client ready");
    for _ in 0..3 {
        for request in ["A", "B", "C", "D"] {
            print_dispatch(request, &client.dispatch(request));
        }
    }

    println!("\n=== Chain loaded from TOML ===");
    match ChainConfig::from_toml_str(OVERRIDE_CHAIN).and_then(|config| config.build()) {
        Ok(chain) => {
            let client = Client::with_chain(chain);
            println!("order: {}", client.chain().names().join(" -> "));
            for request in ["A", "B", "C"] {
                print_dispatch(request, &client.dispatch(request));
            }
        }
        Err(err) => {
            error!(%err, "invalid chain config");
            eprintln!("{} {err}", "error:".red());
        }
    }
}
