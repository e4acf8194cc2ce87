// protolens language server
//
// Runs protolint on .proto files and reports findings on the exact token
// they are about, with quick fixes where the rule allows one.
//
// Usage:
//   protolens-lsp                 serve LSP over stdio
//   protolens-lsp check <file>... print diagnostics, exit 1 if any

mod check;
mod convert;
mod server;

use std::process::ExitCode;

use tower_lsp::{LspService, Server};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("--stdio") => serve(),
        Some("check") => check::run(&args[1..]),
        Some("--version" | "-V") => {
            println!("protolens-lsp {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Some("--help" | "-h") => {
            print_usage();
            ExitCode::SUCCESS
        }
        Some(other) => {
            eprintln!("error: unknown argument `{other}`");
            print_usage();
            ExitCode::from(2)
        }
    }
}

fn serve() -> ExitCode {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(error) => {
            eprintln!("error: failed to start runtime: {error}");
            return ExitCode::FAILURE;
        }
    };
    runtime.block_on(async {
        let stdin = tokio::io::stdin();
        let stdout = tokio::io::stdout();

        let (service, socket) = LspService::new(server::ProtolensServer::new);
        Server::new(stdin, stdout, socket).serve(service).await;
    });
    ExitCode::SUCCESS
}

/// Log to stderr; stdout carries the protocol.
///
/// The filter comes from `PROTOLENS_LOG`, then `RUST_LOG`, defaulting to
/// warnings only.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("PROTOLENS_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}

fn print_usage() {
    println!("protolens-lsp {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage:");
    println!("  protolens-lsp [--stdio]              Serve LSP over stdio");
    println!("  protolens-lsp check <file.proto>...  Lint files and print diagnostics");
    println!("  protolens-lsp --version              Print the version");
    println!();
    println!("Check options:");
    println!("  --protolint=<path>   protolint executable (default: protolint)");
    println!("  --config=<path>      protolint config directory or file");
}
