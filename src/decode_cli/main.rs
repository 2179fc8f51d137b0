/**
 * social-decode
 *
 * Decodes one API payload as a named resource and prints its normalized
 * JSON form. Reads from FILE, or from stdin when no file is given.
 *
 *     social-decode <Resource> [FILE]
 *
 * Configuration comes from the SOCIAL_MODEL_* environment variables and
 * logging from RUST_LOG.
 */
use std::io::Read;
use std::process::ExitCode;

use social_api_model::json::Registry;
use social_api_model::shared::config::DecodeConfig;

fn usage(registry: &Registry) -> ExitCode {
    eprintln!("usage: social-decode <Resource> [FILE]");
    eprintln!();
    eprintln!("resources:");
    for resource in registry.resources() {
        eprintln!("  {}", resource);
    }
    ExitCode::FAILURE
}

fn read_payload(path: Option<&str>) -> std::io::Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path),
        None => {
            let mut buffer = Vec::new();
            std::io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn main() -> ExitCode {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .with_writer(std::io::stderr)
        .init();

    let registry = match DecodeConfig::from_env().and_then(Registry::install) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (resource, path) = match args.as_slice() {
        [resource] => (resource.as_str(), None),
        [resource, path] => (resource.as_str(), Some(path.as_str())),
        _ => return usage(registry),
    };

    let payload = match read_payload(path) {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("could not read {}: {}", path.unwrap_or("stdin"), e);
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(resource, bytes = payload.len(), "decoding payload");
    let normalized = registry
        .decode_named(resource, &payload)
        .and_then(|value| Ok(serde_json::to_string_pretty(&value)?));
    match normalized {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::warn!(resource, error = %e, "decode failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
