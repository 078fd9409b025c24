use chronotag::{Extraction, Extractor, ExtractorOptions, Language};
use serde::Deserialize;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::str::FromStr;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let options = ExtractorOptions {
        cache_dir: config.cache_dir.clone(),
        overwrite_cache: config.overwrite_cache,
    };
    let extractor = match Extractor::with_options(config.language, &options) {
        Ok(ex) => ex,
        Err(err) => {
            eprintln!("error: failed to load grammar: {err}");
            std::process::exit(1);
        }
    };

    let status = match &config.input {
        Input::Text(text) => run_single(&extractor, &config, text),
        Input::File(path) => run_batch(&extractor, &config, path),
    };
    if let Err(err) = status {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

enum Input {
    Text(String),
    File(PathBuf),
}

struct CliConfig {
    input: Input,
    language: Language,
    base_time: Option<String>,
    output: Option<PathBuf>,
    cache_dir: Option<PathBuf>,
    overwrite_cache: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut text: Option<String> = None;
    let mut file: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut cache_dir: Option<PathBuf> = None;
    let mut language = Language::Chinese;
    let mut base_time: Option<String> = None;
    let mut overwrite_cache = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("chronotag {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--overwrite_cache" | "--overwrite-cache" => overwrite_cache = true,
            "--text" => text = Some(expect_value(&mut args, "--text")?),
            "--file" => file = Some(PathBuf::from(expect_value(&mut args, "--file")?)),
            "--output" => output = Some(PathBuf::from(expect_value(&mut args, "--output")?)),
            "--cache_dir" | "--cache-dir" => {
                cache_dir = Some(PathBuf::from(expect_value(&mut args, "--cache_dir")?))
            }
            "--language" => {
                language = Language::from_str(&expect_value(&mut args, "--language")?)
                    .map_err(|e| format!("error: {e}"))?
            }
            "--base_time" | "--base-time" => {
                base_time = Some(expect_value(&mut args, "--base_time")?)
            }
            other => return Err(format!("error: unknown option {other:?}\n\n{}", help_text())),
        }
    }

    let input = match (text, file) {
        (Some(_), Some(_)) => {
            return Err("error: --text and --file are mutually exclusive".to_string());
        }
        (Some(t), None) => Input::Text(t),
        (None, Some(f)) => Input::File(f),
        (None, None) => {
            return Err(format!("error: one of --text or --file is required\n\n{}", help_text()));
        }
    };
    if output.is_some() && !matches!(input, Input::File(_)) {
        return Err("error: --output requires --file".to_string());
    }

    Ok(CliConfig { input, language, base_time, output, cache_dir, overwrite_cache })
}

fn expect_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next().ok_or_else(|| format!("error: {flag} expects a value"))
}

fn extract(
    extractor: &Extractor,
    text: &str,
    base_time: Option<&str>,
) -> Result<Extraction, String> {
    extractor.extract(text, base_time).map_err(|err| err.to_string())
}

fn run_single(extractor: &Extractor, config: &CliConfig, text: &str) -> Result<(), String> {
    let out = extract(extractor, text, config.base_time.as_deref())?;
    println!("Language: {}", config.language.as_str());
    println!("Query: {text}");
    if let Some(base) = &config.base_time {
        println!("BaseTime: {base}");
    }
    println!("Query Tag: {}", out.query_tag);
    println!("Result: {}", serde_json::to_string(&out.results).map_err(|e| e.to_string())?);
    Ok(())
}

#[derive(Deserialize)]
struct BatchLine {
    text: String,
    base_time: Option<String>,
}

/// Batch mode: one JSON object per line with `text` and optional
/// `base_time`; the extraction is appended to each object.
fn run_batch(extractor: &Extractor, config: &CliConfig, path: &PathBuf) -> Result<(), String> {
    let file = std::fs::File::open(path).map_err(|e| format!("cannot open {path:?}: {e}"))?;
    let mut sink: Box<dyn Write> = match &config.output {
        Some(out) => {
            Box::new(std::fs::File::create(out).map_err(|e| format!("cannot create {out:?}: {e}"))?)
        }
        None => Box::new(std::io::stdout()),
    };

    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| e.to_string())?;
        if line.trim().is_empty() {
            continue;
        }
        let parsed: BatchLine = match serde_json::from_str(&line) {
            Ok(p) => p,
            Err(err) => {
                eprintln!("line {}: skipping malformed record: {err}", line_no + 1);
                continue;
            }
        };
        let base = parsed.base_time.as_deref().or(config.base_time.as_deref());
        let out = extract(extractor, &parsed.text, base)?;

        let mut record = serde_json::json!({ "text": parsed.text });
        if let Some(base) = base {
            record["base_time"] = serde_json::Value::String(base.to_string());
        }
        record["results"] = serde_json::to_value(&out.results).map_err(|e| e.to_string())?;
        record["query_tag"] = serde_json::Value::String(out.query_tag.to_string());
        writeln!(sink, "{record}").map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn help_text() -> String {
    format!(
        "chronotag {version}

Extract Chinese and English time expressions into UTC instants and intervals.

Usage:
  chronotag --text <text> [OPTIONS]
  chronotag --file <path> [OPTIONS]

Options:
  --text <text>          Input text to extract from.
  --file <path>          Batch input: one JSON object per line with
                         {{\"text\": ..., \"base_time\": ...}}.
  --output <path>        Write batch results to a file instead of stdout.
  --language <lang>      chinese (default) or english.
  --base_time <instant>  Base instant, YYYY-MM-DDTHH:MM:SSZ. Defaults to
                         the current UTC wall clock.
  --cache_dir <path>     Directory for the grammar cache manifest.
  --overwrite_cache      Force grammar recompilation.
  -h, --help             Show this help message.
  -V, --version          Print version information.

Exit codes:
  0  Success.
  1  Internal error or grammar load failure.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
