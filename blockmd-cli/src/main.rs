// Command-line interface for blockmd
//
// This binary converts block documents between the supported formats
// (markdown, clean-json, sectioned-json) using the blockmd-babel crate.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected
// from the file extension, while being overwritable by an explicit --from
// flag.
// Usage:
//  blockmd <input> --to <format> [--from <format>] [--output <file>]   - Convert between formats (default)
//  blockmd convert <input> --to <format> [...]                         - Same as above (explicit)
//  blockmd format <input>                                              - Normalize a Markdown file
//  blockmd compose <input>                                             - Sectioned JSON + metadata -> title/body clean JSON
//  blockmd --list-formats                                              - List available formats
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix; known keys override the loaded
// configuration, the rest are passed to the target format.
// Example:
//  blockmd doc.md --to clean-json --extra-pretty false --extra-version 2.30.0

use blockmd_babel::formats::clean_json::CleanJsonFormat;
use blockmd_babel::formats::markdown::MarkdownFormat;
use blockmd_babel::formats::sectioned::SectionedJsonFormat;
use blockmd_babel::ids::{RandomIds, SystemClock, UuidIds};
use blockmd_babel::{pipeline, FormatRegistry};
use blockmd_config::{BlockmdConfig, Loader, MismatchConfig};
use clap::{Arg, ArgAction, Command, ValueHint};
use std::collections::HashMap;
use std::fs;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            // Check if the next arg is a value or another flag/end
            let has_value = if i + 1 < args.len() {
                !args[i + 1].starts_with('-')
            } else {
                false
            };

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                // No value, treat as boolean flag
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("blockmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting block documents between formats")
        .long_about(
            "blockmd converts documents between the block-JSON schemas used by\n\
            rich-text editors and plain Markdown.\n\n\
            Formats:\n  \
            - markdown:       line-oriented Markdown with the FAQ micro-format\n  \
            - clean-json:     block-array JSON with per-block ids and time/version\n  \
            - sectioned-json: CMS sections keyed by level-2 headings\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            blockmd doc.md --to clean-json               # Markdown to editor JSON (stdout)\n  \
            blockmd doc.json --to markdown -o doc.md     # Editor JSON to Markdown file\n  \
            blockmd doc.md --to clean-json --extra-pretty false",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a blockmd.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between document formats (default command)")
                .long_about(
                    "Convert documents between different formats.\n\n\
                    The source format is auto-detected from the file extension\n\
                    (.md -> markdown, .json -> clean-json); sectioned-json must\n\
                    be named explicitly with --from.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    blockmd convert doc.md --to clean-json\n  \
                    blockmd convert doc.json --to markdown -o doc.md\n  \
                    blockmd convert cms.json --from sectioned-json --to markdown\n  \
                    blockmd doc.md --to clean-json            # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Normalize a Markdown file")
                .long_about(
                    "Parse a Markdown file and re-serialize it, normalizing\n\
                    list markers, block spacing and inline syntax.\n\n\
                    Output is always written to stdout.\n\n\
                    Examples:\n  \
                    blockmd format doc.md                 # Normalize to stdout\n  \
                    blockmd format doc.md > clean.md      # Redirect to file",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("compose")
                .about("Build title/body clean JSON from a sectioned document")
                .long_about(
                    "Read a sectioned JSON document (metadata required) and emit\n\
                    a combined object with 'titleBlocks' derived from the page\n\
                    metadata and 'bodyBlocks' from the section content.\n\n\
                    Example:\n  \
                    blockmd compose cms.json -o page.json",
                )
                .arg(
                    Arg::new("input")
                        .help("Input sectioned JSON file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // Check if this is a "missing subcommand" error by seeing if the
            // first arg looks like a file
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && cleaned_args[1] != "convert"
                && cleaned_args[1] != "format"
                && cleaned_args[1] != "compose"
                && cleaned_args[1] != "help"
            {
                // Inject "convert" as the subcommand
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                // Not a case where we should inject convert, show original error
                e.exit();
            }
        }
    };

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from_arg = sub_matches.get_one::<String>("from");
            let to = sub_matches.get_one::<String>("to").expect("to is required");

            // Auto-detect --from if not provided
            let from = if let Some(f) = from_arg {
                f.to_string()
            } else {
                let registry = registry_from_config(&config);
                match registry.detect_format_from_filename(input) {
                    Some(detected) => detected,
                    None => {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                }
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &extra_params, &config);
        }
        Some(("format", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            // Format command always outputs to stdout (no -o flag)
            handle_convert_command(input, "markdown", "markdown", None, &extra_params, &config);
        }
        Some(("compose", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_compose_command(input, output, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Build a registry whose formats carry the loaded configuration.
fn registry_from_config(config: &BlockmdConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::new();
    registry.register(MarkdownFormat::new(
        (&config.faq).into(),
        (&config.markdown).into(),
    ));
    registry.register(CleanJsonFormat::new(
        Box::new(RandomIds),
        Box::new(SystemClock),
        (&config.clean_json).into(),
    ));
    registry.register(SectionedJsonFormat::new(
        Box::new(UuidIds),
        Box::new(SystemClock),
        (&config.markdown).into(),
        (&config.faq).into(),
    ));
    registry
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &BlockmdConfig,
) {
    let registry = registry_from_config(config);

    // Validate formats exist
    if let Err(e) = registry.get(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    // Read input file
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    // Parse
    let doc = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    // Serialize (format-specific parameters allowed via --extra-*)
    let result = registry
        .serialize_with_options(&doc, to, extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    write_output(output, &result);
}

/// Handle the compose command
fn handle_compose_command(input: &str, output: Option<&str>, config: &BlockmdConfig) {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let result = pipeline::sectioned_to_clean_json_with(
        &source,
        &(&config.faq).into(),
        &(&config.clean_json).into(),
        &RandomIds,
        &SystemClock,
    )
    .unwrap_or_else(|e| {
        eprintln!("Compose error: {e}");
        std::process::exit(1);
    });

    write_output(output, &result);
}

fn write_output(output: Option<&str>, content: &str) {
    match output {
        Some(path) => {
            fs::write(path, content).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            print!("{content}");
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    let registry = FormatRegistry::default();
    for name in registry.list_formats() {
        let format = registry.get(&name).expect("listed format exists");
        let extensions = format.file_extensions().join(", ");
        if extensions.is_empty() {
            println!("  {name:<16} {}", format.description());
        } else {
            println!("  {name:<16} {} (.{extensions})", format.description());
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> BlockmdConfig {
    let loader = Loader::new().with_optional_file("blockmd.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Consume the extra-* keys that map onto configuration; the rest stay in
/// the map and are forwarded to the target format.
fn apply_config_overrides(config: &mut BlockmdConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("version") {
        config.clean_json.version = raw;
    }
    if let Some(raw) = extra_params.remove("pretty") {
        config.clean_json.pretty = parse_bool_arg("pretty", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["unordered-marker", "marker"]) {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(marker), None) => config.markdown.unordered_marker = marker,
            _ => {
                eprintln!("Invalid value '{raw}' for --extra-unordered-marker (one character)");
                std::process::exit(1);
            }
        }
    }
    if let Some(raw) = take_override(extra_params, &["question-level"]) {
        match raw.parse::<u8>() {
            Ok(level @ 1..=6) => config.faq.question_level = level,
            _ => {
                eprintln!("Invalid value '{raw}' for --extra-question-level (1-6)");
                std::process::exit(1);
            }
        }
    }
    if let Some(raw) = extra_params.remove("faq-truncate") {
        if parse_bool_arg("faq-truncate", &raw) {
            config.faq.mismatch = MismatchConfig::Truncate;
        }
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
