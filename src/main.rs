use std::fs;
use std::io::Read as IoRead;
use std::path::{Path, PathBuf};

use clap::Parser;
use rayon::prelude::*;

use seo_guard::analyzer::Analyzer;
use seo_guard::checks::catalogue;
use seo_guard::cli::{AnalyzeArgs, Cli, ColorChoice, Commands, ConfigAction};
use seo_guard::config::{Config, ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
use seo_guard::context::Context;
use seo_guard::output::{
    AnalysisProgress, ColorMode, DocumentReport, JsonFormatter, OutputFormat, OutputFormatter,
    TextFormatter,
};
use seo_guard::registry::CheckRegistry;
use seo_guard::scanner::DocumentScanner;
use seo_guard::{EXIT_CONFIG_ERROR, EXIT_ISSUES_FOUND, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Analyze(args) => run_analyze(args, &cli),
        Commands::Checks => run_checks(),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args),
    };

    std::process::exit(exit_code);
}

fn run_analyze(args: &AnalyzeArgs, cli: &Cli) -> i32 {
    match run_analyze_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// A document source resolved from the CLI paths: either a file on disk or
/// content already read from stdin.
enum DocumentSource {
    File(PathBuf),
    Stdin(String),
}

fn run_analyze_impl(args: &AnalyzeArgs, cli: &Cli) -> seo_guard::Result<i32> {
    // 1. Load configuration
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Build the check registry from config enablement plus CLI --disable
    let mut enabled: std::collections::HashMap<String, bool> =
        config.checks.iter().map(|(k, v)| (k.clone(), *v)).collect();
    for id in &args.disable {
        enabled.insert(id.clone(), false);
    }
    let registry = CheckRegistry::new(enabled);

    // 3. Resolve document sources (stdin, files, directories)
    let sources = collect_sources(args, &config)?;

    // 4. Analyze each document (parallel with rayon)
    let focus_keyword = args
        .focus_keyword
        .clone()
        .or_else(|| config.analysis.focus_keyword.clone());

    let progress = AnalysisProgress::new(sources.len() as u64, cli.quiet);

    let reports: seo_guard::Result<Vec<DocumentReport>> = sources
        .into_par_iter()
        .map(|source| {
            let report = analyze_source(source, args, focus_keyword.as_deref(), &registry);
            progress.inc();
            report
        })
        .collect();
    progress.finish();
    let reports = reports?;

    // 5. Format output
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, &reports, color_mode, cli.verbose)?;

    // 6. Write output
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 7. Determine exit code
    if args.warn_only {
        return Ok(EXIT_SUCCESS);
    }

    let has_failures = reports.iter().any(|r| r.analysis.is_failed());
    let has_warnings = reports.iter().any(|r| r.analysis.is_warning());

    // Strict mode: CLI flag takes precedence, otherwise use config
    let strict = args.strict || config.analysis.strict;

    if has_failures || (strict && has_warnings) {
        Ok(EXIT_ISSUES_FOUND)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn collect_sources(args: &AnalyzeArgs, config: &Config) -> seo_guard::Result<Vec<DocumentSource>> {
    let extensions = args
        .ext
        .clone()
        .unwrap_or_else(|| config.scan.extensions.clone());
    let mut exclude_patterns = config.scan.exclude.clone();
    exclude_patterns.extend(args.exclude.clone());
    let scanner = DocumentScanner::new(&extensions, &exclude_patterns)?;

    let mut sources = Vec::new();
    for path in &args.paths {
        if path.as_os_str() == "-" {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            sources.push(DocumentSource::Stdin(content));
        } else if path.is_file() {
            // Explicitly named files bypass the extension filter
            sources.push(DocumentSource::File(path.clone()));
        } else if path.is_dir() {
            for file in scanner.scan(path)? {
                sources.push(DocumentSource::File(file));
            }
        } else {
            return Err(seo_guard::SeoGuardError::Config(format!(
                "Path not found: {}",
                path.display()
            )));
        }
    }

    Ok(sources)
}

fn analyze_source(
    source: DocumentSource,
    args: &AnalyzeArgs,
    focus_keyword: Option<&str>,
    registry: &CheckRegistry,
) -> seo_guard::Result<DocumentReport> {
    let (name, html) = match source {
        DocumentSource::Stdin(content) => ("<stdin>".to_string(), content),
        DocumentSource::File(path) => {
            let content = fs::read_to_string(&path).map_err(|e| {
                seo_guard::SeoGuardError::DocumentRead {
                    path: path.clone(),
                    source: e,
                }
            })?;
            (path.display().to_string(), content)
        }
    };

    let mut context = Context::new(html);
    if let Some(title) = &args.title {
        context = context.with_title(title);
    }
    if let Some(description) = &args.meta_description {
        context = context.with_meta_description(description);
    }
    if let Some(canonical) = &args.canonical {
        context = context.with_canonical(canonical);
    }
    if let Some(robots) = &args.robots {
        context = context.with_robots(robots);
    }
    if let Some(keyword) = focus_keyword {
        context = context.with_focus_keyword(keyword);
    }

    let checks = registry.filter_enabled_checks(catalogue(), &context);
    let analysis = Analyzer::new(checks).analyze(&context);

    Ok(DocumentReport {
        source: name,
        analysis,
    })
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> seo_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn format_output(
    format: OutputFormat,
    reports: &[DocumentReport],
    color_mode: ColorMode,
    verbose: u8,
) -> seo_guard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(reports),
        OutputFormat::Json => JsonFormatter.format(reports),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> seo_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn run_checks() -> i32 {
    let mut output = String::new();
    for check in catalogue() {
        output.push_str(&format!(
            "{:<18} weight {:.2}  {}\n",
            check.id(),
            check.weight(),
            check.label()
        ));
        output.push_str(&format!("{:<18} {}\n", "", check.description()));
    }
    print!("{output}");
    EXIT_SUCCESS
}

fn run_init(args: &seo_guard::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &seo_guard::cli::InitArgs) -> seo_guard::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(seo_guard::SeoGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

fn config_template() -> String {
    format!(
        r#"# seo-guard configuration file
# Loaded from {LOCAL_CONFIG_NAME} in the working directory.

# Check enablement: ids absent from this table are enabled.
# Run `seo-guard checks` to list the available check ids.
[checks]
# faq-schema = false
# howto-schema = false

[analysis]
# Site-wide default focus keyword (usually set per run with --focus-keyword)
# focus_keyword = "example topic"

# Treat warnings as failures (exit code 1)
strict = false

[scan]
# File extensions treated as documents when scanning directories
extensions = ["html", "htm"]

# Exclude patterns (glob syntax)
exclude = [
    "**/node_modules/**",
    "**/.git/**",
]
"#
    )
}

fn run_config(args: &seo_guard::cli::ConfigArgs) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), format),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_validate_impl(config_path: &Path) -> seo_guard::Result<()> {
    if !config_path.exists() {
        return Err(seo_guard::SeoGuardError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    // Parsing includes semantic validation
    FileConfigLoader::new().load_from_path(config_path)?;
    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: &str) -> i32 {
    match run_config_show_impl(config_path, format) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_show_impl(config_path: Option<&Path>, format: &str) -> seo_guard::Result<String> {
    let config = load_config(config_path, false)?;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        _ => Ok(format_config_text(&config)),
    }
}

fn format_config_text(config: &Config) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    if !config.checks.is_empty() {
        output.push_str("[checks]\n");
        for (id, enabled) in &config.checks {
            let _ = writeln!(output, "  {id} = {enabled}");
        }
        output.push('\n');
    }

    output.push_str("[analysis]\n");
    if let Some(keyword) = &config.analysis.focus_keyword {
        let _ = writeln!(output, "  focus_keyword = \"{keyword}\"");
    }
    let _ = writeln!(output, "  strict = {}", config.analysis.strict);

    output.push_str("\n[scan]\n");
    let _ = writeln!(output, "  extensions = {:?}", config.scan.extensions);
    if !config.scan.exclude.is_empty() {
        output.push_str("  exclude = [\n");
        for pattern in &config.scan.exclude {
            let _ = writeln!(output, "    \"{pattern}\",");
        }
        output.push_str("  ]\n");
    }

    output
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
