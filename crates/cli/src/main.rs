use ai::HttpEmbeddingProvider;
use anyhow::{Context, Result};
use clap::Parser;
use cli::{format_numbered_list, report_progress, AppConfig, ConfigLoader, ProgressType};
use common::{init_structured_logging, LoggingConfig, OperationTimer};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use summarizer::{RelevanceExtractor, ScoredSentence, SentenceSegmenter};
use tracing::{debug, Level};

#[derive(Parser)]
#[command(name = "summarize")]
#[command(about = "Extractive summary: keeps the sentences closest in meaning to the whole text")]
#[command(version)]
struct Cli {
    /// Файлы для обработки (если не указаны - читается stdin)
    files: Vec<PathBuf>,

    /// Доля предложений в результате, от 0 до 1
    #[arg(short, long)]
    fraction: Option<f64>,

    /// Путь к TOML конфигурации
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Базовый URL API эмбеддингов
    #[arg(long)]
    endpoint: Option<String>,

    /// Имя модели эмбеддингов
    #[arg(long)]
    model: Option<String>,

    /// Вывести предложения пронумерованным списком
    #[arg(long, conflicts_with = "json")]
    numbered: bool,

    /// Вывести JSON (index, text, score)
    #[arg(long)]
    json: bool,

    /// Логи в JSON формате
    #[arg(long)]
    json_logs: bool,

    /// Подробные логи
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy)]
enum OutputMode {
    Plain,
    Numbered,
    Json,
}

struct Document {
    source: String,
    text: String,
}

#[derive(Serialize)]
struct DocumentSummary<'a> {
    source: &'a str,
    sentences: &'a [ScoredSentence<'a>],
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.numbered {
            OutputMode::Numbered
        } else {
            OutputMode::Plain
        }
    }

    /// Флаги командной строки имеют наивысший приоритет
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(fraction) = self.fraction {
            config.summarizer.top_fraction = fraction;
        }
        if let Some(endpoint) = &self.endpoint {
            config.embedding.endpoint = endpoint.clone();
        }
        if let Some(model) = &self.model {
            config.embedding.model_name = model.clone();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    dotenv::dotenv().ok(); // Загружаем .env если есть

    init_structured_logging(LoggingConfig {
        level: if cli.verbose { Level::DEBUG } else { Level::WARN },
        json_output: cli.json_logs,
        ..LoggingConfig::default()
    })?;

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_path(path.clone());
    }
    let (mut config, source) = loader.load()?;
    debug!(?source, "Configuration loaded");

    cli.apply_overrides(&mut config);
    config.validate()?;

    let provider = HttpEmbeddingProvider::new(config.embedding.clone())
        .context("Failed to initialize embedding provider")?;
    let extractor = RelevanceExtractor::new().with_config(config.summarizer);

    let documents = read_documents(&cli.files)?;
    let total = documents.len();
    let mode = cli.output_mode();
    let mut stdout = io::stdout().lock();

    for (position, document) in documents.iter().enumerate() {
        let selected = summarize_document(&extractor, &provider, document, total == 1)?;

        if total > 1 && !matches!(mode, OutputMode::Json) {
            writeln!(stdout, "==> {} <==", document.source)?;
        }
        write_output(&mut stdout, mode, &document.source, &selected)?;

        if total > 1 {
            report_progress((position + 1) as u64, total as u64);
        }
    }

    if total > 1 {
        eprintln!();
    }

    Ok(())
}

fn read_documents(files: &[PathBuf]) -> Result<Vec<Document>> {
    if files.is_empty() {
        let text = io::read_to_string(io::stdin()).context("Failed to read stdin")?;
        return Ok(vec![Document {
            source: "<stdin>".to_string(),
            text,
        }]);
    }

    files
        .iter()
        .map(|path| {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(Document {
                source: path.display().to_string(),
                text,
            })
        })
        .collect()
}

fn summarize_document<'a>(
    extractor: &RelevanceExtractor,
    provider: &HttpEmbeddingProvider,
    document: &'a Document,
    show_spinner: bool,
) -> Result<Vec<ScoredSentence<'a>>> {
    let mut timer = OperationTimer::new("summarize_document");
    timer.add_field("source", &document.source);

    let sentences = extractor.segmenter().segment(&document.text);
    let sentence_count = sentences.len();
    let spinner = show_spinner.then(|| {
        ProgressType::for_sentences(sentence_count)
            .create_spinner(&format!("Scoring {sentence_count} sentences..."))
    });

    let result = extractor.select_segmented(&document.text, sentences, provider);

    if let Some(spinner) = &spinner {
        match &result {
            Ok(selected) => spinner.finish_success(&format!(
                "✓ Selected {} of {} sentences",
                selected.len(),
                sentence_count
            )),
            Err(e) => spinner.finish_error(&e.to_string()),
        }
    }

    if let Ok(selected) = &result {
        timer.add_field("items_count", selected.len());
    }
    timer.finish_with_result(&result);

    result.with_context(|| format!("Failed to summarize {}", document.source))
}

fn write_output<W: Write>(
    out: &mut W,
    mode: OutputMode,
    source: &str,
    selected: &[ScoredSentence<'_>],
) -> Result<()> {
    match mode {
        OutputMode::Plain => {
            let texts: Vec<&str> = selected.iter().map(|s| s.text).collect();
            writeln!(out, "{}", texts.join(" "))?;
        }
        OutputMode::Numbered => {
            let texts: Vec<&str> = selected.iter().map(|s| s.text).collect();
            write!(out, "{}", format_numbered_list(&texts))?;
        }
        OutputMode::Json => {
            let summary = DocumentSummary {
                source,
                sentences: selected,
            };
            writeln!(out, "{}", serde_json::to_string(&summary)?)?;
        }
    }
    Ok(())
}
