use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// Ширина текстовой полосы прогресса по умолчанию
pub const DEFAULT_BAR_LENGTH: usize = 50;

/// Строка прогресса вида `Progress: [=====     ] 40%`.
///
/// `total == 0` считается завершённой операцией, `current > total` обрезается до 100%.
/// Полоса рисуется на одну позицию короче заполненной доли.
pub fn format_progress_line(current: u64, total: u64, bar_length: usize) -> String {
    let progress = if total == 0 {
        1.0
    } else {
        (current as f64 / total as f64).min(1.0)
    };

    let filled = (progress * bar_length as f64).round_ties_even() as usize;
    let arrow = "=".repeat(filled.saturating_sub(1));
    let spaces = " ".repeat(bar_length - arrow.len());
    let percent = (progress * 100.0) as u64;

    format!("Progress: [{arrow}{spaces}] {percent}%")
}

/// Записать перезаписываемую строку прогресса (завершается `\r`)
pub fn report_progress_to<W: Write>(sink: &mut W, current: u64, total: u64) -> io::Result<()> {
    write!(
        sink,
        "{}\r",
        format_progress_line(current, total, DEFAULT_BAR_LENGTH)
    )?;
    sink.flush()
}

/// Отрисовать прогресс в stderr
pub fn report_progress(current: u64, total: u64) {
    let _ = report_progress_to(&mut io::stderr().lock(), current, total);
}

/// Типы операций для адаптивных спиннеров
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressType {
    /// Короткий текст, один-два запроса
    Fast,
    /// Обычная статья
    Medium,
    /// Длинный документ, несколько batch запросов
    Slow,
}

/// Стили спиннеров для разных операций
#[derive(Debug, Clone)]
pub struct ProgressConfig {
    pub spinner_chars: &'static str,
    pub tick_interval: Duration,
    pub color: &'static str,
}

impl ProgressType {
    /// Подобрать тип по числу предложений
    pub fn for_sentences(count: usize) -> Self {
        match count {
            0..=20 => ProgressType::Fast,
            21..=200 => ProgressType::Medium,
            _ => ProgressType::Slow,
        }
    }

    /// Получить конфигурацию для типа операции
    pub fn config(self) -> ProgressConfig {
        match self {
            ProgressType::Fast => ProgressConfig {
                spinner_chars: "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏",
                tick_interval: Duration::from_millis(80),
                color: "cyan",
            },
            ProgressType::Medium => ProgressConfig {
                spinner_chars: "⠋⠙⠚⠞⠖⠦⠴⠲⠳⠓",
                tick_interval: Duration::from_millis(120),
                color: "blue",
            },
            ProgressType::Slow => ProgressConfig {
                spinner_chars: "⠋⠙⠚⠒⠂⠂⠒⠲⠴⠦⠖⠒⠐⠐⠒⠓⠋",
                tick_interval: Duration::from_millis(150),
                color: "yellow",
            },
        }
    }

    /// Создать спиннер; в не-терминале indicatif ничего не рисует
    pub fn create_spinner(self, message: &str) -> AdaptiveSpinner {
        let config = self.config();
        let spinner = ProgressBar::new_spinner();

        let template = format!("{{spinner:.{}}} {{msg}}", config.color);
        let style = ProgressStyle::default_spinner()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars(config.spinner_chars);

        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(config.tick_interval);

        AdaptiveSpinner { spinner, config }
    }
}

/// Спиннер поверх indicatif с цветным завершением
pub struct AdaptiveSpinner {
    spinner: ProgressBar,
    config: ProgressConfig,
}

impl AdaptiveSpinner {
    /// Завершить с успехом
    pub fn finish_success(&self, message: &str) {
        let colored_msg = match self.config.color {
            "blue" => message.blue().to_string(),
            "cyan" => message.cyan().to_string(),
            "yellow" => message.yellow().to_string(),
            _ => message.green().to_string(),
        };

        self.spinner.finish_with_message(colored_msg);
    }

    /// Завершить с ошибкой
    pub fn finish_error(&self, message: &str) {
        let error_msg = format!("✗ {message}");
        self.spinner.finish_with_message(error_msg.red().to_string());
    }
}
