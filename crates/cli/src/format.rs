use std::fmt::Write;

/// Пронумерованный список: по строке `"{n}. {item} "` на элемент, нумерация с 1.
///
/// Каждая строка завершается пробелом и `\n`, включая последнюю.
pub fn format_numbered_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .enumerate()
        .fold(String::new(), |mut out, (i, item)| {
            let _ = writeln!(out, "{}. {} ", i + 1, item.as_ref());
            out
        })
}
